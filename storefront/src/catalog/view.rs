//! Derivations over the catalog
//!
//! Filtered list and visible window are always computed from the source
//! list; nothing here holds state.

use shared::models::Product;

/// Default number of products shown before "load more"
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Trim and lower-case a raw search term
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Products whose title or category contains `needle`, in source order
///
/// `needle` must be normalized; an empty needle keeps every product.
pub fn filter_products(products: &[Product], needle: &str) -> Vec<Product> {
    if needle.is_empty() {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|product| product.matches(needle))
        .cloned()
        .collect()
}

/// The rendered subset of `filtered`
pub fn visible_window(filtered: &[Product], page_size: usize, showing_all: bool) -> &[Product] {
    if showing_all {
        filtered
    } else {
        &filtered[..filtered.len().min(page_size)]
    }
}

/// What the product grid should render
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView<'a> {
    /// Initial fetch has not completed
    Loading,
    /// Initial fetch failed; offer a full reload
    Failed { message: &'a str },
    /// The catalog itself has no products and no search is active
    EmptyCatalog,
    /// A search is active and matched nothing
    NoResults { term: &'a str },
    Products {
        visible: &'a [Product],
        /// Size of the filtered list
        total: usize,
        showing_all: bool,
        /// More products are hidden behind "load more"
        has_more: bool,
    },
}
