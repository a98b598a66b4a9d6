//! CatalogStore - product list, search and windowing
//!
//! The full catalog is fetched once. Searching narrows it to a filtered
//! list; the visible window is derived from the filtered list, the page
//! size and the show-all flag whenever it is read.

use super::search::SearchTarget;
use super::view::{
    CatalogView, DEFAULT_PAGE_SIZE, filter_products, normalize_term, visible_window,
};
use crate::utils::ticket::{Generation, LoadTicket};
use shared::models::Product;
use std::time::Duration;
use storefront_client::{CatalogApi, ClientError, ClientResult};
use thiserror::Error;

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to fetch products: {0}")]
    Fetch(#[from] ClientError),

    /// The store was reset while the fetch was in flight
    #[error("Catalog load superseded, result discarded")]
    Stale,
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Lifecycle of the catalog fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Nothing fetched yet
    #[default]
    Idle,
    Loading,
    Ready,
    /// Fetch failed; only an explicit reload tries again
    Failed(String),
}

#[derive(Debug)]
pub struct CatalogStore {
    products: Vec<Product>,
    /// Search term as entered
    search_term: String,
    filtered: Vec<Product>,
    page_size: usize,
    showing_all: bool,
    status: LoadStatus,
    generation: Generation,
    /// Cosmetic pause after a successful fetch
    loading_delay: Duration,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl CatalogStore {
    /// Empty store; a page size of 0 is raised to 1
    pub fn new(page_size: usize) -> Self {
        Self {
            products: Vec::new(),
            search_term: String::new(),
            filtered: Vec::new(),
            page_size: page_size.max(1),
            showing_all: false,
            status: LoadStatus::Idle,
            generation: Generation::new(),
            loading_delay: Duration::ZERO,
        }
    }

    pub fn with_loading_delay(mut self, delay: Duration) -> Self {
        self.loading_delay = delay;
        self
    }

    // ========== Loading ==========

    /// Fetch the catalog if it has never been fetched
    ///
    /// After success or failure this is a no-op; use [`Self::reload`] to try
    /// again.
    pub async fn load(&mut self, api: &dyn CatalogApi) -> CatalogResult<()> {
        if self.status != LoadStatus::Idle {
            tracing::debug!(status = ?self.status, "Catalog already fetched, skipping");
            return Ok(());
        }

        let ticket = self.begin_load();
        let result = api.fetch_products().await;
        if result.is_ok() && !self.loading_delay.is_zero() {
            tokio::time::sleep(self.loading_delay).await;
        }
        self.finish_load(ticket, result)
    }

    /// Discard everything and fetch again ("try again")
    pub async fn reload(&mut self, api: &dyn CatalogApi) -> CatalogResult<()> {
        tracing::info!("Reloading catalog");
        self.reset();
        self.load(api).await
    }

    /// Mark a fetch as started and return its ticket
    pub fn begin_load(&mut self) -> LoadTicket {
        self.status = LoadStatus::Loading;
        self.generation.issue()
    }

    /// Apply the result of the fetch started with `ticket`
    ///
    /// Results for superseded tickets are dropped without touching state.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: ClientResult<Vec<Product>>,
    ) -> CatalogResult<()> {
        if !self.generation.is_current(ticket) {
            tracing::debug!("Discarding stale catalog result");
            return Err(CatalogError::Stale);
        }

        match result {
            Ok(products) => {
                tracing::info!(count = products.len(), "Catalog loaded");
                self.products = products;
                self.status = LoadStatus::Ready;
                self.refilter();
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching products");
                self.status = LoadStatus::Failed(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Return to the initial state, dropping any in-flight fetch
    pub fn reset(&mut self) {
        self.generation.invalidate();
        self.products.clear();
        self.filtered.clear();
        self.search_term.clear();
        self.showing_all = false;
        self.status = LoadStatus::Idle;
    }

    // ========== Search & windowing ==========

    /// Narrow the catalog to products whose title or category contains
    /// `term` (trimmed, case-insensitive). Always returns to the windowed view.
    pub fn search(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.refilter();
        tracing::debug!(
            term = %self.search_term,
            results = self.filtered.len(),
            "Catalog searched"
        );
    }

    /// Reveal the whole filtered list
    pub fn load_more(&mut self) {
        self.showing_all = true;
    }

    /// Back to the first page
    pub fn show_less(&mut self) {
        self.showing_all = false;
    }

    fn refilter(&mut self) {
        let needle = normalize_term(&self.search_term);
        self.filtered = filter_products(&self.products, &needle);
        self.showing_all = false;
    }

    // ========== Derived values ==========

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Full catalog in source order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    /// Products currently rendered
    pub fn visible(&self) -> &[Product] {
        visible_window(&self.filtered, self.page_size, self.showing_all)
    }

    /// Search term as entered
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_searching(&self) -> bool {
        !self.search_term.trim().is_empty()
    }

    /// Number of products matching the current search
    pub fn result_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_showing_all(&self) -> bool {
        self.showing_all
    }

    pub fn has_more(&self) -> bool {
        !self.showing_all && self.filtered.len() > self.page_size
    }

    /// Which state the product grid is in
    pub fn view(&self) -> CatalogView<'_> {
        match &self.status {
            LoadStatus::Idle | LoadStatus::Loading => CatalogView::Loading,
            LoadStatus::Failed(message) => CatalogView::Failed { message },
            LoadStatus::Ready if self.filtered.is_empty() => {
                if self.is_searching() {
                    CatalogView::NoResults {
                        term: self.search_term.trim(),
                    }
                } else {
                    CatalogView::EmptyCatalog
                }
            }
            LoadStatus::Ready => CatalogView::Products {
                visible: self.visible(),
                total: self.filtered.len(),
                showing_all: self.showing_all,
                has_more: self.has_more(),
            },
        }
    }
}

impl SearchTarget for CatalogStore {
    fn search(&mut self, term: &str) {
        CatalogStore::search(self, term);
    }
}
