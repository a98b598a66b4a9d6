//! Product detail loading
//!
//! A detail view fetches exactly one product. Every failure collapses into
//! [`DetailState::NotFound`]: the view offers a way back instead of an
//! error page.

use crate::cart::CartStore;
use crate::utils::ticket::{Generation, LoadTicket};
use shared::models::{Product, ProductId};
use std::time::Duration;
use storefront_client::{CatalogApi, ClientResult};

/// Render state of the detail view
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Idle,
    Loading,
    Loaded(Product),
    NotFound,
}

/// Quantity picker for add-to-cart; never below 1, no upper bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantitySelector {
    value: u32,
}

impl Default for QuantitySelector {
    fn default() -> Self {
        Self { value: 1 }
    }
}

impl QuantitySelector {
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1).max(1);
    }

    /// Values below 1 become 1
    pub fn set(&mut self, value: i64) {
        self.value = u32::try_from(value.max(1)).unwrap_or(u32::MAX);
    }
}

#[derive(Debug, Default)]
pub struct ProductDetailLoader {
    product_id: Option<ProductId>,
    state: DetailState,
    quantity: QuantitySelector,
    generation: Generation,
    loading_delay: Duration,
}

impl ProductDetailLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_loading_delay(mut self, delay: Duration) -> Self {
        self.loading_delay = delay;
        self
    }

    /// Fetch `product_id` and show it
    ///
    /// Returns whether the result was applied.
    pub async fn load(&mut self, api: &dyn CatalogApi, product_id: ProductId) -> bool {
        let ticket = self.begin_load(product_id);
        let result = api.fetch_product(product_id).await;
        if result.is_ok() && !self.loading_delay.is_zero() {
            tokio::time::sleep(self.loading_delay).await;
        }
        self.finish_load(ticket, result)
    }

    /// Start showing `product_id`; any earlier fetch becomes stale
    pub fn begin_load(&mut self, product_id: ProductId) -> LoadTicket {
        self.product_id = Some(product_id);
        self.state = DetailState::Loading;
        self.quantity = QuantitySelector::default();
        self.generation.issue()
    }

    /// Apply a fetch result; stale tickets are ignored and return `false`
    pub fn finish_load(&mut self, ticket: LoadTicket, result: ClientResult<Product>) -> bool {
        if !self.generation.is_current(ticket) {
            tracing::debug!(product_id = ?self.product_id, "Discarding stale product result");
            return false;
        }

        self.state = match result {
            Ok(product) => {
                tracing::debug!(product_id = product.id, "Product loaded");
                DetailState::Loaded(product)
            }
            Err(e) => {
                tracing::warn!(product_id = ?self.product_id, error = %e, "Error fetching product");
                DetailState::NotFound
            }
        };
        true
    }

    /// The view went away; in-flight results will be dropped
    pub fn detach(&mut self) {
        self.generation.invalidate();
        self.product_id = None;
        self.state = DetailState::Idle;
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn product_id(&self) -> Option<ProductId> {
        self.product_id
    }

    pub fn product(&self) -> Option<&Product> {
        match &self.state {
            DetailState::Loaded(product) => Some(product),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.state == DetailState::NotFound
    }

    pub fn quantity(&self) -> &QuantitySelector {
        &self.quantity
    }

    pub fn quantity_mut(&mut self) -> &mut QuantitySelector {
        &mut self.quantity
    }

    /// Add the selected quantity to `cart`, one unit at a time
    ///
    /// Returns the number of units added (0 when no product is shown).
    pub fn add_to_cart(&self, cart: &mut CartStore) -> u32 {
        let Some(product) = self.product() else {
            return 0;
        };
        let units = self.quantity.value();
        for _ in 0..units {
            cart.add_to_cart(product);
        }
        units
    }
}
