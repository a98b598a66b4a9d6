use std::sync::Arc;

use crate::cart::CartStore;
use crate::catalog::{CatalogResult, CatalogStore, SearchCoordinator};
use crate::core::{Config, StorefrontResult};
use crate::detail::ProductDetailLoader;
use crate::storage::{LocalStorage, RedbStorage};
use storefront_client::{CatalogApi, ProductId};

/// Result of pressing "Proceed to Checkout"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// There is no payment backend
    NotImplemented,
}

/// Storefront - owner of every store
///
/// Built once at startup and handed to the presentation layer by
/// reference. Nothing is reachable through globals.
pub struct Storefront {
    config: Config,
    api: Arc<dyn CatalogApi>,
    cart: CartStore,
    catalog: CatalogStore,
    search: SearchCoordinator,
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("config", &self.config)
            .field("api", &"<CatalogApi>")
            .field("cart", &self.cart)
            .field("catalog", &self.catalog)
            .finish()
    }
}

impl Storefront {
    /// Build the HTTP client and open local storage from `config`
    ///
    /// If the storage database cannot be opened the cart runs on a
    /// throwaway in-memory database instead.
    pub fn initialize(config: &Config) -> StorefrontResult<Self> {
        let api = Arc::new(config.client_config().build_http_client()?);

        let storage_path = config.storage_path();
        let storage: Arc<dyn LocalStorage> = match RedbStorage::open(&storage_path) {
            Ok(storage) => Arc::new(storage),
            Err(e) => {
                tracing::warn!(
                    path = %storage_path.display(),
                    error = %e,
                    "Local storage unavailable, cart will not survive restart"
                );
                Arc::new(RedbStorage::open_in_memory()?)
            }
        };

        Ok(Self::with_parts(config.clone(), api, storage))
    }

    /// Assemble from explicit parts
    pub fn with_parts(
        config: Config,
        api: Arc<dyn CatalogApi>,
        storage: Arc<dyn LocalStorage>,
    ) -> Self {
        let cart = CartStore::load(storage);
        let catalog = CatalogStore::new(config.page_size).with_loading_delay(config.loading_delay);
        Self {
            config,
            api,
            cart,
            catalog,
            search: SearchCoordinator::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn api(&self) -> &dyn CatalogApi {
        self.api.as_ref()
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut CatalogStore {
        &mut self.catalog
    }

    // ========== Catalog ==========

    /// Initial catalog fetch
    pub async fn load_catalog(&mut self) -> CatalogResult<()> {
        self.catalog.load(self.api.as_ref()).await
    }

    /// "Try again" after a failed fetch
    pub async fn reload_catalog(&mut self) -> CatalogResult<()> {
        self.search = SearchCoordinator::new();
        self.catalog.reload(self.api.as_ref()).await
    }

    pub fn search_input(&self) -> &str {
        self.search.input()
    }

    /// Search box text changed
    pub fn set_search_input(&mut self, text: impl Into<String>) {
        self.search.set_input(text, &mut self.catalog);
    }

    /// Search box submitted
    pub fn submit_search(&mut self) {
        self.search.submit(&mut self.catalog);
    }

    // ========== Product detail ==========

    /// Load the detail view for `product_id`
    pub async fn open_product(&self, product_id: ProductId) -> ProductDetailLoader {
        let mut loader = ProductDetailLoader::new().with_loading_delay(self.config.loading_delay);
        loader.load(self.api.as_ref(), product_id).await;
        loader
    }

    /// Add the detail view's product in its selected quantity
    pub fn add_detail_to_cart(&mut self, loader: &ProductDetailLoader) -> u32 {
        loader.add_to_cart(&mut self.cart)
    }

    // ========== Checkout ==========

    /// Checkout is a stub; the cart is left untouched
    pub fn checkout(&self) -> CheckoutOutcome {
        tracing::info!(
            count = self.cart.count(),
            total = %self.cart.total_price(),
            "Checkout requested, not implemented"
        );
        CheckoutOutcome::NotImplemented
    }
}
