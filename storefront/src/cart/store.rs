//! CartStore - the shopping cart
//!
//! Lines are kept in insertion order, one per product id. Count and total
//! are derived from the lines on every read. After each mutation the whole
//! cart is written back to local storage (clearing drops the document);
//! when that write fails the store keeps working in memory and only logs.

use crate::storage::{LocalStorage, StorageResult};
use rust_decimal::Decimal;
use shared::models::{CartLine, Product, ProductId, cart_count, cart_total};
use shared::notification::Notification;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Local storage key holding the serialized cart
pub const CART_STORAGE_KEY: &str = "ecommerce-cart";

/// Notification channel capacity
const NOTIFICATION_CHANNEL_CAPACITY: usize = 64;

pub struct CartStore {
    lines: Vec<CartLine>,
    storage: Arc<dyn LocalStorage>,
    notification_tx: broadcast::Sender<Notification>,
    persistence_degraded: bool,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("lines", &self.lines.len())
            .field("storage", &"<LocalStorage>")
            .field("notification_tx", &"<broadcast::Sender>")
            .field("persistence_degraded", &self.persistence_degraded)
            .finish()
    }
}

impl CartStore {
    /// Restore the cart persisted in `storage`
    ///
    /// Never fails: a missing, unreadable or malformed document yields an
    /// empty cart.
    pub fn load(storage: Arc<dyn LocalStorage>) -> Self {
        let (notification_tx, _) = broadcast::channel(NOTIFICATION_CHANNEL_CAPACITY);
        let mut persistence_degraded = false;

        let lines = match storage.get_item(CART_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartLine>>(&raw) {
                Ok(lines) => sanitize(lines),
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding malformed persisted cart");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read persisted cart, starting empty");
                persistence_degraded = true;
                Vec::new()
            }
        };

        tracing::info!(lines = lines.len(), count = cart_count(&lines), "Cart loaded");

        Self {
            lines,
            storage,
            notification_tx,
            persistence_degraded,
        }
    }

    /// Subscribe to cart notifications
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.notification_tx.subscribe()
    }

    // ========== Mutations ==========

    /// Add one unit of `product`
    pub fn add_to_cart(&mut self, product: &Product) {
        match self.lines.iter_mut().find(|line| line.id() == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine::new(product.clone())),
        }
        tracing::debug!(product_id = product.id, count = self.count(), "Added to cart");
        self.commit(Notification::success("Product Added to Cart!"));
    }

    /// Remove the line for `product_id`; absent ids are ignored
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.id() != product_id);
        tracing::debug!(product_id, "Removed from cart");
        self.commit(Notification::info("Item removed from cart"));
    }

    /// Set the quantity of a line exactly; `<= 0` removes the line
    ///
    /// There is no upper bound: the catalog carries no stock levels.
    pub fn update_quantity(&mut self, product_id: ProductId, new_quantity: i32) {
        let Ok(quantity) = u32::try_from(new_quantity) else {
            return self.remove_from_cart(product_id);
        };
        if quantity == 0 {
            return self.remove_from_cart(product_id);
        }

        let Some(line) = self.lines.iter_mut().find(|line| line.id() == product_id) else {
            tracing::debug!(product_id, "Quantity update for product not in cart");
            return;
        };
        line.quantity = quantity;
        tracing::debug!(product_id, quantity, "Quantity updated");
        self.persist_or_degrade();
    }

    /// Empty the cart and drop the persisted document
    pub fn clear_cart(&mut self) {
        self.lines.clear();
        tracing::debug!("Cart cleared");
        let result = self.storage.remove_item(CART_STORAGE_KEY);
        self.record_write(result);
        // No subscriber is fine
        let _ = self.notification_tx.send(Notification::info("Cart cleared"));
    }

    // ========== Derived values ==========

    /// Lines in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == product_id)
    }

    /// Sum of all quantities
    pub fn count(&self) -> u64 {
        cart_count(&self.lines)
    }

    /// Sum of price × quantity, unrounded
    pub fn total_price(&self) -> Decimal {
        cart_total(&self.lines)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// True while the most recent storage read or write has failed
    pub fn is_persistence_degraded(&self) -> bool {
        self.persistence_degraded
    }

    // ========== Persistence ==========

    fn commit(&mut self, notification: Notification) {
        self.persist_or_degrade();
        // No subscriber is fine
        let _ = self.notification_tx.send(notification);
    }

    fn persist_or_degrade(&mut self) {
        let result = self.persist();
        self.record_write(result);
    }

    fn record_write(&mut self, result: StorageResult<()>) {
        match result {
            Ok(()) => {
                if self.persistence_degraded {
                    tracing::info!("Cart persistence recovered");
                }
                self.persistence_degraded = false;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to persist cart, continuing in memory");
                self.persistence_degraded = true;
            }
        }
    }

    fn persist(&self) -> StorageResult<()> {
        let raw = serde_json::to_string(&self.lines)?;
        self.storage.set_item(CART_STORAGE_KEY, &raw)
    }
}

/// Enforce one line per product id with quantity >= 1
fn sanitize(lines: Vec<CartLine>) -> Vec<CartLine> {
    let total = lines.len();
    let mut index: HashMap<ProductId, usize> = HashMap::with_capacity(total);
    let mut out: Vec<CartLine> = Vec::with_capacity(total);

    for line in lines.into_iter().filter(|line| line.quantity > 0) {
        match index.get(&line.id()) {
            Some(&pos) => {
                out[pos].quantity = out[pos].quantity.saturating_add(line.quantity);
            }
            None => {
                index.insert(line.id(), out.len());
                out.push(line);
            }
        }
    }

    if out.len() != total {
        tracing::warn!(
            stored = total,
            kept = out.len(),
            "Persisted cart contained empty or duplicate lines"
        );
    }
    out
}
