use shared::util::{StarRating, format_price, truncate_text};
use storefront::{CatalogView, Config, Storefront, init_logger_with_file};

/// Title width in the product listing
const TITLE_WIDTH: usize = 48;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!(catalog = %config.catalog_base_url, "Storefront starting...");

    let mut storefront = Storefront::initialize(&config)?;

    if let Err(e) = storefront.load_catalog().await {
        tracing::error!("Catalog unavailable: {}", e);
        return Err(e.into());
    }

    render_catalog(&storefront);
    render_cart(&storefront);

    Ok(())
}

fn render_catalog(storefront: &Storefront) {
    match storefront.catalog().view() {
        CatalogView::Loading => println!("Loading products..."),
        CatalogView::Failed { message } => println!("Something went wrong: {}", message),
        CatalogView::EmptyCatalog => println!("No products available."),
        CatalogView::NoResults { term } => println!("No products found for \"{}\".", term),
        CatalogView::Products {
            visible,
            total,
            has_more,
            ..
        } => {
            println!("All Products ({})", total);
            for product in visible {
                let stars = StarRating::from_rate(product.rating.rate);
                println!(
                    "  #{:<4} {:<width$} {:>10}  {}{}{} ({})",
                    product.id,
                    truncate_text(&product.title, TITLE_WIDTH),
                    format_price(product.price),
                    "*".repeat(stars.full as usize),
                    if stars.half { "+" } else { "" },
                    "-".repeat(stars.empty as usize),
                    product.rating.count,
                    width = TITLE_WIDTH + 3,
                );
            }
            if has_more {
                println!("  ... {} more", total - visible.len());
            }
        }
    }
}

fn render_cart(storefront: &Storefront) {
    let cart = storefront.cart();
    if cart.is_empty() {
        println!("Your cart is empty.");
        return;
    }
    println!("Cart ({} items)", cart.count());
    for line in cart.lines() {
        println!(
            "  {} x{} {}",
            truncate_text(&line.product.title, TITLE_WIDTH),
            line.quantity,
            format_price(line.subtotal()),
        );
    }
    println!("Total: {}", format_price(cart.total_price()));
}
