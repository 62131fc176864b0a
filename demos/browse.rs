use skin_storefront::{async_trait, Host, InvoiceStatus, Storefront, StorefrontConfig, Tab};

/// A host that prints to the terminal.
struct ConsoleHost {
    user_id: Option<i64>,
}

#[async_trait]
impl Host for ConsoleHost {
    fn user_id(&self) -> Option<i64> {
        self.user_id
    }

    fn ready(&self) {}

    fn hide_main_button(&self) {}

    async fn open_invoice(&self, invoice_link: &str) -> InvoiceStatus {
        println!("Open {invoice_link} to pay");
        InvoiceStatus::Pending
    }

    fn switch_inline_query(&self, query: &str) {
        println!("Share: {query}");
    }

    async fn alert(&self, message: &str) {
        println!("! {message}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = StorefrontConfig::from_env()?;
    let user_id = std::env::var("USER_ID").ok()
        .and_then(|user_id| user_id.parse().ok());
    let storefront = Storefront::from_config(&config, ConsoleHost { user_id })?;
    let query = std::env::args().nth(1).unwrap_or_default();

    storefront.initialize().await?;
    storefront.switch_tab(Tab::Marketplace).await?;

    if !query.is_empty() {
        storefront.search(&query).await?;
    }

    // Two more pages at most.
    for _ in 0..2 {
        storefront.load_more().await?;
    }

    let listing = storefront.listing();

    if listing.is_nothing_found() {
        println!("Nothing found");
    }

    for item in &listing.items {
        println!(
            "{:>10}  {:>6} ⭐  ≈ ${:<8}  {}",
            item.id,
            item.price_stars,
            item.price_usd.map(|usd| usd.to_string()).unwrap_or_else(|| String::from("?")),
            item.name,
        );
    }

    Ok(())
}
