use skin_storefront::{async_trait, Host, InvoiceStatus, ProfileView, Storefront, StorefrontConfig};
use std::io::BufRead;

/// A host that prints to the terminal and asks whether invoices were paid.
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
        println!("Pay at {invoice_link}, then type paid, failed or cancelled:");

        let line = std::io::stdin()
            .lock()
            .lines()
            .next()
            .and_then(|line| line.ok())
            .unwrap_or_default();

        line.trim().parse().unwrap_or(InvoiceStatus::Pending)
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
    let user_id = std::env::var("USER_ID").expect("USER_ID missing").parse::<i64>()?;
    let name = std::env::args().nth(1).expect("Usage: buy_item <item name>");
    let storefront = Storefront::from_config(&config, ConsoleHost { user_id: Some(user_id) })?;

    if let ProfileView::Loaded(profile) = storefront.load_profile().await {
        println!("Trade link: {}", profile.trade_link.as_deref().unwrap_or("not linked"));
    }

    storefront.search(&name).await?;

    let Some(item) = storefront.listing().items.into_iter().next() else {
        println!("Nothing found for {name}");
        return Ok(());
    };
    let status = storefront.buy_item(&item).await?;

    println!("Invoice {status}");

    Ok(())
}
