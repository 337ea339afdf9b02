//! Check connectivity to the mailbox.org API without credentials.
//!
//! ```bash
//! cargo run --example hello_world
//! ```

use mailbox_org_api::MailboxClient;
use mailbox_org_api::config::DEFAULT_API_URL;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let url = std::env::var("MAILBOX_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    println!("Contacting {url}...");

    let mut client = MailboxClient::with_url(&url)?;
    let greeting = client.hello_world()?;
    println!("Server says: {greeting}");

    Ok(())
}
