//! Open an API session, call an authenticated method, and close it again.
//!
//! Requires `MAILBOX_API_USER` and `MAILBOX_API_PASSWORD` env vars
//! (or a `mailbox-api.toml` file).
//!
//! ```bash
//! MAILBOX_API_USER=xxx MAILBOX_API_PASSWORD=yyy cargo run --example auth
//! ```

use mailbox_org_api::{MailboxClient, MailboxConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = MailboxConfig::discover(None)?;
    println!("Connecting to {}...", config.api_url);

    let mut client = MailboxClient::new(&config)?;
    client.authenticate(&config.username, &config.password)?;
    println!(
        "Authentication successful! Level: {}",
        client.session().level().unwrap_or("unknown")
    );

    let greeting = client.hello_innerworld()?;
    println!("Inner world says: {greeting}");

    let account = client.fetch_account(&config.username)?;
    println!("Account {} ({:?}), plan {:?}", account.account, account.account_type, account.plan);

    if client.deauthenticate()? {
        println!("Session closed.");
    }
    Ok(())
}
