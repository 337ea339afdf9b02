//! List the account's invoices and save the newest one as PDF.
//!
//! ```bash
//! MAILBOX_API_USER=xxx MAILBOX_API_PASSWORD=yyy cargo run --example invoices
//! ```

use mailbox_org_api::{MailboxClient, MailboxConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = MailboxConfig::discover(None)?;
    let mut client = MailboxClient::new(&config)?;
    client.authenticate(&config.username, &config.password)?;

    let invoices = client.account_invoice_summaries(&config.username)?;
    for invoice in &invoices {
        println!(
            "{}  {}  {}",
            invoice.invoice_id,
            invoice.date.as_deref().unwrap_or("-"),
            invoice.status.as_deref().unwrap_or("-")
        );
    }

    let newest = invoices.first().ok_or("No invoices found")?;
    let pdf = client.account_invoice_pdf(&config.username, &newest.invoice_id)?;
    let path = format!("{}.pdf", newest.invoice_id);
    std::fs::write(&path, &pdf)?;
    println!("Saved {path} ({} bytes)", pdf.len());

    client.deauthenticate()?;
    Ok(())
}
