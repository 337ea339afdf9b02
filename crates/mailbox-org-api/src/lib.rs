//! # mailbox-org-api
//!
//! A Rust client for the [mailbox.org Business API](https://api.mailbox.org/v1/doc/methods/index.html),
//! a JSON-RPC 2.0 interface over HTTPS for managing accounts, domains,
//! mailboxes and invoices.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mailbox_org_api::{MailboxClient, MailboxConfig};
//!
//! fn main() -> mailbox_org_api::MailboxResult<()> {
//!     // Load config from environment or mailbox-api.toml
//!     let config = MailboxConfig::discover(None)?;
//!
//!     let mut client = MailboxClient::new(&config)?;
//!     client.authenticate(&config.username, &config.password)?;
//!
//!     let account = client.fetch_account(&config.username)?;
//!     println!("Plan: {:?}", account.plan);
//!
//!     for invoice_id in client.account_invoice_ids(&config.username)? {
//!         println!("Invoice: {invoice_id}");
//!     }
//!
//!     client.deauthenticate()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Layers
//!
//! | Layer | Module | Role |
//! |-------|--------|------|
//! | Transport | [`client`] | Envelope, sequence ids, `HPLS-AUTH`, error mapping |
//! | Validation | [`validation`] | Attribute schemas and capability allow-lists |
//! | Façade | [`MailboxClient`] methods | One call per API method |
//!
//! Every façade method is a thin wrapper over [`MailboxClient::send`], which
//! is public for methods this crate does not wrap.
//!
//! ## Configuration
//!
//! See [`MailboxConfig`] for the full configuration reference.
//! The simplest setup uses environment variables:
//!
//! ```bash
//! export MAILBOX_API_USER="your-account"
//! export MAILBOX_API_PASSWORD="your-password"
//! ```
//!
//! Or a `mailbox-api.toml` file:
//!
//! ```toml
//! username = "your-account"
//! password = "your-password"
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod protocol;
pub mod session;
pub mod validation;

// ─── Public re-exports ──────────────────────────────────────────────────

pub use client::MailboxClient;
pub use config::MailboxConfig;
pub use error::{MailboxError, MailboxResult};
pub use session::Session;
pub use validation::Attributes;
