//! mailbox.org API protocol domain modules.
//!
//! This namespace groups wire-compatible JSON-RPC protocol structures by domain:
//! - [`rpc`]: JSON-RPC request/response/error envelope types.
//! - [`constants`]: method names, the auth header, and capability names.
//! - [`account`]: account record payloads.
//! - [`mail`]: mailbox record payloads and `mail.add`/`mail.list` parameters.
//! - [`invoice`]: invoice payloads and document decoding.

pub mod account;
pub mod constants;
pub mod invoice;
pub mod mail;
pub mod rpc;

pub use account::Account;
pub use constants::{AUTH_HEADER, DOMAIN_CAPABILITIES, MAIL_CAPABILITIES, Methods};
pub use invoice::{
    INVOICE_STATUS_OPEN, Invoice, InvoiceFileType, InvoiceSummary, decode_invoice_payload,
};
pub use mail::{Mail, MailListOptions, NewMail, SortOrder};
pub use rpc::{JSONRPC_VERSION, RpcError, RpcRequest, RpcResponse};
