//! # Error Types
//!
//! Every failure the client can produce is a [`MailboxError`]. The variants
//! fall into three groups:
//!
//! - **Remote**: [`MailboxError::Api`] carries the server's JSON-RPC `error`
//!   object verbatim. Bad credentials, unknown records and rejected plans all
//!   arrive here.
//! - **Wire**: [`MailboxError::Transport`] for network/HTTP failures and
//!   [`MailboxError::Protocol`] for responses that do not follow the
//!   JSON-RPC contract.
//! - **Client-side**: validation failures raised before a request is sent.
//!
//! Nothing in this crate retries. Mail creation and deletion are not
//! idempotent, so retry policy belongs to the caller.

use thiserror::Error;

/// Convenient Result alias for mailbox.org API operations.
pub type MailboxResult<T> = std::result::Result<T, MailboxError>;

/// All errors that can occur when talking to the mailbox.org Business API.
#[derive(Error, Debug)]
pub enum MailboxError {
    // ─── Wire ───────────────────────────────────────────────────────
    /// The HTTP request could not be completed (connection refused, timeout,
    /// TLS failure, or a non-2xx status with a body that is not JSON).
    #[error("Transport error: {reason}")]
    Transport { reason: String },

    /// The response was not a JSON-RPC response: invalid JSON, or neither
    /// `result` nor `error` present.
    #[error("Protocol error: {reason}")]
    Protocol { reason: String },

    // ─── Remote ─────────────────────────────────────────────────────
    /// The server answered with a JSON-RPC `error` object.
    #[error("API error {code}: {message}")]
    Api {
        code: i64,
        message: String,
        data: Option<serde_json::Value>,
    },

    // ─── Validation ─────────────────────────────────────────────────
    /// An attribute name is not part of the record's update schema.
    #[error("Unknown {record} attribute '{name}'")]
    UnknownAttribute { record: &'static str, name: String },

    /// An attribute value has a different JSON type than the schema declares.
    #[error("Attribute '{name}' must be of type {expected}, {found} provided")]
    AttributeType {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A schema field marked as required was not supplied.
    #[error("Missing required {record} attribute '{name}'")]
    MissingAttribute {
        record: &'static str,
        name: &'static str,
    },

    /// A capability name is not in the allow-list for the target record.
    #[error("Unknown capability '{name}'")]
    UnknownCapability { name: String },

    // ─── Invoices ───────────────────────────────────────────────────
    /// No invoice with the given ID exists for the account.
    #[error("Invoice {invoice_id} not found for account {account}")]
    InvoiceNotFound { account: String, invoice_id: String },

    /// The invoice payload could not be base64-decoded or decompressed.
    #[error("Failed to decode invoice payload: {reason}")]
    InvoiceDecode { reason: String },

    // ─── Config ─────────────────────────────────────────────────────
    /// Configuration file error (missing, malformed, or invalid values).
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    // ─── I/O ────────────────────────────────────────────────────────
    /// Filesystem or I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MailboxError {
    /// Build an [`MailboxError::Api`] from the raw JSON-RPC error fields.
    pub fn from_api_error(
        code: i64,
        message: impl Into<String>,
        data: Option<serde_json::Value>,
    ) -> Self {
        MailboxError::Api {
            code,
            message: message.into(),
            data,
        }
    }

    /// Returns the server error code for [`MailboxError::Api`].
    #[must_use]
    pub fn api_code(&self) -> Option<i64> {
        match self {
            MailboxError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns `true` if the request never produced a usable HTTP exchange.
    #[must_use]
    pub fn is_transport_error(&self) -> bool {
        matches!(self, MailboxError::Transport { .. })
    }

    /// Returns `true` if the error was raised locally before any request
    /// reached the wire.
    #[must_use]
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            MailboxError::UnknownAttribute { .. }
                | MailboxError::AttributeType { .. }
                | MailboxError::MissingAttribute { .. }
                | MailboxError::UnknownCapability { .. }
        )
    }
}

// ─── From impls for external error types ────────────────────────────────

impl From<reqwest::Error> for MailboxError {
    fn from(err: reqwest::Error) -> Self {
        let reason = if err.is_timeout() {
            format!("request timed out: {err}")
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else {
            err.to_string()
        };
        MailboxError::Transport { reason }
    }
}

#[cfg(feature = "config-toml")]
impl From<toml::de::Error> for MailboxError {
    fn from(err: toml::de::Error) -> Self {
        MailboxError::Config {
            reason: err.to_string(),
        }
    }
}
