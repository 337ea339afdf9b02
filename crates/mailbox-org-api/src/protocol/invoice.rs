//! Invoice protocol types and payload decoding.
//!
//! `account.invoice.get` returns the document as base64 text in the `bin`
//! field. The decoded bytes are compressed: zlib in practice, gzip on some
//! older invoices, so both framings are accepted.

use std::io::Read;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use flate2::read::{GzDecoder, ZlibDecoder};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{MailboxError, MailboxResult};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Status the server reports for an unpaid invoice.
pub const INVOICE_STATUS_OPEN: &str = "open";

/// One entry of `account.invoice.list`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct InvoiceSummary {
    pub invoice_id: String,
    /// Download token required by `account.invoice.get`.
    pub token: String,
    pub status: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "invoiceNumber")]
    pub invoice_number: Option<String>,
    pub amount: Option<Value>,
    #[serde(rename = "paymentType")]
    pub payment_type: Option<String>,
    #[serde(rename = "availableDownloadFileTypes", default)]
    pub available_file_types: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InvoiceSummary {
    /// Returns `true` if the invoice has not been paid yet.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status.as_deref() == Some(INVOICE_STATUS_OPEN)
    }
}

/// An invoice of a specific account.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub account: String,
    pub invoice_id: String,
    pub status: Option<String>,
    pub date: Option<String>,
    pub token: String,
}

impl Invoice {
    /// Build an invoice view from its list entry.
    #[must_use]
    pub fn from_summary(account: impl Into<String>, summary: InvoiceSummary) -> Self {
        Self {
            account: account.into(),
            invoice_id: summary.invoice_id,
            status: summary.status,
            date: summary.date,
            token: summary.token,
        }
    }
}

/// Downloadable invoice document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceFileType {
    Pdf,
    Csv,
    Xml,
}

impl InvoiceFileType {
    /// Returns the API string for this format.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceFileType::Pdf => "pdf",
            InvoiceFileType::Csv => "csv",
            InvoiceFileType::Xml => "xml",
        }
    }
}

/// Decode the `bin` field of an `account.invoice.get` result into raw bytes.
pub fn decode_invoice_payload(encoded: &str) -> MailboxResult<Vec<u8>> {
    let compact: String = encoded.split_whitespace().collect();
    let compressed = BASE64
        .decode(compact.as_bytes())
        .map_err(|e| MailboxError::InvoiceDecode {
            reason: format!("invalid base64: {e}"),
        })?;

    let mut bytes = Vec::new();
    let result = if compressed.starts_with(&GZIP_MAGIC) {
        GzDecoder::new(compressed.as_slice()).read_to_end(&mut bytes)
    } else {
        ZlibDecoder::new(compressed.as_slice()).read_to_end(&mut bytes)
    };
    result.map_err(|e| MailboxError::InvoiceDecode {
        reason: format!("decompression failed: {e}"),
    })?;

    Ok(bytes)
}
