//! Account protocol types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Account record from `account.get`.
///
/// Nested groups (addresses, bank, contact, contract) are kept as raw JSON
/// objects since their shape varies between account types.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Account {
    /// Account name.
    pub account: String,

    /// Account type, e.g. `BMBO`.
    #[serde(rename = "type")]
    pub account_type: Option<String>,

    /// Account status as reported by the server (e.g. `aktiv`).
    pub status: Option<String>,
    pub language: Option<String>,
    pub company: Option<String>,
    pub ustid: Option<String>,
    pub plan: Option<String>,
    pub memo: Option<String>,
    pub payment_type: Option<String>,
    pub invoice_type: Option<String>,
    pub monthly_fee: Option<Value>,
    pub dta_allowed: Option<Value>,
    pub old_customer: Option<Value>,

    #[serde(default)]
    pub address_main: Map<String, Value>,
    #[serde(default)]
    pub address_payment: Map<String, Value>,
    #[serde(default)]
    pub bank: Map<String, Value>,
    #[serde(default)]
    pub contact: Map<String, Value>,
    #[serde(default)]
    pub av_contract: Map<String, Value>,
    pub tarifflimits: Option<Value>,

    /// Any other field the server returned.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
