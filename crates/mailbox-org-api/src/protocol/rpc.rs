//! JSON-RPC request/response protocol structures.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{MailboxError, MailboxResult};

/// JSON-RPC protocol version sent with every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// A JSON-RPC 2.0 request to the mailbox.org API.
///
/// The API expects `params` to always be an object (empty for parameterless
/// calls such as `deauth`) and the `id` to be a string.
#[derive(Debug, Serialize)]
pub struct RpcRequest<'a> {
    pub method: &'a str,
    pub params: &'a Map<String, Value>,
    pub jsonrpc: &'static str,
    pub id: String,
}

impl<'a> RpcRequest<'a> {
    /// Create a new request with the given id, method and params.
    pub fn new(id: String, method: &'a str, params: &'a Map<String, Value>) -> Self {
        Self {
            method,
            params,
            jsonrpc: JSONRPC_VERSION,
            id,
        }
    }
}

/// A JSON-RPC 2.0 error payload from the mailbox.org API.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcError {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

impl RpcError {
    /// Code reported when the server's `error` carries no integer code.
    pub const UNKNOWN_CODE: i64 = 0;

    /// Interpret whatever the server put under `error`.
    ///
    /// A well-formed object is taken as is. Anything else still becomes an
    /// API error: the code falls back to [`Self::UNKNOWN_CODE`], the message
    /// to the `message` field or the bare string, and the raw value is kept
    /// in `data`.
    #[must_use]
    pub fn from_raw(error: Value) -> Self {
        if let Ok(parsed) = serde_json::from_value::<RpcError>(error.clone()) {
            return parsed;
        }

        let code = error
            .get("code")
            .and_then(|code| match code {
                Value::Number(n) => n.as_i64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            })
            .unwrap_or(Self::UNKNOWN_CODE);
        let message = match &error {
            Value::String(s) => s.clone(),
            other => other
                .get("message")
                .map(|m| m.as_str().map_or_else(|| m.to_string(), str::to_string))
                .unwrap_or_default(),
        };

        Self {
            code,
            message,
            data: Some(error),
        }
    }
}

impl std::fmt::Display for RpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mailbox.org API error {}: {}", self.code, self.message)
    }
}

impl From<RpcError> for MailboxError {
    fn from(err: RpcError) -> Self {
        MailboxError::from_api_error(err.code, err.message, err.data)
    }
}

/// A parsed JSON-RPC 2.0 response.
///
/// A `{"result": null}` body is a successful response with a null result,
/// which is why this is built from the raw object instead of a struct with
/// `Option` fields.
#[derive(Debug, Clone)]
pub enum RpcResponse {
    Result(Value),
    Error(RpcError),
}

impl RpcResponse {
    /// Classify a decoded response body.
    ///
    /// `result` wins when present; otherwise any `error` value becomes an
    /// API error. A body with neither is a [`MailboxError::Protocol`].
    pub fn from_value(value: Value) -> MailboxResult<Self> {
        let Value::Object(mut body) = value else {
            return Err(MailboxError::Protocol {
                reason: "response body is not a JSON object".into(),
            });
        };

        if let Some(result) = body.remove("result") {
            return Ok(RpcResponse::Result(result));
        }

        if let Some(error) = body.remove("error") {
            return Ok(RpcResponse::Error(RpcError::from_raw(error)));
        }

        Err(MailboxError::Protocol {
            reason: "response has neither result nor error".into(),
        })
    }

    /// Unwrap into the result value, converting an error object into
    /// [`MailboxError::Api`].
    pub fn into_result(self) -> MailboxResult<Value> {
        match self {
            RpcResponse::Result(value) => Ok(value),
            RpcResponse::Error(error) => Err(error.into()),
        }
    }
}
