//! Per-client session state: request id sequence, token and access level.

use serde_json::Value;

/// Mutable state shared by all calls made through one client.
///
/// A session starts empty. A successful `auth` call stores the token and the
/// server-assigned access level; a successful `deauth` clears them again. The
/// request id sequence is never reset, so ids stay unique for the lifetime
/// of the session.
#[derive(Default, Clone)]
pub struct Session {
    sequence: u64,
    auth_token: Option<String>,
    level: Option<String>,
}

impl Session {
    /// Create an empty, unauthenticated session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the sequence and return the id for the next request.
    pub(crate) fn next_request_id(&mut self) -> String {
        self.sequence += 1;
        self.sequence.to_string()
    }

    /// Number of requests issued so far (the id of the last request).
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// The current session token, if authenticated.
    #[must_use]
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// The access level the server assigned at authentication.
    #[must_use]
    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    /// Store the token and level from an `auth` result.
    ///
    /// Returns `false` and leaves the session untouched when the `session`
    /// field is missing or falsy.
    pub(crate) fn establish(&mut self, auth_result: &Value) -> bool {
        let Some(session) = auth_result.get("session").filter(|v| is_truthy(v)) else {
            return false;
        };

        let token = match session {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        self.auth_token = Some(token);
        self.level = auth_result
            .get("level")
            .and_then(Value::as_str)
            .map(str::to_string);
        true
    }

    /// Forget the token and level.
    pub(crate) fn clear(&mut self) {
        self.auth_token = None;
        self.level = None;
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("sequence", &self.sequence)
            .field("level", &self.level)
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

/// JSON truthiness as the API uses it: `null`, `false`, `0`, `""`, `[]` and
/// `{}` are falsy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
