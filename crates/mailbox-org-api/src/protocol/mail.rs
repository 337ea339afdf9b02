//! Mailbox protocol types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Mailbox record from `mail.get` / `mail.list`.
///
/// Quota fields are kept as raw JSON because the server reports them as
/// numbers while `mail.set` accepts them as strings. Fields not listed here
/// end up in [`Mail::extra`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Mail {
    /// The mail address.
    pub mail: String,

    /// Owning account.
    pub parent_uid: Option<String>,
    pub domain: Option<String>,

    /// Mailbox type: `inbox`, `inboxforward` or `forward`.
    #[serde(rename = "type")]
    pub mail_type: Option<String>,

    pub plan: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub birthday: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub company: Option<String>,
    pub street: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub cell_phone: Option<String>,
    pub language: Option<String>,
    pub memo: Option<String>,
    pub alternate_mail: Option<String>,
    pub allow_nets: Option<String>,
    pub uid_extern: Option<String>,
    pub password_hash: Option<String>,

    pub active: Option<bool>,
    pub inboxsave: Option<bool>,
    pub same_password_allowed: Option<bool>,
    pub require_password_reset: Option<bool>,

    #[serde(default)]
    pub forwards: Vec<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub possible_capabilities: Vec<String>,

    pub additional_mail_quota: Option<Value>,
    pub additional_cloud_quota: Option<Value>,

    pub creation_date: Option<String>,
    pub deletion_date: Option<String>,

    /// Any other field the server returned.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parameters for `mail.add`.
///
/// Defaults mirror what the service expects for a plain inbox: mails are kept
/// in the inbox, no forwards, empty memo, `en_EN` language.
#[derive(Debug, Clone, Serialize)]
pub struct NewMail {
    pub mail: String,
    pub password: String,
    pub plan: String,
    pub first_name: String,
    pub last_name: String,
    pub inboxsave: bool,
    pub forwards: Vec<String>,
    pub memo: String,
    pub language: String,
    pub uid_extern: Option<String>,
}

impl NewMail {
    /// Create a request with the required fields and default options.
    pub fn new(
        mail: impl Into<String>,
        password: impl Into<String>,
        plan: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            mail: mail.into(),
            password: password.into(),
            plan: plan.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            inboxsave: true,
            forwards: Vec::new(),
            memo: String::new(),
            language: "en_EN".into(),
            uid_extern: None,
        }
    }

    #[must_use]
    pub fn inboxsave(mut self, inboxsave: bool) -> Self {
        self.inboxsave = inboxsave;
        self
    }

    #[must_use]
    pub fn forwards(mut self, forwards: Vec<String>) -> Self {
        self.forwards = forwards;
        self
    }

    #[must_use]
    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn uid_extern(mut self, uid_extern: impl Into<String>) -> Self {
        self.uid_extern = Some(uid_extern.into());
        self
    }
}

/// Sort direction for `mail.list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Returns the API string for this order.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Optional paging and sorting for `mail.list`.
///
/// Unset fields are omitted from the request.
#[derive(Debug, Clone, Default)]
pub struct MailListOptions {
    pub page: Option<u32>,
    pub page_size: Option<i64>,
    pub sort_field: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl MailListOptions {
    /// Append the set options to a params object.
    pub(crate) fn apply(&self, params: &mut Map<String, Value>) {
        if let Some(page) = self.page {
            params.insert("page".into(), page.into());
        }
        if let Some(page_size) = self.page_size {
            params.insert("page_size".into(), page_size.into());
        }
        if let Some(field) = &self.sort_field {
            params.insert("sort_field".into(), field.clone().into());
        }
        if let Some(order) = self.sort_order {
            params.insert("sort_order".into(), order.as_str().into());
        }
    }
}
