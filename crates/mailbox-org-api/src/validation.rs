//! # Parameter Validation
//!
//! "Set"-style calls (`mail.set`, `account.set`) accept a free-form attribute
//! bag. Before anything is sent, each attribute is checked against a static
//! [`Schema`] mirroring the fields the server accepts for that record kind:
//!
//! - the name must be declared in the schema;
//! - the JSON kind of the value must equal the declared [`FieldType`]
//!   exactly (an integer is never accepted where a string is declared);
//! - every field marked `required` must be present.
//!
//! Attributes are checked in insertion order and the first violation aborts
//! the call, so a request is either sent in full or not at all.
//!
//! The schemas must be kept in sync with the server. They are not derived at
//! runtime.

use serde_json::{Map, Value};

use crate::error::{MailboxError, MailboxResult};

/// Ordered attribute bag passed to "set"-style calls.
pub type Attributes = Map<String, Value>;

/// JSON kind a schema field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Boolean,
    List,
}

impl FieldType {
    /// Returns `true` if `value` has exactly this JSON kind.
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Boolean => value.is_boolean(),
            FieldType::List => value.is_array(),
        }
    }

    /// Human-readable name used in error messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Boolean => "boolean",
            FieldType::List => "list",
        }
    }
}

/// Human-readable JSON kind of an arbitrary value.
#[must_use]
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// One declared field of a record schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    pub required: bool,
}

impl FieldSpec {
    const fn optional(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            required: false,
        }
    }
}

/// A static attribute schema for one mutable record kind.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    /// Record kind, used in error messages (`"mail"`, `"account"`).
    pub record: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    /// Look up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check `attributes` against this schema without consuming them.
    pub fn validate(&self, attributes: &Attributes) -> MailboxResult<()> {
        for (name, value) in attributes {
            let spec = self
                .field(name)
                .ok_or_else(|| MailboxError::UnknownAttribute {
                    record: self.record,
                    name: name.clone(),
                })?;

            if !spec.ty.matches(value) {
                return Err(MailboxError::AttributeType {
                    name: name.clone(),
                    expected: spec.ty.as_str(),
                    found: value_kind(value),
                });
            }
        }

        if let Some(missing) = self
            .fields
            .iter()
            .find(|f| f.required && !attributes.contains_key(f.name))
        {
            return Err(MailboxError::MissingAttribute {
                record: self.record,
                name: missing.name,
            });
        }

        Ok(())
    }

    /// Validate `attributes` and append them to `params`, after any
    /// positional key fields already present.
    pub fn merge_into(
        &self,
        params: &mut Map<String, Value>,
        attributes: Attributes,
    ) -> MailboxResult<()> {
        self.validate(&attributes)?;
        params.extend(attributes);
        Ok(())
    }
}

/// Check every requested capability against an allow-list.
///
/// The first unrecognized name fails the whole call.
pub fn validate_capabilities(allowed: &[&str], requested: &[&str]) -> MailboxResult<Vec<String>> {
    requested
        .iter()
        .map(|cap| {
            if allowed.contains(cap) {
                Ok((*cap).to_string())
            } else {
                Err(MailboxError::UnknownCapability {
                    name: (*cap).to_string(),
                })
            }
        })
        .collect()
}

/// Fields accepted by `mail.set`.
pub const MAIL_SET_SCHEMA: Schema = Schema {
    record: "mail",
    fields: &[
        FieldSpec::optional("password", FieldType::String),
        FieldSpec::optional("password_hash", FieldType::String),
        FieldSpec::optional("same_password_allowed", FieldType::Boolean),
        FieldSpec::optional("require_password_reset", FieldType::Boolean),
        FieldSpec::optional("plan", FieldType::String),
        FieldSpec::optional("additional_mail_quota", FieldType::String),
        FieldSpec::optional("additional_cloud_quota", FieldType::String),
        FieldSpec::optional("first_name", FieldType::String),
        FieldSpec::optional("last_name", FieldType::String),
        FieldSpec::optional("inboxsave", FieldType::Boolean),
        FieldSpec::optional("forwards", FieldType::List),
        FieldSpec::optional("aliases", FieldType::List),
        FieldSpec::optional("alternate_mail", FieldType::String),
        FieldSpec::optional("memo", FieldType::String),
        FieldSpec::optional("allow_nets", FieldType::String),
        FieldSpec::optional("active", FieldType::Boolean),
        FieldSpec::optional("title", FieldType::String),
        FieldSpec::optional("birthday", FieldType::String),
        FieldSpec::optional("position", FieldType::String),
        FieldSpec::optional("department", FieldType::String),
        FieldSpec::optional("company", FieldType::String),
        FieldSpec::optional("street", FieldType::String),
        FieldSpec::optional("postal_code", FieldType::String),
        FieldSpec::optional("city", FieldType::String),
        FieldSpec::optional("phone", FieldType::String),
        FieldSpec::optional("fax", FieldType::String),
        FieldSpec::optional("cell_phone", FieldType::String),
        FieldSpec::optional("uid_extern", FieldType::String),
        FieldSpec::optional("language", FieldType::String),
        FieldSpec::optional("deletion_date", FieldType::String),
    ],
};

/// Fields accepted by `account.set`.
pub const ACCOUNT_SET_SCHEMA: Schema = Schema {
    record: "account",
    fields: &[
        FieldSpec::optional("password", FieldType::String),
        FieldSpec::optional("plan", FieldType::String),
        FieldSpec::optional("memo", FieldType::String),
        FieldSpec::optional("address_payment_first_name", FieldType::String),
        FieldSpec::optional("address_payment_last_name", FieldType::String),
        FieldSpec::optional("address_payment_street", FieldType::String),
        FieldSpec::optional("address_payment_zipcode", FieldType::String),
        FieldSpec::optional("address_payment_town", FieldType::String),
        FieldSpec::optional("company", FieldType::String),
        FieldSpec::optional("bank_iban", FieldType::String),
        FieldSpec::optional("bank_bic", FieldType::String),
        FieldSpec::optional("bank_account_owner", FieldType::String),
        FieldSpec::optional("av_contract_accept_name", FieldType::String),
        FieldSpec::optional("tarifflimits", FieldType::List),
        FieldSpec::optional("av_contract_professional_secrecy", FieldType::Boolean),
    ],
};
