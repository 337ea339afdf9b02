//! # mailbox.org JSON-RPC Client
//!
//! Blocking transport for the mailbox.org Business API. Every call is one
//! HTTPS POST carrying one JSON-RPC envelope; the response is unwrapped into
//! its `result` or mapped to a [`MailboxError`].
//!
//! ## Session flow
//!
//! ```text
//! MailboxClient::new(&config)
//!   → authenticate(user, pass)     stores token, arms HPLS-AUTH
//!   → account_get / mail_set / ... every call carries HPLS-AUTH
//!   → deauthenticate()             clears token, drops HPLS-AUTH
//! ```
//!
//! All session state lives in the client's [`Session`]. Two clients never
//! share a token or an id sequence, and `&mut self` on every call keeps a
//! single logical caller per session.
//!
//! ## Failure model
//!
//! One request, one response, no retries. A failed `mail_add` may or may not
//! have created the mailbox on the server; the caller decides whether to
//! look it up and try again.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

use crate::config::MailboxConfig;
use crate::error::{MailboxError, MailboxResult};
use crate::protocol::{
    AUTH_HEADER, Account, DOMAIN_CAPABILITIES, Invoice, InvoiceFileType, InvoiceSummary,
    MAIL_CAPABILITIES, Mail, MailListOptions, Methods, NewMail, RpcRequest, RpcResponse,
    decode_invoice_payload,
};
use crate::session::{Session, is_truthy};
use crate::validation::{
    ACCOUNT_SET_SCHEMA, Attributes, MAIL_SET_SCHEMA, validate_capabilities, value_kind,
};

/// Longest slice of a non-JSON error body quoted in a transport error.
const ERROR_BODY_PREVIEW: usize = 200;

/// Blocking JSON-RPC client for the mailbox.org Business API.
pub struct MailboxClient {
    http: reqwest::blocking::Client,
    api_url: String,
    session: Session,
}

impl MailboxClient {
    /// Build a client from a [`MailboxConfig`].
    ///
    /// No request is made; call [`authenticate`](Self::authenticate) to open
    /// a session.
    pub fn new(config: &MailboxConfig) -> MailboxResult<Self> {
        config.validate()?;

        let mut builder = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_timeout_secs));
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        if config.disable_system_proxy {
            builder = builder.no_proxy();
        }

        let http = builder.build().map_err(|e| MailboxError::Transport {
            reason: format!("HTTP client setup failed: {e}"),
        })?;

        tracing::debug!(url = %config.api_url, "Created mailbox.org API client");

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            session: Session::new(),
        })
    }

    /// Build a client for a custom endpoint with default timeouts.
    pub fn with_url(url: &str) -> MailboxResult<Self> {
        let config = MailboxConfig {
            api_url: url.to_string(),
            ..MailboxConfig::new("", "")
        };
        Self::new(&config)
    }

    /// The session state (token, level, request sequence).
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    // ─── Core RPC ───────────────────────────────────────────────────────

    /// Send one JSON-RPC request and return its `result` verbatim.
    ///
    /// `params` must be a JSON object (`null` is sent as `{}`). The request
    /// id advances before anything else happens, so ids are never reused
    /// even when the call fails.
    pub fn send(&mut self, method: &str, params: Value) -> MailboxResult<Value> {
        let id = self.session.next_request_id();

        let params = match params {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(MailboxError::Protocol {
                    reason: format!(
                        "params for {method} must be a JSON object, got {}",
                        value_kind(&other)
                    ),
                });
            }
        };

        let body = serde_json::to_string(&RpcRequest::new(id.clone(), method, &params))?;

        tracing::debug!(
            method,
            id = %id,
            authenticated = self.session.is_authenticated(),
            "Sending mailbox.org request"
        );

        let mut request = self
            .http
            .post(self.api_url.as_str())
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(token) = self.session.auth_token() {
            request = request.header(AUTH_HEADER, token);
        }

        let response = request.send()?;
        let status = response.status();
        let text = response.text()?;

        let value: Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(_) if !status.is_success() => {
                return Err(MailboxError::Transport {
                    reason: format!("HTTP {status}: {}", preview(&text)),
                });
            }
            Err(e) => {
                return Err(MailboxError::Protocol {
                    reason: format!("response is not valid JSON: {e}"),
                });
            }
        };

        match RpcResponse::from_value(value)? {
            RpcResponse::Result(result) => {
                tracing::debug!(method, id = %id, "mailbox.org request succeeded");
                Ok(result)
            }
            RpcResponse::Error(error) => {
                tracing::warn!(
                    method,
                    id = %id,
                    code = error.code,
                    message = %error.message,
                    "mailbox.org API error",
                );
                Err(error.into())
            }
        }
    }

    /// Parse a result into a typed record.
    fn parse<T: DeserializeOwned>(value: Value, what: &str) -> MailboxResult<T> {
        serde_json::from_value(value).map_err(|e| MailboxError::Protocol {
            reason: format!("Failed to parse {what}: {e}"),
        })
    }

    // ─── Session ────────────────────────────────────────────────────────

    /// Open an API session.
    ///
    /// On a response with a truthy `session` field the token and access
    /// level are stored and `HPLS-AUTH` is attached to every later call.
    /// The raw `auth` result is returned either way.
    pub fn authenticate(&mut self, username: &str, password: &str) -> MailboxResult<Value> {
        let result = self.send(Methods::AUTH, json!({"user": username, "pass": password}))?;

        if self.session.establish(&result) {
            tracing::info!(
                level = self.session.level().unwrap_or("unknown"),
                "mailbox.org authentication successful"
            );
        } else {
            tracing::warn!("auth response carried no session; staying unauthenticated");
        }

        Ok(result)
    }

    /// Close the current API session.
    ///
    /// Returns `Ok(false)` without contacting the server when no session is
    /// open. Otherwise the token is dropped only if the server confirms.
    pub fn deauthenticate(&mut self) -> MailboxResult<bool> {
        if !self.session.is_authenticated() {
            tracing::debug!("deauthenticate called without an open session");
            return Ok(false);
        }

        let result = self.send(Methods::DEAUTH, json!({}))?;
        if is_truthy(&result) {
            self.session.clear();
            tracing::info!("mailbox.org session closed");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Unauthenticated connectivity check.
    pub fn hello_world(&mut self) -> MailboxResult<Value> {
        self.send(Methods::HELLO_WORLD, json!({}))
    }

    /// Connectivity check that requires a valid session.
    pub fn hello_innerworld(&mut self) -> MailboxResult<Value> {
        self.send(Methods::HELLO_INNERWORLD, json!({}))
    }

    // ─── Accounts ───────────────────────────────────────────────────────

    pub fn account_add(&mut self, account: &str) -> MailboxResult<Value> {
        self.send(Methods::ACCOUNT_ADD, json!({"account": account}))
    }

    pub fn account_get(&mut self, account: &str) -> MailboxResult<Value> {
        self.send(Methods::ACCOUNT_GET, json!({"account": account}))
    }

    /// `account.get` parsed into an [`Account`].
    pub fn fetch_account(&mut self, account: &str) -> MailboxResult<Account> {
        let result = self.account_get(account)?;
        Self::parse(result, "account")
    }

    /// Update an account. Attributes are checked against
    /// [`ACCOUNT_SET_SCHEMA`] before the request is sent.
    pub fn account_set(&mut self, account: &str, attributes: Attributes) -> MailboxResult<Value> {
        let mut params = Map::new();
        params.insert("account".into(), account.into());
        ACCOUNT_SET_SCHEMA.merge_into(&mut params, attributes)?;
        self.send(Methods::ACCOUNT_SET, Value::Object(params))
    }

    pub fn account_del(&mut self, account: &str) -> MailboxResult<Value> {
        self.send(Methods::ACCOUNT_DEL, json!({"account": account}))
    }

    // ─── Invoices ───────────────────────────────────────────────────────

    pub fn account_invoice_list(&mut self, account: &str) -> MailboxResult<Value> {
        self.send(Methods::ACCOUNT_INVOICE_LIST, json!({"account": account}))
    }

    /// `account.invoice.list` parsed into typed entries.
    pub fn account_invoice_summaries(
        &mut self,
        account: &str,
    ) -> MailboxResult<Vec<InvoiceSummary>> {
        let result = self.account_invoice_list(account)?;
        Self::parse(result, "invoice list")
    }

    /// IDs of all invoices of an account, in server order.
    pub fn account_invoice_ids(&mut self, account: &str) -> MailboxResult<Vec<String>> {
        Ok(self
            .account_invoice_summaries(account)?
            .into_iter()
            .map(|invoice| invoice.invoice_id)
            .collect())
    }

    /// IDs of the account's invoices that are still open, in server order.
    pub fn account_invoice_open_ids(&mut self, account: &str) -> MailboxResult<Vec<String>> {
        Ok(self
            .account_invoice_summaries(account)?
            .into_iter()
            .filter(InvoiceSummary::is_open)
            .map(|invoice| invoice.invoice_id)
            .collect())
    }

    /// Download token of a specific invoice.
    pub fn account_invoice_token(
        &mut self,
        account: &str,
        invoice_id: &str,
    ) -> MailboxResult<String> {
        Ok(self.find_invoice(account, invoice_id)?.token)
    }

    /// A single invoice, looked up in the account's invoice list.
    pub fn fetch_invoice(&mut self, account: &str, invoice_id: &str) -> MailboxResult<Invoice> {
        let summary = self.find_invoice(account, invoice_id)?;
        Ok(Invoice::from_summary(account, summary))
    }

    fn find_invoice(&mut self, account: &str, invoice_id: &str) -> MailboxResult<InvoiceSummary> {
        self.account_invoice_summaries(account)?
            .into_iter()
            .find(|invoice| invoice.invoice_id == invoice_id)
            .ok_or_else(|| MailboxError::InvoiceNotFound {
                account: account.to_string(),
                invoice_id: invoice_id.to_string(),
            })
    }

    /// Raw `account.invoice.get` result for a download token.
    pub fn account_invoice_get(&mut self, account: &str, token: &str) -> MailboxResult<Value> {
        self.send(
            Methods::ACCOUNT_INVOICE_GET,
            json!({"account": account, "token": token}),
        )
    }

    /// Download an invoice document as raw bytes.
    ///
    /// Looks up the token, requests the document in the given format, then
    /// base64-decodes and decompresses the `bin` payload.
    pub fn account_invoice_file(
        &mut self,
        account: &str,
        invoice_id: &str,
        file_type: InvoiceFileType,
    ) -> MailboxResult<Vec<u8>> {
        let token = self.account_invoice_token(account, invoice_id)?;
        let result = self.send(
            Methods::ACCOUNT_INVOICE_GET,
            json!({"account": account, "token": token, "type": file_type.as_str()}),
        )?;

        let encoded = result
            .get("bin")
            .and_then(Value::as_str)
            .ok_or_else(|| MailboxError::Protocol {
                reason: "account.invoice.get response missing bin".into(),
            })?;

        let bytes = decode_invoice_payload(encoded)?;
        tracing::debug!(
            invoice_id,
            file_type = file_type.as_str(),
            size = bytes.len(),
            "Decoded invoice document"
        );
        Ok(bytes)
    }

    /// Download an invoice as PDF bytes.
    pub fn account_invoice_pdf(
        &mut self,
        account: &str,
        invoice_id: &str,
    ) -> MailboxResult<Vec<u8>> {
        self.account_invoice_file(account, invoice_id, InvoiceFileType::Pdf)
    }

    // ─── Domains ────────────────────────────────────────────────────────

    pub fn domain_list(&mut self, account: &str) -> MailboxResult<Value> {
        self.send(Methods::DOMAIN_LIST, json!({"account": account}))
    }

    pub fn domain_add(
        &mut self,
        account: &str,
        domain: &str,
        password: &str,
    ) -> MailboxResult<Value> {
        self.send(
            Methods::DOMAIN_ADD,
            json!({"account": account, "domain": domain, "password": password}),
        )
    }

    pub fn domain_get(&mut self, domain: &str) -> MailboxResult<Value> {
        self.send(Methods::DOMAIN_GET, json!({"domain": domain}))
    }

    /// Update a domain.
    ///
    /// There is no client-side schema for domain fields; attributes are sent
    /// as given and the server reports unknown ones.
    pub fn domain_set(&mut self, domain: &str, attributes: Attributes) -> MailboxResult<Value> {
        let mut params = Map::new();
        params.insert("domain".into(), domain.into());
        params.extend(attributes);
        self.send(Methods::DOMAIN_SET, Value::Object(params))
    }

    /// Replace the capability set of a domain.
    ///
    /// Every name must be in [`DOMAIN_CAPABILITIES`]; an empty slice clears
    /// all capabilities.
    pub fn domain_capabilities_set(
        &mut self,
        domain: &str,
        capabilities: &[&str],
    ) -> MailboxResult<Value> {
        let capabilities = validate_capabilities(DOMAIN_CAPABILITIES, capabilities)?;
        self.send(
            Methods::DOMAIN_CAPABILITIES_SET,
            json!({"domain": domain, "capabilities": capabilities}),
        )
    }

    pub fn domain_del(&mut self, account: &str, domain: &str) -> MailboxResult<Value> {
        self.send(Methods::DOMAIN_DEL, json!({"account": account, "domain": domain}))
    }

    // ─── Mailboxes ──────────────────────────────────────────────────────

    /// List the mailboxes of a domain.
    pub fn mail_list(&mut self, domain: &str, options: &MailListOptions) -> MailboxResult<Value> {
        let mut params = Map::new();
        params.insert("domain".into(), domain.into());
        options.apply(&mut params);
        self.send(Methods::MAIL_LIST, Value::Object(params))
    }

    /// Create a mailbox.
    pub fn mail_add(&mut self, mail: &NewMail) -> MailboxResult<Value> {
        let params = serde_json::to_value(mail)?;
        self.send(Methods::MAIL_ADD, params)
    }

    pub fn mail_get(&mut self, mail: &str, include_quota_usage: bool) -> MailboxResult<Value> {
        self.send(
            Methods::MAIL_GET,
            json!({"mail": mail, "include_quota_usage": include_quota_usage}),
        )
    }

    /// `mail.get` parsed into a [`Mail`].
    pub fn fetch_mail(&mut self, mail: &str) -> MailboxResult<Mail> {
        let result = self.mail_get(mail, false)?;
        Self::parse(result, "mail")
    }

    /// Update a mailbox. Attributes are checked against [`MAIL_SET_SCHEMA`]
    /// before the request is sent.
    pub fn mail_set(&mut self, mail: &str, attributes: Attributes) -> MailboxResult<Value> {
        let mut params = Map::new();
        params.insert("mail".into(), mail.into());
        MAIL_SET_SCHEMA.merge_into(&mut params, attributes)?;
        self.send(Methods::MAIL_SET, Value::Object(params))
    }

    fn mail_set_one(&mut self, mail: &str, name: &str, value: Value) -> MailboxResult<Value> {
        let mut attributes = Attributes::new();
        attributes.insert(name.into(), value);
        self.mail_set(mail, attributes)
    }

    pub fn mail_set_password(&mut self, mail: &str, password: &str) -> MailboxResult<Value> {
        self.mail_set_one(mail, "password", password.into())
    }

    /// Set a new password and force a reset on the next login.
    pub fn mail_set_password_require_reset(
        &mut self,
        mail: &str,
        password: &str,
    ) -> MailboxResult<Value> {
        let mut attributes = Attributes::new();
        attributes.insert("password".into(), password.into());
        attributes.insert("require_password_reset".into(), true.into());
        self.mail_set(mail, attributes)
    }

    pub fn mail_set_plan(&mut self, mail: &str, plan: &str) -> MailboxResult<Value> {
        self.mail_set_one(mail, "plan", plan.into())
    }

    /// Replace the forward addresses of a mailbox.
    pub fn mail_set_forwards(&mut self, mail: &str, forwards: &[&str]) -> MailboxResult<Value> {
        self.mail_set_one(mail, "forwards", json!(forwards))
    }

    /// Replace the aliases of a mailbox.
    pub fn mail_set_aliases(&mut self, mail: &str, aliases: &[&str]) -> MailboxResult<Value> {
        self.mail_set_one(mail, "aliases", json!(aliases))
    }

    /// Activate or deactivate a mailbox.
    pub fn mail_set_state(&mut self, mail: &str, active: bool) -> MailboxResult<Value> {
        self.mail_set_one(mail, "active", active.into())
    }

    /// Schedule deletion of a mailbox (`DD.MM.YYYY`).
    pub fn mail_set_deletion_date(
        &mut self,
        mail: &str,
        deletion_date: &str,
    ) -> MailboxResult<Value> {
        self.mail_set_one(mail, "deletion_date", deletion_date.into())
    }

    /// Replace the capability set of a mailbox.
    ///
    /// Every name must be in [`MAIL_CAPABILITIES`]; an empty slice clears
    /// all capabilities.
    pub fn mail_capabilities_set(
        &mut self,
        mail: &str,
        capabilities: &[&str],
    ) -> MailboxResult<Value> {
        let capabilities = validate_capabilities(MAIL_CAPABILITIES, capabilities)?;
        self.send(
            Methods::MAIL_CAPABILITIES_SET,
            json!({"mail": mail, "capabilities": capabilities}),
        )
    }

    pub fn mail_del(&mut self, mail: &str) -> MailboxResult<Value> {
        self.send(Methods::MAIL_DEL, json!({"mail": mail}))
    }

    /// Find the mailbox of an account that carries the given external UID
    /// (the `uid_extern` field set through `mail.add` or `mail.set`).
    pub fn mail_externaluid(&mut self, account: &str, uid_extern: &str) -> MailboxResult<Value> {
        self.send(
            Methods::MAIL_EXTERNALUID,
            json!({"account": account, "uid_extern": uid_extern}),
        )
    }

    // ─── App passwords ──────────────────────────────────────────────────

    pub fn mail_apppassword_list(&mut self, mail: &str) -> MailboxResult<Value> {
        self.send(Methods::MAIL_APPPASSWORD_LIST, json!({"mail": mail}))
    }

    /// Generate a new app password. The result contains the password itself,
    /// which the server does not show again.
    pub fn mail_apppassword_add(&mut self, mail: &str, memo: &str) -> MailboxResult<Value> {
        self.send(Methods::MAIL_APPPASSWORD_ADD, json!({"mail": mail, "memo": memo}))
    }

    pub fn mail_apppassword_delete(&mut self, apppassword_id: i64) -> MailboxResult<Value> {
        self.send(Methods::MAIL_APPPASSWORD_DELETE, json!({"id": apppassword_id}))
    }

    // ─── Backups ────────────────────────────────────────────────────────

    pub fn mail_backup_list(&mut self, mail: &str) -> MailboxResult<Value> {
        self.send(Methods::MAIL_BACKUP_LIST, json!({"mail": mail}))
    }

    /// Restore a backup into a mailbox.
    ///
    /// `filter` is either `"all"` or an IMAP folder name.
    pub fn mail_backup_import(
        &mut self,
        mail: &str,
        backup_id: &str,
        time: &str,
        filter: &str,
    ) -> MailboxResult<Value> {
        self.send(
            Methods::MAIL_BACKUP_IMPORT,
            json!({"mail": mail, "id": backup_id, "time": time, "filter": filter}),
        )
    }

    // ─── Groups ─────────────────────────────────────────────────────────

    pub fn group_list(&mut self) -> MailboxResult<Value> {
        self.send(Methods::GROUP_LIST, json!({}))
    }

    pub fn group_add(
        &mut self,
        name: &str,
        display_name: &str,
        mail_addresses_to_add: &[&str],
    ) -> MailboxResult<Value> {
        self.send(
            Methods::GROUP_ADD,
            json!({
                "name": name,
                "display_name": display_name,
                "mail_addresses_to_add": mail_addresses_to_add,
            }),
        )
    }

    pub fn group_set(
        &mut self,
        name: &str,
        display_name: &str,
        mail_addresses_to_add: &[&str],
        mail_addresses_to_remove: &[&str],
    ) -> MailboxResult<Value> {
        self.send(
            Methods::GROUP_SET,
            json!({
                "name": name,
                "display_name": display_name,
                "mail_addresses_to_add": mail_addresses_to_add,
                "mail_addresses_to_remove": mail_addresses_to_remove,
            }),
        )
    }

    pub fn group_delete(&mut self, name: &str) -> MailboxResult<Value> {
        self.send(Methods::GROUP_DELETE, json!({"name": name}))
    }

    // ─── Misc ───────────────────────────────────────────────────────────

    pub fn context_list(&mut self, account: &str) -> MailboxResult<Value> {
        self.send(Methods::CONTEXT_LIST, json!({"account": account}))
    }

    /// Search accounts, domains and mail addresses.
    ///
    /// The result groups hits under `accounts`, `domains` and `emails`.
    pub fn search(&mut self, query: &str) -> MailboxResult<Value> {
        self.send(Methods::SEARCH, json!({"search": query}))
    }
}

impl std::fmt::Debug for MailboxClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailboxClient")
            .field("api_url", &self.api_url)
            .field("sequence", &self.session.sequence())
            .field("authenticated", &self.session.is_authenticated())
            .finish_non_exhaustive()
    }
}

fn preview(body: &str) -> &str {
    match body.char_indices().nth(ERROR_BODY_PREVIEW) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
