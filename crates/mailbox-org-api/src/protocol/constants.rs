//! Protocol constants for method names, headers, and capability names.

/// Header carrying the session token on authenticated calls.
pub const AUTH_HEADER: &str = "HPLS-AUTH";

/// Known mailbox.org API method names.
pub struct Methods;

impl Methods {
    // ─── Session ────────────────────────────────────────────────────

    /// Open an API session and obtain a session token.
    pub const AUTH: &'static str = "auth";

    /// Close the current API session.
    pub const DEAUTH: &'static str = "deauth";

    /// Unauthenticated connectivity check.
    pub const HELLO_WORLD: &'static str = "hello.world";

    /// Authenticated connectivity check.
    pub const HELLO_INNERWORLD: &'static str = "hello.innerworld";

    // ─── Accounts ───────────────────────────────────────────────────

    pub const ACCOUNT_ADD: &'static str = "account.add";
    pub const ACCOUNT_GET: &'static str = "account.get";
    pub const ACCOUNT_SET: &'static str = "account.set";
    pub const ACCOUNT_DEL: &'static str = "account.del";

    /// List invoices (id, date, status, token, ...) of an account.
    pub const ACCOUNT_INVOICE_LIST: &'static str = "account.invoice.list";

    /// Fetch a single invoice by its download token.
    pub const ACCOUNT_INVOICE_GET: &'static str = "account.invoice.get";

    // ─── Domains ────────────────────────────────────────────────────

    pub const DOMAIN_LIST: &'static str = "domain.list";
    pub const DOMAIN_ADD: &'static str = "domain.add";
    pub const DOMAIN_GET: &'static str = "domain.get";
    pub const DOMAIN_SET: &'static str = "domain.set";
    pub const DOMAIN_DEL: &'static str = "domain.del";
    pub const DOMAIN_CAPABILITIES_SET: &'static str = "domain.capabilities.set";

    // ─── Mailboxes ──────────────────────────────────────────────────

    pub const MAIL_LIST: &'static str = "mail.list";
    pub const MAIL_ADD: &'static str = "mail.add";
    pub const MAIL_GET: &'static str = "mail.get";
    pub const MAIL_SET: &'static str = "mail.set";
    pub const MAIL_DEL: &'static str = "mail.del";
    pub const MAIL_CAPABILITIES_SET: &'static str = "mail.capabilities.set";

    /// Look up a mailbox through its external UID.
    pub const MAIL_EXTERNALUID: &'static str = "mail.externaluid";

    // ─── App passwords ──────────────────────────────────────────────

    pub const MAIL_APPPASSWORD_LIST: &'static str = "mail.apppassword.list";
    pub const MAIL_APPPASSWORD_ADD: &'static str = "mail.apppassword.add";
    pub const MAIL_APPPASSWORD_DELETE: &'static str = "mail.apppassword.delete";

    // ─── Backups ────────────────────────────────────────────────────

    pub const MAIL_BACKUP_LIST: &'static str = "mail.backup.list";
    pub const MAIL_BACKUP_IMPORT: &'static str = "mail.backup.import";

    // ─── Groups ─────────────────────────────────────────────────────

    pub const GROUP_LIST: &'static str = "group.list";
    pub const GROUP_ADD: &'static str = "group.add";
    pub const GROUP_SET: &'static str = "group.set";
    pub const GROUP_DELETE: &'static str = "group.delete";

    // ─── Misc ───────────────────────────────────────────────────────

    pub const CONTEXT_LIST: &'static str = "context.list";

    /// Search accounts, domains and mail addresses.
    pub const SEARCH: &'static str = "search";
}

/// Capability names accepted by `domain.capabilities.set`.
pub const DOMAIN_CAPABILITIES: &[&str] = &[
    "MAIL_SPAMPROTECTION",
    "MAIL_BLACKLIST",
    "MAIL_BACKUPRECOVER",
    "MAIL_PASSWORDRESET_SMS",
];

/// Capability names accepted by `mail.capabilities.set`.
pub const MAIL_CAPABILITIES: &[&str] = &[
    "MAIL_SPAMPROTECTION",
    "MAIL_BLACKLIST",
    "MAIL_BACKUPRECOVER",
    "MAIL_OTP",
    "MAIL_PASSWORDRESET_SMS",
];
