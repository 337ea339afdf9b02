use std::io::Write;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use flate2::Compression;
use flate2::write::ZlibEncoder;
use mailbox_org_api::protocol::constants::Methods;
use serde_json::{Value, json};

pub(super) const TOKEN: &str = "token-contract";
pub(super) const ACCOUNT: &str = "acme_bmbo";
pub(super) const DOMAIN: &str = "acme.example";
pub(super) const MAIL: &str = "ada@acme.example";
pub(super) const INVOICE_ID: &str = "BMBO-1001-25";
pub(super) const INVOICE_TOKEN: &str = "invoice-token-1";
pub(super) const GROUP: &str = "support";
pub(super) const INVOICE_DOCUMENT: &[u8] = b"%PDF-1.7\n% contract invoice\n";

#[derive(Debug, Clone)]
pub(super) enum StepKind {
    HelloWorld,
    HelloInnerworld,
    // Accounts
    AccountAdd,
    AccountGet,
    FetchAccount,
    AccountSet,
    AccountDel,
    // Invoices
    AccountInvoiceList,
    AccountInvoiceIds,
    AccountInvoiceOpenIds,
    AccountInvoiceToken,
    FetchInvoice,
    AccountInvoiceGet,
    AccountInvoiceFile,
    AccountInvoicePdf,
    // Domains
    DomainList,
    DomainAdd,
    DomainGet,
    DomainSet,
    DomainCapabilitiesSet,
    DomainDel,
    // Mailboxes
    MailList,
    MailListPaged,
    MailAdd,
    MailGet,
    FetchMail,
    MailSet,
    MailSetPassword,
    MailSetPasswordRequireReset,
    MailSetPlan,
    MailSetForwards,
    MailSetAliases,
    MailSetState,
    MailSetDeletionDate,
    MailCapabilitiesSet,
    MailCapabilitiesClear,
    MailDel,
    MailExternaluid,
    MailApppasswordList,
    MailApppasswordAdd,
    MailApppasswordDelete,
    MailBackupList,
    MailBackupImport,
    // Groups
    GroupList,
    GroupAdd,
    GroupSet,
    GroupDelete,
    // Misc
    ContextList,
    Search,
}

/// One request/response pair on the wire.
#[derive(Debug, Clone)]
pub(super) struct Exchange {
    pub(super) method: &'static str,
    pub(super) expected_params: Value,
    pub(super) response: Value,
}

#[derive(Debug, Clone)]
pub(super) struct ContractStep {
    pub(super) domain: &'static str,
    pub(super) name: &'static str,
    pub(super) kind: StepKind,
    pub(super) exchanges: Vec<Exchange>,
}

fn exchange(method: &'static str, expected_params: Value, response: Value) -> Exchange {
    Exchange {
        method,
        expected_params,
        response,
    }
}

fn step(
    domain: &'static str,
    name: &'static str,
    kind: StepKind,
    exchanges: Vec<Exchange>,
) -> ContractStep {
    ContractStep {
        domain,
        name,
        kind,
        exchanges,
    }
}

pub(super) fn invoice_list_response() -> Value {
    json!([
        {
            "invoice_id": "BMBO-1000-25",
            "token": "invoice-token-0",
            "status": "paid",
            "date": "2025-09-30",
        },
        {
            "invoice_id": INVOICE_ID,
            "token": INVOICE_TOKEN,
            "status": "open",
            "date": "2025-10-31",
            "availableDownloadFileTypes": ["csv", "pdf", "xml"],
        }
    ])
}

fn invoice_list_exchange() -> Exchange {
    exchange(
        Methods::ACCOUNT_INVOICE_LIST,
        json!({"account": ACCOUNT}),
        invoice_list_response(),
    )
}

pub(super) fn encoded_invoice() -> String {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(INVOICE_DOCUMENT).unwrap();
    BASE64.encode(encoder.finish().unwrap())
}

pub(super) fn mail_payload() -> Value {
    json!({
        "mail": MAIL,
        "domain": DOMAIN,
        "type": "inbox",
        "plan": "premium",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "active": true,
        "aliases": ["countess@acme.example"],
    })
}

#[allow(clippy::too_many_lines)]
pub(super) fn build_contract_steps() -> Vec<ContractStep> {
    vec![
        step(
            "hello",
            "hello_world",
            StepKind::HelloWorld,
            vec![exchange(Methods::HELLO_WORLD, json!({}), json!("Hello World!"))],
        ),
        step(
            "hello",
            "hello_innerworld",
            StepKind::HelloInnerworld,
            vec![exchange(
                Methods::HELLO_INNERWORLD,
                json!({}),
                json!("Hello Inner World!"),
            )],
        ),
        // ─── Accounts ───────────────────────────────────────────────
        step(
            "account",
            "account_add",
            StepKind::AccountAdd,
            vec![exchange(Methods::ACCOUNT_ADD, json!({"account": ACCOUNT}), json!(true))],
        ),
        step(
            "account",
            "account_get",
            StepKind::AccountGet,
            vec![exchange(
                Methods::ACCOUNT_GET,
                json!({"account": ACCOUNT}),
                json!({"account": ACCOUNT, "type": "BMBO", "plan": "basic"}),
            )],
        ),
        step(
            "account",
            "fetch_account",
            StepKind::FetchAccount,
            vec![exchange(
                Methods::ACCOUNT_GET,
                json!({"account": ACCOUNT}),
                json!({
                    "account": ACCOUNT,
                    "type": "BMBO",
                    "status": "aktiv",
                    "company": "Acme",
                    "bank": {"iban": "DE02120300000000202051"},
                }),
            )],
        ),
        step(
            "account",
            "account_set",
            StepKind::AccountSet,
            vec![exchange(
                Methods::ACCOUNT_SET,
                json!({
                    "account": ACCOUNT,
                    "plan": "profi",
                    "av_contract_professional_secrecy": true,
                }),
                json!(true),
            )],
        ),
        step(
            "account",
            "account_del",
            StepKind::AccountDel,
            vec![exchange(Methods::ACCOUNT_DEL, json!({"account": ACCOUNT}), json!(true))],
        ),
        // ─── Invoices ───────────────────────────────────────────────
        step(
            "invoice",
            "account_invoice_list",
            StepKind::AccountInvoiceList,
            vec![invoice_list_exchange()],
        ),
        step(
            "invoice",
            "account_invoice_ids",
            StepKind::AccountInvoiceIds,
            vec![invoice_list_exchange()],
        ),
        step(
            "invoice",
            "account_invoice_open_ids",
            StepKind::AccountInvoiceOpenIds,
            vec![invoice_list_exchange()],
        ),
        step(
            "invoice",
            "account_invoice_token",
            StepKind::AccountInvoiceToken,
            vec![invoice_list_exchange()],
        ),
        step(
            "invoice",
            "fetch_invoice",
            StepKind::FetchInvoice,
            vec![invoice_list_exchange()],
        ),
        step(
            "invoice",
            "account_invoice_get",
            StepKind::AccountInvoiceGet,
            vec![exchange(
                Methods::ACCOUNT_INVOICE_GET,
                json!({"account": ACCOUNT, "token": INVOICE_TOKEN}),
                json!({"bin": encoded_invoice()}),
            )],
        ),
        step(
            "invoice",
            "account_invoice_file",
            StepKind::AccountInvoiceFile,
            vec![
                invoice_list_exchange(),
                exchange(
                    Methods::ACCOUNT_INVOICE_GET,
                    json!({"account": ACCOUNT, "token": INVOICE_TOKEN, "type": "csv"}),
                    json!({"bin": encoded_invoice()}),
                ),
            ],
        ),
        step(
            "invoice",
            "account_invoice_pdf",
            StepKind::AccountInvoicePdf,
            vec![
                invoice_list_exchange(),
                exchange(
                    Methods::ACCOUNT_INVOICE_GET,
                    json!({"account": ACCOUNT, "token": INVOICE_TOKEN, "type": "pdf"}),
                    json!({"bin": encoded_invoice()}),
                ),
            ],
        ),
        // ─── Domains ────────────────────────────────────────────────
        step(
            "domain",
            "domain_list",
            StepKind::DomainList,
            vec![exchange(
                Methods::DOMAIN_LIST,
                json!({"account": ACCOUNT}),
                json!([{"domain": DOMAIN}]),
            )],
        ),
        step(
            "domain",
            "domain_add",
            StepKind::DomainAdd,
            vec![exchange(
                Methods::DOMAIN_ADD,
                json!({"account": ACCOUNT, "domain": DOMAIN, "password": "domain-pw"}),
                json!(true),
            )],
        ),
        step(
            "domain",
            "domain_get",
            StepKind::DomainGet,
            vec![exchange(
                Methods::DOMAIN_GET,
                json!({"domain": DOMAIN}),
                json!({"domain": DOMAIN, "active": true}),
            )],
        ),
        step(
            "domain",
            "domain_set",
            StepKind::DomainSet,
            vec![exchange(
                Methods::DOMAIN_SET,
                json!({"domain": DOMAIN, "memo": "primary", "context_id": 7}),
                json!(true),
            )],
        ),
        step(
            "domain",
            "domain_capabilities_set",
            StepKind::DomainCapabilitiesSet,
            vec![exchange(
                Methods::DOMAIN_CAPABILITIES_SET,
                json!({
                    "domain": DOMAIN,
                    "capabilities": ["MAIL_SPAMPROTECTION", "MAIL_BLACKLIST"],
                }),
                json!(true),
            )],
        ),
        step(
            "domain",
            "domain_del",
            StepKind::DomainDel,
            vec![exchange(
                Methods::DOMAIN_DEL,
                json!({"account": ACCOUNT, "domain": DOMAIN}),
                json!(true),
            )],
        ),
        // ─── Mailboxes ──────────────────────────────────────────────
        step(
            "mail",
            "mail_list",
            StepKind::MailList,
            vec![exchange(
                Methods::MAIL_LIST,
                json!({"domain": DOMAIN}),
                json!([{"mail": MAIL}]),
            )],
        ),
        step(
            "mail",
            "mail_list_paged",
            StepKind::MailListPaged,
            vec![exchange(
                Methods::MAIL_LIST,
                json!({
                    "domain": DOMAIN,
                    "page": 2,
                    "page_size": 50,
                    "sort_field": "mail",
                    "sort_order": "desc",
                }),
                json!([]),
            )],
        ),
        step(
            "mail",
            "mail_add",
            StepKind::MailAdd,
            vec![exchange(
                Methods::MAIL_ADD,
                json!({
                    "mail": MAIL,
                    "password": "initial-pw",
                    "plan": "premium",
                    "first_name": "Ada",
                    "last_name": "Lovelace",
                    "inboxsave": false,
                    "forwards": ["ada@elsewhere.example"],
                    "memo": "created by contract",
                    "language": "de_DE",
                    "uid_extern": "ext-7",
                }),
                json!(true),
            )],
        ),
        step(
            "mail",
            "mail_get",
            StepKind::MailGet,
            vec![exchange(
                Methods::MAIL_GET,
                json!({"mail": MAIL, "include_quota_usage": true}),
                mail_payload(),
            )],
        ),
        step(
            "mail",
            "fetch_mail",
            StepKind::FetchMail,
            vec![exchange(
                Methods::MAIL_GET,
                json!({"mail": MAIL, "include_quota_usage": false}),
                mail_payload(),
            )],
        ),
        step(
            "mail",
            "mail_set",
            StepKind::MailSet,
            vec![exchange(
                Methods::MAIL_SET,
                json!({"mail": MAIL, "last_name": "King", "inboxsave": true}),
                json!(true),
            )],
        ),
        step(
            "mail",
            "mail_set_password",
            StepKind::MailSetPassword,
            vec![exchange(
                Methods::MAIL_SET,
                json!({"mail": MAIL, "password": "n3w-pw"}),
                json!(true),
            )],
        ),
        step(
            "mail",
            "mail_set_password_require_reset",
            StepKind::MailSetPasswordRequireReset,
            vec![exchange(
                Methods::MAIL_SET,
                json!({"mail": MAIL, "password": "temp-pw", "require_password_reset": true}),
                json!(true),
            )],
        ),
        step(
            "mail",
            "mail_set_plan",
            StepKind::MailSetPlan,
            vec![exchange(
                Methods::MAIL_SET,
                json!({"mail": MAIL, "plan": "standard"}),
                json!(true),
            )],
        ),
        step(
            "mail",
            "mail_set_forwards",
            StepKind::MailSetForwards,
            vec![exchange(
                Methods::MAIL_SET,
                json!({"mail": MAIL, "forwards": ["a@x.example", "b@x.example"]}),
                json!(true),
            )],
        ),
        step(
            "mail",
            "mail_set_aliases",
            StepKind::MailSetAliases,
            vec![exchange(
                Methods::MAIL_SET,
                json!({"mail": MAIL, "aliases": ["countess@acme.example"]}),
                json!(true),
            )],
        ),
        step(
            "mail",
            "mail_set_state",
            StepKind::MailSetState,
            vec![exchange(
                Methods::MAIL_SET,
                json!({"mail": MAIL, "active": false}),
                json!(true),
            )],
        ),
        step(
            "mail",
            "mail_set_deletion_date",
            StepKind::MailSetDeletionDate,
            vec![exchange(
                Methods::MAIL_SET,
                json!({"mail": MAIL, "deletion_date": "31.12.2026"}),
                json!(true),
            )],
        ),
        step(
            "mail",
            "mail_capabilities_set",
            StepKind::MailCapabilitiesSet,
            vec![exchange(
                Methods::MAIL_CAPABILITIES_SET,
                json!({"mail": MAIL, "capabilities": ["MAIL_OTP", "MAIL_BACKUPRECOVER"]}),
                json!(true),
            )],
        ),
        step(
            "mail",
            "mail_capabilities_clear",
            StepKind::MailCapabilitiesClear,
            vec![exchange(
                Methods::MAIL_CAPABILITIES_SET,
                json!({"mail": MAIL, "capabilities": []}),
                json!(true),
            )],
        ),
        step(
            "mail",
            "mail_del",
            StepKind::MailDel,
            vec![exchange(Methods::MAIL_DEL, json!({"mail": MAIL}), json!(true))],
        ),
        step(
            "mail",
            "mail_externaluid",
            StepKind::MailExternaluid,
            vec![exchange(
                Methods::MAIL_EXTERNALUID,
                json!({"account": ACCOUNT, "uid_extern": "ext-7"}),
                json!({"mail": MAIL, "uid_extern": "ext-7"}),
            )],
        ),
        step(
            "apppassword",
            "mail_apppassword_list",
            StepKind::MailApppasswordList,
            vec![exchange(
                Methods::MAIL_APPPASSWORD_LIST,
                json!({"mail": MAIL}),
                json!([{"id": 11, "memo": "phone"}]),
            )],
        ),
        step(
            "apppassword",
            "mail_apppassword_add",
            StepKind::MailApppasswordAdd,
            vec![exchange(
                Methods::MAIL_APPPASSWORD_ADD,
                json!({"mail": MAIL, "memo": "laptop"}),
                json!({"id": 12, "password": "abcd-efgh-ijkl"}),
            )],
        ),
        step(
            "apppassword",
            "mail_apppassword_delete",
            StepKind::MailApppasswordDelete,
            vec![exchange(Methods::MAIL_APPPASSWORD_DELETE, json!({"id": 12}), json!(true))],
        ),
        step(
            "backup",
            "mail_backup_list",
            StepKind::MailBackupList,
            vec![exchange(
                Methods::MAIL_BACKUP_LIST,
                json!({"mail": MAIL}),
                json!([{"id": "bk-1", "time": "2025-10-30"}]),
            )],
        ),
        step(
            "backup",
            "mail_backup_import",
            StepKind::MailBackupImport,
            vec![exchange(
                Methods::MAIL_BACKUP_IMPORT,
                json!({"mail": MAIL, "id": "bk-1", "time": "2025-10-30", "filter": "INBOX"}),
                json!(true),
            )],
        ),
        // ─── Groups ─────────────────────────────────────────────────
        step(
            "group",
            "group_list",
            StepKind::GroupList,
            vec![exchange(Methods::GROUP_LIST, json!({}), json!([{"name": GROUP}]))],
        ),
        step(
            "group",
            "group_add",
            StepKind::GroupAdd,
            vec![exchange(
                Methods::GROUP_ADD,
                json!({
                    "name": GROUP,
                    "display_name": "Support Team",
                    "mail_addresses_to_add": [MAIL],
                }),
                json!(true),
            )],
        ),
        step(
            "group",
            "group_set",
            StepKind::GroupSet,
            vec![exchange(
                Methods::GROUP_SET,
                json!({
                    "name": GROUP,
                    "display_name": "Support",
                    "mail_addresses_to_add": ["bob@acme.example"],
                    "mail_addresses_to_remove": [MAIL],
                }),
                json!(true),
            )],
        ),
        step(
            "group",
            "group_delete",
            StepKind::GroupDelete,
            vec![exchange(Methods::GROUP_DELETE, json!({"name": GROUP}), json!(true))],
        ),
        // ─── Misc ───────────────────────────────────────────────────
        step(
            "context",
            "context_list",
            StepKind::ContextList,
            vec![exchange(
                Methods::CONTEXT_LIST,
                json!({"account": ACCOUNT}),
                json!([{"context_id": 7}]),
            )],
        ),
        step(
            "search",
            "search",
            StepKind::Search,
            vec![exchange(
                Methods::SEARCH,
                json!({"search": "ada"}),
                json!({"accounts": [], "domains": [], "emails": [MAIL]}),
            )],
        ),
    ]
}
