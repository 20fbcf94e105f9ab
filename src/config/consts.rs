// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = concat!("m365_catalog/", env!("CARGO_PKG_VERSION"));
pub const DOCS_BASE: &str = "https://learn.microsoft.com/en-us/graph/";

/// The five documentation pages, one per resource type.
/// Paths are relative to `DOCS_BASE`.
pub const DEFAULT_DOC_PAGES: &[(&str, &str)] = &[
    ("utcm-entra-resources", "entra"),
    ("utcm-exchange-resources", "exchange"),
    ("utcm-intune-resources", "intune"),
    ("utcm-securityandcompliance-resources", "securityandcompliance"),
    ("utcm-teams-resources", "teams"),
];

// Identifiers
pub const PREFIX: &str = "microsoft";

// Extraction
pub const SECTION_WINDOW: usize = 30_000;
pub const RAW_PERMISSION_WINDOW: usize = 3_000;
pub const EXCHANGE_TYPE: &str = "exchange";
pub const EXCHANGE_PERMISSION: &str = "Exchange.ManageAsApp";

// Local logs
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "resources";
pub const SUMMARY_SAMPLE: usize = 10;
