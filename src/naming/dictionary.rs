// src/naming/dictionary.rs
//! Word list for the segmenter.
//!
//! Order is part of the contract. `WordDictionary::new` keeps the first
//! declaration of a duplicate and stable-sorts by length (longest first), so
//! among equal-length words the one declared earlier wins. Adding a word can
//! change how existing identifiers split: check with `m365_catalog name`.

use std::collections::HashSet;

/// Curated tokens seen in Entra, Exchange, Intune, Security & Compliance and
/// Teams resource names. Lowercase only.
pub const BUILTIN_WORDS: &[&str] = &[
    // platforms and products
    "windows10", "windows", "android", "ios", "mac", "os", "aosp", "linux",
    "office", "o365", "exchange", "sharepoint", "onedrive", "teams", "team",
    "outlook", "entra", "intune", "defender", "purview", "azure", "autopilot",
    "edge", "store", "skype", "yammer", "viva", "graph",
    // abbreviations rendered upper-case later
    "api", "id", "vpp", "mdm", "mam", "url", "vpn", "wifi", "scep", "pkcs",
    "pfx", "ad", "ip", "asr", "dlp", "atp", "eop", "dkim", "dmarc", "spf",
    "mfa", "sso", "saml", "oauth", "sms", "smtp", "imap", "pop", "owa",
    "ews", "cas", "uri", "gpo", "lob", "msi", "apn", "wip", "esim",
    // identity
    "administrative", "administrator", "admin", "authentication",
    "authorization", "authenticator", "conditional", "access", "identity", "identities",
    "governance", "entitlement", "lifecycle", "workflow", "workflows",
    "principal", "principals", "service", "user", "users", "group", "groups",
    "member", "members", "owner", "owners", "guest", "guests", "tenant",
    "cross", "external", "federation", "federated", "domain", "domains",
    "accepted", "remote", "named", "location", "locations", "country",
    "role", "roles", "assignment", "assignments", "definition", "definitions",
    "eligibility", "eligible", "schedule", "schedules", "request", "requests",
    "approval", "reviewer", "review", "reviews", "package", "packages",
    "catalog", "catalogs", "resource", "resources", "connected",
    "organization", "organizational", "company", "branding", "attribute",
    "attributes", "custom", "security", "secure", "score", "method", "methods",
    "strength", "strengths", "combination", "passwordless", "password",
    "fido", "temporary", "pass", "certificate", "certificates", "credential",
    "credentials", "token", "tokens", "lifetime", "issuance", "claims",
    "claim", "mapping", "mappings", "home", "realm", "discovery",
    "registration", "unit", "units", "directory", "setting", "settings", "template",
    "templates", "object", "objects", "consent", "grant", "grants",
    "permission", "permissions", "scope", "scopes", "sign", "signin", "in", "risk", "risky",
    "detection", "protection", "protected", "trust", "trusted", "invitation",
    "manager",
    // devices and management
    "device", "devices", "management", "managed", "configuration",
    "configurations", "config", "compliance", "compliant", "enrollment",
    "enrolment", "restriction", "restrictions", "limit", "status", "state",
    "states", "profile", "profiles", "platform", "script", "scripts",
    "shell", "health", "remediation", "remediations", "update", "updates",
    "ring", "rings", "feature", "features", "quality", "driver", "drivers",
    "deployment", "deployments", "app", "apps", "application", "applications",
    "mobile", "win32", "web", "link", "links", "category", "categories",
    "filter", "filters", "tag", "tags", "scoped", "notification",
    "notifications", "message", "messages", "terms", "condition", "conditions",
    "endpoint", "endpoints", "firewall", "antivirus", "encryption",
    "bitlocker", "kiosk", "hello", "business", "work", "personal", "dedicated",
    "shared", "corporate", "owned", "fully", "general", "root",
    "imported", "derived", "key", "keys", "wired", "network", "networks",
    "proxy", "boundary", "boundaries", "kernel", "extension", "extensions",
    "system", "software", "firmware", "hardware", "inventory", "compatibility",
    "readiness", "partner", "partners", "connector", "connectors", "default",
    "baseline", "baselines", "intent", "intents", "policy",
    "policies", "set", "sets", "rule", "rules", "item", "items", "list",
    "lists", "allow", "block", "blocked", "allowed", "exclusion", "exclusions",
    "surface", "reduction", "attack", "guard", "control", "controls",
    "smart", "screen", "account", "accounts", "local", "join",
    "joined", "hybrid", "insider", "preview", "delivery",
    "optimization", "expedited",
    // mail and collaboration
    "mailbox", "mailboxes", "mail", "enabled", "auto", "reply", "forwarding",
    "transport", "journal", "retention", "hold", "holds", "label", "labels",
    "sensitivity", "sensitive", "information", "type", "types", "calendar",
    "processing", "sharing", "address", "book", "books", "offline",
    "hosted", "content", "outbound", "inbound", "spam", "malware", "phish",
    "anti", "safe", "attachment", "attachments", "quarantine", "junk",
    "email", "relationship", "relay", "journaling", "inbox",
    "folder", "folders", "public", "distribution", "dynamic", "unified",
    "audit", "log", "logs", "meeting", "meetings", "channel", "channels",
    "calling", "call", "voice", "routing", "dial", "plan", "plans", "emergency",
    "number", "numbers", "messaging", "live", "events", "event", "client",
    "clients", "upgrade", "online", "pstn", "usage", "usages",
    "gateway", "gateways", "broadcast", "feedback",
    "holiday", "hours", "queue", "queues", "agent", "agents", "lobby",
    "room", "rooms", "format", "case", "cases", "search", "searches",
    "supervisory", "records", "record", "file",
    "availability", "migration", "batch",
    "sender", "recipient", "recipients", "connection", "connections",
    "signing", "report", "reports", "submission", "intra", "quota",
    // generic
    "all", "and", "by", "for", "of", "on", "to", "with", "new",
    "level", "levels", "mode", "modes", "name", "names", "value", "values",
    "collection", "collections", "details", "summary",
    "action", "actions", "operation", "operations", "option", "options",
    "property", "properties", "data", "info", "center", "portal", "site",
    "sites", "global", "container", "containers", "storage",
    "based", "privileged", "privilege", "time", "zone", "zones", "window",
];

/// Immutable, length-sorted token table.
#[derive(Clone, Debug)]
pub struct WordDictionary {
    words: Vec<String>,
}

impl WordDictionary {
    /// Lowercases, drops empties and later duplicates, then stable-sorts by
    /// descending length.
    pub fn new<I, S>(declared: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut words: Vec<String> = declared
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .filter(|w| seen.insert(w.clone()))
            .collect();
        words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        Self { words }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_WORDS)
    }

    /// Built-in words followed by `extra` (later declarations lose ties).
    pub fn with_extra<S: AsRef<str>>(extra: &[S]) -> Self {
        Self::new(BUILTIN_WORDS.iter().copied().chain(extra.iter().map(|s| s.as_ref())))
    }

    /// Scan order: longest first, declaration order within a length.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn len(&self) -> usize { self.words.len() }
    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

impl Default for WordDictionary {
    fn default() -> Self { Self::builtin() }
}
