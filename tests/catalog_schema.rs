// tests/catalog_schema.rs
use m365_catalog::catalog::schema;
use m365_catalog::config::sources::{ DocPage, SourceConfig };
use m365_catalog::core::MapFetcher;
use m365_catalog::error::CatalogError;
use m365_catalog::naming::NameResolver;
use m365_catalog::progress::NullProgress;

const SCHEMA: &str = include_str!("fixtures/schema.json");
const INTUNE: &str = include_str!("fixtures/intune.html");
const EXCHANGE: &str = include_str!("fixtures/exchange.html");

fn fetcher() -> MapFetcher {
    MapFetcher::new()
        .with("schema.json", SCHEMA)
        .with("intune.html", INTUNE)
        .with("exchange.html", EXCHANGE)
}

fn pages() -> Vec<DocPage> {
    vec![DocPage::new("intune.html", "intune"), DocPage::new("exchange.html", "exchange")]
}

#[test]
fn malformed_keys_are_skipped_and_counted() {
    let (cat, report) =
        schema::build(&fetcher(), "schema.json", &pages(), NameResolver::default(), &mut NullProgress).unwrap();

    assert_eq!(cat.total_resources, 5);
    assert_eq!(report.skipped_keys, vec!["bad.key", "contoso.teams.meetingpolicy"]);
    assert!(report.failed_sources.is_empty());
    assert_eq!(cat.summary.get("entra"), Some(&1));
    assert_eq!(cat.summary.get("exchange"), Some(&2));
    assert_eq!(cat.summary.get("intune"), Some(&2));
    assert_eq!(cat.summary.values().sum::<usize>(), cat.resources.len());
}

#[test]
fn names_follow_precedence() {
    let (cat, _) =
        schema::build(&fetcher(), "schema.json", &pages(), NameResolver::default(), &mut NullProgress).unwrap();
    let friendly = |name: &str| {
        cat.resources
            .iter()
            .find(|r| r.prefixed_name() == name)
            .map(|r| r.friendly_name.clone())
            .unwrap()
    };

    // manual override
    assert_eq!(friendly("microsoft.entra.aadgroup"), "AAD Group");
    // camelCase heading text from the docs
    assert_eq!(friendly("microsoft.intune.devicecompliancepolicy"), "Device Compliance Policy");
    assert_eq!(friendly("microsoft.intune.iosupdateconfiguration"), "iOS Update Configuration");
    // not in the docs: dictionary segmentation
    assert_eq!(friendly("microsoft.exchange.remotedomain"), "Remote Domain");
}

#[test]
fn docs_supply_permissions_and_anchors() {
    let (cat, _) =
        schema::build(&fetcher(), "schema.json", &pages(), NameResolver::default(), &mut NullProgress).unwrap();
    let find = |name: &str| cat.resources.iter().find(|r| r.prefixed_name() == name).unwrap();

    let domain = find("microsoft.exchange.accepteddomain");
    assert_eq!(domain.description.as_deref(), Some("Accepted domain."));
    assert_eq!(domain.anchor_url.as_deref(), Some("exchange.html#accepteddomain"));
    assert_eq!(
        domain.application_permissions.iter().collect::<Vec<_>>(),
        vec!["Domain.Read.All", "Exchange.ManageAsApp"]
    );

    let remote = find("microsoft.exchange.remotedomain");
    assert!(remote.anchor_url.is_none());
    assert_eq!(remote.application_permissions.iter().collect::<Vec<_>>(), vec!["Exchange.ManageAsApp"]);

    let group = find("microsoft.entra.aadgroup");
    assert!(group.application_permissions.is_empty());
    assert_eq!(group.description.as_deref(), Some("A group."));
}

#[test]
fn without_docs_names_fall_back() {
    let (cat, _) =
        schema::build(&fetcher(), "schema.json", &[], NameResolver::default(), &mut NullProgress).unwrap();
    let ios = cat
        .resources
        .iter()
        .find(|r| r.prefixed_name() == "microsoft.intune.iosupdateconfiguration")
        .unwrap();
    assert_eq!(ios.friendly_name, "iOS Update Configuration");
    assert!(ios.application_permissions.is_empty());
    assert!(cat.resources.iter().all(|r| r.operation_permissions.is_empty()));
}

#[test]
fn missing_defs_aborts() {
    let fetcher = MapFetcher::new().with("schema.json", r#"{ "definitions": {} }"#);
    let err = schema::build(&fetcher, "schema.json", &[], NameResolver::default(), &mut NullProgress);
    assert!(matches!(err, Err(CatalogError::MissingDefinitions)));
}

#[test]
fn unreadable_sources_are_skipped() {
    let fetcher = MapFetcher::new().with("intune.html", INTUNE);
    let (cat, report) =
        schema::build(&fetcher, "schema.json", &pages(), NameResolver::default(), &mut NullProgress).unwrap();
    assert_eq!(cat.total_resources, 0);
    assert_eq!(report.failed_sources, vec!["exchange.html", "schema.json"]);
}

#[test]
fn config_overrides_reach_the_resolver() {
    let cfg: SourceConfig =
        serde_json::from_str(r#"{ "overrides": { "remotedomain": "Remote (Outbound) Domain" } }"#).unwrap();
    let (cat, _) = schema::build(&fetcher(), "schema.json", &pages(), cfg.resolver(), &mut NullProgress).unwrap();
    assert!(cat.resources.iter().any(|r| r.friendly_name == "Remote (Outbound) Domain"));
}
