// tests/catalog_docs.rs
use m365_catalog::catalog::docs;
use m365_catalog::config::sources::DocPage;
use m365_catalog::core::SourceFetcher;
use m365_catalog::naming::NameResolver;
use m365_catalog::progress::{ ConsoleProgress, NullProgress };

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn pages() -> Vec<DocPage> {
    vec![
        DocPage::new(fixture("intune.html"), "intune"),
        DocPage::new(fixture("exchange.html"), "exchange"),
    ]
}

#[test]
fn crawls_local_pages() {
    let fetcher = SourceFetcher::new().unwrap();
    let cat = docs::build(&fetcher, &pages(), &NameResolver::default(), &mut NullProgress);

    let names: Vec<&str> = cat.resources.iter().map(|r| r.prefixed_name()).collect();
    assert_eq!(names, vec![
        "microsoft.exchange.accepteddomain",
        "microsoft.exchange.mailboxautoreplyconfiguration",
        "microsoft.intune.devicecompliancepolicy",
        "microsoft.intune.iosupdateconfiguration",
        "microsoft.intune.macosdevicefeaturesconfiguration",
        "microsoft.intune.windowsAutopilotDeploymentProfile",
    ]);
    assert_eq!(cat.summary.get("exchange"), Some(&2));
    assert_eq!(cat.summary.get("intune"), Some(&4));
    assert_eq!(cat.total_resources, 6);
}

#[test]
fn friendly_names_use_the_algorithm() {
    let fetcher = SourceFetcher::new().unwrap();
    let cat = docs::build(&fetcher, &pages(), &NameResolver::default(), &mut NullProgress);
    let friendly: Vec<&str> = cat.resources.iter().map(|r| r.friendly_name.as_str()).collect();
    assert_eq!(friendly, vec![
        "Accepted Domain",
        "Mailbox Auto Reply Configuration",
        "Device Compliance Policy",
        "iOS Update Configuration",
        "macOS Device Features Configuration",
        "Windows Autopilot Deployment Profile",
    ]);
}

#[test]
fn each_table_shape_is_read() {
    let fetcher = SourceFetcher::new().unwrap();
    let cat = docs::build(&fetcher, &pages(), &NameResolver::default(), &mut NullProgress);
    let find = |name: &str| cat.resources.iter().find(|r| r.prefixed_name() == name).unwrap();

    // heading + table, header row and unsupported row dropped
    let policy = find("microsoft.intune.devicecompliancepolicy");
    let ops: Vec<&str> = policy.operation_permissions.iter().map(|e| e.operation.as_str()).collect();
    assert_eq!(ops, vec!["Read", "Update"]);
    assert_eq!(policy.application_permissions.len(), 2);
    assert!(policy.anchor_url.as_deref().unwrap().ends_with("intune.html#devicecompliancepolicy"));

    // container element + table
    let ios = find("microsoft.intune.iosupdateconfiguration");
    assert_eq!(ios.operation_permissions.len(), 1);

    // raw text only: permissions, no operations
    let mac = find("microsoft.intune.macosdevicefeaturesconfiguration");
    assert!(mac.operation_permissions.is_empty());
    assert_eq!(
        mac.application_permissions.iter().collect::<Vec<_>>(),
        vec!["DeviceManagementConfiguration.Read.All"]
    );

    // only linked from the table of contents: no deep link
    let autopilot = find("microsoft.intune.windowsAutopilotDeploymentProfile");
    assert!(autopilot.anchor_url.is_none());
    assert!(autopilot.application_permissions.is_empty());

    // "Microsoft Graph ... application permissions" heading
    let domain = find("microsoft.exchange.accepteddomain");
    assert!(domain.application_permissions.contains("Domain.Read.All"));
}

#[test]
fn every_exchange_resource_gets_manage_as_app() {
    let fetcher = SourceFetcher::new().unwrap();
    let cat = docs::build(&fetcher, &pages(), &NameResolver::default(), &mut NullProgress);
    for r in cat.resources.iter().filter(|r| r.resource_type() == "exchange") {
        assert!(r.application_permissions.contains("Exchange.ManageAsApp"), "{}", r.prefixed_name());
    }
    for r in cat.resources.iter().filter(|r| r.resource_type() != "exchange") {
        assert!(!r.application_permissions.contains("Exchange.ManageAsApp"));
    }
}

#[test]
fn unreadable_page_is_reported_and_skipped() {
    let fetcher = SourceFetcher::new().unwrap();
    let mut all = pages();
    all.insert(0, DocPage::new(fixture("does-not-exist.html"), "teams"));

    let mut progress = ConsoleProgress::new(Vec::new());
    let cat = docs::build(&fetcher, &all, &NameResolver::default(), &mut progress);
    let out = String::from_utf8(progress.into_inner()).unwrap();

    assert!(out.contains("skipped"));
    assert!(out.contains("does-not-exist.html"));
    assert!(out.contains("Done: 2 read, 1 skipped."));
    assert!(!cat.summary.contains_key("teams"));
    assert_eq!(cat.total_resources, 6);
}
