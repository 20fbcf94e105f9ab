// benches/naming.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use m365_catalog::naming::{ segment, to_friendly_name, WordDictionary };
use m365_catalog::specs::{ discover_resource_names, extract_permissions, locate_section };

const IDENTS: &[&str] = &[
    "devicecompliancepolicy",
    "mailboxautoreplyconfiguration",
    "windows10compliancepolicy",
    "macosdevicefeaturesconfiguration",
    "conditionalaccesspolicy",
    "deviceManagementScriptDeviceState",
    "hybridADJoinProfile",
];

fn load_page() -> String {
    std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/intune.html"))
        .expect("read tests/fixtures/intune.html")
}

fn bench_naming(c: &mut Criterion) {
    let dict = WordDictionary::builtin();

    c.bench_function("segment", |b| {
        b.iter(|| {
            for ident in IDENTS {
                black_box(segment(&dict, black_box(ident)));
            }
        })
    });

    c.bench_function("to_friendly_name", |b| {
        b.iter(|| {
            for ident in IDENTS {
                black_box(to_friendly_name(&dict, black_box(ident)));
            }
        })
    });
}

fn bench_extraction(c: &mut Criterion) {
    let page = load_page();

    c.bench_function("discover_resource_names", |b| {
        b.iter(|| black_box(discover_resource_names(black_box(&page)).len()))
    });

    c.bench_function("locate_and_extract", |b| {
        b.iter(|| {
            let section = locate_section(black_box(&page), "devicecompliancepolicy").unwrap_or("");
            black_box(extract_permissions(section).all.len())
        })
    });
}

criterion_group!(benches, bench_naming, bench_extraction);
criterion_main!(benches);
