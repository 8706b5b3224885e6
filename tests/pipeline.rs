//! End-to-end: scan a directory tree, enrich, link, persist and reload

use indoc::indoc;
use pretty_assertions::assert_eq;
use stacklink::catalog::{load_json, save_json};
use stacklink::core::config::LookupConfig;
use stacklink::enrich::{enrich_measurements, JsonTable, TableSource};
use stacklink::scan::{scan_designs, scan_measurements};
use stacklink::{link, DesignCatalog, LinkTable, MeasurementCatalog, StackValue};
use std::path::Path;
use tempfile::TempDir;

const DESIGN_A: &str = indoc! {"
    SAW MPS/42_LT V2.5 6inch
    Tracking ID : TRK-0042
    layers (Mo=140n/Al=400nm/LT=900n/SiO2=800n)
"};

const DESIGN_A_SHORT: &str = indoc! {"
    SAW MPS/42_LT V2.5
    layers (Mo=1n)
"};

const DESIGN_B: &str = indoc! {"
    SAW MPS/42_LT V3.0
    Tracking ID : TRK-0036
    layers (Mo=200n/W=20n)
"};

/// Names design A by reference, with a measured Mo that differs
const MEAS_COMMON: &str = indoc! {r#"
    #header
    generated by fab tool
    #common
    1S: "MPS2.5_R042_Mo140_Al400.mpar"
    Mo: 141, nm
    freq range: 1.8e9, 2.2e9
    fc: 1.95e9
"#};

/// Same stack as design A, no reference
const MEAS_RANGE: &str = indoc! {"
    #range
    Al:
    400, 410
    Mo:
    140
    LT0900:
    900
    SiO2:
    800
"};

/// Stack equal to design B through the parameter list
const MEAS_PARAMETER: &str = indoc! {r#"
    #parameter "Mo=200nm (nominal), W=20 nm"
"#};

fn write(dir: &Path, name: &str, text: &str) {
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join(name), text).unwrap();
}

fn fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    let mps = temp.path().join("MPS");
    let com = temp.path().join("COM");

    write(&mps.join("R042"), "MPS2.5_R042_Mo140_Al400.mpar", DESIGN_A);
    write(&mps.join("old"), "MPS2.5_R042.mpar", DESIGN_A_SHORT);
    write(&mps, "MPS3_R036_Mo200.mpar", DESIGN_B);

    write(&com, "COMlib_10.mps.rpar", MEAS_RANGE);
    write(&com, "COMlib_2.mps.rpar", MEAS_COMMON);
    write(&com.join("sub"), "COMlib_LT36_1.rpar", MEAS_PARAMETER);
    temp
}

fn scan(root: &Path) -> (DesignCatalog, MeasurementCatalog) {
    let designs = scan_designs(&root.join("MPS"), &mut |_, _, _| {}).unwrap();
    let measurements = scan_measurements(&root.join("COM"), &mut |_, _, _| {}).unwrap();
    (designs, measurements)
}

#[test]
fn test_design_catalog_extraction() {
    let temp = fixture();
    let (designs, _) = scan(temp.path());

    assert_eq!(
        designs.names().collect::<Vec<_>>(),
        vec!["MPS2.5_R042_Mo140_Al400.mpar", "MPS3_R036_Mo200.mpar"]
    );

    let a = designs.get("MPS2.5_R042_Mo140_Al400.mpar").unwrap();
    assert_eq!(a.tracking_id, "TRK-0042");
    assert_eq!(a.tech_version, "2.5");
    assert_eq!(
        a.stack.keys().collect::<Vec<_>>(),
        vec!["Mo", "Al", "LT", "SiO2", "piezo"]
    );

    // R036 file with a 42 header is patched to the 36 class
    let b = designs.get("MPS3_R036_Mo200.mpar").unwrap();
    assert_eq!(b.stack.get("piezo"), Some(&StackValue::text("36_LT")));
    assert_eq!(b.tech_version, "3.0");
}

#[test]
fn test_measurement_catalog_extraction() {
    let temp = fixture();
    let (_, measurements) = scan(temp.path());

    assert_eq!(
        measurements.names().collect::<Vec<_>>(),
        vec!["COMlib_2.mps.rpar", "COMlib_10.mps.rpar", "COMlib_LT36_1.rpar"]
    );

    let common = measurements.get("COMlib_2.mps.rpar").unwrap();
    assert_eq!(common.design_ref, "MPS2.5_R042_Mo140_Al400.mpar");
    assert_eq!(common.stack.keys().collect::<Vec<_>>(), vec!["Mo", "fc"]);

    let range = measurements.get("COMlib_10.mps.rpar").unwrap();
    assert_eq!(range.design_ref, "");
    assert_eq!(range.stack.get("Al"), Some(&StackValue::Int(400)));

    let parameter = measurements.get("COMlib_LT36_1.rpar").unwrap();
    assert_eq!(parameter.stack.get("W"), Some(&StackValue::Int(20)));
}

#[test]
fn test_enrich_then_link() {
    let temp = fixture();
    let (designs, mut measurements) = scan(temp.path());

    let table = JsonTable::from_rows(
        serde_json::from_value::<Vec<stacklink::enrich::TableRow>>(serde_json::json!([
            {"name": "COMlib_2", "version": 2},
            {"name": "COMlib_10", "version": "1.5", "piezo": "42_LT"},
            {"name": "COMlib_LT36_1", "version": 4}
        ]))
        .unwrap(),
    );
    let stats = enrich_measurements(
        &mut measurements,
        Some(&designs),
        Some(&table as &dyn TableSource),
        &LookupConfig {
            filter_by_version: true,
            ..LookupConfig::default()
        },
    );
    assert_eq!(stats.rejected, 0);
    assert_eq!(stats.merged, 1);

    // Measured Mo wins over the design value after the merge
    let common = measurements.get("COMlib_2.mps.rpar").unwrap();
    assert_eq!(common.stack.get("Mo"), Some(&StackValue::Int(141)));
    assert_eq!(common.stack.get("Al"), Some(&StackValue::Int(400)));
    // No piezo column: falls back to the default
    assert_eq!(common.stack.get("piezo"), Some(&StackValue::text("42_LT")));

    // Piezo derived from the row name
    let parameter = measurements.get("COMlib_LT36_1.rpar").unwrap();
    assert_eq!(parameter.stack.get("piezo"), Some(&StackValue::text("36_LT")));

    let links = link(&designs, &measurements);
    assert_eq!(
        links.get("MPS2.5_R042_Mo140_Al400.mpar").unwrap().measurements,
        vec!["COMlib_2.mps.rpar", "COMlib_10.mps.rpar"]
    );
    assert_eq!(
        links.get("MPS3_R036_Mo200.mpar").unwrap().measurements,
        vec!["COMlib_LT36_1.rpar"]
    );
}

#[test]
fn test_catalogs_round_trip_through_json() {
    let temp = fixture();
    let (designs, measurements) = scan(temp.path());
    let links = link(&designs, &measurements);
    let out = temp.path().join("output");

    save_json(&out.join("mpar.json"), &designs).unwrap();
    save_json(&out.join("rpar.json"), &measurements).unwrap();
    save_json(&out.join("link_mpar.json"), &links).unwrap();

    let designs_back: DesignCatalog = load_json(&out.join("mpar.json")).unwrap();
    let measurements_back: MeasurementCatalog = load_json(&out.join("rpar.json")).unwrap();
    let links_back: LinkTable = load_json(&out.join("link_mpar.json")).unwrap();

    assert_eq!(designs_back, designs);
    assert_eq!(measurements_back, measurements);
    assert_eq!(links_back, links);

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out.join("mpar.json")).unwrap()).unwrap();
    assert_eq!(raw["MPS3_R036_Mo200.mpar"]["id"], "TRK-0036");
    assert_eq!(raw["MPS3_R036_Mo200.mpar"]["stack"]["Mo"], 200);
}
