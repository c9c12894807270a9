//! Tests for roster-model types.

use roster_model::{CellValue, CompletenessSummary, FilterSpec, Table};

#[test]
fn completeness_summary_serializes() {
    let summary = CompletenessSummary::from_counts(
        3,
        1,
        vec!["Name".to_string()],
        vec!["Sponsor".to_string()],
    );
    let json = serde_json::to_value(&summary).expect("serialize summary");
    assert_eq!(json["total_count"], 3);
    assert_eq!(json["incomplete_count"], 2);
    assert_eq!(json["complete_percent"], 33.3);
    assert_eq!(json["ignored_columns"][0], "Sponsor");
}

#[test]
fn table_round_trips_through_json() {
    let table = Table::from_rows(
        vec!["Dept".to_string(), "Age".to_string()],
        vec![
            vec![CellValue::text("HR"), CellValue::from(31.0)],
            vec![CellValue::Null, CellValue::Null],
        ],
    )
    .expect("build table");
    let json = serde_json::to_string(&table).expect("serialize table");
    let round: Table = serde_json::from_str(&json).expect("deserialize table");
    assert_eq!(round, table);
}

#[test]
fn filter_spec_round_trips_through_json() {
    let spec = FilterSpec::new().with("Dept", vec![CellValue::text("HR"), CellValue::from(7.0)]);
    let json = serde_json::to_string(&spec).expect("serialize spec");
    let round: FilterSpec = serde_json::from_str(&json).expect("deserialize spec");
    assert_eq!(round, spec);
}
