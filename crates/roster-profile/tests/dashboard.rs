//! End-to-end profiling scenarios.

use roster_model::{
    CellValue, ColumnStrictness, CompletenessPolicy, DashboardConfig, FilterSpec, PopulationRule,
    Table,
};
use roster_profile::{
    apply_filter, build_dashboard, build_overview, evaluate_completeness, profile_missingness,
    split_population,
};

fn column(name: &str) -> String {
    name.to_string()
}

#[test]
fn inclusion_policy_on_matched_group() {
    let table = Table::from_rows(
        vec![column("Nationality"), column("X")],
        vec![
            vec![CellValue::text("A"), CellValue::from(1.0)],
            vec![CellValue::text("B"), CellValue::Null],
            vec![CellValue::text("A"), CellValue::from(2.0)],
        ],
    )
    .expect("build table");

    let split = split_population(&table, "Nationality", "A").expect("split");
    let summary = evaluate_completeness(
        &split.matched,
        &CompletenessPolicy::inclusion(["X"]),
        ColumnStrictness::Strict,
    )
    .expect("evaluate");

    assert_eq!(summary.total_count, 2);
    assert_eq!(summary.complete_count, 2);
    assert_eq!(summary.incomplete_count, 0);
    assert_eq!(summary.complete_percent, 100.0);
}

#[test]
fn missingness_of_half_empty_column() {
    let table = Table::from_rows(
        vec![column("Age")],
        vec![
            vec![CellValue::from(20.0)],
            vec![CellValue::Null],
            vec![CellValue::from(40.0)],
            vec![CellValue::Null],
        ],
    )
    .expect("build table");

    let rows = profile_missingness(&table, &[]);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].column_name, "Age");
    assert_eq!(rows[0].missing_count, 2);
    assert_eq!(rows[0].missing_percent, 50.0);
}

#[test]
fn filter_keeps_matching_rows_in_order() {
    let table = Table::from_rows(
        vec![column("Dept"), column("Id")],
        vec![
            vec![CellValue::text("HR"), CellValue::from(1i64)],
            vec![CellValue::text("IT"), CellValue::from(2i64)],
            vec![CellValue::text("HR"), CellValue::from(3i64)],
        ],
    )
    .expect("build table");

    let spec = FilterSpec::new().with("Dept", vec![CellValue::text("HR")]);
    let filtered = apply_filter(&table, &spec).expect("filter");

    assert_eq!(filtered.columns, table.columns);
    assert_eq!(filtered.rows, vec![table.rows[0].clone(), table.rows[2].clone()]);
}

fn roster() -> Table {
    let row = |nat: &str, name: Option<&str>, visa: Option<&str>| {
        vec![
            CellValue::text(nat),
            name.map(CellValue::text).into(),
            visa.map(CellValue::text).into(),
        ]
    };
    Table::from_rows(
        vec![column("Nat"), column("Name"), column("Visa")],
        vec![
            row("C", Some("a"), None),
            row("C", None, None),
            row("C", Some("c"), Some("v")),
            row("R", Some("d"), Some("v")),
            row("R", Some("e"), None),
            row("R", None, None),
        ],
    )
    .expect("build table")
}

fn config() -> DashboardConfig {
    DashboardConfig {
        population: PopulationRule::new("Nat", "C"),
        citizen_policy: CompletenessPolicy::exclusion(["Visa", "Permit"]),
        non_citizen_policy: CompletenessPolicy::inclusion(["Visa", "Permit"]),
        ..DashboardConfig::default()
    }
}

#[test]
fn overview_snapshot() {
    let overview = build_overview(&roster(), &config()).expect("overview");
    insta::assert_json_snapshot!("overview", overview);
}

#[test]
fn strict_config_rejects_absent_policy_columns() {
    let config = DashboardConfig {
        strictness: ColumnStrictness::Strict,
        ..config()
    };
    let err = build_overview(&roster(), &config).unwrap_err();
    assert_eq!(err.to_string(), "column 'Permit' not found");
}

#[test]
fn dashboard_report_serializes_every_view() {
    let report = build_dashboard("Finance", &roster(), &config(), Some("Visa")).expect("report");
    let json = serde_json::to_value(&report).expect("serialize report");

    assert_eq!(json["sheet"], "Finance");
    assert_eq!(json["row_count"], 6);
    assert_eq!(json["overview"]["non_citizens"]["checked_columns"][0], "Visa");
    assert_eq!(json["missing"]["citizens"][0]["column_name"], "Name");
    assert_eq!(json["missing"]["non_citizens"][1]["column_name"], "Visa");
    assert_eq!(json["missing"]["column"]["missing_count"], 4);
    assert!(json["distributions"]["age_histogram"].is_null());
}
