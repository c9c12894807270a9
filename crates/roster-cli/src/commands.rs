use std::io;

use anyhow::{Context, Result};
use roster_cli::pipeline::{build_filter, load_sheet, parse_where};
use roster_ingest::load_workbook;
use roster_model::DashboardConfig;
use roster_output::{export_csv, export_json_report, write_json_report};
use roster_profile::{
    apply_filter, build_dashboard, build_distributions, build_missing_report, build_overview,
};
use tracing::{info_span, warn};

use crate::cli::{FilterArgs, MissingArgs, ReportArgs, SheetArgs, WorkbookArgs};
use crate::summary::{
    print_distributions, print_missing, print_overview, print_preview, print_sheets,
};

pub fn run_sheets(args: &WorkbookArgs) -> Result<()> {
    let _span = info_span!("sheets").entered();
    let workbook = load_workbook(&args.workbook)
        .with_context(|| format!("load workbook {}", args.workbook.display()))?;
    print_sheets(workbook.sheets());
    Ok(())
}

pub fn run_overview(args: &SheetArgs, config: &DashboardConfig) -> Result<()> {
    let _span = info_span!("overview_command").entered();
    let sheet = load_sheet(&args.workbook.workbook, args.sheet.as_deref())?;
    let overview = build_overview(&sheet.table, config).context("build overview")?;
    for (label, summary) in [
        ("citizens", &overview.citizens),
        ("non_citizens", &overview.non_citizens),
    ] {
        if !summary.ignored_columns.is_empty() {
            warn!(
                population = label,
                columns = %summary.ignored_columns.join(", "),
                "policy columns missing from sheet"
            );
        }
    }
    print_overview(&sheet.name, &overview);
    Ok(())
}

pub fn run_missing(args: &MissingArgs, config: &DashboardConfig) -> Result<()> {
    let _span = info_span!("missing_command").entered();
    let sheet = load_sheet(&args.sheet.workbook.workbook, args.sheet.sheet.as_deref())?;
    let report = build_missing_report(&sheet.table, config, args.column.as_deref())
        .context("build missing-data report")?;
    print_missing(&report);
    Ok(())
}

pub fn run_distributions(args: &SheetArgs, config: &DashboardConfig) -> Result<()> {
    let _span = info_span!("distributions_command").entered();
    let sheet = load_sheet(&args.workbook.workbook, args.sheet.as_deref())?;
    let distributions =
        build_distributions(&sheet.table, &config.analytics).context("build distributions")?;
    print_distributions(&distributions);
    Ok(())
}

pub fn run_filter(args: &FilterArgs) -> Result<()> {
    let _span = info_span!("filter_command").entered();
    let sheet = load_sheet(&args.sheet.workbook.workbook, args.sheet.sheet.as_deref())?;
    let clauses = args
        .clauses
        .iter()
        .map(|raw| parse_where(raw))
        .collect::<Result<Vec<_>>>()?;
    let spec = build_filter(&sheet.table, &clauses)?;
    let filtered = apply_filter(&sheet.table, &spec).context("apply filter")?;
    println!(
        "Sheet: {} ({} of {} rows match)",
        sheet.name,
        filtered.height(),
        sheet.table.height()
    );
    if filtered.is_empty() {
        warn!("filter matched no rows");
        println!("No rows match the filter; nothing exported.");
        return Ok(());
    }
    print_preview(&filtered, args.limit);
    if let Some(path) = &args.output {
        export_csv(&filtered, path).with_context(|| format!("export {}", path.display()))?;
        println!("Exported {} rows to {}", filtered.height(), path.display());
    }
    Ok(())
}

pub fn run_report(args: &ReportArgs, config: &DashboardConfig) -> Result<()> {
    let _span = info_span!("report_command").entered();
    let sheet = load_sheet(&args.sheet.workbook.workbook, args.sheet.sheet.as_deref())?;
    let report = build_dashboard(&sheet.name, &sheet.table, config, args.column.as_deref())
        .context("build dashboard report")?;
    match &args.output {
        Some(path) => {
            export_json_report(&report, path)
                .with_context(|| format!("write report {}", path.display()))?;
            println!("Report written to {}", path.display());
        }
        None => write_json_report(&report, io::stdout().lock()).context("write report")?,
    }
    Ok(())
}
