use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_ingest::Sheet;
use roster_model::{
    BoxStats, CompletenessSummary, Histogram, MissingnessRow, Table as RecordTable,
    format_number,
};
use roster_profile::{Distributions, MissingReport, Overview};

pub fn print_sheets(sheets: &[Sheet]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Rows"),
        header_cell("Columns"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for sheet in sheets {
        table.add_row(vec![
            Cell::new(&sheet.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(sheet.table.height()),
            Cell::new(sheet.table.width()),
        ]);
    }
    println!("{table}");
}

pub fn print_overview(sheet: &str, overview: &Overview) {
    println!("Sheet: {sheet}");
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Population"),
        header_cell("Records"),
        header_cell("Complete"),
        header_cell("Incomplete"),
        header_cell("Complete %"),
        header_cell("Incomplete %"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (label, summary) in [
        ("Citizens", &overview.citizens),
        ("Non-citizens", &overview.non_citizens),
    ] {
        table.add_row(vec![
            Cell::new(label)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.total_count),
            count_cell(summary.complete_count, Color::Green),
            count_cell(summary.incomplete_count, Color::Red),
            Cell::new(percent_text(summary.complete_percent)),
            Cell::new(percent_text(summary.incomplete_percent)),
        ]);
    }
    println!("{table}");
    print_ignored("Citizens", &overview.citizens);
    print_ignored("Non-citizens", &overview.non_citizens);
}

fn print_ignored(label: &str, summary: &CompletenessSummary) {
    if !summary.ignored_columns.is_empty() {
        eprintln!(
            "{label}: policy columns not in sheet: {}",
            summary.ignored_columns.join(", ")
        );
    }
}

pub fn print_missing(report: &MissingReport) {
    print_missing_rows("Citizens", &report.citizens);
    print_missing_rows("Non-citizens", &report.non_citizens);
    if let Some(presence) = &report.column {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Column"),
            header_cell("Present"),
            header_cell("Missing"),
            header_cell("Present %"),
            header_cell("Missing %"),
        ]);
        apply_table_style(&mut table);
        for index in 1..=4 {
            align_column(&mut table, index, CellAlignment::Right);
        }
        table.add_row(vec![
            Cell::new(&presence.column),
            count_cell(presence.present_count, Color::Green),
            count_cell(presence.missing_count, Color::Red),
            Cell::new(percent_text(presence.present_percent())),
            Cell::new(percent_text(presence.missing_percent())),
        ]);
        println!();
        println!("Column:");
        println!("{table}");
    }
}

fn print_missing_rows(label: &str, rows: &[MissingnessRow]) {
    println!("{label}:");
    if rows.is_empty() {
        println!("  no missing data");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Missing"),
        header_cell("Missing %"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.column_name),
            count_cell(row.missing_count, Color::Red),
            Cell::new(percent_text(row.missing_percent)),
        ]);
    }
    println!("{table}");
}

pub fn print_distributions(distributions: &Distributions) {
    for category in &distributions.categories {
        let mut table = Table::new();
        table.set_header(vec![header_cell(&category.column), header_cell("Count")]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for entry in &category.counts {
            table.add_row(vec![Cell::new(&entry.value), Cell::new(entry.count)]);
        }
        println!("{table}");
    }
    if let Some(histogram) = &distributions.age_histogram {
        print_histogram(histogram);
    }
    if !distributions.age_by_gender.is_empty() {
        print_box_stats(&distributions.age_by_gender);
    }
    if distributions.categories.is_empty()
        && distributions.age_histogram.is_none()
        && distributions.age_by_gender.is_empty()
    {
        println!("No analytics columns found in sheet.");
    }
}

fn print_histogram(histogram: &Histogram) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(&format!("{} range", histogram.column)),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for bin in &histogram.bins {
        table.add_row(vec![
            Cell::new(format!(
                "{} - {}",
                format_number(bin.lower),
                format_number(bin.upper)
            )),
            Cell::new(bin.count),
        ]);
    }
    println!("{table}");
    if histogram.skipped_count > 0 {
        eprintln!(
            "{}: {} non-numeric values left out of the histogram",
            histogram.column, histogram.skipped_count
        );
    }
}

fn print_box_stats(stats: &[BoxStats]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Count"),
        header_cell("Min"),
        header_cell("Q1"),
        header_cell("Median"),
        header_cell("Q3"),
        header_cell("Max"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for group in stats {
        table.add_row(vec![
            Cell::new(&group.group),
            Cell::new(group.count),
            Cell::new(format_number(group.min)),
            Cell::new(format_number(group.q1)),
            Cell::new(format_number(group.median)),
            Cell::new(format_number(group.q3)),
            Cell::new(format_number(group.max)),
        ]);
    }
    println!("{table}");
}

/// First `limit` rows of `records`; nulls shown dimmed.
pub fn print_preview(records: &RecordTable, limit: usize) {
    let mut table = Table::new();
    table.set_header(records.columns.iter().map(|name| header_cell(name)));
    apply_table_style(&mut table);
    for row in records.rows.iter().take(limit) {
        table.add_row(row.iter().map(|value| {
            if value.is_null() {
                dim_cell("-")
            } else {
                Cell::new(value)
            }
        }));
    }
    println!("{table}");
    if records.height() > limit {
        println!("... {} more rows", records.height() - limit);
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn percent_text(value: f64) -> String {
    format!("{value:.1}%")
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
