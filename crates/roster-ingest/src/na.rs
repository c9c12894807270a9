//! Missing-value markers.
//!
//! Spreadsheet exports often spell a blank cell out as text. These markers,
//! and non-finite numbers, load as `Null` so they count as missing.

use roster_model::CellValue;

/// Text cells that load as `Null`. Matched exactly, case and whitespace included.
const NA_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_na_token(value: &str) -> bool {
    value.is_empty() || NA_TOKENS.contains(&value)
}

pub(crate) fn text_cell(value: &str) -> CellValue {
    if is_na_token(value) {
        CellValue::Null
    } else {
        CellValue::text(value)
    }
}

pub(crate) fn number_cell(value: f64) -> CellValue {
    if value.is_finite() {
        CellValue::Number(value)
    } else {
        CellValue::Null
    }
}
