// src/specs/tables.rs
use scraper::Html;

use crate::core::html::text_of;
use crate::data::Table;

/// Every `<table>` with at least one row.
///
/// The header is all `th` texts in the table. When there is one, the first
/// `tr` is taken to be the header row and skipped in the body. Body rows are
/// `tr`s that have `td` cells.
pub fn parse_tables(html: &str) -> Vec<Table> {
    let doc = Html::parse_document(html);
    let mut out = Vec::new();
    for table in doc.select(css!("table")) {
        let header: Vec<String> = table.select(css!("th")).map(text_of).collect();
        let skip = usize::from(!header.is_empty());
        let rows: Vec<Vec<String>> = table
            .select(css!("tr"))
            .skip(skip)
            .map(|tr| tr.select(css!("td")).map(text_of).collect::<Vec<_>>())
            .filter(|cells| !cells.is_empty())
            .collect();
        let headers = (!header.is_empty()).then_some(header);
        if headers.is_none() && rows.is_empty() {
            continue;
        }
        out.push(Table::new(headers, rows));
    }
    out
}
