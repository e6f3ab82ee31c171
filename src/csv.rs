// src/csv.rs
//
// Delimited rendering of `DataSet`s for CSV export and the clipboard.

use ::csv::WriterBuilder;

use crate::core::error::Result;
use crate::store::DataSet;

/// One data set as delimited text. Rows may be ragged.
pub fn to_delimited(ds: &DataSet, include_headers: bool, delim: u8) -> Result<String> {
    let mut w = WriterBuilder::new()
        .delimiter(delim)
        .flexible(true)
        .from_writer(Vec::new());

    if include_headers {
        if let Some(h) = &ds.headers {
            w.write_record(h)?;
        }
    }
    for r in &ds.rows {
        w.write_record(r)?;
    }

    let buf = w.into_inner().map_err(|e| e.into_error())?;
    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

/// Several sets, separated by a blank line (clipboard copy of many tables).
pub fn datasets_to_string(sets: &[(String, DataSet)], include_headers: bool, delim: u8) -> Result<String> {
    let parts = sets
        .iter()
        .map(|(_, ds)| to_delimited(ds, include_headers, delim))
        .collect::<Result<Vec<_>>>()?;
    Ok(parts.join("\n"))
}
