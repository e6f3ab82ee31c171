// src/pdf.rs
//
// Text and metadata of a linked PDF, for the "Extract info" action next to
// each scraped PDF link.

use std::time::Duration;

use lopdf::{Dictionary, Document, Object};
use serde::Serialize;

use crate::config::consts::{NA, PAGE_TIMEOUT_SECS};
use crate::core::error::{Result, ScrapeError};
use crate::core::net::Fetch;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PdfInfo {
    pub text: String,
    pub title: String,
    pub author: String,
    pub page_count: usize,
}

pub fn fetch_pdf_info(net: &dyn Fetch, url: &str) -> Result<PdfInfo> {
    logf!("PDF: downloading {url}");
    let bytes = net.get_bytes(url, Duration::from_secs(PAGE_TIMEOUT_SECS))?;
    extract_pdf_info(&bytes)
}

pub fn extract_pdf_info(bytes: &[u8]) -> Result<PdfInfo> {
    let doc = Document::load_mem(bytes).map_err(|e| ScrapeError::Pdf(e.to_string()))?;
    let pages = doc.get_pages();

    let mut text = String::new();
    for (&number, _) in pages.iter() {
        match doc.extract_text(&[number]) {
            Ok(t) if !t.trim().is_empty() => {
                text.push_str(t.trim_end());
                text.push('\n');
            }
            Ok(_) => {}
            Err(e) => logd!("PDF: no text on page {number}: {e}"),
        }
    }

    let info = info_dict(&doc);
    Ok(PdfInfo {
        text,
        title: info_string(info, b"Title"),
        author: info_string(info, b"Author"),
        page_count: pages.len(),
    })
}

fn info_dict(doc: &Document) -> Option<&Dictionary> {
    match doc.trailer.get(b"Info").ok()? {
        Object::Reference(id) => doc.get_dictionary(*id).ok(),
        Object::Dictionary(d) => Some(d),
        _ => None,
    }
}

fn info_string(info: Option<&Dictionary>, key: &[u8]) -> String {
    let decoded = info
        .and_then(|d| d.get(key).ok())
        .and_then(|obj| match obj {
            Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
            _ => None,
        })
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    decoded.unwrap_or_else(|| s!(NA))
}

/// UTF-16BE when it carries the BOM, otherwise one byte per char.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = rest
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }
    match std::str::from_utf8(bytes) {
        Ok(s) => s!(s),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Stream, StringFormat};

    fn one_page_pdf(info: Option<Dictionary>) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal("Quarterly report")]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );
        let catalog_id = doc.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        doc.trailer.set("Root", catalog_id);
        if let Some(info) = info {
            let info_id = doc.add_object(info);
            doc.trailer.set("Info", info_id);
        }
        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn reads_text_and_metadata() {
        let info = dictionary! {
            "Title" => Object::String(vec![0xFE, 0xFF, 0, b'Q', 0, b'3'], StringFormat::Hexadecimal),
            "Author" => Object::string_literal("Finance Team"),
        };
        let got = extract_pdf_info(&one_page_pdf(Some(info))).unwrap();
        assert_eq!(got.page_count, 1);
        assert_eq!(got.title, "Q3");
        assert_eq!(got.author, "Finance Team");
        assert!(got.text.contains("Quarterly report"));
    }

    #[test]
    fn missing_metadata_is_na() {
        let got = extract_pdf_info(&one_page_pdf(None)).unwrap();
        assert_eq!(got.title, "N/A");
        assert_eq!(got.author, "N/A");
    }

    #[test]
    fn garbage_is_a_pdf_error() {
        assert!(matches!(extract_pdf_info(b"not a pdf"), Err(ScrapeError::Pdf(_))));
    }
}
