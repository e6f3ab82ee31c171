// src/web/form.rs
use url::form_urlencoded;

use crate::config::options::{ImageFormat, PageKind, VideoFormat, parse_limit};

/// The scrape form as posted. Unknown or malformed fields fall back to defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrapeForm {
    pub url: String,
    pub data_type: PageKind,
    pub image_format: ImageFormat,
    pub video_format: VideoFormat,
    pub num_items: Option<usize>,
    /// 1-based table numbers ticked on a previous result page.
    pub tables: Vec<usize>,
}

impl ScrapeForm {
    /// `table_number` may repeat, so this reads the raw body rather than a
    /// serde struct.
    pub fn parse(body: &[u8]) -> Self {
        let mut form = ScrapeForm::default();
        for (key, value) in form_urlencoded::parse(body) {
            let value = value.trim();
            match key.as_ref() {
                "url" => form.url = value.to_string(),
                "data_type" => {
                    if let Some(kind) = PageKind::from_form_key(value) {
                        form.data_type = kind;
                    }
                }
                "image_format" => form.image_format = ImageFormat::parse(value).unwrap_or_default(),
                "video_format" => form.video_format = VideoFormat::parse(value).unwrap_or_default(),
                // per-kind names from older forms
                "num_items" | "num_images" | "num_videos" | "num_products" | "num_headlines" => {
                    if let Some(n) = parse_limit(value) {
                        form.num_items = Some(n);
                    }
                }
                "table_number" => {
                    if let Ok(n) = value.parse::<usize>() {
                        if n > 0 && !form.tables.contains(&n) {
                            form.tables.push(n);
                        }
                    }
                }
                _ => {}
            }
        }
        form
    }

    /// Whether table `n` (1-based) should be shown.
    pub fn shows_table(&self, n: usize) -> bool {
        self.tables.is_empty() || self.tables.contains(&n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_repeated_table_numbers() {
        let form = ScrapeForm::parse(b"url=https%3A%2F%2Fa.com%2Fx&data_type=table&table_number=2&table_number=3&table_number=2");
        assert_eq!(form.url, "https://a.com/x");
        assert_eq!(form.data_type, PageKind::Tables);
        assert_eq!(form.tables, vec![2, 3]);
        assert!(form.shows_table(3));
        assert!(!form.shows_table(1));
    }

    #[test]
    fn bad_values_fall_back() {
        let form = ScrapeForm::parse(b"data_type=nope&image_format=bmp&num_items=ten&url=+cats+");
        assert_eq!(form.data_type, PageKind::Images);
        assert_eq!(form.image_format, ImageFormat::All);
        assert_eq!(form.num_items, None);
        assert_eq!(form.url, "cats");
        assert!(form.shows_table(1));
    }

    #[test]
    fn legacy_count_fields_are_accepted() {
        let form = ScrapeForm::parse(b"data_type=video&video_format=webm&num_videos=4");
        assert_eq!(form.data_type, PageKind::Videos);
        assert_eq!(form.video_format, VideoFormat::Webm);
        assert_eq!(form.num_items, Some(4));
    }
}
