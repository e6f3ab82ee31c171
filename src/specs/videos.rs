// src/specs/videos.rs
use scraper::Html;

use crate::config::options::VideoFormat;
use crate::core::url::{path_extension, resolve};

/// `<source src>` of every `<video>`, filtered by extension.
pub fn parse_video_urls(html: &str, base: &str, format: VideoFormat) -> Vec<String> {
    let doc = Html::parse_document(html);
    let mut out = Vec::new();
    for video in doc.select(css!("video")) {
        for source in video.select(css!("source[src]")) {
            let Some(src) = source.value().attr("src").map(str::trim).filter(|s| !s.is_empty()) else {
                continue;
            };
            if !format.accepts(&path_extension(src)) {
                continue;
            }
            if let Some(url) = resolve(base, src) {
                out.push(url);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <video><source src="/media/intro.mp4?v=2"><source src="intro.webm"></video>
        <video><source src="https://cdn.x/clip.MOV"></video>
        <source src="/orphan.mp4">
    "#;

    #[test]
    fn all_formats_resolve_relative() {
        let urls = parse_video_urls(PAGE, "https://site.com/watch/", VideoFormat::All);
        assert_eq!(
            urls,
            [
                "https://site.com/media/intro.mp4?v=2",
                "https://site.com/watch/intro.webm",
                "https://cdn.x/clip.MOV",
            ]
        );
    }

    #[test]
    fn format_filter_ignores_query_and_case() {
        let mp4 = parse_video_urls(PAGE, "https://site.com/", VideoFormat::Mp4);
        assert_eq!(mp4, ["https://site.com/media/intro.mp4?v=2"]);
        let mov = parse_video_urls(PAGE, "https://site.com/", VideoFormat::Mov);
        assert_eq!(mov, ["https://cdn.x/clip.MOV"]);
    }
}
