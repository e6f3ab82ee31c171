// src/gui/pages/lists.rs
use eframe::egui;

use crate::config::options::PageKind;
use crate::data::Scraped;

use super::{numbered_list, Page, PageView};

/// Numbered one-column results: video URLs, headlines, PDF links.
pub struct ListPage(PageKind);

pub static VIDEOS: ListPage = ListPage(PageKind::Videos);
pub static HEADLINES: ListPage = ListPage(PageKind::Headlines);
pub static PDF_LINKS: ListPage = ListPage(PageKind::PdfLinks);

impl Page for ListPage {
    fn kind(&self) -> PageKind {
        self.0
    }

    fn show(&self, ui: &mut egui::Ui, view: &mut PageView<'_>) {
        match view.data {
            Scraped::Videos(urls) => numbered_list(ui, urls, |ui, url| {
                ui.hyperlink(url);
            }),
            Scraped::Headlines(lines) => numbered_list(ui, lines, |ui, line| {
                ui.label(line.as_str());
            }),
            Scraped::PdfLinks(links) => numbered_list(ui, links, |ui, link| {
                ui.hyperlink_to(link.name.as_str(), &link.url).on_hover_text(link.url.as_str());
            }),
            _ => {}
        }
    }
}
