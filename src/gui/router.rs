// src/gui/router.rs
use super::pages::{self, Page};

/// Tab order; matches `PageKind::ALL`.
pub static PAGES: &[&'static dyn Page] = &[
    &pages::images::PAGE,
    &pages::text::PAGE,
    &pages::tables::PAGE,
    &pages::details::MOVIE,
    &pages::details::BOOK,
    &pages::lists::VIDEOS,
    &pages::products::PAGE,
    &pages::lists::HEADLINES,
    &pages::lists::PDF_LINKS,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::PageKind;

    #[test]
    fn tabs_follow_kind_order() {
        let kinds: Vec<PageKind> = all_pages().iter().map(|p| p.kind()).collect();
        assert_eq!(kinds, PageKind::ALL);
    }
}
