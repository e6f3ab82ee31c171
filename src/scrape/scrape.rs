// src/scrape/scrape.rs
use std::sync::Arc;

use crate::{
    config::consts::{BROWSER_WAIT_SECS, PDF_BROWSER_WAIT_SECS},
    config::options::{ImageFormat, PageKind, ScrapeOptions, VideoFormat},
    core::browser::{NoBrowser, Render, RenderPlan},
    core::error::{Result, ScrapeError},
    core::net::{Fetch, HeaderSet, HttpClient},
    core::url::{normalize_target, search_url},
    data::{BookDetails, MovieDetails, PdfLink, Product, Scraped, Table},
    progress::Progress,
    specs,
};

/// Buttons that commonly hide document lists behind a click.
const PDF_REVEAL_BUTTONS: &[&str] = &["Documents", "Resources", "Show More"];

/// Fetch + parse for every page kind, with the headless-browser retry.
#[derive(Clone)]
pub struct Scraper {
    net: Arc<dyn Fetch>,
    browser: Arc<dyn Render>,
}

#[cfg(feature = "browser")]
fn default_browser(enabled: bool) -> Arc<dyn Render> {
    if enabled {
        Arc::new(crate::core::browser::HeadlessChrome::new())
    } else {
        Arc::new(NoBrowser)
    }
}

#[cfg(not(feature = "browser"))]
fn default_browser(_enabled: bool) -> Arc<dyn Render> {
    Arc::new(NoBrowser)
}

impl Scraper {
    pub fn new(opts: &ScrapeOptions) -> Result<Self> {
        let net: Arc<dyn Fetch> = Arc::new(HttpClient::new()?);
        Ok(Self { net, browser: default_browser(opts.use_browser) })
    }

    pub fn with_parts(net: Arc<dyn Fetch>, browser: Arc<dyn Render>) -> Self {
        Self { net, browser }
    }

    /// The HTTP side, shared with the image download pool.
    pub fn net(&self) -> Arc<dyn Fetch> {
        Arc::clone(&self.net)
    }

    /// Validate the target, scrape it, apply limits.
    /// Images come back unfiltered; see `data::filter_images`.
    pub fn run(&self, opts: &ScrapeOptions, mut progress: Option<&mut dyn Progress>) -> Result<Scraped> {
        let kind = opts.page;
        let target = normalize_target(kind, &opts.target)?;
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Scraping {}...", kind.noun()));
        }
        logf!("Scrape {} from {target}", kind.slug());

        let mut scraped = match kind {
            PageKind::Images    => Scraped::Images(self.collect_images(&target)?),
            PageKind::Text      => Scraped::Text(self.collect_text(&target)?),
            PageKind::Tables    => Scraped::Tables(self.collect_tables(&target, opts.table_limit)?),
            PageKind::Movie     => Scraped::Movie(self.collect_movie(&target)?),
            PageKind::Book      => Scraped::Book(self.collect_book(&target)?),
            PageKind::Videos    => Scraped::Videos(self.collect_videos(&target, opts.video_format)?),
            PageKind::Products  => Scraped::Products(self.collect_products(&target, opts.image_format)?),
            PageKind::Headlines => Scraped::Headlines(self.collect_headlines(&target)?),
            PageKind::PdfLinks  => Scraped::PdfLinks(self.collect_pdf_links(&target)?),
        };

        if kind.uses_item_limit() && kind != PageKind::Images {
            if let Some(n) = opts.item_limit {
                scraped.truncate(n);
            }
        }

        logf!("Scrape {}: {} item(s)", kind.slug(), scraped.len());
        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        Ok(scraped)
    }

    /// Second pass through the browser. Any failure there just means
    /// "still nothing".
    fn rendered<T>(&self, url: &str, plan: RenderPlan, parse: impl FnOnce(&str) -> Vec<T>) -> Vec<T> {
        logf!("Nothing found statically at {url}, trying the browser");
        match self.browser.render(url, &plan) {
            Ok(html) => parse(&html),
            Err(ScrapeError::BrowserDisabled) => {
                logd!("Browser fallback disabled; keeping empty result for {url}");
                Vec::new()
            }
            Err(e) => {
                logw!("Browser fallback failed for {url}: {e}");
                Vec::new()
            }
        }
    }

    pub fn collect_images(&self, url: &str) -> Result<Vec<String>> {
        let html = self.net.get_text(url, HeaderSet::Default)?;
        let urls = specs::images::parse_image_urls(&html, url);
        if !urls.is_empty() {
            return Ok(urls);
        }
        let plan = RenderPlan::wait_for("img", BROWSER_WAIT_SECS);
        Ok(self.rendered(url, plan, |html| specs::images::parse_image_urls(html, url)))
    }

    pub fn collect_text(&self, url: &str) -> Result<String> {
        let html = self.net.get_text(url, HeaderSet::Default)?;
        Ok(specs::text::parse_text(&html))
    }

    pub fn collect_tables(&self, url: &str, limit: Option<usize>) -> Result<Vec<Table>> {
        let html = self.net.get_text(url, HeaderSet::Default)?;
        let mut tables = specs::tables::parse_tables(&html);
        if let Some(n) = limit {
            tables.truncate(n);
        }
        Ok(tables)
    }

    pub fn collect_movie(&self, term: &str) -> Result<MovieDetails> {
        let search = search_url(PageKind::Movie, term)
            .ok_or_else(|| ScrapeError::InvalidTarget(s!("No movie search endpoint")))?;
        let results = self.net.get_text(&search, HeaderSet::Default)?;
        let link = specs::movie::parse_movie_search(&results)
            .ok_or_else(|| ScrapeError::NotFound(s!("No movie found with that name.")))?;
        logd!("Movie: first hit {link}");
        let page = self.net.get_text(&link, HeaderSet::Default)?;
        Ok(specs::movie::parse_movie_page(&page, &link))
    }

    pub fn collect_book(&self, term: &str) -> Result<BookDetails> {
        let search = search_url(PageKind::Book, term)
            .ok_or_else(|| ScrapeError::InvalidTarget(s!("No book search endpoint")))?;
        let results = self.net.get_text(&search, HeaderSet::Default)?;
        let mut book = specs::book::parse_book_search(&results)
            .ok_or_else(|| ScrapeError::NotFound(s!("No book found with that name.")))?;
        logd!("Book: first hit {}", book.book_link);
        let detail = self.net.get_text(&book.book_link, HeaderSet::Default)?;
        book.description = specs::book::parse_book_description(&detail);
        Ok(book)
    }

    pub fn collect_videos(&self, url: &str, format: VideoFormat) -> Result<Vec<String>> {
        let html = self.net.get_text(url, HeaderSet::Default)?;
        let urls = specs::videos::parse_video_urls(&html, url, format);
        if !urls.is_empty() {
            return Ok(urls);
        }
        let plan = RenderPlan::wait_for("video", BROWSER_WAIT_SECS);
        Ok(self.rendered(url, plan, |html| specs::videos::parse_video_urls(html, url, format)))
    }

    /// Static fetch first; the marketplace often serves an empty shell to
    /// non-browsers, so a failed or empty pass goes to the browser.
    pub fn collect_products(&self, term: &str, format: ImageFormat) -> Result<Vec<Product>> {
        let search = search_url(PageKind::Products, term)
            .ok_or_else(|| ScrapeError::InvalidTarget(s!("Please enter a product name.")))?;
        let products = match self.net.get_text(&search, HeaderSet::Marketplace) {
            Ok(html) => specs::products::parse_products(&html, format),
            Err(e) if self.browser_may_help(&e) => {
                logw!("Products: static fetch failed ({e})");
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        if !products.is_empty() {
            return Ok(products);
        }
        let plan = RenderPlan::wait_for("li.s-item", BROWSER_WAIT_SECS);
        Ok(self.rendered(&search, plan, |html| specs::products::parse_products(html, format)))
    }

    pub fn collect_headlines(&self, url: &str) -> Result<Vec<String>> {
        let html = self.net.get_text(url, HeaderSet::Default)?;
        Ok(specs::headlines::parse_headlines(&html))
    }

    pub fn collect_pdf_links(&self, url: &str) -> Result<Vec<PdfLink>> {
        let links = match self.net.get_text(url, HeaderSet::Default) {
            Ok(html) => specs::pdf_links::parse_pdf_links(&html, url),
            Err(e) if self.browser_may_help(&e) => {
                logw!("PDF links: static fetch failed ({e})");
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        if !links.is_empty() {
            return Ok(links);
        }
        let plan = RenderPlan::wait_for("a", PDF_BROWSER_WAIT_SECS).clicking(PDF_REVEAL_BUTTONS);
        Ok(self.rendered(url, plan, |html| specs::pdf_links::parse_pdf_links(html, url)))
    }

    /// A failed request is worth a browser retry only if there is a browser.
    fn browser_may_help(&self, err: &ScrapeError) -> bool {
        err.is_network() && self.browser.enabled()
    }
}
