// tests/scrape_fallback.rs
//
// Scraper orchestration against canned pages: static pass, browser retry,
// error propagation, download pool ordering.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use web_scrape::config::options::{PageKind, ScrapeOptions, VideoFormat};
use web_scrape::core::browser::{NoBrowser, Render, RenderPlan};
use web_scrape::core::error::{Result, ScrapeError};
use web_scrape::core::net::{Fetch, HeaderSet};
use web_scrape::data::Scraped;
use web_scrape::progress::Progress;
use web_scrape::scrape::{download_images, Scraper};

#[derive(Default)]
struct FakeNet {
    pages: HashMap<String, String>,
    bytes: HashMap<String, Vec<u8>>,
    requests: Mutex<Vec<(String, HeaderSet)>>,
}

impl FakeNet {
    fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    fn image(mut self, url: &str, bytes: &[u8]) -> Self {
        self.bytes.insert(url.to_string(), bytes.to_vec());
        self
    }

    fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().iter().map(|(url, _)| url.clone()).collect()
    }

    fn headers_sent(&self) -> Vec<HeaderSet> {
        self.requests.lock().unwrap().iter().map(|(_, h)| *h).collect()
    }
}

impl Fetch for FakeNet {
    fn get_text(&self, url: &str, headers: HeaderSet) -> Result<String> {
        self.requests.lock().unwrap().push((url.to_string(), headers));
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::Status { status: 404, url: url.to_string() })
    }

    fn get_bytes(&self, url: &str, _timeout: Duration) -> Result<Vec<u8>> {
        self.bytes
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::Status { status: 404, url: url.to_string() })
    }
}

/// Serves one fixed page and remembers what it was asked for.
struct FakeBrowser {
    html: String,
    calls: Mutex<Vec<(String, &'static str, Vec<&'static str>)>>,
}

impl FakeBrowser {
    fn serving(html: &str) -> Arc<Self> {
        Arc::new(Self { html: html.to_string(), calls: Mutex::new(Vec::new()) })
    }

    fn calls(&self) -> Vec<(String, &'static str, Vec<&'static str>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Render for FakeBrowser {
    fn render(&self, url: &str, plan: &RenderPlan) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), plan.wait_for, plan.click_texts.to_vec()));
        Ok(self.html.clone())
    }
}

fn opts(page: PageKind, target: &str) -> ScrapeOptions {
    ScrapeOptions { page, target: target.to_string(), use_browser: false, ..Default::default() }
}

const SITE: &str = "https://site.test/gallery";

#[test]
fn static_images_skip_the_browser() {
    let net = Arc::new(FakeNet::default().page(SITE, r#"<img src="/a.png"><img src="b.jpg">"#));
    let browser = FakeBrowser::serving("<img src='/never.png'>");
    let scraper = Scraper::with_parts(net.clone(), browser.clone());

    let out = scraper.run(&opts(PageKind::Images, SITE), None).unwrap();
    assert_eq!(
        out,
        Scraped::Images(vec![s("https://site.test/a.png"), s("https://site.test/b.jpg")])
    );
    assert!(browser.calls().is_empty());
}

#[test]
fn empty_static_page_goes_to_the_browser() {
    let net = Arc::new(FakeNet::default().page(SITE, "<div id=app></div>"));
    let browser = FakeBrowser::serving(r#"<img src="/late.webp">"#);
    let scraper = Scraper::with_parts(net, browser.clone());

    let out = scraper.run(&opts(PageKind::Images, SITE), None).unwrap();
    assert_eq!(out, Scraped::Images(vec![s("https://site.test/late.webp")]));
    let calls = browser.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, SITE);
    assert_eq!(calls[0].1, "img");
}

#[test]
fn disabled_browser_leaves_an_empty_result() {
    let net = Arc::new(FakeNet::default().page(SITE, "<video></video>"));
    let scraper = Scraper::with_parts(net, Arc::new(NoBrowser));

    let out = scraper.run(&opts(PageKind::Videos, SITE), None).unwrap();
    assert!(out.is_empty());
    assert_eq!(PageKind::Videos.empty_message(), "No videos found!");
}

#[test]
fn network_errors_surface_for_static_kinds() {
    let browser = FakeBrowser::serving("<img src='/x.png'>");
    let scraper = Scraper::with_parts(Arc::new(FakeNet::default()), browser.clone());

    let err = scraper.run(&opts(PageKind::Images, SITE), None).unwrap_err();
    assert!(matches!(err, ScrapeError::Status { status: 404, .. }));
    assert!(err.is_network());
    assert!(browser.calls().is_empty());
}

#[test]
fn pdf_links_retry_in_the_browser_after_a_failed_fetch() {
    let browser = FakeBrowser::serving(r#"<a href="files/plan.pdf">Plan</a><a href="/x.html">x</a>"#);
    let scraper = Scraper::with_parts(Arc::new(FakeNet::default()), browser.clone());

    let Scraped::PdfLinks(links) = scraper.run(&opts(PageKind::PdfLinks, "https://site.test/docs/"), None).unwrap()
    else {
        panic!("expected pdf links");
    };
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].url, "https://site.test/docs/files/plan.pdf");
    assert_eq!(links[0].name, "plan.pdf");

    let calls = browser.calls();
    assert_eq!(calls[0].2, vec!["Documents", "Resources", "Show More"]);
}

#[test]
fn pdf_fetch_failure_without_browser_is_an_error() {
    let scraper = Scraper::with_parts(Arc::new(FakeNet::default()), Arc::new(NoBrowser));
    let err = scraper.run(&opts(PageKind::PdfLinks, SITE), None).unwrap_err();
    assert!(err.is_network());
}

#[test]
fn bad_targets_never_reach_the_network() {
    let net = Arc::new(FakeNet::default());
    let scraper = Scraper::with_parts(net.clone(), Arc::new(NoBrowser));

    let err = scraper.run(&opts(PageKind::Tables, "two words"), None).unwrap_err();
    assert!(matches!(err, ScrapeError::InvalidTarget(ref m) if m == "Invalid URL format!"));
    let err = scraper.run(&opts(PageKind::Movie, "<script>"), None).unwrap_err();
    assert!(matches!(err, ScrapeError::InvalidTarget(_)));
    assert!(net.requested().is_empty());
}

#[test]
fn scheme_is_added_before_fetching() {
    let net = Arc::new(FakeNet::default().page("https://site.test", "<p>Hello there</p>"));
    let scraper = Scraper::with_parts(net.clone(), Arc::new(NoBrowser));

    let out = scraper.run(&opts(PageKind::Text, "site.test"), None).unwrap();
    assert!(matches!(out, Scraped::Text(ref t) if t.contains("Hello there")));
    assert_eq!(net.requested(), vec![s("https://site.test")]);
}

#[test]
fn movie_without_hits_is_not_found() {
    let search = "https://www.imdb.com/find?q=Zzzz&ref_=nv_sr_sm";
    let net = Arc::new(FakeNet::default().page(search, "<ul></ul>"));
    let scraper = Scraper::with_parts(net, Arc::new(NoBrowser));

    let err = scraper.run(&opts(PageKind::Movie, "Zzzz"), None).unwrap_err();
    assert!(matches!(err, ScrapeError::NotFound(ref m) if m == "No movie found with that name."));
}

#[test]
fn movie_follows_the_first_hit() {
    let search = "https://www.imdb.com/find?q=The+Matrix&ref_=nv_sr_sm";
    let title = "https://www.imdb.com/title/tt0133093/";
    let net = Arc::new(
        FakeNet::default()
            .page(search, r#"<li class="ipc-metadata-list-summary-item"><a href="/title/tt0133093/">The Matrix</a></li>"#)
            .page(
                title,
                r#"<h1>The Matrix</h1>
                   <a href="/title/tt0133093/releaseinfo">1999</a>
                   <span class="ipc-chip__text">Action</span><span class="ipc-chip__text">Sci-Fi</span>"#,
            ),
    );
    let scraper = Scraper::with_parts(net, Arc::new(NoBrowser));

    let Scraped::Movie(m) = scraper.run(&opts(PageKind::Movie, "The Matrix"), None).unwrap() else {
        panic!("expected movie");
    };
    assert_eq!(m.name, "The Matrix");
    assert_eq!(m.year, "1999");
    assert_eq!(m.genre, "Action, Sci-Fi");
    assert_eq!(m.rating, "N/A");
    assert_eq!(m.movie_link, title);
}

#[test]
fn book_reads_the_description_from_the_work_page() {
    let search = "https://openlibrary.org/search?q=Dune&mode=everything";
    let work = "https://openlibrary.org/works/OL893415W/Dune";
    let net = Arc::new(
        FakeNet::default()
            .page(
                search,
                r#"<li class="searchResultItem">
                     <h3 class="booktitle"><a href="/works/OL893415W/Dune">Dune</a></h3>
                     <span class="bookauthor"><a>Frank Herbert</a></span>
                   </li>"#,
            )
            .page(work, r#"<div class="read-more__content"><p>Desert planet.</p><p><a>Link</a></p></div>"#),
    );
    let scraper = Scraper::with_parts(net, Arc::new(NoBrowser));

    let Scraped::Book(b) = scraper.run(&opts(PageKind::Book, "Dune"), None).unwrap() else {
        panic!("expected book");
    };
    assert_eq!(b.name, "Dune");
    assert_eq!(b.author, "Frank Herbert");
    assert_eq!(b.description, "Desert planet.");
    assert_eq!(b.book_link, work);
}

#[test]
fn item_limit_truncates_videos() {
    let html = r#"<video><source src="a.mp4"><source src="b.webm"><source src="c.mp4"></video>"#;
    let net = Arc::new(FakeNet::default().page(SITE, html));
    let scraper = Scraper::with_parts(net, Arc::new(NoBrowser));

    let mut o = opts(PageKind::Videos, SITE);
    o.video_format = VideoFormat::Mp4;
    o.item_limit = Some(1);
    assert_eq!(scraper.run(&o, None).unwrap(), Scraped::Videos(vec![s("https://site.test/a.mp4")]));
}

const LISTINGS: &str = "https://www.ebay.com/sch/i.html?_nkw=usb+cable&_sop=12";

fn listing_page(n: usize) -> String {
    let mut html = String::from("<ul>");
    for i in 0..n {
        html.push_str(&format!(
            r#"<li class="s-item s-item__pl-on-bottom">
                 <a class="s-item__link" href="https://www.ebay.com/itm/{i}"><span class="s-item__title">Cable {i}</span></a>
                 <span class="s-item__price">$4.99</span>
               </li>"#
        ));
    }
    html.push_str("</ul>");
    html
}

#[test]
fn products_send_marketplace_headers_and_cap_at_one_hundred() {
    let net = Arc::new(FakeNet::default().page(LISTINGS, &listing_page(2 + 130)));
    let browser = FakeBrowser::serving("");
    let scraper = Scraper::with_parts(net.clone(), browser.clone());

    let Scraped::Products(products) = scraper.run(&opts(PageKind::Products, "usb cable"), None).unwrap() else {
        panic!("expected products");
    };
    assert_eq!(products.len(), 100);
    assert_eq!(products[0].title, "Cable 2");
    assert_eq!(products[99].title, "Cable 101");
    assert_eq!(net.requested(), vec![s(LISTINGS)]);
    assert_eq!(net.headers_sent(), vec![HeaderSet::Marketplace]);
    assert!(browser.calls().is_empty());
}

#[test]
fn empty_listings_retry_in_the_browser() {
    let net = Arc::new(FakeNet::default().page(LISTINGS, "<ul></ul>"));
    let browser = FakeBrowser::serving(&listing_page(3));
    let scraper = Scraper::with_parts(net, browser.clone());

    let Scraped::Products(products) = scraper.run(&opts(PageKind::Products, "usb cable"), None).unwrap() else {
        panic!("expected products");
    };
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].link, "https://www.ebay.com/itm/2");
    let calls = browser.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, LISTINGS);
    assert_eq!(calls[0].1, "li.s-item");
    assert!(calls[0].2.is_empty());
}

#[test]
fn failed_listing_fetch_uses_the_browser_when_there_is_one() {
    let browser = FakeBrowser::serving(&listing_page(4));
    let scraper = Scraper::with_parts(Arc::new(FakeNet::default()), browser.clone());
    let out = scraper.run(&opts(PageKind::Products, "usb cable"), None).unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(browser.calls().len(), 1);

    let scraper = Scraper::with_parts(Arc::new(FakeNet::default()), Arc::new(NoBrowser));
    let err = scraper.run(&opts(PageKind::Products, "usb cable"), None).unwrap_err();
    assert!(err.is_network());
}

#[test]
fn table_limit_keeps_the_first_tables() {
    let html = r#"
        <table><tr><td>one</td></tr></table>
        <table><tr><th>H</th></tr><tr><td>two</td></tr></table>
        <table><tr><td>three</td></tr></table>"#;
    let net = Arc::new(FakeNet::default().page(SITE, html));
    let scraper = Scraper::with_parts(net, Arc::new(NoBrowser));

    let mut o = opts(PageKind::Tables, SITE);
    o.table_limit = Some(2);
    let Scraped::Tables(tables) = scraper.run(&o, None).unwrap() else {
        panic!("expected tables");
    };
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].rows, vec![vec![s("one")]]);
    assert_eq!(tables[1].rows, vec![vec![s("two")]]);
}

#[test]
fn gallery_captions_are_not_headlines() {
    let html = r#"
        <h2>Today's Gallery: sunsets over the bay</h2>
        <h2>Council approves new harbour budget</h2>"#;
    let net = Arc::new(FakeNet::default().page(SITE, html));
    let scraper = Scraper::with_parts(net, Arc::new(NoBrowser));

    let out = scraper.run(&opts(PageKind::Headlines, SITE), None).unwrap();
    assert_eq!(out, Scraped::Headlines(vec![s("Council approves new harbour budget")]));
}

#[derive(Default)]
struct Counting {
    total: usize,
    done: usize,
    failed: usize,
    finished: bool,
}

impl Progress for Counting {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn item_done(&mut self, _label: &str) {
        self.done += 1;
    }
    fn item_failed(&mut self, _label: &str, _err: &str) {
        self.failed += 1;
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

#[test]
fn downloads_keep_order_and_drop_failures() {
    let mut net = FakeNet::default();
    let mut urls = Vec::new();
    for i in 0..12 {
        let url = format!("https://cdn.test/{i}.png");
        if i % 4 != 3 {
            net = net.image(&url, &[i as u8]);
        }
        urls.push(url);
    }

    let mut progress = Counting::default();
    let images = download_images(Arc::new(net), &urls, Some(&mut progress));

    let got: Vec<u8> = images.iter().map(|img| img.bytes[0]).collect();
    assert_eq!(got, vec![0, 1, 2, 4, 5, 6, 8, 9, 10]);
    assert_eq!(images[3].url, "https://cdn.test/4.png");
    assert_eq!((progress.total, progress.done, progress.failed), (12, 9, 3));
    assert!(progress.finished);
}

fn s(v: &str) -> String {
    v.to_string()
}
