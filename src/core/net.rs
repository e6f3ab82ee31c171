// src/core/net.rs
//
// Blocking HTTP behind a small trait so scrapers can be driven by canned
// pages in tests.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, REFERER};

use super::error::{Result, ScrapeError};
use crate::config::consts::{EBAY_BASE, PAGE_TIMEOUT_SECS, USER_AGENT};

/// Extra request headers beyond the user agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderSet {
    Default,
    /// Marketplace search pages reject bare requests.
    Marketplace,
}

pub trait Fetch: Send + Sync {
    fn get_text(&self, url: &str, headers: HeaderSet) -> Result<String>;
    fn get_bytes(&self, url: &str, timeout: Duration) -> Result<Vec<u8>>;
}

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(PAGE_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }
}

fn marketplace_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"),
    );
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    if let Ok(v) = HeaderValue::from_str(&join!(EBAY_BASE, "/")) {
        h.insert(REFERER, v);
    }
    h
}

fn check(resp: reqwest::blocking::Response, url: &str) -> Result<reqwest::blocking::Response> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::Status { status: status.as_u16(), url: s!(url) });
    }
    Ok(resp)
}

impl Fetch for HttpClient {
    fn get_text(&self, url: &str, headers: HeaderSet) -> Result<String> {
        let mut req = self.client.get(url);
        if headers == HeaderSet::Marketplace {
            req = req.headers(marketplace_headers());
        }
        logd!("GET {url}");
        let resp = check(req.send()?, url)?;
        Ok(resp.text()?)
    }

    fn get_bytes(&self, url: &str, timeout: Duration) -> Result<Vec<u8>> {
        let resp = check(self.client.get(url).timeout(timeout).send()?, url)?;
        Ok(resp.bytes()?.to_vec())
    }
}
