// src/core/browser.rs
//
// Headless-browser fallback for pages that render their content with JS.
// Only used when the static pass came back empty.

use std::time::Duration;

use super::error::{Result, ScrapeError};

/// What to do once the page is open.
#[derive(Clone, Debug)]
pub struct RenderPlan {
    /// CSS selector that signals "content is there".
    pub wait_for: &'static str,
    pub wait: Duration,
    /// Click the first button whose text contains one of these.
    pub click_texts: &'static [&'static str],
}

impl RenderPlan {
    pub fn wait_for(selector: &'static str, secs: u64) -> Self {
        Self { wait_for: selector, wait: Duration::from_secs(secs), click_texts: &[] }
    }

    pub fn clicking(mut self, texts: &'static [&'static str]) -> Self {
        self.click_texts = texts;
        self
    }

    /// Whether a button labelled `label` is one the plan wants clicked.
    pub fn wants_click(&self, label: &str) -> bool {
        self.click_texts.iter().any(|t| label.contains(t))
    }
}

pub trait Render: Send + Sync {
    /// Load `url`, follow the plan and return the rendered HTML.
    fn render(&self, url: &str, plan: &RenderPlan) -> Result<String>;

    fn enabled(&self) -> bool {
        true
    }
}

/// Stand-in when the fallback is switched off (or not compiled in).
pub struct NoBrowser;

impl Render for NoBrowser {
    fn render(&self, _url: &str, _plan: &RenderPlan) -> Result<String> {
        Err(ScrapeError::BrowserDisabled)
    }

    fn enabled(&self) -> bool {
        false
    }
}

#[cfg(feature = "browser")]
pub use chrome::HeadlessChrome;

#[cfg(feature = "browser")]
mod chrome {
    use std::time::{Duration, Instant};

    use chromiumoxide::browser::{Browser, BrowserConfig};
    use chromiumoxide::page::Page;
    use futures::StreamExt;

    use super::{Render, RenderPlan};
    use crate::config::consts::{BROWSER_LOAD_TIMEOUT_SECS, USER_AGENT};
    use crate::core::error::{Result, ScrapeError};

    const POLL: Duration = Duration::from_millis(250);

    fn browser_err(what: &str, e: impl std::fmt::Display) -> ScrapeError {
        ScrapeError::Browser(format!("{what}: {e}"))
    }

    /// Launches a fresh headless Chromium per render on a private
    /// single-threaded runtime; closed before returning.
    #[derive(Default)]
    pub struct HeadlessChrome;

    impl HeadlessChrome {
        pub fn new() -> Self {
            Self
        }
    }

    impl Render for HeadlessChrome {
        fn render(&self, url: &str, plan: &RenderPlan) -> Result<String> {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            rt.block_on(render_async(url, plan))
        }
    }

    async fn render_async(url: &str, plan: &RenderPlan) -> Result<String> {
        let config = BrowserConfig::builder()
            .no_sandbox()
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .request_timeout(Duration::from_secs(BROWSER_LOAD_TIMEOUT_SECS))
            .build()
            .map_err(|e| browser_err("Failed to build launch options", e))?;

        let (mut browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| browser_err("Failed to start headless browser", e))?;
        let events = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let result = load(&browser, url, plan).await;

        if let Err(e) = browser.close().await {
            logd!("Browser: close failed: {e}");
        }
        let _ = events.await;
        result
    }

    async fn load(browser: &Browser, url: &str, plan: &RenderPlan) -> Result<String> {
        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| browser_err("Failed to create tab", e))?;
        if let Err(e) = page.set_user_agent(USER_AGENT).await {
            logw!("Browser: could not set user agent: {e}");
        }

        logf!("Browser: navigating to {url}");
        page.goto(url)
            .await
            .map_err(|e| browser_err(&format!("Failed to navigate to {url}"), e))?;
        if let Err(e) = page.wait_for_navigation().await {
            logw!("Browser: navigation did not settle for {url}: {e}");
        }

        if !plan.click_texts.is_empty() {
            click_first(&page, plan).await;
        }

        if !wait_for_selector(&page, plan.wait_for, plan.wait).await {
            logw!("Browser: '{}' did not appear on {url} within {:?}", plan.wait_for, plan.wait);
        }

        page.content()
            .await
            .map_err(|e| browser_err("Failed to read page content", e))
    }

    /// Click the first button whose label matches the plan. Failures are logged only.
    async fn click_first(page: &Page, plan: &RenderPlan) {
        let buttons = match page.find_elements("button").await {
            Ok(b) => b,
            Err(e) => {
                logw!("Browser: no buttons to click: {e}");
                return;
            }
        };
        for button in buttons {
            let label = button.inner_text().await.ok().flatten().unwrap_or_default();
            if !plan.wants_click(&label) {
                continue;
            }
            match button.click().await {
                Ok(_) => {
                    logf!("Browser: clicked button '{}'", label.trim());
                    return;
                }
                Err(e) => logw!("Browser: could not click '{}': {e}", label.trim()),
            }
        }
    }

    async fn wait_for_selector(page: &Page, selector: &str, wait: Duration) -> bool {
        let deadline = Instant::now() + wait;
        loop {
            if page.find_element(selector).await.is_ok() {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
            tokio::time::sleep(POLL).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_texts_match_by_substring() {
        let plan = RenderPlan::wait_for("a", 15).clicking(&["Documents", "Show More"]);
        assert!(plan.wants_click("  Show More results "));
        assert!(plan.wants_click("Documents"));
        assert!(!plan.wants_click("show more"));
        assert!(!RenderPlan::wait_for("img", 10).wants_click("Documents"));
    }

    #[test]
    fn no_browser_refuses() {
        let err = NoBrowser.render("https://example.com", &RenderPlan::wait_for("a", 1)).unwrap_err();
        assert!(matches!(err, ScrapeError::BrowserDisabled));
        assert!(!NoBrowser.enabled());
    }
}
