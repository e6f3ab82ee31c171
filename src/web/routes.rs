// src/web/routes.rs
use axum::extract::RawForm;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::config::options::{PageKind, ScrapeOptions};
use crate::core::error::ScrapeError;
use crate::core::net::HttpClient;
use crate::data::{filter_images, Scraped};
use crate::pdf::{fetch_pdf_info, PdfInfo};
use crate::progress::LogProgress;
use crate::scrape::Scraper;

use super::form::ScrapeForm;
use super::render::{self, Outcome};

pub fn router() -> Router {
    Router::new()
        .route("/", get(index).post(scrape_page))
        .route("/extract_pdf_info", post(extract_pdf_info))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "ok"
}

async fn index() -> Html<String> {
    Html(render::page(&ScrapeForm::default(), &Outcome::Blank))
}

async fn scrape_page(RawForm(body): RawForm) -> Html<String> {
    let form = ScrapeForm::parse(&body);
    logf!("Web: scrape data_type={} url={}", form.data_type.form_key(), form.url);

    let job = form.clone();
    let outcome = match tokio::task::spawn_blocking(move || run_scrape(&job)).await {
        Ok(outcome) => outcome,
        Err(e) => {
            loge!("Web: scrape task failed: {e}");
            Outcome::Error(format!("An error occurred: {e}"))
        }
    };
    Html(render::page(&form, &outcome))
}

/// Messages the web form shows when a scrape comes back empty.
fn empty_message(kind: PageKind) -> String {
    match kind {
        PageKind::Images => s!("No images found on this page."),
        PageKind::Text => s!("No text found on this page."),
        PageKind::Tables => s!("No tables found on this page."),
        PageKind::Videos => s!("No videos found on this page."),
        PageKind::Products => s!("No products found on eBay."),
        PageKind::Headlines => s!("No verified headlines found on this page."),
        PageKind::PdfLinks => s!("No PDF files found on this page."),
        PageKind::Movie | PageKind::Book => kind.empty_message(),
    }
}

fn error_message(e: &ScrapeError) -> String {
    match e {
        ScrapeError::InvalidTarget(m) | ScrapeError::NotFound(m) => m.clone(),
        other => format!("An error occurred: {other}"),
    }
}

pub(crate) fn run_scrape(form: &ScrapeForm) -> Outcome {
    let kind = form.data_type;
    if form.url.is_empty() && kind == PageKind::Products {
        return Outcome::Error(s!("Please enter a product name."));
    }

    let opts = ScrapeOptions {
        page: kind,
        target: form.url.clone(),
        image_format: form.image_format,
        video_format: form.video_format,
        item_limit: form.num_items,
        table_limit: None,
        use_browser: cfg!(feature = "browser"),
    };

    let result = Scraper::new(&opts).and_then(|s| s.run(&opts, Some(&mut LogProgress::new())));
    let mut scraped = match result {
        Ok(s) => s,
        Err(e) => {
            loge!("Web: scrape failed: {e}");
            return Outcome::Error(error_message(&e));
        }
    };

    match &mut scraped {
        Scraped::Images(all) => *all = filter_images(all, opts.image_format, opts.item_limit),
        Scraped::Headlines(lines) => {
            if let Some(n) = opts.item_limit {
                lines.truncate(n);
            }
        }
        _ => {}
    }

    if scraped.is_empty() {
        Outcome::Error(empty_message(kind))
    } else {
        Outcome::Results(scraped)
    }
}

#[derive(Deserialize)]
struct PdfForm {
    #[serde(default)]
    pdf_url: String,
}

fn pdf_json(result: Result<PdfInfo, String>) -> Value {
    match result {
        Ok(info) => json!({
            "success": true,
            "text": info.text,
            "title": info.title,
            "author": info.author,
            "page_count": info.page_count,
        }),
        Err(error) => json!({ "success": false, "error": error }),
    }
}

async fn extract_pdf_info(Form(form): Form<PdfForm>) -> Json<Value> {
    let url = form.pdf_url.trim().to_string();
    logf!("Web: PDF info for {url}");

    let job = tokio::task::spawn_blocking(move || {
        let client = HttpClient::new()?;
        fetch_pdf_info(&client, &url)
    });
    let result = match job.await {
        Ok(Ok(info)) => Ok(info),
        Ok(Err(e)) => Err(e.to_string()),
        Err(e) => Err(e.to_string()),
    };
    if let Err(e) = &result {
        logw!("Web: PDF info failed: {e}");
    }
    Json(pdf_json(result))
}
