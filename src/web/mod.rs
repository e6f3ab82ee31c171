// src/web/mod.rs
//
// Server-rendered front end: one form, one result page, plus a JSON
// endpoint for PDF details. Scrapes are blocking and run off the runtime.

mod form;
mod render;
mod routes;

pub use form::ScrapeForm;
pub use routes::router;

use std::net::SocketAddr;

use crate::config::consts::{DEFAULT_WEB_ADDR, WEB_ADDR_ENV};

/// `$WEB_SCRAPE_ADDR`, else the default local address.
pub fn bind_addr() -> SocketAddr {
    std::env::var(WEB_ADDR_ENV)
        .ok()
        .and_then(|s| s.parse().ok())
        .or_else(|| DEFAULT_WEB_ADDR.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 5000)))
}

pub async fn serve(addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    logf!("Web: listening on http://{addr}");
    axum::serve(listener, router()).await
}
