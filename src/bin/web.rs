// src/bin/web.rs
use web_scrape::{log, web};

#[tokio::main]
async fn main() {
    log::init_stderr();
    let addr = web::bind_addr();
    if let Err(e) = web::serve(addr).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
