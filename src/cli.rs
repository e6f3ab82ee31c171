// src/cli.rs
//
// Command-line front end: one scrape per invocation, result on stdout,
// logs on stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::config::consts::DEFAULT_OUT_DIR;
use crate::config::options::{ExportFormat, ExportOptions, ImageFormat, PageKind, ScrapeOptions, VideoFormat};
use crate::core::net::HttpClient;
use crate::data::{filter_images, Scraped};
use crate::progress::LogProgress;
use crate::scrape::{download_images, Scraper};
use crate::{file, pdf};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Scrape images, tables, text, media, listings and PDF links from a page")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape one data type from a URL (or a search term for movie/book/ebay)
    Scrape(ScrapeArgs),

    /// Download a PDF and print its text and metadata
    PdfInfo {
        url: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the data types `scrape` accepts
    ListKinds,
}

#[derive(Args)]
struct ScrapeArgs {
    /// Data type (see `list-kinds`)
    #[arg(value_parser = parse_kind)]
    kind: PageKind,

    /// Page URL, or search term for movie/book/ebay
    target: String,

    /// Image format filter (images, ebay)
    #[arg(long, default_value = "all", value_parser = parse_image_format)]
    format: ImageFormat,

    /// Video format filter
    #[arg(long, default_value = "all", value_parser = parse_video_format)]
    video_format: VideoFormat,

    /// Keep at most N items (images, videos, ebay)
    #[arg(long)]
    limit: Option<usize>,

    /// Keep at most N tables
    #[arg(long)]
    tables: Option<usize>,

    /// Never fall back to the headless browser
    #[arg(long)]
    no_browser: bool,

    /// Also export the result: txt, csv or json (images always zip)
    #[arg(long, value_parser = parse_export_format)]
    export: Option<ExportFormat>,

    /// Output directory for --export
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    out: PathBuf,

    /// Header rows in CSV exports
    #[arg(long)]
    include_headers: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn parse_kind(s: &str) -> std::result::Result<PageKind, String> {
    let key = s.trim().to_ascii_lowercase();
    PageKind::from_form_key(&key)
        .or_else(|| PageKind::ALL.into_iter().find(|k| k.slug() == key))
        .ok_or_else(|| format!("unknown data type '{s}' (see `list-kinds`)"))
}

fn parse_image_format(s: &str) -> std::result::Result<ImageFormat, String> {
    ImageFormat::parse(s).ok_or_else(|| format!("unknown image format '{s}'"))
}

fn parse_video_format(s: &str) -> std::result::Result<VideoFormat, String> {
    VideoFormat::parse(s).ok_or_else(|| format!("unknown video format '{s}'"))
}

fn parse_export_format(s: &str) -> std::result::Result<ExportFormat, String> {
    ExportFormat::parse(s).ok_or_else(|| format!("unknown export format '{s}' (txt, csv, json)"))
}

pub fn run() -> Result<()> {
    crate::log::init_stderr();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scrape(args) => scrape(args),
        Commands::PdfInfo { url, json } => pdf_info(&url, json),
        Commands::ListKinds => {
            for kind in PageKind::ALL {
                println!("{:<6} {:<10} {}", kind.form_key(), kind.slug(), kind.title());
            }
            Ok(())
        }
    }
}

fn scrape(args: ScrapeArgs) -> Result<()> {
    let opts = ScrapeOptions {
        page: args.kind,
        target: args.target,
        image_format: args.format,
        video_format: args.video_format,
        item_limit: args.limit.filter(|n| *n > 0),
        table_limit: args.tables.filter(|n| *n > 0),
        use_browser: !args.no_browser && cfg!(feature = "browser"),
    };
    logf!("Scrape: Begin page={:?} target={}", opts.page, opts.target);

    let scraper = Scraper::new(&opts).context("could not set up the scraper")?;
    let mut progress = LogProgress::new();
    let mut scraped = scraper.run(&opts, Some(&mut progress))?;

    if let Scraped::Images(all) = &scraped {
        scraped = Scraped::Images(filter_images(all, opts.image_format, opts.item_limit));
    }

    if scraped.is_empty() {
        eprintln!("{}", opts.page.empty_message());
        return Ok(());
    }
    eprintln!("{}", scraped.summary());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&scraped)?);
    } else {
        println!("{}", scraped.to_text());
    }

    if let Some(format) = args.export {
        let images = match &scraped {
            Scraped::Images(urls) => download_images(scraper.net(), urls, Some(&mut progress)),
            _ => Vec::new(),
        };
        let export = ExportOptions {
            format,
            out_dir: args.out,
            include_headers: args.include_headers,
            open_after_export: false,
        };
        let paths = file::export(&scraped, &images, &export)
            .with_context(|| format!("export to {} failed", export.out_dir.display()))?;
        for p in paths {
            eprintln!("Wrote {}", p.display());
        }
    }
    Ok(())
}

fn pdf_info(url: &str, json: bool) -> Result<()> {
    let client = HttpClient::new()?;
    let info = pdf::fetch_pdf_info(&client, url).with_context(|| format!("could not read {url}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Title:  {}", info.title);
        println!("Author: {}", info.author);
        println!("Pages:  {}", info.page_count);
        println!();
        print!("{}", info.text);
    }
    Ok(())
}
