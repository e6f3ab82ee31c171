// src/file.rs

use std::{
    collections::HashMap,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    process::Command,
};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::config::options::{ExportFormat, ExportOptions, PageKind};
use crate::core::error::{Result, ScrapeError};
use crate::core::url::path_extension;
use crate::csv::{datasets_to_string, to_delimited};
use crate::data::{DownloadedImage, Scraped};

/// Extension for a downloaded image; `jpg` when the URL doesn't say.
pub fn image_ext(url: &str) -> String {
    let ext = path_extension(url);
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) { s!("jpg") } else { ext }
}

fn image_name(index: usize, url: &str) -> String {
    format!("image_{:02}.{}", index, image_ext(url))
}

/// Write the result to `opts.out_dir` in the chosen format.
/// Images always go into one zip regardless of format.
/// Returns every path written.
pub fn export(scraped: &Scraped, images: &[DownloadedImage], opts: &ExportOptions) -> Result<Vec<PathBuf>> {
    let kind = scraped.kind();
    if kind == PageKind::Images {
        if images.is_empty() {
            return Err(ScrapeError::NothingToExport(s!("No images to export!")));
        }
        ensure_directory(&opts.out_dir)?;
        let path = opts.out_dir.join("images.zip");
        write_zip(&path, images)?;
        logf!("Export: {} image(s) → {}", images.len(), path.display());
        return Ok(vec![path]);
    }

    if scraped.is_empty() {
        return Err(ScrapeError::NothingToExport(format!("No {} to export!", kind.noun())));
    }
    ensure_directory(&opts.out_dir)?;

    let ext = opts.format.ext();
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut written = Vec::new();

    match opts.format {
        ExportFormat::Txt => {
            let path = resolve_unique(&opts.out_dir, kind.export_stem(), ext, &mut seen);
            fs::write(&path, scraped.to_text())?;
            written.push(path);
        }
        ExportFormat::Csv => {
            for (stem, ds) in scraped.datasets() {
                let path = resolve_unique(&opts.out_dir, &stem, ext, &mut seen);
                fs::write(&path, to_delimited(&ds, opts.include_headers, b',')?)?;
                written.push(path);
            }
        }
        ExportFormat::Json => {
            let path = resolve_unique(&opts.out_dir, kind.export_stem(), ext, &mut seen);
            let file = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(file, scraped)?;
            written.push(path);
        }
    }

    for p in &written {
        logf!("Export: wrote {}", p.display());
    }
    Ok(written)
}

fn write_zip(path: &Path, images: &[DownloadedImage]) -> Result<()> {
    let file = File::create(path)?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (i, img) in images.iter().enumerate() {
        zip.start_file(image_name(i + 1, &img.url), options)?;
        zip.write_all(&img.bytes)?;
    }
    zip.finish()?.flush()?;
    Ok(())
}

/// Text for the clipboard, in the export format's shape.
pub fn copy_text(scraped: &Scraped, format: ExportFormat, include_headers: bool) -> Result<String> {
    Ok(match format {
        ExportFormat::Txt => scraped.to_text(),
        ExportFormat::Csv => datasets_to_string(&scraped.datasets(), include_headers, b',')?,
        ExportFormat::Json => serde_json::to_string_pretty(scraped)?,
    })
}

/// Save one gallery image as `image_NN.<ext>` in `dir`.
pub fn save_image(dir: &Path, index: usize, url: &str, bytes: &[u8]) -> Result<PathBuf> {
    ensure_directory(dir)?;
    let path = dir.join(image_name(index, url));
    fs::write(&path, bytes)?;
    Ok(path)
}

/// Hand a file or folder to the desktop's default handler.
pub fn open_path(path: &Path) -> Result<()> {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]).arg(path);
        c
    } else if cfg!(target_os = "macos") {
        let mut c = Command::new("open");
        c.arg(path);
        c
    } else {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    };
    cmd.spawn()?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::other(format!("Path exists but is not a directory: {}", dir.display())).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Duplicate handling **only within this run**
pub fn resolve_unique(
    dir: &Path,
    stem: &str,                        // no extension
    ext: &str,                         // "txt" | "csv" | ...
    seen_names: &mut HashMap<String, usize>,
) -> PathBuf {
    let count = seen_names.entry(stem.to_string()).or_insert(0);

    // First occurrence: "<stem>.ext"
    // Subsequent:       "<stem> (N).ext" with N starting at 2
    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem} ({}).{ext}", *count + 1)
    };

    *count += 1;
    dir.join(filename)
}
