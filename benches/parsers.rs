// benches/parsers.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use web_scrape::config::options::{ImageFormat, VideoFormat};
use web_scrape::specs;

const BASE: &str = "https://bench.test/page/";

/// Page sample from `.ignore/page_samples/<name>.html` when present,
/// otherwise a generated page of the same shape.
fn load_sample(name: &str, fallback: impl FnOnce() -> String) -> String {
    std::fs::read_to_string(format!(".ignore/page_samples/{name}.html")).unwrap_or_else(|_| fallback())
}

fn mixed_page() -> String {
    let mut html = String::from("<html><head><style>p{}</style><script>var x=1;</script></head><body>");
    for i in 0..400 {
        html.push_str(&format!(
            "<h2>Story number {i} about something important</h2>\
             <p>Paragraph {i} with <a href=\"/doc{i}.pdf\">a document</a> and \
             <img src=\"/img/{i}.{}\"></p>\
             <video><source src=\"clip{i}.mp4\"></video>",
            ["png", "jpg", "webp", "gif"][i % 4]
        ));
    }
    html.push_str("<table><tr><th>A</th><th>B</th></tr>");
    for i in 0..500 {
        html.push_str(&format!("<tr><td>{i}</td><td>value {i}</td></tr>"));
    }
    html.push_str("</table></body></html>");
    html
}

fn listings_page() -> String {
    let mut html = String::from("<ul>");
    for i in 0..120 {
        html.push_str(&format!(
            "<li class=\"s-item s-item__pl-on-bottom\">\
             <div class=\"s-item__title\">Item {i}</div>\
             <a class=\"s-item__link\" href=\"https://www.ebay.com/itm/{i}\">x</a>\
             <img src=\"https://i.ebayimg.test/{i}.jpg\">\
             <span class=\"s-item__price\">${i}.99</span></li>"
        ));
    }
    html.push_str("</ul>");
    html
}

fn bench_parsers(c: &mut Criterion) {
    let page = load_sample("mixed", mixed_page);
    let listings = load_sample("listings", listings_page);

    c.bench_function("images", |b| {
        b.iter(|| black_box(specs::images::parse_image_urls(black_box(&page), BASE).len()))
    });

    c.bench_function("text", |b| b.iter(|| black_box(specs::text::parse_text(black_box(&page)).len())));

    c.bench_function("tables", |b| b.iter(|| black_box(specs::tables::parse_tables(black_box(&page)).len())));

    c.bench_function("videos", |b| {
        b.iter(|| black_box(specs::videos::parse_video_urls(black_box(&page), BASE, VideoFormat::Mp4).len()))
    });

    c.bench_function("headlines", |b| {
        b.iter(|| black_box(specs::headlines::parse_headlines(black_box(&page)).len()))
    });

    c.bench_function("pdf_links", |b| {
        b.iter(|| black_box(specs::pdf_links::parse_pdf_links(black_box(&page), BASE).len()))
    });

    c.bench_function("products", |b| {
        b.iter(|| black_box(specs::products::parse_products(black_box(&listings), ImageFormat::All).len()))
    });
}

criterion_group!(benches, bench_parsers);
criterion_main!(benches);
