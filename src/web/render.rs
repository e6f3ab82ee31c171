// src/web/render.rs
//
// HTML for the single form page. Every scraped string goes through
// html-escape before it reaches the page.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::config::consts::NA;
use crate::config::options::{ImageFormat, PageKind, VideoFormat};
use crate::core::sanitize::capitalize_key;
use crate::data::Scraped;
use crate::store::DataSet;

use super::form::ScrapeForm;

pub enum Outcome {
    /// Plain GET, nothing scraped yet.
    Blank,
    Error(String),
    Results(Scraped),
}

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:2rem auto;max-width:1100px;padding:0 1rem}\
form.scrape{display:flex;flex-wrap:wrap;gap:.5rem;align-items:center}\
input[type=text]{min-width:24rem}\
.error{color:#b00020;font-weight:600}\
table{border-collapse:collapse;margin:.5rem 0 1.5rem}\
td,th{border:1px solid #ccc;padding:.25rem .5rem;text-align:left;vertical-align:top}\
tr:nth-child(even){background:#f6f6f6}\
.gallery{display:flex;flex-wrap:wrap;gap:.5rem}\
.gallery img{max-width:200px;max-height:200px;object-fit:contain}\
pre{white-space:pre-wrap}";

const PDF_SCRIPT: &str = "\
async function pdfInfo(btn,url){\
const out=btn.nextElementSibling;out.textContent='Extracting...';\
const body=new URLSearchParams({pdf_url:url});\
const r=await fetch('/extract_pdf_info',{method:'POST',body});\
const j=await r.json();\
out.textContent=j.success?`Title: ${j.title}\\nAuthor: ${j.author}\\nPages: ${j.page_count}\\n\\n${j.text}`:`Error: ${j.error}`;}";

pub fn page(form: &ScrapeForm, outcome: &Outcome) -> String {
    let mut html = String::with_capacity(8 * 1024);
    let _ = write!(
        html,
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>Web Scraper</title>\
         <style>{STYLE}</style><script>{PDF_SCRIPT}</script></head><body><h1>Web Scraper</h1>"
    );
    form_html(&mut html, form);

    match outcome {
        Outcome::Blank => {}
        Outcome::Error(msg) => {
            let _ = write!(html, "<p class=\"error\">{}</p>", text(msg));
        }
        Outcome::Results(scraped) => {
            let _ = write!(html, "<h2>{}</h2><p>{}</p>", text(scraped.kind().title()), text(&scraped.summary()));
            results_html(&mut html, form, scraped);
        }
    }

    html.push_str("</body></html>");
    html
}

fn options<'a>(html: &mut String, items: impl Iterator<Item = (&'a str, &'a str, bool)>) {
    for (value, label, selected) in items {
        let sel = if selected { " selected" } else { "" };
        let _ = write!(html, "<option value=\"{}\"{sel}>{}</option>", attr(value), text(label));
    }
}

fn form_html(html: &mut String, form: &ScrapeForm) {
    let _ = write!(
        html,
        "<form class=\"scrape\" method=\"post\" action=\"/\">\
         <input type=\"text\" name=\"url\" value=\"{}\" placeholder=\"e.g., https://example.com or movie/book name\">\
         <select name=\"data_type\">",
        attr(&form.url)
    );
    options(html, PageKind::ALL.iter().map(|k| (k.form_key(), k.title(), *k == form.data_type)));
    html.push_str("</select><label>Image format <select name=\"image_format\">");
    options(html, ImageFormat::ALL.iter().map(|f| (f.label(), f.label(), *f == form.image_format)));
    html.push_str("</select></label><label>Video format <select name=\"video_format\">");
    options(html, VideoFormat::ALL.iter().map(|f| (f.label(), f.label(), *f == form.video_format)));
    let count = form.num_items.map(|n| n.to_string()).unwrap_or_default();
    let _ = write!(
        html,
        "</select></label><label>Items <input type=\"number\" min=\"1\" name=\"num_items\" value=\"{count}\" style=\"width:5rem\"></label>\
         <button type=\"submit\">Scrape Now</button></form>"
    );
}

fn link(html: &mut String, href: &str, label: &str) {
    if href.is_empty() || href == NA {
        let _ = write!(html, "{}", text(label));
    } else {
        let _ = write!(html, "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>", attr(href), text(label));
    }
}

fn table_html(html: &mut String, ds: &DataSet) {
    html.push_str("<table>");
    if let Some(headers) = &ds.headers {
        html.push_str("<tr>");
        for h in headers {
            let _ = write!(html, "<th>{}</th>", text(h));
        }
        html.push_str("</tr>");
    }
    for row in &ds.rows {
        html.push_str("<tr>");
        for cell in row {
            let _ = write!(html, "<td>{}</td>", text(cell));
        }
        html.push_str("</tr>");
    }
    html.push_str("</table>");
}

fn fields_html(html: &mut String, fields: &[(&str, &str)], image_key: &str, link_key: &str) {
    html.push_str("<table>");
    for (key, value) in fields {
        let _ = write!(html, "<tr><th>{}</th><td>", text(&capitalize_key(key)));
        if *key == image_key && *value != NA {
            let _ = write!(html, "<img src=\"{}\" alt=\"\" style=\"max-width:200px\">", attr(value));
        } else if *key == link_key {
            link(html, value, value);
        } else {
            let _ = write!(html, "{}", text(value));
        }
        html.push_str("</td></tr>");
    }
    html.push_str("</table>");
}

/// Hidden copy of the scrape form plus a checkbox per table; resubmitting
/// shows only the ticked ones.
fn table_picker(html: &mut String, form: &ScrapeForm, count: usize) {
    let _ = write!(
        html,
        "<form method=\"post\" action=\"/\"><input type=\"hidden\" name=\"url\" value=\"{}\">\
         <input type=\"hidden\" name=\"data_type\" value=\"table\">Show tables: ",
        attr(&form.url)
    );
    for n in 1..=count {
        let checked = if form.tables.contains(&n) { " checked" } else { "" };
        let _ = write!(html, "<label><input type=\"checkbox\" name=\"table_number\" value=\"{n}\"{checked}>{n}</label> ");
    }
    html.push_str("<button type=\"submit\">Show</button></form>");
}

fn results_html(html: &mut String, form: &ScrapeForm, scraped: &Scraped) {
    match scraped {
        Scraped::Images(urls) => {
            html.push_str("<div class=\"gallery\">");
            for url in urls {
                let _ = write!(
                    html,
                    "<a href=\"{0}\" target=\"_blank\" rel=\"noopener\"><img src=\"{0}\" loading=\"lazy\" alt=\"\"></a>",
                    attr(url)
                );
            }
            html.push_str("</div>");
        }
        Scraped::Text(body) => {
            let _ = write!(html, "<pre>{}</pre>", text(body));
        }
        Scraped::Tables(tables) => {
            table_picker(html, form, tables.len());
            for (i, table) in tables.iter().enumerate().filter(|(i, _)| form.shows_table(i + 1)) {
                let _ = write!(html, "<h3>Table {}</h3>", i + 1);
                table_html(html, table);
            }
        }
        Scraped::Movie(m) => fields_html(html, &m.fields(), "poster_url", "movie_link"),
        Scraped::Book(b) => fields_html(html, &b.fields(), "cover_url", "book_link"),
        Scraped::Videos(urls) => {
            html.push_str("<ol>");
            for url in urls {
                html.push_str("<li>");
                link(html, url, url);
                html.push_str("</li>");
            }
            html.push_str("</ol>");
        }
        Scraped::Products(products) => {
            html.push_str("<table><tr><th>#</th><th>Title</th><th>Price</th><th>Rating</th><th>Image</th></tr>");
            for (i, p) in products.iter().enumerate() {
                let _ = write!(html, "<tr><td>{}</td><td>", i + 1);
                link(html, &p.link, &p.title);
                let _ = write!(html, "</td><td>{}</td><td>{}</td><td>", text(&p.price), text(&p.rating));
                if p.image_url == NA {
                    html.push_str(NA);
                } else {
                    let _ = write!(html, "<img src=\"{}\" alt=\"\" style=\"max-width:80px\">", attr(&p.image_url));
                }
                html.push_str("</td></tr>");
            }
            html.push_str("</table>");
        }
        Scraped::Headlines(lines) => {
            html.push_str("<ol>");
            for line in lines {
                let _ = write!(html, "<li>{}</li>", text(line));
            }
            html.push_str("</ol>");
        }
        Scraped::PdfLinks(links) => {
            html.push_str("<ol>");
            for pdf in links {
                html.push_str("<li>");
                link(html, &pdf.url, &pdf.name);
                let _ = write!(
                    html,
                    " <button type=\"button\" onclick=\"pdfInfo(this,'{}')\">Extract info</button><pre></pre></li>",
                    attr(&pdf.url.replace('\\', "\\\\").replace('\'', "\\'"))
                );
            }
            html.push_str("</ol>");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PdfLink;

    #[test]
    fn blank_page_has_the_form() {
        let html = page(&ScrapeForm::default(), &Outcome::Blank);
        assert!(html.contains("<form class=\"scrape\""));
        assert!(html.contains("<option value=\"ebay\">eBay Products</option>"));
        assert!(html.contains("<option value=\"image\" selected>Images</option>"));
    }

    #[test]
    fn scraped_text_is_escaped() {
        let form = ScrapeForm { url: s!("https://a.com/?q=\"x\""), ..Default::default() };
        let html = page(&form, &Outcome::Results(Scraped::Headlines(vec![s!("<script>alert(1)</script> wins")])));
        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt; wins"));
        assert!(html.contains("value=\"https://a.com/?q=&quot;x&quot;\""));
    }

    #[test]
    fn only_ticked_tables_are_shown() {
        let t = |v: &str| DataSet::new(None, vec![vec![s!(v)]]);
        let form = ScrapeForm { data_type: PageKind::Tables, tables: vec![2], ..Default::default() };
        let html = page(&form, &Outcome::Results(Scraped::Tables(vec![t("first"), t("second")])));
        assert!(html.contains("<h3>Table 2</h3>"));
        assert!(!html.contains("<h3>Table 1</h3>"));
        assert!(html.contains("value=\"2\" checked"));
    }

    #[test]
    fn errors_and_pdf_buttons() {
        let html = page(&ScrapeForm::default(), &Outcome::Error(s!("No images found on this page.")));
        assert!(html.contains("<p class=\"error\">No images found on this page.</p>"));

        let links = vec![PdfLink { url: s!("https://a.com/r.pdf"), name: s!("r.pdf") }];
        let html = page(&ScrapeForm::default(), &Outcome::Results(Scraped::PdfLinks(links)));
        assert!(html.contains("pdfInfo(this,'https://a.com/r.pdf')"));
    }
}
