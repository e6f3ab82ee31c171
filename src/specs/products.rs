// src/specs/products.rs
//
// eBay search results. The first couple of cards are layout placeholders.

use scraper::{ElementRef, Html};

use crate::config::consts::{EBAY_MAX_PRODUCTS, EBAY_SKIP_LISTINGS, NA, PLACEHOLDER_IMAGE};
use crate::config::options::ImageFormat;
use crate::core::html::{first_attr, or_na, select_text};
use crate::data::Product;

fn image_of(item: ElementRef<'_>, format: ImageFormat) -> String {
    let Some(img) = item.select(css!("img")).next() else {
        return s!(PLACEHOLDER_IMAGE);
    };
    let first = if let Some(src) = first_attr(img, &["src", "data-src"]) {
        src
    } else if let Some(srcset) = img.value().attr("srcset") {
        // "url 1x, url2 2x" → first url
        srcset.split(',').next().unwrap_or("").split_whitespace().next().unwrap_or("").to_string()
    } else {
        return s!(PLACEHOLDER_IMAGE);
    };
    if first.is_empty() {
        return s!(PLACEHOLDER_IMAGE);
    }
    let url = if first.starts_with("//") { join!("https:", &first) } else { first };
    let lower = url.to_ascii_lowercase();
    if format.extensions().iter().any(|ext| lower.ends_with(ext)) { url } else { s!(NA) }
}

pub fn parse_products(html: &str, format: ImageFormat) -> Vec<Product> {
    let doc = Html::parse_document(html);
    let mut listings: Vec<ElementRef<'_>> = doc.select(css!("li.s-item.s-item__pl-on-bottom")).collect();
    if listings.is_empty() {
        listings = doc.select(css!("li[data-viewport]")).collect();
    }

    let mut out = Vec::new();
    for item in listings.into_iter().skip(EBAY_SKIP_LISTINGS) {
        let Some(title) = select_text(item, css!(".s-item__title")) else { continue };
        let Some(link) = item
            .select(css!("a.s-item__link"))
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::to_string)
        else {
            continue;
        };
        let rating = select_text(item, css!(".s-item__reviews"))
            .or_else(|| select_text(item, css!(".x-star-rating")));
        out.push(Product {
            title,
            link,
            image_url: image_of(item, format),
            price: or_na(select_text(item, css!(".s-item__price"))),
            rating: or_na(rating),
        });
        if out.len() >= EBAY_MAX_PRODUCTS {
            break;
        }
    }
    out
}
