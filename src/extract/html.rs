//! HTML link extraction.
//!
//! Unlike the text-scanning extractors, HTML files are parsed as a
//! document and every anchor's `href` attribute is taken verbatim.
//! Relative, fragment-only and non-http hrefs pass through here; the
//! normalizer filters them out by requiring a scheme.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::core::error::Result;

use std::fs;
use std::path::Path;

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("Failed to compile anchor selector"));

/// Collect the non-empty `href` attribute of every anchor element.
pub fn extract(path: &Path) -> Result<Vec<String>> {
    let html = fs::read_to_string(path)?;
    let document = Html::parse_document(&html);

    let links = document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect();

    Ok(links)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::io::Write;

    fn extract_from_str(html: &str) -> Vec<String> {
        let mut file = tempfile::Builder::new()
            .suffix(".html")
            .tempfile()
            .unwrap();
        file.write_all(html.as_bytes()).unwrap();
        extract(file.path()).unwrap()
    }

    #[test]
    fn test_extract__takes_href_verbatim() {
        let links = extract_from_str(
            r##"<html><body>
                <a href="https://site.com/x">absolute</a>
                <a href="/relative/path">relative</a>
                <a href="#section">fragment</a>
                <a href="mailto:someone@site.com">mail</a>
            </body></html>"##,
        );

        // Everything is included at this stage, filtering happens in
        // the normalizer.
        assert_eq!(
            links,
            vec![
                "https://site.com/x".to_string(),
                "/relative/path".to_string(),
                "#section".to_string(),
                "mailto:someone@site.com".to_string(),
            ]
        );
    }

    #[test]
    fn test_extract__skips_anchors_without_href() {
        let links =
            extract_from_str(r#"<a name="top">no href</a> <a href="">empty</a> <a href="https://kept.com">kept</a>"#);
        assert_eq!(links, vec!["https://kept.com".to_string()]);
    }

    #[test]
    fn test_extract__body_text_is_not_scanned() {
        // URLs in text content are ignored for HTML; only anchors count.
        let links = extract_from_str("<p>see https://in-text.example.com</p>");
        assert!(links.is_empty());
    }

    #[test]
    fn test_extract__malformed_html_does_not_error() {
        // html5ever recovers from arbitrary tag soup. Its recovery
        // re-opens the anchor inside the div, so the href shows up
        // twice here; the normalizer deduplicates downstream.
        let links = extract_from_str("<a href='https://soup.com'><div></a></p>");
        assert_eq!(
            links,
            vec![
                "https://soup.com".to_string(),
                "https://soup.com".to_string(),
            ]
        );
    }
}
