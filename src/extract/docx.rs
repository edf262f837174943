//! DOCX link extraction.
//!
//! A .docx file is a zip container; the document body lives in
//! `word/document.xml`. The XML is streamed with quick-xml, text runs
//! (`w:t`) are accumulated per paragraph (`w:p`), and each paragraph's
//! text is scanned with the shared URL pattern.

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::core::error::Result;
use crate::extract::scan_for_urls;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const DOCUMENT_PART: &str = "word/document.xml";

/// Iterate paragraph text content and scan each paragraph for URLs.
pub fn extract(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;
    let document = archive.by_name(DOCUMENT_PART)?;
    let mut reader = Reader::from_reader(BufReader::new(document));

    let mut links = Vec::new();
    let mut paragraph = String::new();
    let mut in_text_run = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Event::Text(ref e) if in_text_run => paragraph.push_str(&e.unescape()?),
            Event::End(ref e) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => {
                    scan_for_urls(&paragraph, &mut links);
                    paragraph.clear();
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(links)
}
