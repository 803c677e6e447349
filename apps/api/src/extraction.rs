//! Text extraction for uploaded resumes.
//!
//! Extraction never fails outward: any error (including a panic inside a
//! parser) is logged and yields an empty string, which the analyzer accepts as
//! valid low-information input.

use std::io::{Cursor, Read};

use anyhow::Context;
use bytes::Bytes;
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::warn;

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const DOCX_BODY: &str = "word/document.xml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    /// Detects the format from a MIME type, falling back to the file extension.
    /// Returns `None` for formats we cannot read (e.g. legacy binary DOC).
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Option<Self> {
        let mime = content_type
            .map(|ct| ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase());
        match mime.as_deref() {
            Some("application/pdf") => return Some(Self::Pdf),
            Some(DOCX_MIME) => return Some(Self::Docx),
            Some("text/plain") | Some("text/markdown") => return Some(Self::PlainText),
            _ => {}
        }

        let extension = file_name
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("pdf") => Some(Self::Pdf),
            Some("docx") => Some(Self::Docx),
            Some("txt") | Some("md") => Some(Self::PlainText),
            _ => None,
        }
    }
}

pub async fn extract_text(format: DocumentFormat, bytes: Bytes) -> String {
    match format {
        DocumentFormat::PlainText => String::from_utf8_lossy(&bytes).into_owned(),
        DocumentFormat::Pdf => {
            extract_blocking(format, bytes, |bytes| {
                pdf_extract::extract_text_from_mem(bytes).map_err(|e| anyhow::anyhow!("{e}"))
            })
            .await
        }
        DocumentFormat::Docx => extract_blocking(format, bytes, docx_text).await,
    }
}

async fn extract_blocking(
    format: DocumentFormat,
    bytes: Bytes,
    extract: fn(&[u8]) -> anyhow::Result<String>,
) -> String {
    let size = bytes.len();
    let joined = tokio::task::spawn_blocking(move || extract(&bytes)).await;

    match joined {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!("{format:?} text extraction failed ({size} bytes): {e:#}");
            String::new()
        }
        Err(e) => {
            warn!("{format:?} text extraction aborted ({size} bytes): {e}");
            String::new()
        }
    }
}

/// Reads the main document part of a DOCX package, one line per paragraph.
fn docx_text(bytes: &[u8]) -> anyhow::Result<String> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).context("DOCX is not a zip package")?;
    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY)
        .with_context(|| format!("DOCX has no {DOCX_BODY}"))?
        .read_to_string(&mut xml)
        .with_context(|| format!("failed to read {DOCX_BODY}"))?;
    paragraph_text(&xml).context("malformed DOCX body")
}

/// Collects `w:t` runs, honoring tabs and breaks, and ends a line at every `w:p`.
fn paragraph_text(xml: &str) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"t" => in_text = true,
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" => current.push('\t'),
                b"br" | b"cr" => current.push('\n'),
                b"p" => paragraphs.push(String::new()),
                _ => {}
            },
            Event::Text(t) if in_text => current.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }

    Ok(paragraphs.join("\n"))
}
