use std::fmt;

/// Error types for linkscan operations
#[derive(Debug)]
pub enum LinkScanError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// PDF text decoding error
    Pdf(pdf_extract::OutputError),

    /// CSV row reading error
    Csv(csv::Error),

    /// DOCX container error (not a zip, missing document part)
    Zip(zip::result::ZipError),

    /// DOCX document XML error
    Xml(quick_xml::Error),

    /// JSON serialization error
    Json(serde_json::Error),

    /// File walking/ignore error
    FileWalking(ignore::Error),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for LinkScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkScanError::Io(err) => write!(f, "IO error: {err}"),
            LinkScanError::Pdf(err) => write!(f, "PDF error: {err}"),
            LinkScanError::Csv(err) => write!(f, "CSV error: {err}"),
            LinkScanError::Zip(err) => write!(f, "DOCX container error: {err}"),
            LinkScanError::Xml(err) => write!(f, "DOCX document error: {err}"),
            LinkScanError::Json(err) => write!(f, "JSON error: {err}"),
            LinkScanError::FileWalking(err) => write!(f, "File walking error: {err}"),
            LinkScanError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for LinkScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LinkScanError::Io(err) => Some(err),
            LinkScanError::Pdf(err) => Some(err),
            LinkScanError::Csv(err) => Some(err),
            LinkScanError::Zip(err) => Some(err),
            LinkScanError::Xml(err) => Some(err),
            LinkScanError::Json(err) => Some(err),
            LinkScanError::FileWalking(err) => Some(err),
            LinkScanError::InvalidArgument(_) => None,
        }
    }
}

impl From<std::io::Error> for LinkScanError {
    fn from(err: std::io::Error) -> Self {
        LinkScanError::Io(err)
    }
}

impl From<pdf_extract::OutputError> for LinkScanError {
    fn from(err: pdf_extract::OutputError) -> Self {
        LinkScanError::Pdf(err)
    }
}

impl From<csv::Error> for LinkScanError {
    fn from(err: csv::Error) -> Self {
        LinkScanError::Csv(err)
    }
}

impl From<zip::result::ZipError> for LinkScanError {
    fn from(err: zip::result::ZipError) -> Self {
        LinkScanError::Zip(err)
    }
}

impl From<quick_xml::Error> for LinkScanError {
    fn from(err: quick_xml::Error) -> Self {
        LinkScanError::Xml(err)
    }
}

impl From<serde_json::Error> for LinkScanError {
    fn from(err: serde_json::Error) -> Self {
        LinkScanError::Json(err)
    }
}

impl From<ignore::Error> for LinkScanError {
    fn from(err: ignore::Error) -> Self {
        LinkScanError::FileWalking(err)
    }
}

/// Type alias for Results using LinkScanError
pub type Result<T> = std::result::Result<T, LinkScanError>;
