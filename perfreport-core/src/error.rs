use thiserror::Error;

/// Main error type for perfreport
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed speedtest document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    #[error("no usable .json result in archive {0}")]
    NoResultInArchive(String),
}

impl From<zip::result::ZipError> for ReportError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(err) => ReportError::Io(err),
            other => ReportError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                other,
            )),
        }
    }
}
