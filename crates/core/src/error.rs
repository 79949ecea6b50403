#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid text: {0}")]
    InvalidText(#[from] site_types::TextError),
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
    #[error("{document} schema mismatch at {path}: {source}")]
    ContentParse {
        document: &'static str,
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("failed to read site config: {0}")]
    ConfigRead(std::io::Error),
    #[error("failed to deserialize site config: {0}")]
    ConfigDeserialization(serde_yaml::Error),
    #[error("structured data error: {0}")]
    JsonLd(#[from] jsonld::JsonLdError),
    #[error("failed to create output directory {path}: {source}", path = path.display())]
    OutputDirCreation {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}", path = path.display())]
    FileWrite {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type SiteResult<T> = std::result::Result<T, SiteError>;
