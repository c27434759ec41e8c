pub type FolioResult<T> = Result<T, FolioError>;

/// Top-level error type for loading, validating and rendering a portfolio.
#[derive(thiserror::Error, Debug)]
pub enum FolioError {
    #[error("validation error: {0}")]
    Validation(String),

    /// A field a section cannot render without is absent or empty.
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("load error: {0}")]
    Load(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FolioError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FolioError::MissingField`] naming the field path.
    pub fn missing_field(path: impl Into<String>) -> Self {
        Self::MissingField(path.into())
    }

    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}
