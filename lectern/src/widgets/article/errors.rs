use thiserror::Error;

/// Errors emitted while loading the article content.
#[derive(Debug, Error)]
pub(crate) enum ArticleError {
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors emitted while resolving a style variable into a concrete value.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum StyleValueError {
    #[error("`{0}` is not a pixel length.")]
    InvalidPixels(String),
    #[error("`{0}` is not a #RRGGBB color.")]
    InvalidColor(String),
    #[error("Font family list is empty.")]
    EmptyFontFamily,
}
