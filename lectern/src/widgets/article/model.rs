use serde::Deserialize;

use super::errors::ArticleError;

pub(crate) const ARTICLE_JSON: &str =
    include_str!("../../../assets/article.json");

/// Text of the displayed article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct ArticleContent {
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) subtitle: String,
    #[serde(default)]
    pub(crate) paragraphs: Vec<String>,
}

impl ArticleContent {
    pub(crate) fn from_json(json: &str) -> Result<Self, ArticleError> {
        Ok(serde_json::from_str(json)?)
    }
}
