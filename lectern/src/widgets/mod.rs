pub(crate) mod article;
pub(crate) mod article_params;
