pub(crate) mod article_params;
pub(crate) mod window;
