pub(crate) mod article_view;
