pub(crate) mod fonts;
pub(crate) mod theme;
