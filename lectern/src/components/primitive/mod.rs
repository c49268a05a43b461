pub(crate) mod action_button;
pub(crate) mod arrow_button;
pub(crate) mod radio_group;
pub(crate) mod select;
pub(crate) mod separator;
