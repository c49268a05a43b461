pub(crate) mod params_form;
