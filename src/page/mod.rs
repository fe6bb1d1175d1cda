pub(crate) mod dsl;
pub(crate) mod form;
pub(crate) mod model;
pub(crate) mod mount;
pub(crate) mod validate;
