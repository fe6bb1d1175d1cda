pub(crate) mod driver;
pub(crate) mod offset;
pub(crate) mod source;
