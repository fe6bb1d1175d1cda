pub(crate) mod consumer;
pub(crate) mod style;
