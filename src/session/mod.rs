pub(crate) mod simulate;
pub(crate) mod sink;
