pub(crate) mod ease;
pub(crate) mod spring;
pub(crate) mod table;
pub(crate) mod transition;
