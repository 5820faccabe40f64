pub(crate) mod pages;
pub(crate) mod shell;
pub(crate) mod summary;
