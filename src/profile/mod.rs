//! Profile schema and loading.

pub(crate) mod fallback;
pub(crate) mod model;
pub(crate) mod source;
