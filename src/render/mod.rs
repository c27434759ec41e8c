//! Data-driven page rendering.

pub(crate) mod coordinator;
pub(crate) mod document;
pub(crate) mod icons;
pub(crate) mod sections;
