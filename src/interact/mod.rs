//! Interaction handlers: navigation, in-page links, contact form.

pub(crate) mod anchor;
pub(crate) mod contact;
pub(crate) mod nav;
