//! Document parsing utilities
//!
//! This module contains the specialized extraction passes run over a
//! container's parts.

pub(crate) mod heading;
pub(crate) mod media;
pub(crate) mod properties;
pub(crate) mod text;
