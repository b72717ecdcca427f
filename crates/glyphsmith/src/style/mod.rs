//! Style system for named Unicode text styles.
//!
//! This module provides the core styling primitives:
//!
//! - [`StyleDescriptor`]: One named style and the strategy that implements it
//! - [`Strategy`]: The tagged handling strategy (table, marks, wrap, reversal)
//! - [`StyleRegistry`]: An ordered, id-indexed catalog of styles
//! - [`RegistryError`]: Errors from lookup and validation
//!
//! Styles are plain data. The transform engine interprets a descriptor's
//! [`Strategy`]; the registry only stores and orders descriptors.

mod descriptor;
mod error;
mod registry;

pub use descriptor::{BaseGlyph, FontFallback, StyleDescriptor, StyleGroup, StyleKind, Strategy};
pub use error::RegistryError;
pub use registry::{builtin, StyleRegistry, StyleSummary};
