//! # Glyphsmith - Unicode "font" styling for plain text
//!
//! Glyphsmith turns ordinary text into look-alike "fonts" built from Unicode:
//! mathematical alphanumerics, enclosed letters, combining marks, bracket
//! decorations and flipped or mirrored text. The output is plain text that can
//! be pasted anywhere Unicode is accepted.
//!
//! ## Core Concepts
//!
//! - [`StyleDescriptor`]: one named style and its [`Strategy`]
//! - [`StyleRegistry`]: an ordered, id-indexed catalog; [`builtin()`] holds the stock styles
//! - [`GlyphTable`]: a static character substitution table, named by [`TableId`]
//! - [`PreviewRenderer`]: renders a preview grid or style listing for the terminal
//!
//! ## Quick Start
//!
//! ```rust
//! use glyphsmith::{display_name, transform};
//!
//! assert_eq!(transform("ABC", "bold"), "𝐀𝐁𝐂");
//! assert_eq!(transform("Flip", "backwardFlip"), "dᴉlℲ");
//! assert_eq!(transform("hi", "no-such-style"), "hi");
//! assert_eq!(display_name("boldScript"), Some("Bold Script"));
//! ```
//!
//! ## Strategies
//!
//! Every style is handled by exactly one strategy:
//!
//! - `DirectMap`: per-character lookup in a glyph table
//! - `CombiningMark`: base glyph followed by combining marks
//! - `Wrap`: prefix, base glyph, marks and suffix around each character
//! - `Reversal`: reverse the text, optionally substituting through a table
//! - `Passthrough`: identity
//!
//! Transforms never fail. Characters a style has no glyph for, and ids that
//! are not registered, pass through unchanged.

mod catalog;
mod engine;
mod glyphs;
mod output;
mod render;
mod style;
mod theme;
mod util;

pub use glyphs::{GlyphTable, TableId};
pub use output::OutputMode;
pub use render::{
    build_listing, build_preview, ListedStyle, ListingGroup, Preview, PreviewCard, PreviewConfig,
    PreviewRenderer, DEFAULT_PREVIEW_TEXT, HOME_PREVIEW_LIMIT, LISTING_SAMPLE,
};
pub use style::{
    builtin, BaseGlyph, FontFallback, RegistryError, StyleDescriptor, StyleGroup, StyleKind,
    StyleRegistry, StyleSummary, Strategy,
};
pub use theme::{set_theme_detector, ColorMode, Theme};
pub use util::{clamp_chars, pad_to_width, truncate_to_width, MAX_INPUT_CHARS};

/// Applies the built-in style `id` to `text`.
///
/// Unknown ids return the text unchanged.
pub fn transform(text: &str, id: &str) -> String {
    builtin().transform(text, id)
}

/// Returns every built-in style id, in catalog order.
pub fn list_style_ids() -> Vec<&'static str> {
    builtin().list_style_ids()
}

/// Returns the display name of a built-in style.
pub fn display_name(id: &str) -> Option<&'static str> {
    builtin().display_name(id)
}

/// Applies every built-in style to `text`, in catalog order.
pub fn transform_all(text: &str) -> Vec<(&'static str, String)> {
    builtin().transform_all(text)
}
