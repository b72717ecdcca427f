//! Template rendering for previews and style listings.
//!
//! - [`PreviewRenderer`]: MiniJinja environment with the glyph and theme filters
//! - [`Preview`] / [`PreviewCard`]: the data behind the preview grid
//! - [`ListingGroup`]: one catalog section for `list` output
//!
//! Templates can call `glyph` to apply any registered style:
//!
//! ```text
//! {{ "Hello" | glyph("boldScript") }}
//! ```

mod filters;
mod listing;
mod preview;

pub use listing::{build_listing, ListedStyle, ListingGroup, LISTING_SAMPLE};
pub use preview::{
    build_preview, Preview, PreviewCard, PreviewConfig, PreviewRenderer, DEFAULT_PREVIEW_TEXT,
    HOME_PREVIEW_LIMIT,
};
