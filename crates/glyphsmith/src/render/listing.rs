//! Catalog listings grouped by section.

use serde::Serialize;

use crate::style::{StyleGroup, StyleRegistry, StyleSummary};

/// Sample text applied to each style in listings.
pub const LISTING_SAMPLE: &str = "Aa Bb 123";

/// A style in a listing, with `sample` already rendered through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedStyle {
    #[serde(flatten)]
    pub summary: StyleSummary,
    pub sample: String,
}

/// One catalog section and its styles, in registry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingGroup {
    pub key: &'static str,
    pub label: &'static str,
    pub styles: Vec<ListedStyle>,
}

/// Groups the registry by section, skipping empty sections.
///
/// Each style's sample is produced by the style itself, so custom
/// registries list correctly. With `only` set, just that section is returned.
pub fn build_listing(
    registry: &StyleRegistry,
    only: Option<StyleGroup>,
    sample: &str,
) -> Vec<ListingGroup> {
    StyleGroup::ALL
        .iter()
        .copied()
        .filter(|group| only.map_or(true, |wanted| wanted == *group))
        .map(|group| ListingGroup {
            key: group.as_str(),
            label: group.label(),
            styles: registry
                .in_group(group)
                .map(|style| ListedStyle {
                    summary: StyleSummary::from(style),
                    sample: style.apply(sample),
                })
                .collect(),
        })
        .filter(|group| !group.styles.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyphs::TableId;
    use crate::output::OutputMode;
    use crate::render::PreviewRenderer;
    use crate::style::{builtin, StyleDescriptor, Strategy};
    use crate::theme::Theme;

    #[test]
    fn test_listing_covers_whole_catalog() {
        let groups = build_listing(builtin(), None, LISTING_SAMPLE);
        let total: usize = groups.iter().map(|group| group.styles.len()).sum();
        assert_eq!(total, builtin().len());
        assert_eq!(groups.len(), StyleGroup::ALL.len());
        assert_eq!(groups[0].key, "basic");
        assert_eq!(groups[0].styles[0].summary.id, "normal");
        assert_eq!(groups[0].styles[0].sample, LISTING_SAMPLE);
    }

    #[test]
    fn test_listing_single_group() {
        let groups = build_listing(builtin(), Some(StyleGroup::Reversal), "ab");
        assert_eq!(groups.len(), 1);
        let ids: Vec<_> = groups[0].styles.iter().map(|entry| entry.summary.id).collect();
        assert!(ids.contains(&"backwardFlip"));
        assert!(ids.contains(&"reverseText"));
    }

    #[test]
    fn test_listing_samples_use_their_own_registry() {
        let registry = StyleRegistry::new().add(
            StyleDescriptor::new("heavy", "Heavy", Strategy::DirectMap(TableId::Bold))
                .in_group(StyleGroup::Special),
        );
        let groups = build_listing(&registry, None, "ab");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].styles[0].sample, "𝐚𝐛");

        let renderer = PreviewRenderer::new(Theme::light(), OutputMode::Text).unwrap();
        let out = renderer.render_list(&groups, 80).unwrap();
        assert!(out.contains("  heavy"));
        assert!(out.contains("𝐚𝐛"));
    }

    #[test]
    fn test_listed_style_serializes_flat() {
        let groups = build_listing(builtin(), Some(StyleGroup::Reversal), "ab");
        let json = serde_json::to_value(&groups[0].styles[0]).unwrap();
        assert_eq!(json["id"], "reverseText");
        assert_eq!(json["displayName"], "Reverse Text");
        assert_eq!(json["sample"], "ba");
    }

    #[test]
    fn test_render_list_applies_each_style() {
        let renderer = PreviewRenderer::new(Theme::light(), OutputMode::Text).unwrap();
        let groups = build_listing(builtin(), Some(StyleGroup::Reversal), "ab");
        let out = renderer.render_list(&groups, 80).unwrap();
        assert!(out.starts_with(StyleGroup::Reversal.label()));
        assert!(out.contains("  backwardFlip"));
        assert!(out.contains("Backward Flip Text"));
        assert!(out.contains("qɐ"));
        assert!(out.contains("reversal"));
    }
}
