//! Style descriptors and their handling strategies.

use serde::Serialize;

use crate::glyphs::TableId;

/// The broad family a style's strategy belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleKind {
    /// Per-character substitution through a glyph table.
    DirectMap,
    /// Base glyph followed by one or more combining marks.
    CombiningMark,
    /// Base glyph surrounded by prefix/suffix symbols.
    Wrap,
    /// Reversed character order, optionally with substituted glyphs.
    Reversal,
    /// Text is returned unchanged.
    Passthrough,
}

impl StyleKind {
    /// Returns the serialized name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleKind::DirectMap => "directMap",
            StyleKind::CombiningMark => "combiningMark",
            StyleKind::Wrap => "wrap",
            StyleKind::Reversal => "reversal",
            StyleKind::Passthrough => "passthrough",
        }
    }
}

impl std::fmt::Display for StyleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the decorated glyph of a combining or wrap style comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseGlyph {
    /// The input character itself.
    Raw,
    /// The bold table's glyph, or the input character when unmapped.
    Bold,
    /// The fullwidth table's glyph, or the input character when unmapped.
    Fullwidth,
}

impl BaseGlyph {
    /// Appends the base glyph for `c` to `out`.
    pub fn push(self, c: char, out: &mut String) {
        match self {
            BaseGlyph::Raw => out.push(c),
            BaseGlyph::Bold => TableId::Bold.table().push_mapped(c, out),
            BaseGlyph::Fullwidth => TableId::Fullwidth.table().push_mapped(c, out),
        }
    }
}

/// How a style turns input text into output text.
///
/// Each variant carries exactly the data its handler needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Return the text unchanged.
    Passthrough,
    /// Substitute each character through a glyph table.
    DirectMap(TableId),
    /// Emit `base(c)` followed by `marks` for every non-space character.
    CombiningMark {
        base: BaseGlyph,
        marks: &'static str,
    },
    /// Emit `prefix + base(c) + marks + suffix` for every non-space character.
    Wrap {
        prefix: &'static str,
        base: BaseGlyph,
        marks: &'static str,
        suffix: &'static str,
    },
    /// Reverse the characters, then substitute through the table if given.
    Reversal(Option<TableId>),
}

impl Strategy {
    /// Returns the kind this strategy belongs to.
    pub fn kind(&self) -> StyleKind {
        match self {
            Strategy::Passthrough => StyleKind::Passthrough,
            Strategy::DirectMap(_) => StyleKind::DirectMap,
            Strategy::CombiningMark { .. } => StyleKind::CombiningMark,
            Strategy::Wrap { .. } => StyleKind::Wrap,
            Strategy::Reversal(_) => StyleKind::Reversal,
        }
    }

    /// Returns the substitution table the strategy reads, if any.
    pub fn table(&self) -> Option<TableId> {
        match self {
            Strategy::DirectMap(table) => Some(*table),
            Strategy::Reversal(table) => *table,
            _ => None,
        }
    }
}

/// Generic CSS font family to fall back on when displaying a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum FontFallback {
    #[default]
    #[serde(rename = "sans-serif")]
    SansSerif,
    #[serde(rename = "serif")]
    Serif,
    #[serde(rename = "cursive")]
    Cursive,
    #[serde(rename = "monospace")]
    Monospace,
}

impl FontFallback {
    /// Returns the CSS generic family name.
    pub fn as_css(self) -> &'static str {
        match self {
            FontFallback::SansSerif => "sans-serif",
            FontFallback::Serif => "serif",
            FontFallback::Cursive => "cursive",
            FontFallback::Monospace => "monospace",
        }
    }
}

/// Catalog section a style is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleGroup {
    #[default]
    Basic,
    Linear,
    Crowned,
    Crossed,
    Special,
    Bracket,
    Combined,
    Reversal,
    SymbolFusion,
    Flow,
}

impl StyleGroup {
    /// Every group, in catalog order.
    pub const ALL: [StyleGroup; 10] = [
        StyleGroup::Basic,
        StyleGroup::Linear,
        StyleGroup::Crowned,
        StyleGroup::Crossed,
        StyleGroup::Special,
        StyleGroup::Bracket,
        StyleGroup::Combined,
        StyleGroup::Reversal,
        StyleGroup::SymbolFusion,
        StyleGroup::Flow,
    ];

    /// Returns the key used on the command line and in JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleGroup::Basic => "basic",
            StyleGroup::Linear => "linear",
            StyleGroup::Crowned => "crowned",
            StyleGroup::Crossed => "crossed",
            StyleGroup::Special => "special",
            StyleGroup::Bracket => "bracket",
            StyleGroup::Combined => "combined",
            StyleGroup::Reversal => "reversal",
            StyleGroup::SymbolFusion => "symbolFusion",
            StyleGroup::Flow => "flow",
        }
    }

    /// Returns a human-readable section heading.
    pub fn label(self) -> &'static str {
        match self {
            StyleGroup::Basic => "Basic",
            StyleGroup::Linear => "Linear",
            StyleGroup::Crowned => "Crowned",
            StyleGroup::Crossed => "Crossed",
            StyleGroup::Special => "Special Letters",
            StyleGroup::Bracket => "Brackets & Symbols",
            StyleGroup::Combined => "Combined Marks",
            StyleGroup::Reversal => "Reversed",
            StyleGroup::SymbolFusion => "Symbol Fusion",
            StyleGroup::Flow => "Flow",
        }
    }

    /// Parses a group key as returned by [`StyleGroup::as_str`].
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.as_str() == key)
    }
}

/// One named visual style.
///
/// Descriptors are `Copy` and built in `const` context so that the built-in
/// catalog is plain static data.
///
/// # Example
///
/// ```rust
/// use glyphsmith::{BaseGlyph, StyleDescriptor, StyleKind, Strategy};
///
/// let stars = StyleDescriptor::new(
///     "stars",
///     "Stars",
///     Strategy::Wrap { prefix: "", base: BaseGlyph::Raw, marks: "", suffix: "*" },
/// );
/// assert_eq!(stars.kind(), StyleKind::Wrap);
/// assert_eq!(stars.apply("ab c"), "a*b* c*");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDescriptor {
    id: &'static str,
    name: &'static str,
    display_name: &'static str,
    fallback: FontFallback,
    group: StyleGroup,
    strategy: Strategy,
}

impl StyleDescriptor {
    /// Creates a descriptor whose catalog name equals its display name.
    pub const fn new(id: &'static str, display_name: &'static str, strategy: Strategy) -> Self {
        Self {
            id,
            name: display_name,
            display_name,
            fallback: FontFallback::SansSerif,
            group: StyleGroup::Basic,
            strategy,
        }
    }

    /// Sets the PascalCase catalog name.
    pub const fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Sets the CSS fallback family.
    pub const fn with_fallback(mut self, fallback: FontFallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Sets the catalog section.
    pub const fn in_group(mut self, group: StyleGroup) -> Self {
        self.group = group;
        self
    }

    /// The stable lookup key.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// The PascalCase catalog name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub fn fallback(&self) -> FontFallback {
        self.fallback
    }

    pub fn group(&self) -> StyleGroup {
        self.group
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn kind(&self) -> StyleKind {
        self.strategy.kind()
    }

    /// Applies this style to `text`.
    pub fn apply(&self, text: &str) -> String {
        crate::engine::apply(&self.strategy, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_kind() {
        assert_eq!(Strategy::Passthrough.kind(), StyleKind::Passthrough);
        assert_eq!(Strategy::DirectMap(TableId::Bold).kind(), StyleKind::DirectMap);
        assert_eq!(Strategy::Reversal(None).kind(), StyleKind::Reversal);
        assert_eq!(
            Strategy::CombiningMark {
                base: BaseGlyph::Bold,
                marks: "\u{0332}"
            }
            .kind(),
            StyleKind::CombiningMark
        );
    }

    #[test]
    fn test_strategy_table() {
        assert_eq!(Strategy::DirectMap(TableId::Greek).table(), Some(TableId::Greek));
        assert_eq!(Strategy::Reversal(Some(TableId::Flip)).table(), Some(TableId::Flip));
        assert_eq!(Strategy::Reversal(None).table(), None);
        assert_eq!(Strategy::Passthrough.table(), None);
    }

    #[test]
    fn test_base_glyph_push() {
        let mut out = String::new();
        BaseGlyph::Raw.push('a', &mut out);
        BaseGlyph::Bold.push('a', &mut out);
        BaseGlyph::Fullwidth.push('a', &mut out);
        BaseGlyph::Bold.push('é', &mut out);
        assert_eq!(out, "a𝐚ａé");
    }

    #[test]
    fn test_descriptor_builder() {
        let style = StyleDescriptor::new("bold", "Bold", Strategy::DirectMap(TableId::Bold))
            .named("BoldFace")
            .with_fallback(FontFallback::Serif)
            .in_group(StyleGroup::Special);

        assert_eq!(style.id(), "bold");
        assert_eq!(style.name(), "BoldFace");
        assert_eq!(style.display_name(), "Bold");
        assert_eq!(style.fallback().as_css(), "serif");
        assert_eq!(style.group(), StyleGroup::Special);
        assert_eq!(style.kind(), StyleKind::DirectMap);
    }

    #[test]
    fn test_group_key_round_trip() {
        for group in StyleGroup::ALL {
            assert_eq!(StyleGroup::from_key(group.as_str()), Some(group));
        }
        assert_eq!(StyleGroup::from_key("nope"), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(StyleKind::CombiningMark.to_string(), "combiningMark");
    }
}
