//! Character substitution tables.
//!
//! This module provides the static lookup tables behind every table-driven
//! style:
//!
//! - [`TableId`]: A stable identifier for each built-in table
//! - [`GlyphTable`]: A finite map from source character to replacement glyph
//!
//! Tables are built lazily on first use and shared process-wide. A table only
//! knows the characters it declares; everything else is reported as unmapped
//! and callers pass it through unchanged.

mod data;

use std::collections::HashMap;

use once_cell::sync::Lazy;

use data::Column;

/// Identifies one of the built-in glyph tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
    Bold,
    Italic,
    BoldItalic,
    Gothic,
    BoldGothic,
    Script,
    BoldScript,
    SansSerifBold,
    SansSerifItalic,
    SansSerifBoldItalic,
    SansSerifBoldItalic2,
    Monospace,
    DoubleStruck,
    Bubble,
    DarkBubble,
    Square,
    Parenthesized,
    SmallCaps,
    Fullwidth,
    Reversed,
    Superscript,
    Subscript,
    Greek,
    Rounded,
    Vintage,
    Small,
    /// Upside-down letterforms used by the `backwardFlip` style.
    Flip,
    /// Mirrored letterforms used by the `mirrorText` style.
    Mirror,
    /// Upside-down letterforms used by the `upsideDown` style.
    UpsideDown,
}

impl TableId {
    /// Every table, in declaration order.
    pub const ALL: [TableId; 29] = [
        TableId::Bold,
        TableId::Italic,
        TableId::BoldItalic,
        TableId::Gothic,
        TableId::BoldGothic,
        TableId::Script,
        TableId::BoldScript,
        TableId::SansSerifBold,
        TableId::SansSerifItalic,
        TableId::SansSerifBoldItalic,
        TableId::SansSerifBoldItalic2,
        TableId::Monospace,
        TableId::DoubleStruck,
        TableId::Bubble,
        TableId::DarkBubble,
        TableId::Square,
        TableId::Parenthesized,
        TableId::SmallCaps,
        TableId::Fullwidth,
        TableId::Reversed,
        TableId::Superscript,
        TableId::Subscript,
        TableId::Greek,
        TableId::Rounded,
        TableId::Vintage,
        TableId::Small,
        TableId::Flip,
        TableId::Mirror,
        TableId::UpsideDown,
    ];

    /// Returns the short name of the table.
    pub fn name(self) -> &'static str {
        match self {
            TableId::Bold => "bold",
            TableId::Italic => "italic",
            TableId::BoldItalic => "boldItalic",
            TableId::Gothic => "gothic",
            TableId::BoldGothic => "boldGothic",
            TableId::Script => "script",
            TableId::BoldScript => "boldScript",
            TableId::SansSerifBold => "sansSerifBold",
            TableId::SansSerifItalic => "sansSerifItalic",
            TableId::SansSerifBoldItalic => "sansSerifBoldItalic",
            TableId::SansSerifBoldItalic2 => "sansSerifBoldItalic2",
            TableId::Monospace => "monospace",
            TableId::DoubleStruck => "doubleStruck",
            TableId::Bubble => "bubble",
            TableId::DarkBubble => "darkBubble",
            TableId::Square => "square",
            TableId::Parenthesized => "parenthesized",
            TableId::SmallCaps => "smallCaps",
            TableId::Fullwidth => "fullwidth",
            TableId::Reversed => "reversed",
            TableId::Superscript => "superscript",
            TableId::Subscript => "subscript",
            TableId::Greek => "greek",
            TableId::Rounded => "rounded",
            TableId::Vintage => "vintage",
            TableId::Small => "small",
            TableId::Flip => "flip",
            TableId::Mirror => "mirror",
            TableId::UpsideDown => "upsideDown",
        }
    }

    /// Returns the shared table for this id, building all tables on first use.
    pub fn table(self) -> &'static GlyphTable {
        &TABLES[self as usize]
    }

    fn columns(self) -> &'static [Column] {
        match self {
            TableId::Bold => data::BOLD,
            TableId::Italic => data::ITALIC,
            TableId::BoldItalic => data::BOLD_ITALIC,
            TableId::Gothic => data::GOTHIC,
            TableId::BoldGothic => data::BOLD_GOTHIC,
            TableId::Script => data::SCRIPT,
            TableId::BoldScript => data::BOLD_SCRIPT,
            TableId::SansSerifBold => data::SANS_SERIF_BOLD,
            TableId::SansSerifItalic => data::SANS_SERIF_ITALIC,
            TableId::SansSerifBoldItalic => data::SANS_SERIF_BOLD_ITALIC,
            TableId::SansSerifBoldItalic2 => data::SANS_SERIF_BOLD_ITALIC_2,
            TableId::Monospace => data::MONOSPACE,
            TableId::DoubleStruck => data::DOUBLE_STRUCK,
            TableId::Bubble => data::BUBBLE,
            TableId::DarkBubble => data::DARK_BUBBLE,
            TableId::Square => data::SQUARE,
            TableId::Parenthesized => data::PARENTHESIZED,
            TableId::SmallCaps => data::SMALL_CAPS,
            TableId::Fullwidth => data::FULLWIDTH,
            TableId::Reversed => data::REVERSED,
            TableId::Superscript => data::SUPERSCRIPT,
            TableId::Subscript => data::SUBSCRIPT,
            TableId::Greek => data::GREEK,
            TableId::Rounded => data::ROUNDED,
            TableId::Vintage => data::VINTAGE,
            TableId::Small => data::SMALL,
            TableId::Flip => data::FLIP,
            TableId::Mirror => data::MIRROR,
            TableId::UpsideDown => data::UPSIDE_DOWN,
        }
    }
}

static TABLES: Lazy<Vec<GlyphTable>> = Lazy::new(|| {
    let tables: Vec<GlyphTable> = TableId::ALL.iter().map(|&id| GlyphTable::build(id)).collect();
    log::debug!("built {} glyph tables", tables.len());
    tables
});

/// A finite substitution table from source characters to replacement glyphs.
///
/// Replacement glyphs are strings, not `char`s, so a table may map one
/// character to a multi-codepoint sequence.
#[derive(Debug, Clone)]
pub struct GlyphTable {
    id: TableId,
    glyphs: HashMap<char, &'static str>,
}

impl GlyphTable {
    fn build(id: TableId) -> Self {
        let mut glyphs = HashMap::new();
        for (keys, replacements) in id.columns() {
            debug_assert_eq!(
                keys.chars().count(),
                replacements.split(' ').count(),
                "column length mismatch in table '{}'",
                id.name()
            );
            for (key, glyph) in keys.chars().zip(replacements.split(' ')) {
                glyphs.insert(key, glyph);
            }
        }
        Self { id, glyphs }
    }

    /// Returns the id this table was built from.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Looks up the replacement for `c`.
    ///
    /// Returns `None` when the table does not declare `c`.
    pub fn get(&self, c: char) -> Option<&'static str> {
        self.glyphs.get(&c).copied()
    }

    /// Returns true if the table declares a replacement for `c`.
    pub fn contains(&self, c: char) -> bool {
        self.glyphs.contains_key(&c)
    }

    /// Appends the replacement for `c` to `out`, or `c` itself when unmapped.
    pub fn push_mapped(&self, c: char, out: &mut String) {
        match self.get(c) {
            Some(glyph) => out.push_str(glyph),
            None => out.push(c),
        }
    }

    /// Number of characters the table declares.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns true if the table declares no characters.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_have_one_glyph_per_key() {
        for id in TableId::ALL {
            for (keys, replacements) in id.columns() {
                assert_eq!(
                    keys.chars().count(),
                    replacements.split(' ').count(),
                    "table '{}' column {:?}",
                    id.name(),
                    keys
                );
            }
        }
    }

    #[test]
    fn test_table_index_matches_id() {
        for id in TableId::ALL {
            assert_eq!(id.table().id(), id);
        }
    }

    #[test]
    fn test_letter_tables_cover_latin_alphabet() {
        for id in TableId::ALL {
            let table = id.table();
            for c in ('A'..='Z').chain('a'..='z') {
                assert!(table.contains(c), "table '{}' misses {:?}", id.name(), c);
            }
        }
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(TableId::Bold.table().len(), 62);
        assert_eq!(TableId::Italic.table().len(), 52);
        assert_eq!(TableId::Fullwidth.table().len(), 69);
        assert_eq!(TableId::Superscript.table().len(), 67);
        assert_eq!(TableId::Flip.table().len(), 52);
    }

    #[test]
    fn test_bold_lookup() {
        let bold = TableId::Bold.table();
        assert_eq!(bold.get('A'), Some("𝐀"));
        assert_eq!(bold.get('z'), Some("𝐳"));
        assert_eq!(bold.get('7'), Some("𝟕"));
        assert_eq!(bold.get('!'), None);
    }

    #[test]
    fn test_italic_uses_planck_constant_for_h() {
        assert_eq!(TableId::Italic.table().get('h'), Some("ℎ"));
    }

    #[test]
    fn test_fullwidth_maps_space_and_punctuation() {
        let fullwidth = TableId::Fullwidth.table();
        assert_eq!(fullwidth.get(' '), Some("\u{3000}"));
        assert_eq!(fullwidth.get('!'), Some("！"));
        assert_eq!(fullwidth.get(';'), Some("；"));
        assert_eq!(fullwidth.get('-'), None);
    }

    #[test]
    fn test_case_shared_glyphs_are_preserved() {
        let greek = TableId::Greek.table();
        assert_eq!(greek.get('A'), greek.get('a'));
        let rounded = TableId::Rounded.table();
        assert_eq!(rounded.get('E'), Some("E"));
        assert_eq!(rounded.get('e'), Some("e"));
        let vintage = TableId::Vintage.table();
        assert_eq!(vintage.get('J'), vintage.get('N'));
    }

    #[test]
    fn test_reversal_tables_differ_in_a_few_letters() {
        let flip = TableId::Flip.table();
        let mirror = TableId::Mirror.table();
        let upside = TableId::UpsideDown.table();
        assert_eq!(flip.get('A'), Some("∀"));
        assert_eq!(mirror.get('A'), Some("A"));
        assert_eq!(flip.get('R'), Some("ᴿ"));
        assert_eq!(mirror.get('R'), Some("ɿ"));
        assert_eq!(upside.get('N'), Some("Ո"));
        assert_eq!(upside.get('T'), Some("┴"));
        assert_eq!(flip.get('r'), mirror.get('r'));
    }

    #[test]
    fn test_push_mapped_passes_unknown_through() {
        let mut out = String::new();
        TableId::Bold.table().push_mapped('é', &mut out);
        TableId::Bold.table().push_mapped('a', &mut out);
        assert_eq!(out, "é𝐚");
    }
}
