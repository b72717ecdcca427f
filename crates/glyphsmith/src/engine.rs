//! Transform engine: one handler per strategy kind.
//!
//! Every handler walks the input by Unicode scalar value (`char`), never by
//! byte or UTF-16 unit, and never fails. Characters a handler has no glyph
//! for are copied through unchanged.

use crate::glyphs::{GlyphTable, TableId};
use crate::style::{BaseGlyph, Strategy};

/// Applies a strategy to `text`.
pub(crate) fn apply(strategy: &Strategy, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    log::trace!("applying {} to {} chars", strategy.kind(), text.chars().count());

    match *strategy {
        Strategy::Passthrough => text.to_string(),
        Strategy::DirectMap(table) => direct_map(table.table(), text),
        Strategy::CombiningMark { base, marks } => decorate(text, "", base, marks, ""),
        Strategy::Wrap {
            prefix,
            base,
            marks,
            suffix,
        } => decorate(text, prefix, base, marks, suffix),
        Strategy::Reversal(table) => reverse(text, table),
    }
}

fn direct_map(table: &GlyphTable, text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 4);
    for c in text.chars() {
        table.push_mapped(c, &mut out);
    }
    out
}

/// Emits `prefix + base(c) + marks + suffix` for each character.
///
/// Only U+0020 is exempt; it is copied as-is so that words stay separated
/// and no mark dangles over a gap.
fn decorate(text: &str, prefix: &str, base: BaseGlyph, marks: &str, suffix: &str) -> String {
    let per_char = prefix.len() + 4 + marks.len() + suffix.len();
    let mut out = String::with_capacity(text.len() * per_char);
    for c in text.chars() {
        if c == ' ' {
            out.push(c);
            continue;
        }
        out.push_str(prefix);
        base.push(c, &mut out);
        out.push_str(marks);
        out.push_str(suffix);
    }
    out
}

fn reverse(text: &str, table: Option<TableId>) -> String {
    match table {
        None => text.chars().rev().collect(),
        Some(table) => {
            let table = table.table();
            let mut out = String::with_capacity(text.len() * 3);
            for c in text.chars().rev() {
                table.push_mapped(c, &mut out);
            }
            out
        }
    }
}
