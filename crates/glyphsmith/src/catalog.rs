//! The built-in style catalog.
//!
//! Styles are listed section by section in the order the font generator
//! presents them. Ids are a published contract: never rename or reuse one.
//! Several ids (`intersected` and `intersectedAdvanced`, for instance) share
//! a display name and are kept apart on purpose.

use crate::glyphs::TableId;
use crate::style::{BaseGlyph, FontFallback, StyleDescriptor, StyleGroup, StyleRegistry, Strategy};

const fn style(
    id: &'static str,
    name: &'static str,
    display_name: &'static str,
    strategy: Strategy,
) -> StyleDescriptor {
    StyleDescriptor::new(id, display_name, strategy).named(name)
}

const fn table(id: TableId) -> Strategy {
    Strategy::DirectMap(id)
}

/// Bold base glyph followed by combining marks.
const fn marks(marks: &'static str) -> Strategy {
    Strategy::CombiningMark {
        base: BaseGlyph::Bold,
        marks,
    }
}

/// Raw character between two symbols.
const fn brackets(prefix: &'static str, suffix: &'static str) -> Strategy {
    wrap(prefix, BaseGlyph::Raw, "", suffix)
}

/// Raw character followed by a symbol.
const fn trailing(suffix: &'static str) -> Strategy {
    wrap("", BaseGlyph::Raw, "", suffix)
}

const fn wrap(
    prefix: &'static str,
    base: BaseGlyph,
    marks: &'static str,
    suffix: &'static str,
) -> Strategy {
    Strategy::Wrap {
        prefix,
        base,
        marks,
        suffix,
    }
}

const NORMAL: StyleDescriptor = style("normal", "Normal", "Normal", Strategy::Passthrough);

const BASIC: &[StyleDescriptor] = &[
    style("bold", "Bold", "Bold", table(TableId::Bold)),
    style("italic", "Italic", "Italic", table(TableId::Italic)),
    style("boldItalic", "BoldItalic", "Bold Italic", table(TableId::BoldItalic)),
    style("gothic", "Gothic", "Gothic", table(TableId::Gothic)).with_fallback(FontFallback::Serif),
    style("boldGothic", "BoldGothic", "Bold Gothic", table(TableId::BoldGothic))
        .with_fallback(FontFallback::Serif),
    style("script", "Script", "Script", table(TableId::Script))
        .with_fallback(FontFallback::Cursive),
    style("boldScript", "BoldScript", "Bold Script", table(TableId::BoldScript))
        .with_fallback(FontFallback::Cursive),
    style("sansSerifBold", "SansSerifBold", "Sans Serif Bold", table(TableId::SansSerifBold)),
    style(
        "sansSerifItalic",
        "SansSerifItalic",
        "Sans Serif Italic",
        table(TableId::SansSerifItalic),
    ),
    style(
        "sansSerifBoldItalic",
        "SansSerifBoldItalic",
        "Sans Serif Bold Italic",
        table(TableId::SansSerifBoldItalic),
    ),
    style(
        "sansSerifBoldItalic2",
        "SansSerifBoldItalic2",
        "Sans Serif Bold Italic 2",
        table(TableId::SansSerifBoldItalic2),
    ),
    style("monospace", "Monospace", "Monospace", table(TableId::Monospace))
        .with_fallback(FontFallback::Monospace),
    style("doubleStruck", "DoubleStruck", "Double Struck", table(TableId::DoubleStruck))
        .with_fallback(FontFallback::Serif),
    style("bubble", "Bubble", "Bubble", table(TableId::Bubble)),
    style("darkBubble", "DarkBubble", "Dark Bubble", table(TableId::DarkBubble)),
    style("square", "Square", "Square", table(TableId::Square)),
    style("parenthesized", "Parenthesized", "Parenthesized", table(TableId::Parenthesized)),
    style("smallCaps", "SmallCaps", "Small Caps", table(TableId::SmallCaps)),
    style("fullwidth", "Fullwidth", "Fullwidth", table(TableId::Fullwidth))
        .with_fallback(FontFallback::Monospace),
    style("reversed", "Reversed", "Reversed", table(TableId::Reversed)),
    style("strikethrough", "Strikethrough", "Strikethrough", marks("\u{0336}")),
    style("superscript", "Superscript", "Superscript", table(TableId::Superscript)),
    style("subscript", "Subscript", "Subscript", table(TableId::Subscript)),
    style("greek", "Greek", "Greek", table(TableId::Greek)),
];

const LINEAR: &[StyleDescriptor] = &[
    style("underline", "Underline", "Underline", marks("\u{0332}")),
    style("doubleUnderline", "DoubleUnderline", "Double Underline", marks("\u{0333}")),
    style("slashOverlay", "SlashOverlay", "Slash Overlay", marks("\u{0337}")),
    style("waveOverlay", "WaveOverlay", "Wave Overlay", marks("\u{0303}")),
    style("framed", "Framed", "Framed", marks("\u{0332}\u{0331}")),
    style("doubleOverline", "DoubleOverline", "Double Overline", marks("\u{033F}")),
];

const CROWNED: &[StyleDescriptor] = &[
    style("crowned", "Crowned", "Crowned", marks("\u{030A}")),
    style("zLines", "ZLines", "Z Lines", marks("\u{035C}")),
    style("curvedAccent", "CurvedAccent", "Curved Accent", marks("\u{0309}")),
    style("pointedAccent", "PointedAccent", "Pointed Accent", marks("\u{0302}")),
    style("wavyAccent", "WavyAccent", "Wavy Accent", marks("\u{0303}")),
    style("glyphCap", "GlyphCap", "Glyph Cap", marks("\u{0306}")),
    style("shortMark", "ShortMark", "Short Mark", marks("\u{030B}")),
    style("balancedLine", "BalancedLine", "Balanced Line", marks("\u{034C}")),
    style("spotted", "Spotted", "Spotted", marks("\u{0307}")),
];

const CROSSED: &[StyleDescriptor] = &[
    style("underCurve", "UnderCurve", "Under Curve", marks("\u{032E}")),
    style("waveTop", "WaveTop", "Wave Top", marks("\u{033E}")),
    style("bottomArrow", "BottomArrow", "Bottom Arrow", marks("\u{034E}")),
    style("waveUnder", "WaveUnder", "Wave Under", marks("\u{0330}")),
    style("intersected", "Intersected", "Intersected", marks("\u{033D}\u{034D}")),
    style("dualCurve", "DualCurve", "Dual Curve", marks("\u{032E}\u{0306}")),
];

const SPECIAL: &[StyleDescriptor] = &[
    style("rounded", "Rounded", "Rounded Font", table(TableId::Rounded)),
    style("vintage", "Vintage", "Vintage Font", table(TableId::Vintage))
        .with_fallback(FontFallback::Serif),
    style("small", "Small", "Small Font", table(TableId::Small)),
];

const BRACKET: &[StyleDescriptor] = &[
    style("connected", "Connected", "Connected Text", brackets("⊰", "⊱")),
    style("sharp", "Sharp", "Sharp", brackets("⧼", "⧽")),
    style("enclosed", "Enclosed", "Enclosed", brackets("⌠", "⌡")),
    style("pointed", "Pointed", "Pointed", brackets("➹", "➷")),
    style("lunar", "Lunar", "Lunar", brackets("☾", "☽")),
    style("pointedDots", "PointedDots", "Pointed Dots", brackets("⦑", "⦒")),
    style("curvedLight", "CurvedLight", "Curved Light", brackets("╰", "╯")),
    style("curvyLink", "CurvyLink", "Curvy Link", trailing("⌇")),
    style("subflow", "Subflow", "Subflow", trailing("‿")),
    style("doubleSlash", "DoubleSlash", "Double Slash", wrap("", BaseGlyph::Fullwidth, "", "ｯ")),
    style("arrowSpark", "ArrowSpark", "Arrow Spark", trailing("↯")),
    style("starryMark", "StarryMark", "Starry Mark", trailing("※")),
    style("looped", "Looped", "Looped", trailing("෴")),
    style("boxed", "Boxed", "Boxed", wrap("[", BaseGlyph::Bold, "\u{0332}\u{0305}", "]")),
    style(
        "arrowedBound",
        "ArrowedBound",
        "Arrowed Bound",
        wrap("⧼", BaseGlyph::Bold, "\u{02EB}", "⧽"),
    ),
    style("accented", "Accented", "Accented", wrap("⦏", BaseGlyph::Bold, "\u{0302}", "⦎")),
    style("cloudCurve", "CloudCurve", "Cloud Curve", marks("\u{0311}\u{032E}")),
    style("softCurves", "SoftCurves", "Soft Curves", brackets("⸦", "⸧")),
    style("tripleBeam", "TripleBeam", "Triple Beam", brackets("⚞", "⚟")),
    style("triFramed", "TriFramed", "Tri-Framed", brackets("⫷", "⫸")),
    style("swirled", "Swirled", "Swirled", brackets("⎰", "⎱")),
    style("frame", "Frame", "Frame", brackets("⦓", "⦔")),
    style("boldEdge", "BoldEdge", "Bold Edge", brackets("【", "】")),
    style("cornerGlow", "CornerGlow", "Corner Glow", brackets("『", "』")),
    style("tickFrame", "TickFrame", "Tick Frame", brackets("⦍", "⦎")),
    style("softAngles", "SoftAngles", "Soft Angles", brackets("〖", "〗")),
];

const COMBINED: &[StyleDescriptor] = &[
    style("doubleMacron", "DoubleMacron", "Underline Text (Double Macron)", marks("\u{035F}")),
    style(
        "circularStyle",
        "CircularStyle",
        "Circular Style",
        wrap("", BaseGlyph::Bold, "\u{030A}", "⫶"),
    ),
    style("intersectedAdvanced", "IntersectedAdvanced", "Intersected", marks("\u{033D}\u{034D}")),
    style("bottomArrowAdvanced", "BottomArrowAdvanced", "Bottom Arrow", marks("\u{034E}")),
    style("waveUnderAdvanced", "WaveUnderAdvanced", "Wave Under", marks("\u{0330}")),
];

const REVERSAL: &[StyleDescriptor] = &[
    style("reverseText", "ReverseText", "Reverse Text", Strategy::Reversal(None)),
    style(
        "backwardFlip",
        "BackwardFlip",
        "Backward Flip Text",
        Strategy::Reversal(Some(TableId::Flip)),
    ),
    style("mirrorText", "MirrorText", "Mirror Text", Strategy::Reversal(Some(TableId::Mirror))),
    style(
        "upsideDown",
        "UpsideDown",
        "Upside Down Text",
        Strategy::Reversal(Some(TableId::UpsideDown)),
    ),
];

const SYMBOL_FUSION: &[StyleDescriptor] = &[
    style(
        "straightWaves",
        "StraightWaves",
        "Straight Waves",
        wrap("", BaseGlyph::Bold, "\u{033E}", "\u{10571}"),
    ),
    style("burstConnect", "BurstConnect", "Burst Connect", trailing("⨳")),
    style("dualShift", "DualShift", "Dual Shift", trailing("⊶")),
    style("twistStrike", "TwistStrike", "Twist Strike", wrap("", BaseGlyph::Bold, "\u{0354}", "↯")),
    style("starCluster", "StarCluster", "Star Cluster", trailing("⁂")),
    style("zigGlitch", "ZigGlitch", "ZigGlitch", wrap("", BaseGlyph::Bold, "\u{035C}", "⦚")),
    style("focused", "Focused", "Focused", marks("\u{0356}\u{0350}")),
];

const FLOW: &[StyleDescriptor] = &[
    style(
        "numericalBurst",
        "NumericalBurst",
        "Numerical Burst",
        brackets("\u{0488}", "\u{0488}\u{0488}"),
    ),
    style("cornerGlide", "CornerGlide", "Corner Glide", brackets("┌", "┐")),
    style("upwardForce", "UpwardForce", "Upward Force", brackets("┞", "┦")),
    style("balancedGlow", "BalancedGlow", "Balanced Glow", brackets("╽", "╿")),
    style(
        "digitalDisrupt",
        "DigitalDisrupt",
        "Digital Disrupt",
        brackets("\u{0489}", "\u{0489}\u{0489}"),
    ),
    style("dimmed", "Dimmed", "Dimmed", brackets("░", "░░")),
    style("cornered", "Cornered", "Cornered", brackets("⌜", "⌝")),
    style("zigZagFlow", "ZigZagFlow", "ZigZag Flow", brackets("⇜", "⇝")),
    style("heavyMark", "HeavyMark", "Heavy Mark", brackets("❰", "❱")),
];

const SECTIONS: [(StyleGroup, &[StyleDescriptor]); 10] = [
    (StyleGroup::Basic, BASIC),
    (StyleGroup::Linear, LINEAR),
    (StyleGroup::Crowned, CROWNED),
    (StyleGroup::Crossed, CROSSED),
    (StyleGroup::Special, SPECIAL),
    (StyleGroup::Bracket, BRACKET),
    (StyleGroup::Combined, COMBINED),
    (StyleGroup::Reversal, REVERSAL),
    (StyleGroup::SymbolFusion, SYMBOL_FUSION),
    (StyleGroup::Flow, FLOW),
];

/// Builds a fresh registry holding every built-in style.
///
/// Most callers want the shared instance from [`builtin`](crate::builtin).
pub fn builtin_registry() -> StyleRegistry {
    let mut registry = StyleRegistry::new().add(NORMAL);
    for (group, styles) in SECTIONS {
        for style in styles {
            registry = registry.add(style.in_group(group));
        }
    }
    registry
}
