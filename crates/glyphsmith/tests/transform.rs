//! End-to-end transforms through the built-in catalog.

use glyphsmith::{
    builtin, display_name, list_style_ids, transform, transform_all, StyleGroup, StyleKind,
};

#[test]
fn test_bold_uppercase() {
    assert_eq!(transform("ABC", "bold"), "𝐀𝐁𝐂");
}

#[test]
fn test_small_caps_shares_glyphs_across_cases() {
    assert_eq!(transform("Hello World", "smallCaps"), "ʜᴇʟʟᴏ ᴡᴏʀʟᴅ");
}

#[test]
fn test_reverse_text() {
    assert_eq!(transform("abc", "reverseText"), "cba");
}

#[test]
fn test_connected_wraps_each_character() {
    assert_eq!(transform("Hi", "connected"), "⊰H⊱⊰i⊱");
    assert_eq!(transform("A B", "connected"), "⊰A⊱ ⊰B⊱");
}

#[test]
fn test_bold_digits() {
    assert_eq!(transform("5", "bold"), "𝟓");
}

#[test]
fn test_unknown_style_returns_input() {
    assert_eq!(transform("keep me", "doesNotExist"), "keep me");
    assert_eq!(transform("keep me", ""), "keep me");
}

#[test]
fn test_empty_text() {
    for id in list_style_ids() {
        assert_eq!(transform("", id), "", "style {}", id);
    }
}

#[test]
fn test_italic_leaves_digits_and_punctuation() {
    assert_eq!(transform("a1!", "italic"), "𝑎1!");
}

#[test]
fn test_fullwidth_space_and_punctuation() {
    assert_eq!(transform("A b!", "fullwidth"), "Ａ\u{3000}ｂ！");
}

#[test]
fn test_underline_uses_bold_base() {
    assert_eq!(transform("ab", "underline"), "𝐚\u{0332}𝐛\u{0332}");
}

#[test]
fn test_boxed() {
    assert_eq!(transform("a", "boxed"), "[𝐚\u{0332}\u{0305}]");
}

#[test]
fn test_straight_waves_suffix() {
    assert_eq!(transform("a", "straightWaves"), "𝐚\u{033E}\u{10571}");
}

#[test]
fn test_numerical_burst() {
    assert_eq!(transform("1 2", "numericalBurst"), "҈1҈҈ ҈2҈҈");
}

#[test]
fn test_double_slash_uses_fullwidth_base() {
    assert_eq!(transform("ab", "doubleSlash"), "ａｯｂｯ");
}

#[test]
fn test_flip_family_differences() {
    assert_eq!(transform("A", "backwardFlip"), "∀");
    assert_eq!(transform("A", "mirrorText"), "A");
    assert_eq!(transform("R", "mirrorText"), "ɿ");
    assert_eq!(transform("F", "backwardFlip"), "Ⅎ");
    assert_eq!(transform("F", "upsideDown"), "ᖴ");
    assert_eq!(transform("Flip", "backwardFlip"), "dᴉlℲ");
}

#[test]
fn test_advanced_variants_are_separate_ids() {
    assert_eq!(
        transform("ab", "intersected"),
        transform("ab", "intersectedAdvanced")
    );
    assert_eq!(display_name("waveUnder"), display_name("waveUnderAdvanced"));
    assert!(list_style_ids().contains(&"waveUnderAdvanced"));
}

#[test]
fn test_catalog_order_and_size() {
    let ids = list_style_ids();
    assert_eq!(ids.len(), 100);
    assert_eq!(&ids[..4], &["normal", "bold", "italic", "boldItalic"]);
    assert_eq!(ids.last(), Some(&"heavyMark"));
}

#[test]
fn test_display_names() {
    assert_eq!(display_name("bold"), Some("Bold"));
    assert_eq!(display_name("backwardFlip"), Some("Backward Flip Text"));
    assert_eq!(display_name("unknown"), None);
}

#[test]
fn test_transform_all_follows_catalog() {
    let results = transform_all("Ab");
    let ids: Vec<_> = results.iter().map(|(id, _)| *id).collect();
    assert_eq!(ids, list_style_ids());
    assert_eq!(results[0], ("normal", "Ab".to_string()));
}

#[test]
fn test_resolve_and_groups() {
    let registry = builtin();
    let style = registry.resolve("upsideDown").unwrap();
    assert_eq!(style.kind(), StyleKind::Reversal);
    assert_eq!(style.group(), StyleGroup::Reversal);
    assert!(registry.resolve("Bold").is_err());
}

#[test]
fn test_transform_from_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| transform("abc", "bold")))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "𝐚𝐛𝐜");
    }
}
