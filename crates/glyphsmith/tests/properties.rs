//! Property tests over the built-in catalog.

use glyphsmith::{builtin, list_style_ids, transform, StyleKind};
use proptest::prelude::*;

fn decorating_ids() -> Vec<&'static str> {
    builtin()
        .iter()
        .filter(|style| matches!(style.kind(), StyleKind::CombiningMark | StyleKind::Wrap))
        .map(|style| style.id())
        .collect()
}

proptest! {
    #[test]
    fn every_style_is_total(text in "\\PC{0,40}") {
        for id in list_style_ids() {
            let _ = transform(&text, id);
        }
    }

    #[test]
    fn unknown_ids_pass_text_through(text in "\\PC{0,40}", id in "[a-z]{1,8}_unknown") {
        prop_assert_eq!(transform(&text, &id), text);
    }

    #[test]
    fn normal_is_identity(text in "\\PC{0,40}") {
        prop_assert_eq!(transform(&text, "normal"), text);
    }

    #[test]
    fn decorations_keep_words_apart(words in prop::collection::vec("[A-Za-z0-9]{1,6}", 1..5)) {
        let text = words.join(" ");
        for id in decorating_ids() {
            let whole = transform(&text, id);
            let by_word: Vec<String> = words.iter().map(|word| transform(word, id)).collect();
            prop_assert_eq!(whole, by_word.join(" "), "style {}", id);
        }
    }

    #[test]
    fn reverse_text_is_an_involution(text in "\\PC{0,40}") {
        let once = transform(&text, "reverseText");
        prop_assert_eq!(once.chars().count(), text.chars().count());
        prop_assert_eq!(transform(&once, "reverseText"), text);
    }

    #[test]
    fn underline_adds_one_mark_per_character(text in "[A-Za-z0-9]{0,30}") {
        let out = transform(&text, "underline");
        prop_assert_eq!(out.chars().count(), text.chars().count() * 2);
        prop_assert_eq!(out.matches('\u{0332}').count(), text.chars().count());
    }

    #[test]
    fn italic_leaves_digits_alone(digits in "[0-9 ]{0,20}") {
        prop_assert_eq!(transform(&digits, "italic"), digits);
    }

    #[test]
    fn spaces_alone_survive_decoration(count in 0usize..10) {
        let spaces = " ".repeat(count);
        for id in decorating_ids() {
            prop_assert_eq!(transform(&spaces, id), spaces.clone());
        }
    }
}
