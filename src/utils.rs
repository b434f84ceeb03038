//! Text normalization helpers used by the ingredient pipeline.
//!
//! Each helper is one stage of the pipeline and is pure, so stages can be
//! tested and composed independently.

use crate::constants::singularize::{
    ES_MIN_EXCLUSIVE_LEN, IES_MIN_EXCLUSIVE_LEN, S_MIN_EXCLUSIVE_LEN,
};
use crate::stopwords::StopWordSet;

/// Lowercase the full string.
pub fn fold_case<T: AsRef<str>>(text: T) -> String {
    text.as_ref().to_lowercase()
}

/// Replace every character that is not `a-z`, `0-9`, whitespace, or `-` with a space.
///
/// Non-ASCII letters are treated as separators, so `"jalapeño"` becomes `"jalape o"`.
/// Expects already case-folded input; uppercase ASCII is stripped too.
pub fn strip_punctuation<T: AsRef<str>>(text: T) -> String {
    text.as_ref()
        .chars()
        .map(|ch| {
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch.is_whitespace() || ch == '-' {
                ch
            } else {
                ' '
            }
        })
        .collect()
}

/// Collapse runs of whitespace into single spaces and trim.
pub fn normalize_inline_whitespace<T: AsRef<str>>(text: T) -> String {
    text.as_ref().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop tokens found in `stop_words` and rejoin the rest with single spaces.
pub fn remove_stop_words(text: &str, stop_words: &StopWordSet) -> String {
    text.split_whitespace()
        .filter(|token| !stop_words.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Best-effort English singularization of the whole term.
///
/// Rules are checked in order and only the first match applies:
/// `...ies` (len > 4) becomes `...y`, `...es` (len > 3) loses `es`,
/// `...s` (len > 3) loses `s`. Naturally singular words ending in `s`
/// are not protected, so `"hummus"` becomes `"hummu"`.
pub fn singularize(term: &str) -> String {
    let len = term.chars().count();
    if len > IES_MIN_EXCLUSIVE_LEN && term.ends_with("ies") {
        return format!("{}y", &term[..term.len() - 3]);
    }
    if len > ES_MIN_EXCLUSIVE_LEN && term.ends_with("es") {
        return term[..term.len() - 2].to_string();
    }
    if len > S_MIN_EXCLUSIVE_LEN && term.ends_with('s') {
        return term[..term.len() - 1].to_string();
    }
    term.to_string()
}

/// Run the cleanup stages (case-fold, punctuation, whitespace, stopwords).
///
/// Returns an empty string when nothing identifying survives.
pub fn clean_term(raw: &str, stop_words: &StopWordSet) -> String {
    let folded = fold_case(raw);
    let stripped = strip_punctuation(folded);
    let collapsed = normalize_inline_whitespace(stripped);
    remove_stop_words(&collapsed, stop_words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_inline_whitespace_collapses_runs() {
        let input = "  green\n\n  onion\t tops ";
        assert_eq!(normalize_inline_whitespace(input), "green onion tops");
        assert_eq!(normalize_inline_whitespace("\u{00a0}kale\u{2003}"), "kale");
        assert_eq!(normalize_inline_whitespace(" \t\n"), "");
    }

    #[test]
    fn strip_punctuation_keeps_hyphens_and_digits() {
        assert_eq!(strip_punctuation("half-and-half (2%)"), "half-and-half  2  ");
        assert_eq!(strip_punctuation("7up"), "7up");
    }

    #[test]
    fn strip_punctuation_treats_non_ascii_as_separator() {
        assert_eq!(strip_punctuation("jalapeño"), "jalape o");
        assert_eq!(strip_punctuation("crème"), "cr me");
    }

    #[test]
    fn fold_case_lowercases_everything() {
        assert_eq!(fold_case("Freshly CHOPPED Basil"), "freshly chopped basil");
    }

    #[test]
    fn remove_stop_words_drops_modifiers_only() {
        let stop_words = StopWordSet::default();
        assert_eq!(
            remove_stop_words("large fresh brown eggs", &stop_words),
            "brown eggs"
        );
        assert_eq!(remove_stop_words("fresh chopped", &stop_words), "");
    }

    #[test]
    fn singularize_ies_becomes_y() {
        assert_eq!(singularize("berries"), "berry");
        assert_eq!(singularize("strawberries"), "strawberry");
    }

    #[test]
    fn singularize_ies_respects_length_guard() {
        // "pies" is only 4 chars, so the `es` rule wins and drops two characters.
        assert_eq!(singularize("pies"), "pi");
        assert_eq!(singularize("ties"), "ti");
    }

    #[test]
    fn singularize_es_drops_two_characters() {
        assert_eq!(singularize("tomatoes"), "tomato");
        assert_eq!(singularize("potatoes"), "potato");
        // Known approximation: words whose plural only adds `s` lose the `e` too.
        assert_eq!(singularize("grapes"), "grap");
    }

    #[test]
    fn singularize_s_drops_one_character() {
        assert_eq!(singularize("eggs"), "egg");
        assert_eq!(singularize("scallions"), "scallion");
    }

    #[test]
    fn singularize_leaves_short_terms_alone() {
        assert_eq!(singularize("gas"), "gas");
        assert_eq!(singularize("yes"), "yes");
        assert_eq!(singularize("egg"), "egg");
        assert_eq!(singularize(""), "");
    }

    #[test]
    fn singularize_applies_to_the_whole_phrase() {
        assert_eq!(singularize("green onions"), "green onion");
        assert_eq!(singularize("eggs benedict"), "eggs benedict");
    }

    #[test]
    fn singularize_mangles_naturally_singular_s_words() {
        assert_eq!(singularize("hummus"), "hummu");
        assert_eq!(singularize("asparagus"), "asparagu");
        assert_eq!(singularize("molasses"), "molass");
    }

    #[test]
    fn clean_term_runs_all_cleanup_stages() {
        let stop_words = StopWordSet::default();
        assert_eq!(clean_term("  Fresh, ORGANIC   Kale!! ", &stop_words), "kale");
        assert_eq!(clean_term("!!!", &stop_words), "");
        assert_eq!(clean_term("Sliced & Diced", &stop_words), "");
    }
}
