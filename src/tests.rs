//! Unit tests that check the helpers against each other.

use crate::{is_blank, non_blank, part, repeat, text_or_empty, trim_suffix};

const SAMPLES: &[&str] = &[
    "",
    " ",
    "a",
    "OffsetSub",
    "markdown.md",
    "héllo wörld",
    "日本語テキスト",
    "tab\tand\nnewline",
];

#[test]
fn repeat_non_positive_is_empty() {
    for text in SAMPLES {
        for times in -3..=0 {
            assert_eq!(repeat(text, times), "");
        }
    }
}

#[test]
fn repeat_concatenates() {
    for text in SAMPLES {
        for times in 1..5 {
            let repeated = repeat(text, times);
            assert_eq!(repeated.len(), text.len() * times as usize);
            assert_eq!(repeated, vec![*text; times as usize].concat());
        }
    }
}

#[test]
fn part_from_zero_is_everything() {
    for text in SAMPLES {
        assert_eq!(part(text, 0, None), *text);
    }
}

#[test]
fn part_keeps_the_rest() {
    for text in SAMPLES {
        let len = text.chars().count();
        for start in 0..=len {
            let rest = part(text, start as isize, None);
            assert_eq!(rest.chars().count(), len - start);
            assert!(text.ends_with(rest));
        }
    }
}

#[test]
fn part_past_the_end_is_empty() {
    for text in SAMPLES {
        let len = text.chars().count() as isize;
        for start in len..len + 3 {
            assert_eq!(part(text, start, None), "");
            assert_eq!(part(text, start, Some(1)), "");
            assert_eq!(part(text, start, Some(-1)), "");
        }
    }
}

#[test]
fn trim_suffix_without_suffix_is_unchanged() {
    for text in SAMPLES {
        assert_eq!(trim_suffix(text, "not a suffix"), *text);
    }
}

#[test]
fn trim_suffix_of_appended_suffix() {
    for text in SAMPLES {
        let with_suffix = format!("{}.md", text);
        assert_eq!(trim_suffix(&with_suffix, ".md"), *text);
    }
}

#[test]
fn blank_helpers() {
    assert!(is_blank(None));
    assert!(is_blank(Some("   ")));
    assert!(!is_blank(Some("x")));
    assert_eq!(non_blank(Some("  "), Some("fallback")), Some("fallback"));
    assert_eq!(non_blank(Some("value"), Some("fallback")), Some("value"));
    assert_eq!(text_or_empty(None), "");
    assert_eq!(text_or_empty(Some("x")), "x");
}
