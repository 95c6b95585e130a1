//! Greedy word wrapping for card bodies.
//!
//! Words are separated by spaces only; `/` and `-` never break a line.
//! Lines never exceed the requested width unless a single word is wider
//! than the whole line; such a word sits alone on its line and overflows.

use textwrap::{Options, WordSeparator, WordSplitter, WrapAlgorithm};
use unicode_width::UnicodeWidthStr;

use crate::constants::BADGE_WIDTH;

/// Wrap `text` to `width` columns. Empty text gives one empty line.
#[cfg(test)]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    wrap_card_text(text, width, false)
}

/// Wrap `text` to `width` columns, optionally reserving [`BADGE_WIDTH`]
/// columns at the start of the first line for the severe badge.
///
/// The reserved space is not part of the returned first line: the caller
/// renders the badge there, and badge plus text still fit in `width`.
/// When the first word does not fit beside the badge, line one is left
/// empty and the text starts on line two.
pub fn wrap_card_text(text: &str, width: usize, reserve_badge: bool) -> Vec<String> {
    // Feed text may carry newlines or runs of spaces; cards flow it as one paragraph.
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        return vec![String::new()];
    }
    if !reserve_badge {
        return wrap_lines(&text, width, "");
    }

    let beside_badge = width.saturating_sub(BADGE_WIDTH);
    let first_word = text.split(' ').next().unwrap_or_default();
    if first_word.width() > beside_badge {
        let mut lines = vec![String::new()];
        lines.extend(wrap_lines(&text, width, ""));
        return lines;
    }

    let placeholder = " ".repeat(BADGE_WIDTH);
    let mut lines = wrap_lines(&text, width, &placeholder);
    if let Some(first) = lines.first_mut() {
        if let Some(rest) = first.strip_prefix(placeholder.as_str()) {
            *first = rest.to_string();
        }
    }
    lines
}

fn wrap_lines(text: &str, width: usize, indent: &str) -> Vec<String> {
    let options = Options::new(width.max(1))
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .break_words(false)
        .initial_indent(indent);

    let mut lines: Vec<String> = textwrap::wrap(text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect();
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
        assert_eq!(wrap("   ", 10), vec![String::new()]);
        assert_eq!(wrap_card_text("", 20, true), vec![String::new()]);
    }

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(wrap("Good service", 20), vec!["Good service"]);
    }

    #[test]
    fn greedy_breaks_between_words() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn overlong_word_sits_alone() {
        assert_eq!(
            wrap("a supercalifragilistic b", 8),
            vec!["a", "supercalifragilistic", "b"]
        );
    }

    #[test]
    fn hyphenated_words_are_not_split() {
        assert_eq!(wrap("part-suspended service", 12), vec!["part-suspended", "service"]);
    }

    #[test]
    fn hyphenated_word_that_fits_stays_whole() {
        assert_eq!(
            wrap("Waterloo & City: part-suspended today", 20),
            vec!["Waterloo & City:", "part-suspended today"]
        );
    }

    #[test]
    fn slash_joined_stations_stay_together() {
        assert_eq!(
            wrap("No service Bank/Shadwell today", 20),
            vec!["No service", "Bank/Shadwell today"]
        );
        assert_eq!(
            wrap("Bank/Shadwell and Stratford/Lewisham stations", 13),
            vec!["Bank/Shadwell", "and", "Stratford/Lewisham", "stations"]
        );
    }

    #[test]
    fn newlines_flow_into_one_paragraph() {
        assert_eq!(wrap("Minor\ndelays  today", 40), vec!["Minor delays today"]);
    }

    #[test]
    fn badge_shortens_only_the_first_line() {
        // 26 columns, 11 reserved: line 1 holds at most 15 columns of text.
        let lines = wrap_card_text("Severe delays between Uxbridge and Rayners Lane", 26, true);
        assert_eq!(lines[0], "Severe delays");
        assert_eq!(lines[1], "between Uxbridge and");
        assert_eq!(lines[2], "Rayners Lane");
    }

    #[test]
    fn badge_placeholder_is_stripped() {
        let lines = wrap_card_text("Severe delays", 26, true);
        assert_eq!(lines, vec!["Severe delays"]);
    }

    #[test]
    fn badge_can_push_all_text_to_line_two() {
        // One column beside the badge at width 12: line 1 holds the badge only.
        assert_eq!(wrap_card_text("delays here", 12, true), vec!["", "delays here"]);
        assert_eq!(wrap_card_text("delays here", 8, true), vec!["", "delays", "here"]);
    }

    #[test]
    fn badge_alone_when_text_is_empty() {
        assert_eq!(wrap_card_text("", 8, true), vec![String::new()]);
    }

    proptest! {
        #[test]
        fn lines_fit_unless_single_word(
            words in proptest::collection::vec("[a-zA-Z]{1,14}", 0..30),
            width in 5usize..60,
        ) {
            let text = words.join(" ");
            for line in wrap(&text, width) {
                let fits = line.width() <= width;
                let lone_word = !line.contains(' ');
                prop_assert!(fits || lone_word, "line {:?} exceeds {}", line, width);
            }
        }

        #[test]
        fn badge_and_first_line_fit_together(
            words in proptest::collection::vec("[a-z/-]{1,14}", 1..30),
            width in 12usize..60,
        ) {
            let text = words.join(" ");
            let lines = wrap_card_text(&text, width, true);
            prop_assert!(lines[0].width() + BADGE_WIDTH <= width, "{:?} at {}", lines, width);
        }

        #[test]
        fn wrapping_preserves_words(
            words in proptest::collection::vec("[a-z/-]{1,10}", 0..20),
            width in 5usize..40,
            reserve in any::<bool>(),
        ) {
            let text = words.join(" ");
            let rejoined = wrap_card_text(&text, width, reserve)
                .join(" ")
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>();
            prop_assert_eq!(rejoined, words);
        }
    }
}
