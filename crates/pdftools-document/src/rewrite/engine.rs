// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Simulated text rewriting. This is a local placeholder: no model is
// involved and no network call is made. Each mode applies a fixed set of
// substitutions; the UI adds a configurable delay so the interaction reads
// as processing.

use std::sync::LazyLock;

use pdftools_core::RewriteMode;
use regex::Regex;
use tracing::debug;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));
static DOT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.+").expect("static regex"));
static LONE_I: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bi\b").expect("static regex"));

/// Colloquialism expansions for the formal mode. Replacements are
/// lower-case regardless of the matched casing.
static FORMAL_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)\bwanna\b", "want to"),
        (r"(?i)\bgonna\b", "going to"),
        (r"(?i)\bkinda\b", "kind of"),
        (r"(?i)\bgotta\b", "got to"),
        (r"(?i)\bdunno\b", "do not know"),
        (r"(?i)\byeah\b", "yes"),
        (r"(?i)\bnope\b", "no"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).expect("static regex"), replacement))
    .collect()
});

/// Plain-word substitutions for the simplify mode. Matches anywhere in a
/// word, so inflected forms ("utilized") keep their suffix.
static SIMPLIFY_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)utilize", "use"),
        (r"(?i)approximately", "about"),
        (r"(?i)subsequently", "then"),
        (r"(?i)demonstrate", "show"),
        (r"(?i)facilitate", "help"),
        (r"(?i)implement", "do"),
        (r"(?i)commence", "start"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).expect("static regex"), replacement))
    .collect()
});

/// Apply the given rewrite mode to the text.
pub fn rewrite(mode: RewriteMode, text: &str) -> String {
    debug!(?mode, chars = text.len(), "rewriting text");
    match mode {
        RewriteMode::Improve => improve(text),
        RewriteMode::Grammar => grammar(text),
        RewriteMode::Formal => formal(text),
        RewriteMode::Simplify => simplify(text),
    }
}

fn grammar(text: &str) -> String {
    let out = LONE_I.replace_all(text, "I");
    let out = WHITESPACE_RUN.replace_all(&out, " ");
    let out = DOT_RUN.replace_all(&out, ".");
    capitalize_first(out.trim())
}

fn formal(text: &str) -> String {
    let mut out = text.to_string();
    for (pattern, replacement) in FORMAL_RULES.iter() {
        out = pattern.replace_all(&out, *replacement).into_owned();
    }
    out.replace('!', ".").trim().to_string()
}

fn simplify(text: &str) -> String {
    let mut out = text.to_string();
    for (pattern, replacement) in SIMPLIFY_RULES.iter() {
        out = pattern.replace_all(&out, *replacement).into_owned();
    }
    out.trim().to_string()
}

fn improve(text: &str) -> String {
    let out = WHITESPACE_RUN.replace_all(text, " ");
    let out = LONE_I.replace_all(&out, "I");
    let mut out = capitalize_first(out.trim());
    if !out.is_empty() && !out.ends_with(['.', '!', '?']) {
        out.push('.');
    }
    out
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_fixes_pronoun_whitespace_and_dots() {
        let out = rewrite(RewriteMode::Grammar, "well..  i  think   so...");
        assert_eq!(out, "Well. I think so.");
    }

    #[test]
    fn grammar_capitalizes_first_letter() {
        assert_eq!(rewrite(RewriteMode::Grammar, "hello there"), "Hello there");
    }

    #[test]
    fn formal_expands_colloquialisms() {
        let out = rewrite(RewriteMode::Formal, "I wanna go! Gonna be great!");
        assert_eq!(out, "I want to go. going to be great.");
    }

    #[test]
    fn formal_keeps_word_boundaries() {
        // "wannabe" must not be rewritten.
        let out = rewrite(RewriteMode::Formal, "a wannabe star");
        assert_eq!(out, "a wannabe star");
    }

    #[test]
    fn simplify_replaces_jargon_including_inflections() {
        let out = rewrite(
            RewriteMode::Simplify,
            "They utilized tools to facilitate work, approximately daily",
        );
        assert_eq!(out, "They used tools to help work, about daily");
    }

    #[test]
    fn improve_tidies_and_terminates() {
        let out = rewrite(RewriteMode::Improve, "  i   like   this ");
        assert_eq!(out, "I like this.");
    }

    #[test]
    fn improve_keeps_existing_terminal_punctuation() {
        assert_eq!(rewrite(RewriteMode::Improve, "i think so!"), "I think so!");
        assert_eq!(rewrite(RewriteMode::Improve, "really?"), "Really?");
    }

    #[test]
    fn improve_does_not_touch_mid_word_i() {
        let out = rewrite(RewriteMode::Improve, "this is it");
        assert_eq!(out, "This is it.");
    }

    #[test]
    fn empty_input_stays_empty() {
        for mode in RewriteMode::ALL {
            assert_eq!(rewrite(mode, ""), "");
        }
    }
}
