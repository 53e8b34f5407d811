//! Shallow lexical cues that a piece of text is uncertain or conflicted.
//!
//! Every check is a table lookup over normalized text, so new cue families
//! (sarcasm markers, intensifiers) are added by extending a lexicon rather
//! than the matching code.

use serde::Serialize;

/// Lexical markers of speaker uncertainty.
pub const HEDGE_CUES: &[&str] = &[
    "maybe",
    "perhaps",
    "probably",
    "possibly",
    "i think",
    "i guess",
    "i suppose",
    "kind of",
    "sort of",
    "not sure",
    "it seems",
    "seems like",
    "a bit",
    "unclear",
];

/// Connectives that join opposing clauses.
pub const CONTRASTIVE_CUES: &[&str] = &[
    "but",
    "however",
    "although",
    "though",
    "yet",
    "whereas",
    "nevertheless",
    "on the other hand",
];

/// Structural uncertainty cues found in a single text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AmbiguitySignals {
    pub hedging: bool,
    pub question: bool,
    pub contrastive: bool,
}

impl AmbiguitySignals {
    /// Number of independent cue families that fired.
    pub fn fired(&self) -> usize {
        [self.hedging, self.question, self.contrastive]
            .into_iter()
            .filter(|fired| *fired)
            .count()
    }

    /// Any cue at all marks the text as ambiguous.
    pub fn ambiguity(&self) -> bool {
        self.fired() > 0
    }

    /// Explicit contrast, or two or more cue families compounding.
    pub fn mixed_sentiment(&self) -> bool {
        self.contrastive || self.fired() >= 2
    }

    /// Human-readable names of the cues that fired, in a fixed order.
    pub fn cue_labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.hedging {
            labels.push("hedging");
        }
        if self.question {
            labels.push("a question");
        }
        if self.contrastive {
            labels.push("contrastive phrasing");
        }
        labels
    }
}

/// Scan `text` for hedging, questions and contrastive connectives.
pub fn extract(text: &str) -> AmbiguitySignals {
    let normalized = normalize(text);

    AmbiguitySignals {
        hedging: contains_any(&normalized, HEDGE_CUES),
        question: normalized.contains('?'),
        contrastive: contains_any(&normalized, CONTRASTIVE_CUES),
    }
}

fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn contains_any(haystack: &str, cues: &[&str]) -> bool {
    cues.iter().any(|cue| contains_phrase(haystack, cue))
}

/// Phrase match that refuses hits glued to neighbouring word characters.
fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    haystack.match_indices(phrase).any(|(start, matched)| {
        let end = start + matched.len();
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
