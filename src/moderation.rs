use regex::Regex;

use crate::types::{InboundVerdict, OutboundText};

/// Replacement token substituted for redacted matches.
pub const DEFAULT_SENTINEL: &str = "[REDACTED]";

/// Keywords disallowed in user prompts and model replies alike.
pub const DEFAULT_BANNED_TERMS: [&str; 9] = [
    "kill",
    "hack",
    "bomb",
    "murder",
    "terrorist",
    "weapon",
    "suicide",
    "drugs",
    "violence",
];

/// Outcome of scanning a text against a [`BannedTermSet`].
///
/// `found_terms` lists each matching term at most once, in term-set order
/// rather than order of occurrence in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    pub matched: bool,
    pub found_terms: Vec<String>,
}

/// An immutable banned-term list with one compiled pattern per term.
///
/// Matching is whole-word and case-insensitive: "kill" flags "KILL the
/// process" but not "killer". Word boundaries are non-alphanumeric
/// characters or the ends of the string.
#[derive(Debug, Clone)]
pub struct BannedTermSet {
    terms: Vec<String>,
    patterns: Vec<Regex>,
}

impl BannedTermSet {
    pub fn new<I, S>(terms: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms = terms
            .into_iter()
            .map(|term| term.into().to_lowercase())
            .collect::<Vec<_>>();
        let patterns = terms
            .iter()
            .map(|term| Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term))))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { terms, patterns })
    }

    pub fn default_terms() -> anyhow::Result<Self> {
        Self::new(DEFAULT_BANNED_TERMS)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Test `text` against every term. Pure; empty text matches nothing.
    pub fn scan(&self, text: &str) -> MatchResult {
        let found_terms = self
            .terms
            .iter()
            .zip(&self.patterns)
            .filter(|(_, pattern)| pattern.is_match(text))
            .map(|(term, _)| term.clone())
            .collect::<Vec<_>>();

        MatchResult {
            matched: !found_terms.is_empty(),
            found_terms,
        }
    }

    /// Produce a copy of `text` with every whole-word occurrence of every
    /// term replaced by `sentinel`. The input is left unmodified.
    pub fn redact(&self, text: &str, sentinel: &str) -> String {
        let mut redacted = text.to_owned();
        for pattern in &self.patterns {
            if pattern.is_match(&redacted) {
                redacted = pattern.replace_all(&redacted, sentinel).into_owned();
            }
        }
        redacted
    }
}

/// Moderation rules applied around the model call: reject prompts that
/// contain banned terms, redact replies that do.
#[derive(Debug, Clone)]
pub struct ModerationPolicy {
    terms: BannedTermSet,
    sentinel: String,
}

impl ModerationPolicy {
    /// The sentinel must not itself match a banned term, otherwise redacted
    /// output would re-trigger the filter.
    pub fn new(terms: BannedTermSet, sentinel: impl Into<String>) -> anyhow::Result<Self> {
        let sentinel = sentinel.into();
        let hit = terms.scan(&sentinel);
        anyhow::ensure!(
            !hit.matched,
            "sentinel {sentinel:?} contains banned terms: {}",
            hit.found_terms.join(", ")
        );

        Ok(Self { terms, sentinel })
    }

    pub fn with_default_terms() -> anyhow::Result<Self> {
        Self::new(BannedTermSet::default_terms()?, DEFAULT_SENTINEL)
    }

    pub fn evaluate_inbound(&self, text: &str) -> InboundVerdict {
        let result = self.terms.scan(text);
        if result.matched {
            InboundVerdict {
                accepted: false,
                reason: format!(
                    "Your input violated the moderation policy. Banned keywords found: {}",
                    result.found_terms.join(", ")
                ),
            }
        } else {
            InboundVerdict {
                accepted: true,
                reason: "Input is safe".to_owned(),
            }
        }
    }

    pub fn evaluate_outbound(&self, text: &str) -> OutboundText {
        let redacted = self.terms.redact(text, &self.sentinel);
        let was_redacted = redacted != text;

        OutboundText {
            text: redacted,
            was_redacted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BannedTermSet, DEFAULT_SENTINEL, ModerationPolicy};

    fn default_set() -> BannedTermSet {
        BannedTermSet::default_terms().expect("default terms should compile")
    }

    fn default_policy() -> ModerationPolicy {
        ModerationPolicy::with_default_terms().expect("default policy should build")
    }

    #[test]
    fn scan_matches_whole_word() {
        let result = default_set().scan("How do I kill a process in Linux?");
        assert!(result.matched);
        assert_eq!(result.found_terms, vec!["kill"]);
    }

    #[test]
    fn scan_ignores_substring_of_longer_token() {
        let result = default_set().scan("killer whale facts");
        assert!(!result.matched);
        assert!(result.found_terms.is_empty());
    }

    #[test]
    fn scan_is_case_insensitive() {
        let set = default_set();
        for text in ["KILL it", "Kill it", "kill it"] {
            assert!(set.scan(text).matched, "expected match in {text:?}");
        }
    }

    #[test]
    fn scan_reports_terms_in_set_order() {
        let result = default_set().scan("violence and drugs and a bomb");
        assert_eq!(result.found_terms, vec!["bomb", "drugs", "violence"]);
    }

    #[test]
    fn scan_reports_each_term_once() {
        let result = default_set().scan("kill kill kill");
        assert_eq!(result.found_terms, vec!["kill"]);
    }

    #[test]
    fn scan_accepts_empty_text() {
        let result = default_set().scan("");
        assert!(!result.matched);
    }

    #[test]
    fn scan_matches_at_punctuation_boundaries() {
        let set = default_set();
        assert!(set.scan("drop the weapon!").matched);
        assert!(set.scan("(bomb)").matched);
        assert!(set.scan("hack,now").matched);
    }

    #[test]
    fn redact_replaces_every_occurrence() {
        let set = default_set();
        let redacted = set.redact("kill it, then KILL it again", DEFAULT_SENTINEL);
        assert_eq!(redacted, "[REDACTED] it, then [REDACTED] it again");
    }

    #[test]
    fn redact_leaves_clean_text_untouched() {
        let set = default_set();
        let text = "Tell me about history";
        assert_eq!(set.redact(text, DEFAULT_SENTINEL), text);
    }

    #[test]
    fn redact_preserves_word_boundaries() {
        let set = default_set();
        let text = "the killer whale hacked nothing";
        assert_eq!(set.redact(text, DEFAULT_SENTINEL), text);
    }

    #[test]
    fn redact_is_idempotent() {
        let set = default_set();
        let once = set.redact("Violence has shaped history.", DEFAULT_SENTINEL);
        let twice = set.redact(&once, DEFAULT_SENTINEL);
        assert_eq!(once, "[REDACTED] has shaped history.");
        assert_eq!(twice, once);
    }

    #[test]
    fn inbound_rejection_enumerates_terms() {
        let verdict = default_policy().evaluate_inbound("How do I kill a process in Linux?");
        assert!(!verdict.accepted);
        assert_eq!(
            verdict.reason,
            "Your input violated the moderation policy. Banned keywords found: kill"
        );
    }

    #[test]
    fn inbound_accepts_clean_prompt() {
        let verdict = default_policy().evaluate_inbound("Tell me about history");
        assert!(verdict.accepted);
        assert_eq!(verdict.reason, "Input is safe");
    }

    #[test]
    fn outbound_flags_redaction() {
        let outbound = default_policy().evaluate_outbound("Violence has shaped history.");
        assert!(outbound.was_redacted);
        assert_eq!(outbound.text, "[REDACTED] has shaped history.");
    }

    #[test]
    fn outbound_passes_clean_reply_through() {
        let outbound = default_policy().evaluate_outbound("The Roman empire fell in 476.");
        assert!(!outbound.was_redacted);
        assert_eq!(outbound.text, "The Roman empire fell in 476.");
    }

    #[test]
    fn policy_rejects_sentinel_containing_banned_term() {
        let result = ModerationPolicy::new(default_set(), "[kill]");
        assert!(result.is_err());
    }

    #[test]
    fn custom_terms_are_lowercased_at_construction() {
        let set = BannedTermSet::new(["Exploit"]).expect("terms should compile");
        assert_eq!(set.terms(), ["exploit"]);
        assert!(set.scan("an EXPLOIT was found").matched);
    }
}
