//! Keyword matching for job titles.
//!
//! A keyword matches when it appears in the text as a whole word or phrase:
//! the characters directly before and after it must not be word characters
//! (letters, digits, underscore). Matching ignores case. This keeps `AWS` from
//! matching inside `Paws` while still letting `Cloud Security` match inside
//! `Senior Cloud Security Analyst`.

use regex::{Regex, RegexBuilder};

/// A compiled set of keywords.
///
/// Each keyword becomes one case-insensitive pattern anchored on non-word
/// characters or the ends of the text. Blank keywords are skipped.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    patterns: Vec<Regex>,
}

impl KeywordMatcher {
    /// Compile `keywords` into a matcher.
    ///
    /// # Arguments
    ///
    /// * `keywords` - Words or phrases; surrounding whitespace is trimmed and
    ///   blank entries are dropped
    ///
    /// # Errors
    ///
    /// Returns the underlying [`regex::Error`] if a pattern fails to compile
    /// (for example when a keyword is large enough to exceed the size limit).
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self, regex::Error> {
        let patterns = keywords
            .iter()
            .map(|k| k.as_ref().trim())
            .filter(|k| !k.is_empty())
            .map(|k| {
                RegexBuilder::new(&format!(r"(?:^|\W){}(?:\W|$)", regex::escape(k)))
                    .case_insensitive(true)
                    .build()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Whether any keyword occurs in `text` as a whole word.
    ///
    /// Absent or empty text never matches.
    pub fn is_match(&self, text: Option<&str>) -> bool {
        match text {
            Some(t) if !t.is_empty() => self.patterns.iter().any(|p| p.is_match(t)),
            _ => false,
        }
    }
}

/// One-shot form of [`KeywordMatcher::is_match`].
///
/// Compiles the keywords on every call; build a [`KeywordMatcher`] when the
/// same set is checked against many titles. Returns `true` on the first
/// keyword that matches. A keyword whose pattern fails to compile (only
/// possible past the regex size limit) is treated as not matching.
///
/// # Arguments
///
/// * `text` - The title to check; `None` or empty never matches
/// * `keywords` - Words or phrases to look for
pub fn matches<S: AsRef<str>>(text: Option<&str>, keywords: &[S]) -> bool {
    if text.is_none_or(str::is_empty) {
        return false;
    }
    keywords.iter().any(|k| {
        KeywordMatcher::new(std::slice::from_ref(k)).is_ok_and(|m| m.is_match(text))
    })
}

/// Case-insensitive plain substring check, used for the negative list.
///
/// Unlike [`KeywordMatcher`] this ignores word boundaries, so `Lead` also
/// rejects `Leadership`.
pub fn contains_any<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    let lower = text.to_lowercase();
    keywords
        .iter()
        .map(|k| k.as_ref().trim().to_lowercase())
        .any(|k| !k.is_empty() && lower.contains(&k))
}
