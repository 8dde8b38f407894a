//! Interrogative-form filter

/// Words that mark a candidate as a question when followed by a space
pub const INTERROGATIVE_WORDS: &[&str] = &[
    "how", "what", "when", "where", "why", "who", "which", "can", "does", "is", "are", "will",
    "should", "could", "would",
];

/// Whether `candidate` reads as a question.
///
/// True when it ends in `?`, or begins with one of [`INTERROGATIVE_WORDS`]
/// followed by a space (case-insensitive, surrounding whitespace ignored).
pub fn is_question(candidate: &str) -> bool {
    let lower = candidate.trim().to_lowercase();
    if lower.ends_with('?') {
        return true;
    }
    INTERROGATIVE_WORDS.iter().any(|word| {
        lower
            .strip_prefix(word)
            .is_some_and(|rest| rest.starts_with(' '))
    })
}

/// Keep only the candidates that read as questions, preserving order
pub fn filter_questions<I, S>(candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    candidates
        .into_iter()
        .map(Into::into)
        .filter(|q| is_question(q))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_mixed_candidates() {
        let filtered =
            filter_questions(["What is SEO", "Banana smoothie recipe", "does this work?"]);
        assert_eq!(filtered, vec!["What is SEO", "does this work?"]);
    }

    #[test]
    fn test_question_mark_suffix_after_trim() {
        assert!(is_question("  best crm?  "));
    }

    #[test]
    fn test_prefix_requires_following_space() {
        assert!(is_question("HOW to pick a CRM"));
        assert!(!is_question("Howard's guide to CRM"));
        assert!(!is_question("is"));
        assert!(!is_question("Island vacation ideas"));
    }

    #[test]
    fn test_every_interrogative_word_is_accepted() {
        for word in INTERROGATIVE_WORDS {
            let candidate = format!("{} something here", word);
            assert!(is_question(&candidate), "{} should pass", candidate);
        }
    }
}
