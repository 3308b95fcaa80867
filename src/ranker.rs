//! Keyword-relevance ranking over sentence-like fragments.
//!
//! Deliberately naive: the text is split on literal `.` characters (so
//! abbreviations, decimals and URLs misparse), terms are matched as plain
//! substrings, and there is no stemming or stopword handling. The contract
//! is exact-match counting, not information retrieval.

/// Fragments at or under this many characters are too short to be useful.
const MIN_FRAGMENT_CHARS: usize = 20;

/// Maximum number of fragments returned per document.
const MAX_SECTIONS: usize = 5;

/// Returns up to [`MAX_SECTIONS`] fragments of `content` relevant to `query`,
/// most relevant first.
///
/// A fragment's score is the sum over all whitespace-separated query terms of
/// that term's non-overlapping occurrence count in the lowercased fragment.
/// Zero-score fragments are dropped; ties keep encounter order.
pub fn find_relevant_sections(content: &str, query: &str) -> Vec<String> {
    let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();

    let mut scored: Vec<(String, usize)> = Vec::new();
    for fragment in content.split('.') {
        let fragment = fragment.trim();
        if fragment.chars().count() <= MIN_FRAGMENT_CHARS {
            continue;
        }
        let lowered = fragment.to_lowercase();
        let score: usize = terms
            .iter()
            .map(|term| lowered.matches(term.as_str()).count())
            .sum();
        if score > 0 {
            scored.push((fragment.to_string(), score));
        }
    }

    // sort_by is stable, so equal scores keep encounter order.
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
        .into_iter()
        .take(MAX_SECTIONS)
        .map(|(fragment, _)| fragment)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &str = "CRC is great. \
        OpenShift Local runs on a VM. \
        Containers are isolated. \
        The VM hosting OpenShift Local needs a VM-capable host. \
        Networking for the cluster is preconfigured.";

    #[test]
    fn test_ranks_by_term_occurrences() {
        let sections = find_relevant_sections(CONTENT, "OpenShift Local VM");

        // Two "VM"s plus "OpenShift" and "Local" beats one of each.
        assert_eq!(sections[0], "The VM hosting OpenShift Local needs a VM-capable host");
        assert_eq!(sections[1], "OpenShift Local runs on a VM");
    }

    #[test]
    fn test_zero_score_fragments_excluded() {
        let sections = find_relevant_sections(CONTENT, "OpenShift Local VM");
        assert!(!sections.iter().any(|s| s.contains("Containers are isolated")));
        assert!(!sections.iter().any(|s| s.contains("Networking")));
    }

    #[test]
    fn test_short_fragments_excluded() {
        // "CRC is great" is 12 chars, under the cutoff, even though it matches.
        let sections = find_relevant_sections(CONTENT, "crc");
        assert!(sections.is_empty());

        let long = "CRC is a great way to run OpenShift locally. CRC.";
        let sections = find_relevant_sections(long, "crc");
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let sections = find_relevant_sections(CONTENT, "OPENSHIFT local vm");
        assert!(!sections.is_empty());
        // Original casing is preserved in the output.
        assert!(sections[0].contains("OpenShift"));
    }

    #[test]
    fn test_at_most_five_sections() {
        let content = (0..8)
            .map(|i| format!("Sentence number {i} mentions the cluster"))
            .collect::<Vec<_>>()
            .join(". ");
        let sections = find_relevant_sections(&content, "cluster");
        assert_eq!(sections.len(), 5);
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let content = "First sentence about the cluster here. \
            Second sentence about the cluster here. \
            Third sentence about the cluster here.";
        let sections = find_relevant_sections(content, "cluster");
        assert_eq!(
            sections,
            vec![
                "First sentence about the cluster here",
                "Second sentence about the cluster here",
                "Third sentence about the cluster here",
            ]
        );
    }

    #[test]
    fn test_idempotent() {
        let first = find_relevant_sections(CONTENT, "OpenShift Local VM");
        let second = find_relevant_sections(CONTENT, "OpenShift Local VM");
        assert_eq!(first, second);
    }

    #[test]
    fn test_counts_are_non_overlapping() {
        let content = "This fragment says aaaa and then some more words.";
        let sections = find_relevant_sections(content, "aa");
        // "aaaa" counts "aa" twice (left-to-right, non-overlapping), still one fragment.
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(find_relevant_sections("", "query").is_empty());
        assert!(find_relevant_sections(CONTENT, "").is_empty());
        assert!(find_relevant_sections(CONTENT, "zzzzzz").is_empty());
    }
}
