//! Local actor search over stored records.

use crate::record::{Record, SearchTerm};

/// Keep the records whose `actors` field contains `term`, ignoring case.
///
/// Plain substring containment after Unicode lower-casing: "anne" matches
/// "Anne Hathaway" and "Roseanne" alike. Input order is preserved.
pub fn filter_by_actor(records: Vec<Record>, term: &SearchTerm) -> Vec<Record> {
    let needle = term.as_str().to_lowercase();
    records
        .into_iter()
        .filter(|r| r.actors.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    fn library() -> Vec<Record> {
        vec![
            fixtures::record("The Shawshank Redemption", "Tim Robbins, Morgan Freeman"),
            fixtures::record("The Matrix", "Keanu Reeves"),
        ]
    }

    fn titles(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_match_is_case_insensitive() {
        for query in ["reeves", "REEVES", "ReEvEs"] {
            let term = SearchTerm::parse(query).unwrap();
            let found = filter_by_actor(library(), &term);
            assert_eq!(titles(&found), vec!["The Matrix"]);
        }
    }

    #[test]
    fn test_no_match_is_empty() {
        let term = SearchTerm::parse("z").unwrap();
        assert!(filter_by_actor(library(), &term).is_empty());
    }

    #[test]
    fn test_substring_not_word_boundary() {
        let records = vec![
            fixtures::record("Interstellar", "Anne Hathaway"),
            fixtures::record("Roseanne", "Roseanne Barr"),
            fixtures::record("Heat", "Al Pacino"),
        ];
        let term = SearchTerm::parse("anne").unwrap();

        let found = filter_by_actor(records, &term);
        assert_eq!(titles(&found), vec!["Interstellar", "Roseanne"]);
    }

    #[test]
    fn test_non_ascii_case_folding() {
        let records = vec![fixtures::record("Amélie", "Audrey Tautou, Mathieu Kassovitz, ÉLODIE")];
        let term = SearchTerm::parse("élodie").unwrap();

        assert_eq!(filter_by_actor(records, &term).len(), 1);
    }

    #[test]
    fn test_matches_across_name_separator() {
        let term = SearchTerm::parse("robbins, morgan").unwrap();
        let found = filter_by_actor(library(), &term);
        assert_eq!(titles(&found), vec!["The Shawshank Redemption"]);
    }
}
