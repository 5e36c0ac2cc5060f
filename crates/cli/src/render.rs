//! Text rendering for the screens.

use moviedex_core::{Record, SearchPage};

pub const SEEDED: &str = "Successfully added movies to database";
pub const NOTHING_TO_SAVE: &str = "You have to search for a movie first";
pub const NETWORK_FAILURE: &str = "Failed to reach the movie catalog";
pub const MALFORMED_RESPONSE: &str = "The movie catalog sent a response that could not be read";

pub fn saved(title: &str) -> String {
    format!("Successfully added '{}' to database", title)
}

/// A single lookup result. The plot is set off by a blank line.
pub fn lookup_result(record: &Record) -> String {
    format!(
        "Title: {}\nYear: {}\nRated: {}\nReleased: {}\nRuntime: {}\nGenre: {}\nDirector: {}\nWriter: {}\nActors: {}\n\nPlot: {}",
        record.title,
        record.year,
        record.rated,
        record.released,
        record.runtime,
        record.genre,
        record.director,
        record.writer,
        record.actors,
        record.plot,
    )
}

/// Every stored record matching an actor search, each followed by a blank line.
pub fn actor_matches(records: &[Record]) -> String {
    records
        .iter()
        .map(|r| {
            format!(
                "Title: {}\nYear: {}\nRated: {}\nReleased: {}\nRuntime: {}\nGenre: {}\nDirector: {}\nWriter: {}\nActors: {}\nPlot: {}\n\n",
                r.title,
                r.year,
                r.rated,
                r.released,
                r.runtime,
                r.genre,
                r.director,
                r.writer,
                r.actors,
                r.plot,
            )
        })
        .collect()
}

/// Titles in catalog order, then the shown/total counts.
pub fn search_page(page: &SearchPage) -> String {
    let mut out: String = page
        .entries
        .iter()
        .map(|e| format!("{}\n\n", e.title))
        .collect();
    out.push_str(&format!(
        "(Results shown: {}, Total results: {})\n",
        page.shown(),
        page.total_results
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use moviedex_core::testing::fixtures;
    use moviedex_core::SearchEntry;

    #[test]
    fn test_lookup_result_layout() {
        let record = fixtures::record("Heat", "Al Pacino");
        let text = lookup_result(&record);

        assert!(text.starts_with("Title: Heat\nYear: 1999\n"));
        assert!(text.contains("\nActors: Al Pacino\n\nPlot: A film called Heat."));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_actor_matches_layout() {
        let records = vec![
            fixtures::record("Heat", "Al Pacino"),
            fixtures::record("Ronin", "Robert De Niro"),
        ];
        let text = actor_matches(&records);

        assert!(text.contains("Actors: Al Pacino\nPlot: A film called Heat.\n\nTitle: Ronin"));
        assert!(text.ends_with("Plot: A film called Ronin.\n\n"));
    }

    #[test]
    fn test_actor_matches_empty() {
        assert_eq!(actor_matches(&[]), "");
    }

    #[test]
    fn test_search_page_layout() {
        let page = SearchPage {
            entries: vec![
                SearchEntry {
                    rank: 1,
                    title: "A".to_string(),
                },
                SearchEntry {
                    rank: 2,
                    title: "B".to_string(),
                },
            ],
            total_results: 120,
        };

        assert_eq!(
            search_page(&page),
            "A\n\nB\n\n(Results shown: 2, Total results: 120)\n"
        );
    }

    #[test]
    fn test_saved_message() {
        assert_eq!(saved("Heat"), "Successfully added 'Heat' to database");
    }
}
