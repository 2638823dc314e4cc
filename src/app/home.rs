use crate::search::{SearchResults, SearchUiState};

/// Lines for the search screen
#[must_use]
pub fn render(state: &SearchUiState) -> Vec<String> {
    match state {
        SearchUiState::Initial => vec!["Start typing to search".to_string()],
        SearchUiState::Loading => vec!["Loading...".to_string()],
        SearchUiState::Error { message } => vec!["Error".to_string(), message.clone()],
        SearchUiState::Success(results) if results.results.is_empty() => {
            vec!["No results".to_string()]
        }
        SearchUiState::Success(results) => render_results(results),
    }
}

fn render_results(results: &SearchResults) -> Vec<String> {
    let mut lines: Vec<String> = results
        .results
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let year = item.year().map(|y| format!(" ({y})")).unwrap_or_default();
            format!(
                "{:>3}. [{}] {}{}",
                index + 1,
                item.media_type.to_uppercase(),
                item.display_title(),
                year
            )
        })
        .collect();

    lines.push(format!(
        "page {} of {}",
        results.current_page, results.total_pages
    ));

    if results.is_loading_more {
        lines.push("Loading".to_string());
    } else if results.is_last_page() {
        lines.push("All results loaded".to_string());
    } else {
        lines.push("Load More (:more)".to_string());
    }

    if let Some(error) = &results.error_message {
        lines.push(format!("Error: {error}"));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchItem;

    fn item(title: &str, media_type: &str, date: &str) -> SearchItem {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": title,
            "media_type": media_type,
            "release_date": date
        }))
        .unwrap()
    }

    #[test]
    fn placeholder_states() {
        assert_eq!(render(&SearchUiState::Initial), vec!["Start typing to search"]);
        assert_eq!(render(&SearchUiState::Loading), vec!["Loading..."]);
        assert_eq!(
            render(&SearchUiState::Error {
                message: "boom".into()
            }),
            vec!["Error", "boom"]
        );
    }

    #[test]
    fn lists_results_with_footer() {
        let state = SearchUiState::Success(SearchResults {
            results: vec![
                item("Tokyo Story", "movie", "1953-11-03"),
                item("Tokyo Drift", "movie", ""),
            ],
            current_page: 1,
            total_pages: 2,
            is_loading_more: false,
            error_message: Some("timed out".into()),
        });

        let lines = render(&state);
        assert_eq!(lines[0], "  1. [MOVIE] Tokyo Story (1953)");
        assert_eq!(lines[1], "  2. [MOVIE] Tokyo Drift");
        assert_eq!(lines[2], "page 1 of 2");
        assert_eq!(lines[3], "Load More (:more)");
        assert_eq!(lines[4], "Error: timed out");
    }

    #[test]
    fn footer_reflects_pagination() {
        let mut results = SearchResults {
            results: vec![item("Tokyo Story", "movie", "")],
            current_page: 1,
            total_pages: 1,
            ..Default::default()
        };
        let lines = render(&SearchUiState::Success(results.clone()));
        assert_eq!(lines.last().map(String::as_str), Some("All results loaded"));

        results.total_pages = 3;
        results.is_loading_more = true;
        let lines = render(&SearchUiState::Success(results));
        assert_eq!(lines.last().map(String::as_str), Some("Loading"));
    }

    #[test]
    fn empty_success() {
        let state = SearchUiState::Success(SearchResults {
            current_page: 1,
            ..Default::default()
        });
        assert_eq!(render(&state), vec!["No results"]);
    }
}
