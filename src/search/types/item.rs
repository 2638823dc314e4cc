use serde::{Deserialize, Serialize};

/// One entry of a multi search: a movie, a TV show or a person.
///
/// Movies carry `title`/`release_date`, shows carry `name`/`first_air_date`.
/// TMDB omits most numeric fields for people, so those default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchItem {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    /// "movie", "tv", "person", ...
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub video: Option<bool>,
    #[serde(default)]
    pub origin_country: Option<Vec<String>>,
}

impl SearchItem {
    /// Title for movies, name for everything else
    #[must_use]
    pub fn display_title(&self) -> &str {
        non_blank(self.title.as_deref())
            .or_else(|| non_blank(self.name.as_deref()))
            .unwrap_or("Unknown")
    }

    #[must_use]
    pub fn original_display_title(&self) -> Option<&str> {
        non_blank(self.original_title.as_deref()).or_else(|| non_blank(self.original_name.as_deref()))
    }

    /// Release date for movies, first air date for shows
    #[must_use]
    pub fn air_date(&self) -> Option<&str> {
        non_blank(self.release_date.as_deref()).or_else(|| non_blank(self.first_air_date.as_deref()))
    }

    #[must_use]
    pub fn year(&self) -> Option<i32> {
        self.air_date()
            .and_then(|d| d.split('-').next())
            .and_then(|y| y.parse().ok())
    }

    /// Only movies and shows have something to play
    #[must_use]
    pub fn is_playable(&self) -> bool {
        matches!(self.media_type.as_str(), "movie" | "tv")
    }

    #[must_use]
    pub fn poster_url(&self, image_base: &str) -> Option<String> {
        image_url(image_base, self.poster_path.as_deref())
    }

    #[must_use]
    pub fn backdrop_url(&self, image_base: &str) -> Option<String> {
        image_url(image_base, self.backdrop_path.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn image_url(base: &str, path: Option<&str>) -> Option<String> {
    non_blank(path).map(|p| format!("{base}{p}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_movie_entry() {
        let json = r#"{
            "id": 603,
            "title": "The Matrix",
            "original_title": "The Matrix",
            "overview": "Set in the 22nd century...",
            "poster_path": "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
            "backdrop_path": "/fNG7i7RqMErkcqhohV2a6cV1Ehy.jpg",
            "media_type": "movie",
            "original_language": "en",
            "genre_ids": [28, 878],
            "popularity": 82.1,
            "vote_average": 8.2,
            "vote_count": 24000,
            "adult": false,
            "release_date": "1999-03-30",
            "video": false
        }"#;

        let item: SearchItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.display_title(), "The Matrix");
        assert_eq!(item.year(), Some(1999));
        assert!(item.is_playable());
        assert_eq!(item.genre_ids, vec![28, 878]);
        assert!(item.first_air_date.is_none());
    }

    #[test]
    fn tv_entry_falls_back_to_name() {
        let json = r#"{
            "id": 1399,
            "name": "Game of Thrones",
            "original_name": "Game of Thrones",
            "media_type": "tv",
            "original_language": "en",
            "first_air_date": "2011-04-17",
            "origin_country": ["US"]
        }"#;

        let item: SearchItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.display_title(), "Game of Thrones");
        assert_eq!(item.air_date(), Some("2011-04-17"));
        assert_eq!(item.origin_country, Some(vec!["US".to_string()]));
        assert_eq!(item.vote_count, 0);
    }

    #[test]
    fn person_entry_tolerates_missing_fields() {
        let json = r#"{"id": 6384, "name": "Keanu Reeves", "media_type": "person", "adult": false}"#;

        let item: SearchItem = serde_json::from_str(json).unwrap();
        assert!(!item.is_playable());
        assert!(item.air_date().is_none());
        assert!(item.poster_url("https://image.tmdb.org/t/p/w500").is_none());
    }

    #[test]
    fn blank_fields_are_treated_as_absent() {
        let json = r#"{"id": 1, "title": "", "name": "", "release_date": "", "poster_path": " "}"#;

        let item: SearchItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.display_title(), "Unknown");
        assert!(item.air_date().is_none());
        assert!(item.poster_url("https://image.tmdb.org/t/p/w500").is_none());
    }

    #[test]
    fn image_urls_join_base_and_fragment() {
        let json = r#"{"id": 1, "poster_path": "/p.jpg", "backdrop_path": "/b.jpg"}"#;

        let item: SearchItem = serde_json::from_str(json).unwrap();
        assert_eq!(
            item.poster_url("https://image.tmdb.org/t/p/w500").as_deref(),
            Some("https://image.tmdb.org/t/p/w500/p.jpg")
        );
        assert_eq!(
            item.backdrop_url("https://image.tmdb.org/t/p/original").as_deref(),
            Some("https://image.tmdb.org/t/p/original/b.jpg")
        );
    }
}
