use crate::config::ImageConfig;
use crate::search::SearchItem;

/// Lines for the detail screen of `item`
#[must_use]
pub fn render(item: &SearchItem, images: &ImageConfig) -> Vec<String> {
    let title = item.display_title();
    let mut lines = vec![
        title.to_string(),
        format!("Type: {}", item.media_type.to_uppercase()),
    ];

    match item.poster_url(&images.standard_base_url) {
        Some(url) => lines.push(format!("Poster: {url}")),
        None => lines.push("No Image Available".to_string()),
    }

    if let Some(original) = item.original_display_title().filter(|o| *o != title) {
        lines.push(format!("Original Title: {original}"));
    }

    lines.push(format!(
        "Rating: {:.1}/10 ({} votes)",
        item.vote_average, item.vote_count
    ));

    if let Some(date) = item.air_date() {
        lines.push(format!("Release Date: {date}"));
    }

    if !item.original_language.is_empty() {
        lines.push(format!("Language: {}", item.original_language.to_uppercase()));
    }
    lines.push(format!("Popularity: {:.1}", item.popularity));

    if let Some(countries) = item.origin_country.as_ref().filter(|c| !c.is_empty()) {
        lines.push(format!("Origin Country: {}", countries.join(", ")));
    }
    if item.adult {
        lines.push("Adult content".to_string());
    }

    if let Some(overview) = item.overview.as_deref().filter(|o| !o.trim().is_empty()) {
        lines.push(String::new());
        lines.push("Overview".to_string());
        lines.push(overview.to_string());
    }

    if item.is_playable() {
        lines.push(String::new());
        lines.push("Play (:play)".to_string());
    }

    lines
}
