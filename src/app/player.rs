use crate::config::{ImageConfig, PlayerConfig};
use crate::search::SearchItem;
use std::time::Duration;

/// Playback state of the player screen, kept while the route is alive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub video_url: String,
    /// Backdrop if the item has one, else its poster
    pub thumbnail_url: Option<String>,
    pub position: Duration,
    pub play_when_ready: bool,
}

impl PlayerState {
    #[must_use]
    pub fn new(item: &SearchItem, player: &PlayerConfig, images: &ImageConfig) -> Self {
        let thumbnail_url = item
            .backdrop_url(&images.original_base_url)
            .or_else(|| item.poster_url(&images.original_base_url));

        Self {
            video_url: player.sample_video_url.clone(),
            thumbnail_url,
            position: Duration::ZERO,
            play_when_ready: true,
        }
    }

    pub fn play(&mut self) {
        self.play_when_ready = true;
    }

    pub fn pause(&mut self) {
        self.play_when_ready = false;
    }

    pub fn seek(&mut self, position: Duration) {
        self.position = position;
    }

    /// Advance the position while playing
    pub fn tick(&mut self, elapsed: Duration) {
        if self.play_when_ready {
            self.position += elapsed;
        }
    }

    #[must_use]
    pub fn render(&self, item: &SearchItem) -> Vec<String> {
        let secs = self.position.as_secs();
        let mut lines = vec![
            format!("Now playing: {}", item.display_title()),
            format!("Video: {}", self.video_url),
        ];
        if let Some(thumbnail) = &self.thumbnail_url {
            lines.push(format!("Thumbnail: {thumbnail}"));
        }
        lines.push(format!(
            "{} {:02}:{:02}",
            if self.play_when_ready { "Playing" } else { "Paused" },
            secs / 60,
            secs % 60
        ));
        lines
    }
}
