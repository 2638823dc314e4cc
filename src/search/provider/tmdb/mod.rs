mod provider;

pub use provider::{TMDB_BASE_URL, TmdbProvider};
