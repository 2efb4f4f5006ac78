mod narrator;
mod recommender;

pub use narrator::Narrator;
pub use recommender::{extract_song_candidates, Recommender};
