mod engine;
mod mode;
mod normalize;

pub use engine::{filter_matches, SearchQuery};
pub use mode::{FilterMode, TeamChoice, TournamentChoice};
pub use normalize::normalize;
