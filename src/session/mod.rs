mod events;
mod state;

pub use events::{Outcome, Session, UiEvent};
pub use state::SessionState;
