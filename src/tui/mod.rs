mod session;
mod presentation;
mod sample_events;
mod calendar_views;
mod dialogs;
mod links;

pub use session::{load_state, run_tui};
