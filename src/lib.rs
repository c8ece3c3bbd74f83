pub mod app;
pub mod events;
pub mod feed;
pub mod input;
pub mod render;
pub mod storage;
pub mod ui;

pub use app::{AppState, LoadStatus};
pub use events::{Event, SourceFilter, SourceSlug, Statistics};
pub use feed::{DataFeed, EventLoader, LoadError, LoadedEvents};

pub use input::normal_mode;
