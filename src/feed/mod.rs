pub mod data_feed;
pub mod loader;

pub use data_feed::{decode_events, DataFeed, EventFeed, FeedError};
pub use loader::{EventLoader, LoadError, LoadedEvents};
