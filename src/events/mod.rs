pub mod event;
pub mod filter;
pub mod format;
pub mod source;
pub mod stats;

pub use event::{parse_event_datetime, Event};
pub use filter::SourceFilter;
pub use source::{normalize_source, SourceSlug};
pub use stats::Statistics;
