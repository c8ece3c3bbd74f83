pub mod event_detail;
pub mod help;
