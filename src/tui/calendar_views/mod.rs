pub mod event_list;
pub mod filter_bar;
pub mod month;
pub mod stats_panel;
