pub mod analyze;
pub mod collect;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod sentiment;
pub mod source;
pub mod store;
