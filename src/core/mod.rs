// Core business logic module

pub mod aggregate;
pub mod config;
pub mod filter;
pub mod observer;
pub mod pattern;
pub mod runner;
pub mod status;
pub mod table;

// Re-export commonly used items
pub use aggregate::{aggregate, Aggregate, AggregateOptions};
pub use config::{Config, ConnectionSettings, Credentials};
pub use filter::{FilterSet, FilterSpec};
pub use observer::{DecisionObserver, LogObserver, SilentObserver};
pub use pattern::{Pattern, PatternKind};
pub use status::Status;
pub use table::{ServiceRecord, ServiceTable};
