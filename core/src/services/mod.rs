//! Boundaries to the outside world: where records come from and where
//! outcomes are shown.

pub mod data_source;
pub mod notifier;
pub mod seed;

pub use data_source::{DataSource, DecisionPayload, DecisionSource, InMemoryDataSource};
pub use notifier::{notify, Notifier, RecordingNotifier, Severity};
