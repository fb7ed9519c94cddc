//! Terminal front end for the HR administration console: a REST client for
//! the back end, table rendering, CSV export and terminal notifications.

pub mod api;
pub mod data_source;
pub mod export;
pub mod notifier;
pub mod render;
