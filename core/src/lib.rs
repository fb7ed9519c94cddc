//! Record-set management and request approval for the HR administration
//! console.
//!
//! [`record_set::RecordSetView`] derives the visible page of any list screen
//! from its collection, search text, field filters and page cursor.
//! [`lifecycle::RequestLifecycle`] moves attendance corrections and leave
//! applications from `Pending` to a terminal status. [`screen`] wires both to
//! a [`services::DataSource`] and a [`services::Notifier`].

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod record_set;
pub mod screen;
pub mod services;
pub mod types;

pub use error::{CoreError, DataSourceError, NotifyError};
pub use types::RecordId;
