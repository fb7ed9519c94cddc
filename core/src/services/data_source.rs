use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::error::DataSourceError;
use crate::models::{ApprovalRequest, Decision, Record, Resource};
use crate::types::RecordId;

/// Body sent to the back end when a request is decided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionPayload<V> {
    pub decision: Decision,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revised_value: Option<V>,
}

/// Authoritative source of one record kind.
#[async_trait]
pub trait DataSource<R: Resource>: Send + Sync {
    /// The complete current collection; callers replace their copy wholesale.
    async fn fetch_all(&self) -> Result<Vec<R>, DataSourceError>;
}

/// A data source that also persists approval decisions.
#[async_trait]
pub trait DecisionSource<R: ApprovalRequest>: DataSource<R> {
    async fn submit_decision(
        &self,
        id: &RecordId,
        payload: &DecisionPayload<R::Value>,
    ) -> Result<(), DataSourceError>;
}

/// Process-local data source, used for seeded demos and tests.
///
/// Fetches and submissions can be switched to fail to exercise the outage
/// paths of the screens.
#[derive(Debug)]
pub struct InMemoryDataSource<R> {
    records: Mutex<Vec<R>>,
    fail_fetches: AtomicBool,
    fail_submissions: AtomicBool,
}

impl<R: Resource> InMemoryDataSource<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records: Mutex::new(records),
            fail_fetches: AtomicBool::new(false),
            fail_submissions: AtomicBool::new(false),
        }
    }

    pub fn fail_fetches(&self, fail: bool) {
        self.fail_fetches.store(fail, Ordering::SeqCst);
    }

    pub fn fail_submissions(&self, fail: bool) {
        self.fail_submissions.store(fail, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Result<Vec<R>, DataSourceError> {
        self.records
            .lock()
            .map(|records| records.clone())
            .map_err(|_| DataSourceError::Transport("in-memory store poisoned".into()))
    }

    pub fn replace(&self, records: Vec<R>) -> Result<(), DataSourceError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| DataSourceError::Transport("in-memory store poisoned".into()))?;
        *guard = records;
        Ok(())
    }
}

#[async_trait]
impl<R: Resource> DataSource<R> for InMemoryDataSource<R> {
    async fn fetch_all(&self) -> Result<Vec<R>, DataSourceError> {
        if self.fail_fetches.load(Ordering::SeqCst) {
            return Err(DataSourceError::Transport(format!(
                "{} source is offline",
                R::KIND
            )));
        }
        self.snapshot()
    }
}

#[async_trait]
impl<R: ApprovalRequest> DecisionSource<R> for InMemoryDataSource<R> {
    async fn submit_decision(
        &self,
        id: &RecordId,
        payload: &DecisionPayload<R::Value>,
    ) -> Result<(), DataSourceError> {
        if self.fail_submissions.load(Ordering::SeqCst) {
            return Err(DataSourceError::Transport(format!(
                "{} source is offline",
                R::KIND
            )));
        }
        let mut records = self
            .records
            .lock()
            .map_err(|_| DataSourceError::Transport("in-memory store poisoned".into()))?;
        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| DataSourceError::Rejected {
                status: 404,
                message: format!("request {} not found", id),
            })?;
        if record.status().is_terminal() {
            return Err(DataSourceError::Rejected {
                status: 409,
                message: "Request not found or already processed".into(),
            });
        }
        if let Some(value) = &payload.revised_value {
            record.set_requested_value(value.clone());
        }
        record.set_status(payload.decision.status());
        record.set_decision_note(payload.comment.clone());
        Ok(())
    }
}
