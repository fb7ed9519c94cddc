//! Screen controllers: a record set wired to its data source and notifier.

use std::sync::Arc;

use crate::config::ScreenDefaults;
use crate::error::{CoreError, DataSourceError};
use crate::lifecycle::{derive_statistics, RequestLifecycle, RequestStatistics};
use crate::models::{ApprovalRequest, Decision, Resource};
use crate::record_set::RecordSetView;
use crate::services::data_source::{DataSource, DecisionSource};
use crate::services::notifier::{notify, Notifier, Severity};
use crate::types::RecordId;

fn initial_view<R: Resource>(defaults: &ScreenDefaults) -> Result<RecordSetView<R>, CoreError> {
    let page_size = i64::try_from(defaults.page_size)
        .map_err(|_| CoreError::invalid_argument("page size is too large"))?;
    let mut view = RecordSetView::with_page_size(Vec::new(), page_size)?;
    if let Some(status) = &defaults.status_filter {
        view.set_field_filter("status", status.clone());
    }
    Ok(view)
}

/// Applies a fetch result. A failed fetch keeps the last-known-good snapshot.
fn apply_refresh<R: Resource>(
    view: &mut RecordSetView<R>,
    notifier: &dyn Notifier,
    fetched: Result<Vec<R>, DataSourceError>,
) -> Result<usize, CoreError> {
    match fetched {
        Ok(records) => match view.replace_records(records) {
            Ok(()) => {
                tracing::info!(kind = %R::KIND, count = view.len(), "Refreshed records");
                Ok(view.len())
            }
            Err(err) => {
                tracing::error!(kind = %R::KIND, error = %err, "Refusing refreshed records");
                notify(
                    notifier,
                    &format!("Could not load {}: {}", R::KIND.label().to_lowercase(), err),
                    Severity::Error,
                );
                Err(err)
            }
        },
        Err(err) => {
            tracing::error!(kind = %R::KIND, error = %err, "Failed to refresh records");
            notify(
                notifier,
                &format!("Could not load {}: {}", R::KIND.label().to_lowercase(), err),
                Severity::Error,
            );
            Err(CoreError::DataSourceUnavailable(err))
        }
    }
}

/// Read-only list screen (branches, employees, transfers, ...).
pub struct ListScreen<R: Resource> {
    view: RecordSetView<R>,
    source: Arc<dyn DataSource<R>>,
    notifier: Arc<dyn Notifier>,
}

impl<R: Resource> ListScreen<R> {
    pub fn new(
        source: Arc<dyn DataSource<R>>,
        notifier: Arc<dyn Notifier>,
        defaults: &ScreenDefaults,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            view: initial_view(defaults)?,
            source,
            notifier,
        })
    }

    pub fn view(&self) -> &RecordSetView<R> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut RecordSetView<R> {
        &mut self.view
    }

    /// Replaces the collection with the data source's current one and
    /// returns the number of records loaded.
    pub async fn refresh(&mut self) -> Result<usize, CoreError> {
        let fetched = self.source.fetch_all().await;
        apply_refresh(&mut self.view, self.notifier.as_ref(), fetched)
    }
}

/// Approval screen for attendance corrections or leave applications.
pub struct ApprovalScreen<R: ApprovalRequest> {
    view: RecordSetView<R>,
    source: Arc<dyn DecisionSource<R>>,
    notifier: Arc<dyn Notifier>,
    lifecycle: RequestLifecycle,
}

impl<R: ApprovalRequest> ApprovalScreen<R> {
    pub fn new(
        source: Arc<dyn DecisionSource<R>>,
        notifier: Arc<dyn Notifier>,
        defaults: &ScreenDefaults,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            view: initial_view(defaults)?,
            source,
            lifecycle: RequestLifecycle::new(notifier.clone()),
            notifier,
        })
    }

    pub fn view(&self) -> &RecordSetView<R> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut RecordSetView<R> {
        &mut self.view
    }

    pub async fn refresh(&mut self) -> Result<usize, CoreError> {
        let fetched = self.source.fetch_all().await;
        apply_refresh(&mut self.view, self.notifier.as_ref(), fetched)
    }

    /// Statistics over the whole collection, independent of filters.
    pub fn statistics(&self) -> RequestStatistics {
        derive_statistics(self.view.records())
    }

    /// Decides a request optimistically and persists it.
    ///
    /// The local record changes first. If the data source refuses or cannot
    /// be reached, the record goes back to `Pending`, the notifier receives
    /// an error, and `DataSourceUnavailable` is returned.
    pub async fn submit_decision(
        &mut self,
        id: &RecordId,
        decision: Decision,
        revised_value: Option<R::Value>,
        note: Option<&str>,
    ) -> Result<RecordId, CoreError> {
        let receipt = self
            .lifecycle
            .decide(&mut self.view, id, decision, revised_value, note)?;
        let payload = receipt.payload();

        match self.source.submit_decision(id, &payload).await {
            Ok(()) => Ok(self.lifecycle.confirm(receipt)),
            Err(err) => {
                tracing::error!(request_id = %id, error = %err, "Decision was not persisted");
                self.lifecycle.rollback(&mut self.view, receipt)?;
                notify(
                    self.notifier.as_ref(),
                    &format!("Could not save decision for request {}: {}", id, err),
                    Severity::Error,
                );
                Err(CoreError::DataSourceUnavailable(err))
            }
        }
    }
}
