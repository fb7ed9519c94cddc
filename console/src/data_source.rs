use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use hrconsole_core::models::{ApprovalRequest, Resource};
use hrconsole_core::services::{DataSource, DecisionPayload, DecisionSource};
use hrconsole_core::{DataSourceError, RecordId};

use crate::api::ApiClient;

/// Data source backed by the HR REST API.
pub struct RestDataSource<R> {
    client: Arc<ApiClient>,
    _kind: PhantomData<fn() -> R>,
}

impl<R: Resource> RestDataSource<R> {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            _kind: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Resource> DataSource<R> for RestDataSource<R> {
    async fn fetch_all(&self) -> Result<Vec<R>, DataSourceError> {
        self.client.list::<R>().await.map_err(|err| {
            tracing::warn!(kind = %R::KIND, code = %err.code, error = %err, "Fetch failed");
            DataSourceError::from(err)
        })
    }
}

#[async_trait]
impl<R: ApprovalRequest> DecisionSource<R> for RestDataSource<R> {
    async fn submit_decision(
        &self,
        id: &RecordId,
        payload: &DecisionPayload<R::Value>,
    ) -> Result<(), DataSourceError> {
        self.client
            .decide(R::KIND, id, payload)
            .await
            .map_err(|err| {
                tracing::warn!(kind = %R::KIND, request_id = %id, code = %err.code, error = %err, "Decision rejected");
                DataSourceError::from(err)
            })
    }
}
