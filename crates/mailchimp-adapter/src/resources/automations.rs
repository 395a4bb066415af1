/*
[INPUT]:  Workflow identifiers
[OUTPUT]: Automation workflow reads and start/pause actions
[POS]:    Resource layer - automations namespace
[UPDATE]: When automation endpoints or actions change
*/

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::http::{MailchimpClient, Result};

const AUTOMATIONS: &str = "automations";

/// Automation workflows. The API serves reads and workflow actions only;
/// workflows themselves are authored in the application.
#[derive(Debug, Clone)]
pub struct Automations {
    client: Arc<MailchimpClient>,
}

impl Automations {
    pub(crate) fn new(client: Arc<MailchimpClient>) -> Self {
        Self { client }
    }

    /// GET /automations
    pub async fn list(&self, params: Value) -> Result<Value> {
        self.client.call(AUTOMATIONS, &params, Method::GET).await
    }

    /// GET /automations/{workflow_id}
    pub async fn get(&self, workflow_id: &str, params: Value) -> Result<Value> {
        self.client
            .call(&format!("{AUTOMATIONS}/{workflow_id}"), &params, Method::GET)
            .await
    }

    /// GET /automations/{workflow_id}/emails
    pub async fn emails(&self, workflow_id: &str, params: Value) -> Result<Value> {
        self.client
            .call(
                &format!("{AUTOMATIONS}/{workflow_id}/emails"),
                &params,
                Method::GET,
            )
            .await
    }

    /// POST /automations/{workflow_id}/actions/start-all-emails
    pub async fn start_all_emails(&self, workflow_id: &str) -> Result<Value> {
        self.client
            .call(
                &format!("{AUTOMATIONS}/{workflow_id}/actions/start-all-emails"),
                &Value::Null,
                Method::POST,
            )
            .await
    }

    /// POST /automations/{workflow_id}/actions/pause-all-emails
    pub async fn pause_all_emails(&self, workflow_id: &str) -> Result<Value> {
        self.client
            .call(
                &format!("{AUTOMATIONS}/{workflow_id}/actions/pause-all-emails"),
                &Value::Null,
                Method::POST,
            )
            .await
    }
}
