/*
[INPUT]:  Campaign identifiers, settings, and content payloads
[OUTPUT]: Campaign CRUD, send actions, and content API calls
[POS]:    Resource layer - campaigns namespace
[UPDATE]: When campaign endpoints or actions change
*/

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::http::{MailchimpClient, Result};
use crate::resources::resource::Resource;

const CAMPAIGNS: &str = "campaigns";

/// Campaigns: CRUD plus the send/cancel actions and the content document.
#[derive(Debug, Clone)]
pub struct Campaigns {
    client: Arc<MailchimpClient>,
    resource: Resource,
}

impl Campaigns {
    pub(crate) fn new(client: Arc<MailchimpClient>) -> Self {
        Self {
            resource: Resource::new(client.clone(), CAMPAIGNS),
            client,
        }
    }

    /// GET /campaigns
    pub async fn list(&self, params: Value) -> Result<Value> {
        self.resource.list(params).await
    }

    /// GET /campaigns/{campaign_id}
    pub async fn get(&self, campaign_id: &str, params: Value) -> Result<Value> {
        self.resource.get(campaign_id, params).await
    }

    /// POST /campaigns
    pub async fn create(&self, fields: Value) -> Result<Value> {
        self.resource.create(fields).await
    }

    /// PATCH /campaigns/{campaign_id}
    pub async fn update(&self, campaign_id: &str, fields: Value) -> Result<Value> {
        self.resource.update(campaign_id, fields).await
    }

    /// DELETE /campaigns/{campaign_id}
    pub async fn delete(&self, campaign_id: &str) -> Result<Value> {
        self.resource.delete(campaign_id).await
    }

    /// POST /campaigns/{campaign_id}/actions/send
    pub async fn send(&self, campaign_id: &str) -> Result<Value> {
        self.client
            .call(
                &format!("{CAMPAIGNS}/{campaign_id}/actions/send"),
                &Value::Null,
                Method::POST,
            )
            .await
    }

    /// POST /campaigns/{campaign_id}/actions/cancel-send
    pub async fn cancel_send(&self, campaign_id: &str) -> Result<Value> {
        self.client
            .call(
                &format!("{CAMPAIGNS}/{campaign_id}/actions/cancel-send"),
                &Value::Null,
                Method::POST,
            )
            .await
    }

    /// GET /campaigns/{campaign_id}/content
    pub async fn get_content(&self, campaign_id: &str, params: Value) -> Result<Value> {
        self.client
            .call(
                &format!("{CAMPAIGNS}/{campaign_id}/content"),
                &params,
                Method::GET,
            )
            .await
    }

    /// PUT /campaigns/{campaign_id}/content
    pub async fn set_content(&self, campaign_id: &str, fields: Value) -> Result<Value> {
        self.client
            .call(
                &format!("{CAMPAIGNS}/{campaign_id}/content"),
                &fields,
                Method::PUT,
            )
            .await
    }
}
