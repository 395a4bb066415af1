/*
[INPUT]:  List identifiers and audience parameters
[OUTPUT]: Audience list and saved-segment API calls
[POS]:    Resource layer - lists namespace
[UPDATE]: When list or segment endpoints change
*/

use std::sync::Arc;

use serde_json::Value;

use crate::http::{MailchimpClient, Result};
use crate::resources::resource::{Resource, SubResource};

const LISTS: &str = "lists";
const SEGMENTS: &str = "segments";

/// Audience lists, with saved segments nested underneath.
#[derive(Debug, Clone)]
pub struct Lists {
    resource: Resource,
    /// lists/{list_id}/segments
    pub segments: SubResource,
}

impl Lists {
    pub(crate) fn new(client: Arc<MailchimpClient>) -> Self {
        Self {
            resource: Resource::new(client.clone(), LISTS),
            segments: SubResource::new(client, LISTS, SEGMENTS),
        }
    }

    /// GET /lists
    pub async fn list(&self, params: Value) -> Result<Value> {
        self.resource.list(params).await
    }

    /// GET /lists/{list_id}
    pub async fn get(&self, list_id: &str, params: Value) -> Result<Value> {
        self.resource.get(list_id, params).await
    }

    /// POST /lists
    pub async fn create(&self, fields: Value) -> Result<Value> {
        self.resource.create(fields).await
    }

    /// PATCH /lists/{list_id}
    pub async fn update(&self, list_id: &str, fields: Value) -> Result<Value> {
        self.resource.update(list_id, fields).await
    }

    /// DELETE /lists/{list_id}
    pub async fn delete(&self, list_id: &str) -> Result<Value> {
        self.resource.delete(list_id).await
    }
}
