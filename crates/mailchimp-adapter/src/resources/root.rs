/*
[INPUT]:  Optional field filters
[OUTPUT]: API Root calls (account summary and resource links)
[POS]:    Resource layer - root namespace
[UPDATE]: When the API root response surface changes
*/

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::http::{MailchimpClient, Result};

/// The API Root: links to all other resources plus account details.
#[derive(Debug, Clone)]
pub struct Root {
    client: Arc<MailchimpClient>,
}

impl Root {
    pub(crate) fn new(client: Arc<MailchimpClient>) -> Self {
        Self { client }
    }

    /// GET /
    pub async fn info(&self, params: Value) -> Result<Value> {
        self.client.call("", &params, Method::GET).await
    }
}
