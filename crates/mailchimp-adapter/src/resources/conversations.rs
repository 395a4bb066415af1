/*
[INPUT]:  Conversation identifiers
[OUTPUT]: Conversation reads and message API calls
[POS]:    Resource layer - conversations namespace
[UPDATE]: When conversation endpoints change
*/

use std::sync::Arc;

use serde_json::Value;

use crate::http::{MailchimpClient, Result};
use crate::resources::resource::{Resource, SubResource};

const CONVERSATIONS: &str = "conversations";
const MESSAGES: &str = "messages";

/// Inbox conversations. Conversations are read-only; replies go through
/// the nested messages namespace.
#[derive(Debug, Clone)]
pub struct Conversations {
    resource: Resource,
    /// conversations/{conversation_id}/messages
    pub messages: SubResource,
}

impl Conversations {
    pub(crate) fn new(client: Arc<MailchimpClient>) -> Self {
        Self {
            resource: Resource::new(client.clone(), CONVERSATIONS),
            messages: SubResource::new(client, CONVERSATIONS, MESSAGES),
        }
    }

    /// GET /conversations
    pub async fn list(&self, params: Value) -> Result<Value> {
        self.resource.list(params).await
    }

    /// GET /conversations/{conversation_id}
    pub async fn get(&self, conversation_id: &str, params: Value) -> Result<Value> {
        self.resource.get(conversation_id, params).await
    }
}
