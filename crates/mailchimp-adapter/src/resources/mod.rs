/*
[INPUT]:  An API key and client configuration
[OUTPUT]: Typed namespace tree over the request dispatcher
[POS]:    Resource layer - composition root and path table
[UPDATE]: When namespaces are added or the resource tree changes
*/

pub mod automations;
pub mod campaigns;
pub mod conversations;
pub mod ecommerce;
pub mod file_manager;
pub mod lists;
pub mod resource;
pub mod root;

pub use automations::Automations;
pub use campaigns::Campaigns;
pub use conversations::Conversations;
pub use ecommerce::{Ecommerce, EcommerceOrders, EcommerceProducts};
pub use file_manager::FileManager;
pub use lists::Lists;
pub use resource::{NestedResource, Resource, SubResource};
pub use root::Root;

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::http::{ClientConfig, MailchimpClient, Result};

const AUTHORIZED_APPS: &str = "authorized-apps";
const BATCHES: &str = "batches";
const CAMPAIGN_FOLDERS: &str = "campaign-folders";

/// Entry point for the Mailchimp Marketing API: the dispatcher plus one
/// typed field per namespace.
///
/// The whole tree shares one [`MailchimpClient`] and one connection pool;
/// the struct clones cheaply and may be shared across tasks.
#[derive(Debug, Clone)]
pub struct Mailchimp {
    client: Arc<MailchimpClient>,
    pub root: Root,
    pub authorized_apps: Resource,
    pub automations: Automations,
    pub batches: Resource,
    pub campaign_folders: Resource,
    pub campaigns: Campaigns,
    pub conversations: Conversations,
    pub ecommerce: Ecommerce,
    pub file_manager: FileManager,
    pub lists: Lists,
}

impl Mailchimp {
    /// Create an adapter with default configuration
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create an adapter with custom configuration
    pub fn with_config(api_key: &str, config: ClientConfig) -> Result<Self> {
        Ok(Self::from_client(MailchimpClient::with_config(
            api_key, config,
        )?))
    }

    /// Point the whole namespace tree at an alternate server, for tests
    pub fn with_config_and_base_url(
        api_key: &str,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        Ok(Self::from_client(MailchimpClient::with_config_and_base_url(
            api_key, config, base_url,
        )?))
    }

    fn from_client(client: MailchimpClient) -> Self {
        let client = Arc::new(client);
        Self {
            root: Root::new(client.clone()),
            authorized_apps: Resource::new(client.clone(), AUTHORIZED_APPS),
            automations: Automations::new(client.clone()),
            batches: Resource::new(client.clone(), BATCHES),
            campaign_folders: Resource::new(client.clone(), CAMPAIGN_FOLDERS),
            campaigns: Campaigns::new(client.clone()),
            conversations: Conversations::new(client.clone()),
            ecommerce: Ecommerce::new(client.clone()),
            file_manager: FileManager::new(client.clone()),
            lists: Lists::new(client.clone()),
            client,
        }
    }

    /// Escape hatch for endpoints without a namespace method
    pub async fn call<P>(&self, path: &str, params: &P, method: Method) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        self.client.call(path, params, method).await
    }

    /// The underlying dispatcher
    pub fn client(&self) -> &MailchimpClient {
        &self.client
    }
}
