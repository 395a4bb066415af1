/*
[INPUT]:  Static path segments and caller-supplied identifiers
[OUTPUT]: CRUD calls dispatched against composed resource paths
[POS]:    Resource layer - generic namespace carriers
[UPDATE]: When the CRUD verb set or path composition changes
*/

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::http::{MailchimpClient, Result};

/// A top-level CRUD namespace: one fixed path prefix, five verbs.
///
/// Namespaces whose only difference is the path come from the table in
/// [`Mailchimp`](crate::Mailchimp) rather than one hand-written type each.
#[derive(Debug, Clone)]
pub struct Resource {
    client: Arc<MailchimpClient>,
    path: &'static str,
}

impl Resource {
    pub(crate) fn new(client: Arc<MailchimpClient>, path: &'static str) -> Self {
        Self { client, path }
    }

    /// GET /{path}
    pub async fn list(&self, params: Value) -> Result<Value> {
        self.client.call(self.path, &params, Method::GET).await
    }

    /// GET /{path}/{id}
    pub async fn get(&self, id: &str, params: Value) -> Result<Value> {
        self.client
            .call(&format!("{}/{id}", self.path), &params, Method::GET)
            .await
    }

    /// POST /{path}
    pub async fn create(&self, fields: Value) -> Result<Value> {
        self.client.call(self.path, &fields, Method::POST).await
    }

    /// PATCH /{path}/{id}
    pub async fn update(&self, id: &str, fields: Value) -> Result<Value> {
        self.client
            .call(&format!("{}/{id}", self.path), &fields, Method::PATCH)
            .await
    }

    /// DELETE /{path}/{id}
    pub async fn delete(&self, id: &str) -> Result<Value> {
        self.client
            .call(&format!("{}/{id}", self.path), &Value::Null, Method::DELETE)
            .await
    }
}

/// A namespace nested one level under a parent identifier,
/// `{parent}/{parent_id}/{path}`.
#[derive(Debug, Clone)]
pub struct SubResource {
    client: Arc<MailchimpClient>,
    parent: &'static str,
    path: &'static str,
}

impl SubResource {
    pub(crate) fn new(
        client: Arc<MailchimpClient>,
        parent: &'static str,
        path: &'static str,
    ) -> Self {
        Self {
            client,
            parent,
            path,
        }
    }

    fn collection(&self, parent_id: &str) -> String {
        format!("{}/{parent_id}/{}", self.parent, self.path)
    }

    /// GET /{parent}/{parent_id}/{path}
    pub async fn list(&self, parent_id: &str, params: Value) -> Result<Value> {
        self.client
            .call(&self.collection(parent_id), &params, Method::GET)
            .await
    }

    /// GET /{parent}/{parent_id}/{path}/{id}
    pub async fn get(&self, parent_id: &str, id: &str, params: Value) -> Result<Value> {
        self.client
            .call(
                &format!("{}/{id}", self.collection(parent_id)),
                &params,
                Method::GET,
            )
            .await
    }

    /// POST /{parent}/{parent_id}/{path}
    pub async fn create(&self, parent_id: &str, fields: Value) -> Result<Value> {
        self.client
            .call(&self.collection(parent_id), &fields, Method::POST)
            .await
    }

    /// PATCH /{parent}/{parent_id}/{path}/{id}
    pub async fn update(&self, parent_id: &str, id: &str, fields: Value) -> Result<Value> {
        self.client
            .call(
                &format!("{}/{id}", self.collection(parent_id)),
                &fields,
                Method::PATCH,
            )
            .await
    }

    /// DELETE /{parent}/{parent_id}/{path}/{id}
    pub async fn delete(&self, parent_id: &str, id: &str) -> Result<Value> {
        self.client
            .call(
                &format!("{}/{id}", self.collection(parent_id)),
                &Value::Null,
                Method::DELETE,
            )
            .await
    }
}

/// A namespace nested two identifiers deep,
/// `{root}/{root_id}/{parent}/{parent_id}/{path}` (order lines, product
/// variants).
#[derive(Debug, Clone)]
pub struct NestedResource {
    client: Arc<MailchimpClient>,
    root: &'static str,
    parent: &'static str,
    path: &'static str,
}

impl NestedResource {
    pub(crate) fn new(
        client: Arc<MailchimpClient>,
        root: &'static str,
        parent: &'static str,
        path: &'static str,
    ) -> Self {
        Self {
            client,
            root,
            parent,
            path,
        }
    }

    fn collection(&self, root_id: &str, parent_id: &str) -> String {
        format!(
            "{}/{root_id}/{}/{parent_id}/{}",
            self.root, self.parent, self.path
        )
    }

    /// GET /{root}/{root_id}/{parent}/{parent_id}/{path}
    pub async fn list(&self, root_id: &str, parent_id: &str, params: Value) -> Result<Value> {
        self.client
            .call(&self.collection(root_id, parent_id), &params, Method::GET)
            .await
    }

    /// GET /{root}/{root_id}/{parent}/{parent_id}/{path}/{id}
    pub async fn get(
        &self,
        root_id: &str,
        parent_id: &str,
        id: &str,
        params: Value,
    ) -> Result<Value> {
        self.client
            .call(
                &format!("{}/{id}", self.collection(root_id, parent_id)),
                &params,
                Method::GET,
            )
            .await
    }

    /// POST /{root}/{root_id}/{parent}/{parent_id}/{path}
    pub async fn create(&self, root_id: &str, parent_id: &str, fields: Value) -> Result<Value> {
        self.client
            .call(&self.collection(root_id, parent_id), &fields, Method::POST)
            .await
    }

    /// PATCH /{root}/{root_id}/{parent}/{parent_id}/{path}/{id}
    pub async fn update(
        &self,
        root_id: &str,
        parent_id: &str,
        id: &str,
        fields: Value,
    ) -> Result<Value> {
        self.client
            .call(
                &format!("{}/{id}", self.collection(root_id, parent_id)),
                &fields,
                Method::PATCH,
            )
            .await
    }

    /// DELETE /{root}/{root_id}/{parent}/{parent_id}/{path}/{id}
    pub async fn delete(&self, root_id: &str, parent_id: &str, id: &str) -> Result<Value> {
        self.client
            .call(
                &format!("{}/{id}", self.collection(root_id, parent_id)),
                &Value::Null,
                Method::DELETE,
            )
            .await
    }
}
