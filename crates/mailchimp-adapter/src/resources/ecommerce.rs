/*
[INPUT]:  Store, order, and product identifiers
[OUTPUT]: E-commerce store tree API calls (carts, customers, orders, products)
[POS]:    Resource layer - ecommerce namespace
[UPDATE]: When store sub-resources change
*/

use std::sync::Arc;

use serde_json::Value;

use crate::http::{MailchimpClient, Result};
use crate::resources::resource::{NestedResource, Resource, SubResource};

const STORES: &str = "ecommerce/stores";
const CARTS: &str = "carts";
const CUSTOMERS: &str = "customers";
const ORDERS: &str = "orders";
const LINES: &str = "lines";
const PRODUCTS: &str = "products";
const VARIANTS: &str = "variants";

/// The e-commerce tree: stores at the top, everything else keyed by store.
#[derive(Debug, Clone)]
pub struct Ecommerce {
    /// ecommerce/stores
    pub stores: Resource,
    /// ecommerce/stores/{store_id}/carts
    pub carts: SubResource,
    /// ecommerce/stores/{store_id}/customers
    pub customers: SubResource,
    /// ecommerce/stores/{store_id}/orders, with order lines nested
    pub orders: EcommerceOrders,
    /// ecommerce/stores/{store_id}/products, with variants nested
    pub products: EcommerceProducts,
}

impl Ecommerce {
    pub(crate) fn new(client: Arc<MailchimpClient>) -> Self {
        Self {
            stores: Resource::new(client.clone(), STORES),
            carts: SubResource::new(client.clone(), STORES, CARTS),
            customers: SubResource::new(client.clone(), STORES, CUSTOMERS),
            orders: EcommerceOrders::new(client.clone()),
            products: EcommerceProducts::new(client),
        }
    }
}

/// Orders within a store, with their line items one level deeper.
#[derive(Debug, Clone)]
pub struct EcommerceOrders {
    resource: SubResource,
    /// ecommerce/stores/{store_id}/orders/{order_id}/lines
    pub lines: NestedResource,
}

impl EcommerceOrders {
    fn new(client: Arc<MailchimpClient>) -> Self {
        Self {
            resource: SubResource::new(client.clone(), STORES, ORDERS),
            lines: NestedResource::new(client, STORES, ORDERS, LINES),
        }
    }

    /// GET /ecommerce/stores/{store_id}/orders
    pub async fn list(&self, store_id: &str, params: Value) -> Result<Value> {
        self.resource.list(store_id, params).await
    }

    /// GET /ecommerce/stores/{store_id}/orders/{order_id}
    pub async fn get(&self, store_id: &str, order_id: &str, params: Value) -> Result<Value> {
        self.resource.get(store_id, order_id, params).await
    }

    /// POST /ecommerce/stores/{store_id}/orders
    pub async fn create(&self, store_id: &str, fields: Value) -> Result<Value> {
        self.resource.create(store_id, fields).await
    }

    /// PATCH /ecommerce/stores/{store_id}/orders/{order_id}
    pub async fn update(&self, store_id: &str, order_id: &str, fields: Value) -> Result<Value> {
        self.resource.update(store_id, order_id, fields).await
    }

    /// DELETE /ecommerce/stores/{store_id}/orders/{order_id}
    pub async fn delete(&self, store_id: &str, order_id: &str) -> Result<Value> {
        self.resource.delete(store_id, order_id).await
    }
}

/// Products within a store, with their variants one level deeper.
#[derive(Debug, Clone)]
pub struct EcommerceProducts {
    resource: SubResource,
    /// ecommerce/stores/{store_id}/products/{product_id}/variants
    pub variants: NestedResource,
}

impl EcommerceProducts {
    fn new(client: Arc<MailchimpClient>) -> Self {
        Self {
            resource: SubResource::new(client.clone(), STORES, PRODUCTS),
            variants: NestedResource::new(client, STORES, PRODUCTS, VARIANTS),
        }
    }

    /// GET /ecommerce/stores/{store_id}/products
    pub async fn list(&self, store_id: &str, params: Value) -> Result<Value> {
        self.resource.list(store_id, params).await
    }

    /// GET /ecommerce/stores/{store_id}/products/{product_id}
    pub async fn get(&self, store_id: &str, product_id: &str, params: Value) -> Result<Value> {
        self.resource.get(store_id, product_id, params).await
    }

    /// POST /ecommerce/stores/{store_id}/products
    pub async fn create(&self, store_id: &str, fields: Value) -> Result<Value> {
        self.resource.create(store_id, fields).await
    }

    /// PATCH /ecommerce/stores/{store_id}/products/{product_id}
    pub async fn update(&self, store_id: &str, product_id: &str, fields: Value) -> Result<Value> {
        self.resource.update(store_id, product_id, fields).await
    }

    /// DELETE /ecommerce/stores/{store_id}/products/{product_id}
    pub async fn delete(&self, store_id: &str, product_id: &str) -> Result<Value> {
        self.resource.delete(store_id, product_id).await
    }
}
