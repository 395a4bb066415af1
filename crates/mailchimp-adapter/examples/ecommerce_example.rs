/*
[INPUT]:  MAILCHIMP_API_KEY and optional MAILCHIMP_STORE_ID environment variables
[OUTPUT]: E-commerce store, order, and product walkthrough
[POS]:    Examples - e-commerce reads
[UPDATE]: When e-commerce endpoints change
*/

use mailchimp_adapter::Mailchimp;
use serde_json::json;

/// Example: Walk the e-commerce store tree
///
/// Expects MAILCHIMP_API_KEY in the environment; set MAILCHIMP_STORE_ID to
/// also read one store's orders and products.
#[tokio::main]
async fn main() {
    println!("=== Mailchimp E-commerce Example ===\n");

    let api_key = match std::env::var("MAILCHIMP_API_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!("MAILCHIMP_API_KEY is not set");
            return;
        }
    };

    let client = match Mailchimp::new(&api_key) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    println!("Fetching stores...");
    match client.ecommerce.stores.list(json!({"count": 10})).await {
        Ok(stores) => println!("✓ Stores: {}", stores),
        Err(e) => println!("✗ Error: {}", e),
    }

    let store_id = match std::env::var("MAILCHIMP_STORE_ID") {
        Ok(id) => id,
        Err(_) => {
            println!("\nMAILCHIMP_STORE_ID not set, stopping after the store listing");
            return;
        }
    };

    println!("\nFetching orders for store {}...", store_id);
    match client.ecommerce.orders.list(&store_id, json!({"count": 5})).await {
        Ok(orders) => println!("✓ Orders: {}", orders),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nFetching products for store {}...", store_id);
    match client.ecommerce.products.list(&store_id, json!({"count": 5})).await {
        Ok(products) => println!("✓ Products: {}", products),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ E-commerce example complete");
}
