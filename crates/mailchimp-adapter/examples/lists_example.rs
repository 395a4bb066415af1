/*
[INPUT]:  MAILCHIMP_API_KEY environment variable
[OUTPUT]: Account summary and audience list walkthrough
[POS]:    Examples - account and list reads
[UPDATE]: When list endpoints change
*/

use mailchimp_adapter::{Mailchimp, Method};
use serde_json::json;

/// Example: Read account info and audience lists
///
/// Expects MAILCHIMP_API_KEY in the environment, e.g. `abc123-us6`.
#[tokio::main]
async fn main() {
    println!("=== Mailchimp Lists Example ===\n");

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
    println!("✓ Client created for {}\n", client.client().base_url());

    // Account summary from the API root
    println!("Fetching account info...");
    match client.root.info(json!({"fields": "account_name,email"})).await {
        Ok(info) => println!("✓ Account: {}", info),
        Err(e) => println!("✗ Error: {}", e),
    }

    // First page of audience lists
    println!("\nFetching audience lists...");
    match client.lists.list(json!({"count": 10})).await {
        Ok(lists) => println!("✓ Lists: {}", lists),
        Err(e) => println!("✗ Error: {}", e),
    }

    // Raw call escape hatch for endpoints without a namespace method
    println!("\nPinging the API...");
    match client.call("ping", &json!({}), Method::GET).await {
        Ok(pong) => println!("✓ Ping: {}", pong),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Lists example complete");
}
