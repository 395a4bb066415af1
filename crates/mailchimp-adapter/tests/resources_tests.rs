/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for namespace path building
[POS]:    Integration tests - resource namespace tree
[UPDATE]: When namespaces or path templates change
*/

mod common;

use common::{setup_mock_server, test_client};
use serde_json::{Value, json};
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_ok(server: &MockServer, verb: &str, expected_path: &str) {
    Mock::given(method(verb))
        .and(path(expected_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_root_info_hits_the_api_root() {
    let server = setup_mock_server().await;
    mount_ok(&server, "GET", "/").await;

    let client = test_client(&server);
    assert_ok!(client.root.info(json!({})).await);
}

#[tokio::test]
async fn test_lists_update_uses_patch() {
    let server = setup_mock_server().await;
    let fields = json!({"name": "renamed"});
    Mock::given(method("PATCH"))
        .and(path("/lists/l1"))
        .and(body_json(&fields))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "l1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    assert_ok!(client.lists.update("l1", fields).await);
}

#[tokio::test]
async fn test_list_segments_path() {
    let server = setup_mock_server().await;
    mount_ok(&server, "GET", "/lists/l1/segments/s9").await;

    let client = test_client(&server);
    assert_ok!(client.lists.segments.get("l1", "s9", json!({})).await);
}

#[tokio::test]
async fn test_campaign_send_action_path() {
    let server = setup_mock_server().await;
    mount_ok(&server, "POST", "/campaigns/c1/actions/send").await;

    let client = test_client(&server);
    assert_ok!(client.campaigns.send("c1").await);
}

#[tokio::test]
async fn test_campaign_content_roundtrip_paths() {
    let server = setup_mock_server().await;
    mount_ok(&server, "GET", "/campaigns/c1/content").await;
    mount_ok(&server, "PUT", "/campaigns/c1/content").await;

    let client = test_client(&server);
    assert_ok!(client.campaigns.get_content("c1", json!({})).await);
    assert_ok!(
        client
            .campaigns
            .set_content("c1", json!({"html": "<p>hi</p>"}))
            .await
    );
}

#[tokio::test]
async fn test_campaign_folders_path() {
    let server = setup_mock_server().await;
    mount_ok(&server, "GET", "/campaign-folders").await;

    let client = test_client(&server);
    assert_ok!(client.campaign_folders.list(json!({})).await);
}

#[tokio::test]
async fn test_automation_action_paths() {
    let server = setup_mock_server().await;
    mount_ok(&server, "POST", "/automations/w1/actions/start-all-emails").await;
    mount_ok(&server, "POST", "/automations/w1/actions/pause-all-emails").await;
    mount_ok(&server, "GET", "/automations/w1/emails").await;

    let client = test_client(&server);
    assert_ok!(client.automations.start_all_emails("w1").await);
    assert_ok!(client.automations.pause_all_emails("w1").await);
    assert_ok!(client.automations.emails("w1", json!({})).await);
}

#[tokio::test]
async fn test_authorized_apps_and_batches_paths() {
    let server = setup_mock_server().await;
    mount_ok(&server, "GET", "/authorized-apps").await;
    mount_ok(&server, "GET", "/batches/b1").await;

    let client = test_client(&server);
    assert_ok!(client.authorized_apps.list(json!({})).await);
    assert_ok!(client.batches.get("b1", json!({})).await);
}

#[tokio::test]
async fn test_conversation_messages_path() {
    let server = setup_mock_server().await;
    mount_ok(&server, "GET", "/conversations/conv1/messages").await;

    let client = test_client(&server);
    assert_ok!(client.conversations.messages.list("conv1", json!({})).await);
}

#[tokio::test]
async fn test_ecommerce_store_tree_paths() {
    let server = setup_mock_server().await;
    mount_ok(&server, "POST", "/ecommerce/stores").await;
    mount_ok(&server, "GET", "/ecommerce/stores/s1/carts").await;
    mount_ok(&server, "GET", "/ecommerce/stores/s1/customers/cust1").await;
    mount_ok(&server, "PATCH", "/ecommerce/stores/s1/orders/o1").await;

    let client = test_client(&server);
    assert_ok!(
        client
            .ecommerce
            .stores
            .create(json!({"id": "s1", "name": "shop"}))
            .await
    );
    assert_ok!(client.ecommerce.carts.list("s1", json!({})).await);
    assert_ok!(
        client
            .ecommerce
            .customers
            .get("s1", "cust1", json!({}))
            .await
    );
    assert_ok!(
        client
            .ecommerce
            .orders
            .update("s1", "o1", json!({"financial_status": "paid"}))
            .await
    );
}

#[tokio::test]
async fn test_product_variants_compose_both_parent_ids() {
    let server = setup_mock_server().await;
    mount_ok(&server, "PATCH", "/ecommerce/stores/s1/products/p1/variants/v1").await;

    let client = test_client(&server);
    assert_ok!(
        client
            .ecommerce
            .products
            .variants
            .update("s1", "p1", "v1", json!({"price": 10.5}))
            .await
    );
}

#[tokio::test]
async fn test_order_line_delete_returns_null_on_empty_body() {
    let server = setup_mock_server().await;
    Mock::given(method("DELETE"))
        .and(path("/ecommerce/stores/s1/orders/o1/lines/l1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let response = assert_ok!(client.ecommerce.orders.lines.delete("s1", "o1", "l1").await);
    assert_eq!(response, Value::Null);
}

#[tokio::test]
async fn test_file_manager_paths() {
    let server = setup_mock_server().await;
    mount_ok(&server, "GET", "/file-manager/files").await;
    mount_ok(&server, "POST", "/file-manager/folders").await;

    let client = test_client(&server);
    assert_ok!(client.file_manager.files.list(json!({})).await);
    assert_ok!(
        client
            .file_manager
            .folders
            .create(json!({"name": "assets"}))
            .await
    );
}
