use httpmock::prelude::*;
use intercom::{ClientConfig, Intercom, IntercomError, PageParams};

#[tokio::test]
async fn test_services_share_one_transport() {
    let server = MockServer::start();
    let contacts_mock = server.mock(|when, then| {
        when.method(GET).path("/contacts").header("authorization", "Bearer test-token");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"data": [], "pages": {"page": 1}}));
    });
    let tags_mock = server.mock(|when, then| {
        when.method(GET).path("/tags").header("authorization", "Bearer test-token");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"tags": []}));
    });

    let client = Intercom::new(
        ClientConfig::new("test-token").with_base_url(server.base_url()),
    )
    .unwrap();

    client.contacts.list(PageParams::default()).await.unwrap();
    client.tags.list().await.unwrap();

    contacts_mock.assert();
    tags_mock.assert();
}

#[test]
fn test_rejects_invalid_config() {
    let err = Intercom::new(ClientConfig::new("")).unwrap_err();
    assert!(matches!(err, IntercomError::Config { .. }));
}
