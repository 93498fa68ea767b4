use httpmock::prelude::*;
use intercom::{ApiClient, ClientConfig, IntercomError, SegmentApi, SegmentService};

fn segment_service(server: &MockServer) -> SegmentService<SegmentApi> {
    let client = ApiClient::new(
        ClientConfig::new("test-token").with_base_url(server.base_url()),
    )
    .unwrap();
    SegmentService::new(SegmentApi::new(client))
}

#[tokio::test]
async fn test_list() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/segments");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "segments": [
                    {"id": "56", "name": "Active", "created_at": 1389913941, "person_type": "user"},
                    {"id": "57", "name": "New", "created_at": 1389913941, "person_type": "user"}
                ]
            }));
    });

    let list = segment_service(&server).list().await.unwrap();

    mock.assert();
    assert_eq!(list.segments.len(), 2);
    assert_eq!(list.segments[0].name.as_deref(), Some("Active"));
    assert_eq!(list.segments[0].created_at, Some(1389913941));
}

#[tokio::test]
async fn test_find() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/segments/56");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"id": "56", "name": "Active", "person_type": "user"}));
    });

    let segment = segment_service(&server).find("56").await.unwrap();

    mock.assert();
    assert_eq!(segment.id.as_deref(), Some("56"));
    assert_eq!(segment.person_type.as_deref(), Some("user"));
}

#[tokio::test]
async fn test_find_missing_segment() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/segments/99");
        then.status(404)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "type": "error.list",
                "errors": [{"code": "not_found", "message": "Segment Not Found"}]
            }));
    });

    let err = segment_service(&server).find("99").await.unwrap_err();
    assert!(matches!(err, IntercomError::NotFound { .. }));
}
