use httpmock::prelude::*;
use httpmock::Method::PATCH;
use planka_boards::{
    connect, ClientConfig, CreateBoardOptions, HttpBoardService, PlankaError, UpdateBoardOptions,
};
use serde_json::{json, Value};

const TOKEN: &str = "test-token";

fn service_for(server: &MockServer) -> HttpBoardService {
    let config = ClientConfig::new(server.base_url())
        .with_access_token(TOKEN)
        .with_admin_email("admin@example.com");
    connect(&config).unwrap()
}

fn board(id: &str, project_id: &str, name: &str, position: f64) -> Value {
    json!({
        "id": id,
        "projectId": project_id,
        "name": name,
        "position": position,
        "createdAt": "2024-05-01T10:00:00.000Z",
        "updatedAt": null
    })
}

/// 讓佈建步驟全部成功的 mocks，回傳 (users, membership, lists, labels)
async fn provisioning_mocks(server: &MockServer) -> (httpmock::Mock<'_>, httpmock::Mock<'_>, httpmock::Mock<'_>, httpmock::Mock<'_>) {
    let users = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/users");
            then.status(200).json_body(json!({
                "items": [
                    {"id": "u-dev", "email": "dev@example.com", "name": "Dev", "isAdmin": false},
                    {"id": "u-admin", "email": "admin@example.com", "name": "Admin", "isAdmin": true}
                ]
            }));
        })
        .await;

    let membership = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/boards/b1/memberships")
                .json_body(json!({"userId": "u-admin", "role": "editor"}));
            then.status(200).json_body(json!({
                "item": {"id": "m1", "boardId": "b1", "userId": "u-admin", "role": "editor"}
            }));
        })
        .await;

    let lists = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/boards/b1/lists");
            then.status(200).json_body(json!({
                "item": {"id": "l1", "boardId": "b1", "name": "Backlog", "position": 65535.0}
            }));
        })
        .await;

    let labels = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/boards/b1/labels");
            then.status(200).json_body(json!({
                "item": {"id": "lb1", "boardId": "b1", "name": "P0: Critical", "color": "berry-red", "position": 65535.0}
            }));
        })
        .await;

    (users, membership, lists, labels)
}

#[tokio::test]
async fn test_create_board_with_default_position_provisions_everything() {
    let server = MockServer::start_async().await;

    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/projects/p1/boards")
                .header("authorization", "Bearer test-token")
                .json_body(json!({"name": "Roadmap", "position": 65535.0}));
            then.status(200)
                .json_body(json!({"item": board("b1", "p1", "Roadmap", 65535.0), "included": {}}));
        })
        .await;
    let (users, membership, lists, labels) = provisioning_mocks(&server).await;

    let service = service_for(&server);
    let (board, report) = service
        .create_board_with_report(CreateBoardOptions::new("p1", "Roadmap"))
        .await
        .unwrap();

    assert_eq!(board.id, "b1");
    assert_eq!(board.name, "Roadmap");
    assert_eq!(board.position, 65535.0);

    create.assert_async().await;
    users.assert_async().await;
    membership.assert_async().await;
    lists.assert_hits_async(6).await;
    labels.assert_hits_async(11).await;

    assert!(report.is_complete());
    assert_eq!(report.attempted, 18);
    assert_eq!(report.succeeded, 18);
    assert_eq!(report.membership.unwrap().user_id, "u-admin");
}

#[tokio::test]
async fn test_create_board_returns_board_when_provisioning_fails() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/projects/p1/boards");
            then.status(200)
                .json_body(json!({"item": board("b1", "p1", "Roadmap", 131070.0)}));
        })
        .await;
    let users = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/users");
            then.status(500).body("users unavailable");
        })
        .await;
    let lists = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/boards/b1/lists");
            then.status(500).body("lists unavailable");
        })
        .await;
    let labels = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/boards/b1/labels");
            then.status(422).json_body(json!({"code": "E_UNPROCESSABLE"}));
        })
        .await;

    let service = service_for(&server);
    let board = service
        .create_board(CreateBoardOptions::new("p1", "Roadmap").with_position(131070.0))
        .await
        .unwrap();

    assert_eq!(board.id, "b1");
    assert_eq!(board.position, 131070.0);

    users.assert_async().await;
    // every item is still attempted after earlier failures
    lists.assert_hits_async(6).await;
    labels.assert_hits_async(11).await;
}

#[tokio::test]
async fn test_create_board_wraps_remote_failure() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/projects/missing/boards");
            then.status(404).body("Project not found");
        })
        .await;
    let lists = server
        .mock_async(|when, then| {
            when.method(POST).path_contains("/lists");
            then.status(200);
        })
        .await;

    let service = service_for(&server);
    let err = service
        .create_board(CreateBoardOptions::new("missing", "Roadmap"))
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("Failed to create board:"));
    assert!(err.to_string().contains("Project not found"));
    match err {
        PlankaError::BoardCreationError { source } => {
            assert!(matches!(*source, PlankaError::HttpStatusError { status: 404, .. }));
        }
        other => panic!("expected board creation error, got {:?}", other),
    }
    lists.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_create_board_wraps_malformed_response() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/projects/p1/boards");
            then.status(200).json_body(json!({"items": []}));
        })
        .await;

    let service = service_for(&server);
    let err = service
        .create_board(CreateBoardOptions::new("p1", "Roadmap"))
        .await
        .unwrap_err();

    match err {
        PlankaError::BoardCreationError { source } => {
            assert!(matches!(*source, PlankaError::ValidationError(_)));
        }
        other => panic!("expected board creation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_boards_filters_included_boards_by_project() {
    let server = MockServer::start_async().await;

    let projects = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/projects");
            then.status(200).json_body(json!({
                "items": [{"id": "p1", "name": "Alpha"}, {"id": "p2", "name": "Beta"}],
                "included": {
                    "boards": [
                        board("b1", "p1", "Roadmap", 65535.0),
                        board("b2", "p2", "Ops", 65535.0),
                        board("b3", "p1", "Bugs", 131070.0)
                    ]
                }
            }));
        })
        .await;

    let service = service_for(&server);
    let boards = service.get_boards("p1").await;

    projects.assert_async().await;
    let ids: Vec<&str> = boards.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["b1", "b3"]);
    assert!(boards.iter().all(|b| b.project_id == "p1"));

    assert!(service.get_boards("p3").await.is_empty());
}

#[tokio::test]
async fn test_get_boards_returns_empty_without_included_boards() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/projects");
            then.status(200)
                .json_body(json!({"items": [{"id": "p1"}], "included": {"users": []}}));
        })
        .await;

    let service = service_for(&server);
    assert!(service.get_boards("p1").await.is_empty());
}

#[tokio::test]
async fn test_get_boards_returns_empty_on_server_error() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/projects");
            then.status(500).body("internal error");
        })
        .await;

    let service = service_for(&server);
    assert!(service.get_boards("p1").await.is_empty());
}

#[tokio::test]
async fn test_get_board() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/boards/b1");
            then.status(200).json_body(json!({
                "item": board("b1", "p1", "Roadmap", 65535.0),
                "included": {"lists": [], "labels": []}
            }));
        })
        .await;

    let service = service_for(&server);
    let board = service.get_board("b1").await.unwrap();

    mock.assert_async().await;
    assert_eq!(board.id, "b1");
    assert_eq!(board.project_id, "p1");
}

#[tokio::test]
async fn test_get_board_rejects_response_without_item() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/boards/b1");
            then.status(200).json_body(json!({"board": board("b1", "p1", "Roadmap", 65535.0)}));
        })
        .await;

    let service = service_for(&server);
    let err = service.get_board("b1").await.unwrap_err();
    assert!(matches!(err, PlankaError::ValidationError(_)));
}

#[tokio::test]
async fn test_update_board_never_sends_project_id() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(PATCH)
                .path("/api/boards/b1")
                .json_body(json!({"name": "Renamed", "position": 196605.0}));
            then.status(200)
                .json_body(json!({"item": board("b1", "p1", "Renamed", 196605.0)}));
        })
        .await;

    // 從含 projectId 的建立參數轉換而來
    let options = UpdateBoardOptions::from(
        CreateBoardOptions::new("p-other", "Renamed").with_position(196605.0),
    );

    let service = service_for(&server);
    let board = service.update_board("b1", options).await.unwrap();

    mock.assert_async().await;
    assert_eq!(board.name, "Renamed");
    assert_eq!(board.project_id, "p1");
}

#[tokio::test]
async fn test_update_board_sends_only_present_fields() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(PATCH)
                .path("/api/boards/b1")
                .json_body(json!({"name": "Renamed"}));
            then.status(200)
                .json_body(json!({"item": board("b1", "p1", "Renamed", 65535.0)}));
        })
        .await;

    let service = service_for(&server);
    let options = UpdateBoardOptions {
        name: Some("Renamed".to_string()),
        position: None,
    };
    service.update_board("b1", options).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_board_rejects_response_without_item() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(PATCH).path("/api/boards/b1");
            then.status(200).json_body(json!({}));
        })
        .await;

    let service = service_for(&server);
    let err = service
        .update_board("b1", UpdateBoardOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, PlankaError::ValidationError(_)));
}

#[tokio::test]
async fn test_delete_board() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/boards/b1");
            then.status(200).json_body(json!({"item": board("b1", "p1", "Roadmap", 65535.0)}));
        })
        .await;

    let service = service_for(&server);
    let result = service.delete_board("b1").await.unwrap();

    mock.assert_async().await;
    assert!(result.success);
    assert_eq!(serde_json::to_value(result).unwrap(), json!({"success": true}));
}

#[tokio::test]
async fn test_delete_board_surfaces_http_error() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/boards/b404");
            then.status(404).body("Board not found");
        })
        .await;

    let service = service_for(&server);
    let err = service.delete_board("b404").await.unwrap_err();
    assert!(matches!(err, PlankaError::HttpStatusError { status: 404, .. }));
}
