//! Behaviour of `MondayClient` against a mock Monday server.

use monday::{ApiError, BoardId, GroupId, MondayApi, PulseId, UserId};
use monday_api::{ApiKey, ClientConfig, Credentials, MondayClient};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-key";
const USER_ID: u64 = 77;

fn client_for(server: &MockServer) -> MondayClient {
    client_with(ClientConfig::with_base_url(server.uri()))
}

fn client_with(config: ClientConfig) -> MondayClient {
    let credentials = Credentials::new(ApiKey::new(API_KEY).unwrap(), UserId::new(USER_ID));
    MondayClient::new(credentials, config).expect("client builds")
}

fn pulse_entry(id: u64, group: &str) -> Value {
    json!({
        "pulse": {
            "id": id,
            "name": format!("Pulse {id}"),
            "url": format!("https://acme.monday.com/pulses/{id}"),
            "board_id": 1,
            "created_at": "2018-01-01T00:00:00Z",
            "updated_at": "2018-01-02T00:00:00Z"
        },
        "board_meta": {"group_id": group, "position": id as f64},
        "column_values": [
            {"cid": "status", "title": "Status", "value": null}
        ]
    })
}

fn pulse_page(ids: std::ops::RangeInclusive<u64>) -> Value {
    Value::Array(ids.map(|id| pulse_entry(id, "topics")).collect())
}

#[tokio::test]
async fn boards_are_fetched_with_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/boards.json"))
        .and(query_param("api_key", API_KEY))
        .and(query_param("user_id", USER_ID.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "url": "https://acme.monday.com/boards/1",
            "id": 1,
            "name": "Operations Tasks",
            "description": null,
            "board_kind": "public",
            "created_at": "2018-01-01T00:00:00Z",
            "updated_at": "2018-01-01T00:00:00Z",
            "columns": [{"id": "status", "title": "Status", "type": "color", "labels": {"1": "Done"}}],
            "groups": [{"id": "topics", "title": "This Week", "color": "#fff"}]
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let boards = client_for(&server).boards().await.unwrap();

    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0].name, "Operations Tasks");
    assert_eq!(boards[0].groups[0].board_id, Some(BoardId::new(1)));
}

#[tokio::test]
async fn status_codes_map_to_typed_errors() {
    let server = MockServer::start().await;
    for (code, board) in [(401u16, 1u64), (402, 2), (404, 3), (500, 4)] {
        Mock::given(method("GET"))
            .and(path(format!("/v1/boards/{board}.json")))
            .respond_with(ResponseTemplate::new(code))
            .mount(&server)
            .await;
    }
    let client = client_for(&server);

    assert_eq!(client.board(BoardId::new(1)).await.unwrap_err(), ApiError::InvalidApiKey);
    assert_eq!(client.board(BoardId::new(2)).await.unwrap_err(), ApiError::PaymentRequired);
    assert_eq!(
        client.board(BoardId::new(3)).await.unwrap_err(),
        ApiError::NotFound {
            resource: "/v1/boards/3.json".to_string()
        }
    );
    assert_eq!(
        client.board(BoardId::new(4)).await.unwrap_err(),
        ApiError::UnexpectedStatus { status: 500 }
    );
}

#[tokio::test]
async fn created_status_is_successful() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/5.json"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": 5, "name": "Lin", "title": "PM"})),
        )
        .mount(&server)
        .await;

    let user = client_for(&server).user(UserId::new(5)).await.unwrap();
    assert_eq!(user.name, "Lin");
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).users().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { ref resource, .. } if resource == "/v1/users.json"));
}

#[tokio::test]
async fn unknown_column_type_fails_board_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/boards/9/columns.json"))
        .and(query_param("all_columns", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "where", "title": "Where", "type": "location"}
        ])))
        .mount(&server)
        .await;

    let err = client_for(&server).board_columns(BoardId::new(9)).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn pulses_are_paginated_until_a_short_page() {
    let server = MockServer::start().await;
    let resource = "/v1/boards/1/pulses.json";
    Mock::given(method("GET"))
        .and(path(resource))
        .and(query_param("per_page", "25"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pulse_page(1..=25)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(resource))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pulse_page(26..=28)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(resource))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let pulses = client_for(&server).board_pulses(BoardId::new(1)).await.unwrap();

    assert_eq!(pulses.len(), 28);
    assert_eq!(pulses.first().unwrap().id, PulseId::new(1));
    assert_eq!(pulses.last().unwrap().id, PulseId::new(28));
}

#[tokio::test]
async fn full_last_page_is_followed_by_an_empty_page() {
    let server = MockServer::start().await;
    let resource = "/v1/boards/1/pulses.json";
    Mock::given(method("GET"))
        .and(path(resource))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pulse_page(1..=25)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(resource))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let pulses = client_for(&server).board_pulses(BoardId::new(1)).await.unwrap();
    assert_eq!(pulses.len(), 25);
}

#[tokio::test]
async fn pagination_stops_at_the_page_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/boards/1/pulses.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pulse_page(1..=1)))
        .expect(3)
        .mount(&server)
        .await;

    let client = client_with(ClientConfig {
        page_size: 1,
        max_pages: 3,
        ..ClientConfig::with_base_url(server.uri())
    });
    let err = client.board_pulses(BoardId::new(1)).await.unwrap_err();

    assert_eq!(
        err,
        ApiError::PageLimitExceeded {
            resource: "/v1/boards/1/pulses.json".to_string(),
            pages: 3
        }
    );
}

#[tokio::test]
async fn move_posts_comma_separated_ids() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/boards/1/pulses/move.json"))
        .and(query_param("group_id", "done_group"))
        .and(query_param("pulse_ids", "3,5,8"))
        .and(query_param("api_key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .move_pulses(
            BoardId::new(1),
            &[PulseId::new(3), PulseId::new(5), PulseId::new(8)],
            &GroupId::new("done_group").unwrap(),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn moving_nothing_sends_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    client_for(&server)
        .move_pulses(BoardId::new(1), &[], &GroupId::new("g").unwrap())
        .await
        .unwrap();
}

#[tokio::test]
async fn groups_listing_requests_only_active_groups() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/boards/4/groups.json"))
        .and(query_param("show_archived", "false"))
        .and(query_param("show_deleted", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "a", "title": "This Week", "color": "#1", "board_id": 40},
            {"id": "b", "title": "Stale", "color": "#2", "archived": true}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let groups = client_for(&server).board_groups(BoardId::new(4)).await.unwrap();

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].board_id, Some(BoardId::new(4)));
}
