use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn participants() -> Value {
    json!([
        {"id": "p1", "name": "Alice"},
        {"id": "p2", "email": "bob@example.com"},
        {"id": "p3", "name": null, "email": null}
    ])
}

#[tokio::test]
async fn health_returns_no_content() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = server::router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn balances_summarize_a_room() {
    let (status, body) = post(
        server::router(),
        "/balances",
        json!({
            "participants": participants(),
            "viewer": "p2",
            "expenses": [{
                "id": "e1",
                "amount": "30.00",
                "paid_by": "p1",
                "description": "Dinner",
                "split_type": "EQUAL",
                "splits": [
                    {"participant_id": "p1", "amount": 10},
                    {"participant_id": "p2", "amount": 10},
                    {"participant_id": "p3", "amount": 10}
                ]
            }]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["settled"], json!(false));
    assert_eq!(body["balances"][0]["label"], json!("+$20.00"));
    assert_eq!(body["balances"][2]["name"], json!("Unknown"));
    assert_eq!(body["viewer"]["status"], json!("owes"));

    let settlements = body["settlements"].as_array().unwrap();
    assert_eq!(settlements.len(), 2);
    assert_eq!(settlements[0]["from"], json!("p2"));
    assert_eq!(settlements[0]["to"], json!("p1"));
    assert_eq!(settlements[0]["from_name"], json!("bob@example.com"));
    assert_eq!(settlements[1]["from"], json!("p3"));
}

#[tokio::test]
async fn settlements_from_supplied_balances() {
    let (status, body) = post(
        server::router(),
        "/settlements",
        json!({
            "balances": [
                {"participant_id": "p1", "amount": "30"},
                {"participant_id": "p2", "amount": "20"},
                {"participant_id": "p3", "amount": "-25"},
                {"participant_id": "p4", "amount": "-25"}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let pairs: Vec<(String, String)> = body["settlements"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| {
            (
                s["from"].as_str().unwrap().to_string(),
                s["to"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        pairs,
        [
            ("p3".to_string(), "p1".to_string()),
            ("p4".to_string(), "p1".to_string()),
            ("p4".to_string(), "p2".to_string()),
        ]
    );
}

#[tokio::test]
async fn validate_derives_equal_splits() {
    let (status, body) = post(
        server::router(),
        "/expenses/validate",
        json!({
            "participants": participants(),
            "draft": {
                "amount": "9.00",
                "description": "Taxi",
                "paid_by": "p1",
                "split_type": "EQUAL",
                "selected": ["p1", "p2", "p3"]
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["splits"].as_array().unwrap().len(), 3);
    let share: f64 = body["splits"][0]["amount"].as_str().unwrap().parse().unwrap();
    assert_eq!(share, 3.0);
    assert!(!body["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn validate_rejects_unbalanced_custom_splits() {
    let (status, body) = post(
        server::router(),
        "/expenses/validate",
        json!({
            "participants": participants(),
            "draft": {
                "amount": "20.00",
                "description": "Groceries",
                "paid_by": "p1",
                "split_type": "CUSTOM",
                "splits": [{"participant_id": "p2", "amount": "5.00"}]
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("sum to the total"));
}

#[tokio::test]
async fn validate_rejects_unknown_payer() {
    let (status, _) = post(
        server::router(),
        "/expenses/validate",
        json!({
            "participants": participants(),
            "draft": {"amount": "5", "description": "Coffee", "paid_by": "ghost"}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let (status, body) = post(server::router(), "/balances", json!({"expenses": 3})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn oversized_amounts_are_rejected() {
    let max = "79228162514264337593543950335";
    let expense = |id: &str| {
        json!({
            "id": id,
            "amount": max,
            "paid_by": "p1",
            "split_type": "CUSTOM",
            "splits": [{"participant_id": "p2", "amount": max}]
        })
    };

    let (status, body) = post(
        server::router(),
        "/balances",
        json!({"participants": participants(), "expenses": [expense("e1"), expense("e2")]}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("at most"));

    let (status, _) = post(
        server::router(),
        "/settlements",
        json!({"balances": [
            {"participant_id": "p1", "amount": max},
            {"participant_id": "p2", "amount": format!("-{max}")}
        ]}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = post(
        server::router(),
        "/expenses/validate",
        json!({
            "participants": participants(),
            "draft": {"amount": max, "description": "Yacht", "paid_by": "p1"}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
