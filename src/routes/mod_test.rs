use super::*;
use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use tower::ServiceExt;

fn test_app() -> Router {
    let options = LeptosOptions::builder().output_name("schoolsync").build();
    app(options)
}

async fn get_body(router: Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn healthz_is_ok() {
    let (status, body) = get_body(api_routes(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn roles_endpoint_lists_three_descriptors() {
    let (status, body) = get_body(api_routes(), "/api/roles").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["student", "parent", "teacher"]);
}

#[tokio::test]
async fn role_endpoint_rejects_unknown_id() {
    let (status, body) = get_body(api_routes(), "/api/roles/principal").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("unknown role: principal"));
}

#[tokio::test]
async fn landing_page_renders_cards_and_admin_link() {
    let (status, body) = get_body(test_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"href="/admin""#));
    for route in ["/student", "/parent", "/teacher"] {
        assert!(body.contains(&format!(r#"href="{route}""#)), "{route}");
    }
    assert_eq!(body.matches("data-role=").count(), 3);
}

#[tokio::test]
async fn destination_routes_are_not_served_here() {
    let (status, _) = get_body(test_app(), "/student").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
