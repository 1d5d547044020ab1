use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;
use vegan_cosmetics_api::routes::{
    create_app,
    health::{SERVICE_DESCRIPTION, root},
};

#[tokio::test]
async fn root_handler_returns_service_description() {
    let response = root().await;
    assert_eq!(response.0.message, SERVICE_DESCRIPTION);
    assert!(response.0.data.is_none());
}

#[tokio::test]
async fn root_route_answers_with_json_message() -> anyhow::Result<()> {
    let response = create_app()
        .oneshot(Request::builder().uri("/").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await?;
    let json: serde_json::Value = serde_json::from_slice(&body)?;
    assert_eq!(
        json,
        serde_json::json!({ "message": "API de E-commerce de Cosméticos Veganos" })
    );
    Ok(())
}

#[tokio::test]
async fn responses_carry_security_cors_and_request_id_headers() -> anyhow::Result<()> {
    let response = create_app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::ORIGIN, "https://shop.example.com")
                .body(Body::empty())?,
        )
        .await?;

    let headers = response.headers();
    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(headers[header::X_FRAME_OPTIONS], "SAMEORIGIN");
    assert_eq!(headers[header::REFERRER_POLICY], "no-referrer");
    assert_eq!(headers[header::X_DNS_PREFETCH_CONTROL], "off");
    assert!(headers.contains_key(header::STRICT_TRANSPORT_SECURITY));
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(headers.contains_key("x-request-id"));
    Ok(())
}

#[tokio::test]
async fn unknown_paths_get_a_json_not_found() -> anyhow::Result<()> {
    let response = create_app()
        .oneshot(Request::builder().uri("/products").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    let body = to_bytes(response.into_body(), usize::MAX).await?;
    let json: serde_json::Value = serde_json::from_slice(&body)?;
    assert_eq!(json["message"], "Not Found");
    assert_eq!(json["data"]["path"], "/products");
    Ok(())
}
