#[cfg(test)]
mod health_tests {
    use crate::helpers::app::make_test_app;
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check_is_public_and_ok() {
        let (app, _app_state) = make_test_app().await;

        let req = Request::builder()
            .method("GET")
            .uri("/api/health")
            .body(AxumBody::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], "OK");
    }
}
