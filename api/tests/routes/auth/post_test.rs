#[cfg(test)]
mod login_tests {
    use crate::helpers::app::make_test_app;
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use db::models::user::Model as UserModel;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn make_login_request(username: &str, password: &str) -> Request<AxumBody> {
        let body = json!({ "username": username, "password": password });

        Request::builder()
            .method("POST")
            .uri("/api/auth/login")
            .header("Content-Type", "application/json")
            .body(AxumBody::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_login_success_returns_token() {
        let (app, app_state) = make_test_app().await;
        let user = UserModel::create(
            app_state.db(),
            "lecturer1",
            "lecturer1@test.com",
            "strongpassword",
            false,
        )
        .await
        .unwrap();

        let response = app
            .oneshot(make_login_request("lecturer1", "strongpassword"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Login successful");
        assert_eq!(json["data"]["id"], user.id);
        assert_eq!(json["data"]["username"], "lecturer1");
        assert_eq!(json["data"]["admin"], false);
        assert!(!json["data"]["token"].as_str().unwrap().is_empty());
        assert!(json["data"]["expires_at"].is_string());
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_unauthorized() {
        let (app, app_state) = make_test_app().await;
        UserModel::create(
            app_state.db(),
            "lecturer1",
            "lecturer1@test.com",
            "strongpassword",
            false,
        )
        .await
        .unwrap();

        let response = app
            .oneshot(make_login_request("lecturer1", "wrongpassword"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid username or password");
    }

    #[tokio::test]
    async fn test_login_unknown_user_is_unauthorized() {
        let (app, _app_state) = make_test_app().await;

        let response = app
            .oneshot(make_login_request("ghost", "whatever"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
