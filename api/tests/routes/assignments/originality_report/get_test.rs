#[cfg(test)]
mod get_originality_report_tests {
    use crate::helpers::app::make_test_app;
    use api::auth::generate_jwt;
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use chrono::{TimeZone, Utc};
    use db::models::{
        assignment::Model as AssignmentModel,
        course::Model as CourseModel,
        course_feature::{Feature, Model as CourseFeatureModel},
        originality_report::Model as ReportModel,
        submission::Model as SubmissionModel,
        submission_attachment::Model as AttachmentModel,
        user::Model as UserModel,
        user_course_role::{Model as UserCourseRoleModel, Role},
    };
    use sea_orm::DatabaseConnection;
    use serde_json::Value;
    use tower::ServiceExt;

    struct TestData {
        teacher_user: UserModel,
        student_user: UserModel,
        course: CourseModel,
        assignment: AssignmentModel,
        submission: SubmissionModel,
        attachment: AttachmentModel,
    }

    async fn setup_test_data(db: &DatabaseConnection) -> TestData {
        let course = CourseModel::create(db, "CS102", "Data Structures", 2026)
            .await
            .expect("Failed to create test course");

        let teacher_user = UserModel::create(db, "teacher", "teacher@test.com", "password", false)
            .await
            .unwrap();
        let student_user = UserModel::create(db, "student", "student@test.com", "password", false)
            .await
            .unwrap();

        UserCourseRoleModel::assign_user_to_course(db, teacher_user.id, course.id, Role::Teacher)
            .await
            .unwrap();
        UserCourseRoleModel::assign_user_to_course(db, student_user.id, course.id, Role::Student)
            .await
            .unwrap();

        CourseFeatureModel::set_enabled(db, course.id, Feature::PlagiarismDetection, true)
            .await
            .unwrap();

        let assignment = AssignmentModel::create(
            db,
            course.id,
            "Assignment 1",
            None,
            Utc.with_ymd_and_hms(2026, 8, 31, 23, 59, 59).unwrap(),
        )
        .await
        .unwrap();

        let submission = SubmissionModel::create(db, assignment.id, student_user.id, 1)
            .await
            .unwrap();

        let attachment = AttachmentModel::create(db, submission.id, "essay.pdf", None, 2048)
            .await
            .unwrap();

        TestData {
            teacher_user,
            student_user,
            course,
            assignment,
            submission,
            attachment,
        }
    }

    fn make_get_request(
        user: &UserModel,
        assignment_id: i64,
        submission_id: i64,
        report_id: i64,
    ) -> Request<AxumBody> {
        let (token, _) = generate_jwt(user.id, user.admin);
        let uri = format!(
            "/api/assignments/{}/submissions/{}/originality_report/{}",
            assignment_id, submission_id, report_id
        );

        Request::builder()
            .method("GET")
            .uri(&uri)
            .header("Authorization", format!("Bearer {}", token))
            .body(AxumBody::empty())
            .unwrap()
    }

    /// Test Case: A report created over HTTP reads back with the literal
    /// values supplied
    #[tokio::test]
    async fn test_get_originality_report_round_trip() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let (token, _) = generate_jwt(data.teacher_user.id, data.teacher_user.admin);
        let body = serde_json::json!({
            "originality_report": {
                "file_id": data.attachment.id,
                "originality_score": 0.16,
                "originality_report_file_id": 23,
                "originality_report_url": "http://www.example.com/report",
                "originality_report_lti_url": "http://www.my-tool.com/report"
            }
        });
        let create_req = Request::builder()
            .method("POST")
            .uri(format!(
                "/api/assignments/{}/submissions/{}/originality_report",
                data.assignment.id, data.submission.id
            ))
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(AxumBody::from(body.to_string()))
            .unwrap();

        let create_response = app.clone().oneshot(create_req).await.unwrap();
        assert_eq!(create_response.status(), StatusCode::CREATED);
        let created: Value = serde_json::from_slice(
            &axum::body::to_bytes(create_response.into_body(), usize::MAX)
                .await
                .unwrap(),
        )
        .unwrap();
        let report_id = created["id"].as_i64().unwrap();

        let req = make_get_request(
            &data.teacher_user,
            data.assignment.id,
            data.submission.id,
            report_id,
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["id"], report_id);
        assert_eq!(json["file_id"], data.attachment.id);
        assert!((json["originality_score"].as_f64().unwrap() - 0.16).abs() < 1e-9);
        assert_eq!(json["originality_report_file_id"], 23);
        assert_eq!(
            json["originality_report_url"],
            "http://www.example.com/report"
        );
        assert_eq!(
            json["originality_report_lti_url"],
            "http://www.my-tool.com/report"
        );
    }

    /// Test Case: Unknown report id
    #[tokio::test]
    async fn test_get_originality_report_not_found() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let req = make_get_request(
            &data.teacher_user,
            data.assignment.id,
            data.submission.id,
            999999,
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Originality report 999999 not found.");
    }

    /// Test Case: Report belonging to a different submission is not visible
    /// under this path
    #[tokio::test]
    async fn test_get_originality_report_scoped_to_submission() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let report = ReportModel::create_report(
            app_state.db(),
            data.submission.id,
            data.attachment.id,
            0.7,
            None,
            None,
            None,
        )
        .await
        .unwrap();

        let other_submission = SubmissionModel::create(
            app_state.db(),
            data.assignment.id,
            data.teacher_user.id,
            1,
        )
        .await
        .unwrap();

        let req = make_get_request(
            &data.teacher_user,
            data.assignment.id,
            other_submission.id,
            report.id,
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Test Case: Students cannot read reports
    #[tokio::test]
    async fn test_get_originality_report_forbidden_as_student() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let report = ReportModel::create_report(
            app_state.db(),
            data.submission.id,
            data.attachment.id,
            0.4,
            None,
            None,
            None,
        )
        .await
        .unwrap();

        let req = make_get_request(
            &data.student_user,
            data.assignment.id,
            data.submission.id,
            report.id,
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }

    /// Test Case: Feature flag off hides the endpoint output entirely
    #[tokio::test]
    async fn test_get_originality_report_forbidden_when_feature_disabled() {
        let (app, app_state) = make_test_app().await;
        let data = setup_test_data(app_state.db()).await;

        let report = ReportModel::create_report(
            app_state.db(),
            data.submission.id,
            data.attachment.id,
            0.4,
            None,
            None,
            None,
        )
        .await
        .unwrap();

        CourseFeatureModel::set_enabled(
            app_state.db(),
            data.course.id,
            Feature::PlagiarismDetection,
            false,
        )
        .await
        .unwrap();

        let req = make_get_request(
            &data.teacher_user,
            data.assignment.id,
            data.submission.id,
            report.id,
        );
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
