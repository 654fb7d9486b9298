#[cfg(test)]
mod integration_tests {
    use crate::handlers::auth::LoginForm;
    use crate::handlers::courses::AddCourseForm;
    use crate::handlers::students::AddStudentForm;
    use crate::seed;
    use crate::test_utils::test_utils::{setup_test_app, setup_test_db, test_server};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use model::entities::prelude::{Admin, Course, Grade, Student};
    use sea_orm::{EntityTrait, PaginatorTrait};

    async fn login(server: &TestServer) {
        let response = server
            .post("/login")
            .form(&LoginForm {
                username: "admin".to_string(),
                password: "admin123".to_string(),
            })
            .await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/dashboard");
    }

    #[tokio::test]
    async fn test_landing_page_renders_for_anonymous_visitors() {
        let (app, _state) = setup_test_app().await;
        let server = test_server(app);

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("Admin login"));
    }

    #[tokio::test]
    async fn test_landing_page_redirects_signed_in_admins() {
        let (app, _state) = setup_test_app().await;
        let server = test_server(app);

        login(&server).await;

        let response = server.get("/").await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/dashboard");
    }

    #[tokio::test]
    async fn test_login_form_renders() {
        let (app, _state) = setup_test_app().await;
        let server = test_server(app);

        let response = server.get("/login").await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("Admin Login"));
    }

    #[tokio::test]
    async fn test_login_with_correct_credentials_opens_the_dashboard() {
        let (app, _state) = setup_test_app().await;
        let server = test_server(app);

        login(&server).await;

        let response = server.get("/dashboard").await;
        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("Dashboard"));
    }

    #[tokio::test]
    async fn test_login_with_wrong_password_never_sets_the_session() {
        let (app, _state) = setup_test_app().await;
        let server = test_server(app);

        let response = server
            .post("/login")
            .form(&LoginForm {
                username: "admin".to_string(),
                password: "wrong-password".to_string(),
            })
            .await;

        // The form re-renders with the generic notice
        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("Invalid username or password!"));

        // And protected pages still redirect
        let response = server.get("/dashboard").await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/login");
    }

    #[tokio::test]
    async fn test_login_with_unknown_username_never_sets_the_session() {
        let (app, _state) = setup_test_app().await;
        let server = test_server(app);

        let response = server
            .post("/login")
            .form(&LoginForm {
                username: "nobody".to_string(),
                password: "admin123".to_string(),
            })
            .await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("Invalid username or password!"));

        let response = server.get("/dashboard").await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/login");
    }

    #[tokio::test]
    async fn test_protected_routes_redirect_to_login_without_a_session() {
        let (app, _state) = setup_test_app().await;
        let server = test_server(app);

        for path in ["/dashboard", "/students", "/add_student", "/courses", "/add_course"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::SEE_OTHER);
            assert_eq!(response.header("location"), "/login", "route {path}");
        }
    }

    #[tokio::test]
    async fn test_dashboard_counts_match_the_seed_fixtures() {
        let (app, _state) = setup_test_app().await;
        let server = test_server(app);

        login(&server).await;

        let response = server.get("/dashboard").await;
        response.assert_status(StatusCode::OK);

        let body = response.text();
        assert!(body.contains("id=\"student-count\">6<"));
        assert!(body.contains("id=\"course-count\">8<"));
        assert!(body.contains("id=\"grade-count\">10<"));
    }

    #[tokio::test]
    async fn test_students_page_lists_the_seeded_records() {
        let (app, _state) = setup_test_app().await;
        let server = test_server(app);

        login(&server).await;

        let response = server.get("/students").await;
        response.assert_status(StatusCode::OK);

        let body = response.text();
        assert!(body.contains("john.doe@email.com"));
        assert!(body.contains("emily.davis@email.com"));
    }

    #[tokio::test]
    async fn test_add_student_inserts_and_redirects() {
        let (app, state) = setup_test_app().await;
        let server = test_server(app);

        login(&server).await;

        let response = server
            .post("/add_student")
            .form(&AddStudentForm {
                first_name: "Alice".to_string(),
                last_name: "Nguyen".to_string(),
                email: "alice.nguyen@email.com".to_string(),
                phone: "(555) 222-1111".to_string(),
                address: "12 Harbor Street, Boston, MA 02101".to_string(),
                date_of_birth: "2002-02-20".to_string(),
            })
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/students");

        let count = Student::find().count(&state.db).await.unwrap();
        assert_eq!(count, 7);

        let listing = server.get("/students").await;
        assert!(listing.text().contains("alice.nguyen@email.com"));
    }

    #[tokio::test]
    async fn test_add_student_with_duplicate_email_leaves_the_count_unchanged() {
        let (app, state) = setup_test_app().await;
        let server = test_server(app);

        login(&server).await;

        let response = server
            .post("/add_student")
            .form(&AddStudentForm {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                // Email already taken by a seeded record
                email: "john.doe@email.com".to_string(),
                phone: String::new(),
                address: String::new(),
                date_of_birth: "2000-05-15".to_string(),
            })
            .await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("Error adding student!"));

        let count = Student::find().count(&state.db).await.unwrap();
        assert_eq!(count, 6);
    }

    #[tokio::test]
    async fn test_add_student_with_malformed_date_flashes_the_generic_error() {
        let (app, state) = setup_test_app().await;
        let server = test_server(app);

        login(&server).await;

        let response = server
            .post("/add_student")
            .form(&AddStudentForm {
                first_name: "Bob".to_string(),
                last_name: "Lee".to_string(),
                email: "bob.lee@email.com".to_string(),
                phone: String::new(),
                address: String::new(),
                date_of_birth: "not-a-date".to_string(),
            })
            .await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("Error adding student!"));

        let count = Student::find().count(&state.db).await.unwrap();
        assert_eq!(count, 6);
    }

    #[tokio::test]
    async fn test_add_course_inserts_and_redirects() {
        let (app, state) = setup_test_app().await;
        let server = test_server(app);

        login(&server).await;

        let response = server
            .post("/add_course")
            .form(&AddCourseForm {
                course_code: "CS202".to_string(),
                course_name: "Data Structures".to_string(),
                credits: "4".to_string(),
                description: "Lists, trees, graphs, and their invariants.".to_string(),
            })
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/courses");

        let count = Course::find().count(&state.db).await.unwrap();
        assert_eq!(count, 9);

        let listing = server.get("/courses").await;
        assert!(listing.text().contains("CS202"));
    }

    #[tokio::test]
    async fn test_add_course_with_blank_credits_uses_the_schema_default() {
        let (app, state) = setup_test_app().await;
        let server = test_server(app);

        login(&server).await;

        let response = server
            .post("/add_course")
            .form(&AddCourseForm {
                course_code: "PHIL101".to_string(),
                course_name: "Introduction to Philosophy".to_string(),
                credits: String::new(),
                description: String::new(),
            })
            .await;

        response.assert_status(StatusCode::SEE_OTHER);

        let courses = Course::find().all(&state.db).await.unwrap();
        let created = courses
            .iter()
            .find(|c| c.course_code == "PHIL101")
            .expect("course was inserted");
        assert_eq!(created.credits, 3);
    }

    #[tokio::test]
    async fn test_add_course_with_duplicate_code_leaves_the_count_unchanged() {
        let (app, state) = setup_test_app().await;
        let server = test_server(app);

        login(&server).await;

        let response = server
            .post("/add_course")
            .form(&AddCourseForm {
                course_code: "CS101".to_string(),
                course_name: "Computer Science, Again".to_string(),
                credits: "3".to_string(),
                description: String::new(),
            })
            .await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("Error adding course!"));

        let count = Course::find().count(&state.db).await.unwrap();
        assert_eq!(count, 8);
    }

    #[tokio::test]
    async fn test_logout_drops_the_session() {
        let (app, _state) = setup_test_app().await;
        let server = test_server(app);

        login(&server).await;

        let response = server.get("/logout").await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/");

        let response = server.get("/dashboard").await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "/login");
    }

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let db = setup_test_db().await;

        seed::bootstrap(&db).await.expect("first bootstrap");
        seed::bootstrap(&db).await.expect("second bootstrap");

        assert_eq!(Admin::find().count(&db).await.unwrap(), 1);
        assert_eq!(Student::find().count(&db).await.unwrap(), 6);
        assert_eq!(Course::find().count(&db).await.unwrap(), 8);
        assert_eq!(Grade::find().count(&db).await.unwrap(), 10);
    }
}
