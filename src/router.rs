use crate::handlers::{
    auth::{index, login_form, login_submit, logout},
    courses::{add_course_form, add_course_submit, list_courses},
    dashboard::dashboard,
    students::{add_student_form, add_student_submit, list_students},
};
use crate::state::AppState;
use axum::{Router, routing::get};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer,
};

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Public pages
        .route("/", get(index))
        .route("/login", get(login_form).post(login_submit))
        .route("/logout", get(logout))
        // Admin pages (session gated via the AdminSession extractor)
        .route("/dashboard", get(dashboard))
        .route("/students", get(list_students))
        .route("/add_student", get(add_student_form).post(add_student_submit))
        .route("/courses", get(list_courses))
        .route("/add_course", get(add_course_form).post(add_course_submit))
        // Static assets
        .nest_service("/static", ServeDir::new("static"))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30))),
        )
        .with_state(state)
}
