use askama::Template;
use axum::extract::State;
use model::entities::prelude::{Course, Grade, Student};
use sea_orm::{EntityTrait, PaginatorTrait};
use tracing::instrument;

use crate::auth::AdminSession;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub total_students: u64,
    pub total_courses: u64,
    pub total_grades: u64,
}

/// Aggregate row counts, computed fresh on every request.
#[instrument(skip_all)]
pub async fn dashboard(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<DashboardTemplate, AppError> {
    let total_students = Student::find().count(&state.db).await?;
    let total_courses = Course::find().count(&state.db).await?;
    let total_grades = Grade::find().count(&state.db).await?;

    Ok(DashboardTemplate {
        total_students,
        total_courses,
        total_grades,
    })
}
