use askama::Template;
use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use model::entities::course;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::auth::AdminSession;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "courses.html")]
pub struct CoursesTemplate {
    pub courses: Vec<course::Model>,
}

#[derive(Template)]
#[template(path = "add_course.html")]
pub struct AddCourseTemplate {
    pub error: Option<String>,
}

/// Fixed form fields for a new catalog entry.
#[derive(Debug, Deserialize, Serialize)]
pub struct AddCourseForm {
    pub course_code: String,
    pub course_name: String,
    #[serde(default)]
    pub credits: String,
    #[serde(default)]
    pub description: String,
}

/// Unconditional fetch-all listing, in storage order.
#[instrument(skip_all)]
pub async fn list_courses(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<CoursesTemplate, AppError> {
    let courses = course::Entity::find().all(&state.db).await?;
    Ok(CoursesTemplate { courses })
}

#[instrument(skip_all)]
pub async fn add_course_form(_session: AdminSession) -> AddCourseTemplate {
    AddCourseTemplate { error: None }
}

/// Insert a new course.
///
/// Any failure re-renders the blank form with one generic flash; the
/// specific cause only reaches the log.
#[instrument(skip_all)]
pub async fn add_course_submit(
    _session: AdminSession,
    State(state): State<AppState>,
    Form(form): Form<AddCourseForm>,
) -> Response {
    match insert_course(&state, form).await {
        Ok(created) => {
            info!(
                "Course added: id={} code={}",
                created.id, created.course_code
            );
            Redirect::to("/courses").into_response()
        }
        Err(err) => {
            error!("Failed to add course: {err}");
            AddCourseTemplate {
                error: Some("Error adding course!".to_string()),
            }
            .into_response()
        }
    }
}

async fn insert_course(state: &AppState, form: AddCourseForm) -> Result<course::Model, AppError> {
    // A blank credits field falls back to the schema default of 3.
    let credits = match form.credits.trim() {
        "" => NotSet,
        raw => Set(raw
            .parse::<i32>()
            .map_err(|e| AppError::Validation(format!("credits '{raw}': {e}")))?),
    };

    let new_course = course::ActiveModel {
        course_code: Set(form.course_code),
        course_name: Set(form.course_name),
        credits,
        description: Set(if form.description.trim().is_empty() {
            None
        } else {
            Some(form.description)
        }),
        ..Default::default()
    };

    new_course.insert(&state.db).await.map_err(AppError::from_db)
}
