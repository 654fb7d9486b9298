use askama::Template;
use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use chrono::{NaiveDate, Utc};
use model::entities::student;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

use crate::auth::AdminSession;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "students.html")]
pub struct StudentsTemplate {
    pub students: Vec<student::Model>,
}

#[derive(Template)]
#[template(path = "add_student.html")]
pub struct AddStudentTemplate {
    pub error: Option<String>,
}

/// Fixed form fields for a new student record.
#[derive(Debug, Deserialize, Serialize)]
pub struct AddStudentForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub date_of_birth: String,
}

/// Unconditional fetch-all listing, in storage order.
#[instrument(skip_all)]
pub async fn list_students(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<StudentsTemplate, AppError> {
    let students = student::Entity::find().all(&state.db).await?;
    Ok(StudentsTemplate { students })
}

#[instrument(skip_all)]
pub async fn add_student_form(_session: AdminSession) -> AddStudentTemplate {
    AddStudentTemplate { error: None }
}

/// Insert a new student record.
///
/// Any failure re-renders the blank form with one generic flash; the
/// specific cause only reaches the log.
#[instrument(skip_all)]
pub async fn add_student_submit(
    _session: AdminSession,
    State(state): State<AppState>,
    Form(form): Form<AddStudentForm>,
) -> Response {
    match insert_student(&state, form).await {
        Ok(created) => {
            info!("Student added: id={} email={}", created.id, created.email);
            Redirect::to("/students").into_response()
        }
        Err(err) => {
            error!("Failed to add student: {err}");
            AddStudentTemplate {
                error: Some("Error adding student!".to_string()),
            }
            .into_response()
        }
    }
}

async fn insert_student(
    state: &AppState,
    form: AddStudentForm,
) -> Result<student::Model, AppError> {
    let date_of_birth = parse_form_date("date_of_birth", &form.date_of_birth)?;

    let new_student = student::ActiveModel {
        first_name: Set(form.first_name),
        last_name: Set(form.last_name),
        email: Set(form.email),
        phone: Set(none_if_empty(form.phone)),
        address: Set(none_if_empty(form.address)),
        date_of_birth: Set(Some(date_of_birth)),
        enrollment_date: Set(Utc::now().date_naive()),
        ..Default::default()
    };

    new_student.insert(&state.db).await.map_err(AppError::from_db)
}

fn parse_form_date(field: &str, raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| AppError::Validation(format!("{field} '{raw}': {e}")))
}

fn none_if_empty(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_dates_parse_iso_only() {
        assert!(parse_form_date("date_of_birth", "2000-05-15").is_ok());
        assert!(matches!(
            parse_form_date("date_of_birth", "15/05/2000"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            parse_form_date("date_of_birth", ""),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn blank_optional_fields_become_null() {
        assert_eq!(none_if_empty(String::new()), None);
        assert_eq!(none_if_empty("   ".to_string()), None);
        assert_eq!(
            none_if_empty("(555) 123-4567".to_string()),
            Some("(555) 123-4567".to_string())
        );
    }
}
