use argon2::{Argon2, PasswordHash, PasswordVerifier};
use askama::Template;
use axum::Form;
use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::PrivateCookieJar;
use model::entities::admin;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::auth::{SESSION_COOKIE, clear_session_cookie, session_cookie};
use crate::error::AppError;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

/// Credentials submitted from the login form.
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Landing page; signed-in admins go straight to the dashboard.
#[instrument(skip_all)]
pub async fn index(jar: PrivateCookieJar) -> Response {
    if jar.get(SESSION_COOKIE).is_some() {
        return Redirect::to("/dashboard").into_response();
    }
    IndexTemplate.into_response()
}

#[instrument(skip_all)]
pub async fn login_form() -> LoginTemplate {
    LoginTemplate { error: None }
}

/// Verify the submitted credentials against the stored hash.
///
/// The notice shown on failure is identical for unknown usernames and
/// wrong passwords.
#[instrument(skip_all)]
pub async fn login_submit(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let admin = admin::Entity::find()
        .filter(admin::Column::Username.eq(form.username.as_str()))
        .one(&state.db)
        .await
        .map_err(AppError::from_db)?;

    if let Some(admin) = admin {
        if verify_password(&form.password, &admin.password_hash) {
            info!("Admin '{}' signed in", admin.username);
            let jar = jar.add(session_cookie(admin.id));
            return Ok((jar, Redirect::to("/dashboard")).into_response());
        }
    }

    warn!("Rejected login attempt for username '{}'", form.username);
    Ok(LoginTemplate {
        error: Some("Invalid username or password!".to_string()),
    }
    .into_response())
}

/// Drop the session cookie and return to the landing page.
#[instrument(skip_all)]
pub async fn logout(jar: PrivateCookieJar) -> (PrivateCookieJar, Redirect) {
    let jar = jar.remove(clear_session_cookie());
    (jar, Redirect::to("/"))
}

/// One-way verification; plaintext is never compared against the store.
fn verify_password(candidate: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
