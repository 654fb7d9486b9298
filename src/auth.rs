use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::response::Redirect;
use axum_extra::extract::cookie::{Cookie, Key, PrivateCookieJar, SameSite};

/// Name of the encrypted session cookie holding the signed-in admin's id.
pub const SESSION_COOKIE: &str = "admin_id";

/// Extractor guarding every route behind the admin login.
///
/// Succeeds when the request carries a readable session cookie; anything
/// else is sent back to the login form. This is the only access control in
/// the system.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession {
    pub admin_id: i32,
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let key = Key::from_ref(state);
        let jar = PrivateCookieJar::from_headers(&parts.headers, key);

        jar.get(SESSION_COOKIE)
            .and_then(|cookie| cookie.value().parse().ok())
            .map(|admin_id| AdminSession { admin_id })
            .ok_or_else(|| Redirect::to("/login"))
    }
}

/// Session cookie for a freshly authenticated admin. Browser-session
/// lifetime: no max-age, dropped when the browser closes.
pub fn session_cookie(admin_id: i32) -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE, admin_id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Empty clone of the session cookie, used to remove it on logout.
pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build(Cookie::new(SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
