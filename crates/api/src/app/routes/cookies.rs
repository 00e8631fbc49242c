use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header, HeaderMap},
    response::{AppendHeaders, IntoResponse},
    routing::get,
    Json, Router,
};
use chrono::Utc;

use crate::app::services::AppServices;

pub const USER_PREFERENCE: &str = "user-preference";
pub const SESSION_ID: &str = "session-id";

const ONE_WEEK_SECS: u64 = 60 * 60 * 24 * 7;
const ONE_HOUR_SECS: u64 = 60 * 60;

pub fn router() -> Router {
    Router::new().route("/", get(read_and_set_cookies).delete(clear_cookies))
}

/// Report the cookies the client sent, then (re)issue both.
pub async fn read_and_set_cookies(
    Extension(services): Extension<Arc<AppServices>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let secure = services.config().secure_cookies();

    let body = serde_json::json!({
        "success": true,
        "message": "Cookies demo",
        "receivedCookies": {
            "userPreference": read_cookie(&headers, USER_PREFERENCE),
            "sessionId": read_cookie(&headers, SESSION_ID),
        },
    });

    let session = format!("session-{}", Utc::now().timestamp_millis());
    (
        AppendHeaders([
            (
                header::SET_COOKIE,
                set_cookie(USER_PREFERENCE, "dark-mode", ONE_WEEK_SECS, secure),
            ),
            (
                header::SET_COOKIE,
                set_cookie(SESSION_ID, &session, ONE_HOUR_SECS, secure),
            ),
        ]),
        Json(body),
    )
}

/// Expire both cookies.
pub async fn clear_cookies() -> impl IntoResponse {
    (
        AppendHeaders([
            (header::SET_COOKIE, expire_cookie(USER_PREFERENCE)),
            (header::SET_COOKIE, expire_cookie(SESSION_ID)),
        ]),
        Json(serde_json::json!({
            "success": true,
            "message": "Cookies cleared",
        })),
    )
}

/// Value of the first cookie called `name` across all `Cookie` headers.
fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.to_string())
}

fn set_cookie(name: &str, value: &str, max_age: u64, secure: bool) -> String {
    let mut cookie = format!("{name}={value}; Path=/; Max-Age={max_age}; HttpOnly");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

fn expire_cookie(name: &str) -> String {
    format!("{name}=; Path=/; Max-Age=0")
}
