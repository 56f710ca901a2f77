use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Redirect},
    routing::get,
    Form, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    pages,
    state::AppState,
    users::{dto::RegisterForm, repo_types::User},
};

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", get(user_list))
}

pub fn register_routes() -> Router<AppState> {
    Router::new().route("/register", get(register_form).post(register_process))
}

#[instrument(skip(state))]
pub async fn user_list(State(state): State<AppState>) -> Result<Html<String>, (StatusCode, String)> {
    let users = User::all(&state.db).await.map_err(|e| {
        error!(error = %e, "list users failed");
        internal(e)
    })?;
    Ok(Html(pages::user_list(&users)))
}

pub async fn register_form() -> Html<&'static str> {
    Html(pages::REGISTER_FORM_HTML)
}

/// Create the account unless the email is taken. Either way the browser goes
/// back to `/`; a taken email is only reported in the server log.
#[instrument(skip(state, form))]
pub async fn register_process(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect, (StatusCode, String)> {
    let existing = User::find_by_email(&state.db, &form.email).await.map_err(|e| {
        error!(error = %e, "find_by_email failed");
        internal(e)
    })?;

    if let Some(user) = existing {
        warn!(user_id = user.user_id, email = %form.email, "account already exists for this email");
        return Ok(Redirect::to("/"));
    }

    let user = User::create(&state.db, &form.email, &form.password)
        .await
        .map_err(|e| {
            error!(error = %e, "create user failed");
            internal(e)
        })?;
    info!(user_id = user.user_id, "user registered");

    Ok(Redirect::to("/"))
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
