use ratings::{app, logging, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init("ratings=debug,axum=info,tower_http=info");

    let app_state = AppState::init().await?;

    if let Err(e) = ratings::db::create_all(&app_state.db).await {
        tracing::warn!(error = %e, "schema creation failed; continuing");
    }

    let addr = app_state.config.bind_addr();
    app::serve(app::build_app(app_state), &addr).await
}
