/*
 * Responsibility
 * - Config 読み込み → tracing 初期化 → Router 組み立て → axum::serve()
 */
use anyhow::Result;
use axum::Router;
use service_kit::{HttpSettings, MonotonicClock, middleware, telemetry};

use crate::{api, config::Config, state::AppState};

pub async fn run() -> Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing("info,e2e_app=info,tower_http=info", config.app_env);
    telemetry::init_panic_hook(config.app_env);

    tracing::info!(
        service = %config.identity.name,
        version = %config.identity.version,
        "starting in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = AppState::new(config.identity.clone(), MonotonicClock::system());
    let app = build_router(state, config.http);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState, http: HttpSettings) -> Router {
    middleware::apply(api::routes().with_state(state), http)
}
