/*
 * Responsibility
 * - Config 読み込み → tracing 初期化 → 依存生成 → Router 組み立て
 * - HTTP middleware の適用
 * - axum::serve() で起動
 */
use anyhow::Result;
use axum::Router;
use service_kit::{HttpSettings, SystemZone, middleware, telemetry};

use crate::{api, config::Config, state::AppState};

pub async fn run() -> Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing("info,pipeline_poc=info,tower_http=info", config.app_env);
    telemetry::init_panic_hook(config.app_env);

    tracing::info!(
        service = %config.identity.name,
        version = %config.identity.version,
        "starting in {:?} mode on {}",
        config.app_env,
        config.addr
    );
    if config.zone == SystemZone::LocalOffset {
        tracing::warn!("system time zone name unavailable, /api/time reports UTC offsets");
    }

    let state = AppState::system(config.identity.clone(), config.zone.clone());
    let app = build_router(state, config.http);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState, http: HttpSettings) -> Router {
    let router = api::routes().with_state(state);
    middleware::apply(router, http)
}
