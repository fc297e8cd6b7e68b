/*
 * Responsibility
 * - 環境変数の読み込み (PORT, SERVICE_NAME, SERVICE_VERSION, TZ など)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::net::SocketAddr;

use service_kit::{AppEnv, ConfigError, HttpSettings, ServiceIdentity, SystemZone, env};

pub const DEFAULT_SERVICE_NAME: &str = "cicd-pipeline-poc-app";
pub const DEFAULT_SERVICE_VERSION: &str = "1.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub identity: ServiceIdentity,
    // Reported by /api/time
    pub zone: SystemZone,
    pub http: HttpSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = env::parse_or("PORT", DEFAULT_PORT)?;
        let timeout_secs: u64 = env::parse_or("REQUEST_TIMEOUT_SECS", 30)?;

        Ok(Self {
            addr: env::listen_addr(port),
            app_env: AppEnv::from_env(),
            identity: ServiceIdentity::from_env(DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_VERSION)?,
            zone: SystemZone::detect(std::env::var("TZ").ok().as_deref()),
            http: HttpSettings::with_timeout_secs(timeout_secs)?,
        })
    }
}
