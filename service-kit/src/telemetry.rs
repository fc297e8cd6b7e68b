/*
 * Responsibility
 * - tracing subscriber の初期化 (RUST_LOG 優先, production は JSON 行)
 * - panic を tracing 経由で必ず残す
 */
use std::any::Any;
use std::{panic, process};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::env::AppEnv;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set, e.g.
/// `RUST_LOG=info,pipeline_poc=debug,tower_http=debug`. Production emits one
/// JSON object per line for the log collector; development stays human
/// readable.
pub fn init_tracing(default_directives: &str, app_env: AppEnv) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));
    let registry = tracing_subscriber::registry().with(filter);

    if app_env.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

/// Logs panics with their message and source location.
///
/// Development aborts so a broken handler is impossible to miss. Production
/// hands over to the previous hook and tokio keeps serving other requests.
pub fn init_panic_hook(app_env: AppEnv) {
    let previous = panic::take_hook();
    let abort = !app_env.is_production();

    panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        tracing::error!(%location, message = panic_message(info.payload()), "panic");

        if abort {
            process::abort();
        }
        previous(info);
    }))
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_message_reads_str_and_string_payloads() {
        let literal: Box<dyn Any + Send> = Box::new("boom");
        let owned: Box<dyn Any + Send> = Box::new(String::from("kaboom"));
        let other: Box<dyn Any + Send> = Box::new(42_u8);

        assert_eq!(panic_message(literal.as_ref()), "boom");
        assert_eq!(panic_message(owned.as_ref()), "kaboom");
        assert_eq!(panic_message(other.as_ref()), "non-string panic payload");
    }
}
