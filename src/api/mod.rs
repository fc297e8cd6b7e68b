/*
 * Responsibility
 * - HTTP 層の公開インターフェース (routes() の re-export)
 */
pub mod dto;
pub mod handlers;
mod routes;

pub use routes::routes;
