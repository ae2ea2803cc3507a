//! # Database module: PostgreSQL connection pool
//!
//! Gated behind `#[cfg(feature = "server")]` so client (WASM) builds never
//! pull in SQLx.
//!
//! The pool is a lazy, process-wide singleton backed by a
//! [`tokio::sync::OnceCell`]. The first call to [`get_pool`] reads
//! [`ServerConfig`](crate::config::ServerConfig) from the environment, opens the
//! pool, and caches it for every later caller. [`MIGRATOR`] carries the schema
//! in `packages/api/migrations`.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::{get_pool, DbError, MIGRATOR};
