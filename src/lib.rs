//! Client core for the Build2Rise startup/investor network.
//!
//! The crate is headless: it owns the persisted session, a typed client for
//! the REST backend, and per-feature state containers that wrap every remote
//! call in a uniform request lifecycle. The `build2rise` binary is a thin text
//! front end over the containers.

pub mod api;
pub mod config;
pub mod containers;
pub mod lifecycle;
pub mod logging;
pub mod models;
pub mod screens;
pub mod session;
