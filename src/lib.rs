// src/lib.rs — Library root for Screenpass

pub mod api;
pub mod cli;
pub mod core;
pub mod infra;
pub mod persistence;
pub mod provider;
pub mod roles;
pub mod session;
pub mod util;
