//! OrgBoard Session - client-side session and route-access core
//!
//! This crate implements the authentication session lifecycle
//! (restore/login/logout), bearer-token handling with transparent refresh,
//! and role-based route guarding for OrgBoard client shells.
//!
//! Access decisions are made from locally decoded, unverified token claims
//! and exist for user experience only; the backend re-validates every
//! request it receives.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod guard;
pub mod ports;
pub mod session;
pub mod telemetry;
