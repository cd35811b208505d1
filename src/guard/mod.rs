//! Role-based route protection.
//!
//! Split into a pure decision ([`evaluate`] producing [`Access`]) and an
//! effectful enforcer ([`RouteGuard`]) that redirects on newly reached
//! denials. Decisions rest on locally decoded claims and are a UX
//! convenience only; the backend authorizes every request it receives.

mod decision;
mod route_guard;

pub use decision::{evaluate, Access, DenialReason};
pub use route_guard::RouteGuard;
