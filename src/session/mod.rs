//! Session lifecycle orchestration.
//!
//! [`SessionManager`] composes the ports (auth backend, token store,
//! token decoder, navigator) into the restore/login/logout lifecycle and
//! publishes the resulting [`Session`](crate::domain::Session) snapshots
//! through a watch channel.

mod manager;

pub use manager::SessionManager;
