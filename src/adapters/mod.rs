//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the session core to external systems:
//! - `auth` - Auth backend REST client (reqwest) and its mock
//! - `token` - JWT claims decoding
//! - `storage` - Token persistence (file, in-memory)
//! - `navigation` - Navigation request delivery (channel, recording)

pub mod auth;
pub mod navigation;
pub mod storage;
pub mod token;
