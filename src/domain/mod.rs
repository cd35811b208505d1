//! Domain layer containing session state and domain types.
//!
//! # Module Organization
//!
//! - `role` - Role enum and per-role landing paths
//! - `ids` - Identifier newtypes (`UserId`, `OrgId`)
//! - `claims` - Decoded access-token claims
//! - `session` - The immutable session snapshot
//! - `navigation` - Navigation requests and configured route paths
//! - `credentials` - Credential-carrying command values
//! - `profile` - Server-reported account payloads
//! - `errors` - Transport and session error taxonomies

pub mod claims;
pub mod credentials;
pub mod errors;
pub mod ids;
pub mod navigation;
pub mod profile;
pub mod role;
pub mod session;

pub use claims::{Claims, DecodeError};
pub use credentials::{IssuedToken, LoginCredentials, NewOrganization, Registration};
pub use errors::{ApiError, SessionError};
pub use ids::{EmptyId, OrgId, UserId};
pub use navigation::{NavigationMode, NavigationRequest, RoutePaths};
pub use profile::{OrganizationCreated, Profile, RegisteredUser};
pub use role::{Role, UnknownRole};
pub use session::Session;
