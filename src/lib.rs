//! API route table shared by the HTTP client and server.
//!
//! ```
//! use shared_routes::API_ROUTES;
//!
//! assert_eq!(API_ROUTES.auth.login, "/auth/login");
//! assert_eq!((API_ROUTES.users.by_id)("42"), "/users/42");
//! ```

pub mod config;
pub mod manifest;
pub mod routes;

pub use manifest::{RouteEntry, RouteManifest};
pub use routes::API_ROUTES;
