//! # netadmin-client
//!
//! Client-side half of the NetAdmin session lifecycle.
//!
//! A [`SessionClient`] holds the current token and principal, keeps them in
//! sync with a [`TokenStore`], guards navigation between [`Route`]s, and
//! builds every outbound request from the session state at send time.
//!
//! ## Modules
//!
//! - `api`: the server seam ([`AuthApi`]) and its reqwest implementation
//! - `error`: [`ClientError`]
//! - `route`: views and the route guard
//! - `session`: the session state machine
//! - `store`: token persistence

pub mod api;
pub mod error;
pub mod route;
pub mod session;
pub mod store;

pub use api::{AuthApi, AuthorizedRequest, HttpAuthApi, LoginSession};
pub use error::ClientError;
pub use route::Route;
pub use session::{SessionClient, SessionState};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};
