//! # API crate — backend client for the household registration portal
//!
//! The backend is an external collaborator; this crate owns the client half of
//! that contract: the domain models serialized over the wire, the HTTP client
//! that talks to the three endpoints the portal consumes, and the error
//! taxonomy every frontend handler converts into local view state.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `ApiClient` — login, password reset, household submission |
//! | [`error`] | `ApiError` — authentication, rejection, and transport failures |
//! | [`models`] | `Household`, `Person`, and the demographic enums |

pub mod client;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{Gender, Household, Person, PrimaryLanguage, Race, MAX_MEMBERS};
