//! This crate contains the shared UI state and components for the portal.

pub mod i18n;
pub use i18n::{t, use_lang, I18nProvider, Lang};

mod auth;
pub use auth::{use_session, AuthProvider, LogoutButton, SessionState};

pub mod signup_form;
pub use signup_form::{
    MemberId, PersonDraft, PersonField, PersonRef, Phase, SignupForm, GENERAL_ERROR_KEY,
};

mod shell;
pub use shell::Shell;
