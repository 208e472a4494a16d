//! Session state and authentication components.

use api::ApiError;
use dioxus::prelude::*;

/// Holder of the opaque backend session token.
///
/// Absence of a token means unauthenticated. Nothing else mutates the token:
/// [`SessionState::apply_login`] and [`SessionState::logout`] are the only
/// write paths. The token is never persisted, so a reload starts logged out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    token: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Fold the outcome of a login exchange into the session.
    ///
    /// A success response carrying an empty token is a failed login, not an
    /// authenticated session without credentials. Transport errors and bad
    /// credentials collapse into the same [`ApiError::AuthenticationFailed`];
    /// the caller never sees raw backend detail.
    pub fn apply_login(&mut self, result: Result<String, ApiError>) -> Result<(), ApiError> {
        match result {
            Ok(token) if !token.trim().is_empty() => {
                self.token = Some(token);
                Ok(())
            }
            Ok(_) => {
                tracing::warn!("login response carried an empty session token");
                self.token = None;
                Err(ApiError::AuthenticationFailed)
            }
            Err(err) => {
                tracing::warn!("login failed: {err}");
                self.token = None;
                Err(ApiError::AuthenticationFailed)
            }
        }
    }

    pub fn logout(&mut self) {
        self.token = None;
    }
}

/// Get the current session state signal.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that owns the session state.
/// Wrap the app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_signal(SessionState::default);
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button to log out and return to the login page.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();

    let onclick = move |_| {
        session.write().logout();
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::ApiClient;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn starts_unauthenticated() {
        let session = SessionState::default();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn successful_login_stores_token() {
        let mut session = SessionState::default();
        session.apply_login(Ok("tok-1".to_string())).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("tok-1"));
    }

    #[test]
    fn empty_token_is_a_failed_login() {
        let mut session = SessionState::default();
        let err = session.apply_login(Ok(String::new())).unwrap_err();
        assert!(matches!(err, ApiError::AuthenticationFailed));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn failed_login_discards_previous_token() {
        let mut session = SessionState::default();
        session.apply_login(Ok("tok-1".to_string())).unwrap();
        let _ = session.apply_login(Err(ApiError::AuthenticationFailed));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn logout_clears_token() {
        let mut session = SessionState::default();
        session.apply_login(Ok("tok-1".to_string())).unwrap();
        session.logout();
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn empty_token_from_backend_leaves_session_unauthenticated() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "sessionToken": ""
                })),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let mut session = SessionState::default();
        let result = client.login("a@b.com", "x").await;
        assert!(session.apply_login(result).is_err());
        assert!(!session.is_authenticated());
    }
}
