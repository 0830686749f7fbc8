//! The application shell: session check, routing and the reaction to an
//! expired session.

use log::{debug, info, warn};

use crate::api::PhraseApi;
use crate::error::Error;
use crate::routes::Route;

/// What the top level shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Shell {
    /// The auth check has not finished
    #[default]
    Checking,
    /// Signed out; only the login page is shown
    Login,
    /// Signed in; sidebar plus the current route
    Authenticated { email: String },
}

/// Top-level state: which shell is shown and the current route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    shell: Shell,
    route: Route,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

impl App {
    /// An app about to check the session, opened at `route`
    pub fn new(route: Route) -> Self {
        Self {
            shell: Shell::Checking,
            route,
        }
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// The signed-in user's email, when authenticated
    pub fn email(&self) -> Option<&str> {
        match &self.shell {
            Shell::Authenticated { email } => Some(email.as_str()),
            _ => None,
        }
    }

    /// Check the session once. Any failure counts as signed out.
    pub async fn start(&mut self, api: &dyn PhraseApi) -> &Shell {
        self.shell = match api.auth_status().await {
            Ok(status) => match status.signed_in_email() {
                Some(email) => {
                    info!("Signed in as {email}");
                    Shell::Authenticated {
                        email: email.to_string(),
                    }
                }
                None => Shell::Login,
            },
            Err(e) => {
                warn!("Auth check failed: {e}");
                Shell::Login
            }
        };
        if self.shell == Shell::Login {
            self.route = Route::Login;
        }
        &self.shell
    }

    /// React to an error from any page. Returns true when it ended the session.
    pub fn observe_error(&mut self, error: &Error) -> bool {
        if !error.is_unauthorized() {
            return false;
        }
        if self.shell != Shell::Login {
            debug!("Session rejected, showing login");
        }
        self.shell = Shell::Login;
        self.route = Route::Login;
        true
    }

    /// Move to `route`. Signed-out apps stay on the login page.
    pub fn navigate(&mut self, route: Route) -> &Route {
        if self.shell == Shell::Login && route.requires_auth() {
            self.route = Route::Login;
        } else {
            self.route = route;
        }
        &self.route
    }

    /// Pass a page result through, ending the session on `Unauthorized`
    pub fn handle<T>(&mut self, result: Result<T, Error>) -> Result<T, Error> {
        if let Err(e) = &result {
            self.observe_error(e);
        }
        result
    }

    /// End the session. The shell only changes once the server confirmed;
    /// a failed logout keeps the user where they are.
    pub async fn logout(&mut self, api: &dyn PhraseApi) -> Result<(), Error> {
        match api.logout().await {
            Ok(_) => {
                self.shell = Shell::Login;
                self.route = Route::Login;
                Ok(())
            }
            Err(e) => {
                warn!("Logout failed: {e}");
                self.observe_error(&e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{FakeApi, Failure};
    use crate::auth::AuthStatus;
    use crate::pages::HomePage;

    #[tokio::test]
    async fn signed_in_user_keeps_route() {
        let api = FakeApi::signed_in("user@example.com");
        let mut app = App::new(Route::Export);
        app.start(&api).await;
        assert_eq!(
            app.shell(),
            &Shell::Authenticated {
                email: "user@example.com".to_string()
            }
        );
        assert_eq!(app.route(), &Route::Export);
        assert_eq!(api.calls(), vec!["auth_status:"]);
    }

    #[tokio::test]
    async fn unauthenticated_shows_login() {
        let api = FakeApi::default();
        let mut app = App::default();
        assert_eq!(app.start(&api).await, &Shell::Login);
        assert_eq!(app.route(), &Route::Login);
    }

    #[tokio::test]
    async fn authenticated_without_email_shows_login() {
        let api = FakeApi::default();
        *api.status.lock().unwrap() = Some(AuthStatus {
            authenticated: true,
            email: None,
        });
        let mut app = App::default();
        assert_eq!(app.start(&api).await, &Shell::Login);
    }

    #[tokio::test]
    async fn failed_check_shows_login() {
        let api = FakeApi::default();
        api.fail("auth_status", Failure::Api(500, "down".to_string()));
        let mut app = App::default();
        assert_eq!(app.start(&api).await, &Shell::Login);
    }

    #[tokio::test]
    async fn unauthorized_from_a_page_switches_to_login() {
        let api = FakeApi::signed_in("user@example.com");
        let mut app = App::default();
        app.start(&api).await;

        api.fail("list_phrases", Failure::Unauthorized);
        let mut home = HomePage::new();
        let result = home.load(&api, 20).await;
        assert!(app.handle(result).is_err());
        assert_eq!(app.shell(), &Shell::Login);
        assert_eq!(app.route(), &Route::Login);
        assert_eq!(home.state().error(), None);

        assert!(app.observe_error(&Error::Unauthorized));
        assert_eq!(app.route(), &Route::Login);
    }

    #[test]
    fn other_errors_are_left_to_pages() {
        let mut app = App::default();
        assert!(!app.observe_error(&Error::api(500, "boom")));
        assert_eq!(app.shell(), &Shell::Checking);
    }

    #[tokio::test]
    async fn signed_out_navigation_stays_on_login() {
        let api = FakeApi::default();
        let mut app = App::default();
        app.start(&api).await;
        assert_eq!(app.navigate(Route::Home), &Route::Login);
    }

    #[tokio::test]
    async fn logout_ends_session() {
        let api = FakeApi::signed_in("user@example.com");
        let mut app = App::default();
        app.start(&api).await;
        assert_eq!(app.navigate(Route::New), &Route::New);

        app.logout(&api).await.unwrap();
        assert_eq!(app.shell(), &Shell::Login);
        assert_eq!(app.email(), None);
    }

    #[tokio::test]
    async fn failed_logout_keeps_session() {
        let api = FakeApi::signed_in("user@example.com");
        api.fail("logout", Failure::Api(500, "Internal Server Error".to_string()));
        let mut app = App::default();
        app.start(&api).await;
        app.navigate(Route::Export);

        assert!(app.logout(&api).await.is_err());
        assert_eq!(app.email(), Some("user@example.com"));
        assert_eq!(app.route(), &Route::Export);
    }
}
