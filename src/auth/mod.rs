//! Authentication and owner-context management

mod session;
mod types;

use log::warn;
use reqwest::Client;

use crate::error::{Error, FormField};
use crate::fetch::Fetch;
use crate::validate;

pub use session::{SessionState, SharedSession};
pub(crate) use session::context_owner_id;
pub use types::*;

/// Client for the backend's auth endpoints.
///
/// The backend tracks the session through a cookie; this client keeps the
/// signed-in user and active owner context in [`SessionState`] shared
/// with the other sub-clients.
pub struct AuthClient {
    base_url: String,
    client: Client,
    session: SharedSession,
}

impl AuthClient {
    pub(crate) fn new(base_url: &str, client: Client, session: SharedSession) -> Self {
        Self {
            base_url: base_url.to_string(),
            client,
            session,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth{}", self.base_url, path)
    }

    fn store_session(&self, user: UserRecord) {
        let mut guard = self.session.lock().unwrap();
        *guard = Some(SessionState::new(user));
    }

    /// Register a new account and sign it in.
    ///
    /// Email format and the password policy are checked client-side and
    /// block the request.
    pub async fn register(&self, email: &str, password: &str) -> Result<AuthResponse, Error> {
        validate::email(email)?;
        validate::password(password)?;

        let body = AuthRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = Fetch::post(&self.client, &self.endpoint("/register"))
            .json(&body)?
            .execute::<AuthResponse>()
            .await?;

        match &response.user {
            Some(user) => self.store_session(user.clone()),
            None => return Err(Error::auth("registration returned no user")),
        }

        Ok(response)
    }

    /// Sign in with email and password.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, Error> {
        validate::required(FormField::Email, email)?;
        validate::required(FormField::Password, password)?;

        let body = AuthRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = Fetch::post(&self.client, &self.endpoint("/login"))
            .json(&body)?
            .execute::<AuthResponse>()
            .await?;

        match &response.user {
            Some(user) => self.store_session(user.clone()),
            None => return Err(Error::auth("login returned no user")),
        }

        Ok(response)
    }

    /// Sign out.
    ///
    /// Local session state is cleared even when the backend call fails;
    /// a stale server-side session is harmless, a stuck client is not.
    pub async fn logout(&self) -> Result<(), Error> {
        let result = Fetch::post(&self.client, &self.endpoint("/logout"))
            .execute_empty()
            .await;

        let mut guard = self.session.lock().unwrap();
        *guard = None;
        drop(guard);

        if let Err(err) = result {
            warn!("logout request failed: {err}");
        }
        Ok(())
    }

    /// Fetch the currently signed-in user and refresh local state.
    pub async fn current_user(&self) -> Result<UserRecord, Error> {
        let user = Fetch::get(&self.client, &self.endpoint("/current"))
            .execute::<UserRecord>()
            .await?;

        let mut guard = self.session.lock().unwrap();
        match guard.as_mut() {
            Some(state) => state.user = user.clone(),
            None => *guard = Some(SessionState::new(user.clone())),
        }

        Ok(user)
    }

    /// Act within another owner's subscription set.
    pub async fn switch_context(&self, owner_id: i64) -> Result<ContextSwitch, Error> {
        let body = SwitchContextRequest { owner_id };
        let response = Fetch::post(&self.client, &self.endpoint("/switch-context"))
            .json(&body)?
            .execute::<ContextSwitch>()
            .await?;

        if let Some(user) = &response.auth_response.user {
            let mut guard = self.session.lock().unwrap();
            *guard = Some(SessionState {
                user: user.clone(),
                context_owner_id: response.context_user_id,
            });
        }

        Ok(response)
    }

    /// Return to the user's own context.
    pub async fn revert_context(&self) -> Result<AuthResponse, Error> {
        let response = Fetch::post(&self.client, &self.endpoint("/revert-context"))
            .execute::<AuthResponse>()
            .await?;

        if let Some(user) = &response.user {
            self.store_session(user.clone());
        }

        Ok(response)
    }

    /// Snapshot of the current session state
    pub fn session(&self) -> Option<SessionState> {
        let guard = self.session.lock().unwrap();
        guard.clone()
    }
}
