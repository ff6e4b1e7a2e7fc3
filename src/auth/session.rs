//! Session state shared across the sub-clients

use std::sync::{Arc, Mutex};

use super::types::UserRecord;

/// Who is signed in and whose subscription set is being viewed.
///
/// The owner context differs from the user's own id while acting as a
/// guest in someone else's account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub user: UserRecord,
    pub context_owner_id: i64,
}

impl SessionState {
    /// Fresh session viewing the user's own subscriptions
    pub fn new(user: UserRecord) -> Self {
        let context_owner_id = user.id;
        Self {
            user,
            context_owner_id,
        }
    }

    /// Whether the session is currently acting in a foreign context
    pub fn is_guest_context(&self) -> bool {
        self.user.id != self.context_owner_id
    }
}

/// Session handle shared by the root client and its sub-clients
pub type SharedSession = Arc<Mutex<Option<SessionState>>>;

/// Read the owner context id, if a session is established.
pub(crate) fn context_owner_id(session: &SharedSession) -> Option<i64> {
    let guard = session.lock().unwrap();
    guard.as_ref().map(|state| state.context_owner_id)
}
