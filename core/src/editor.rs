//! In-memory list editor orchestrating the user CRUD screen.
//!
//! # Design
//! `UserEditor` owns the list of users and one pending form. The create/edit
//! distinction is a tagged mode: `EditorMode::Editing` carries its target by
//! value, taken when the edit started, so the mode and the target cannot fall
//! out of sync and later list changes do not touch the target.
//!
//! Operations that reach the server take the gateway plus a transport
//! capability (`FnOnce(HttpRequest) -> Result<HttpResponse, ApiError>`). The
//! editor builds the request, hands it to the transport, parses the response,
//! and applies the result to its state. State is mutated only after a
//! successful round trip; a failure is logged and leaves the screen exactly
//! as it was, so the user can retry or cancel. Nothing is queued or retried
//! here, and no operation depends on another being in flight.

use tracing::error;

use crate::client::UserClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{User, UserDraft};

/// What the pending form will do on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    /// Submitting creates a new user from the draft.
    Create,
    /// Submitting updates the carried user. The target is a copy taken at
    /// `start_edit` time, not a reference into the list.
    Editing(User),
}

/// The user-management screen's state: the loaded list, the form draft, and
/// the current mode.
#[derive(Debug)]
pub struct UserEditor {
    items: Vec<User>,
    draft: UserDraft,
    mode: EditorMode,
}

impl UserEditor {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            draft: UserDraft::default(),
            mode: EditorMode::Create,
        }
    }

    /// The loaded users, in server order with local edits applied.
    pub fn items(&self) -> &[User] {
        &self.items
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    /// Mutable access to the form fields, for whatever is rendering them.
    pub fn draft_mut(&mut self) -> &mut UserDraft {
        &mut self.draft
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Editing(_))
    }

    /// The user being edited, if an edit session is active.
    pub fn editing_target(&self) -> Option<&User> {
        match &self.mode {
            EditorMode::Editing(target) => Some(target),
            EditorMode::Create => None,
        }
    }

    /// Fetch the list and replace `items` wholesale.
    ///
    /// On failure the current list is kept as-is; there is no retry and no
    /// partial state.
    pub fn load<T>(&mut self, client: &UserClient, transport: T)
    where
        T: FnOnce(HttpRequest) -> Result<HttpResponse, ApiError>,
    {
        let outcome = transport(client.build_list_users())
            .and_then(|response| client.parse_list_users(response));
        match outcome {
            Ok(users) => self.items = users,
            Err(err) => error!("Error loading users: {err}"),
        }
    }

    /// Begin editing `user`: copy its fields into the draft and remember it
    /// as the target. No server call.
    pub fn start_edit(&mut self, user: &User) {
        self.draft = UserDraft::from(user);
        self.mode = EditorMode::Editing(user.clone());
    }

    /// Leave edit mode and clear the draft. Idempotent, no server call.
    pub fn cancel_edit(&mut self) {
        self.mode = EditorMode::Create;
        self.draft = UserDraft::default();
    }

    /// Submit the draft: update the edit target if one is set, create a new
    /// user otherwise. Exactly one of the two per call.
    ///
    /// An incomplete draft (empty name or email) is a no-op with no transport
    /// call. On update success the id-matching list element is replaced and
    /// the edit session ends; on create success the returned user is appended
    /// and the draft cleared. On failure the whole editor state, mode and
    /// draft included, stays untouched.
    pub fn submit<T>(&mut self, client: &UserClient, transport: T)
    where
        T: FnOnce(HttpRequest) -> Result<HttpResponse, ApiError>,
    {
        if !self.draft.is_complete() {
            return;
        }

        // An edit target that never got an id cannot be addressed on the
        // wire; its submit falls through to creation.
        let editing_id = match &self.mode {
            EditorMode::Editing(target) => target.id,
            EditorMode::Create => None,
        };

        if let Some(id) = editing_id {
            let outcome = client
                .build_update_user(id, &self.draft)
                .and_then(transport)
                .and_then(|response| client.parse_update_user(response));
            match outcome {
                Ok(updated) => {
                    if let Some(slot) = self.items.iter_mut().find(|u| u.id == Some(id)) {
                        *slot = updated;
                    }
                    self.cancel_edit();
                }
                Err(err) => error!("Error updating user: {err}"),
            }
        } else {
            let outcome = client
                .build_create_user(&self.draft)
                .and_then(transport)
                .and_then(|response| client.parse_create_user(response));
            match outcome {
                Ok(created) => {
                    self.items.push(created);
                    self.draft = UserDraft::default();
                }
                Err(err) => error!("Error adding user: {err}"),
            }
        }
    }

    /// Delete `user` after confirmation.
    ///
    /// A user without an id is a no-op before any prompt. `confirm` receives
    /// the message naming the user and gates the server call. On success
    /// every list element with the matching id is removed; on failure the
    /// list stays untouched. The edit session, if any, is not disturbed even
    /// when it points at a different user.
    pub fn remove<C, T>(&mut self, client: &UserClient, user: &User, confirm: C, transport: T)
    where
        C: FnOnce(&str) -> bool,
        T: FnOnce(HttpRequest) -> Result<HttpResponse, ApiError>,
    {
        let Some(id) = user.id else {
            return;
        };

        if !confirm(&format!("Are you sure you want to delete {}?", user.name)) {
            return;
        }

        let outcome = transport(client.build_delete_user(id))
            .and_then(|response| client.parse_delete_user(response));
        match outcome {
            Ok(()) => self.items.retain(|u| u.id != Some(id)),
            Err(err) => error!("Error deleting user: {err}"),
        }
    }
}

impl Default for UserEditor {
    fn default() -> Self {
        Self::new()
    }
}
