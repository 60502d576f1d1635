//! Workspace form state.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use payloads::{DEFAULT_WORKSPACE_NAME, NewWorkspace, Workspace};

/// Editable workspace fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkspaceForm {
    pub name: String,
    pub owner_email: String,
}

impl Default for WorkspaceForm {
    fn default() -> Self {
        Self { name: DEFAULT_WORKSPACE_NAME.to_owned(), owner_email: String::new() }
    }
}

impl WorkspaceForm {
    /// Request body, passed through as entered.
    pub fn to_request(&self) -> NewWorkspace {
        NewWorkspace { name: self.name.clone(), owner_email: self.owner_email.clone() }
    }
}

#[derive(Clone, Debug, Default)]
pub struct WorkspaceState {
    pub form: WorkspaceForm,
    pub pending: bool,
    pub created: Option<Workspace>,
}

impl WorkspaceState {
    /// Mark a submit in flight and return its body, or `None` if one is already pending.
    pub fn begin_submit(&mut self) -> Option<NewWorkspace> {
        if self.pending {
            return None;
        }
        self.pending = true;
        Some(self.form.to_request())
    }

    pub fn record_created(&mut self, workspace: Workspace) {
        self.pending = false;
        self.created = Some(workspace);
    }

    pub fn fail(&mut self) {
        self.pending = false;
    }

    pub fn created_id(&self) -> Option<&str> {
        self.created.as_ref().map(|ws| ws.id.as_str())
    }
}
