//! Auth form state machine.
//!
//! Two modes (login/register) crossed with an idle/submitting flag. A submit
//! may only start while idle; the submitting flag doubles as the disabled
//! state of the form's submit button, so concurrent double-submission is
//! impossible by construction.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Which form the auth page is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Transient state of the auth form. Reset by navigating away, never
/// persisted.
#[derive(Clone, Debug, Default)]
pub struct AuthFormState {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl AuthFormState {
    /// Switch between login and register. Field values survive the switch;
    /// stale messages do not.
    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
        self.error = None;
        self.notice = None;
    }

    /// Required-field policy: register needs name, email, and password;
    /// login needs email and password.
    pub fn missing_required(&self) -> Option<&'static str> {
        let name_ok = self.mode == AuthMode::Login || !self.name.trim().is_empty();
        if name_ok && !self.email.trim().is_empty() && !self.password.is_empty() {
            None
        } else {
            Some("Please fill in all fields.")
        }
    }

    /// Try to enter the submitting state. Returns `false` (and attempts no
    /// transition) while a submit is already in flight or a required field
    /// is missing.
    pub fn begin_submit(&mut self) -> bool {
        if self.loading {
            return false;
        }
        if let Some(msg) = self.missing_required() {
            self.error = Some(msg.to_owned());
            return false;
        }
        self.error = None;
        self.notice = None;
        self.loading = true;
        true
    }

    /// Back to idle with the failure shown. Fields are retained for
    /// correction except the password.
    pub fn submit_failed(&mut self, message: &str) {
        self.loading = false;
        self.error = Some(message.to_owned());
        self.password.clear();
    }

    /// Registration done: back to the login form with a confirmation, no
    /// session mutation.
    pub fn register_succeeded(&mut self) {
        self.loading = false;
        self.mode = AuthMode::Login;
        self.notice = Some("Account created. Sign in to continue.".to_owned());
        self.password.clear();
    }

    /// Login done: the session is persisted by the caller, this just leaves
    /// the submitting state.
    pub fn login_succeeded(&mut self) {
        self.loading = false;
        self.error = None;
        self.password.clear();
    }
}
