//! Navigation state machine for the application shell.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::net::types::UserProfile;

/// The pages the shell can show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Ppt,
    Word,
    Dashboard,
    Login,
}

/// What the dashboard/home "create" buttons ask for. Exhaustive on purpose:
/// an unknown project kind is unrepresentable at this boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectKind {
    Ppt,
    Word,
}

/// Shell state: the active page and the signed-in user, if any.
///
/// `current_user` is seeded from the session store at startup and only
/// mutated by login/logout. No page transition is rejected based on it;
/// pages that need a session show their own sign-in prompt.
#[derive(Clone, Debug, Default)]
pub struct NavState {
    pub page: Page,
    pub current_user: Option<UserProfile>,
}

impl NavState {
    pub fn change_page(&mut self, page: Page) {
        self.page = page;
    }

    /// A login completed: adopt the profile and land on home.
    pub fn handle_login(&mut self, profile: UserProfile) {
        self.current_user = Some(profile);
        self.page = Page::Home;
    }

    /// Session ended: drop the user and land on home. The caller clears the
    /// persisted session.
    pub fn handle_logout(&mut self) {
        self.current_user = None;
        self.page = Page::Home;
    }

    /// Jump to the generator page for the requested project kind.
    pub fn handle_create_project(&mut self, kind: ProjectKind) {
        self.page = match kind {
            ProjectKind::Ppt => Page::Ppt,
            ProjectKind::Word => Page::Word,
        };
    }
}
