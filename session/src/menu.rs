//! Role-based navigation menus.
//!
//! Each role maps to a fixed list of entries; every list ends with a logout
//! action. Labels and order follow the platform's sidebar.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::role::Role;
use crate::routes::Route;

/// What selecting a menu entry does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Navigate(Route),
    Logout,
}

/// One sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    /// Stable key used for selection highlighting.
    pub key: &'static str,
    pub label: &'static str,
    pub action: MenuAction,
}

impl MenuItem {
    const fn link(key: &'static str, label: &'static str, route: Route) -> Self {
        Self { key, label, action: MenuAction::Navigate(route) }
    }

    /// Target route, if this entry navigates.
    #[must_use]
    pub fn route(&self) -> Option<Route> {
        match self.action {
            MenuAction::Navigate(route) => Some(route),
            MenuAction::Logout => None,
        }
    }
}

const LOGOUT: MenuItem = MenuItem { key: "logout", label: "Logout", action: MenuAction::Logout };

const MEMBER_MENU: [MenuItem; 7] = [
    MenuItem::link("dashboard", "Dashboard", Route::Dashboard),
    MenuItem::link("programs", "Programs", Route::Programs),
    MenuItem::link("ventures", "Ventures", Route::Ventures),
    MenuItem::link("mentors", "Mentors", Route::Mentors),
    MenuItem::link("resources", "Resource Center", Route::ResourceCenter),
    MenuItem::link("mymentor", "My Mentors", Route::MyMentors),
    MenuItem::link("settings", "Settings", Route::Settings),
];

const ADMIN_MENU: [MenuItem; 5] = [
    MenuItem::link("dashboard", "Admin Dashboard", Route::Dashboard),
    MenuItem::link("users", "Manage Users", Route::Users),
    MenuItem::link("programs", "Manage Programs", Route::Programs),
    MenuItem::link("reports", "Reports", Route::Reports),
    MenuItem::link("settings", "Settings", Route::Settings),
];

const MENTOR_MENU: [MenuItem; 5] = [
    MenuItem::link("dashboard", "Mentor Dashboard", Route::Dashboard),
    MenuItem::link("requests", "Mentee Requests", Route::Requests),
    MenuItem::link("mentees", "My Mentees", Route::Mentees),
    MenuItem::link("resources", "My Resources", Route::Resources),
    MenuItem::link("settings", "Settings", Route::Settings),
];

/// Sidebar entries for `role`, ending with logout.
#[must_use]
pub fn menu_for(role: Role) -> Vec<MenuItem> {
    let base: &[MenuItem] = match role {
        Role::Admin => &ADMIN_MENU,
        Role::Mentor => &MENTOR_MENU,
        Role::Member => &MEMBER_MENU,
    };
    base.iter().copied().chain(std::iter::once(LOGOUT)).collect()
}

/// Label for `route` in `role`'s menu, if the role can reach it from the sidebar.
#[must_use]
pub fn label_for(role: Role, route: Route) -> Option<&'static str> {
    menu_for(role)
        .into_iter()
        .find(|item| item.route() == Some(route))
        .map(|item| item.label)
}
