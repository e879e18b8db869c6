//! Navigation targets known to the session layer.
//!
//! The store signals navigation by [`Route`] rather than by path string so
//! the web router and the CLI can each decide what "go to login" means.

/// A navigable location in the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Dashboard,
    Programs,
    Ventures,
    Mentors,
    ResourceCenter,
    MyMentors,
    Settings,
    Profile,
    Users,
    Reports,
    Requests,
    Mentees,
    Resources,
}

impl Route {
    /// Absolute path for this route.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::Programs => "/dashboard/programs",
            Self::Ventures => "/dashboard/ventures",
            Self::Mentors => "/dashboard/mentors",
            Self::ResourceCenter => "/dashboard/resource-center",
            Self::MyMentors => "/dashboard/mymentors",
            Self::Settings => "/dashboard/settings",
            Self::Profile => "/dashboard/profile",
            Self::Users => "/dashboard/users",
            Self::Reports => "/dashboard/reports",
            Self::Requests => "/dashboard/requests",
            Self::Mentees => "/dashboard/mentees",
            Self::Resources => "/dashboard/resources",
        }
    }

    /// Look up a dashboard child route by its final path segment.
    #[must_use]
    pub fn dashboard_section(segment: &str) -> Option<Self> {
        let route = match segment {
            "programs" => Self::Programs,
            "ventures" => Self::Ventures,
            "mentors" => Self::Mentors,
            "resource-center" => Self::ResourceCenter,
            "mymentors" => Self::MyMentors,
            "settings" => Self::Settings,
            "profile" => Self::Profile,
            "users" => Self::Users,
            "reports" => Self::Reports,
            "requests" => Self::Requests,
            "mentees" => Self::Mentees,
            "resources" => Self::Resources,
            _ => return None,
        };
        Some(route)
    }

    /// Whether this route sits behind the route guard.
    #[must_use]
    pub fn requires_session(self) -> bool {
        !matches!(self, Self::Home | Self::Login | Self::Register)
    }
}
