//! Pages of the navigation shell and route resolution.

use super::{Role, Session};
use std::fmt;

/// A page the client can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Sign-in form.
    Login,
    /// Runs assigned to the signed-in driver.
    DriverDashboard,
    /// Driver roster maintenance.
    DriverManagement,
    /// All runs grouped by time slot.
    DispatchDashboard,
    /// Per-store par level grid.
    ParLevels,
    /// Daily container count entry form.
    StoreEntry,
    /// Daily container count log.
    ContainerLogs,
}

impl Page {
    /// Navigation bar entries in display order.
    pub const NAVIGATION: [Self; 6] = [
        Self::DriverDashboard,
        Self::DriverManagement,
        Self::DispatchDashboard,
        Self::ParLevels,
        Self::StoreEntry,
        Self::ContainerLogs,
    ];

    /// Landing page for authenticated sessions.
    pub const HOME: Self = Self::DriverDashboard;

    /// Returns the route path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::DriverDashboard => "/driver-dashboard",
            Self::DriverManagement => "/driver-management",
            Self::DispatchDashboard => "/dispatch-dashboard",
            Self::ParLevels => "/par-levels",
            Self::StoreEntry => "/store",
            Self::ContainerLogs => "/container-logs",
        }
    }

    /// Returns the navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::DriverDashboard => "Driver Dashboard",
            Self::DriverManagement => "Driver Management",
            Self::DispatchDashboard => "Dispatch Dashboard",
            Self::ParLevels => "Par Levels",
            Self::StoreEntry => "Store Entry",
            Self::ContainerLogs => "Container Logs",
        }
    }

    /// Looks up a page by route path. A single trailing slash is ignored.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.strip_suffix('/').unwrap_or(trimmed)
        } else {
            trimmed
        };
        [Self::Login]
            .into_iter()
            .chain(Self::NAVIGATION)
            .find(|page| page.path() == normalized)
    }

    /// Role needed to open the page, if any.
    #[must_use]
    pub const fn required_role(self) -> Option<Role> {
        match self {
            Self::Login | Self::DriverDashboard | Self::StoreEntry => None,
            Self::DriverManagement
            | Self::DispatchDashboard
            | Self::ParLevels
            | Self::ContainerLogs => Some(Role::Dispatcher),
        }
    }

    /// Returns `true` when `session` may open the page.
    #[must_use]
    pub fn is_visible_to(self, session: &Session) -> bool {
        self.required_role()
            .is_none_or(|role| session.require_role(role).is_ok())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of routing a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the page.
    Render(Page),
    /// Replace the location with the page.
    Redirect(Page),
    /// No page is registered for the path.
    NotFound,
}

/// Returns the navigation entries `session` may open, in display order.
#[must_use]
pub fn navigation_for(session: &Session) -> Vec<Page> {
    Page::NAVIGATION
        .into_iter()
        .filter(|page| page.is_visible_to(session))
        .collect()
}

/// Decides what to show for `path`.
#[must_use]
pub fn resolve_route(path: &str, session: Option<&Session>) -> RouteDecision {
    let page = Page::from_path(path);
    let Some(active) = session else {
        return match page {
            Some(Page::Login) => RouteDecision::Render(Page::Login),
            _ => RouteDecision::Redirect(Page::Login),
        };
    };

    if path.trim() == "/" {
        return RouteDecision::Redirect(Page::HOME);
    }

    match page {
        Some(Page::Login) => RouteDecision::Redirect(Page::HOME),
        Some(found) if found.is_visible_to(active) => RouteDecision::Render(found),
        Some(_) => RouteDecision::Redirect(Page::HOME),
        None => RouteDecision::NotFound,
    }
}
