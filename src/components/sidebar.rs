//! Sidebar navigation

/// A navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub match_paths: &'static [&'static str],
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        href: "/",
        match_paths: &["/"],
    },
    NavItem {
        label: "Search",
        href: "/search",
        match_paths: &["/search"],
    },
    NavItem {
        label: "Export",
        href: "/export",
        match_paths: &["/export"],
    },
];

impl NavItem {
    /// Whether this entry is highlighted for `current_url`.
    ///
    /// `/` only matches itself or `/?…`; other entries also match sub-paths.
    pub fn is_active(&self, current_url: &str) -> bool {
        self.match_paths.iter().any(|p| {
            current_url == *p
                || current_url.starts_with(&format!("{p}?"))
                || (*p != "/" && current_url.starts_with(&format!("{p}/")))
        })
    }
}

/// Navigation entries with their active flag for `current_url`
pub fn nav(current_url: &str) -> Vec<(NavItem, bool)> {
    NAV_ITEMS
        .iter()
        .map(|item| (*item, item.is_active(current_url)))
        .collect()
}
