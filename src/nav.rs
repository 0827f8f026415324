//! The navigation header shown on every page.

use serde::Serialize;

pub const HOME_PATH: &str = "/";
pub const POSTINGS_PATH: &str = "/postings";

/// Label and target of every link in the header, in display order.
const LINKS: [(&str, &str); 2] = [("HOME", HOME_PATH), ("POSTINGS", POSTINGS_PATH)];

/// A rendered header link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
    pub active: bool,
}

/// A link is active only when its target is exactly the current path.
pub fn is_active(current_path: &str, target: &str) -> bool {
    current_path == target
}

pub struct NavBar;

impl NavBar {
    pub fn render(current_path: &str) -> [NavLink; 2] {
        LINKS.map(|(label, target)| NavLink {
            label,
            target,
            active: is_active(current_path, target),
        })
    }
}
