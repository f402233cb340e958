//! Sidebar label provider.
//!
//! Fixed ordered display strings for the sidebar entries. The order is
//! load-bearing: the state machine activates entries by index (0 = Home,
//! 1 = Explore, 2 = Settings).

/// Icon prefix for the Home entry.
pub const HOME: &str = "⌂";
/// Icon prefix for the Explore (search) entry.
pub const EXPLORE: &str = "◎";
/// Icon prefix for the Settings entry.
pub const SETTINGS: &str = "⚙";

/// Sidebar entries in activation order, consumed once at startup.
pub fn sidebar_items() -> Vec<String> {
    vec![
        format!("{HOME} Home"),
        format!("{EXPLORE} Explore"),
        format!("{SETTINGS} Settings"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_activation_order() {
        let items = sidebar_items();
        assert_eq!(items.len(), 3);
        assert!(items[0].ends_with("Home"));
        assert!(items[1].ends_with("Explore"));
        assert!(items[2].ends_with("Settings"));
    }
}
