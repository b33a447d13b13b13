//! Sidebar navigation entries

use crate::icon::IconId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub icon: IconId,
    pub has_submenu: bool,
}

/// The fixed sidebar, top to bottom.
pub fn sidebar() -> Vec<NavItem> {
    vec![
        NavItem {
            label: "Dashboard",
            icon: IconId::LayoutDashboard,
            has_submenu: false,
        },
        NavItem {
            label: "Product",
            icon: IconId::ShoppingBag,
            has_submenu: true,
        },
        NavItem {
            label: "Customers",
            icon: IconId::Users,
            has_submenu: true,
        },
        NavItem {
            label: "Income",
            icon: IconId::Wallet,
            has_submenu: true,
        },
        NavItem {
            label: "Promote",
            icon: IconId::Tag,
            has_submenu: true,
        },
        NavItem {
            label: "Help",
            icon: IconId::HelpCircle,
            has_submenu: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_leads_and_lacks_a_submenu() {
        let items = sidebar();
        assert_eq!(items.len(), 6);
        assert_eq!(items[0].label, "Dashboard");
        assert!(!items[0].has_submenu);
        assert!(items[1..].iter().all(|item| item.has_submenu));
    }
}
