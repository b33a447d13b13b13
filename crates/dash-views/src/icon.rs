//! Icon registry
//!
//! Navigation and help-category configuration refer to icons by name, so
//! the set is a closed enumeration with a static lookup table rather than
//! a handle into any particular icon pack.

use ahash::AHashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Every icon the dashboard references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconId {
    LayoutDashboard,
    ShoppingBag,
    Users,
    Wallet,
    Tag,
    HelpCircle,
    Settings,
    BarChart,
    FileText,
    Bell,
    Mail,
    Calendar,
    Folder,
    CreditCard,
    Truck,
    Package,
    Star,
    Heart,
    Shield,
    Lock,
}

impl IconId {
    pub const ALL: [IconId; 20] = [
        IconId::LayoutDashboard,
        IconId::ShoppingBag,
        IconId::Users,
        IconId::Wallet,
        IconId::Tag,
        IconId::HelpCircle,
        IconId::Settings,
        IconId::BarChart,
        IconId::FileText,
        IconId::Bell,
        IconId::Mail,
        IconId::Calendar,
        IconId::Folder,
        IconId::CreditCard,
        IconId::Truck,
        IconId::Package,
        IconId::Star,
        IconId::Heart,
        IconId::Shield,
        IconId::Lock,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IconId::LayoutDashboard => "LayoutDashboard",
            IconId::ShoppingBag => "ShoppingBag",
            IconId::Users => "Users",
            IconId::Wallet => "Wallet",
            IconId::Tag => "Tag",
            IconId::HelpCircle => "HelpCircle",
            IconId::Settings => "Settings",
            IconId::BarChart => "BarChart",
            IconId::FileText => "FileText",
            IconId::Bell => "Bell",
            IconId::Mail => "Mail",
            IconId::Calendar => "Calendar",
            IconId::Folder => "Folder",
            IconId::CreditCard => "CreditCard",
            IconId::Truck => "Truck",
            IconId::Package => "Package",
            IconId::Star => "Star",
            IconId::Heart => "Heart",
            IconId::Shield => "Shield",
            IconId::Lock => "Lock",
        }
    }

    /// Resolve a configured icon name. `None` for names outside the set.
    pub fn from_name(name: &str) -> Option<IconId> {
        REGISTRY.get(name).copied()
    }
}

static REGISTRY: Lazy<AHashMap<&'static str, IconId>> =
    Lazy::new(|| IconId::ALL.iter().map(|id| (id.as_str(), *id)).collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_every_icon() {
        for id in IconId::ALL {
            assert_eq!(IconId::from_name(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_unknown_name_resolves_to_none() {
        assert_eq!(IconId::from_name("Sparkles"), None);
        assert_eq!(IconId::from_name("layoutdashboard"), None);
    }

    #[test]
    fn test_serializes_as_the_configured_name() {
        let json = serde_json::to_string(&IconId::CreditCard).unwrap();
        assert_eq!(json, "\"CreditCard\"");
        let back: IconId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, IconId::CreditCard);
    }
}
