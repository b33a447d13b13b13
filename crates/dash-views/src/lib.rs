//! Headless view models for the dashboard panels
//!
//! Everything a frontend needs to draw a panel, with no drawing backend:
//! typed table columns, the pagination control, render-state derivation,
//! stat cards and the icon registry. Each feature module pairs these with
//! the row type served by `dash-data`.

pub mod features;
mod icon;
mod nav;
mod pagination;
mod render;
mod stats;
mod table;

pub use icon::IconId;
pub use nav::{sidebar, NavItem};
pub use pagination::{entries_summary, PageSlot, PaginationControl};
pub use render::{derive_render, BadgeVariant, PanelCopy, PanelRender};
pub use stats::{format_count, format_trend, StatCard};
pub use table::{Column, TableModel};
