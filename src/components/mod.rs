//! Shared UI components used across pages.

pub mod chart_card;
pub mod kpi_card;
pub mod loading;
pub mod protected;
pub mod risk_badge;
pub mod sidebar;
pub mod toaster;
