pub mod config;
pub mod logging;

// Record enrichment
pub mod enrich;
pub mod icon;
pub mod record;

// Peripheral helpers shared by the UI layers
pub mod browser;
pub mod i18n;
pub mod trigger;
