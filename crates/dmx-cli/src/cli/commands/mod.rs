//! CLI command handlers, one per file.

mod basename;
mod browser;
mod enrich;
mod messages;

pub use basename::run_basename;
pub use browser::run_browser;
pub use enrich::run_enrich;
pub use messages::run_messages;
