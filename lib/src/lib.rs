pub mod config;
pub mod destination;
pub mod error;
pub mod export;
pub mod loader;
pub mod models;
pub mod normalize;
pub mod profile;
pub mod utils;

// Re-export the types most callers need
pub use destination::Destination;
pub use error::{ExportError, Result};
pub use export::{export, ExportSummary};
pub use loader::load_links;
pub use models::LinkRecord;
