pub mod archive;
pub mod download;
pub mod report;
pub mod types;
mod upload;

// Glob re-exports so the utoipa path items stay reachable from `ApiDoc`
pub use archive::*;
pub use download::*;
pub use report::*;
pub use types::*;
