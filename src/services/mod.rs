pub mod archive;
pub mod batch;
pub mod cleaner;
