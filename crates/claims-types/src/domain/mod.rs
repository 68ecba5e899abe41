pub mod claim;
pub mod summary;
