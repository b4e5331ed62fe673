pub mod datasets;
pub mod source;
pub mod store;
