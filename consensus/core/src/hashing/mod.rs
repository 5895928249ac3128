pub mod header;
pub mod tx;
