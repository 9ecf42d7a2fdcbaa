pub mod data_client;
pub mod parsers;

pub use data_client::{DataClient, DataSource};
