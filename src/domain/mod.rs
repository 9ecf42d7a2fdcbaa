mod catalog;
mod guide_data;
pub mod models;

pub use catalog::{Catalog, Referenced};
pub use guide_data::GuideData;
pub use models::*;
