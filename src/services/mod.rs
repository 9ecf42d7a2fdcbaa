pub mod guide;

pub use guide::{GuideService, RenderRequest};
