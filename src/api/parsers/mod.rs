mod document;
mod timestamp;

pub use document::parse_document;
pub use timestamp::parse_kickoff;
