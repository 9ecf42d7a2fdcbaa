mod client;

pub use client::JsonClient;
