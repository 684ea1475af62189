pub mod http;

pub use http::HttpGroupSubmitter;
