//! Scan Pipeline
//!
//! fetch → extract → normalize → classify, orchestrated by [`Scanner`].

pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod scanner;

pub use extract::extract;
pub use fetch::{HttpFetcher, PageFetcher};
pub use normalize::normalize;
pub use scanner::Scanner;
