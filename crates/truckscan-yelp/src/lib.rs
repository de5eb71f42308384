pub mod client;
pub mod error;
pub mod normalize;
pub mod pacing;
pub mod types;

pub use client::YelpClient;
pub use error::YelpError;
pub use normalize::normalize_business;
pub use pacing::{Pacer, Sleep, TokioSleep};
pub use types::{BusinessDetail, BusinessSummary, SearchParams};
