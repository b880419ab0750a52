pub mod pagination;

pub use pagination::{BreakAnalysis, check_band_fit};
