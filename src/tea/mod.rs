/// Capital and operating cost aggregation.
pub mod costs;
pub mod engine;
/// Engineering derivation from physical inputs.
pub mod engineering;
pub mod irr;
pub mod metrics;
/// Year-by-year cash-flow construction.
pub mod timeline;
pub mod types;
