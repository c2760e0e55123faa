//! Use cases - scorer story orchestration.
//!
//! Each module groups the use cases for one area of the scorebook.

pub mod lifecycle;
pub mod scoring;
pub mod statistics;

pub use lifecycle::LifecycleUseCases;
pub use scoring::ScoringUseCases;
pub use statistics::StatisticsQueries;
