//! Breed-aware weather safety scoring for dog walks.
//!
//! [`assessment::assess`] judges a single reading for a breed and
//! [`best_times::calculate_best_times`] ranks the fixed daily walking
//! windows. Both are pure and may be called from any thread.

pub mod assessment;
pub mod best_times;
pub mod breed;
pub mod config;
pub mod forecast;
pub mod models;
pub mod report;
