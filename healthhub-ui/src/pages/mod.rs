//! Pages
//!
//! Top-level page components for each route.

pub mod home;
pub mod weight;

pub use home::HomePage;
pub use weight::WeightPage;
