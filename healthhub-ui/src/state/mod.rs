//! State Management
//!
//! App-wide notifications plus the weight page's own state.

pub mod global;
pub mod weight;

pub use global::{provide_global_state, use_global_state, GlobalState};
pub use weight::{provide_weight_state, use_weight_state, WeightState, WeightTab};
