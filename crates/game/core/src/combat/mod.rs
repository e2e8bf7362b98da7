//! Combat resolution math.
//!
//! This module provides pure functions for resolving combat interactions.
//! All combat logic is deterministic and side-effect free.
//!
//! # Core Functions
//!
//! - `element_multiplier`: Elemental advantage lookup
//! - `compute_damage`: Damage formula with defense, guard and the floor of 1
//! - `apply_damage`: HP reduction (clamped to 0)

pub mod damage;

pub use damage::{apply_damage, compute_damage, element_multiplier};
