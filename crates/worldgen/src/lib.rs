//! Procedural generation of the city the drone flies over.

pub mod city;
pub mod kinds;

pub use city::*;
pub use kinds::*;
