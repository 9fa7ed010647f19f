//! API request handlers

mod health;
mod instances;
mod launch;

pub use health::*;
pub use instances::*;
pub use launch::*;
