#[macro_use]
mod macros;

pub mod cost;
pub mod proportion;
pub mod rate;
pub mod units;

pub use self::{cost::Cost, proportion::Proportion, rate::UnitRate, units::Units};
