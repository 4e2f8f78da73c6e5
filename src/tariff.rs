mod class;
mod schedule;
mod slab;

pub use self::{
    class::TariffClass,
    schedule::{EnergyCharge, TariffSchedule},
    slab::{Slab, SlabBound, SlabCharge},
};
