#![doc = include_str!("../README.md")]

pub mod bill;
pub mod error;
pub mod ledger;
pub mod prelude;
pub mod quantity;
pub mod tariff;

pub use self::{
    bill::{BillBreakdown, calculate_bill},
    error::BillingError,
    quantity::{Cost, Units},
    tariff::TariffClass,
};
