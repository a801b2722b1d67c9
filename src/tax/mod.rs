pub mod es;
pub mod income;

pub use es::{Bracket, EXCESS_TAX_RATE, TAX_RATES};
pub use income::{calculate_income_tax, IncomeTaxReport, TaxedSlice};
