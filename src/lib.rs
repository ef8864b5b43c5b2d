pub mod fill;
pub mod records;
pub mod station;
pub mod units;

pub use crate::fill::{fill_tank, quote, FillQuote, MINIMUM_FILL};
pub use crate::records::{serve, CustomerId, FillRequest, RowRecord, StationCustomers};
pub use crate::station::{Customer, Fueling, Vehicle};
pub use crate::units::{Money, Volume};
