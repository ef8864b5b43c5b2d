use crate::fill::fill_tank;
use crate::station::Customer;
use crate::units::{Money, Volume};
use serde::{de::Error, Deserializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::TryFrom;

#[derive(Debug, PartialEq, Hash, Eq, Copy, Clone, Serialize, Deserialize)]
pub struct CustomerId(pub u16);

// An empty or "null" amount column means "fill to capacity".
fn possible_null_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let mut s: &str = Deserialize::deserialize(deserializer)?;
    if s.is_empty() || s.to_lowercase() == "null" {
        s = "-1.0";
    }
    s.parse().map_err(D::Error::custom)
}

#[derive(Debug, Copy, Clone, Serialize, PartialEq, Deserialize)]
pub struct RowRecord {
    customer: CustomerId,
    fuel_price: f64,
    #[serde(deserialize_with = "possible_null_f64")]
    amount: f64,
}

#[derive(Debug, PartialEq, Copy, Clone)]
pub struct FillRequest {
    pub customer: CustomerId,
    pub fuel_price: Money,
    pub amount: Option<Volume>,
}

impl TryFrom<RowRecord> for FillRequest {
    type Error = &'static str;

    fn try_from(row: RowRecord) -> Result<FillRequest, &'static str> {
        let amount = if row.amount < 0.0 {
            None
        } else {
            Some(Volume::from_f64(row.amount)?)
        };
        Ok(FillRequest {
            customer: row.customer,
            fuel_price: Money::from_f64(row.fuel_price)?,
            amount,
        })
    }
}

pub type StationCustomers = HashMap<CustomerId, Customer>;

fn valid_price(fuel_price: Money) -> bool {
    fuel_price.units() > 0
}

pub fn serve(customers: &mut StationCustomers, request: &FillRequest) {
    match customers.get_mut(&request.customer) {
        Some(customer) if valid_price(request.fuel_price) => {
            fill_tank(customer, request.fuel_price, request.amount)
        }
        _ => (),
    }
}
