use crate::station::{Customer, Fueling};
use crate::units::{Money, Volume, SCALE};
use serde::{Deserialize, Serialize};

// Station policy: the pump does not start below two liters.
pub const MINIMUM_FILL: Volume = Volume::new(2 * SCALE);

#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct FillQuote {
    pub amount: Volume,
    pub total_price: Money,
}

fn affordable_volume(money: Money, fuel_price: Money) -> Volume {
    if fuel_price.units() == 0 {
        return Volume::new(0);
    }
    let liters = money.units() as u128 * SCALE as u128 / fuel_price.units() as u128;
    Volume::new(liters as u64)
}

fn total_price(amount: Volume, fuel_price: Money) -> Money {
    let raw = amount.units() as u128 * fuel_price.units() as u128 / SCALE as u128;
    Money::new(raw as u64).round_to_cents()
}

pub fn quote(
    customer: &Customer,
    fuel_price: Money,
    requested: Option<Volume>,
) -> Option<FillQuote> {
    let free_space = customer.vehicle.free_space();
    let desired = requested.unwrap_or(free_space);
    let affordable = affordable_volume(customer.money, fuel_price);
    let amount = desired.min(free_space).min(affordable).truncate_to_tenths();
    if amount < MINIMUM_FILL {
        return None;
    }
    Some(FillQuote {
        amount,
        total_price: total_price(amount, fuel_price),
    })
}

pub fn fill_tank(customer: &mut Customer, fuel_price: Money, requested: Option<Volume>) {
    if let Some(quote) = quote(customer, fuel_price, requested) {
        customer.vehicle.pour(quote.amount);
        customer.money = customer.money - quote.total_price;
    }
}
