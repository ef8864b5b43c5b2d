use crate::units::{Money, Volume};
use serde::{Deserialize, Serialize};

pub trait Fueling {
    fn free_space(&self) -> Volume;
    fn is_full(&self) -> bool;
    fn pour(&mut self, amount: Volume);
}

#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub max_tank_capacity: Volume,
    pub fuel_remains: Volume,
}

impl Vehicle {
    pub fn new(max_tank_capacity: Volume, fuel_remains: Volume) -> Vehicle {
        Vehicle {
            max_tank_capacity,
            fuel_remains,
        }
    }
}

impl Fueling for Vehicle {
    fn free_space(&self) -> Volume {
        self.max_tank_capacity - self.fuel_remains
    }

    fn is_full(&self) -> bool {
        self.fuel_remains >= self.max_tank_capacity
    }

    // A pour never takes the tank past its capacity.
    fn pour(&mut self, amount: Volume) {
        self.fuel_remains = (self.fuel_remains + amount).min(self.max_tank_capacity);
    }
}

#[derive(Debug, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub money: Money,
    pub vehicle: Vehicle,
}

impl Customer {
    pub fn new(money: Money, vehicle: Vehicle) -> Customer {
        Customer { money, vehicle }
    }
}
