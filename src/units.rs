use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops;
use std::str::FromStr;

pub const SCALE: u64 = 10_000;

const TENTH: u64 = SCALE / 10;
const CENT: u64 = SCALE / 100;

// Liters and currency share the same 4-digit fixed point; they differ in
// the granularity the station rounds them at.
fn parse_units(s: &str) -> Result<u64, &'static str> {
    match s.split_once('.') {
        Some((whole, frac)) => {
            if frac.is_empty() || frac.len() > 4 {
                return Err("A valid quantity carries 1 to 4 fractional digits");
            }
            let whole: u64 = whole.parse().map_err(|_| "Bad input for quantity")?;
            let frac_units: u64 = frac.parse().map_err(|_| "Bad input for quantity")?;
            let pad = 10u64.pow(4 - frac.len() as u32);
            Ok(whole * SCALE + frac_units * pad)
        }
        None => match s.parse::<u64>() {
            Ok(whole) => Ok(whole * SCALE),
            Err(_) => Err("Bad input for quantity"),
        },
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Serialize, Deserialize)]
pub struct Volume(u64);

impl Volume {
    pub const fn new(units: u64) -> Volume {
        Volume(units)
    }

    pub const fn units(&self) -> u64 {
        self.0
    }

    pub fn from_f64(n: f64) -> Result<Volume, &'static str> {
        Volume::from_str(&n.to_string())
    }

    // The pump meters in tenths of a liter; the remainder is discarded,
    // never rounded up.
    pub const fn truncate_to_tenths(&self) -> Volume {
        Volume(self.0 - self.0 % TENTH)
    }
}

impl FromStr for Volume {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Volume, &'static str> {
        parse_units(s).map(Volume)
    }
}

impl ops::Add<Volume> for Volume {
    type Output = Self;

    fn add(self, rhs: Volume) -> Volume {
        Volume(self.0 + rhs.0)
    }
}

impl ops::Sub<Volume> for Volume {
    type Output = Self;

    fn sub(self, rhs: Volume) -> Volume {
        Volume(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{} l", self.0 / SCALE, self.0 % SCALE / TENTH)
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    pub const fn new(units: u64) -> Money {
        Money(units)
    }

    pub const fn units(&self) -> u64 {
        self.0
    }

    pub fn from_f64(n: f64) -> Result<Money, &'static str> {
        Money::from_str(&n.to_string())
    }

    // Charges land on whole cents, half-up.
    pub const fn round_to_cents(&self) -> Money {
        Money((self.0 + CENT / 2) / CENT * CENT)
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Money, &'static str> {
        parse_units(s).map(Money)
    }
}

impl ops::Add<Money> for Money {
    type Output = Self;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl ops::Sub<Money> for Money {
    type Output = Self;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / SCALE, self.0 % SCALE / CENT)
    }
}
