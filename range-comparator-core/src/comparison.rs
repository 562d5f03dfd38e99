//! Module for comparing vehicles by range.

use crate::imports::*;
use crate::vehicle::Vehicle;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Outcome of comparing the range of two vehicles
pub struct RangeComparison {
    /// Textual form of the first vehicle, `"{year} {name}"`
    pub first: String,
    /// Range of the first vehicle, miles
    pub first_range: f64,
    /// Textual form of the second vehicle, `"{year} {name}"`
    pub second: String,
    /// Range of the second vehicle, miles
    pub second_range: f64,
}

impl SerdeAPI for RangeComparison {}

impl RangeComparison {
    pub fn new(first: &Vehicle, second: &Vehicle) -> Self {
        Self {
            first: first.to_string(),
            first_range: first.range(),
            second: second.to_string(),
            second_range: second.range(),
        }
    }

    /// Ordering of the first vehicle's range relative to the second's
    pub fn ordering(&self) -> Ordering {
        self.first_range.total_cmp(&self.second_range)
    }

    /// Textual form of the vehicle with the longer range, `None` on a tie
    pub fn winner(&self) -> Option<&str> {
        match self.ordering() {
            Ordering::Greater => Some(&self.first),
            Ordering::Less => Some(&self.second),
            Ordering::Equal => None,
        }
    }
}

impl fmt::Display for RangeComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ordering() {
            Ordering::Greater => write!(
                f,
                "{} has a longer range ({:.1} miles) than {} ({:.1} miles)",
                self.first, self.first_range, self.second, self.second_range
            ),
            Ordering::Less => write!(
                f,
                "{} has a longer range ({:.1} miles) than {} ({:.1} miles)",
                self.second, self.second_range, self.first, self.first_range
            ),
            Ordering::Equal => write!(
                f,
                "{} and {} have the same range ({:.1} miles)",
                self.first, self.second, self.first_range
            ),
        }
    }
}

/// Vehicles ordered by descending range.  Vehicles with equal range keep
/// their input order.
pub fn rank_by_range(vehicles: &[Vehicle]) -> Vec<&Vehicle> {
    let mut ranked: Vec<&Vehicle> = vehicles.iter().collect();
    ranked.sort_by(|a, b| b.range().total_cmp(&a.range()));
    ranked
}
