//! Refuel plan output types.

use crate::domain::StationId;

/// Round to two decimal places (cents, hundredths of a mile or gallon).
pub fn round2(value: f64) -> f64 {
    // `+ 0.0` turns -0.0 into 0.0
    (value * 100.0).round() / 100.0 + 0.0
}

/// A purchase at one station.
///
/// Values are kept at full precision; use the `rounded_*` accessors when
/// presenting them.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub station_id: StationId,
    /// Miles from the start of the route.
    pub position: f64,
    /// Price per gallon.
    pub price: f64,
    /// Gallons bought. Always above the planner's minimum purchase.
    pub quantity: f64,
    /// `quantity * price`.
    pub cost: f64,
}

impl Stop {
    pub fn rounded_position(&self) -> f64 {
        round2(self.position)
    }

    pub fn rounded_quantity(&self) -> f64 {
        round2(self.quantity)
    }

    pub fn rounded_cost(&self) -> f64 {
        round2(self.cost)
    }
}

/// An ordered list of stops and what they cost in total.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RefuelPlan {
    stops: Vec<Stop>,
    total_cost: f64,
}

impl RefuelPlan {
    /// Build a plan; the total is summed from the full-precision stop costs.
    pub fn new(stops: Vec<Stop>) -> Self {
        let total_cost = stops.iter().fold(0.0, |acc, s| acc + s.cost);
        Self { stops, total_cost }
    }

    /// Stops in increasing position.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Full-precision total cost.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Total cost rounded once, from the full-precision sum.
    pub fn rounded_total_cost(&self) -> f64 {
        round2(self.total_cost)
    }

    /// Gallons bought across all stops.
    pub fn total_quantity(&self) -> f64 {
        self.stops.iter().fold(0.0, |acc, s| acc + s.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(position: f64, price: f64, quantity: f64) -> Stop {
        Stop {
            station_id: StationId(1),
            position,
            price,
            quantity,
            cost: quantity * price,
        }
    }

    #[test]
    fn round2_behaviour() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.235_1), 1.24);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(-2.499), -2.5);
        assert!(round2(-0.0).is_sign_positive());
        assert!(round2(-0.001).is_sign_positive());
    }

    #[test]
    fn total_is_rounded_once() {
        // Each cost rounds down to 0.33; the full sum rounds to 1.00
        let plan = RefuelPlan::new(vec![
            stop(10.0, 1.0, 1.0 / 3.0),
            stop(20.0, 1.0, 1.0 / 3.0),
            stop(30.0, 1.0, 1.0 / 3.0),
        ]);
        assert_eq!(plan.rounded_total_cost(), 1.0);
        let from_rounded: f64 = plan.stops().iter().map(Stop::rounded_cost).sum();
        assert!((from_rounded - 0.99).abs() < 1e-9);
    }

    #[test]
    fn empty_plan() {
        let plan = RefuelPlan::default();
        assert!(plan.is_empty());
        assert_eq!(plan.total_cost(), 0.0);
        assert_eq!(plan.total_quantity(), 0.0);
    }

    #[test]
    fn plan_without_stops_totals_positive_zero() {
        let plan = RefuelPlan::new(Vec::new());
        assert!(plan.total_cost().is_sign_positive());
        assert!(plan.rounded_total_cost().is_sign_positive());
        assert!(plan.total_quantity().is_sign_positive());
    }

    #[test]
    fn rounded_accessors() {
        let s = stop(12.345_6, 3.999, 7.891_2);
        assert_eq!(s.rounded_position(), 12.35);
        assert_eq!(s.rounded_quantity(), 7.89);
        assert_eq!(s.rounded_cost(), round2(7.891_2 * 3.999));
    }
}
