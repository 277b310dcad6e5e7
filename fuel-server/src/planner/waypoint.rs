//! Waypoints visited by the planning scan.

use crate::domain::ProjectedStation;

/// A point the planner stops at: a real station, or the end of the route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Waypoint<'a> {
    Station(&'a ProjectedStation),
    Destination { position: f64 },
}

impl Waypoint<'_> {
    /// Miles from the start of the route.
    pub fn position(&self) -> f64 {
        match self {
            Waypoint::Station(s) => s.position,
            Waypoint::Destination { position } => *position,
        }
    }

    pub fn is_destination(&self) -> bool {
        matches!(self, Waypoint::Destination { .. })
    }
}

/// Order stations by position and append the destination.
///
/// Stations off the route (outside `[0, total_distance]`) or with a
/// non-finite price are dropped. Stations sharing a position keep their
/// input order.
pub fn build_waypoints(stations: &[ProjectedStation], total_distance: f64) -> Vec<Waypoint<'_>> {
    let mut on_route: Vec<&ProjectedStation> = stations
        .iter()
        .filter(|s| (0.0..=total_distance).contains(&s.position) && s.price.is_finite())
        .collect();
    on_route.sort_by(|a, b| a.position.total_cmp(&b.position));

    on_route
        .into_iter()
        .map(Waypoint::Station)
        .chain(std::iter::once(Waypoint::Destination {
            position: total_distance,
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    fn ps(id: u64, position: f64, price: f64) -> ProjectedStation {
        ProjectedStation::new(StationId(id), position, price)
    }

    #[test]
    fn sorted_with_destination_last() {
        let stations = vec![ps(1, 80.0, 3.0), ps(2, 20.0, 4.0), ps(3, 50.0, 3.5)];
        let waypoints = build_waypoints(&stations, 100.0);

        let positions: Vec<f64> = waypoints.iter().map(Waypoint::position).collect();
        assert_eq!(positions, vec![20.0, 50.0, 80.0, 100.0]);
        assert!(waypoints.last().unwrap().is_destination());
        assert!(!waypoints[0].is_destination());
    }

    #[test]
    fn empty_input_is_just_destination() {
        let waypoints = build_waypoints(&[], 42.0);
        assert_eq!(waypoints, vec![Waypoint::Destination { position: 42.0 }]);
    }

    #[test]
    fn drops_off_route_and_unpriced_stations() {
        let stations = vec![
            ps(1, -1.0, 3.0),
            ps(2, 101.0, 3.0),
            ps(3, f64::NAN, 3.0),
            ps(4, 10.0, f64::NAN),
            ps(5, 100.0, 3.0),
        ];
        let waypoints = build_waypoints(&stations, 100.0);
        assert_eq!(waypoints.len(), 2);
        assert_eq!(waypoints[0], Waypoint::Station(&stations[4]));
    }

    #[test]
    fn ties_keep_input_order() {
        let stations = vec![ps(9, 10.0, 3.0), ps(1, 10.0, 2.0)];
        let waypoints = build_waypoints(&stations, 20.0);
        assert_eq!(waypoints[0], Waypoint::Station(&stations[0]));
        assert_eq!(waypoints[1], Waypoint::Station(&stations[1]));
    }
}
