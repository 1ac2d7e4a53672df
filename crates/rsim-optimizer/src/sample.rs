//! Sample route: four stops heading north-east from central Bangalore.

use rsim_core::Waypoint;

use crate::OptimizeRequest;

pub fn sample_stops() -> Vec<Waypoint> {
    vec![
        Waypoint::new(12.9716, 77.5946, "Start Point"),
        Waypoint::new(12.9789, 77.6008, "Intermediate Stop 1"),
        Waypoint::new(12.9861, 77.6070, "Intermediate Stop 2"),
        Waypoint::new(12.9933, 77.6132, "End Point"),
    ]
}

pub fn sample_request() -> OptimizeRequest {
    OptimizeRequest::new(sample_stops())
}
