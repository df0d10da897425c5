//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Route, RouteLeg};

/// Request to find a route between two stations.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Source station code (case-insensitive)
    pub from: String,

    /// Destination station code (case-insensitive)
    pub to: String,
}

/// A leg of a found route.
#[derive(Debug, Serialize)]
pub struct LegResult {
    /// Train number
    pub train_no: String,

    /// Boarding station code
    pub from: String,

    /// Alighting station code
    pub to: String,
}

impl LegResult {
    /// Create from a domain leg.
    pub fn from_leg(leg: &RouteLeg) -> Self {
        Self {
            train_no: leg.train.as_str().to_string(),
            from: leg.from.as_str().to_string(),
            to: leg.to.as_str().to_string(),
        }
    }
}

/// Response for a successful route query.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Number of distinct trains boarded (0 when from equals to)
    pub min_trains: usize,

    /// The legs of the route, in travel order
    pub legs: Vec<LegResult>,
}

impl RouteResponse {
    /// Create from a domain route.
    pub fn from_route(route: &Route) -> Self {
        Self {
            min_trains: route.min_trains,
            legs: route.legs.iter().map(LegResult::from_leg).collect(),
        }
    }
}

/// A station in the station listing.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Station code
    pub code: String,

    /// Display name
    pub name: String,
}

/// Response listing all known stations.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    /// Stations sorted by display name
    pub stations: Vec<StationResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
