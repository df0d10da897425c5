//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{Route, RouteLeg};
use crate::schedule::{StationDirectory, TrainDirectory};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the station pickers.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub stations: Vec<StationOptionView>,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Route results fragment.
#[derive(Template)]
#[template(path = "route_results.html")]
pub struct RouteResultsTemplate {
    pub min_trains: usize,
    pub trivial: bool,
    pub legs: Vec<LegView>,
}

impl RouteResultsTemplate {
    /// Build the fragment view for a found route.
    pub fn from_route(route: &Route, stations: &StationDirectory, trains: &TrainDirectory) -> Self {
        Self {
            min_trains: route.min_trains,
            trivial: route.is_trivial(),
            legs: route
                .legs
                .iter()
                .enumerate()
                .map(|(i, leg)| LegView::new(i + 1, leg, stations, trains))
                .collect(),
        }
    }
}

/// Error/no-route fragment.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A dropdown option.
#[derive(Debug, Clone)]
pub struct StationOptionView {
    pub code: String,
    pub name: String,
}

/// One rendered route leg.
#[derive(Debug, Clone)]
pub struct LegView {
    pub step: usize,
    pub train: String,
    pub from: String,
    pub to: String,
}

impl LegView {
    /// Resolve display labels for a leg. Train names are appended in
    /// parentheses when the directory knows them; stations fall back to
    /// their codes when unnamed.
    pub fn new(
        step: usize,
        leg: &RouteLeg,
        stations: &StationDirectory,
        trains: &TrainDirectory,
    ) -> Self {
        let train = match trains.name(&leg.train) {
            Some(name) => format!("{} ({})", leg.train, name),
            None => leg.train.to_string(),
        };

        Self {
            step,
            train,
            from: stations.name_or_code(&leg.from).to_string(),
            to: stations.name_or_code(&leg.to).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StationCode, TrainNo};
    use crate::schedule::{ScheduleEntry, TrainInfoEntry};

    fn leg(t: &str, from: &str, to: &str) -> RouteLeg {
        RouteLeg::new(
            TrainNo::parse(t).unwrap(),
            StationCode::parse(from).unwrap(),
            StationCode::parse(to).unwrap(),
        )
    }

    #[test]
    fn leg_view_uses_names_when_known() {
        let stations = StationDirectory::from_entries(&[ScheduleEntry {
            train: TrainNo::parse("12951").unwrap(),
            station: StationCode::parse("NDLS").unwrap(),
            station_name: Some("New Delhi".to_string()),
        }]);
        let trains = TrainDirectory::from_entries(&[TrainInfoEntry {
            train: TrainNo::parse("12951").unwrap(),
            name: "Mumbai Rajdhani".to_string(),
        }]);

        let view = LegView::new(1, &leg("12951", "NDLS", "BCT"), &stations, &trains);

        assert_eq!(view.train, "12951 (Mumbai Rajdhani)");
        assert_eq!(view.from, "New Delhi");
        // BCT has no name in the directory; the code stands in.
        assert_eq!(view.to, "BCT");
    }

    #[test]
    fn leg_view_falls_back_to_codes() {
        let stations = StationDirectory::default();
        let trains = TrainDirectory::default();

        let view = LegView::new(2, &leg("T1", "A", "B"), &stations, &trains);

        assert_eq!(view.step, 2);
        assert_eq!(view.train, "T1");
        assert_eq!(view.from, "A");
        assert_eq!(view.to, "B");
    }
}
