//! Console and JSON rendering of a played season.

use serde::Serialize;

use crate::core::car::{RallyCar, SurfaceKind};
use crate::core::race::RaceResult;
use crate::core::registry::Championship;
use crate::core::statistics::{
    average_points_per_driver, most_successful_country, total_races_held,
};
use crate::season::SeasonOutcome;

/// Printed in place of a country when no drivers are registered.
pub const NO_DATA: &str = "No data available";
/// Printed in place of a leader when no drivers are registered.
pub const NO_LEADER: &str = "No leader: no drivers registered";

pub fn leader_line(championship: &Championship) -> String {
    match championship.leading_driver() {
        Some(driver) => format!("{} with {} points", driver.name(), driver.total_points()),
        None => NO_LEADER.to_string(),
    }
}

/// Fixed-point rendering that rounds exact halves away from zero
/// (`0.125` -> `0.13`), unlike `{:.N}` which rounds them to even.
pub fn fixed(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    format!("{:.*}", decimals, (value * scale).round() / scale)
}

pub fn statistics_block(championship: &Championship) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total Drivers: {}\n", championship.total_drivers()));
    out.push_str(&format!("Total Races: {}\n", total_races_held(championship)));
    out.push_str(&format!(
        "Average Points Per Driver: {}\n",
        fixed(average_points_per_driver(championship), 2)
    ));
    out.push_str(&format!(
        "Most Successful Country: {}\n",
        most_successful_country(championship).as_deref().unwrap_or(NO_DATA)
    ));
    out.push_str(&format!(
        "Total Championship Points: {}\n",
        championship.total_championship_points()
    ));
    out
}

/// Results of every race, in the order the races were added.
pub fn race_results(championship: &Championship) -> String {
    championship
        .races()
        .iter()
        .map(|race| race.results())
        .collect()
}

pub fn performance_line(car: &RallyCar) -> String {
    format!(
        "{} Car Performance: {}",
        car.surface().label(),
        fixed(car.calculate_performance(), 1)
    )
}

/// Full console report.
///
/// The standings block is followed by an empty line before the leader
/// section; every other section is contiguous.
pub fn render(outcome: &SeasonOutcome) -> String {
    let championship = &outcome.championship;
    let mut out = championship.standings();
    out.push('\n');
    out.push_str("===== CHAMPIONSHIP LEADER =====\n");
    out.push_str(&leader_line(championship));
    out.push('\n');
    out.push_str("===== CHAMPIONSHIP STATISTICS =====\n");
    out.push_str(&statistics_block(championship));
    out.push_str("===== RACE RESULTS =====\n");
    out.push_str(&race_results(championship));
    out.push_str("===== CAR PERFORMANCE RATINGS =====\n");
    for car in outcome.featured_cars() {
        out.push_str(&performance_line(car));
        out.push('\n');
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonSummary {
    pub standings: Vec<StandingSummary>,
    pub leader: Option<String>,
    pub total_drivers: usize,
    pub total_races: usize,
    pub total_points: i64,
    pub average_points_per_driver: f64,
    pub most_successful_country: Option<String>,
    pub races: Vec<RaceSummary>,
    pub cars: Vec<CarSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingSummary {
    pub rank: usize,
    pub name: String,
    pub country: String,
    pub points: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RaceSummary {
    pub name: String,
    pub location: String,
    pub results: Vec<EntrySummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntrySummary {
    pub position: u32,
    pub driver: String,
    pub points: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarSummary {
    pub id: String,
    pub make: String,
    pub model: String,
    pub surface: SurfaceKind,
    pub performance: f64,
}

/// Structured counterpart of [`render`], for `--json`.
pub fn summarize(outcome: &SeasonOutcome) -> SeasonSummary {
    let championship = &outcome.championship;
    SeasonSummary {
        standings: championship
            .ranked_drivers()
            .into_iter()
            .map(|standing| StandingSummary {
                rank: standing.rank,
                name: standing.driver.name().to_string(),
                country: standing.driver.country().to_string(),
                points: standing.driver.total_points(),
            })
            .collect(),
        leader: championship
            .leading_driver()
            .map(|driver| driver.name().to_string()),
        total_drivers: championship.total_drivers(),
        total_races: total_races_held(championship),
        total_points: championship.total_championship_points(),
        average_points_per_driver: average_points_per_driver(championship),
        most_successful_country: most_successful_country(championship),
        races: championship
            .races()
            .iter()
            .map(|race| RaceSummary {
                name: race.race_name().to_string(),
                location: race.location().to_string(),
                results: race
                    .sorted_entries()
                    .into_iter()
                    .map(|entry| EntrySummary {
                        position: entry.position,
                        driver: entry.driver_name.clone(),
                        points: entry.points,
                    })
                    .collect(),
            })
            .collect(),
        cars: outcome
            .garage
            .iter()
            .map(|(id, car)| CarSummary {
                id: id.to_string(),
                make: car.make().to_string(),
                model: car.model().to_string(),
                surface: car.surface(),
                performance: car.calculate_performance(),
            })
            .collect(),
    }
}
