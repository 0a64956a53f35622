//! Per-race result recording and rendering.

use super::driver::Driver;

/// Recording and rendering boundary for a single race.
pub trait RaceResult {
    /// Append an entry and credit `points` to `driver` immediately.
    fn record_result(&mut self, driver: &mut Driver, position: u32, points: i32);

    /// Header line followed by one line per entry, ordered by position.
    fn results(&self) -> String;
}

/// One finishing entry.
///
/// The driver's name is captured when the entry is recorded; driver names
/// never change, and later car swaps do not reach back into the entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    pub driver_name: String,
    pub position: u32,
    pub points: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RallyRaceResult {
    race_name: String,
    location: String,
    entries: Vec<ResultEntry>,
}

impl RallyRaceResult {
    pub fn new(race_name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            race_name: race_name.into(),
            location: location.into(),
            entries: Vec::new(),
        }
    }

    pub fn race_name(&self) -> &str {
        &self.race_name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[ResultEntry] {
        &self.entries
    }

    /// Entries sorted by position; equal positions keep insertion order.
    pub fn sorted_entries(&self) -> Vec<&ResultEntry> {
        let mut sorted: Vec<&ResultEntry> = self.entries.iter().collect();
        sorted.sort_by_key(|entry| entry.position);
        sorted
    }
}

impl RaceResult for RallyRaceResult {
    // Duplicate positions and repeated drivers are accepted as-is.
    fn record_result(&mut self, driver: &mut Driver, position: u32, points: i32) {
        self.entries.push(ResultEntry {
            driver_name: driver.name().to_string(),
            position,
            points,
        });
        driver.add_points(points);
    }

    fn results(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Race: {} ({})\n", self.race_name, self.location));
        for entry in self.sorted_entries() {
            out.push_str(&format!(
                " Position {}: {} - {} points\n",
                entry.position, entry.driver_name, entry.points
            ));
        }
        out
    }
}
