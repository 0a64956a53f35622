//! The championship registry: every registered driver and every added race.
//!
//! A `Championship` is an ordinary value owned by its caller. Independent
//! championships never share state, which keeps tests isolated.

use anyhow::{Result, anyhow};

use super::driver::Driver;
use super::race::{RaceResult, RallyRaceResult};

/// Index of a driver inside the championship that registered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DriverId(usize);

/// One row of the standings table.
#[derive(Debug, Clone, Copy)]
pub struct Standing<'a> {
    /// 1-based rank.
    pub rank: usize,
    pub driver: &'a Driver,
}

#[derive(Debug, Default)]
pub struct Championship {
    drivers: Vec<Driver>,
    races: Vec<RallyRaceResult>,
    total_drivers: usize,
    total_races: usize,
}

impl Championship {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a driver. Registering the same person twice yields two entries.
    pub fn register_driver(&mut self, driver: Driver) -> DriverId {
        let id = DriverId(self.drivers.len());
        self.drivers.push(driver);
        self.total_drivers += 1;
        id
    }

    pub fn add_race_result(&mut self, race: RallyRaceResult) {
        self.races.push(race);
        self.total_races += 1;
    }

    pub fn driver(&self, id: DriverId) -> Option<&Driver> {
        self.drivers.get(id.0)
    }

    pub fn driver_mut(&mut self, id: DriverId) -> Option<&mut Driver> {
        self.drivers.get_mut(id.0)
    }

    /// Record a result for a registered driver into `race`.
    pub fn record_result<R: RaceResult>(
        &mut self,
        race: &mut R,
        id: DriverId,
        position: u32,
        points: i32,
    ) -> Result<()> {
        let driver = self
            .drivers
            .get_mut(id.0)
            .ok_or_else(|| anyhow!("driver {:?} is not registered", id))?;
        race.record_result(driver, position, points);
        Ok(())
    }

    /// Registered drivers in registration order (read-only view).
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    /// Added races in the order they were added.
    pub fn races(&self) -> &[RallyRaceResult] {
        &self.races
    }

    pub fn total_drivers(&self) -> usize {
        self.total_drivers
    }

    pub fn total_races(&self) -> usize {
        self.total_races
    }

    /// Drivers ranked by points, highest first. Ties keep registration order.
    pub fn ranked_drivers(&self) -> Vec<Standing<'_>> {
        let mut sorted: Vec<&Driver> = self.drivers.iter().collect();
        sorted.sort_by(|left, right| right.total_points().cmp(&left.total_points()));
        sorted
            .into_iter()
            .enumerate()
            .map(|(index, driver)| Standing {
                rank: index + 1,
                driver,
            })
            .collect()
    }

    /// `{rank}. {name} ({country}): {points} points`, one line per driver.
    pub fn standings(&self) -> String {
        let mut out = String::new();
        for standing in self.ranked_drivers() {
            let driver = standing.driver;
            out.push_str(&format!(
                "{}. {} ({}): {} points\n",
                standing.rank,
                driver.name(),
                driver.country(),
                driver.total_points()
            ));
        }
        out
    }

    /// Driver with the most points; the earliest registered wins a tie.
    pub fn leading_driver(&self) -> Option<&Driver> {
        self.drivers.iter().reduce(|best, driver| {
            if driver.total_points() > best.total_points() {
                driver
            } else {
                best
            }
        })
    }

    pub fn total_championship_points(&self) -> i64 {
        self.drivers
            .iter()
            .map(|driver| i64::from(driver.total_points()))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::driver;

    #[test]
    fn counters_track_registrations() {
        let mut championship = Championship::new();
        championship.register_driver(driver("A", "X"));
        championship.register_driver(driver("A", "X"));
        championship.add_race_result(RallyRaceResult::new("R", "L"));

        assert_eq!(championship.total_drivers(), 2);
        assert_eq!(championship.drivers().len(), 2);
        assert_eq!(championship.total_races(), 1);
        assert_eq!(championship.races().len(), 1);
    }

    #[test]
    fn standings_sort_descending_and_keep_ties_stable() {
        let mut championship = Championship::new();
        let a = championship.register_driver(driver("Alpha", "A"));
        let b = championship.register_driver(driver("Bravo", "B"));
        let c = championship.register_driver(driver("Charlie", "C"));

        let mut race = RallyRaceResult::new("Race", "Place");
        championship.record_result(&mut race, a, 3, 10).expect("a");
        championship.record_result(&mut race, b, 2, 10).expect("b");
        championship.record_result(&mut race, c, 1, 25).expect("c");

        assert_eq!(
            championship.standings(),
            "1. Charlie (C): 25 points\n2. Alpha (A): 10 points\n3. Bravo (B): 10 points\n"
        );
    }

    #[test]
    fn leader_prefers_first_registered_on_tie() {
        let mut championship = Championship::new();
        let a = championship.register_driver(driver("Alpha", "A"));
        let b = championship.register_driver(driver("Bravo", "B"));
        championship.driver_mut(b).expect("b").add_points(40);
        championship.driver_mut(a).expect("a").add_points(40);

        let leader = championship.leading_driver().expect("leader");
        assert_eq!(leader.name(), "Alpha");
    }

    #[test]
    fn empty_championship_has_no_leader() {
        let championship = Championship::new();
        assert!(championship.leading_driver().is_none());
        assert_eq!(championship.standings(), "");
        assert_eq!(championship.total_championship_points(), 0);
    }

    #[test]
    fn total_points_sum_all_drivers() {
        let mut championship = Championship::new();
        let a = championship.register_driver(driver("Alpha", "A"));
        let b = championship.register_driver(driver("Bravo", "B"));
        let mut race = RallyRaceResult::new("Race", "Place");
        championship.record_result(&mut race, a, 1, 25).expect("a");
        championship.record_result(&mut race, b, 2, -3).expect("b");
        assert_eq!(championship.total_championship_points(), 22);
    }

    #[test]
    fn record_result_rejects_foreign_driver_id() {
        let mut other = Championship::new();
        other.register_driver(driver("Alpha", "A"));
        let foreign = other.register_driver(driver("Bravo", "B"));

        let mut championship = Championship::new();
        championship.register_driver(driver("Charlie", "C"));
        let mut race = RallyRaceResult::new("Race", "Place");
        let err = championship
            .record_result(&mut race, foreign, 1, 25)
            .expect_err("unknown id");
        assert!(err.to_string().contains("not registered"));
        assert!(race.entries().is_empty());
    }
}
