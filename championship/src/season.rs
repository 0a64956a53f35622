//! Orchestration for playing a season file through a championship.
//!
//! Order of operations mirrors a real season: build the garage, register
//! drivers with their initial cars, then for each race apply car changes,
//! record results and add the race to the championship.

use std::collections::HashMap;
use std::rc::Rc;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info};

use crate::core::car::{RallyCar, Surface, SurfaceKind};
use crate::core::driver::Driver;
use crate::core::race::RallyRaceResult;
use crate::core::registry::{Championship, DriverId};
use crate::io::season::{CarConfig, SeasonConfig};

/// Cars of a season, keyed by their season-file id, in declaration order.
#[derive(Debug, Default)]
pub struct Garage {
    cars: Vec<(String, Rc<RallyCar>)>,
}

impl Garage {
    pub fn get(&self, id: &str) -> Option<&Rc<RallyCar>> {
        self.cars
            .iter()
            .find(|(car_id, _)| car_id == id)
            .map(|(_, car)| car)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rc<RallyCar>)> {
        self.cars.iter().map(|(id, car)| (id.as_str(), car))
    }

    fn insert(&mut self, id: &str, car: RallyCar) {
        self.cars.push((id.to_string(), Rc::new(car)));
    }
}

/// A fully played season.
#[derive(Debug)]
pub struct SeasonOutcome {
    pub championship: Championship,
    pub garage: Garage,
    featured: Vec<String>,
}

impl SeasonOutcome {
    /// Cars listed in the report's performance section.
    pub fn featured_cars(&self) -> Vec<&Rc<RallyCar>> {
        if self.featured.is_empty() {
            return self.garage.iter().map(|(_, car)| car).collect();
        }
        self.featured
            .iter()
            .filter_map(|id| self.garage.get(id))
            .collect()
    }
}

pub fn play_season(season: &SeasonConfig) -> Result<SeasonOutcome> {
    let mut garage = Garage::default();
    for car in &season.cars {
        garage.insert(&car.id, build_car(car)?);
    }
    debug!(cars = season.cars.len(), "garage built");

    let mut championship = Championship::new();
    let mut roster: HashMap<&str, DriverId> = HashMap::new();
    for entry in &season.drivers {
        let car = lookup_car(&garage, &entry.car)?;
        let id = championship.register_driver(Driver::new(&entry.name, &entry.country, car));
        roster.insert(entry.name.as_str(), id);
        debug!(driver = %entry.name, car = %entry.car, "driver registered");
    }

    for race_config in &season.races {
        for change in &race_config.car_changes {
            let id = lookup_driver(&roster, &change.driver)?;
            let car = lookup_car(&garage, &change.car)?;
            championship
                .driver_mut(id)
                .ok_or_else(|| anyhow!("driver {} is not registered", change.driver))?
                .set_car(car);
            debug!(driver = %change.driver, car = %change.car, race = %race_config.name, "car changed");
        }

        let mut race = RallyRaceResult::new(&race_config.name, &race_config.location);
        for result in &race_config.results {
            let id = lookup_driver(&roster, &result.driver)?;
            championship
                .record_result(&mut race, id, result.position, result.points)
                .with_context(|| format!("record {} in {}", result.driver, race_config.name))?;
        }
        info!(
            race = %race_config.name,
            entries = race.entries().len(),
            "race recorded"
        );
        championship.add_race_result(race);
    }

    Ok(SeasonOutcome {
        championship,
        garage,
        featured: season.report.featured_cars.clone(),
    })
}

fn build_car(config: &CarConfig) -> Result<RallyCar> {
    let surface = match config.surface {
        SurfaceKind::Gravel => Surface::Gravel {
            suspension_travel: config
                .suspension_travel
                .with_context(|| format!("gravel car {} missing suspension_travel", config.id))?,
        },
        SurfaceKind::Asphalt => Surface::Asphalt {
            downforce: config
                .downforce
                .with_context(|| format!("asphalt car {} missing downforce", config.id))?,
        },
    };
    Ok(RallyCar::new(
        &config.make,
        &config.model,
        config.horsepower,
        surface,
    ))
}

fn lookup_car(garage: &Garage, id: &str) -> Result<Rc<RallyCar>> {
    garage
        .get(id)
        .cloned()
        .ok_or_else(|| anyhow!("unknown car {}", id))
}

fn lookup_driver(roster: &HashMap<&str, DriverId>, name: &str) -> Result<DriverId> {
    roster
        .get(name)
        .copied()
        .ok_or_else(|| anyhow!("unknown driver {}", name))
}
