//! Season files: TOML descriptions of cars, drivers and races.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::car::SurfaceKind;

/// Reference two-round season, shipped with the binary.
pub const DEFAULT_SEASON: &str = include_str!("../../seasons/wrc_demo.toml");

/// Season description (TOML).
///
/// Cars are keyed by `id` and drivers by `name`; every other section refers to
/// them through those keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeasonConfig {
    pub report: ReportConfig,
    pub cars: Vec<CarConfig>,
    pub drivers: Vec<DriverConfig>,
    pub races: Vec<RaceConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// Cars listed under the performance ratings. Empty means every car.
    pub featured_cars: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarConfig {
    pub id: String,
    pub make: String,
    pub model: String,
    pub horsepower: i32,
    pub surface: SurfaceKind,
    /// Required for `surface = "gravel"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspension_travel: Option<f64>,
    /// Required for `surface = "asphalt"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downforce: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DriverConfig {
    pub name: String,
    pub country: String,
    /// Car id assigned at registration.
    pub car: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RaceConfig {
    pub name: String,
    pub location: String,
    /// Reassignments applied before this race's results are recorded.
    #[serde(default)]
    pub car_changes: Vec<CarChange>,
    #[serde(default)]
    pub results: Vec<ResultConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CarChange {
    pub driver: String,
    pub car: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultConfig {
    pub driver: String,
    pub position: u32,
    pub points: i32,
}

impl SeasonConfig {
    /// Parse and validate the embedded reference season.
    pub fn reference() -> Result<Self> {
        Self::parse_str(DEFAULT_SEASON).context("parse embedded season")
    }

    pub fn parse_str(contents: &str) -> Result<Self> {
        let season: SeasonConfig = toml::from_str(contents).context("parse season toml")?;
        season.validate()?;
        Ok(season)
    }

    /// Structural checks only: keys must be unique and every reference must
    /// resolve. Points, positions and horsepower are taken as given.
    pub fn validate(&self) -> Result<()> {
        let mut car_ids = HashSet::new();
        for (index, car) in self.cars.iter().enumerate() {
            car.validate()
                .with_context(|| format!("cars[{}] invalid", index))?;
            if !car_ids.insert(car.id.as_str()) {
                bail!("duplicate car id {}", car.id);
            }
        }

        let mut driver_names = HashSet::new();
        for (index, driver) in self.drivers.iter().enumerate() {
            if driver.name.trim().is_empty() {
                bail!("drivers[{}].name must be non-empty", index);
            }
            if !driver_names.insert(driver.name.as_str()) {
                bail!("duplicate driver name {}", driver.name);
            }
            if !car_ids.contains(driver.car.as_str()) {
                bail!("driver {} references unknown car {}", driver.name, driver.car);
            }
        }

        for (index, race) in self.races.iter().enumerate() {
            for change in &race.car_changes {
                if !driver_names.contains(change.driver.as_str()) {
                    bail!(
                        "races[{}] ({}) car change for unknown driver {}",
                        index,
                        race.name,
                        change.driver
                    );
                }
                if !car_ids.contains(change.car.as_str()) {
                    bail!(
                        "races[{}] ({}) car change to unknown car {}",
                        index,
                        race.name,
                        change.car
                    );
                }
            }
            for result in &race.results {
                if !driver_names.contains(result.driver.as_str()) {
                    bail!(
                        "races[{}] ({}) result for unknown driver {}",
                        index,
                        race.name,
                        result.driver
                    );
                }
            }
        }

        for id in &self.report.featured_cars {
            if !car_ids.contains(id.as_str()) {
                return Err(anyhow!("report.featured_cars references unknown car {}", id));
            }
        }
        Ok(())
    }
}

impl CarConfig {
    fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            bail!("car id must be non-empty");
        }
        match self.surface {
            SurfaceKind::Gravel if self.suspension_travel.is_none() => {
                bail!("gravel car {} requires suspension_travel", self.id)
            }
            SurfaceKind::Asphalt if self.downforce.is_none() => {
                bail!("asphalt car {} requires downforce", self.id)
            }
            _ => Ok(()),
        }
    }
}

/// Load and validate a season file.
pub fn load_season(path: &Path) -> Result<SeasonConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read season {}", path.display()))?;
    let season: SeasonConfig =
        toml::from_str(&contents).with_context(|| format!("parse season {}", path.display()))?;
    season
        .validate()
        .with_context(|| format!("validate season {}", path.display()))?;
    debug!(
        path = %path.display(),
        cars = season.cars.len(),
        drivers = season.drivers.len(),
        races = season.races.len(),
        "season loaded"
    );
    Ok(season)
}

/// Atomically write the embedded reference season verbatim (comments
/// included). Returns `false` when the file exists and `force` is unset.
pub fn write_reference_season(path: &Path, force: bool) -> Result<bool> {
    if !force && path.exists() {
        debug!(path = %path.display(), "season exists, skipping");
        return Ok(false);
    }
    write_atomic(path, DEFAULT_SEASON)?;
    Ok(true)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("season path missing parent {}", path.display()))?;
    if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp season {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace season {}", path.display()))?;
    Ok(())
}
