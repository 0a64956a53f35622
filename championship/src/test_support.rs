//! Test-only helpers for building cars, drivers and season files.

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::car::RallyCar;
use crate::core::driver::Driver;

pub fn gravel_car() -> Rc<RallyCar> {
    Rc::new(RallyCar::gravel("Subaru", "Impreza", 400, 250.0))
}

pub fn asphalt_car() -> Rc<RallyCar> {
    Rc::new(RallyCar::asphalt("Toyota", "Yaris", 380, 300.0))
}

/// Driver with zero points in the default gravel car.
pub fn driver(name: &str, country: &str) -> Driver {
    Driver::new(name, country, gravel_car())
}

/// Scratch directory holding a single `season.toml` with `contents`.
pub struct TempSeason {
    dir: TempDir,
}

impl TempSeason {
    pub fn new(contents: &str) -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        fs::write(dir.path().join("season.toml"), contents).context("write season")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("season.toml")
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
