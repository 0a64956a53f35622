//! Rally cars and their surface-specific performance ratings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Surface a car is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceKind {
    Gravel,
    Asphalt,
}

impl SurfaceKind {
    pub fn label(self) -> &'static str {
        match self {
            SurfaceKind::Gravel => "Gravel",
            SurfaceKind::Asphalt => "Asphalt",
        }
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Surface variant together with the attribute that drives its rating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    /// Suspension travel in millimeters.
    Gravel { suspension_travel: f64 },
    /// Downforce in kilograms.
    Asphalt { downforce: f64 },
}

/// An immutable rally car.
///
/// Inputs are not validated: negative horsepower or attributes are stored as
/// given and flow straight into [`RallyCar::calculate_performance`].
#[derive(Debug, Clone, PartialEq)]
pub struct RallyCar {
    make: String,
    model: String,
    horsepower: i32,
    surface: Surface,
}

impl RallyCar {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        horsepower: i32,
        surface: Surface,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            horsepower,
            surface,
        }
    }

    pub fn gravel(
        make: impl Into<String>,
        model: impl Into<String>,
        horsepower: i32,
        suspension_travel: f64,
    ) -> Self {
        Self::new(make, model, horsepower, Surface::Gravel { suspension_travel })
    }

    pub fn asphalt(
        make: impl Into<String>,
        model: impl Into<String>,
        horsepower: i32,
        downforce: f64,
    ) -> Self {
        Self::new(make, model, horsepower, Surface::Asphalt { downforce })
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn horsepower(&self) -> i32 {
        self.horsepower
    }

    pub fn surface(&self) -> SurfaceKind {
        match self.surface {
            Surface::Gravel { .. } => SurfaceKind::Gravel,
            Surface::Asphalt { .. } => SurfaceKind::Asphalt,
        }
    }

    /// `Some` only for gravel cars.
    pub fn suspension_travel(&self) -> Option<f64> {
        match self.surface {
            Surface::Gravel { suspension_travel } => Some(suspension_travel),
            Surface::Asphalt { .. } => None,
        }
    }

    /// `Some` only for asphalt cars.
    pub fn downforce(&self) -> Option<f64> {
        match self.surface {
            Surface::Asphalt { downforce } => Some(downforce),
            Surface::Gravel { .. } => None,
        }
    }

    /// Weighted blend of horsepower and the surface attribute.
    ///
    /// - gravel: `0.7 * horsepower + 0.3 * suspension_travel`
    /// - asphalt: `0.6 * horsepower + 0.4 * downforce`
    pub fn calculate_performance(&self) -> f64 {
        let horsepower = f64::from(self.horsepower);
        match self.surface {
            Surface::Gravel { suspension_travel } => horsepower * 0.7 + suspension_travel * 0.3,
            Surface::Asphalt { downforce } => horsepower * 0.6 + downforce * 0.4,
        }
    }
}
