use std::rc::Rc;

use super::car::RallyCar;

/// A championship driver.
///
/// Cars are shared: the same [`RallyCar`] may be assigned to several drivers,
/// and reassigning one never touches results that were already recorded.
#[derive(Debug, Clone)]
pub struct Driver {
    name: String,
    country: String,
    total_points: i32,
    car: Rc<RallyCar>,
}

impl Driver {
    pub fn new(name: impl Into<String>, country: impl Into<String>, car: Rc<RallyCar>) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            total_points: 0,
            car,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn total_points(&self) -> i32 {
        self.total_points
    }

    pub fn car(&self) -> &Rc<RallyCar> {
        &self.car
    }

    pub fn set_car(&mut self, car: Rc<RallyCar>) {
        self.car = car;
    }

    /// Negative values subtract; there is no bound in either direction, and a
    /// total past the `i32` range wraps around instead of panicking.
    pub fn add_points(&mut self, points: i32) {
        self.total_points = self.total_points.wrapping_add(points);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{asphalt_car, gravel_car};

    #[test]
    fn starts_at_zero_and_accumulates() {
        let mut driver = Driver::new("Ott Tänak", "Estonia", gravel_car());
        assert_eq!(driver.total_points(), 0);
        driver.add_points(18);
        driver.add_points(12);
        assert_eq!(driver.total_points(), 30);
    }

    #[test]
    fn negative_points_subtract() {
        let mut driver = Driver::new("Ott Tänak", "Estonia", gravel_car());
        driver.add_points(10);
        driver.add_points(-15);
        assert_eq!(driver.total_points(), -5);
    }

    #[test]
    fn total_wraps_past_i32_max() {
        let mut driver = Driver::new("Ott Tänak", "Estonia", gravel_car());
        driver.add_points(i32::MAX);
        driver.add_points(1);
        assert_eq!(driver.total_points(), i32::MIN);
    }

    #[test]
    fn set_car_replaces_shared_car() {
        let asphalt = asphalt_car();
        let mut driver = Driver::new("Sébastien Ogier", "France", gravel_car());
        driver.set_car(Rc::clone(&asphalt));
        assert!(Rc::ptr_eq(driver.car(), &asphalt));
        assert_eq!(driver.name(), "Sébastien Ogier");
        assert_eq!(driver.country(), "France");
    }
}
