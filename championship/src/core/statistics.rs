//! Aggregate statistics derived from a championship.

use super::registry::Championship;

/// Mean points per registered driver; `0.0` with no drivers.
pub fn average_points_per_driver(championship: &Championship) -> f64 {
    let drivers = championship.drivers();
    if drivers.is_empty() {
        return 0.0;
    }
    championship.total_championship_points() as f64 / drivers.len() as f64
}

/// Summed points per country, in order of each country's first registration.
pub fn points_by_country(championship: &Championship) -> Vec<(String, i64)> {
    let mut totals: Vec<(String, i64)> = Vec::new();
    for driver in championship.drivers() {
        let points = i64::from(driver.total_points());
        match totals
            .iter_mut()
            .find(|(country, _)| country == driver.country())
        {
            Some((_, total)) => *total += points,
            None => totals.push((driver.country().to_string(), points)),
        }
    }
    totals
}

/// Country whose drivers scored the most combined points.
///
/// `None` when no drivers are registered. On a tie the country registered
/// first wins.
pub fn most_successful_country(championship: &Championship) -> Option<String> {
    points_by_country(championship)
        .into_iter()
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
        .map(|(country, _)| country)
}

pub fn total_races_held(championship: &Championship) -> usize {
    championship.total_races()
}
