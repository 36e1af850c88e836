use chrono::NaiveDate;

/// Average Earth–Moon distance, km.
pub const LUNAR_DISTANCE_KM: f64 = 384_400.0;

#[derive(Clone, Debug)]
pub struct CelestialBody {
    pub id: String,
    pub name: String,
    /// Millions of kilometers.
    pub distance_from_earth: f64,
    /// Kilometers per second.
    pub velocity: f64,
    /// Kilometers; half of the estimated diameter. Absent when no size
    /// estimate exists for the object.
    pub radius: Option<f64>,
    pub close_approach: Option<NaiveDate>,
}

/// Millions of km expressed in Lunar Distances, the dashboard's intuitive
/// distance comparator.
pub fn lunar_distances(millions_km: f64) -> f64 {
    millions_km * 1_000_000.0 / LUNAR_DISTANCE_KM
}

fn body(
    id: &str,
    name: &str,
    distance_from_earth: f64,
    velocity: f64,
    radius: Option<f64>,
    approach: Option<(i32, u32, u32)>,
) -> CelestialBody {
    CelestialBody {
        id: id.to_string(),
        name: name.to_string(),
        distance_from_earth,
        velocity,
        radius,
        close_approach: approach.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
    }
}

/// The static NEO catalog the dashboard ships with. Distances are the
/// minimum for the listed approach; velocities are relative to Earth.
pub fn builtin_catalog() -> Vec<CelestialBody> {
    vec![
        body("apophis", "99942 Apophis", 0.31, 30.7, Some(0.08), Some((2029, 4, 13))),
        body("bennu", "101955 Bennu", 74.8, 28.0, Some(0.245), Some((2026, 9, 23))),
        body("vesta", "4 Vesta", 203.8, 19.34, Some(0.28), None),
        body("eros", "433 Eros", 314.0, 24.36, Some(8.42), None),
        body("ryugu", "162173 Ryugu", 95.4, 31.2, Some(0.448), None),
        body("didymos", "65803 Didymos", 10.6, 23.9, Some(0.39), Some((2026, 10, 4))),
        body("florence", "3122 Florence", 7.07, 13.5, Some(2.45), Some((2026, 9, 1))),
        body("icarus", "1566 Icarus", 6.4, 27.9, Some(0.7), Some((2027, 6, 16))),
        body("2010-xc15", "2010 XC15", 0.77, 33.4, None, Some((2026, 12, 27))),
    ]
}
