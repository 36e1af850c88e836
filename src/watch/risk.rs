use crate::watch::body::CelestialBody;
use serde::Serialize;

pub const DISTANCE_MAX: u32 = 40;
pub const VELOCITY_MAX: u32 = 35;
pub const SIZE_MAX: u32 = 25;

/// Score at or above which an object is rated HIGH risk.
pub const HIGH_THRESHOLD: u32 = 66;
/// Score at or above which an object is rated MEDIUM risk.
pub const MEDIUM_THRESHOLD: u32 = 31;

/// Half-width of the band around the catalog mean inside which a score
/// counts as AVERAGE.
pub const TREND_BAND: f64 = 15.0;

/// Assumed bulk density for impact energy estimates, kg/m³.
const ASSUMED_DENSITY: f64 = 2500.0;
const JOULES_PER_KILOTON: f64 = 4.184e12;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn for_score(score: u32) -> Self {
        if score >= HIGH_THRESHOLD {
            RiskLevel::High
        } else if score >= MEDIUM_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Presentation hint; the dashboard maps it straight onto the risk badge.
    pub fn color(self) -> &'static str {
        match self {
            RiskLevel::Low => "#22c55e",
            RiskLevel::Medium => "#f59e0b",
            RiskLevel::High => "#ef4444",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low risk: this object poses no significant threat to Earth.",
            RiskLevel::Medium => {
                "Moderate risk: notable characteristics, but no immediate concern."
            }
            RiskLevel::High => {
                "High risk: proximity, speed, or size warrant close monitoring."
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistanceBand {
    Critical,
    High,
    Medium,
    Low,
}

impl DistanceBand {
    pub fn classify(millions_km: f64) -> Self {
        if millions_km < 0.5 {
            DistanceBand::Critical
        } else if millions_km < 5.0 {
            DistanceBand::High
        } else if millions_km < 50.0 {
            DistanceBand::Medium
        } else {
            DistanceBand::Low
        }
    }

    pub fn points(self) -> u32 {
        match self {
            DistanceBand::Critical => 40,
            DistanceBand::High => 30,
            DistanceBand::Medium => 20,
            DistanceBand::Low => 10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DistanceBand::Critical => "CRITICAL proximity",
            DistanceBand::High => "HIGH proximity",
            DistanceBand::Medium => "MEDIUM proximity",
            DistanceBand::Low => "LOW proximity",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VelocityBand {
    Critical,
    High,
    Medium,
    Low,
}

impl VelocityBand {
    pub fn classify(km_s: f64) -> Self {
        if km_s > 35.0 {
            VelocityBand::Critical
        } else if km_s > 30.0 {
            VelocityBand::High
        } else if km_s > 25.0 {
            VelocityBand::Medium
        } else {
            VelocityBand::Low
        }
    }

    pub fn points(self) -> u32 {
        match self {
            VelocityBand::Critical => 35,
            VelocityBand::High => 25,
            VelocityBand::Medium => 15,
            VelocityBand::Low => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VelocityBand::Critical => "CRITICAL velocity",
            VelocityBand::High => "HIGH velocity",
            VelocityBand::Medium => "MEDIUM velocity",
            VelocityBand::Low => "LOW velocity",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeBand {
    Large,
    Medium,
    Small,
    Tiny,
}

impl SizeBand {
    pub fn classify(diameter_km: f64) -> Self {
        if diameter_km > 0.25 {
            SizeBand::Large
        } else if diameter_km > 0.15 {
            SizeBand::Medium
        } else if diameter_km > 0.08 {
            SizeBand::Small
        } else {
            SizeBand::Tiny
        }
    }

    pub fn points(self) -> u32 {
        match self {
            SizeBand::Large => 25,
            SizeBand::Medium => 18,
            SizeBand::Small => 10,
            SizeBand::Tiny => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeBand::Large => "LARGE object",
            SizeBand::Medium => "MEDIUM object",
            SizeBand::Small => "SMALL object",
            SizeBand::Tiny => "TINY object",
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct RiskFactor {
    pub name: &'static str,
    pub score: u32,
    pub max: u32,
    pub percentage: u32,
    pub explanation: String,
}

impl RiskFactor {
    fn new(name: &'static str, score: u32, max: u32, explanation: String) -> Self {
        let percentage = if max == 0 {
            0
        } else {
            ((score as f64 / max as f64) * 100.0).round() as u32
        };
        Self {
            name,
            score,
            max,
            percentage,
            explanation,
        }
    }

    fn zero(name: &'static str, max: u32) -> Self {
        Self {
            name,
            score: 0,
            max,
            percentage: 0,
            explanation: "No data".to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct RiskAssessment {
    pub score: u32,
    pub level: RiskLevel,
    pub color: &'static str,
    pub factors: Vec<RiskFactor>,
    pub explanation: String,
}

impl RiskAssessment {
    /// Fixed result for "nothing selected"; never treated as an error.
    pub fn empty() -> Self {
        Self {
            score: 0,
            level: RiskLevel::Low,
            color: RiskLevel::Low.color(),
            factors: vec![
                RiskFactor::zero("distance", DISTANCE_MAX),
                RiskFactor::zero("velocity", VELOCITY_MAX),
                RiskFactor::zero("size", SIZE_MAX),
            ],
            explanation: "No object selected".to_string(),
        }
    }
}

fn distance_factor(millions_km: f64) -> RiskFactor {
    let band = DistanceBand::classify(millions_km);
    RiskFactor::new(
        "distance",
        band.points(),
        DISTANCE_MAX,
        format!("{}: {:.2} million km from Earth", band.label(), millions_km),
    )
}

fn velocity_factor(km_s: f64) -> RiskFactor {
    let band = VelocityBand::classify(km_s);
    RiskFactor::new(
        "velocity",
        band.points(),
        VELOCITY_MAX,
        format!("{}: {:.1} km/s relative velocity", band.label(), km_s),
    )
}

fn size_factor(radius_km: Option<f64>) -> RiskFactor {
    match radius_km {
        Some(radius) => {
            let diameter = radius * 2.0;
            let band = SizeBand::classify(diameter);
            RiskFactor::new(
                "size",
                band.points(),
                SIZE_MAX,
                format!(
                    "{}: ~{} m estimated diameter",
                    band.label(),
                    (diameter * 1000.0).round() as i64
                ),
            )
        }
        // No size estimate: fall through to the lowest bucket rather than
        // excluding the factor, so totals stay comparable across the catalog.
        None => RiskFactor::new(
            "size",
            SizeBand::Tiny.points(),
            SIZE_MAX,
            format!("{}: diameter unknown", SizeBand::Tiny.label()),
        ),
    }
}

/// Scores a body, or produces the canned empty assessment when none is
/// selected. Pure and total: every metric falls into some bucket.
pub fn assess(body: Option<&CelestialBody>) -> RiskAssessment {
    let Some(body) = body else {
        return RiskAssessment::empty();
    };

    let factors = vec![
        distance_factor(body.distance_from_earth),
        velocity_factor(body.velocity),
        size_factor(body.radius),
    ];
    let score: u32 = factors.iter().map(|f| f.score).sum();
    let level = RiskLevel::for_score(score);

    RiskAssessment {
        score,
        level,
        color: level.color(),
        factors,
        explanation: level.summary().to_string(),
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ImpactEnergy {
    pub joules: f64,
    pub kilotons: f64,
    pub label: String,
}

/// Order-of-magnitude kinetic energy for a spherical body of assumed
/// density. Illustrative only; never feeds the risk score.
pub fn impact_energy(body: &CelestialBody) -> Option<ImpactEnergy> {
    let radius_m = body.radius? * 1000.0;
    let mass_kg = ASSUMED_DENSITY * (4.0 / 3.0) * std::f64::consts::PI * radius_m.powi(3);
    let velocity_m_s = body.velocity * 1000.0;
    let joules = 0.5 * mass_kg * velocity_m_s * velocity_m_s;
    let kilotons = joules / JOULES_PER_KILOTON;
    let label = if kilotons >= 1000.0 {
        format!("{:.1} Mt TNT", kilotons / 1000.0)
    } else {
        format!("{:.1} kt TNT", kilotons)
    };

    Some(ImpactEnergy {
        joules,
        kilotons,
        label,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTrend {
    AboveAverage,
    BelowAverage,
    Average,
}

pub fn mean_score(catalog: &[CelestialBody]) -> Option<f64> {
    if catalog.is_empty() {
        return None;
    }
    let total: u32 = catalog.iter().map(|b| assess(Some(b)).score).sum();
    Some(total as f64 / catalog.len() as f64)
}

/// Classifies one body's score against the mean of a collection. An empty
/// collection has no meaningful mean, so the body reads as AVERAGE.
pub fn risk_trend(body: &CelestialBody, catalog: &[CelestialBody]) -> RiskTrend {
    let Some(mean) = mean_score(catalog) else {
        return RiskTrend::Average;
    };
    let delta = assess(Some(body)).score as f64 - mean;
    if delta > TREND_BAND {
        RiskTrend::AboveAverage
    } else if delta < -TREND_BAND {
        RiskTrend::BelowAverage
    } else {
        RiskTrend::Average
    }
}
