pub mod alerts;
pub mod body;
pub mod risk;

use crate::watch::alerts::{active_alerts, DismissalStore};
use crate::watch::body::{builtin_catalog, lunar_distances, CelestialBody};
use crate::watch::risk::{
    assess, impact_energy, mean_score, risk_trend, RiskAssessment, RiskLevel, RiskTrend,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

/// Dashboard state: the static catalog plus the dismissed-alert set, with
/// persistence delegated to an injected store.
pub struct Watch {
    catalog: Vec<CelestialBody>,
    dismissed: HashSet<String>,
    store: Box<dyn DismissalStore>,
}

impl Watch {
    pub fn new(catalog: Vec<CelestialBody>, store: Box<dyn DismissalStore>) -> Self {
        let dismissed = store.load().into_iter().collect();
        Self {
            catalog,
            dismissed,
            store,
        }
    }

    pub fn with_default_catalog(store: Box<dyn DismissalStore>) -> Self {
        Self::new(builtin_catalog(), store)
    }

    pub fn catalog(&self) -> &[CelestialBody] {
        &self.catalog
    }

    pub fn body(&self, id: &str) -> Option<&CelestialBody> {
        self.catalog.iter().find(|b| b.id == id)
    }

    /// Unknown ids score as "nothing selected".
    pub fn assess_body(&self, id: &str) -> RiskAssessment {
        assess(self.body(id))
    }

    pub fn alerts(&self, today: NaiveDate) -> Vec<&CelestialBody> {
        active_alerts(&self.catalog, &self.dismissed, today)
    }

    pub fn dismiss(&mut self, id: &str) {
        if self.dismissed.insert(id.to_string()) {
            self.persist();
        }
    }

    pub fn restore_all(&mut self) {
        if !self.dismissed.is_empty() {
            self.dismissed.clear();
            self.persist();
        }
    }

    fn persist(&mut self) {
        let mut ids: Vec<String> = self.dismissed.iter().cloned().collect();
        ids.sort();
        self.store.save(&ids);
    }

    pub fn catalog_json(&self) -> String {
        let views: Vec<BodyView> = self.catalog.iter().map(BodyView::from).collect();
        serde_json::to_string(&views).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn assessment_json(&self, id: &str) -> String {
        serde_json::to_string(&self.assess_body(id)).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn impact_energy_json(&self, id: &str) -> String {
        let energy = self.body(id).and_then(impact_energy);
        serde_json::to_string(&energy).unwrap_or_else(|_| "null".to_string())
    }

    pub fn trend_json(&self, id: &str) -> String {
        let view = self.body(id).map(|b| TrendView::new(b, &self.catalog));
        serde_json::to_string(&view).unwrap_or_else(|_| "null".to_string())
    }

    pub fn alerts_json(&self, today: NaiveDate) -> String {
        let views: Vec<AlertView> = self
            .alerts(today)
            .into_iter()
            .map(|b| AlertView::new(b, today))
            .collect();
        serde_json::to_string(&views).unwrap_or_else(|_| "[]".to_string())
    }
}

#[derive(Serialize)]
struct BodyView {
    id: String,
    name: String,
    distance_from_earth: f64,
    distance_ld: f64,
    velocity: f64,
    radius: Option<f64>,
    close_approach: Option<String>,
    risk: RiskAssessment,
}

impl From<&CelestialBody> for BodyView {
    fn from(body: &CelestialBody) -> Self {
        Self {
            id: body.id.clone(),
            name: body.name.clone(),
            distance_from_earth: body.distance_from_earth,
            distance_ld: lunar_distances(body.distance_from_earth),
            velocity: body.velocity,
            radius: body.radius,
            close_approach: body.close_approach.map(|d| d.to_string()),
            risk: assess(Some(body)),
        }
    }
}

#[derive(Serialize)]
struct AlertView {
    id: String,
    name: String,
    close_approach: String,
    days_until: i64,
    distance_from_earth: f64,
    level: RiskLevel,
    score: u32,
}

impl AlertView {
    fn new(body: &CelestialBody, today: NaiveDate) -> Self {
        let date = body.close_approach.unwrap_or(today);
        let risk = assess(Some(body));
        Self {
            id: body.id.clone(),
            name: body.name.clone(),
            close_approach: date.to_string(),
            days_until: (date - today).num_days(),
            distance_from_earth: body.distance_from_earth,
            level: risk.level,
            score: risk.score,
        }
    }
}

#[derive(Serialize)]
struct TrendView {
    id: String,
    score: u32,
    mean_score: Option<f64>,
    trend: RiskTrend,
}

impl TrendView {
    fn new(body: &CelestialBody, catalog: &[CelestialBody]) -> Self {
        Self {
            id: body.id.clone(),
            score: assess(Some(body)).score,
            mean_score: mean_score(catalog),
            trend: risk_trend(body, catalog),
        }
    }
}
