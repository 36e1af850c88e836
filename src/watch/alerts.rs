use crate::watch::body::CelestialBody;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Days ahead within which a close approach is alert-worthy (inclusive).
pub const ALERT_WINDOW_DAYS: i64 = 30;
/// Maximum distance for an alert-worthy approach, millions of km (exclusive).
pub const ALERT_DISTANCE_MKM: f64 = 10.0;

/// Alert policy: a known close approach no more than 30 days out, at under
/// 10 million km. Past approaches never alert.
pub fn alert_eligible(body: &CelestialBody, today: NaiveDate) -> bool {
    let Some(date) = body.close_approach else {
        return false;
    };
    let days_until = (date - today).num_days();
    (0..=ALERT_WINDOW_DAYS).contains(&days_until)
        && body.distance_from_earth < ALERT_DISTANCE_MKM
}

/// Filters the catalog down to undismissed, alert-eligible bodies,
/// preserving catalog order. The dismissed set is explicit state owned by
/// the caller.
pub fn active_alerts<'a>(
    catalog: &'a [CelestialBody],
    dismissed: &HashSet<String>,
    today: NaiveDate,
) -> Vec<&'a CelestialBody> {
    catalog
        .iter()
        .filter(|b| !dismissed.contains(&b.id) && alert_eligible(b, today))
        .collect()
}

/// Key-value persistence for the dismissed-alert list. The browser build
/// backs this with localStorage; tests inject an in-memory store.
pub trait DismissalStore {
    fn load(&self) -> Vec<String>;
    fn save(&mut self, ids: &[String]);
}

#[derive(Default)]
pub struct MemoryStore {
    ids: Vec<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DismissalStore for MemoryStore {
    fn load(&self) -> Vec<String> {
        self.ids.clone()
    }

    fn save(&mut self, ids: &[String]) {
        self.ids = ids.to_vec();
    }
}

#[cfg(target_arch = "wasm32")]
pub struct LocalStorageStore {
    key: &'static str,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    pub const DEFAULT_KEY: &'static str = "cosmic-watch.dismissed";

    pub fn new() -> Self {
        Self {
            key: Self::DEFAULT_KEY,
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl DismissalStore for LocalStorageStore {
    fn load(&self) -> Vec<String> {
        // Missing or corrupt stored values read as "nothing dismissed".
        Self::storage()
            .and_then(|s| s.get_item(self.key).ok().flatten())
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn save(&mut self, ids: &[String]) {
        if let (Some(storage), Ok(raw)) = (Self::storage(), serde_json::to_string(ids)) {
            let _ = storage.set_item(self.key, &raw);
        }
    }
}
