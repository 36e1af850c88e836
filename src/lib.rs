use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod watch;
pub use watch::{alerts, body, risk, Watch};

use chrono::NaiveDate;

thread_local! {
    static WATCH: RefCell<Option<Watch>> = RefCell::new(None);
}

fn with_watch_mut<R>(f: impl FnOnce(&mut Watch) -> R) -> Result<R, &'static str> {
    WATCH.with(|cell| {
        let mut opt = cell.borrow_mut();
        match opt.as_mut() {
            Some(watch) => Ok(f(watch)),
            None => Err("watch not initialized"),
        }
    })
}

fn default_store() -> Box<dyn alerts::DismissalStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(alerts::LocalStorageStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(alerts::MemoryStore::new())
    }
}

#[wasm_bindgen]
pub fn init_watch() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    WATCH.with(|w| {
        *w.borrow_mut() = Some(Watch::with_default_catalog(default_store()));
    });
}

#[wasm_bindgen]
pub fn catalog_json() -> String {
    match with_watch_mut(|watch| watch.catalog_json()) {
        Ok(v) => v,
        Err(e) => e.to_string(),
    }
}

#[wasm_bindgen]
pub fn assess_json(id: &str) -> String {
    match with_watch_mut(|watch| watch.assessment_json(id)) {
        Ok(v) => v,
        Err(e) => e.to_string(),
    }
}

#[wasm_bindgen]
pub fn impact_energy_json(id: &str) -> String {
    match with_watch_mut(|watch| watch.impact_energy_json(id)) {
        Ok(v) => v,
        Err(e) => e.to_string(),
    }
}

#[wasm_bindgen]
pub fn risk_trend_json(id: &str) -> String {
    match with_watch_mut(|watch| watch.trend_json(id)) {
        Ok(v) => v,
        Err(e) => e.to_string(),
    }
}

/// `today` is supplied by the page as an ISO date (YYYY-MM-DD); the core
/// never reads the clock itself.
#[wasm_bindgen]
pub fn alerts_json(today: &str) -> String {
    let parsed = match NaiveDate::parse_from_str(today, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => return "invalid date".to_string(),
    };
    match with_watch_mut(|watch| watch.alerts_json(parsed)) {
        Ok(v) => v,
        Err(e) => e.to_string(),
    }
}

#[wasm_bindgen]
pub fn dismiss_alert(id: &str) {
    let _ = with_watch_mut(|watch| watch.dismiss(id));
}

#[wasm_bindgen]
pub fn restore_alerts() {
    let _ = with_watch_mut(|watch| watch.restore_all());
}
