use serde::Deserialize;

use crate::util::clog;

pub const STORAGE_KEY: &str = "pd_settings";

/// Tunables for the widget, persisted as JSON in local storage.
/// Any field missing from the stored JSON keeps its default.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Margin kept between the element and the container edges, in px.
    pub gutter: f64,
    /// Pixels added or removed per pinch sample.
    pub pinch_step: f64,
    /// Absolute lower bound for each dimension while shrinking.
    pub min_size: f64,
    pub reset_transition_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gutter: 16.0,
            pinch_step: 4.0,
            min_size: 48.0,
            reset_transition_ms: 300,
        }
    }
}

impl Settings {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(raw).map(Settings::sanitized)
    }

    fn sanitized(self) -> Self {
        let defaults = Settings::default();
        Self {
            gutter: if self.gutter.is_finite() && self.gutter >= 0.0 {
                self.gutter
            } else {
                defaults.gutter
            },
            pinch_step: if self.pinch_step.is_finite() && self.pinch_step > 0.0 {
                self.pinch_step
            } else {
                defaults.pinch_step
            },
            min_size: if self.min_size.is_finite() {
                self.min_size.max(0.0)
            } else {
                defaults.min_size
            },
            // setTimeout takes an i32 delay
            reset_transition_ms: self.reset_transition_ms.min(i32::MAX as u32),
        }
    }

    /// CSS transition applied while the element animates back to center.
    pub fn reset_transition(&self) -> String {
        let secs = self.reset_transition_ms as f64 / 1000.0;
        format!("left {secs}s ease, top {secs}s ease")
    }

    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(STORAGE_KEY) {
                    match Settings::from_json(&raw) {
                        Ok(s) => return s,
                        Err(e) => clog(&format!("ignoring stored settings: {e}")),
                    }
                }
            }
        }
        Settings::default()
    }
}
