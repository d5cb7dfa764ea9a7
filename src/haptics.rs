use crate::core::Haptics;
use wasm_bindgen::JsValue;
use web_sys as web;

/// [`Haptics`] over `navigator.vibrate`.
///
/// Browsers without the Vibration API (iOS Safari, most desktops) leave
/// `navigator.vibrate` undefined; calling it there would throw, so support is
/// probed once and every call becomes a no-op when it is missing.
pub struct NavigatorHaptics {
    navigator: Option<web::Navigator>,
}

impl NavigatorHaptics {
    pub fn detect() -> Self {
        let navigator = web::window().map(|w| w.navigator()).filter(|n| {
            js_sys::Reflect::has(n, &JsValue::from_str("vibrate")).unwrap_or(false)
        });
        if navigator.is_none() {
            log::info!("[haptics] vibration unavailable; haptics disabled");
        }
        Self { navigator }
    }
}

impl Haptics for NavigatorHaptics {
    fn pulse(&mut self, duration_ms: u32) {
        if let Some(n) = &self.navigator {
            _ = n.vibrate_with_duration(duration_ms);
        }
    }

    fn pattern(&mut self, pattern_ms: &[u32]) {
        if let Some(n) = &self.navigator {
            let steps: js_sys::Array = pattern_ms.iter().map(|ms| JsValue::from(*ms)).collect();
            _ = n.vibrate_with_pattern(&JsValue::from(steps));
        }
    }

    fn cancel(&mut self) {
        if let Some(n) = &self.navigator {
            _ = n.vibrate_with_duration(0);
        }
    }
}
