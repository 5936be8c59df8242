//! wasm-bindgen surface over the Vivify motion catalog.
//!
//! The JS host owns rendering; this module hands it the catalog, resolved
//! timing and per-frame samples. All values cross the boundary as plain JS
//! objects via serde-wasm-bindgen.

use serde::Deserialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use vivify_motion_core::{
    catalog, resolve_timing, sample_preset, Category, Modifiers, PresetName, Repeat,
};

fn lookup(name: &str) -> Result<&'static vivify_motion_core::Preset, JsError> {
    catalog()
        .lookup(name)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Install the panic hook once so authoring mistakes surface in the console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// All preset wire names, in catalog order.
#[wasm_bindgen]
pub fn preset_names() -> Vec<JsValue> {
    PresetName::ALL
        .iter()
        .map(|n| JsValue::from_str(n.as_str()))
        .collect()
}

/// Category labels with their preset names: `[{ label, presets: [...] }]`.
#[wasm_bindgen]
pub fn categories() -> Result<JsValue, JsError> {
    #[derive(serde::Serialize)]
    struct Group {
        label: &'static str,
        presets: Vec<&'static str>,
    }

    let groups: Vec<Group> = Category::ALL
        .iter()
        .map(|&cat| Group {
            label: cat.label(),
            presets: catalog()
                .in_category(cat)
                .map(|p| p.name.as_str())
                .collect(),
        })
        .collect();
    swb::to_value(&groups).map_err(|e| JsError::new(&e.to_string()))
}

/// Full preset definition (initial state, tracks, timing metadata) as a JS
/// object. Errors on unknown names.
#[wasm_bindgen]
pub fn preset(name: &str) -> Result<JsValue, JsError> {
    let preset = lookup(name)?;
    swb::to_value(preset).map_err(|e| JsError::new(&e.to_string()))
}

/// Timing options accepted by [`timing_for`]. All fields optional:
/// `{ duration, delay, repeat, faster, fast, slow, slower, infinite, reducedMotion }`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct TimingOpts {
    duration: Option<f32>,
    delay: Option<f32>,
    repeat: Option<Repeat>,
    faster: bool,
    fast: bool,
    slow: bool,
    slower: bool,
    infinite: bool,
    reduced_motion: Option<bool>,
}

/// Resolve effective timing for a preset. When `reducedMotion` is omitted the
/// browser preference is queried at this moment (a point-in-time read).
#[wasm_bindgen]
pub fn timing_for(name: &str, opts: JsValue) -> Result<JsValue, JsError> {
    let preset = lookup(name)?;
    let opts: TimingOpts = if opts.is_undefined() || opts.is_null() {
        TimingOpts::default()
    } else {
        swb::from_value(opts).map_err(|e| JsError::new(&format!("timing options: {e}")))?
    };

    let modifiers = Modifiers {
        faster: opts.faster,
        fast: opts.fast,
        slow: opts.slow,
        slower: opts.slower,
        infinite: opts.infinite,
    };
    let reduced = opts
        .reduced_motion
        .unwrap_or_else(prefers_reduced_motion);

    let timing = resolve_timing(
        opts.duration.unwrap_or(1.0),
        opts.delay.unwrap_or(0.0),
        opts.repeat.unwrap_or_default(),
        modifiers,
        reduced,
        preset.timing.duration,
    );
    swb::to_value(&timing).map_err(|e| JsError::new(&e.to_string()))
}

/// Sample every track of a preset at normalized time `u` in [0,1].
#[wasm_bindgen]
pub fn sample(name: &str, u: f32) -> Result<JsValue, JsError> {
    let preset = lookup(name)?;
    let samples = sample_preset(preset, u);
    swb::to_value(&samples).map_err(|e| JsError::new(&e.to_string()))
}

/// Synchronous query of the `prefers-reduced-motion` media feature.
/// Returns false outside a window context (workers, SSR).
#[wasm_bindgen]
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|q| q.matches())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::TimingOpts;

    /// it should parse camelCase timing options including int-or-bool repeat
    #[test]
    fn timing_opts_from_json() {
        let opts: TimingOpts = serde_json::from_str(
            r#"{ "duration": 2.0, "faster": true, "repeat": true, "reducedMotion": false }"#,
        )
        .unwrap();
        assert_eq!(opts.duration, Some(2.0));
        assert!(opts.faster);
        assert_eq!(opts.repeat, Some(vivify_motion_core::Repeat::Infinite));
        assert_eq!(opts.reduced_motion, Some(false));
    }
}
