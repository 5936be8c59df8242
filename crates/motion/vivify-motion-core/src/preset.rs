//! Preset data model.
//!
//! A preset is leaf data: an initial state, one full keyframe sequence per
//! animated property, and timing metadata. Entries are authored once in the
//! catalog modules and never mutated.

use serde::{Deserialize, Serialize};

use crate::ease::EaseSpec;
use crate::error::MotionError;
use crate::names::{Category, PresetName};

/// Animatable channels used by the catalog.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Property {
    Opacity,
    X,
    Y,
    Z,
    Scale,
    ScaleX,
    ScaleY,
    /// Degrees, around the view axis.
    Rotate,
    RotateX,
    RotateY,
    SkewX,
    SkewY,
    /// Rendering hint only; appears in initial state, never animated.
    Perspective,
}

/// One keyframe value. Translations may be expressed as a percentage of the
/// element extent; everything else is a plain number (px, degrees, or a
/// unitless factor depending on the property).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Number(f32),
    Percent(f32),
}

impl Value {
    #[inline]
    pub fn raw(self) -> f32 {
        match self {
            Value::Number(v) | Value::Percent(v) => v,
        }
    }

    #[inline]
    pub fn is_percent(self) -> bool {
        matches!(self, Value::Percent(_))
    }

    /// Rebuild a value of the same unit with a new magnitude.
    #[inline]
    pub fn with_raw(self, v: f32) -> Value {
        match self {
            Value::Number(_) => Value::Number(v),
            Value::Percent(_) => Value::Percent(v),
        }
    }
}

/// Shorthand constructors used by the catalog data modules.
#[inline]
pub const fn num(v: f32) -> Value {
    Value::Number(v)
}

#[inline]
pub const fn pct(v: f32) -> Value {
    Value::Percent(v)
}

/// The point an element transforms around.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum TransformOrigin {
    Center,
    CenterBottom,
    TopCenter,
    TopLeft,
    LeftBottom,
    RightBottom,
    LeftCenter,
    RightCenter,
}

/// Full keyframe sequence for one property, first entry included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub property: Property,
    pub values: Vec<Value>,
}

/// Timing metadata declared by the preset itself.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetTiming {
    /// Intrinsic playback length in seconds. Set only where the choreography
    /// depends on it; overrides the caller's (modifier-adjusted) duration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f32>,
    /// Keyframe stops, normalized [0,1]. Uniform spacing when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub times: Option<Vec<f32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ease: Option<EaseSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform_origin: Option<TransformOrigin>,
}

/// One catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: PresetName,
    pub category: Category,
    /// Mount state, applied before the delay elapses. May include properties
    /// that are never animated (e.g. a perspective hint).
    pub initial: Vec<(Property, Value)>,
    pub tracks: Vec<Track>,
    pub timing: PresetTiming,
}

impl Preset {
    pub fn new(name: PresetName) -> Self {
        Self {
            category: name.category(),
            name,
            initial: Vec::new(),
            tracks: Vec::new(),
            timing: PresetTiming::default(),
        }
    }

    pub fn initial(mut self, property: Property, value: Value) -> Self {
        self.initial.push((property, value));
        self
    }

    pub fn track(mut self, property: Property, values: Vec<Value>) -> Self {
        self.tracks.push(Track { property, values });
        self
    }

    pub fn times(mut self, stops: &[f32]) -> Self {
        self.timing.times = Some(stops.to_vec());
        self
    }

    pub fn duration(mut self, seconds: f32) -> Self {
        self.timing.duration = Some(seconds);
        self
    }

    pub fn ease(mut self, ease: crate::ease::Ease) -> Self {
        self.timing.ease = Some(EaseSpec::Uniform(ease));
        self
    }

    pub fn ease_per_segment(mut self, eases: Vec<crate::ease::Ease>) -> Self {
        self.timing.ease = Some(EaseSpec::PerSegment(eases));
        self
    }

    pub fn origin(mut self, origin: TransformOrigin) -> Self {
        self.timing.transform_origin = Some(origin);
        self
    }

    /// Number of keyframes shared by every track.
    pub fn keyframe_len(&self) -> usize {
        self.tracks.first().map(|t| t.values.len()).unwrap_or(0)
    }

    /// Check the table invariants for this entry.
    ///
    /// Violations are authoring mistakes, caught once when the catalog is
    /// built rather than at render time.
    pub fn validate(&self) -> Result<(), MotionError> {
        let fail = |reason: String| Err(MotionError::malformed(self.name.as_str(), reason));

        if self.tracks.is_empty() {
            return fail("preset has no tracks".into());
        }
        let len = self.keyframe_len();
        for track in &self.tracks {
            if track.values.is_empty() {
                return fail(format!("empty track {:?}", track.property));
            }
            if track.values.len() != len {
                return fail(format!(
                    "track {:?} has {} keyframes, expected {}",
                    track.property,
                    track.values.len(),
                    len
                ));
            }
            let percent = track.values[0].is_percent();
            if track.values.iter().any(|v| v.is_percent() != percent) {
                return fail(format!("track {:?} mixes percent and number", track.property));
            }
        }

        if let Some(times) = &self.timing.times {
            if times.len() != len {
                return fail(format!("{} stops for {} keyframes", times.len(), len));
            }
            if times.first() != Some(&0.0) || times.last() != Some(&1.0) {
                return fail("stops must run from 0 to 1".into());
            }
            let mut last = 0.0f32;
            for &t in times {
                if !t.is_finite() || !(0.0..=1.0).contains(&t) {
                    return fail(format!("stop {t} outside [0,1]"));
                }
                if t < last {
                    return fail("stops must be non-decreasing".into());
                }
                last = t;
            }
        }

        if let Some(EaseSpec::PerSegment(eases)) = &self.timing.ease {
            if eases.len() != len.saturating_sub(1) {
                return fail(format!(
                    "{} segment eases for {} segments",
                    eases.len(),
                    len.saturating_sub(1)
                ));
            }
        }

        Ok(())
    }
}
