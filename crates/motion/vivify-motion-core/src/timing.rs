//! Timing resolution: the one piece of real logic in this crate.
//!
//! Given a base duration, the speed-modifier flags, a repeat spec and the
//! reduced-motion preference, compute the effective timing handed to the host
//! engine. Pure and idempotent; every adapter funnels through
//! [`resolve_timing`].

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Duration forced when the reduced-motion preference is active: one
/// millisecond, a negligible epoch rather than a true zero so hosts that
/// divide by the duration stay well-defined.
pub const REDUCED_MOTION_DURATION: f32 = 0.001;

/// Speed/repeat modifier flags.
///
/// The four speed flags are intended to be mutually exclusive but nothing
/// enforces that; when several are set, the first true flag in the fixed order
/// `faster > fast > slow > slower` wins and the rest are ignored, mirroring an
/// if/else-if chain. That precedence is a compatibility quirk to preserve, not
/// a bug to fix.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub faster: bool,
    #[serde(default)]
    pub fast: bool,
    #[serde(default)]
    pub slow: bool,
    #[serde(default)]
    pub slower: bool,
    #[serde(default)]
    pub infinite: bool,
}

/// Repeat specification: a count of extra runs, or unbounded.
///
/// On the wire this accepts either a non-negative integer or a boolean
/// (`true` = unbounded, `false` = 0), matching the prop surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Repeat {
    Count(u32),
    Infinite,
}

impl Default for Repeat {
    fn default() -> Self {
        Repeat::Count(0)
    }
}

impl Serialize for Repeat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Repeat::Count(n) => serializer.serialize_u32(*n),
            Repeat::Infinite => serializer.serialize_bool(true),
        }
    }
}

impl<'de> Deserialize<'de> for Repeat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RepeatVisitor;

        impl Visitor<'_> for RepeatVisitor {
            type Value = Repeat;

            fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("a non-negative integer or a boolean")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Repeat, E> {
                Ok(if v { Repeat::Infinite } else { Repeat::Count(0) })
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Repeat, E> {
                u32::try_from(v)
                    .map(Repeat::Count)
                    .map_err(|_| E::custom("repeat count out of range"))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Repeat, E> {
                u32::try_from(v)
                    .map(Repeat::Count)
                    .map_err(|_| E::custom("repeat count must be non-negative"))
            }

            // Tolerate `2.0` from JS number marshalling.
            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Repeat, E> {
                if v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 {
                    Ok(Repeat::Count(v as u32))
                } else {
                    Err(E::custom("repeat count must be a non-negative integer"))
                }
            }
        }

        deserializer.deserialize_any(RepeatVisitor)
    }
}

/// Effective timing for one timeline. Derived fresh on every mount; never
/// persisted.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedTiming {
    /// Seconds per run.
    pub duration: f32,
    /// Seconds before the first run starts. Passed through unmodified.
    pub delay: f32,
    pub repeat: Repeat,
}

/// Where a timeline is at `elapsed` seconds after mount.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TimelinePhase {
    /// Still inside the delay; hold the initial state.
    Pending,
    /// Mid-playback: `run` counts completed passes, `progress` is the
    /// normalized position in the current pass.
    Active { run: u32, progress: f32 },
    /// All runs finished; hold the final keyframe.
    Done,
}

/// Compute effective timing.
///
/// * At most one speed flag applies, in the order `faster > fast > slow >
///   slower` (÷2, ×0.8, ×2, ×3).
/// * `infinite` forces unbounded repeat over any caller value.
/// * A preset-intrinsic `preset_duration` replaces the modifier-adjusted
///   duration when present.
/// * The reduced-motion override runs last and is unconditional: it collapses
///   duration to [`REDUCED_MOTION_DURATION`] and repeat to `Count(1)`,
///   regardless of flags, preset overrides or unbounded repeat.
///
/// Inputs are not validated; a negative or zero duration flows through the
/// arithmetic unchanged.
pub fn resolve_timing(
    base_duration: f32,
    delay: f32,
    repeat: Repeat,
    modifiers: Modifiers,
    reduced_motion: bool,
    preset_duration: Option<f32>,
) -> ResolvedTiming {
    let mut duration = if modifiers.faster {
        base_duration / 2.0
    } else if modifiers.fast {
        base_duration * 0.8
    } else if modifiers.slow {
        base_duration * 2.0
    } else if modifiers.slower {
        base_duration * 3.0
    } else {
        base_duration
    };

    let mut repeat = if modifiers.infinite {
        Repeat::Infinite
    } else {
        repeat
    };

    if let Some(fixed) = preset_duration {
        duration = fixed;
    }

    if reduced_motion {
        duration = REDUCED_MOTION_DURATION;
        repeat = Repeat::Count(1);
    }

    ResolvedTiming {
        duration,
        delay,
        repeat,
    }
}

impl ResolvedTiming {
    /// Total passes for a finite repeat: the count is *extra* runs, so
    /// `Count(0)` plays once.
    fn total_runs(&self) -> Option<u32> {
        match self.repeat {
            Repeat::Count(n) => Some(n.saturating_add(1)),
            Repeat::Infinite => None,
        }
    }

    /// Locate `elapsed` seconds (since mount) on this timeline.
    pub fn phase(&self, elapsed: f32) -> TimelinePhase {
        if elapsed < self.delay {
            return TimelinePhase::Pending;
        }
        let t = elapsed - self.delay;
        if self.duration <= 0.0 {
            // Degenerate but unvalidated input: the timeline is already over.
            return match self.total_runs() {
                Some(_) => TimelinePhase::Done,
                None => TimelinePhase::Active {
                    run: 0,
                    progress: 1.0,
                },
            };
        }
        let run = (t / self.duration) as u32;
        if let Some(total) = self.total_runs() {
            if run >= total {
                return TimelinePhase::Done;
            }
        }
        let progress = ((t - run as f32 * self.duration) / self.duration).clamp(0.0, 1.0);
        TimelinePhase::Active { run, progress }
    }

    /// True once a finite timeline has played every run. Unbounded timelines
    /// never finish.
    pub fn is_complete(&self, elapsed: f32) -> bool {
        matches!(self.phase(elapsed), TimelinePhase::Done)
    }
}
