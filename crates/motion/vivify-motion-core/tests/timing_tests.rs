use vivify_motion_core::{
    resolve_timing, Modifiers, Repeat, ResolvedTiming, TimelinePhase, REDUCED_MOTION_DURATION,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

fn resolve(base: f32, modifiers: Modifiers) -> ResolvedTiming {
    resolve_timing(base, 0.0, Repeat::default(), modifiers, false, None)
}

/// it should scale the base duration per speed flag: /2, *0.8, *2, *3
#[test]
fn speed_flags_scale_duration() {
    for base in [0.25, 1.0, 2.0, 7.5] {
        let faster = resolve(
            base,
            Modifiers {
                faster: true,
                ..Default::default()
            },
        );
        approx(faster.duration, base / 2.0, 1e-6);

        let fast = resolve(
            base,
            Modifiers {
                fast: true,
                ..Default::default()
            },
        );
        approx(fast.duration, base * 0.8, 1e-6);

        let slow = resolve(
            base,
            Modifiers {
                slow: true,
                ..Default::default()
            },
        );
        approx(slow.duration, base * 2.0, 1e-6);

        let slower = resolve(
            base,
            Modifiers {
                slower: true,
                ..Default::default()
            },
        );
        approx(slower.duration, base * 3.0, 1e-6);

        let plain = resolve(base, Modifiers::default());
        approx(plain.duration, base, 1e-6);
    }
}

/// it should honor only the highest-precedence flag when several are set
#[test]
fn speed_flag_precedence_is_fixed() {
    let base = 1.0;

    // faster beats everything
    let all = Modifiers {
        faster: true,
        fast: true,
        slow: true,
        slower: true,
        infinite: false,
    };
    approx(resolve(base, all).duration, 0.5, 1e-6);

    // fast beats slow and slower
    let fast_slow = Modifiers {
        fast: true,
        slow: true,
        slower: true,
        ..Default::default()
    };
    approx(resolve(base, fast_slow).duration, 0.8, 1e-6);

    // slow beats slower
    let slow_slower = Modifiers {
        slow: true,
        slower: true,
        ..Default::default()
    };
    approx(resolve(base, slow_slower).duration, 2.0, 1e-6);
}

/// it should let infinite override any explicit finite repeat
#[test]
fn infinite_flag_wins_over_repeat() {
    for repeat in [Repeat::Count(0), Repeat::Count(3), Repeat::Count(u32::MAX)] {
        let timing = resolve_timing(
            1.0,
            0.0,
            repeat,
            Modifiers {
                infinite: true,
                ..Default::default()
            },
            false,
            None,
        );
        assert_eq!(timing.repeat, Repeat::Infinite);
    }
}

/// it should let a preset-intrinsic duration replace the modifier-adjusted one
#[test]
fn preset_duration_overrides_modifiers() {
    let timing = resolve_timing(
        2.0,
        0.0,
        Repeat::Count(0),
        Modifiers {
            slower: true,
            ..Default::default()
        },
        false,
        Some(1.3),
    );
    approx(timing.duration, 1.3, 1e-6);
}

/// it should collapse everything under reduced motion: modifiers, preset durations, infinite
#[test]
fn reduced_motion_is_absolute() {
    let timing = resolve_timing(
        5.0,
        0.25,
        Repeat::Count(7),
        Modifiers {
            slower: true,
            infinite: true,
            ..Default::default()
        },
        true,
        Some(2.0),
    );
    approx(timing.duration, REDUCED_MOTION_DURATION, 1e-9);
    assert_eq!(timing.repeat, Repeat::Count(1));
    // delay still passes through untouched
    approx(timing.delay, 0.25, 1e-6);
}

/// it should pass delay through unmodified
#[test]
fn delay_is_pass_through() {
    for delay in [-1.0, 0.0, 0.5, 10.0] {
        let timing = resolve_timing(1.0, delay, Repeat::Count(0), Modifiers::default(), false, None);
        approx(timing.delay, delay, 1e-6);
    }
}

/// it should not validate nonsensical durations; arithmetic just flows through
#[test]
fn negative_and_zero_durations_flow_through() {
    let zero = resolve(0.0, Modifiers::default());
    approx(zero.duration, 0.0, 1e-9);

    let negative = resolve(
        -2.0,
        Modifiers {
            faster: true,
            ..Default::default()
        },
    );
    approx(negative.duration, -1.0, 1e-6);
}

/// it should be idempotent: identical inputs, identical outputs
#[test]
fn resolve_is_pure() {
    let mods = Modifiers {
        fast: true,
        infinite: true,
        ..Default::default()
    };
    let a = resolve_timing(1.5, 0.2, Repeat::Count(2), mods, false, Some(0.75));
    let b = resolve_timing(1.5, 0.2, Repeat::Count(2), mods, false, Some(0.75));
    assert_eq!(a, b);
}

/// it should accept both integer and boolean repeat on the wire
#[test]
fn repeat_serde_accepts_int_and_bool() {
    let n: Repeat = serde_json::from_str("3").unwrap();
    assert_eq!(n, Repeat::Count(3));

    let yes: Repeat = serde_json::from_str("true").unwrap();
    assert_eq!(yes, Repeat::Infinite);

    let no: Repeat = serde_json::from_str("false").unwrap();
    assert_eq!(no, Repeat::Count(0));

    assert_eq!(serde_json::to_string(&Repeat::Count(2)).unwrap(), "2");
    assert_eq!(serde_json::to_string(&Repeat::Infinite).unwrap(), "true");

    assert!(serde_json::from_str::<Repeat>("-1").is_err());
}

/// it should phase a timeline through Pending, Active runs and Done
#[test]
fn phase_walks_delay_runs_and_done() {
    let timing = ResolvedTiming {
        duration: 1.0,
        delay: 0.5,
        repeat: Repeat::Count(1), // two passes
    };

    assert_eq!(timing.phase(0.0), TimelinePhase::Pending);
    assert_eq!(timing.phase(0.49), TimelinePhase::Pending);

    match timing.phase(1.0) {
        TimelinePhase::Active { run, progress } => {
            assert_eq!(run, 0);
            approx(progress, 0.5, 1e-6);
        }
        other => panic!("expected first run, got {other:?}"),
    }

    match timing.phase(1.75) {
        TimelinePhase::Active { run, progress } => {
            assert_eq!(run, 1);
            approx(progress, 0.25, 1e-6);
        }
        other => panic!("expected second run, got {other:?}"),
    }

    assert_eq!(timing.phase(2.6), TimelinePhase::Done);
    assert!(timing.is_complete(2.6));
}

/// it should never finish an unbounded timeline
#[test]
fn infinite_timeline_never_completes() {
    let timing = ResolvedTiming {
        duration: 0.5,
        delay: 0.0,
        repeat: Repeat::Infinite,
    };
    for elapsed in [0.0, 1.0, 10.0, 1000.0] {
        assert!(!timing.is_complete(elapsed));
    }
    match timing.phase(1.25) {
        TimelinePhase::Active { run, progress } => {
            assert_eq!(run, 2);
            approx(progress, 0.5, 1e-5);
        }
        other => panic!("expected wrapped run, got {other:?}"),
    }
}

/// it should treat a non-positive duration as an already-finished timeline
#[test]
fn degenerate_duration_finishes_immediately() {
    let timing = ResolvedTiming {
        duration: 0.0,
        delay: 0.0,
        repeat: Repeat::Count(0),
    };
    assert_eq!(timing.phase(0.0), TimelinePhase::Done);
}
