//! End-to-end drag scenarios for `SplitPane`.
//!
//! Each test replays a short event script through `apply_event` and checks
//! the ratio, the effects and the observer log.

use divider_layout::{
    BoundaryConstraint, ConstraintSet, DefaultSource, DefaultSpec, MoveDirection, MoveRejection,
    SplitConfig, SplitDragState, SplitEffect, SplitInputEvent, SplitLayout, SplitObserver,
    SplitPane, SplitTransition,
};

#[derive(Debug, Clone, PartialEq)]
enum Note {
    Start,
    Finish,
    Ratio(f64, f64),
}

#[derive(Debug, Default)]
struct Log(Vec<Note>);

impl SplitObserver for Log {
    fn on_drag_start(&mut self) {
        self.0.push(Note::Start);
    }

    fn on_drag_finish(&mut self) {
        self.0.push(Note::Finish);
    }

    fn on_ratio_change(&mut self, layout: &SplitLayout) {
        self.0.push(Note::Ratio(layout.ratio, layout.usable_width));
    }
}

fn replay(pane: &mut SplitPane<Log>, script: &[SplitInputEvent]) -> Vec<SplitTransition> {
    script.iter().map(|event| pane.apply_event(event)).collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn default_ratio_seeds_half_of_usable_width() {
    let mut pane = SplitPane::new(SplitConfig::default(), Log::default());
    let out = replay(&mut pane, &[SplitInputEvent::ContainerResize { x: 0.0, width: 500.0 }]);

    assert_eq!(
        out[0].effect,
        SplitEffect::Seeded {
            layout: SplitLayout::new(50.0, 498.0),
            source: DefaultSource::Ratio,
        }
    );
    assert_eq!(pane.observer().0, vec![Note::Ratio(50.0, 498.0)]);
}

#[test]
fn default_left_width_seeds_proportional_ratio() {
    let config = SplitConfig::default().with_defaults(DefaultSpec::left_width(100.0));
    let mut pane = SplitPane::new(config, Log::default());
    pane.container_resize(0.0, 500.0);

    let ratio = pane.ratio().expect("seeded");
    assert!(close(ratio, 100.0 / 498.0 * 100.0), "ratio={ratio}");
    assert!((ratio - 20.08).abs() < 0.005);
}

#[test]
fn every_default_given_right_width_wins() {
    let config = SplitConfig::default().with_defaults(DefaultSpec {
        default_ratio: Some(10.0),
        default_left_width: Some(300.0),
        default_right_width: Some(100.0),
    });
    let mut pane = SplitPane::new(config, Log::default());
    let t = pane.container_resize(0.0, 402.0);

    assert!(matches!(
        t.effect,
        SplitEffect::Seeded {
            source: DefaultSource::RightWidth,
            ..
        }
    ));
    assert_eq!(pane.ratio(), Some(75.0));
    assert_eq!(pane.layout().map(|l| l.right_width), Some(100.0));
}

#[test]
fn shrink_then_recover_from_left_min_violation() {
    let config = SplitConfig::default()
        .with_constraints(ConstraintSet::default().with_left_min_width(50.0))
        .with_defaults(DefaultSpec::ratio(20.0));
    let mut pane = SplitPane::new(config, Log::default());

    let out = replay(
        &mut pane,
        &[
            // 20% of 500 = 100px.
            SplitInputEvent::ContainerResize { x: 0.0, width: 502.0 },
            // 20% of 200 = 40px: left min now violated.
            SplitInputEvent::ContainerResize { x: 0.0, width: 202.0 },
            SplitInputEvent::PointerDown,
            SplitInputEvent::PointerMove { x: 20.0 },
            SplitInputEvent::PointerMove { x: 50.0 },
            SplitInputEvent::PointerUp,
        ],
    );

    assert_eq!(
        out[3].effect,
        SplitEffect::Rejected {
            rejection: MoveRejection::WrongDirection {
                constraint: BoundaryConstraint::LeftMin,
                direction: MoveDirection::TowardLeft,
            }
        }
    );
    assert_eq!(
        out[4].effect,
        SplitEffect::RatioChanged {
            layout: SplitLayout::new(25.0, 200.0),
            direction: MoveDirection::TowardRight,
        }
    );
    assert_eq!(
        pane.observer().0,
        vec![
            Note::Ratio(20.0, 500.0),
            Note::Ratio(20.0, 200.0),
            Note::Start,
            Note::Ratio(25.0, 200.0),
            Note::Finish,
        ]
    );
}

#[test]
fn pointer_outside_container_is_dropped() {
    let config = SplitConfig::default().with_constraints(
        ConstraintSet::default()
            .with_left_min_width(10.0)
            .with_right_min_width(10.0),
    );
    let mut pane = SplitPane::new(config, Log::default());
    let out = replay(
        &mut pane,
        &[
            SplitInputEvent::ContainerResize { x: 100.0, width: 402.0 },
            SplitInputEvent::PointerDown,
            SplitInputEvent::PointerMove { x: 99.0 },
            SplitInputEvent::PointerMove { x: 503.0 },
            SplitInputEvent::PointerMove { x: 502.0 },
        ],
    );

    for t in &out[2..4] {
        assert_eq!(
            t.effect,
            SplitEffect::Rejected {
                rejection: MoveRejection::OutsideContainer
            }
        );
    }
    // 502 is the inclusive right edge; local 402 is past the usable width
    // but the policy does not clamp.
    assert!(matches!(out[4].effect, SplitEffect::RatioChanged { .. }));
    assert!(close(pane.ratio().expect("seeded"), 100.5));
}

#[test]
fn right_edge_pointer_overshoots_full_ratio() {
    let mut pane = SplitPane::new(SplitConfig::default(), Log::default());
    pane.container_resize(0.0, 500.0);
    pane.pointer_down();
    let t = pane.pointer_move(500.0);

    // The outer edge is inside the container but past the usable width.
    let layout = t.layout().expect("move admitted");
    assert!(close(layout.ratio, 500.0 / 498.0 * 100.0), "ratio={}", layout.ratio);
    assert!(layout.ratio > 100.0);
    assert!(close(layout.right_width, -2.0), "right={}", layout.right_width);

    // Any leftward move brings it back into range.
    pane.pointer_move(249.0);
    assert_eq!(pane.ratio(), Some(50.0));
}

#[test]
fn moves_after_release_are_ignored() {
    let mut pane = SplitPane::new(SplitConfig::default(), Log::default());
    let out = replay(
        &mut pane,
        &[
            SplitInputEvent::ContainerResize { x: 0.0, width: 202.0 },
            SplitInputEvent::PointerDown,
            SplitInputEvent::PointerMove { x: 150.0 },
            SplitInputEvent::PointerUp,
            SplitInputEvent::PointerMove { x: 20.0 },
            SplitInputEvent::PointerUp,
        ],
    );

    assert!(out[4].is_noop());
    assert!(out[5].is_noop());
    assert_eq!(out[5].from, SplitDragState::Idle);
    assert_eq!(pane.ratio(), Some(75.0));
    assert_eq!(
        pane.observer()
            .0
            .iter()
            .filter(|n| **n == Note::Finish)
            .count(),
        1
    );
}

#[test]
fn changing_constraints_mid_session_steers_next_drag() {
    let mut pane = SplitPane::new(SplitConfig::default(), Log::default());
    pane.container_resize(0.0, 402.0);
    pane.set_constraints(ConstraintSet::default().with_max_ratio(40.0));

    pane.pointer_down();
    // Stored 50% is above the new max: only leftward moves pass.
    assert!(pane.pointer_move(300.0).is_noop());
    assert!(!pane.pointer_move(100.0).is_noop());
    assert_eq!(pane.ratio(), Some(25.0));
}
