//! Property-style invariants for the boundary policy and the split machine.
//!
//! Random pointer streams are driven through `SplitPane` and the suite checks
//! that pane widths stay inside their bounds up to one step of overshoot,
//! that violations never grow, and that seeding happens exactly once.

use divider_layout::{
    BoundaryConstraint, ConstraintSet, ContainerBounds, DefaultSpec, MoveProposal, SplitConfig,
    SplitEffect, SplitLayout, SplitObserver, SplitPane, evaluate_move,
};
use proptest::prelude::*;

#[derive(Debug, Default)]
struct Count {
    ratio_changes: usize,
    finishes: usize,
}

impl SplitObserver for Count {
    fn on_drag_finish(&mut self) {
        self.finishes += 1;
    }

    fn on_ratio_change(&mut self, _layout: &SplitLayout) {
        self.ratio_changes += 1;
    }
}

fn optional_bound(max: f64) -> impl Strategy<Value = Option<f64>> {
    prop_oneof![Just(None), (0.0..max).prop_map(Some)]
}

fn constraint_set() -> impl Strategy<Value = ConstraintSet> {
    (
        optional_bound(800.0),
        optional_bound(800.0),
        optional_bound(800.0),
        optional_bound(800.0),
        optional_bound(100.0),
        optional_bound(100.0),
    )
        .prop_map(
            |(left_min, left_max, right_min, right_max, min_ratio, max_ratio)| ConstraintSet {
                left_min_width: left_min,
                left_max_width: left_max,
                right_min_width: right_min,
                right_max_width: right_max,
                min_ratio,
                max_ratio,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn left_width_stays_within_bounds_up_to_one_step(
        min in 20.0f64..200.0,
        span in 10.0f64..300.0,
        start in 0.0f64..1.0,
        step in 1.0f64..25.0,
        deltas in prop::collection::vec(-1.0f64..1.0, 1..120),
    ) {
        let max = min + span;
        let container = ContainerBounds::new(40.0, 1002.0);
        let config = SplitConfig::default()
            .with_constraints(
                ConstraintSet::default()
                    .with_left_min_width(min)
                    .with_left_max_width(max),
            )
            .with_defaults(DefaultSpec::left_width(min + span * start));

        let mut pane = SplitPane::new(config, ());
        pane.container_resize(container.x, container.width);
        pane.pointer_down();

        for delta in deltas {
            let layout = pane.layout().expect("seeded");
            let pointer_x = container.x + layout.left_width + delta * step;
            pane.pointer_move(pointer_x);

            let left = pane.layout().expect("seeded").left_width;
            prop_assert!(
                left >= min - step - 1e-9 && left <= max + step + 1e-9,
                "left={left} outside [{min}, {max}] +/- {step}"
            );
        }
    }

    #[test]
    fn admitted_moves_never_grow_a_violation(
        constraints in constraint_set(),
        ratio in 0.0f64..100.0,
        local in 0.0f64..1000.0,
    ) {
        let usable = 1000.0;
        let bounds = ContainerBounds::new(0.0, usable + 2.0);
        let proposal = MoveProposal::new(ratio, usable, bounds, local);

        if let Ok(direction) = evaluate_move(&constraints, &proposal) {
            for violated in constraints.violations(ratio, usable) {
                prop_assert_eq!(direction, violated.correcting_direction());
            }
            let new_ratio = local / usable * 100.0;
            for violated in constraints.violations(ratio, usable) {
                match violated {
                    BoundaryConstraint::LeftMax
                    | BoundaryConstraint::RightMin
                    | BoundaryConstraint::RatioMax => prop_assert!(new_ratio <= ratio + 1e-9),
                    BoundaryConstraint::LeftMin
                    | BoundaryConstraint::RightMax
                    | BoundaryConstraint::RatioMin => prop_assert!(new_ratio >= ratio - 1e-9),
                }
            }
        }
    }

    #[test]
    fn outside_pointer_is_always_rejected(
        constraints in constraint_set(),
        ratio in 0.0f64..100.0,
        overshoot in 0.001f64..500.0,
        left_side in any::<bool>(),
    ) {
        let bounds = ContainerBounds::new(100.0, 602.0);
        let pointer_x = if left_side {
            bounds.x - overshoot
        } else {
            bounds.right() + overshoot
        };
        let proposal = MoveProposal::new(ratio, 600.0, bounds, pointer_x);
        prop_assert!(evaluate_move(&constraints, &proposal).is_err());
    }

    #[test]
    fn seeding_happens_once_across_resizes(
        widths in prop::collection::vec(3.0f64..3000.0, 1..40),
        default_left in 10.0f64..200.0,
    ) {
        let config = SplitConfig::default().with_defaults(DefaultSpec::left_width(default_left));
        let mut pane = SplitPane::new(config, ());

        let mut seeded = None;
        let mut seed_count = 0;
        for width in widths {
            let transition = pane.container_resize(0.0, width);
            if let SplitEffect::Seeded { layout, .. } = transition.effect {
                seed_count += 1;
                seeded = Some(layout.ratio);
            }
            prop_assert_eq!(pane.ratio(), seeded);
        }
        prop_assert_eq!(seed_count, 1);
    }

    #[test]
    fn idle_input_never_moves_the_ratio(
        moves in prop::collection::vec(-100.0f64..1100.0, 0..50),
        ups in 0usize..5,
    ) {
        let mut pane = SplitPane::new(SplitConfig::default(), Count::default());
        pane.container_resize(0.0, 1002.0);
        let before = pane.ratio();
        let notified = pane.observer().ratio_changes;

        for x in moves {
            prop_assert!(pane.pointer_move(x).is_noop());
        }
        for _ in 0..ups {
            prop_assert!(pane.pointer_up().is_noop());
        }

        prop_assert_eq!(pane.ratio(), before);
        prop_assert_eq!(pane.observer().ratio_changes, notified);
        prop_assert_eq!(pane.observer().finishes, 0);
    }
}
