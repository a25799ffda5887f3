#![no_main]

use arbitrary::Arbitrary;
use divider_layout::{
    ConstraintSet, DefaultSpec, SplitConfig, SplitEffect, SplitInputEvent, SplitLayout,
    SplitObserver, SplitPane,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    divider_width: u8,
    left_max: Option<u16>,
    left_min: Option<u16>,
    right_max: Option<u16>,
    right_min: Option<u16>,
    max_ratio: Option<u8>,
    min_ratio: Option<u8>,
    default_ratio: Option<u8>,
    default_left: Option<u16>,
    default_right: Option<u16>,
    ops: Vec<Op>,
}

#[derive(Debug, Arbitrary)]
enum Op {
    Down,
    Move(i16),
    Up,
    Resize(i16, u16),
    Teardown,
}

#[derive(Default)]
struct Notes(usize);

impl SplitObserver for Notes {
    fn on_drag_start(&mut self) {
        self.0 += 1;
    }

    fn on_drag_finish(&mut self) {
        self.0 += 1;
    }

    fn on_ratio_change(&mut self, layout: &SplitLayout) {
        assert!(layout.ratio.is_finite(), "non-finite ratio notified");
        self.0 += 1;
    }
}

fn config(input: &Input) -> SplitConfig {
    let px = |v: Option<u16>| v.map(f64::from);
    let pct = |v: Option<u8>| v.map(f64::from);
    SplitConfig::default()
        .with_divider_width(f64::from(input.divider_width))
        .with_constraints(ConstraintSet {
            left_max_width: px(input.left_max),
            left_min_width: px(input.left_min),
            right_max_width: px(input.right_max),
            right_min_width: px(input.right_min),
            max_ratio: pct(input.max_ratio),
            min_ratio: pct(input.min_ratio),
        })
        .with_defaults(DefaultSpec {
            default_ratio: pct(input.default_ratio),
            default_left_width: px(input.default_left),
            default_right_width: px(input.default_right),
        })
}

fuzz_target!(|input: Input| {
    if input.ops.len() > 512 {
        return;
    }

    let mut pane = SplitPane::new(config(&input), Notes::default());
    let mut seeded = 0usize;

    for op in &input.ops {
        let before_ratio = pane.ratio();
        let before_notes = pane.observer().0;
        let was_torn_down = pane.is_torn_down();
        let was_dragging = pane.is_dragging();

        let event = match *op {
            Op::Down => SplitInputEvent::PointerDown,
            Op::Move(x) => SplitInputEvent::PointerMove { x: f64::from(x) },
            Op::Up => SplitInputEvent::PointerUp,
            Op::Resize(x, width) => SplitInputEvent::ContainerResize {
                x: f64::from(x),
                width: f64::from(width),
            },
            Op::Teardown => {
                pane.teardown();
                assert!(!pane.is_dragging());
                assert_eq!(pane.ratio(), before_ratio);
                assert_eq!(pane.observer().0, before_notes);
                continue;
            }
        };
        let t = pane.apply_event(&event);

        if matches!(t.effect, SplitEffect::Seeded { .. }) {
            seeded += 1;
        }
        assert!(seeded <= 1, "ratio seeded more than once");
        if let Some(ratio) = pane.ratio() {
            assert!(ratio.is_finite());
        }

        if was_torn_down {
            assert!(t.is_noop());
            assert_eq!(pane.ratio(), before_ratio);
            assert_eq!(pane.observer().0, before_notes);
        }
        if event.is_pointer_move() && !was_dragging {
            assert_eq!(pane.ratio(), before_ratio, "idle move changed the ratio");
        }
    }
});
