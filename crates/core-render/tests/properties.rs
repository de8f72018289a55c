//! Property tests for the two load-bearing layout invariants: the field
//! span contract and cursor monotonicity under arbitrary primitive
//! sequences.

use core_config::DisplayOptions;
use core_model::{Align, ColumnDescriptor, ColumnKind, LineKind, View};
use core_render::RowPainter;
use core_render::writer::Pane;
use proptest::prelude::*;

fn test_view(width: usize) -> View {
    View::new(
        width,
        1,
        vec![ColumnDescriptor::new(ColumnKind::Text, 0, Align::Left)],
    )
}

proptest! {
    // With an unrestricted viewport, a field consumes exactly width + 1
    // columns no matter what text it holds.
    #[test]
    fn field_span_is_width_plus_one(
        text in "[a-zA-Z0-9 ]{0,40}",
        width in 1usize..30,
        right in proptest::bool::ANY,
    ) {
        let mut view = test_view(200);
        let mut pane = Pane::new();
        let opts = DisplayOptions::default();
        let align = if right { Align::Right } else { Align::Left };
        let mut p = RowPainter::new(&mut view, &mut pane, &opts, false);
        let full = p.draw_field(LineKind::Default, Some(&text), width, align, true);
        prop_assert!(!full);
        prop_assert_eq!(view.col, width + 1);
    }

    // Absent values reserve the same span as present ones.
    #[test]
    fn blank_field_span_matches(width in 1usize..30) {
        let mut view = test_view(200);
        let mut pane = Pane::new();
        let opts = DisplayOptions::default();
        let mut p = RowPainter::new(&mut view, &mut pane, &opts, false);
        p.draw_field(LineKind::Default, None, width, Align::Left, false);
        prop_assert_eq!(view.col, width + 1);
    }

    // The cursor never decreases and never exceeds the row bound, for any
    // interleaving of primitives, budgets, and horizontal scroll.
    #[test]
    fn cursor_is_monotonic_and_bounded(
        ops in proptest::collection::vec((0u8..4, "[a-z界 ]{0,20}", 0usize..25), 1..12),
        width in 1usize..60,
        hscroll in 0usize..20,
    ) {
        let mut view = test_view(width);
        view.pos.col = hscroll;
        let mut pane = Pane::new();
        let opts = DisplayOptions::default();
        let bound = width + hscroll;
        let mut last = 0;
        for (op, text, n) in ops {
            let mut p = RowPainter::new(&mut view, &mut pane, &opts, false);
            match op {
                0 => { p.draw_chars(LineKind::Default, &text, n, true); }
                1 => { p.draw_space(LineKind::Default, n, n); }
                2 => { p.draw_field(LineKind::Default, Some(&text), n, Align::Right, false); }
                _ => { p.draw_text(LineKind::Default, &text); }
            }
            prop_assert!(view.col >= last, "cursor went backwards");
            prop_assert!(view.col <= bound, "cursor past the viewport bound");
            last = view.col;
        }
    }

    // Truncation with the marker never writes more than the budget, and the
    // reported advance includes the marker cell.
    #[test]
    fn truncation_marker_stays_in_budget(
        text in "[a-z]{0,60}",
        budget in 2usize..20,
    ) {
        let mut view = test_view(200);
        let mut pane = Pane::new();
        let opts = DisplayOptions::default();
        let mut p = RowPainter::new(&mut view, &mut pane, &opts, false);
        p.draw_chars(LineKind::Default, &text, budget, true);
        prop_assert!(view.col <= budget);
        if text.len() > budget {
            prop_assert_eq!(view.col, budget, "clip + marker fill the budget");
        }
    }
}
