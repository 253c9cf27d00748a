//! Property tests for the buffer and viewport invariants

use proptest::prelude::*;

use canterm::{Area, Cell, Color, Config, Coordinate, Size, Terminal};

/// A terminal whose 1×1 window never blocks buffer resizes.
fn unconstrained(width: usize, height: usize) -> Terminal {
    let config = Config {
        width,
        height,
        window_width: 1,
        window_height: 1,
        ..Config::default()
    };
    Terminal::new(&config).expect("config is valid")
}

/// One valid-shaped mutation of the terminal geometry. Individual ops
/// may still be rejected at runtime; the invariants must survive either
/// way.
#[derive(Debug, Clone)]
enum Op {
    BufferSize(usize, usize),
    WindowPosition(usize, usize),
    WindowSize(usize, usize),
    CursorPosition(usize, usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1usize..60, 1usize..60).prop_map(|(w, h)| Op::BufferSize(w, h)),
        (0usize..60, 0usize..60).prop_map(|(l, t)| Op::WindowPosition(l, t)),
        (1usize..60, 1usize..60).prop_map(|(w, h)| Op::WindowSize(w, h)),
        (0usize..60, 0usize..60).prop_map(|(l, t)| Op::CursorPosition(l, t)),
    ]
}

fn apply(terminal: &mut Terminal, op: &Op) {
    // Rejected ops must leave the state untouched, so the result is
    // irrelevant to the invariant.
    let _ = match *op {
        Op::BufferSize(w, h) => terminal.set_buffer_size(Size::new(w, h)),
        Op::WindowPosition(l, t) => terminal.set_window_position(Coordinate::new(l, t)),
        Op::WindowSize(w, h) => terminal.set_window_size(Size::new(w, h)),
        Op::CursorPosition(l, t) => terminal.set_cursor_position(Coordinate::new(l, t)),
    };
}

proptest! {
    #![proptest_config(ProptestConfig { max_global_rejects: 100_000, ..ProptestConfig::default() })]

    #[test]
    fn resized_buffer_holds_width_times_height_cells(
        width in 1usize..300,
        height in 1usize..300,
    ) {
        let mut terminal = unconstrained(80, 25);
        terminal.set_buffer_size(Size::new(width, height)).unwrap();

        prop_assert_eq!(terminal.buffer_size(), Size::new(width, height));
        prop_assert_eq!(terminal.buffer().cell_count(), width * height);
    }

    #[test]
    fn resize_chain_preserves_surviving_cell(
        start_w in 1usize..120, start_h in 1usize..120,
        mid_w in 1usize..120, mid_h in 1usize..120,
        end_w in 1usize..120, end_h in 1usize..120,
        x in 0usize..120, y in 0usize..120,
    ) {
        prop_assume!(x < start_w.min(mid_w).min(end_w));
        prop_assume!(y < start_h.min(mid_h).min(end_h));

        let mut terminal = unconstrained(start_w, start_h);
        let cell = Cell::new('A', Color::Green, Color::DarkBlue);
        terminal.set_cell(Coordinate::new(x, y), cell.clone()).unwrap();

        terminal.set_buffer_size(Size::new(mid_w, mid_h)).unwrap();
        terminal.set_buffer_size(Size::new(end_w, end_h)).unwrap();

        prop_assert_eq!(terminal.cell(Coordinate::new(x, y)).unwrap(), cell);
    }

    #[test]
    fn geometry_invariants_hold_after_any_mutation_sequence(
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut terminal = unconstrained(30, 30);

        for op in &ops {
            apply(&mut terminal, op);

            // Viewport containment
            prop_assert!(
                terminal.window_left() + terminal.window_width() <= terminal.buffer_width()
            );
            prop_assert!(
                terminal.window_top() + terminal.window_height() <= terminal.buffer_height()
            );
            // Cursor containment (exclusive bounds)
            prop_assert!(terminal.cursor_left() < terminal.buffer_width());
            prop_assert!(terminal.cursor_top() < terminal.buffer_height());
        }
    }

    #[test]
    fn move_to_own_origin_never_changes_content(
        left in 0usize..20, top in 0usize..10,
        width in 0usize..=20, height in 0usize..=10,
    ) {
        prop_assume!(left < 20 && top < 10);
        prop_assume!(left + width <= 20 && top + height <= 10);

        let mut terminal = unconstrained(20, 10);
        for y in 0..10 {
            for x in 0..20 {
                let c = char::from(b'a' + ((x + y) % 26) as u8);
                terminal
                    .set_cell(Coordinate::new(x, y), Cell::new(c, Color::White, Color::Black))
                    .unwrap();
            }
        }
        let before = terminal.snapshot();

        terminal
            .move_area(
                Area::new(left, top, width, height),
                Coordinate::new(left, top),
                Some(Cell::new('!', Color::Red, Color::Black)),
            )
            .unwrap();

        prop_assert!(before.content_equals(&terminal.snapshot()));
    }

    #[test]
    fn moved_rectangle_lands_intact(
        width in 1usize..8, height in 1usize..8,
        target_left in 0usize..12, target_top in 0usize..12,
    ) {
        prop_assume!(target_left + width <= 20 && target_top + height <= 20);

        let mut terminal = unconstrained(20, 20);
        for y in 0..height {
            for x in 0..width {
                let c = char::from(b'a' + ((x + y * width) % 26) as u8);
                terminal
                    .set_cell(Coordinate::new(x, y), Cell::new(c, Color::White, Color::Black))
                    .unwrap();
            }
        }

        terminal
            .move_area(
                Area::new(0, 0, width, height),
                Coordinate::new(target_left, target_top),
                None,
            )
            .unwrap();

        if (target_left, target_top) != (0, 0) {
            for y in 0..height {
                for x in 0..width {
                    let expected = char::from(b'a' + ((x + y * width) % 26) as u8);
                    let cell = terminal
                        .cell(Coordinate::new(target_left + x, target_top + y))
                        .unwrap();
                    prop_assert_eq!(cell.content, expected.to_string());
                }
            }
        }
    }
}
