//! Property-based invariants for the geometry primitives.
//!
//! 1. `inner` never grows a rectangle and never escapes its parent.
//! 2. `row` strips stay inside the parent and never exceed the requested height.
//! 3. Right/bottom edges never overflow.

use proptest::prelude::*;
use simscope_core::geometry::{Rect, Sides};

fn small_rect_strategy() -> impl Strategy<Value = Rect> {
    (0u16..=500, 0u16..=500, 0u16..=500, 0u16..=500).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn inner_stays_inside(rect in small_rect_strategy(), t in 0u16..50, r in 0u16..50, b in 0u16..50, l in 0u16..50) {
        let inner = rect.inner(Sides::new(t, r, b, l));
        prop_assert!(inner.width <= rect.width);
        prop_assert!(inner.height <= rect.height);
        if !inner.is_empty() {
            prop_assert!(inner.x >= rect.x && inner.right() <= rect.right());
            prop_assert!(inner.y >= rect.y && inner.bottom() <= rect.bottom());
        }
    }

    #[test]
    fn rows_stay_inside(rect in small_rect_strategy(), index in 0u16..100, row_height in 1u16..40) {
        let row = rect.row(index, row_height);
        prop_assert!(row.height <= row_height);
        prop_assert!(row.bottom() <= rect.bottom());
        prop_assert_eq!(row.x, rect.x);
        prop_assert_eq!(row.width, rect.width);
    }

    #[test]
    fn edges_never_overflow(x in any::<u16>(), y in any::<u16>(), w in any::<u16>(), h in any::<u16>()) {
        let rect = Rect::new(x, y, w, h);
        prop_assert!(rect.right() >= rect.x);
        prop_assert!(rect.bottom() >= rect.y);
    }
}
