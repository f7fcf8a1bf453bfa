// ABOUTME: Expands GROW dashlets one cell per axis and round until nothing changes.
// ABOUTME: Dashlets are visited in input order each round, so earlier ones win contested cells.

use crate::{CellRect, Occupancy, Raster, WidgetRect};

/// Grow all elastic rectangles as far as possible. Returns the number of rounds,
/// including the final round in which nothing changed.
pub fn expand(widgets: &mut [WidgetRect], raster: &Raster, occupancy: &mut Occupancy) -> usize {
    let mut rounds = 0;
    loop {
        rounds += 1;
        let mut expanded = false;
        for widget in widgets.iter_mut() {
            expanded |= grow_once(widget, raster, occupancy);
        }
        if !expanded {
            break;
        }
    }
    tracing::debug!("Growth reached a fixed point after {} rounds", rounds);
    rounds
}

/// Try to take one more column, then one more row (using the possibly widened rectangle)
fn grow_once(widget: &mut WidgetRect, raster: &Raster, occupancy: &mut Occupancy) -> bool {
    let mut grew = false;
    let r = &mut widget.rect;

    if widget.grow_by.x > 0 {
        if r.right < raster.width()
            && occupancy.try_allocate(&CellRect::new(r.right, r.top, r.right + 1, r.bottom))
        {
            r.right += 1;
            grew = true;
        }
    } else if widget.grow_by.x < 0
        && r.left > 0
        && occupancy.try_allocate(&CellRect::new(r.left - 1, r.top, r.left, r.bottom))
    {
        r.left -= 1;
        grew = true;
    }

    if widget.grow_by.y > 0 {
        if r.bottom < raster.height()
            && occupancy.try_allocate(&CellRect::new(r.left, r.bottom, r.right, r.bottom + 1))
        {
            r.bottom += 1;
            grew = true;
        }
    } else if widget.grow_by.y < 0
        && r.top > 0
        && occupancy.try_allocate(&CellRect::new(r.left, r.top - 1, r.right, r.top))
    {
        r.top -= 1;
        grew = true;
    }

    grew
}
