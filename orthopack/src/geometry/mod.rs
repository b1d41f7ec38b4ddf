mod point;
mod rect;

#[doc(inline)]
pub use point::Point;

#[doc(inline)]
pub use rect::Rect;

/// Returns true if `rect` lies entirely within the container `[0, width] × [0, height]`.
#[inline(always)]
pub fn fits_in_container(rect: &Rect, width: u64, height: u64) -> bool {
    rect.x_max <= width && rect.y_max <= height
}

/// Returns true if the interiors of `a` and `b` intersect.
/// Rectangles that only share an edge or a corner do not overlap.
#[inline(always)]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x_min < b.x_max && a.x_max > b.x_min && a.y_min < b.y_max && a.y_max > b.y_min
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn rect(x: u64, y: u64, w: u64, h: u64) -> Rect {
        Rect::from_anchor(Point { x, y }, w, h)
    }

    #[test_case(rect(0, 0, 4, 4), rect(2, 2, 4, 4), true; "partial overlap")]
    #[test_case(rect(0, 0, 4, 4), rect(4, 0, 4, 4), false; "shared vertical edge")]
    #[test_case(rect(0, 0, 4, 4), rect(0, 4, 4, 4), false; "shared horizontal edge")]
    #[test_case(rect(0, 0, 4, 4), rect(4, 4, 2, 2), false; "shared corner")]
    #[test_case(rect(0, 0, 10, 10), rect(3, 3, 2, 2), true; "enclosed")]
    #[test_case(rect(0, 0, 2, 2), rect(5, 5, 2, 2), false; "disjoint")]
    fn overlap_is_open_interval(a: Rect, b: Rect, expected: bool) {
        assert_eq!(overlaps(&a, &b), expected);
        assert_eq!(overlaps(&b, &a), expected);
    }

    #[test_case(rect(0, 0, 10, 10), true; "exactly the container")]
    #[test_case(rect(6, 0, 4, 6), true; "touching right wall")]
    #[test_case(rect(7, 0, 4, 6), false; "sticking out right")]
    #[test_case(rect(0, 5, 5, 6), false; "sticking out top")]
    fn containment(r: Rect, expected: bool) {
        assert_eq!(fits_in_container(&r, 10, 10), expected);
    }
}
