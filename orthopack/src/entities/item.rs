use crate::geometry::{Point, Rect};

/// Rectangular item to be packed, never rotated.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    id: usize,
    width: u64,
    height: u64,
    value: f64,
}

impl Item {
    /// Creates a new item.
    /// A declared `value` of zero or less is replaced by the item's area.
    pub fn new(id: usize, width: u64, height: u64, value: f64) -> Self {
        let value = match value > 0.0 {
            true => value,
            false => width as f64 * height as f64,
        };
        Item {
            id,
            width,
            height,
            value,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn width(&self) -> u64 {
        self.width
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    /// The resolved value of the item
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Does not overflow for the items of a valid [`Instance`](crate::entities::Instance)
    pub fn area(&self) -> u64 {
        self.width * self.height
    }

    /// The rectangle the item occupies when its bottom-left corner is at `anchor`
    #[inline(always)]
    pub fn rect_at(&self, anchor: Point) -> Rect {
        Rect::from_anchor(anchor, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.0, 24.0; "zero falls back to area")]
    #[test_case(-3.0, 24.0; "negative falls back to area")]
    #[test_case(7.5, 7.5; "positive is kept")]
    fn value_is_resolved_at_construction(declared: f64, expected: f64) {
        let item = Item::new(0, 6, 4, declared);
        assert_eq!(item.value(), expected);
    }

    #[test]
    fn huge_dimensions_do_not_panic() {
        let item = Item::new(0, u64::MAX, u64::MAX, 0.0);
        assert!(item.value() > 0.0);
    }
}
