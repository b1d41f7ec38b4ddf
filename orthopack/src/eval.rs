use crate::entities::Layout;

/// Objective value of a layout: the sum of the resolved values of all placed items.
/// Larger is better.
pub fn evaluate(layout: &Layout) -> f64 {
    layout.placed_items().iter().map(|pi| pi.value).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Container, Item, PlacedItem};
    use crate::geometry::Point;

    #[test]
    fn empty_layout_is_worth_nothing() {
        let layout = Layout::new(Container {
            width: 5,
            height: 5,
        });
        assert_eq!(evaluate(&layout), 0.0);
    }

    #[test]
    fn sums_resolved_values() {
        let a = Item::new(0, 2, 3, 0.0);
        let b = Item::new(1, 1, 1, 10.0);
        let layout = Layout::from_placed_items(
            Container {
                width: 5,
                height: 5,
            },
            vec![
                PlacedItem::new(&a, Point { x: 0, y: 0 }),
                PlacedItem::new(&b, Point { x: 2, y: 0 }),
            ],
        );
        assert_eq!(evaluate(&layout), 16.0);
    }
}
