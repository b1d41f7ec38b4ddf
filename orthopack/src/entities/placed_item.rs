use crate::entities::Item;
use crate::geometry::{Point, Rect};

/// Represents an [`Item`] that has been placed in a [`Layout`](crate::entities::Layout).
/// Created once by the placement engine and never modified afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedItem {
    /// ID of the `Item` that was placed
    pub item_id: usize,
    /// The area occupied by the item, its dimensions are those of the `Item`
    pub rect: Rect,
    /// Resolved value of the `Item`
    pub value: f64,
}

impl PlacedItem {
    pub fn new(item: &Item, anchor: Point) -> Self {
        PlacedItem {
            item_id: item.id(),
            rect: item.rect_at(anchor),
            value: item.value(),
        }
    }

    pub fn x(&self) -> u64 {
        self.rect.x_min
    }

    pub fn y(&self) -> u64 {
        self.rect.y_min
    }

    pub fn width(&self) -> u64 {
        self.rect.width()
    }

    pub fn height(&self) -> u64 {
        self.rect.height()
    }
}
