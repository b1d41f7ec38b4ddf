use crate::entities::{Container, PlacedItem};

/// A set of items placed inside a container, in the order they were placed.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub container: Container,
    placed_items: Vec<PlacedItem>,
}

impl Layout {
    pub fn new(container: Container) -> Self {
        Layout {
            container,
            placed_items: vec![],
        }
    }

    pub fn from_placed_items(container: Container, placed_items: Vec<PlacedItem>) -> Self {
        Layout {
            container,
            placed_items,
        }
    }

    pub(crate) fn push(&mut self, p_item: PlacedItem) {
        self.placed_items.push(p_item);
    }

    pub fn placed_items(&self) -> &[PlacedItem] {
        &self.placed_items
    }

    pub fn n_placed(&self) -> usize {
        self.placed_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed_items.is_empty()
    }

    /// Sum of the values of all placed items
    pub fn value(&self) -> f64 {
        self.placed_items.iter().map(|pi| pi.value).sum()
    }

    /// Fraction of the container's area covered by placed items
    pub fn density(&self) -> f64 {
        let area = |w: u64, h: u64| w as f64 * h as f64;
        let placed_area: f64 = self
            .placed_items
            .iter()
            .map(|pi| area(pi.width(), pi.height()))
            .sum();
        placed_area / area(self.container.width, self.container.height)
    }
}
