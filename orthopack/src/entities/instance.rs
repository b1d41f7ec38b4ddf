use crate::entities::{Container, Item};
use anyhow::{Result, ensure};

/// Instance of the 2D orthogonal knapsack problem.
/// The order of the items is the order in which they were loaded and carries no meaning.
#[derive(Clone, Debug)]
pub struct Instance {
    pub name: String,
    pub container: Container,
    items: Vec<Item>,
}

impl Instance {
    /// Creates a new instance, rejecting degenerate containers, empty item sets,
    /// zero-sized items and item ids that do not match their index.
    ///
    /// Dimensions are bounded so that every area, and every coordinate an item can reach
    /// when anchored inside the container, fits in a `u64`.
    pub fn try_new(name: impl Into<String>, container: Container, items: Vec<Item>) -> Result<Self> {
        ensure!(
            container.width > 0 && container.height > 0,
            "container dimensions must be positive, got {}x{}",
            container.width,
            container.height
        );
        ensure!(
            container.width.checked_mul(container.height).is_some(),
            "container area overflows, got {}x{}",
            container.width,
            container.height
        );
        ensure!(!items.is_empty(), "instance contains no items");
        for (i, item) in items.iter().enumerate() {
            ensure!(
                item.id() == i,
                "item at index {i} has id {}, ids must match their index",
                item.id()
            );
            ensure!(
                item.width() > 0 && item.height() > 0,
                "item {i} has a zero dimension ({}x{})",
                item.width(),
                item.height()
            );
            ensure!(
                item.width().checked_mul(item.height()).is_some(),
                "item {i} area overflows ({}x{})",
                item.width(),
                item.height()
            );
            ensure!(
                container.width.checked_add(item.width()).is_some()
                    && container.height.checked_add(item.height()).is_some(),
                "item {i} ({}x{}) exceeds the coordinate range when placed in the container",
                item.width(),
                item.height()
            );
        }
        Ok(Instance {
            name: name.into(),
            container,
            items,
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: usize) -> &Item {
        &self.items[id]
    }

    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    /// The ids of all items in load order
    pub fn item_ids(&self) -> Vec<usize> {
        (0..self.items.len()).collect()
    }

    /// Sum of the values of all items, an upper bound on any packing
    pub fn total_value(&self) -> f64 {
        self.items.iter().map(|i| i.value()).sum()
    }
}
