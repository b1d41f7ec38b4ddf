use serde::{Deserialize, Serialize};

/// External representation of a problem instance
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    pub container: ExtContainer,
    /// Set of items that can be packed
    pub items: Vec<ExtItem>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtContainer {
    pub width: u64,
    pub height: u64,
}

/// External representation of an item
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtItem {
    /// Unique identifier of the item, its position in the instance
    pub id: usize,
    pub width: u64,
    pub height: u64,
    /// Declared value of the item. Zero (or less) means the value equals the area of the item.
    #[serde(default)]
    pub value: f64,
}

/// External representation of a solution
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// Total value of the packed items
    pub value: f64,
    /// Packed area divided by the area of the container
    pub density: f64,
    pub n_placed: usize,
    pub n_items: usize,
    /// Item order from which the layout was generated
    pub permutation: Vec<usize>,
    pub layout: ExtLayout,
    /// The time it took to generate the solution in seconds
    pub run_time_sec: f64,
}

/// External representation of a layout
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtLayout {
    pub container: ExtContainer,
    pub placed_items: Vec<ExtPlacedItem>,
}

/// External representation of a placed item, `(x, y)` is its bottom-left corner
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedItem {
    pub item_id: usize,
    pub x: u64,
    pub y: u64,
    pub width: u64,
    pub height: u64,
    pub value: f64,
}
