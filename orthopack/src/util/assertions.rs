use crate::entities::{Instance, Layout};
use crate::geometry::overlaps;
use itertools::Itertools;
use log::error;
use std::collections::HashSet;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and tests

/// Every placed item lies within the container and no two placed items overlap.
pub fn layout_is_feasible(layout: &Layout) -> bool {
    for pi in layout.placed_items() {
        if !layout.container.contains(&pi.rect) {
            error!(
                "item {} at {:?} exceeds the container {:?}",
                pi.item_id, pi.rect, layout.container
            );
            return false;
        }
    }
    for (a, b) in layout.placed_items().iter().tuple_combinations() {
        if overlaps(&a.rect, &b.rect) {
            error!(
                "items {} {:?} and {} {:?} overlap",
                a.item_id, a.rect, b.item_id, b.rect
            );
            return false;
        }
    }
    true
}

/// Every placed item refers to a distinct item of `instance` and has that item's dimensions and value.
pub fn layout_matches_instance(layout: &Layout, instance: &Instance) -> bool {
    if layout.container != instance.container {
        return false;
    }
    let mut seen = HashSet::new();
    layout.placed_items().iter().all(|pi| {
        pi.item_id < instance.n_items() && seen.insert(pi.item_id) && {
            let item = instance.item(pi.item_id);
            pi.width() == item.width() && pi.height() == item.height() && pi.value == item.value()
        }
    })
}

/// `permutation` contains every item id of `instance` exactly once.
pub fn is_permutation_of(permutation: &[usize], instance: &Instance) -> bool {
    permutation.len() == instance.n_items()
        && permutation.iter().all(|&id| id < instance.n_items())
        && permutation.iter().all_unique()
}
