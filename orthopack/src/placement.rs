use crate::entities::{Container, Instance, Item, Layout, PlacedItem};
use crate::geometry::{Point, overlaps};
use crate::util::assertions;
use itertools::Itertools;
use log::trace;

/// Places the items of `instance` in the order given by `permutation` using the Bottom-Left heuristic.
/// Returns the total value of the placed items together with the resulting [`Layout`].
///
/// `permutation` contains item ids. Items for which no feasible position exists are left out of the layout.
///
/// # Panics
/// If `permutation` contains an id that is not an item of `instance`.
/// Debug builds also reject permutations that miss or repeat an item.
pub fn place(instance: &Instance, permutation: &[usize]) -> (f64, Layout) {
    debug_assert!(assertions::is_permutation_of(permutation, instance));
    bottom_left(
        instance.container,
        permutation.iter().map(|&id| instance.item(id)),
    )
}

/// Bottom-Left heuristic.
///
/// Every item is placed at the lowest, then left-most, candidate anchor point where it
/// fits inside the container without overlapping any previously placed item.
/// The candidate anchor points are the origin and, for every placed item, its bottom-right and top-left corner.
/// The first feasible candidate is accepted; an item without any feasible candidate is skipped.
pub fn bottom_left<'a>(
    container: Container,
    items: impl IntoIterator<Item = &'a Item>,
) -> (f64, Layout) {
    let mut layout = Layout::new(container);
    let mut total_value = 0.0;
    let mut candidates = vec![];

    for item in items {
        candidate_anchors(&layout, &mut candidates);

        let anchor = candidates.iter().copied().find(|&anchor| {
            let rect = item.rect_at(anchor);
            container.contains(&rect)
                && !layout
                    .placed_items()
                    .iter()
                    .any(|pi| overlaps(&rect, &pi.rect))
        });

        match anchor {
            Some(anchor) => {
                trace!("[BL] item {} placed at {anchor}", item.id());
                total_value += item.value();
                layout.push(PlacedItem::new(item, anchor));
            }
            None => trace!("[BL] no feasible position for item {}", item.id()),
        }
    }

    debug_assert!(assertions::layout_is_feasible(&layout));

    (total_value, layout)
}

/// Fills `buffer` with all candidate anchor points of `layout`, sorted on `(y, x)`.
pub fn candidate_anchors(layout: &Layout, buffer: &mut Vec<Point>) {
    buffer.clear();
    buffer.push(Point { x: 0, y: 0 });
    buffer.extend(
        layout
            .placed_items()
            .iter()
            .flat_map(|pi| pi.rect.anchor_points()),
    );
    buffer.sort_by_key(|p| (p.y, p.x));
}

/// Ids of all items in the instance that are too large to ever fit in the container.
pub fn oversized_items(instance: &Instance) -> Vec<usize> {
    let container = instance.container;
    instance
        .items()
        .iter()
        .filter(|item| item.width() > container.width || item.height() > container.height)
        .map(|item| item.id())
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Item;

    fn instance(width: u64, height: u64, dims: &[(u64, u64, f64)]) -> Instance {
        let items = dims
            .iter()
            .enumerate()
            .map(|(id, &(w, h, v))| Item::new(id, w, h, v))
            .collect_vec();
        Instance::try_new("test", Container { width, height }, items).unwrap()
    }

    fn anchors(layout: &Layout) -> Vec<(usize, u64, u64)> {
        layout
            .placed_items()
            .iter()
            .map(|pi| (pi.item_id, pi.x(), pi.y()))
            .collect_vec()
    }

    #[test]
    fn worked_example() {
        let inst = instance(10, 10, &[(6, 4, 0.0), (4, 6, 0.0), (5, 5, 0.0)]);
        let (value, layout) = place(&inst, &[0, 1, 2]);
        assert_eq!(value, 73.0);
        assert_eq!(anchors(&layout), vec![(0, 0, 0), (1, 6, 0), (2, 0, 4)]);
    }

    #[test]
    fn unplaceable_item() {
        let inst = instance(5, 5, &[(6, 6, 0.0)]);
        let (value, layout) = place(&inst, &[0]);
        assert_eq!(value, 0.0);
        assert!(layout.is_empty());
        assert_eq!(oversized_items(&inst), vec![0]);
    }

    #[test]
    fn oversized_item_does_not_block_others() {
        let inst = instance(5, 5, &[(2, 6, 100.0), (5, 5, 0.0)]);
        let (value, layout) = place(&inst, &[0, 1]);
        assert_eq!(value, 25.0);
        assert_eq!(anchors(&layout), vec![(1, 0, 0)]);
    }

    #[test]
    fn first_feasible_candidate_wins() {
        // the 2x2 item fits at both (3,0) and (0,2), the lower one is taken
        let inst = instance(6, 6, &[(3, 2, 0.0), (3, 2, 0.0), (2, 2, 0.0)]);
        let (_, layout) = place(&inst, &[0, 2, 1]);
        assert_eq!(anchors(&layout), vec![(0, 0, 0), (2, 3, 0), (1, 0, 2)]);
    }

    #[test]
    fn ties_on_y_are_broken_on_x() {
        let inst = instance(10, 10, &[(2, 5, 0.0), (3, 3, 0.0), (2, 2, 0.0)]);
        let (_, layout) = place(&inst, &[0, 1, 2]);
        // candidates for item 2: (0,0) (2,0) (5,0) (2,3) (0,5): (5,0) is the left-most feasible at y = 0
        assert_eq!(anchors(&layout), vec![(0, 0, 0), (1, 2, 0), (2, 5, 0)]);
    }

    #[test]
    fn candidates_sorted_bottom_left() {
        let inst = instance(10, 10, &[(6, 4, 0.0), (4, 6, 0.0)]);
        let (_, layout) = place(&inst, &[0, 1]);
        let mut buffer = vec![];
        candidate_anchors(&layout, &mut buffer);
        let sorted = buffer.iter().map(|p| (p.x, p.y)).collect_vec();
        assert_eq!(sorted, vec![(0, 0), (6, 0), (10, 0), (0, 4), (6, 6)]);
    }

    #[test]
    #[should_panic]
    fn unknown_item_id_panics() {
        let inst = instance(10, 10, &[(2, 2, 0.0), (3, 3, 0.0)]);
        place(&inst, &[0, 2]);
    }

    #[test]
    fn placement_is_deterministic() {
        let inst = instance(
            12,
            9,
            &[(3, 4, 0.0), (5, 2, 7.0), (2, 2, 0.0), (6, 3, 0.0), (4, 4, 1.0)],
        );
        let perm = [3, 1, 4, 0, 2];
        assert_eq!(place(&inst, &perm), place(&inst, &perm));
    }
}
