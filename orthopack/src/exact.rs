use crate::entities::{Container, Instance, Item, Layout, PlacedItem};
use crate::geometry::{Point, overlaps};
use crate::util::assertions;
use anyhow::{Result, ensure};
use itertools::Itertools;
use log::debug;
use std::collections::BTreeSet;

/// Largest instance [`solve_exact`] accepts
pub const MAX_EXACT_ITEMS: usize = 10;

/// A provably optimal packing
#[derive(Clone, Debug)]
pub struct ExactSolution {
    pub value: f64,
    pub layout: Layout,
    /// Number of nodes visited in the search tree
    pub n_nodes: usize,
}

/// Computes an optimal packing of a small instance by exhaustive branch-and-bound.
///
/// Positions are restricted to *normal patterns*: every coordinate is a sum of the widths (resp. heights)
/// of a subset of the items. Every feasible packing can be shifted down and left onto such coordinates,
/// so the restriction does not cut off any optimal solution.
///
/// Independent from the Bottom-Left heuristic, intended to validate it on small instances.
pub fn solve_exact(instance: &Instance) -> Result<ExactSolution> {
    ensure!(
        instance.n_items() <= MAX_EXACT_ITEMS,
        "instance {} has {} items, exact search is limited to {MAX_EXACT_ITEMS}",
        instance.name,
        instance.n_items()
    );
    let container = instance.container;

    //items that never fit cannot be part of any packing, most valuable first to tighten the bound early
    let order = instance
        .items()
        .iter()
        .filter(|i| i.width() <= container.width && i.height() <= container.height)
        .sorted_by(|a, b| b.value().total_cmp(&a.value()))
        .collect_vec();

    let remaining_value = {
        let mut suffix = vec![0.0; order.len() + 1];
        for k in (0..order.len()).rev() {
            suffix[k] = suffix[k + 1] + order[k].value();
        }
        suffix
    };

    let mut search = ExactSearch {
        container,
        xs: normal_patterns(order.iter().map(|i| i.width()), container.width),
        ys: normal_patterns(order.iter().map(|i| i.height()), container.height),
        order,
        remaining_value,
        placed: vec![],
        placed_area: 0,
        best_value: 0.0,
        best: vec![],
        n_nodes: 0,
    };
    search.branch(0, 0.0);

    let layout = Layout::from_placed_items(container, search.best);
    debug_assert!(assertions::layout_is_feasible(&layout));
    debug!(
        "[EXACT] {}: optimum {} with {} items ({} nodes)",
        instance.name,
        search.best_value,
        layout.n_placed(),
        search.n_nodes
    );

    Ok(ExactSolution {
        value: search.best_value,
        layout,
        n_nodes: search.n_nodes,
    })
}

/// All sums of subsets of `lengths` strictly below `limit`, sorted ascending.
fn normal_patterns(lengths: impl Iterator<Item = u64>, limit: u64) -> Vec<u64> {
    let mut sums = BTreeSet::from([0]);
    for l in lengths {
        let shifted = sums.iter().map(|s| s + l).filter(|&s| s < limit).collect_vec();
        sums.extend(shifted);
    }
    sums.into_iter().collect_vec()
}

struct ExactSearch<'a> {
    container: Container,
    order: Vec<&'a Item>,
    xs: Vec<u64>,
    ys: Vec<u64>,
    remaining_value: Vec<f64>,
    placed: Vec<PlacedItem>,
    placed_area: u64,
    best_value: f64,
    best: Vec<PlacedItem>,
    n_nodes: usize,
}

impl ExactSearch<'_> {
    /// Decides on item `k`: place it at every feasible position, or leave it out.
    fn branch(&mut self, k: usize, value: f64) {
        self.n_nodes += 1;
        if value > self.best_value {
            self.best_value = value;
            self.best = self.placed.clone();
        }
        if k == self.order.len() || value + self.remaining_value[k] <= self.best_value {
            return;
        }

        let item = self.order[k];
        if self.placed_area + item.area() <= self.container.area() {
            for yi in 0..self.ys.len() {
                let y = self.ys[yi];
                if y + item.height() > self.container.height {
                    break;
                }
                for xi in 0..self.xs.len() {
                    let x = self.xs[xi];
                    if x + item.width() > self.container.width {
                        break;
                    }
                    let rect = item.rect_at(Point { x, y });
                    if self.placed.iter().any(|pi| overlaps(&rect, &pi.rect)) {
                        continue;
                    }
                    self.placed.push(PlacedItem::new(item, Point { x, y }));
                    self.placed_area += item.area();
                    self.branch(k + 1, value + item.value());
                    self.placed_area -= item.area();
                    self.placed.pop();
                }
            }
        }
        self.branch(k + 1, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::assertions::layout_matches_instance;

    fn instance(width: u64, height: u64, dims: &[(u64, u64, f64)]) -> Instance {
        let items = dims
            .iter()
            .enumerate()
            .map(|(id, &(w, h, v))| Item::new(id, w, h, v))
            .collect_vec();
        Instance::try_new("exact", Container { width, height }, items).unwrap()
    }

    #[test]
    fn packs_everything_when_possible() {
        let inst = instance(10, 10, &[(6, 4, 0.0), (4, 6, 0.0), (5, 5, 0.0)]);
        let sol = solve_exact(&inst).unwrap();
        assert_eq!(sol.value, 73.0);
        assert_eq!(sol.layout.n_placed(), 3);
        assert!(layout_matches_instance(&sol.layout, &inst));
    }

    #[test]
    fn prefers_two_halves_over_one_square() {
        let inst = instance(4, 4, &[(4, 4, 16.0), (2, 4, 10.0), (2, 4, 10.0)]);
        let sol = solve_exact(&inst).unwrap();
        assert_eq!(sol.value, 20.0);
        assert_eq!(sol.layout.n_placed(), 2);
    }

    #[test]
    fn nothing_fits() {
        let inst = instance(5, 5, &[(6, 6, 0.0)]);
        let sol = solve_exact(&inst).unwrap();
        assert_eq!(sol.value, 0.0);
        assert!(sol.layout.is_empty());
    }

    #[test]
    fn rejects_large_instances() {
        let dims = vec![(1, 1, 0.0); MAX_EXACT_ITEMS + 1];
        let inst = instance(20, 20, &dims);
        assert!(solve_exact(&inst).is_err());
    }

    #[test]
    fn normal_patterns_are_subset_sums() {
        assert_eq!(normal_patterns([2, 3, 3].into_iter(), 7), vec![0, 2, 3, 5, 6]);
    }
}
