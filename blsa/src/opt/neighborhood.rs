use rand::Rng;
use rand::seq::SliceRandom;
use rand::seq::index;

/// Returns a copy of `permutation` in which the elements at two distinct, uniformly chosen positions are swapped.
///
/// Panics if `permutation` contains fewer than two elements.
pub fn swap_neighbor(permutation: &[usize], rng: &mut impl Rng) -> Vec<usize> {
    assert!(
        permutation.len() >= 2,
        "a swap neighbor requires at least two elements, got {}",
        permutation.len()
    );
    let positions = index::sample(rng, permutation.len(), 2);
    let mut neighbor = permutation.to_vec();
    neighbor.swap(positions.index(0), positions.index(1));
    neighbor
}

/// Uniformly shuffled copy of `ids`, used as starting point of a search
pub fn shuffled(ids: &[usize], rng: &mut impl Rng) -> Vec<usize> {
    let mut permutation = ids.to_vec();
    permutation.shuffle(rng);
    permutation
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;

    #[test]
    fn swaps_exactly_two_positions() {
        let mut rng = SmallRng::seed_from_u64(0);
        let perm = (0..8).collect_vec();
        for _ in 0..100 {
            let neighbor = swap_neighbor(&perm, &mut rng);
            let diff = (0..perm.len()).filter(|&i| perm[i] != neighbor[i]).collect_vec();
            assert_eq!(diff.len(), 2);
            assert_eq!(perm[diff[0]], neighbor[diff[1]]);
            assert_eq!(perm[diff[1]], neighbor[diff[0]]);
        }
        assert_eq!(perm, (0..8).collect_vec());
    }

    #[test]
    fn two_elements_always_swap() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(swap_neighbor(&[4, 9], &mut rng), vec![9, 4]);
        }
    }

    #[test]
    #[should_panic]
    fn single_element_has_no_neighbor() {
        let mut rng = SmallRng::seed_from_u64(0);
        swap_neighbor(&[0], &mut rng);
    }

    #[test]
    fn shuffled_keeps_all_ids() {
        let mut rng = SmallRng::seed_from_u64(2);
        let ids = (0..20).collect_vec();
        let perm = shuffled(&ids, &mut rng);
        assert_eq!(perm.iter().copied().sorted().collect_vec(), ids);
    }
}
