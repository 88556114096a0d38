use rand::Rng;
use rand::seq::SliceRandom;

/// Returns a uniformly random permutation of `items`, leaving the input untouched.
///
/// `SliceRandom::shuffle` is a Fisher-Yates pass from the last index down,
/// so every ordering is equally likely and the cost is linear.
#[must_use]
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.as_mut_slice().shuffle(rng);
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn shuffled_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let input: Vec<u32> = (0..50).collect();
        let mut out = shuffled(&input, &mut rng);
        assert_eq!(out.len(), input.len());
        out.sort_unstable();
        assert_eq!(out, input);
    }

    #[test]
    fn shuffled_handles_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(shuffled::<u8, _>(&[], &mut rng).is_empty());
        assert_eq!(shuffled(&[9], &mut rng), vec![9]);
    }

    #[test]
    fn every_ordering_shows_up_about_equally() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<Vec<u8>, u32> = HashMap::new();
        for _ in 0..6_000 {
            *counts.entry(shuffled(&[1, 2, 3], &mut rng)).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        for count in counts.values() {
            assert!((800..1_200).contains(count), "skewed count {count}");
        }
    }
}
