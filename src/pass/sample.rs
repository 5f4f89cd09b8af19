//! Uniform draws and random-position insertion.

use crate::random::RandomSource;

/// Draw one element uniformly from a non-empty pool.
#[inline]
pub fn draw_one<'a, T, R>(rng: &mut R, pool: &'a [T]) -> &'a T
where
    R: RandomSource + ?Sized,
{
    &pool[rng.below(pool.len())]
}

/// Insert `element` at a uniformly chosen position in `0..=result.len()`.
///
/// Applying every draw through this keeps the class order of the draws out
/// of the final positions.
#[inline]
pub fn insert_at<T, R>(rng: &mut R, result: &mut Vec<T>, element: T)
where
    R: RandomSource + ?Sized,
{
    let pos = rng.below(result.len() + 1);
    result.insert(pos, element);
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::random::testing::Scripted;

    #[test]
    fn draw_one_indexes_pool() {
        let pool = ['a', 'b', 'c'];
        let mut rng = Scripted::new(&[2, 0, 4]);
        assert_eq!(*draw_one(&mut rng, &pool), 'c');
        assert_eq!(*draw_one(&mut rng, &pool), 'a');
        assert_eq!(*draw_one(&mut rng, &pool), 'b');
    }

    #[test]
    fn insert_at_uses_every_slot() {
        let mut rng = Scripted::new(&[0, 0, 2, 1]);
        let mut out = Vec::new();
        insert_at(&mut rng, &mut out, 'a'); // [a]
        insert_at(&mut rng, &mut out, 'b'); // [b a]
        insert_at(&mut rng, &mut out, 'c'); // [b a c]
        insert_at(&mut rng, &mut out, 'd'); // [b d a c]
        assert_eq!(out, ['b', 'd', 'a', 'c']);
        assert_eq!(rng.consumed(), 4);
    }

    #[test]
    fn first_draw_lands_anywhere() {
        // Insert a marker after three fillers; count where it ends up.
        let mut rng = StdRng::seed_from_u64(42);
        let mut hits = [0usize; 4];
        for _ in 0..4000 {
            let mut out = vec!['x', 'x', 'x'];
            insert_at(&mut rng, &mut out, 'm');
            let pos = out.iter().position(|&c| c == 'm').unwrap();
            hits[pos] += 1;
        }
        // Expect ~1000 each.
        assert!(hits.iter().all(|&h| (800..1200).contains(&h)), "{hits:?}");
    }
}
