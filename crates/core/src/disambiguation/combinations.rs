//! Index-ordered k-combinations of a fixed-size item list.

/// Yields every `k`-element combination of `items` with strictly increasing
/// indices, in lexicographic index order.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    exhausted: bool,
}

impl<'a, T: Copy> Combinations<'a, T> {
    pub fn new(items: &'a [T], k: usize) -> Self {
        Self {
            items,
            indices: (0..k).collect(),
            exhausted: k == 0 || k > items.len(),
        }
    }

    fn advance(&mut self) {
        let n = self.items.len();
        let k = self.indices.len();
        // Rightmost index that can still move right.
        let Some(pos) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) else {
            self.exhausted = true;
            return;
        };
        self.indices[pos] += 1;
        for i in pos + 1..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
    }
}

impl<T: Copy> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let current = self.indices.iter().map(|&i| self.items[i]).collect();
        self.advance();
        Some(current)
    }
}

/// All combinations of every size from 1 to `items.len()`, smallest first.
pub fn by_increasing_size<T: Copy>(items: &[T]) -> impl Iterator<Item = Vec<T>> + '_ {
    (1..=items.len()).flat_map(move |k| Combinations::new(items, k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_lexicographic_pairs() {
        let pairs: Vec<Vec<char>> = Combinations::new(&['a', 'b', 'c', 'd'], 2).collect();
        assert_eq!(
            pairs,
            vec![
                vec!['a', 'b'],
                vec!['a', 'c'],
                vec!['a', 'd'],
                vec!['b', 'c'],
                vec!['b', 'd'],
                vec!['c', 'd'],
            ]
        );
    }

    #[test]
    fn counts_match_binomial_coefficients() {
        let items = [0u8, 1, 2, 3, 4];
        let counts: Vec<usize> = (1..=5).map(|k| Combinations::new(&items, k).count()).collect();
        assert_eq!(counts, vec![5, 10, 10, 5, 1]);
        assert_eq!(by_increasing_size(&items).count(), 31);
    }

    #[test]
    fn empty_for_zero_or_oversized_k() {
        assert_eq!(Combinations::new(&[1, 2], 0).count(), 0);
        assert_eq!(Combinations::new(&[1, 2], 3).count(), 0);
    }

    #[test]
    fn full_size_is_single_combination() {
        let all: Vec<Vec<u8>> = Combinations::new(&[1, 2, 3], 3).collect();
        assert_eq!(all, vec![vec![1, 2, 3]]);
    }
}
