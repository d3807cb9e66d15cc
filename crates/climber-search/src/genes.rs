//! Gene sequence operators used by the hill climber.
//!
//! - **Initialization**: [`random`] builds a random sequence from an alphabet
//! - **Mutation**: [`mutate`] replaces a single gene with a different symbol
//!
//! Both draw all their randomness from the generator passed in, so a seeded
//! generator reproduces the same sequences.

use rand::{Rng, seq::IndexedRandom};

use crate::Alphabet;

/// Generates a random gene sequence of length `len`.
///
/// Genes are drawn in chunks of at most `alphabet.len()` symbols, each chunk sampled
/// without replacement, and the chunks are concatenated. A symbol never repeats within
/// a chunk but may repeat across chunks, so a sequence no longer than the alphabet
/// contains no repeated symbol at all.
///
/// # Examples
///
/// ```
/// use climber_search::{Alphabet, genes};
///
/// let alphabet = Alphabet::new([0, 1]).unwrap();
/// let sequence = genes::random(&mut rand::rng(), &alphabet, 5);
/// assert_eq!(sequence.len(), 5);
/// assert!(sequence.iter().all(|g| alphabet.contains(g)));
/// ```
#[must_use]
pub fn random<G, R>(rng: &mut R, alphabet: &Alphabet<G>, len: usize) -> Vec<G>
where
    G: Clone,
    R: Rng + ?Sized,
{
    let mut genes = Vec::with_capacity(len);
    while genes.len() < len {
        let chunk = usize::min(len - genes.len(), alphabet.len());
        genes.extend(alphabet.symbols().choose_multiple(rng, chunk).cloned());
    }
    genes
}

/// Picks a symbol to replace `current`.
///
/// Two distinct symbols are drawn; the first is used unless it equals `current`, in
/// which case the second is used. With a single-symbol alphabet the only symbol is
/// returned, which may equal `current`.
#[must_use]
pub fn replacement<'a, G, R>(rng: &mut R, alphabet: &'a Alphabet<G>, current: &G) -> &'a G
where
    G: PartialEq,
    R: Rng + ?Sized,
{
    let mut picks = alphabet.symbols().choose_multiple(rng, 2);
    let first = picks.next().expect("alphabet should never be empty");
    match picks.next() {
        Some(alternate) if first == current => alternate,
        _ => first,
    }
}

/// Returns a copy of `genes` with one randomly chosen position replaced.
///
/// The input sequence is left untouched. When the alphabet has at least two symbols
/// the replaced gene always differs from the original one.
///
/// # Panics
///
/// Panics if `genes` is empty.
#[must_use]
pub fn mutate<G, R>(rng: &mut R, alphabet: &Alphabet<G>, genes: &[G]) -> Vec<G>
where
    G: Clone + PartialEq,
    R: Rng + ?Sized,
{
    assert!(!genes.is_empty(), "cannot mutate an empty gene sequence");
    let index = rng.random_range(0..genes.len());
    let mut child = genes.to_vec();
    child[index] = replacement(rng, alphabet, &genes[index]).clone();
    child
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(0x5eed)
    }

    fn assert_distinct<G: PartialEq>(chunk: &[G]) {
        for (i, a) in chunk.iter().enumerate() {
            assert!(chunk[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    fn test_random_shorter_than_alphabet_has_no_repeats() {
        let alphabet = Alphabet::from_chars("abcdefghij").unwrap();
        let mut rng = rng();
        for _ in 0..100 {
            let genes = random(&mut rng, &alphabet, 6);
            assert_eq!(genes.len(), 6);
            assert_distinct(&genes);
        }
    }

    #[test]
    fn test_random_is_chunked_without_replacement() {
        let alphabet = Alphabet::new([0, 1, 2, 3]).unwrap();
        let mut rng = rng();
        for _ in 0..100 {
            let genes = random(&mut rng, &alphabet, 10);
            assert_eq!(genes.len(), 10);
            for chunk in genes.chunks(4) {
                assert_distinct(chunk);
            }
        }
    }

    #[test]
    fn test_random_single_symbol_fills_length() {
        let alphabet = Alphabet::new(['x']).unwrap();
        assert_eq!(random(&mut rng(), &alphabet, 5), vec!['x'; 5]);
    }

    #[test]
    fn test_random_zero_length() {
        let alphabet = Alphabet::new([0, 1]).unwrap();
        assert!(random(&mut rng(), &alphabet, 0).is_empty());
    }

    #[test]
    fn test_mutate_always_changes_one_gene() {
        let mut rng = rng();
        for symbols in ["01", "abc", " abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!."] {
            let alphabet = Alphabet::from_chars(symbols).unwrap();
            let parent = random(&mut rng, &alphabet, 12);
            for _ in 0..500 {
                let child = mutate(&mut rng, &alphabet, &parent);
                let changed = parent.iter().zip(&child).filter(|(p, c)| p != c).count();
                assert_eq!(changed, 1);
                assert!(child.iter().all(|g| alphabet.contains(g)));
            }
        }
    }

    #[test]
    fn test_mutate_single_symbol_is_noop() {
        let alphabet = Alphabet::new(['a']).unwrap();
        let parent = vec!['a'; 5];
        assert_eq!(mutate(&mut rng(), &alphabet, &parent), parent);
    }

    #[test]
    fn test_replacement_avoids_current() {
        let alphabet = Alphabet::new([false, true]).unwrap();
        let mut rng = rng();
        for _ in 0..100 {
            assert!(*replacement(&mut rng, &alphabet, &false));
            assert!(!*replacement(&mut rng, &alphabet, &true));
        }
    }

    #[test]
    #[should_panic(expected = "cannot mutate an empty gene sequence")]
    fn test_mutate_empty_panics() {
        let alphabet = Alphabet::new([0, 1]).unwrap();
        let _ = mutate(&mut rng(), &alphabet, &[]);
    }
}
