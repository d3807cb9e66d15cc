use crate::SearchError;

/// The ordered set of symbols genes are drawn from.
///
/// An alphabet is never empty and never contains the same symbol twice: duplicates
/// are dropped at construction, keeping the position of the first occurrence. With at
/// least two symbols, [`genes::mutate`](crate::genes::mutate) is therefore guaranteed
/// to change the gene it touches.
///
/// # Examples
///
/// ```
/// use climber_search::Alphabet;
///
/// let alphabet = Alphabet::from_chars("abca").unwrap();
/// assert_eq!(alphabet.symbols(), &['a', 'b', 'c']);
///
/// assert!(Alphabet::<u8>::new([]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet<G> {
    symbols: Vec<G>,
}

impl<G> Alphabet<G>
where
    G: PartialEq,
{
    /// Creates an alphabet from `symbols`, removing duplicates.
    ///
    /// Fails with [`SearchError::InvalidAlphabet`] if `symbols` is empty.
    pub fn new<I>(symbols: I) -> Result<Self, SearchError>
    where
        I: IntoIterator<Item = G>,
    {
        let mut unique = Vec::new();
        for symbol in symbols {
            if !unique.contains(&symbol) {
                unique.push(symbol);
            }
        }
        if unique.is_empty() {
            return Err(SearchError::InvalidAlphabet);
        }
        Ok(Self { symbols: unique })
    }

    #[must_use]
    pub fn contains(&self, symbol: &G) -> bool {
        self.symbols.contains(symbol)
    }
}

impl Alphabet<char> {
    /// Creates an alphabet from the characters of `symbols`.
    pub fn from_chars(symbols: &str) -> Result<Self, SearchError> {
        Self::new(symbols.chars())
    }
}

impl<G> Alphabet<G> {
    #[must_use]
    pub fn symbols(&self) -> &[G] {
        &self.symbols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `false`: construction rejects empty alphabets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_alphabet_is_rejected() {
        assert_eq!(
            Alphabet::<char>::new(Vec::new()),
            Err(SearchError::InvalidAlphabet)
        );
        assert_eq!(Alphabet::from_chars(""), Err(SearchError::InvalidAlphabet));
    }

    #[test]
    fn test_duplicates_are_removed_in_order() {
        let alphabet = Alphabet::new([3, 1, 3, 2, 1]).unwrap();
        assert_eq!(alphabet.symbols(), &[3, 1, 2]);
        assert_eq!(alphabet.len(), 3);
        assert!(!alphabet.is_empty());
    }

    #[test]
    fn test_contains() {
        let alphabet = Alphabet::from_chars("01").unwrap();
        assert!(alphabet.contains(&'0'));
        assert!(!alphabet.contains(&'2'));
    }
}
