//! Demo problems solved by the hill climber.
//!
//! - [`GuessPassword`]: recreate a target string character by character
//! - [`OneMax`]: turn a random bit string into all ones

use anyhow::ensure;
use climber_search::Alphabet;

/// Characters a password may be built from.
pub(crate) const PASSWORD_SYMBOLS: &str =
    " abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!.";

/// A problem the CLI knows how to search for.
pub(crate) trait Problem {
    type Gene: Clone + PartialEq;

    fn name(&self) -> &'static str;
    fn alphabet(&self) -> &Alphabet<Self::Gene>;
    fn sequence_length(&self) -> usize;
    fn target_fitness(&self) -> f64;
    fn fitness(&self, genes: &[Self::Gene]) -> f64;
    /// Renders genes as a single line of text.
    fn render(&self, genes: &[Self::Gene]) -> String;
}

#[derive(Debug, Clone)]
pub(crate) struct GuessPassword {
    target: Vec<char>,
    alphabet: Alphabet<char>,
}

impl GuessPassword {
    pub(crate) fn new(target: &str) -> anyhow::Result<Self> {
        let alphabet = Alphabet::from_chars(PASSWORD_SYMBOLS)?;
        let target = target.chars().collect::<Vec<_>>();
        if let Some(c) = target.iter().find(|c| !alphabet.contains(*c)) {
            anyhow::bail!("password character {c:?} is not in {PASSWORD_SYMBOLS:?}");
        }
        Ok(Self { target, alphabet })
    }
}

impl Problem for GuessPassword {
    type Gene = char;

    fn name(&self) -> &'static str {
        "guess-password"
    }

    fn alphabet(&self) -> &Alphabet<char> {
        &self.alphabet
    }

    fn sequence_length(&self) -> usize {
        self.target.len()
    }

    #[expect(clippy::cast_precision_loss)]
    fn target_fitness(&self) -> f64 {
        self.target.len() as f64
    }

    #[expect(clippy::cast_precision_loss)]
    fn fitness(&self, genes: &[char]) -> f64 {
        genes
            .iter()
            .zip(&self.target)
            .filter(|(actual, expected)| actual == expected)
            .count() as f64
    }

    fn render(&self, genes: &[char]) -> String {
        genes.iter().collect()
    }
}

#[derive(Debug, Clone)]
pub(crate) struct OneMax {
    length: usize,
    alphabet: Alphabet<u8>,
}

impl OneMax {
    pub(crate) fn new(length: usize) -> anyhow::Result<Self> {
        ensure!(length > 0, "one max length must be positive");
        Ok(Self {
            length,
            alphabet: Alphabet::new([0, 1])?,
        })
    }
}

impl Problem for OneMax {
    type Gene = u8;

    fn name(&self) -> &'static str {
        "one-max"
    }

    fn alphabet(&self) -> &Alphabet<u8> {
        &self.alphabet
    }

    fn sequence_length(&self) -> usize {
        self.length
    }

    #[expect(clippy::cast_precision_loss)]
    fn target_fitness(&self) -> f64 {
        self.length as f64
    }

    fn fitness(&self, genes: &[u8]) -> f64 {
        genes.iter().map(|g| f64::from(*g)).sum()
    }

    fn render(&self, genes: &[u8]) -> String {
        genes.iter().map(u8::to_string).collect()
    }
}
