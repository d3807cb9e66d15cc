/// A scored gene sequence.
///
/// The fitness is computed once, when the candidate is created, and never changes.
/// Mutating a candidate always produces a new one (see [`genes::mutate`](crate::genes::mutate)).
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<G> {
    genes: Vec<G>,
    fitness: f64,
}

impl<G> Candidate<G> {
    pub(crate) fn new(genes: Vec<G>, fitness: f64) -> Self {
        Self { genes, fitness }
    }

    /// Scores `genes` with `fitness` and wraps them in a candidate.
    pub(crate) fn evaluate<F, E>(genes: Vec<G>, fitness: &mut F) -> Result<Self, E>
    where
        F: FnMut(&[G]) -> Result<f64, E>,
    {
        let value = fitness(&genes)?;
        Ok(Self::new(genes, value))
    }

    #[must_use]
    pub fn genes(&self) -> &[G] {
        &self.genes
    }

    #[must_use]
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    #[must_use]
    pub fn into_genes(self) -> Vec<G> {
        self.genes
    }
}
