//! Discrete weighted sampling over a fixed set of outcomes.

use crate::error::SamplerError;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

/// A discrete distribution over `(weight, outcome)` pairs.
///
/// Outcome `i` is chosen with probability `w_i / sum(w)`. Zero-weight outcomes are kept
/// but never chosen. When exactly one outcome has positive weight the choice is fixed and
/// no randomness is drawn from the source.
#[derive(Clone, Debug)]
pub struct WeightedChoice<T> {
    outcomes: Vec<T>,
    weights: Vec<f32>,
    sampler: Sampler,
}

#[derive(Clone, Debug)]
enum Sampler {
    Fixed(usize),
    Weighted(WeightedIndex<f32>),
}

impl<T> WeightedChoice<T> {
    /// Validates the weights and builds the distribution.
    pub fn new(pairs: impl IntoIterator<Item = (f32, T)>) -> Result<Self, SamplerError> {
        let (weights, outcomes): (Vec<f32>, Vec<T>) = pairs.into_iter().unzip();

        if outcomes.is_empty() {
            return Err(SamplerError::Empty);
        }
        if let Some(&bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(SamplerError::InvalidWeight(bad));
        }

        if !weights.iter().sum::<f32>().is_finite() {
            return Err(SamplerError::Overflow);
        }

        let mut positive = weights
            .iter()
            .enumerate()
            .filter(|(_, w)| **w > 0.0)
            .map(|(i, _)| i);
        let sampler = match (positive.next(), positive.next()) {
            (None, _) => return Err(SamplerError::AllZero),
            (Some(only), None) => Sampler::Fixed(only),
            (Some(_), Some(_)) => Sampler::Weighted(
                WeightedIndex::new(&weights)
                    .map_err(|e| SamplerError::Distribution(e.to_string()))?,
            ),
        };

        Ok(Self {
            outcomes,
            weights,
            sampler,
        })
    }

    /// Draws one outcome.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        let idx = match &self.sampler {
            Sampler::Fixed(idx) => *idx,
            Sampler::Weighted(dist) => dist.sample(rng),
        };
        &self.outcomes[idx]
    }

    /// Returns `true` if [`choose`](Self::choose) never consumes randomness.
    pub fn is_deterministic(&self) -> bool {
        matches!(self.sampler, Sampler::Fixed(_))
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Iterates the `(weight, outcome)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (f32, &T)> {
        self.weights.iter().copied().zip(self.outcomes.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rejects_bad_weights() {
        assert_eq!(
            WeightedChoice::<u8>::new([]).unwrap_err(),
            SamplerError::Empty
        );
        assert_eq!(
            WeightedChoice::new([(1.0, 'a'), (-1.0, 'b')]).unwrap_err(),
            SamplerError::InvalidWeight(-1.0)
        );
        assert!(matches!(
            WeightedChoice::new([(f32::NAN, 'a')]).unwrap_err(),
            SamplerError::InvalidWeight(_)
        ));
        assert_eq!(
            WeightedChoice::new([(0.0, 'a'), (0.0, 'b')]).unwrap_err(),
            SamplerError::AllZero
        );
        assert_eq!(
            WeightedChoice::new([(f32::MAX, 'a'), (f32::MAX, 'b')]).unwrap_err(),
            SamplerError::Overflow
        );
    }

    #[test]
    fn single_positive_weight_is_fixed() {
        let choice = WeightedChoice::new([(0.0, 'a'), (3.0, 'b'), (0.0, 'c')]).unwrap();
        assert!(choice.is_deterministic());
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(*choice.choose(&mut rng), 'b');
        }
    }

    #[test]
    fn frequencies_follow_weights() {
        let choice = WeightedChoice::new([(2.0, 0usize), (1.0, 1), (1.0, 2)]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let trials = 40_000;
        let mut counts = [0usize; 3];
        for _ in 0..trials {
            counts[*choice.choose(&mut rng)] += 1;
        }
        let expected = [0.5, 0.25, 0.25];
        for (count, p) in counts.iter().zip(expected) {
            let freq = *count as f64 / trials as f64;
            assert!((freq - p).abs() < 0.02, "freq {freq} vs {p}");
        }
    }

    #[test]
    fn zero_weight_outcome_never_chosen() {
        let choice = WeightedChoice::new([(1.0, 'a'), (0.0, 'b'), (1.0, 'c')]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            assert_ne!(*choice.choose(&mut rng), 'b');
        }
    }
}
