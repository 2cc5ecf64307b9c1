//! Stochastic, context-free L-System grammars and their expansion.
//!
//! A [`Grammar`] is assembled with a [`GrammarBuilder`], validated once in
//! [`GrammarBuilder::build`], and immutable afterwards. Expansion takes the random source
//! as a parameter so a seeded generator reproduces the same string.

use crate::color::Color;
use crate::error::{GrammarError, SamplerError};
use crate::sampler::WeightedChoice;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeSet, HashMap};

/// Symbols that carry turtle semantics and therefore cannot double as color keys.
pub const STRUCTURAL_SYMBOLS: [char; 4] = ['[', ']', '+', '-'];

/// Collects the definition of a grammar before validation.
#[derive(Clone, Debug)]
pub struct GrammarBuilder {
    axiom: String,
    angle: f32,
    rules: Vec<(char, Vec<(f32, String)>)>,
    colors: HashMap<char, Color>,
    generations: u32,
}

impl GrammarBuilder {
    /// Sets the turn angle in degrees. Default: 90.
    pub fn angle(mut self, degrees: f32) -> Self {
        self.angle = degrees;
        self
    }

    /// Sets the number of rewrite passes. Default: 0.
    pub fn generations(mut self, generations: u32) -> Self {
        self.generations = generations;
        self
    }

    /// Adds a production for `predecessor` from `(weight, successor)` alternatives.
    ///
    /// Registering the same predecessor twice replaces the earlier alternatives.
    pub fn rule<S: Into<String>>(
        mut self,
        predecessor: char,
        alternatives: impl IntoIterator<Item = (f32, S)>,
    ) -> Self {
        let alternatives = alternatives
            .into_iter()
            .map(|(weight, successor)| (weight, successor.into()))
            .collect();
        self.rules.retain(|(sym, _)| *sym != predecessor);
        self.rules.push((predecessor, alternatives));
        self
    }

    /// Adds a deterministic production `predecessor -> successor`.
    pub fn deterministic_rule(self, predecessor: char, successor: &str) -> Self {
        self.rule(predecessor, [(1.0, successor)])
    }

    /// Binds a color key.
    pub fn color(mut self, key: char, color: Color) -> Self {
        self.colors.insert(key, color);
        self
    }

    /// Validates the definition and produces an immutable [`Grammar`].
    pub fn build(self) -> Result<Grammar, GrammarError> {
        if !self.angle.is_finite() {
            return Err(GrammarError::InvalidAngle(self.angle));
        }

        if self.axiom.is_empty() && self.rules.is_empty() {
            return Err(GrammarError::EmptyAlphabet);
        }

        if let Some(key) = self
            .colors
            .keys()
            .find(|k| STRUCTURAL_SYMBOLS.contains(*k))
        {
            return Err(GrammarError::InvalidColorKey(*key));
        }

        let mut rules = HashMap::with_capacity(self.rules.len());
        for (symbol, alternatives) in self.rules {
            let choice = WeightedChoice::new(alternatives).map_err(|e| match e {
                SamplerError::Empty => GrammarError::NoAlternatives(symbol),
                SamplerError::InvalidWeight(weight) => {
                    GrammarError::InvalidWeight { symbol, weight }
                }
                SamplerError::AllZero => GrammarError::ZeroWeights(symbol),
                SamplerError::Overflow | SamplerError::Distribution(_) => {
                    GrammarError::WeightOverflow(symbol)
                }
            })?;
            rules.insert(symbol, choice);
        }

        Ok(Grammar {
            axiom: self.axiom,
            angle: self.angle,
            rules,
            colors: self.colors,
            generations: self.generations,
        })
    }
}

/// A validated stochastic L-System.
///
/// Symbols with no production are terminal and copy through unchanged.
#[derive(Clone, Debug)]
pub struct Grammar {
    axiom: String,
    angle: f32,
    rules: HashMap<char, WeightedChoice<String>>,
    colors: HashMap<char, Color>,
    generations: u32,
}

impl Grammar {
    /// Starts a definition with the given axiom.
    pub fn builder(axiom: impl Into<String>) -> GrammarBuilder {
        GrammarBuilder {
            axiom: axiom.into(),
            angle: 90.0,
            rules: Vec::new(),
            colors: HashMap::new(),
            generations: 0,
        }
    }

    /// The symbols expansion starts from.
    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    /// Turn angle in degrees.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Number of rewrite passes [`expand`](Self::expand) performs.
    pub fn generations(&self) -> u32 {
        self.generations
    }

    /// The full color table, keyed by color symbol.
    pub fn colors(&self) -> &HashMap<char, Color> {
        &self.colors
    }

    /// The color bound to `key`, if any.
    pub fn color(&self, key: char) -> Option<Color> {
        self.colors.get(&key).copied()
    }

    /// The production for `symbol`, if it is not terminal.
    pub fn production(&self, symbol: char) -> Option<&WeightedChoice<String>> {
        self.rules.get(&symbol)
    }

    /// Every symbol that appears in the axiom, as a predecessor, or in a successor.
    pub fn alphabet(&self) -> BTreeSet<char> {
        let mut alphabet: BTreeSet<char> = self.axiom.chars().collect();
        for (symbol, choice) in &self.rules {
            alphabet.insert(*symbol);
            for (_, successor) in choice.iter() {
                alphabet.extend(successor.chars());
            }
        }
        alphabet
    }

    /// Performs one generation: every symbol of `input` is replaced by a chosen successor,
    /// or copied when it has no production.
    pub fn rewrite<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> String {
        let mut output = String::with_capacity(input.len());
        for symbol in input.chars() {
            match self.rules.get(&symbol) {
                Some(choice) => output.push_str(choice.choose(rng)),
                None => output.push(symbol),
            }
        }
        output
    }

    /// Rewrites the axiom exactly [`generations`](Self::generations) times.
    ///
    /// No cap is placed on the result length; a branching grammar grows exponentially
    /// with the generation count, so keep it small.
    pub fn expand<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let mut current = self.axiom.clone();
        for generation in 1..=self.generations {
            current = self.rewrite(&current, rng);
            debug!("generation {generation}: {} symbols", current.len());
        }
        current
    }

    /// Like [`expand`](Self::expand) but keeps every intermediate string.
    ///
    /// Index 0 holds the axiom and the last entry the fully expanded string.
    pub fn expand_generations<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<String> {
        let mut history = Vec::with_capacity(self.generations as usize + 1);
        history.push(self.axiom.clone());
        for _ in 0..self.generations {
            let next = self.rewrite(&history[history.len() - 1], rng);
            history.push(next);
        }
        history
    }

    /// Expands with a [`StdRng`] seeded from `seed`.
    pub fn expand_seeded(&self, seed: u64) -> String {
        self.expand(&mut StdRng::seed_from_u64(seed))
    }
}
