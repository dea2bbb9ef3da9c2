//! Multiplicative congruential (Lehmer) generator.
//!
//! The recurrence is `r_{t+1} = (a * r_t) mod m`, normalised to [0, 1) by
//! dividing by `m`. State advancement is an explicit pure function
//! ([`step`]) so ownership of the state is visible at every call site.
//!
//! The first emitted value is `r_1`, never the seed `r_0` itself.

use crate::types::{LehmerError, Result, Sequence};

/// Largest modulus accepted by [`GeneratorState::new`].
///
/// Every integer up to 2^53 is exactly representable as `f64`, which keeps
/// `raw / modulus` strictly below 1.0.
pub const MAX_MODULUS: u64 = 1 << 53;

/// State of a single Lehmer stream.
///
/// Each stream owns its state. The type is `Copy`, so sharing a state
/// between two streams always means an explicit copy.
///
/// # Examples
///
/// ```rust
/// use lehmer_core::generator::{step, GeneratorState};
///
/// let state = GeneratorState::new(15, 1643, 12_031_278).unwrap();
/// let (next, raw) = step(state);
///
/// assert_eq!(raw, 15 * 1643);
/// assert_eq!(next.seed(), raw);
/// assert_eq!(next.multiplier(), state.multiplier());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorState {
    seed: u64,
    multiplier: u64,
    modulus: u64,
}

impl GeneratorState {
    /// Creates a validated generator state.
    ///
    /// A seed at or above the modulus is accepted; the first step reduces
    /// it modulo `modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`LehmerError::InvalidParameters`] if:
    /// - `modulus` is 0 or greater than [`MAX_MODULUS`]
    /// - `multiplier >= modulus`
    pub fn new(seed: u64, multiplier: u64, modulus: u64) -> Result<Self> {
        if modulus == 0 {
            return Err(LehmerError::invalid("modulus", "must be positive"));
        }
        if modulus > MAX_MODULUS {
            return Err(LehmerError::invalid(
                "modulus",
                format!("{} exceeds the maximum of 2^53", modulus),
            ));
        }
        if multiplier >= modulus {
            return Err(LehmerError::invalid(
                "multiplier",
                format!("{} must be less than modulus {}", multiplier, modulus),
            ));
        }
        Ok(Self {
            seed,
            multiplier,
            modulus,
        })
    }

    /// Returns the current seed (the last raw value produced).
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the multiplier `a`.
    #[inline]
    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    /// Returns the modulus `m`.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Consumes the state and returns an iterator over normalised values.
    #[inline]
    pub fn iter(self) -> LehmerIter {
        LehmerIter { state: self }
    }
}

impl IntoIterator for GeneratorState {
    type Item = f64;
    type IntoIter = LehmerIter;

    fn into_iter(self) -> LehmerIter {
        self.iter()
    }
}

/// Advances the generator by one step.
///
/// Returns the successor state and the raw value
/// `(multiplier * seed) mod modulus`. The product is formed in 128-bit
/// arithmetic, so no input combination overflows.
#[inline]
pub fn step(state: GeneratorState) -> (GeneratorState, u64) {
    let product = u128::from(state.multiplier) * u128::from(state.seed);
    // The remainder is below the modulus, which itself fits in u64.
    let raw = (product % u128::from(state.modulus)) as u64;
    (GeneratorState { seed: raw, ..state }, raw)
}

/// Maps a raw value to [0, 1).
#[inline]
pub fn normalize(raw: u64, modulus: u64) -> f64 {
    raw as f64 / modulus as f64
}

/// Iterator over the normalised output of a Lehmer stream.
///
/// The iterator is infinite; bound it with [`Iterator::take`].
///
/// # Examples
///
/// ```rust
/// use lehmer_core::generator::GeneratorState;
///
/// let state = GeneratorState::new(2, 3, 11).unwrap();
/// let values: Vec<f64> = state.iter().take(3).collect();
///
/// // 2 -> 6 -> 18 mod 11 = 7 -> 21 mod 11 = 10
/// assert_eq!(values, vec![6.0 / 11.0, 7.0 / 11.0, 10.0 / 11.0]);
/// ```
#[derive(Clone, Debug)]
pub struct LehmerIter {
    state: GeneratorState,
}

impl LehmerIter {
    /// Returns the state the next call to `next` will advance from.
    #[inline]
    pub fn state(&self) -> GeneratorState {
        self.state
    }

    /// Advances one step and returns the raw integer value.
    #[inline]
    pub fn next_raw(&mut self) -> u64 {
        let (next, raw) = step(self.state);
        self.state = next;
        raw
    }
}

impl Iterator for LehmerIter {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        let raw = self.next_raw();
        Some(normalize(raw, self.state.modulus))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Generates `count` normalised values from `(seed, multiplier, modulus)`.
///
/// # Errors
///
/// Returns [`LehmerError::InvalidParameters`] when the parameters fail
/// [`GeneratorState::new`]; no partial sequence is produced.
///
/// # Examples
///
/// ```rust
/// use lehmer_core::generator::generate;
///
/// let values = generate(15, 1643, 12_031_278, 1000).unwrap();
/// assert_eq!(values.len(), 1000);
/// assert!(values.iter().all(|&v| (0.0..1.0).contains(&v)));
///
/// assert!(generate(15, 100, 100, 10).is_err());
/// ```
pub fn generate(seed: u64, multiplier: u64, modulus: u64, count: usize) -> Result<Sequence> {
    let state = GeneratorState::new(seed, multiplier, modulus)?;
    Ok(state.iter().take(count).collect())
}
