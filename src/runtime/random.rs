//! Injectable random-number capability.

use std::sync::{Arc, Mutex};

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// Shared handle to the dashboard's random-number generator.
///
/// Every panel resamples its mock readings through one of these; swapping in
/// a seeded generator makes the whole resample sequence reproducible.
#[derive(Clone)]
pub struct RandomSource {
	inner: Arc<Mutex<dyn RngCore + Send>>,
}

impl RandomSource {
	/// OS-seeded source for normal operation.
	pub fn from_entropy() -> Self {
		Self::with_rng(SmallRng::from_entropy())
	}

	/// Deterministic source; the same seed always yields the same draws.
	pub fn seeded(seed: u64) -> Self {
		Self::with_rng(SmallRng::seed_from_u64(seed))
	}

	/// Wrap any `RngCore` implementation, fixed-sequence test doubles
	/// included.
	pub fn with_rng(rng: impl RngCore + Send + 'static) -> Self {
		RandomSource {
			inner: Arc::new(Mutex::new(rng)),
		}
	}

	/// Uniform value in `range`.
	pub fn gen_range<T, R>(&self, range: R) -> T
	where
		T: rand::distributions::uniform::SampleUniform,
		R: rand::distributions::uniform::SampleRange<T>,
	{
		self.inner.lock().expect("rng lock").gen_range(range)
	}

	/// Uniform choice from a slice.
	///
	/// # Panics
	/// Panics if `slice` is empty; callers draw from fixed non-empty pools.
	pub fn choose<'a, T>(&self, slice: &'a [T]) -> &'a T {
		&slice[self.gen_range(0..slice.len())]
	}
}
