//! Compute-once layout holder.
//!
//! A hero instance owns one [`MemoLayout`]. The first call to
//! [`MemoLayout::kernels`] generates the layout; later calls return the same
//! slice. A fresh layout means a fresh `MemoLayout`.

use std::cell::Cell;

use once_cell::unsync::OnceCell;
use rand::rngs::StdRng;

use crate::kernel::Kernel;
use crate::random::{RandomSource, seeded, seeded_or_entropy};
use crate::scatter::Scatter;

pub struct MemoLayout<R> {
    scatter: Scatter,
    // Consumed by the single generation pass.
    rng: Cell<Option<R>>,
    kernels: OnceCell<Vec<Kernel>>,
}

impl<R: RandomSource> MemoLayout<R> {
    pub fn new(scatter: Scatter, rng: R) -> Self {
        Self {
            scatter,
            rng: Cell::new(Some(rng)),
            kernels: OnceCell::new(),
        }
    }

    pub fn kernels(&self) -> &[Kernel] {
        self.kernels.get_or_init(|| match self.rng.take() {
            Some(mut rng) => self.scatter.generate(&mut rng),
            None => Vec::new(),
        })
    }

    pub fn is_generated(&self) -> bool {
        self.kernels.get().is_some()
    }

    pub fn scatter(&self) -> &Scatter {
        &self.scatter
    }

    pub fn into_kernels(self) -> Vec<Kernel> {
        self.kernels();
        self.kernels.into_inner().unwrap_or_default()
    }
}

impl MemoLayout<StdRng> {
    pub fn seeded(scatter: Scatter, seed: u64) -> Self {
        Self::new(scatter, seeded(seed))
    }

    /// Layout from OS entropy; differs on every instance.
    pub fn from_entropy(scatter: Scatter) -> Self {
        Self::with_seed(scatter, None)
    }

    /// Seeded when `seed` is given, entropy otherwise.
    pub fn with_seed(scatter: Scatter, seed: Option<u64>) -> Self {
        Self::new(scatter, seeded_or_entropy(seed))
    }
}
