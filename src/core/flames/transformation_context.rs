use rand::{Rng, SeedableRng, rngs::StdRng};

/// Per-thread mutable iteration state handed to every variation kernel.
#[derive(Debug, Clone)]
pub struct TransformationContext {
    rng: StdRng,
    seed: Option<u64>,
    thread_idx: usize,
    preserve_z: bool,
}

fn make_rng(seed: Option<u64>, thread_idx: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(thread_idx as u64)),
        None => StdRng::from_entropy(),
    }
}

impl TransformationContext {
    /// Creates the context of lane `thread_idx`. With a seed, lane `k`
    /// draws from `seed + k`.
    #[must_use]
    pub fn new(seed: Option<u64>, thread_idx: usize, preserve_z: bool) -> Self {
        Self {
            rng: make_rng(seed, thread_idx),
            seed,
            thread_idx,
            preserve_z,
        }
    }

    /// Re-seeds the generator from the construction seed and the current
    /// thread index. Unseeded contexts draw fresh entropy.
    pub fn reset(&mut self) {
        self.rng = make_rng(self.seed, self.thread_idx);
    }

    #[must_use]
    pub fn thread_idx(&self) -> usize {
        self.thread_idx
    }

    pub fn set_thread_idx(&mut self, thread_idx: usize) {
        self.thread_idx = thread_idx;
    }

    #[must_use]
    pub fn is_preserve_z(&self) -> bool {
        self.preserve_z
    }

    pub fn set_preserve_z(&mut self, preserve_z: bool) {
        self.preserve_z = preserve_z;
    }

    /// Uniform value in `[0, 1)`.
    pub fn random(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    /// Uniform index in `[0, bound)`. `bound` must be non-zero.
    pub fn random_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}
