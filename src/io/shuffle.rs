//! Seeded shredding of intact images
//!
//! Produces the inputs the reconstruction works on, together with the
//! permutation that created them.

use crate::io::image::assemble;
use crate::spatial::ShredLayout;
use image::DynamicImage;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

/// A shredded image and the permutation used to build it
#[derive(Debug, Clone)]
pub struct ShuffledImage {
    /// Shredded image, same dimensions as the source
    pub image: DynamicImage,
    /// `permutation[p]` is the source shred placed at position `p`
    pub permutation: Vec<usize>,
}

impl ShuffledImage {
    /// Order that puts the shredded image back together
    ///
    /// Entry `k` is the position in the shredded image holding source shred `k`.
    pub fn expected_order(&self) -> Vec<usize> {
        let mut order = vec![0; self.permutation.len()];
        for (position, &shred) in self.permutation.iter().enumerate() {
            if let Some(slot) = order.get_mut(shred) {
                *slot = position;
            }
        }
        order
    }
}

/// Random permutation of `0..shred_count`, reproducible from `seed`
pub fn shuffled_permutation(shred_count: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut permutation: Vec<usize> = (0..shred_count).collect();
    permutation.shuffle(&mut rng);
    permutation
}

/// Cut `source` into shreds and lay them out in a seeded random order
pub fn shuffle_shreds(source: &DynamicImage, layout: &ShredLayout, seed: u64) -> ShuffledImage {
    let permutation = shuffled_permutation(layout.shred_count(), seed);
    log::debug!("Shuffling shreds with seed {seed}: {permutation:?}");

    ShuffledImage {
        image: assemble(source, layout, &permutation),
        permutation,
    }
}
