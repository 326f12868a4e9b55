use rand::Rng;

/// In-place Fisher-Yates shuffle.
///
/// Seeding is the caller's job: seed `rng` once per process. The point is
/// only to keep concurrent runs from walking the groups in the same order,
/// not to produce cryptographic randomness.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in 0..items.len() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
