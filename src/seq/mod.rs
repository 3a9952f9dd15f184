use rand::Rng;

/// The four-symbol nucleotide alphabet every generated sequence draws from.
pub const NUCLEOTIDES: [u8; 4] = [b'A', b'T', b'C', b'G'];

/// Draws one base uniformly at random from [`NUCLEOTIDES`].
pub fn random_base<R: Rng>(rng: &mut R) -> u8 {
    NUCLEOTIDES[rng.gen_range(0..NUCLEOTIDES.len())]
}

/// Builds a sequence of exactly `length` bases by independent draws from
/// [`random_base`], in draw order. `length == 0` yields an empty sequence.
pub fn random_sequence<R: Rng>(length: usize, rng: &mut R) -> Vec<u8> {
    (0..length).map(|_| random_base(rng)).collect()
}
