//! RNG module - seeded piece generation
//!
//! Pieces are drawn uniformly from the seven kinds, independently of each
//! other (no bag). The generator is a small LCG so the same seed always
//! replays the same game. It also implements [`rand::RngCore`], which lets
//! the word picker and the bots share it when a run must be reproducible.

use rand::RngCore;

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits (multiply-shift); the low bits of an LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl RngCore for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        SimpleRng::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        let hi = SimpleRng::next_u32(self) as u64;
        let lo = SimpleRng::next_u32(self) as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = SimpleRng::next_u32(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Uniform piece generator with a one-piece preview
#[derive(Debug, Clone)]
pub struct PieceQueue {
    seed: u32,
    rng: SimpleRng,
    next: PieceKind,
}

impl PieceQueue {
    /// Create a new piece queue with the given seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let next = Self::roll(&mut rng);
        Self { seed, rng, next }
    }

    fn roll(rng: &mut SimpleRng) -> PieceKind {
        PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
    }

    /// The piece the next `draw` will return
    pub fn peek(&self) -> PieceKind {
        self.next
    }

    /// Draw the next piece and roll a new preview
    pub fn draw(&mut self) -> PieceKind {
        let piece = self.next;
        self.next = Self::roll(&mut self.rng);
        piece
    }

    /// Seed the queue was created with (used to restart the same sequence)
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_piece_queue_peek_matches_draw() {
        let mut queue = PieceQueue::new(1);

        let peeked = queue.peek();
        assert_eq!(queue.draw(), peeked);
    }

    #[test]
    fn test_piece_queue_is_replayable() {
        let mut a = PieceQueue::new(99);
        let mut b = PieceQueue::new(a.seed());
        for _ in 0..50 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn test_piece_queue_draws_every_kind() {
        let mut queue = PieceQueue::new(3);
        let drawn: Vec<PieceKind> = (0..500).map(|_| queue.draw()).collect();
        for kind in PieceKind::ALL {
            assert!(drawn.contains(&kind), "Missing piece: {:?}", kind);
        }
    }
}
