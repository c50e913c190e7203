//! Scripted random source for tests that need exact placements

use rand::RngCore;

/// Yields a fixed sequence of `u32` values, cycling when exhausted
pub struct SequenceRng {
    values: Vec<u32>,
    next: usize,
}

impl SequenceRng {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        let values: Vec<u32> = values.into_iter().collect();
        assert!(!values.is_empty());
        Self { values, next: 0 }
    }
}

impl RngCore for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }

    fn next_u64(&mut self) -> u64 {
        u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
