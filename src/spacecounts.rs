use crate::global::SPACES;

const N: usize = SPACES as usize;

/// How often a turn landed on / ended on each space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceCounts {
    lands: [u64; N],
    ends: [u64; N],
}

impl Default for SpaceCounts {
    fn default() -> Self {
        Self {
            lands: [0; N],
            ends: [0; N],
        }
    }
}

impl SpaceCounts {
    pub fn add_land(&mut self, pos: u8) {
        assert!(pos < SPACES);
        self.lands[pos as usize] += 1;
    }

    pub fn add_end(&mut self, pos: u8) {
        assert!(pos < SPACES);
        self.ends[pos as usize] += 1;
    }

    pub fn lands(&self) -> &[u64; N] {
        &self.lands
    }

    pub fn ends(&self) -> &[u64; N] {
        &self.ends
    }

    pub fn total_lands(&self) -> u64 {
        self.lands.iter().sum()
    }

    pub fn total_ends(&self) -> u64 {
        self.ends.iter().sum()
    }

    /// Fold another set of counts into this one
    pub fn merge(&mut self, other: &SpaceCounts) {
        for (a, b) in self.lands.iter_mut().zip(other.lands.iter()) {
            *a += b;
        }
        for (a, b) in self.ends.iter_mut().zip(other.ends.iter()) {
            *a += b;
        }
    }
}
