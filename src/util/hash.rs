use std::hash::{BuildHasher, Hash, Hasher};

/// A value with a hash chosen by the test rather than derived from its contents. Paired with
/// [`ManualState`], this places entries in known buckets or probe sequences.
#[derive(Debug, Clone, Copy)]
pub struct ManualHash<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> ManualHash<T> {
    pub const fn new(hash: u64, value: T) -> ManualHash<T> {
        ManualHash {
            hash,
            value,
        }
    }

    pub fn value(self) -> T {
        self.value
    }
}

impl<T: Eq> Hash for ManualHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<T: Eq> PartialEq for ManualHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for ManualHash<T> {}

/// A hasher that reports the last `u64` written to it unchanged.
#[derive(Debug)]
pub struct ManualHasher {
    state: u64,
}

impl Hasher for ManualHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = (self.state << 8) | *byte as u64;
        }
    }

    fn write_u64(&mut self, i: u64) {
        self.state = i;
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ManualState;

impl BuildHasher for ManualState {
    type Hasher = ManualHasher;

    fn build_hasher(&self) -> Self::Hasher {
        ManualHasher {
            state: 0
        }
    }
}
