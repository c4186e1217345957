/// Largest number of values a run accepts. The legacy buffer had 30 slots
/// with the first one holding the count.
pub const MAX_CAPACITY: usize = 29;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub capacity: usize,
}

impl Config {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_capacity(MAX_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_max_capacity() {
        assert_eq!(Config::default().capacity, MAX_CAPACITY);
        assert_eq!(Config::with_capacity(4).capacity, 4);
    }
}
