use crate::error::HeapsortError;
use crate::heap;

/// Fixed-capacity buffer; `push` refuses to grow past `capacity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    values: Vec<i32>,
    capacity: usize,
}

impl Sequence {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, value: i32) -> Result<(), HeapsortError> {
        if self.values.len() == self.capacity {
            return Err(HeapsortError::CapacityExceeded {
                requested: self.values.len() + 1,
                capacity: self.capacity,
            });
        }
        self.values.push(value);
        Ok(())
    }

    pub fn sort(&mut self) {
        heap::heap_sort(&mut self.values);
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn into_vec(self) -> Vec<i32> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_stops_at_capacity() {
        let mut seq = Sequence::with_capacity(2);
        seq.push(1).unwrap();
        seq.push(2).unwrap();
        let err = seq.push(3).unwrap_err();
        assert!(matches!(
            err,
            HeapsortError::CapacityExceeded {
                requested: 3,
                capacity: 2
            }
        ));
        assert_eq!(seq.as_slice(), [1, 2]);
    }

    #[test]
    fn sort_orders_values() {
        let mut seq = Sequence::with_capacity(29);
        for v in [5, 3, 8, 1, 9, 2] {
            seq.push(v).unwrap();
        }
        seq.sort();
        assert_eq!(seq.len(), 6);
        assert_eq!(seq.capacity(), 29);
        assert_eq!(seq.into_vec(), vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn empty_sequence_sorts_to_empty() {
        let mut seq = Sequence::with_capacity(4);
        assert!(seq.is_empty());
        seq.sort();
        assert!(seq.as_slice().is_empty());
    }
}
