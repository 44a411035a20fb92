//! Active instance bookkeeping
/// Indices of the instances that currently contribute to gradient and Hessian.
///
/// The index buffer is allocated once with room for every instance; only the
/// first [`ActiveSet::len`] entries are meaningful.
#[derive(Clone, Debug)]
pub struct ActiveSet {
    index: Vec<usize>,
    size: usize,
}

impl ActiveSet {
    /// Creates an empty active set for `capacity` instances.
    pub fn new(capacity: usize) -> Self {
        Self {
            index: vec![0; capacity],
            size: 0,
        }
    }

    /// Removes all instances.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Appends instance `i`.
    ///
    /// Panics if the set already holds `capacity` instances.
    #[inline]
    pub fn push(&mut self, i: usize) {
        self.index[self.size] = i;
        self.size += 1;
    }

    /// Marks every instance as active.
    pub fn fill(&mut self) {
        for (k, idx) in self.index.iter_mut().enumerate() {
            *idx = k;
        }
        self.size = self.index.len();
    }

    /// Returns the active instances in insertion order.
    pub fn indices(&self) -> &[usize] {
        &self.index[..self.size]
    }

    /// Returns the number of active instances.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Checks whether no instance is active.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the maximum number of instances.
    pub fn capacity(&self) -> usize {
        self.index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_clear() {
        let mut active = ActiveSet::new(4);
        assert!(active.is_empty());
        active.push(3);
        active.push(1);
        assert_eq!(active.indices(), &[3, 1]);
        active.clear();
        assert_eq!(active.len(), 0);
        assert_eq!(active.capacity(), 4);
    }

    #[test]
    fn fill_covers_all_instances() {
        let mut active = ActiveSet::new(3);
        active.push(2);
        active.fill();
        assert_eq!(active.indices(), &[0, 1, 2]);
    }
}
