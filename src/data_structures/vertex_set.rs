/// Fixed-capacity membership set over the integers `0..capacity`
///
/// One flag per possible member plus a running count. Ids at or past the
/// capacity are never members: inserting one is a no-op that returns false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexSet {
    members: Vec<bool>,
    len: usize,
}

impl VertexSet {
    pub fn with_capacity(capacity: usize) -> Self {
        VertexSet {
            members: vec![false; capacity],
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.members.len()
    }

    /// Adds `vertex`; returns true if it was not already present
    pub fn insert(&mut self, vertex: usize) -> bool {
        match self.members.get_mut(vertex) {
            Some(flag) if !*flag => {
                *flag = true;
                self.len += 1;
                true
            }
            _ => false,
        }
    }

    /// Removes `vertex`; returns true if it was present
    pub fn remove(&mut self, vertex: usize) -> bool {
        match self.members.get_mut(vertex) {
            Some(flag) if *flag => {
                *flag = false;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.members.get(vertex).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Members in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter(|&(_, &present)| present)
            .map(|(vertex, _)| vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_membership_and_size() {
        let mut set = VertexSet::with_capacity(5);
        assert!(set.is_empty());

        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(set.insert(0));
        assert_eq!(set.len(), 2);
        assert!(set.contains(3));
        assert!(!set.contains(1));

        assert!(set.remove(3));
        assert!(!set.remove(3));
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn ignores_ids_past_capacity() {
        let mut set = VertexSet::with_capacity(2);
        assert!(!set.insert(2));
        assert!(!set.contains(2));
        assert!(!set.remove(9));
        assert_eq!(set.len(), 0);
        assert_eq!(set.capacity(), 2);
    }
}
