/// LIFO stack of vertex ids with a constant-time "is it queued" check
///
/// A vertex may sit on the stack more than once; `contains` stays true until
/// every copy has been popped.
#[derive(Debug, Clone)]
pub struct Fringe {
    stack: Vec<usize>,
    queued: Vec<u32>,
}

impl Fringe {
    /// Creates an empty fringe for vertices `0..vertex_count`
    pub fn new(vertex_count: usize) -> Self {
        Fringe {
            stack: Vec::new(),
            queued: vec![0; vertex_count],
        }
    }

    pub fn push(&mut self, vertex: usize) {
        if let Some(count) = self.queued.get_mut(vertex) {
            *count += 1;
            self.stack.push(vertex);
        }
    }

    pub fn pop(&mut self) -> Option<usize> {
        let vertex = self.stack.pop()?;
        self.queued[vertex] -= 1;
        Some(vertex)
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.queued.get(vertex).map_or(false, |&count| count > 0)
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Queued vertices from bottom to top
    pub fn as_slice(&self) -> &[usize] {
        &self.stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_reverse_push_order() {
        let mut fringe = Fringe::new(4);
        fringe.push(0);
        fringe.push(2);
        fringe.push(1);

        assert_eq!(fringe.as_slice(), &[0, 2, 1]);
        assert_eq!(fringe.pop(), Some(1));
        assert_eq!(fringe.pop(), Some(2));
        assert_eq!(fringe.pop(), Some(0));
        assert_eq!(fringe.pop(), None);
    }

    #[test]
    fn membership_survives_until_last_copy_pops() {
        let mut fringe = Fringe::new(3);
        fringe.push(1);
        fringe.push(1);
        assert!(fringe.contains(1));
        fringe.pop();
        assert!(fringe.contains(1));
        fringe.pop();
        assert!(!fringe.contains(1));
        assert!(fringe.is_empty());
    }

    #[test]
    fn out_of_range_push_is_dropped() {
        let mut fringe = Fringe::new(2);
        fringe.push(7);
        assert_eq!(fringe.len(), 0);
        assert!(!fringe.contains(7));
    }
}
