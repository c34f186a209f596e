use std::collections::VecDeque;

/// ## Literal string side stack
///
/// Quoted strings met inside a call's argument list are copied here
/// instead of living in the arena. While a native runs, the strings
/// of its own argument list are pending and come out oldest first.
#[derive(Debug, Default)]
pub struct Literals {
    stack: Vec<String>,
    pending: VecDeque<String>,
}

impl Literals {
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn push(&mut self, s: String) {
        self.stack.push(s);
    }

    pub fn truncate(&mut self, mark: usize) {
        self.stack.truncate(mark);
    }

    /// Makes everything above `mark` the pending set. Returns the
    /// previous pending set so nested calls can put it back.
    pub fn open(&mut self, mark: usize) -> VecDeque<String> {
        let mark = mark.min(self.stack.len());
        let frame = self.stack.drain(mark..).collect();
        std::mem::replace(&mut self.pending, frame)
    }

    pub fn close(&mut self, outer: VecDeque<String>) {
        self.pending = outer;
    }

    pub fn pop_oldest(&mut self) -> Option<String> {
        self.pending.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_nest() {
        let mut literals = Literals::default();
        literals.push("a".to_string());
        literals.push("b".to_string());
        let outer = literals.open(0);
        assert!(literals.is_empty());
        literals.push("c".to_string());
        let inner = literals.open(0);
        assert_eq!(literals.pop_oldest().as_deref(), Some("c"));
        assert_eq!(literals.pop_oldest(), None);
        literals.close(inner);
        assert_eq!(literals.pop_oldest().as_deref(), Some("a"));
        assert_eq!(literals.pop_oldest().as_deref(), Some("b"));
        literals.close(outer);
        assert_eq!(literals.pop_oldest(), None);
    }

    #[test]
    fn test_truncate_drops_unclaimed() {
        let mut literals = Literals::default();
        literals.push("x".to_string());
        literals.push("y".to_string());
        literals.truncate(1);
        assert_eq!(literals.len(), 1);
    }
}
