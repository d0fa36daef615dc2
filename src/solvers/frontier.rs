use std::collections::VecDeque;

/// The push/pop policy of a traversal's work list.
pub trait Frontier<T> {
    fn push(&mut self, item: T);
    fn pop(&mut self) -> Option<T>;
    fn is_empty(&self) -> bool;
}

/// Last in, first out. Drives depth-first search.
#[derive(Debug)]
pub struct Stack<T>(Vec<T>);

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack(Vec::new())
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn push(&mut self, item: T) {
        self.0.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// First in, first out. Drives breadth-first search.
#[derive(Debug)]
pub struct Queue<T>(VecDeque<T>);

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue(VecDeque::new())
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn push(&mut self, item: T) {
        self.0.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<F: Frontier<u8>>(mut frontier: F) -> Vec<u8> {
        assert!(frontier.is_empty());
        frontier.push(1);
        frontier.push(2);
        frontier.push(3);
        assert!(!frontier.is_empty());
        std::iter::from_fn(|| frontier.pop()).collect()
    }

    #[test]
    fn test_stack_is_lifo() {
        assert_eq!(drain(Stack::default()), vec![3, 2, 1]);
    }

    #[test]
    fn test_queue_is_fifo() {
        assert_eq!(drain(Queue::default()), vec![1, 2, 3]);
    }
}
