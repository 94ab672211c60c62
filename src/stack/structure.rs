
use super::error::StackError;

/// LIFO stack. Implemented internally as a vector whose "top" is at
/// the end, allowing for constant-time pushes and pops.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Stack<T> {
  elements: Vec<T>,
}

impl<T> Stack<T> {

  pub fn new() -> Self {
    Self::default()
  }

  /// Asserts that the stack has size at least `expected` but does not
  /// pop anything.
  pub fn check_stack_size(&self, expected: usize) -> Result<(), StackError> {
    if self.len() < expected {
      Err(StackError::NotEnoughElements { expected, actual: self.len() })
    } else {
      Ok(())
    }
  }

  pub fn push(&mut self, element: T) {
    self.elements.push(element);
  }

  pub fn pop(&mut self) -> Result<T, StackError> {
    self.elements.pop().ok_or(StackError::NotEnoughElements { expected: 1, actual: 0 })
  }

  /// Pops `count` elements off the stack and returns those elements,
  /// with the former top of the stack at the end of the vector. In
  /// case of a [`StackError`], `self` will NOT be modified.
  pub fn pop_several(&mut self, count: usize) -> Result<Vec<T>, StackError> {
    self.check_stack_size(count)?;
    Ok(self.elements.split_off(self.len() - count))
  }

  /// The element on top of the stack, if any.
  pub fn peek(&self) -> Option<&T> {
    self.elements.last()
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  /// Iterates from the bottom of the stack.
  pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
    self.elements.iter()
  }

}

/// Converts a vector to a stack, where the top of the stack is at the
/// end.
impl<T> From<Vec<T>> for Stack<T> {
  fn from(elements: Vec<T>) -> Self {
    Self { elements }
  }
}

impl<T> Default for Stack<T> {

  fn default() -> Self {
    Self {
      elements: Vec::with_capacity(10),
    }
  }

}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_empty() {
    let empty_stack = Stack::<f64>::new();
    assert_eq!(empty_stack.len(), 0);
    let empty_stack = Stack::<f64>::default();
    assert_eq!(empty_stack.len(), 0);
  }

  #[test]
  fn test_from_vec() {
    let stack1 = Stack::from(vec![0, 10, 20, 25]);
    let stack2 = {
      let mut stack2 = Stack::new();
      stack2.push(0);
      stack2.push(10);
      stack2.push(20);
      stack2.push(25);
      stack2
    };
    assert_eq!(stack2, stack1);
  }

  #[test]
  fn test_push_pop() {
    let mut stack = Stack::from(vec![0, 10]);
    stack.push(20);
    assert_eq!(stack.pop(), Ok(20));
    assert_eq!(stack.pop(), Ok(10));
    assert_eq!(stack.pop(), Ok(0));
    assert_eq!(stack.pop(), Err(StackError::NotEnoughElements { expected: 1, actual: 0 }));
  }

  #[test]
  fn test_pop_several() {
    let mut stack = Stack::from(vec![0, 10, 20, 30, 40]);
    assert_eq!(stack.pop_several(2), Ok(vec![30, 40]));
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.pop_several(4), Err(StackError::NotEnoughElements { expected: 4, actual: 3 }));
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.pop_several(3), Ok(vec![0, 10, 20]));
    assert!(stack.is_empty());
  }

  #[test]
  fn test_peek() {
    let mut stack = Stack::new();
    assert_eq!(stack.peek(), None);
    stack.push('(');
    stack.push('+');
    assert_eq!(stack.peek(), Some(&'+'));
    assert_eq!(stack.len(), 2);
    let _ = stack.pop();
    assert_eq!(stack.peek(), Some(&'('));
  }

  #[test]
  fn test_iter_from_bottom() {
    let stack = Stack::from(vec!['A', 'B', 'C']);
    assert_eq!(stack.iter().collect::<Vec<_>>(), vec![&'A', &'B', &'C']);
    assert_eq!(stack.iter().rev().collect::<Vec<_>>(), vec![&'C', &'B', &'A']);
  }
}
