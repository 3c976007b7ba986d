use std::rc::Rc;

/// Single-slot cache keyed by the
/// dependencies a value was computed
/// from. The value is recomputed only
/// when the key changes.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
  entry:        Option<(K, V)>,
  #[cfg(test)]
  computations: usize
}

impl<K, V> Default for Memo<K, V> {
  fn default() -> Self {
    Self {
      entry:        None,
      #[cfg(test)]
      computations: 0
    }
  }
}

impl<K: PartialEq, V> Memo<K, V> {
  pub fn get_or_compute<F>(
    &mut self,
    key: K,
    compute: F
  ) -> &V
  where
    F: FnOnce(&K) -> V
  {
    let entry = match self.entry.take() {
      | Some((cached, value))
        if cached == key =>
      {
        (cached, value)
      }
      | _ => {
        #[cfg(test)]
        {
          self.computations += 1;
        }
        let value = compute(&key);
        (key, value)
      }
    };

    &self.entry.insert(entry).1
  }

  #[cfg(test)]
  pub(crate) fn computations(
    &self
  ) -> usize {
    self.computations
  }
}

/// Dependency that compares by allocation
/// rather than by contents. Holding the
/// `Rc` keeps the allocation alive, so a
/// new value can never reuse the address.
#[derive(Debug)]
pub struct SameRc<T>(pub Rc<T>);

impl<T> Clone for SameRc<T> {
  fn clone(&self) -> Self {
    Self(Rc::clone(&self.0))
  }
}

impl<T> PartialEq for SameRc<T> {
  fn eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.0, &other.0)
  }
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;

  #[test]
  fn recomputes_only_when_key_changes() {
    let calls = Cell::new(0);
    let mut memo = Memo::default();
    let square = |memo: &mut Memo<u32, u32>, n: u32| {
      *memo.get_or_compute(n, |n| {
        calls.set(calls.get() + 1);
        n * n
      })
    };

    assert_eq!(square(&mut memo, 3), 9);
    assert_eq!(square(&mut memo, 3), 9);
    assert_eq!(calls.get(), 1);

    assert_eq!(square(&mut memo, 4), 16);
    assert_eq!(calls.get(), 2);
    assert_eq!(memo.computations(), 2);
  }

  #[test]
  fn same_rc_ignores_equal_contents() {
    let days = Rc::new(vec![1, 2, 3]);
    let copy = Rc::new(vec![1, 2, 3]);

    assert_eq!(
      SameRc(Rc::clone(&days)),
      SameRc(Rc::clone(&days))
    );
    assert_ne!(
      SameRc(days),
      SameRc(copy)
    );
  }
}
