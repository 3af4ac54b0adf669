//! Persistent search paths.
//!
//! A [`Path`] is an immutable, prepend-only stack of steps over `Rc`-shared
//! nodes. Extending a path allocates one node and shares the whole prefix, so
//! a search can branch thousands of candidate paths without copying and
//! without mutating shared history.

use std::rc::Rc;

struct Node<T> {
    step: T,
    prev: Option<Rc<Node<T>>>,
}

/// An immutable path of steps with a cumulative cost.
///
/// Iteration yields steps from the destination back to the origin (the order
/// the path was built in).
pub struct Path<T> {
    head: Rc<Node<T>>,
    total_cost: f64,
    len: usize,
}

impl<T> Path<T> {
    /// The trivial zero-cost path sitting at `start`.
    pub fn new(start: T) -> Self {
        Self {
            head: Rc::new(Node {
                step: start,
                prev: None,
            }),
            total_cost: 0.0,
            len: 1,
        }
    }

    /// A new path extending this one by `step`, sharing the prefix.
    pub fn extend(&self, step: T, step_cost: f64) -> Self {
        Self {
            head: Rc::new(Node {
                step,
                prev: Some(Rc::clone(&self.head)),
            }),
            total_cost: self.total_cost + step_cost,
            len: self.len + 1,
        }
    }

    /// The most recently appended step (the destination of a found path).
    #[inline]
    pub fn last_step(&self) -> &T {
        &self.head.step
    }

    /// Sum of all step costs.
    #[inline]
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Number of steps, counting the origin.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the path is a bare origin with no steps taken.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len <= 1
    }

    /// Iterate from the destination back to the origin.
    pub fn steps(&self) -> Steps<'_, T> {
        Steps {
            cur: Some(&self.head),
        }
    }

    /// Collect the steps in travel order, origin first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut v: Vec<T> = self.steps().cloned().collect();
        v.reverse();
        v
    }
}

impl<T> Clone for Path<T> {
    /// Cheap: bumps one reference count.
    fn clone(&self) -> Self {
        Self {
            head: Rc::clone(&self.head),
            total_cost: self.total_cost,
            len: self.len,
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Path<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Path")
            .field("cost", &self.total_cost)
            .field("steps", &self.steps().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a Path<T> {
    type Item = &'a T;
    type IntoIter = Steps<'a, T>;

    fn into_iter(self) -> Steps<'a, T> {
        self.steps()
    }
}

/// Iterator over a path's steps, destination → origin.
pub struct Steps<'a, T> {
    cur: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Steps<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.cur?;
        self.cur = node.prev.as_deref();
        Some(&node.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_path() {
        let p = Path::new(7);
        assert_eq!(*p.last_step(), 7);
        assert_eq!(p.total_cost(), 0.0);
        assert_eq!(p.len(), 1);
        assert!(p.is_empty());
        assert_eq!(p.steps().copied().collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn extension_accumulates_cost_and_order() {
        let p = Path::new('a').extend('b', 1.5).extend('c', 2.0);
        assert_eq!(*p.last_step(), 'c');
        assert_eq!(p.total_cost(), 3.5);
        assert_eq!(p.len(), 3);
        // Destination back to origin.
        assert_eq!(p.steps().copied().collect::<Vec<_>>(), vec!['c', 'b', 'a']);
        assert_eq!(p.to_vec(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn branches_share_the_prefix() {
        let base = Path::new(0).extend(1, 1.0);
        let left = base.extend(2, 1.0);
        let right = base.extend(3, 5.0);
        // The base path is untouched by either branch.
        assert_eq!(base.to_vec(), vec![0, 1]);
        assert_eq!(base.total_cost(), 1.0);
        assert_eq!(left.to_vec(), vec![0, 1, 2]);
        assert_eq!(right.to_vec(), vec![0, 1, 3]);
        assert_eq!(right.total_cost(), 6.0);
    }

    #[test]
    fn clone_is_shallow() {
        let p = Path::new(1).extend(2, 1.0);
        let q = p.clone();
        assert_eq!(q.to_vec(), p.to_vec());
        assert_eq!(q.total_cost(), p.total_cost());
    }
}
