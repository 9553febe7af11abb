//! Nodes the list functions operate on. Both kinds are built and owned by the caller:
//! a [`SingleNode`] owns the rest of its chain through `next`, and so does a
//! [`DoubleNode`], whose `prev` link is only a way back and never keeps a node alive.

use std::cell::RefCell;
use std::fmt::{Debug, Formatter};
use std::rc::{Rc, Weak};

/// Node of a singly linked list
pub struct SingleNode {
    pub data: i32,
    pub next: Option<Box<SingleNode>>,
}

impl SingleNode {
    pub fn new(data: i32) -> SingleNode {
        SingleNode { data, next: None }
    }

    /// Build a chain holding `values` in order, returning its head. An empty slice
    /// gives no list at all
    pub fn from_values(values: &[i32]) -> Option<Box<SingleNode>> {
        values
            .iter()
            .rev()
            .fold(None, |next, &data| Some(Box::new(SingleNode { data, next })))
    }

    /// Iterate over this node and every node after it
    pub fn iter(&self) -> Iter<'_> {
        Iter { next: Some(self) }
    }

    pub fn values(&self) -> Vec<i32> {
        self.iter().map(|node| node.data).collect()
    }
}

// Unlink the chain node by node instead of letting each `Box` drop its successor
impl Drop for SingleNode {
    fn drop(&mut self) {
        let mut current = self.next.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

// Comparing and printing walk the chain instead of recursing into `next`
impl PartialEq for SingleNode {
    fn eq(&self, other: &SingleNode) -> bool {
        self.iter().map(|node| node.data).eq(other.iter().map(|node| node.data))
    }
}

impl Eq for SingleNode {}

impl Debug for SingleNode {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.debug_list().entries(self.iter().map(|node| node.data)).finish()
    }
}

pub struct Iter<'list> {
    next: Option<&'list SingleNode>,
}

impl<'list> Iterator for Iter<'list> {
    type Item = &'list SingleNode;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node
        })
    }
}

/// Shared handle on a [`DoubleNode`]
pub type DoubleLink = Rc<RefCell<DoubleNode>>;

/// Node of a doubly linked list. For two adjacent nodes A and B, `A.next` is B and
/// `B.prev` points back to A
pub struct DoubleNode {
    pub data: i32,
    pub next: Option<DoubleLink>,
    pub prev: Option<Weak<RefCell<DoubleNode>>>,
}

impl DoubleNode {
    pub fn new(data: i32) -> DoubleLink {
        Rc::new(RefCell::new(DoubleNode {
            data,
            next: None,
            prev: None,
        }))
    }

    /// Make `after` the successor of `before`
    pub fn link(before: &DoubleLink, after: &DoubleLink) {
        before.borrow_mut().next = Some(Rc::clone(after));
        after.borrow_mut().prev = Some(Rc::downgrade(before));
    }

    /// The previous node, if there is one and it is still alive
    pub fn prev(&self) -> Option<DoubleLink> {
        self.prev.as_ref().and_then(Weak::upgrade)
    }

    /// Build a list holding `values` in order and return its head and tail
    pub fn chain(values: &[i32]) -> Option<(DoubleLink, DoubleLink)> {
        let mut values = values.iter();
        let head = DoubleNode::new(*values.next()?);

        let mut tail = Rc::clone(&head);
        for &data in values {
            let node = DoubleNode::new(data);
            DoubleNode::link(&tail, &node);
            tail = node;
        }

        Some((head, tail))
    }

    /// Values found by walking forward from `node`, `node` included
    pub fn values_from(node: &DoubleLink) -> Vec<i32> {
        let mut values = vec![];
        let mut current = Some(Rc::clone(node));

        while let Some(link) = current {
            let node = link.borrow();
            values.push(node.data);
            current = node.next.clone();
        }

        values
    }
}

impl Debug for DoubleNode {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let mut list = f.debug_list();
        list.entry(&self.data);

        let mut current = self.next.clone();
        while let Some(link) = current {
            let node = link.borrow();
            list.entry(&node.data);
            current = node.next.clone();
        }

        list.finish()
    }
}

impl Drop for DoubleNode {
    fn drop(&mut self) {
        let mut current = self.next.take();
        while let Some(link) = current {
            // Stop at the first node someone else still holds on to
            current = match Rc::try_unwrap(link) {
                Ok(cell) => {
                    let mut node = cell.into_inner();
                    node.next.take()
                }
                Err(_) => None,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_from_values() {
        let head = SingleNode::from_values(&[1, 2, 3]).unwrap();

        assert_eq!(head.data, 1);
        assert_eq!(head.values(), vec![1, 2, 3]);
    }

    #[test]
    fn t_from_no_values() {
        assert!(SingleNode::from_values(&[]).is_none());
    }

    #[test]
    fn t_iter() {
        let head = SingleNode::from_values(&[4, 5]).unwrap();
        let mut iter = head.iter();

        assert_eq!(iter.next().map(|n| n.data), Some(4));
        assert_eq!(iter.next().map(|n| n.data), Some(5));
        assert!(iter.next().is_none());
    }

    #[test]
    fn t_drop_long_chain() {
        let values: Vec<i32> = (0..200_000).collect();
        let head = SingleNode::from_values(&values);

        drop(head);
    }

    #[test]
    fn t_compare_long_chains() {
        let values: Vec<i32> = (0..200_000).collect();
        let lhs = SingleNode::from_values(&values).unwrap();
        let rhs = SingleNode::from_values(&values).unwrap();
        let shorter = SingleNode::from_values(&values[1..]).unwrap();

        assert!(lhs == rhs);
        assert!(lhs != shorter);
        assert_ne!(SingleNode::from_values(&[1, 2]), SingleNode::from_values(&[1, 3]));

        let printed = format!("{:?}", lhs);
        assert!(printed.starts_with("[0, 1, 2,"));
        assert!(printed.ends_with("199999]"));
    }

    #[test]
    fn t_debug_long_double_chain() {
        let values: Vec<i32> = (0..200_000).collect();
        let (head, _tail) = DoubleNode::chain(&values).unwrap();

        let printed = format!("{:?}", head.borrow());
        assert!(printed.starts_with("[0, 1, 2,"));
        assert!(printed.ends_with("199999]"));
        assert_eq!(format!("{:?}", DoubleNode::new(4).borrow()), "[4]");
    }

    #[test]
    fn t_chain_links_both_ways() {
        let (head, tail) = DoubleNode::chain(&[1, 2, 3]).unwrap();

        assert_eq!(DoubleNode::values_from(&head), vec![1, 2, 3]);
        assert_eq!(tail.borrow().data, 3);

        let middle = tail.borrow().prev().unwrap();
        assert_eq!(middle.borrow().data, 2);
        assert!(Rc::ptr_eq(&middle.borrow().prev().unwrap(), &head));
        assert!(Rc::ptr_eq(middle.borrow().next.as_ref().unwrap(), &tail));
        assert!(head.borrow().prev().is_none());
    }

    #[test]
    fn t_prev_does_not_keep_alive() {
        let (head, tail) = DoubleNode::chain(&[1, 2]).unwrap();

        assert!(tail.borrow().prev().is_some());
        drop(head);
        assert!(tail.borrow().prev().is_none());
    }

    #[test]
    fn t_drop_long_double_chain() {
        let values: Vec<i32> = (0..200_000).collect();
        let (head, tail) = DoubleNode::chain(&values).unwrap();

        drop(tail);
        drop(head);
    }
}
