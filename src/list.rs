//! Traversal, mutation and counting over the caller's linked nodes. Every function
//! checks its arguments first and returns an [`ErrKind::InvalidArgument`] error
//! before touching anything.
//!
//! [`ErrKind::InvalidArgument`]: crate::ErrKind::InvalidArgument

use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::node::{DoubleLink, SingleNode};

/// Number of nodes in the list starting at `head`
pub fn length(head: Option<&SingleNode>) -> Result<usize> {
    let head = head.ok_or_else(|| Error::invalid_argument("head cannot be null"))?;

    Ok(head.iter().count())
}

/// Last node of the list starting at `head`
pub fn find_tail(head: Option<&SingleNode>) -> Result<&SingleNode> {
    let mut current = head.ok_or_else(|| Error::invalid_argument("head cannot be null"))?;

    while let Some(next) = current.next.as_deref() {
        current = next;
    }

    Ok(current)
}

/// Walk back from `tail` to the first node of the list. A back link to a node which
/// has already been dropped ends the walk
pub fn find_head(tail: Option<&DoubleLink>) -> Result<DoubleLink> {
    let tail = tail.ok_or_else(|| Error::invalid_argument("tail cannot be null"))?;

    let mut current = Rc::clone(tail);
    let mut steps = 0usize;
    loop {
        let prev = current.borrow().prev();
        match prev {
            Some(prev) => current = prev,
            None => break,
        }
        steps += 1;
    }

    log!(list, "found head {} nodes before the tail", steps);

    Ok(current)
}

/// Node at zero-based index `n`, or `None` if the list is not that long
pub fn find_nth_element(head: Option<&SingleNode>, n: i32) -> Result<Option<&SingleNode>> {
    let head = match head {
        Some(head) if n >= 0 => head,
        _ => return Err(Error::invalid_argument("invalid arguments")),
    };

    Ok(head.iter().nth(n as usize))
}

/// Unlink `node` from its neighbours. The node's own links are left as they were,
/// so it still points into the list it was removed from
pub fn remove_node(node: Option<&DoubleLink>) -> Result<()> {
    let node = node.ok_or_else(|| Error::invalid_argument("node cannot be null"))?;
    let node = node.borrow();

    if let Some(prev) = node.prev() {
        prev.borrow_mut().next = node.next.clone();
    }

    if let Some(next) = &node.next {
        next.borrow_mut().prev = node.prev.clone();
    }

    log!(list, "removed node holding {}", node.data);

    Ok(())
}

/// Splice `new_node` right after `node`. Whatever followed `new_node` before is
/// replaced by the rest of the list
pub fn insert_node(
    node: Option<&mut SingleNode>,
    new_node: Option<Box<SingleNode>>,
) -> Result<()> {
    let (node, mut new_node) = match (node, new_node) {
        (Some(node), Some(new_node)) => (node, new_node),
        _ => return Err(Error::invalid_argument("nodes cannot be null")),
    };

    log!(list, "inserting {} after {}", new_node.data, node.data);

    new_node.next = node.next.take();
    node.next = Some(new_node);

    Ok(())
}

/// Remove every node, head excepted, which is strictly greater than its successor.
///
/// The scan goes forward once. When the current node is removed, its successor takes
/// its place and gets compared to its own successor in turn, so
/// `5 -> 7 -> 6 -> 20 -> 4 -> 4` becomes `5 -> 6 -> 4 -> 4`.
pub fn remove_giants(head: Option<&mut SingleNode>) -> Result<()> {
    let mut prev = head.ok_or_else(|| Error::invalid_argument("head cannot be null"))?;
    let mut removed = 0usize;

    loop {
        let is_giant = match prev.next.as_deref() {
            Some(SingleNode {
                data,
                next: Some(successor),
            }) => *data > successor.data,
            _ => break,
        };

        if is_giant {
            if let Some(mut giant) = prev.next.take() {
                prev.next = giant.next.take();
                removed += 1;
            }
        } else {
            match prev.next.as_deref_mut() {
                Some(next) => prev = next,
                None => break,
            }
        }
    }

    log!(list, "removed {} giants", removed);

    Ok(())
}

/// How many times each value appears in the list starting at `head`
pub fn count_occurrences(head: Option<&SingleNode>) -> Result<HashMap<i32, usize>> {
    let head = head.ok_or_else(|| Error::invalid_argument("head cannot be null"))?;

    let mut counts = HashMap::new();
    for node in head.iter() {
        *counts.entry(node.data).or_insert(0) += 1;
    }

    Ok(counts)
}
