//! Classic exercises on linked lists, queues and strings.
//!
//! The structures are always built and owned by the caller, and none of the
//! functions keep any state between calls. Arguments which could be missing are
//! taken as `Option`s: a missing argument, like a negative index, is rejected with
//! an [`ErrKind::InvalidArgument`] error before anything is modified.
//!
//! ```
//! use std::collections::VecDeque;
//! use toolbox::{remove_giants, rotate_queue_left, SingleNode};
//!
//! let mut head = SingleNode::from_values(&[5, 7, 6, 20, 4, 4]).unwrap();
//! remove_giants(Some(&mut head)).unwrap();
//! assert_eq!(head.values(), vec![5, 6, 4, 4]);
//!
//! let mut queue: VecDeque<i32> = (1..=5).collect();
//! rotate_queue_left(Some(&mut queue), 2).unwrap();
//! assert_eq!(queue, [3, 4, 5, 1, 2]);
//! ```

#[doc(hidden)]
pub use colored;

#[macro_use]
pub mod log;

mod error;
mod list;
mod node;
mod queue;
mod scores;
mod text;

pub use error::{ErrKind, Error, Result};
pub use list::{
    count_occurrences, find_head, find_nth_element, find_tail, insert_node, length,
    remove_giants, remove_node,
};
pub use node::{DoubleLink, DoubleNode, Iter, SingleNode};
pub use queue::{rotate_queue_left, triple_values, Fifo, Queue};
pub use scores::top_scorer;
pub use text::has_balanced_parentheses;
