//! Lookups over player scores

use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::error::{Error, Result};

/// Name of the player with the highest score. Players sharing the highest score are
/// told apart by their names, the one coming first in lexicographic order wins.
///
/// The returned name borrows from `scores`.
pub fn top_scorer<S: BuildHasher>(scores: Option<&HashMap<String, i32, S>>) -> Result<&str> {
    let (name, score) = scores
        .and_then(|scores| {
            scores.iter().max_by(|(lhs_name, lhs_score), (rhs_name, rhs_score)| {
                lhs_score
                    .cmp(rhs_score)
                    .then_with(|| rhs_name.cmp(lhs_name))
            })
        })
        .ok_or_else(|| Error::invalid_argument("invalid scores"))?;

    log!(scores, "top scorer is {} with {}", name, score);

    Ok(name.as_str())
}
