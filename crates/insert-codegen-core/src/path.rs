//! The insertion path a leaf index takes through the generated code.
//!
//! At level `i` the generated block tests bit `i` of the leaf index. A clear bit
//! means the current node is a left child: its sibling is the level's empty
//! constant and the current hash is recorded in `filledSubtrees[i]`. A set bit
//! means it is a right child and pairs with the previously filled subtree.

use serde::Serialize;

use crate::error::{CodegenError, Result};

/// Which side of its parent the path node sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

/// One level of an insertion path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathStep {
    pub level: usize,
    pub side: Side,
    /// Index of the left node of the pair at this level.
    pub filled_subtree_index: u64,
}

/// `true` when the node at `level` on the path of `index` is a left child.
pub fn is_left(index: u64, level: usize) -> bool {
    level >= u64::BITS as usize || (index >> level) & 1 == 0
}

/// Position of the left node of the pair containing `element_index`'s ancestor,
/// counted among the nodes at `level`: `2 * (element_index / 2^(level + 1))`.
///
/// Two leaves share a filled subtree at `level` exactly when this value matches.
pub fn filled_subtree_index(element_index: u64, level: usize) -> u64 {
    let shift = level.saturating_add(1);
    if shift >= u64::BITS as usize {
        return 0;
    }
    2 * (element_index >> shift)
}

/// Deepest tree a `u64` leaf index can address.
pub const MAX_DEPTH: usize = u64::BITS as usize;

/// The per-level decisions for inserting leaf `index` into a tree of `depth` levels.
pub fn insertion_path(index: u64, depth: usize) -> Result<Vec<PathStep>> {
    if depth > MAX_DEPTH {
        return Err(CodegenError::DepthTooLarge {
            depth,
            max: MAX_DEPTH,
        });
    }
    if depth < MAX_DEPTH && index >> depth != 0 {
        return Err(CodegenError::TreeFull { index, depth });
    }

    Ok((0..depth)
        .map(|level| PathStep {
            level,
            side: if is_left(index, level) {
                Side::Left
            } else {
                Side::Right
            },
            filled_subtree_index: filled_subtree_index(index, level),
        })
        .collect())
}
