//! Disjoint set union (union-find) over a dense range of node ids.
//!
//! The structure is an arena of parent indices with a per-root component
//! size. `find` compresses every traversed path onto the root and `union`
//! attaches the smaller component beneath the larger one, which together
//! keep the amortised cost of each operation close to constant.
//!
//! Each solve owns a fresh instance; instances are never shared between
//! workers.

use crate::{
    edge::NodeId,
    error::{MstError, Result},
};

/// Partition of `{0, .., n - 1}` into disjoint components.
///
/// # Examples
/// ```
/// use kruskal_core::DisjointSetUnion;
///
/// let mut sets = DisjointSetUnion::new(4);
/// assert!(sets.union(0, 1)?);
/// assert!(!sets.union(1, 0)?);
/// assert_eq!(sets.find(1)?, sets.find(0)?);
/// assert_eq!(sets.component_count(), 3);
/// # Ok::<(), kruskal_core::MstError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetUnion {
    parent: Vec<NodeId>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSetUnion {
    /// Creates `n` singleton components `{0}, {1}, .., {n - 1}`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    /// Returns the number of elements tracked by the structure.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the structure tracks no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the current number of disjoint components.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the representative of the component containing `node`.
    ///
    /// Every node visited on the way to the root is re-pointed directly at
    /// the root.
    ///
    /// # Errors
    /// Returns [`MstError::IndexOutOfRange`] when `node >= self.len()`.
    pub fn find(&mut self, node: NodeId) -> Result<NodeId> {
        self.check(node)?;
        Ok(self.root_of(node))
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `Ok(false)` without modifying anything when both already share
    /// a component. Otherwise the root of the smaller component is attached
    /// beneath the root of the larger one; on equal sizes the root of `right`
    /// moves beneath the root of `left`.
    ///
    /// # Errors
    /// Returns [`MstError::IndexOutOfRange`] when either endpoint is outside
    /// the structure. No state is modified in that case.
    pub fn union(&mut self, left: NodeId, right: NodeId) -> Result<bool> {
        self.check(left)?;
        self.check(right)?;
        Ok(self.union_unchecked(left, right))
    }

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// # Errors
    /// Returns [`MstError::IndexOutOfRange`] when either endpoint is outside
    /// the structure.
    pub fn same_component(&mut self, left: NodeId, right: NodeId) -> Result<bool> {
        Ok(self.find(left)? == self.find(right)?)
    }

    /// Returns the number of elements in the component containing `node`.
    ///
    /// # Errors
    /// Returns [`MstError::IndexOutOfRange`] when `node >= self.len()`.
    pub fn component_size(&mut self, node: NodeId) -> Result<usize> {
        let root = self.find(node)?;
        Ok(self.size[root])
    }

    /// Union on endpoints the caller has already validated.
    pub(crate) fn union_unchecked(&mut self, left: NodeId, right: NodeId) -> bool {
        let left_root = self.root_of(left);
        let right_root = self.root_of(right);
        if left_root == right_root {
            return false;
        }

        let (parent, child) = if self.size[left_root] < self.size[right_root] {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };
        self.parent[child] = parent;
        self.size[parent] += self.size[child];
        self.components -= 1;
        true
    }

    fn root_of(&mut self, mut node: NodeId) -> NodeId {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    fn check(&self, node: NodeId) -> Result<()> {
        if node < self.parent.len() {
            Ok(())
        } else {
            Err(MstError::IndexOutOfRange {
                index: node,
                len: self.parent.len(),
            })
        }
    }

    #[cfg(test)]
    pub(crate) fn raw_parent(&self, node: NodeId) -> NodeId {
        self.parent[node]
    }
}
