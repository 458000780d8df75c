//! A self-balancing BST. Every node owns its two children through a `Box` so the tree is strictly
//! tree-shaped: no parent pointers, no shared subtrees, and dropping the tree drops every node.
//!
//! # Examples
//!
//! ```
//! use avl::{Tree, TreeError};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet, so there is nothing to search.
//! assert_eq!(tree.search(&1, |_| {}), Err(TreeError::EmptyTree));
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.search(&1, |x| assert_eq!(*x, 1)), Ok(true));
//!
//! // Inserting the same value again is ignored.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Copies are independent of each other.
//! let mut copy = tree.clone();
//! copy.insert(2);
//! assert!(copy.contains(&2));
//! assert!(!tree.contains(&2));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::TreeError;
use crate::util::InsertResult;

/// A self-balancing Binary Search Tree (specifically, an AVL tree) of unique values. This can be
/// used for inserting, searching, and traversing values.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }

    /// Replaces the contents of `self` with a deep copy of `source`. The nodes previously owned
    /// by `self` are dropped.
    fn clone_from(&mut self, source: &Self) {
        self.root = source.root.clone();
        self.len = source.len;
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root.root())
            .finish()
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: Link(None),
            len: 0,
        }
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// How many levels are in the tree. An empty tree has a height of 0 and a tree with only a
    /// root has a height of 1.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Inserts the given value into the tree and rebalances every node on the path back up to
    /// the root. Returns `false`, leaving the tree untouched, if an equal value was already
    /// present.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// // Ascending inserts would make a plain BST a linked list.
    /// for x in 1..=7 {
    ///     assert!(tree.insert(x));
    /// }
    /// assert_eq!(tree.height(), 3);
    ///
    /// assert!(!tree.insert(4));
    /// assert_eq!(tree.len(), 7);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        match self.root.insert(value) {
            InsertResult::Duplicate => false,
            InsertResult::Inserted(_) => {
                self.len += 1;
                true
            }
        }
    }

    /// Looks for `value` by visiting every node in the tree, calling `visitor` with each stored
    /// value equal to it. Unlike [`Tree::contains`], this does not use the ordering of the tree to
    /// skip subtrees so it always visits all `N` nodes.
    ///
    /// Returns whether any match was visited, or [`TreeError::EmptyTree`] if the tree has no
    /// values.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.search(&'b', |_| {}), Err(TreeError::EmptyTree));
    ///
    /// tree.extend(['a', 'b', 'c', 'd']);
    ///
    /// let mut found = Vec::new();
    /// assert_eq!(tree.search(&'b', |c| found.push(*c)), Ok(true));
    /// assert_eq!(found, ['b']);
    ///
    /// assert_eq!(tree.search(&'z', |c| found.push(*c)), Ok(false));
    /// assert_eq!(found, ['b']);
    /// ```
    pub fn search<F>(&self, value: &T, mut visitor: F) -> Result<bool, TreeError>
    where
        T: PartialEq,
        F: FnMut(&T),
    {
        if self.root.root().is_none() {
            log::trace!("search on empty tree");
            return Err(TreeError::EmptyTree);
        }

        Ok(self.root.search(value, &mut visitor))
    }

    /// Whether an equal value is stored in the tree. This follows the ordering of the tree so it
    /// only visits `O(lg N)` nodes.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.root.root().map_or(false, |n| n.contains(value))
    }

    /// Calls `visitor` with every value in ascending order: left subtree, node, right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree: Tree<_> = ["This ", "is ", "a ", "Test!"].into_iter().collect();
    ///
    /// let mut words = Vec::new();
    /// tree.traverse_in_order(|w| words.push(*w));
    /// assert_eq!(words, ["Test!", "This ", "a ", "is "]);
    /// ```
    pub fn traverse_in_order<F>(&self, mut visitor: F)
    where
        F: FnMut(&T),
    {
        self.root.in_order(&mut visitor);
    }

    /// Calls `visitor` with every value, each node before its left then right subtree. The first
    /// value visited is the root.
    pub fn traverse_pre_order<F>(&self, mut visitor: F)
    where
        F: FnMut(&T),
    {
        self.root.pre_order(&mut visitor);
    }

    /// Calls `visitor` with every value, each node after its left then right subtree. The last
    /// value visited is the root.
    pub fn traverse_post_order<F>(&self, mut visitor: F)
    where
        F: FnMut(&T),
    {
        self.root.post_order(&mut visitor);
    }
}

/// An owned child slot. Rotations replace the node held in the slot so they live here rather than
/// on `Node`.
#[derive(Clone)]
struct Link<T>(Option<Box<Node<T>>>);

impl<T> Link<T> {
    fn root(&self) -> Option<&Node<T>> {
        self.0.as_deref()
    }

    fn root_mut(&mut self) -> Option<&mut Node<T>> {
        self.0.as_deref_mut()
    }

    fn take(&mut self) -> Self {
        Link(self.0.take())
    }

    fn height(&self) -> usize {
        self.root().map_or(0, |n| n.height)
    }

    /// Inserts `value` into the subtree in this slot and rebalances it on the way back up.
    fn insert(&mut self, value: T) -> InsertResult
    where
        T: Ord,
    {
        let node = match self.root_mut() {
            Some(node) => node,
            None => {
                self.0 = Some(Node::new_boxed(value));
                return InsertResult::Inserted(Ordering::Equal);
            }
        };

        let ordering = value.cmp(&node.value);
        let child_result = match ordering {
            Ordering::Less => node.left.insert(value),
            Ordering::Equal => {
                log::trace!("ignoring duplicate value");
                InsertResult::Duplicate
            }
            Ordering::Greater => node.right.insert(value),
        };

        match child_result {
            InsertResult::Duplicate => InsertResult::Duplicate,
            InsertResult::Inserted(child_ordering) => {
                self.balance(child_ordering);
                InsertResult::Inserted(ordering)
            }
        }
    }

    /// Restores the height and balance of the node in this slot after a value was inserted below
    /// it. `child_ordering` is how the inserted value compared to the child it went into, which
    /// tells a straight (left-left, right-right) imbalance from a zig-zag one.
    ///
    /// See <https://en.wikipedia.org/wiki/AVL_tree#Rebalancing> for terminology.
    fn balance(&mut self, child_ordering: Ordering)
    where
        T: Ord,
    {
        let Some(root) = self.root_mut() else {
            return;
        };
        root.fix_height();

        match (root.balance_factor(), child_ordering) {
            (bf, Ordering::Less) if bf > 1 => {
                log::trace!("left-left imbalance, rotating right");
                self.rotate_right();
            }
            (bf, Ordering::Greater) if bf < -1 => {
                log::trace!("right-right imbalance, rotating left");
                self.rotate_left();
            }
            (bf, Ordering::Greater) if bf > 1 => {
                log::trace!("left-right imbalance, rotating left then right");
                self.rotate_left_right();
            }
            (bf, Ordering::Less) if bf < -1 => {
                log::trace!("right-left imbalance, rotating right then left");
                self.rotate_right_left();
            }
            _ => {}
        }

        if cfg!(debug_assertions) {
            let Some(root) = self.root() else {
                return;
            };
            let left_height = root.left.height();
            let right_height = root.right.height();
            assert_eq!(root.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
            if let Some(left) = root.left() {
                assert!(left.value < root.value);
            }
            if let Some(right) = root.right() {
                assert!(right.value > root.value);
            }
        }
    }

    /// Rotate self to the right. This moves the left child up vertically and self down vertically.
    /// Used to rebalance the tree when the left child is too tall. As such, it must only be called
    /// when there _is_ a left child.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///   old_root (i.e. "self")    new_root
    ///    /     \                  /     \
    /// new_root  z     rotate ->  x    old_root
    ///  / \                               /  \
    /// x   y                             y    z
    /// ```
    fn rotate_right(&mut self) {
        let mut old_root = self.0.take().expect("Cannot rotate empty tree/node.");
        let mut new_root = old_root.left.0.take().expect("Rotate right => left child");

        old_root.left = new_root.right.take();
        old_root.fix_height();

        new_root.right = Link(Some(old_root));
        new_root.fix_height();
        self.0 = Some(new_root);
    }

    /// The mirror image of [`Link::rotate_right`]: the right child moves up.
    fn rotate_left(&mut self) {
        let mut old_root = self.0.take().expect("Rotating a tree requires a root");
        let mut new_root = old_root.right.0.take().expect("Rotate left => right child");

        old_root.right = new_root.left.take();
        old_root.fix_height();

        new_root.left = Link(Some(old_root));
        new_root.fix_height();
        self.0 = Some(new_root);
    }

    fn rotate_right_left(&mut self) {
        self.root_mut()
            .expect("Rotating a tree requires a root")
            .right
            .rotate_right();
        self.rotate_left();
    }

    fn rotate_left_right(&mut self) {
        self.root_mut()
            .expect("Rotating a tree requires a root")
            .left
            .rotate_left();
        self.rotate_right();
    }

    /// Visits the whole subtree, without pruning, calling `visitor` on every value equal to
    /// `value`.
    fn search<F>(&self, value: &T, visitor: &mut F) -> bool
    where
        T: PartialEq,
        F: FnMut(&T),
    {
        let Some(node) = self.root() else {
            return false;
        };

        let mut found = false;
        if node.value == *value {
            visitor(&node.value);
            found = true;
        }
        // Non short-circuiting `|` so both subtrees are always visited.
        found | node.left.search(value, visitor) | node.right.search(value, visitor)
    }

    fn in_order<F>(&self, visitor: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(node) = self.root() {
            node.left.in_order(visitor);
            visitor(&node.value);
            node.right.in_order(visitor);
        }
    }

    fn pre_order<F>(&self, visitor: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(node) = self.root() {
            visitor(&node.value);
            node.left.pre_order(visitor);
            node.right.pre_order(visitor);
        }
    }

    fn post_order<F>(&self, visitor: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(node) = self.root() {
            node.left.post_order(visitor);
            node.right.post_order(visitor);
            visitor(&node.value);
        }
    }
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("height", &self.height)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: Link(None),
            right: Link(None),
            height: 1,
        })
    }

    fn left(&self) -> Option<&Self> {
        self.left.root()
    }

    fn right(&self) -> Option<&Self> {
        self.right.root()
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    fn fix_height(&mut self) {
        self.height = self.left.height().max(self.right.height()) + 1;
    }

    /// The difference in height between the left and right subtrees. Positive means the left
    /// subtree is taller.
    fn balance_factor(&self) -> isize {
        self.left.height() as isize - self.right.height() as isize
    }

    fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Less => self.left().map_or(false, |n| n.contains(value)),
            Ordering::Equal => true,
            Ordering::Greater => self.right().map_or(false, |n| n.contains(value)),
        }
    }
}

#[cfg(test)]
impl<T> Link<T>
where
    T: Ord,
{
    /// Checks every invariant of the subtree and returns its height.
    fn assert_avl(&self) -> usize {
        let Some(node) = self.root() else {
            return 0;
        };
        if let Some(left) = node.left() {
            assert!(left.value < node.value);
        }
        if let Some(right) = node.right() {
            assert!(right.value > node.value);
        }

        let left_height = node.left.assert_avl();
        let right_height = node.right.assert_avl();
        assert_eq!(node.height, left_height.max(right_height) + 1);
        assert!(left_height.abs_diff(right_height) <= 1);
        node.height
    }
}
