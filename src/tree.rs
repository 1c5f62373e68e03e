//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Ordered storage for disjoint ranges.

use crate::range::Range;
use std::cmp::Ordering;

/// An ordered set of [`Range`] keys with floor and ceiling lookups.
///
/// Internally implemented as a left-leaning red-black tree. Keys are ordered by
/// [`Range::compare`], which only forms a valid order while no two stored keys share an integer.
/// The tree does not check this; callers must never insert a range that overlaps a stored key
/// other than the one it replaces. Keys are never mutated in place. Changing a bound means
/// removing the old key and inserting the new one.
///
/// # Examples
///
/// ```notest
/// let mut tree = RangeTree::new();
/// tree.insert(Range::new(10, 20).unwrap());
/// tree.insert(Range::new(30, 40).unwrap());
///
/// assert_eq!(tree.floor(&Range::point(25)), Some(Range::new(10, 20).unwrap()));
/// assert_eq!(tree.ceiling(&Range::point(25)), Some(Range::new(30, 40).unwrap()));
/// ```
#[derive(Default)]
pub(crate) struct RangeTree {
    root: Link,
    len: usize,
}

impl RangeTree {
    /// Creates an empty `RangeTree`.
    pub fn new() -> Self {
        RangeTree { root: None, len: 0 }
    }

    /// Number of stored ranges.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts a range, replacing the stored key it compares equal to, if any.
    pub fn insert(&mut self, range: Range) {
        let (mut root, added) = Self::put(self.root.take(), range);
        root.color = Color::Black;
        self.root = Some(root);
        if added {
            self.len += 1;
        }
    }

    fn put(h: Link, range: Range) -> (Box<Node>, bool) {
        let Some(mut node) = h else {
            return (Node::new(range), true);
        };

        let added = match range.compare(&node.range) {
            Ordering::Less => {
                let (left, added) = Self::put(node.left.take(), range);
                node.left = Some(left);
                added
            }
            Ordering::Greater => {
                let (right, added) = Self::put(node.right.take(), range);
                node.right = Some(right);
                added
            }
            Ordering::Equal => {
                node.range = range;
                false
            }
        };

        (Node::balance(node), added)
    }

    /// Removes the stored key that compares equal to `range` and returns it.
    ///
    /// Returns `None` and leaves the tree untouched when no such key exists.
    pub fn remove(&mut self, range: &Range) -> Option<Range> {
        let found = self.get(range)?;
        let mut root = self.root.take()?;

        if !Node::is_red(&root.left) && !Node::is_red(&root.right) {
            root.color = Color::Red;
        }
        self.root = Self::delete(root, range);
        if let Some(ref mut root) = self.root {
            root.color = Color::Black;
        }
        self.len -= 1;
        Some(found)
    }

    /// Top-down deletion. On the way down every visited node is made red or given a red child, so
    /// the key is always removed from a 3- or 4-node and black height is preserved.
    fn delete(mut h: Box<Node>, key: &Range) -> Link {
        if key.compare(&h.range) == Ordering::Less {
            if !Node::is_red(&h.left) && !Node::is_left_red(&h.left) {
                h = Node::move_red_left(h);
            }
            h.left = h.left.take().and_then(|left| Self::delete(left, key));
        } else {
            if Node::is_red(&h.left) {
                h = Node::rotate_right(h);
            }
            if key.compare(&h.range) == Ordering::Equal && h.right.is_none() {
                return h.left.take();
            }
            if !Node::is_red(&h.right) && !Node::is_left_red(&h.right) {
                h = Node::move_red_right(h);
            }
            if key.compare(&h.range) == Ordering::Equal {
                // Replace with the successor, then drop the successor from the right subtree
                if let Some(right) = h.right.take() {
                    let (rest, successor) = Self::delete_min(right);
                    h.range = successor;
                    h.right = rest;
                }
            } else {
                h.right = h.right.take().and_then(|right| Self::delete(right, key));
            }
        }

        Some(Node::balance(h))
    }

    fn delete_min(mut h: Box<Node>) -> (Link, Range) {
        if h.left.is_some() && !Node::is_red(&h.left) && !Node::is_left_red(&h.left) {
            h = Node::move_red_left(h);
        }

        match h.left.take() {
            None => (h.right.take(), h.range),
            Some(left) => {
                let (rest, min) = Self::delete_min(left);
                h.left = rest;
                (Some(Node::balance(h)), min)
            }
        }
    }

    /// Returns the stored key equal to `probe`.
    pub fn get(&self, probe: &Range) -> Option<Range> {
        let mut current = &self.root;
        while let Some(node) = current {
            match probe.compare(&node.range) {
                Ordering::Less => current = &node.left,
                Ordering::Greater => current = &node.right,
                Ordering::Equal => return Some(node.range),
            }
        }
        None
    }

    /// Greatest stored key that does not exceed `probe`.
    ///
    /// For a point probe `[n - n]` this is the range holding `n` if there is one, otherwise the
    /// nearest range that ends below `n`.
    pub fn floor(&self, probe: &Range) -> Option<Range> {
        let mut best = None;
        let mut current = &self.root;
        while let Some(node) = current {
            match probe.compare(&node.range) {
                Ordering::Less => current = &node.left,
                Ordering::Greater => {
                    best = Some(node.range);
                    current = &node.right;
                }
                Ordering::Equal => return Some(node.range),
            }
        }
        best
    }

    /// Least stored key that is not below `probe`.
    ///
    /// For a point probe `[n - n]` this is the range holding `n` if there is one, otherwise the
    /// nearest range that starts above `n`.
    pub fn ceiling(&self, probe: &Range) -> Option<Range> {
        let mut best = None;
        let mut current = &self.root;
        while let Some(node) = current {
            match probe.compare(&node.range) {
                Ordering::Less => {
                    best = Some(node.range);
                    current = &node.left;
                }
                Ordering::Greater => current = &node.right,
                Ordering::Equal => return Some(node.range),
            }
        }
        best
    }

    /// Iterates over the stored ranges in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: Vec::new(),
            current: self.root.as_deref(),
        }
    }
}

impl std::fmt::Debug for RangeTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        /// Writes the tree sideways, one node per line, indented by depth with its link color.
        fn recurse(node: &Link, depth: usize, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            if let Some(n) = node {
                recurse(&n.left, depth + 1, f)?;
                writeln!(
                    f,
                    "{:indent$}{} ({:?})",
                    "",
                    n.range,
                    n.color,
                    indent = depth * 2
                )?;
                recurse(&n.right, depth + 1, f)?;
            }
            Ok(())
        }
        recurse(&self.root, 0, f)
    }
}

/// An in-order iterator over the stored ranges.
pub(crate) struct Iter<'a> {
    stack: Vec<&'a Node>,
    current: Option<&'a Node>,
}

impl Iterator for Iter<'_> {
    type Item = Range;

    fn next(&mut self) -> Option<Self::Item> {
        let mut curr = self.current;
        while let Some(node) = curr {
            self.stack.push(node);
            curr = node.left.as_deref();
        }
        let node = self.stack.pop()?;
        self.current = node.right.as_deref();
        Some(node.range)
    }
}

/// A node in the Red-Black Tree
#[derive(Clone, Debug)]
struct Node {
    range: Range,
    color: Color,
    left: Link,
    right: Link,
}

type Link = Option<Box<Node>>;

#[derive(Debug, PartialEq, Clone, Copy)]
enum Color {
    Red,
    Black,
}

impl Color {
    fn flip(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

impl Node {
    fn new(range: Range) -> Box<Node> {
        Box::new(Node {
            range,
            color: Color::Red,
            left: None,
            right: None,
        })
    }

    fn is_red(link: &Link) -> bool {
        match link {
            Some(node) => node.color == Color::Red,
            None => false,
        }
    }

    /// True when the node behind `link` has a red left child.
    fn is_left_red(link: &Link) -> bool {
        link.as_ref().is_some_and(|node| Node::is_red(&node.left))
    }

    fn rotate_left(mut h: Box<Node>) -> Box<Node> {
        let Some(mut x) = h.right.take() else {
            return h;
        };
        h.right = x.left.take();
        x.color = h.color;
        h.color = Color::Red;
        x.left = Some(h);
        x
    }

    fn rotate_right(mut h: Box<Node>) -> Box<Node> {
        let Some(mut x) = h.left.take() else {
            return h;
        };
        h.left = x.right.take();
        x.color = h.color;
        h.color = Color::Red;
        x.right = Some(h);
        x
    }

    fn flip_colors(h: &mut Box<Node>) {
        h.color = h.color.flip();
        if let Some(ref mut left) = h.left {
            left.color = left.color.flip();
        }
        if let Some(ref mut right) = h.right {
            right.color = right.color.flip();
        }
    }

    /// Assuming `h` is red and both its children are black, makes `h.left` or one of its
    /// children red.
    fn move_red_left(mut h: Box<Node>) -> Box<Node> {
        Node::flip_colors(&mut h);
        if Node::is_left_red(&h.right) {
            h.right = h.right.take().map(Node::rotate_right);
            h = Node::rotate_left(h);
            Node::flip_colors(&mut h);
        }
        h
    }

    /// Assuming `h` is red and both its children are black, makes `h.right` or one of its
    /// children red.
    fn move_red_right(mut h: Box<Node>) -> Box<Node> {
        Node::flip_colors(&mut h);
        if Node::is_left_red(&h.left) {
            h = Node::rotate_right(h);
            Node::flip_colors(&mut h);
        }
        h
    }

    /// Restores the left-leaning red-black shape on the way back up.
    fn balance(mut h: Box<Node>) -> Box<Node> {
        if Node::is_red(&h.right) && !Node::is_red(&h.left) {
            h = Node::rotate_left(h);
        }
        if Node::is_red(&h.left) && Node::is_left_red(&h.left) {
            h = Node::rotate_right(h);
        }
        if Node::is_red(&h.left) && Node::is_red(&h.right) {
            Node::flip_colors(&mut h);
        }
        h
    }
}
