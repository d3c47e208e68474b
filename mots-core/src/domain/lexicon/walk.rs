//! Depth-first traversal over terminal words

use super::node::{LexiconNode, NodeId};
use crate::domain::morphology::Word;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag that stops traversals early
///
/// Clones observe the same flag, so a token handed to a traversal can be
/// cancelled from another thread.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Lazy depth-first iterator over the terminal words of a subtree
///
/// Children are visited in ascending code point order, so the sequence is
/// deterministic. Once its cancellation token fires the iterator yields
/// nothing more; [`Walk::was_cancelled`] tells a truncated walk from a
/// finished one.
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    nodes: &'a [LexiconNode],
    /// Pending nodes with their depth below the start node
    stack: Vec<(NodeId, usize)>,
    depth: Option<usize>,
    cancel: Option<CancellationToken>,
    cancelled: bool,
}

impl<'a> Walk<'a> {
    pub(crate) fn empty(nodes: &'a [LexiconNode]) -> Self {
        Self {
            nodes,
            stack: Vec::new(),
            depth: None,
            cancel: None,
            cancelled: false,
        }
    }

    /// Every word in the subtree rooted at `start`, `start` included
    pub(crate) fn subtree(nodes: &'a [LexiconNode], start: NodeId) -> Self {
        let mut walk = Self::empty(nodes);
        walk.stack.push((start, 0));
        walk
    }

    /// Only words exactly `depth` code points below `start`
    pub(crate) fn at_depth(nodes: &'a [LexiconNode], start: NodeId, depth: usize) -> Self {
        let mut walk = Self::subtree(nodes, start);
        walk.depth = Some(depth);
        walk
    }

    /// Stop yielding once `token` is cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Whether the walk stopped because of its token
    pub fn was_cancelled(&self) -> bool {
        self.cancelled
    }

    fn check_cancelled(&mut self) -> bool {
        if !self.cancelled && self.cancel.as_ref().is_some_and(|t| t.is_cancelled()) {
            self.cancelled = true;
            self.stack.clear();
        }
        self.cancelled
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Word;

    fn next(&mut self) -> Option<&'a Word> {
        let nodes = self.nodes;
        loop {
            if self.check_cancelled() {
                return None;
            }
            let (id, depth) = self.stack.pop()?;
            let node = &nodes[id.index()];

            let descend = self.depth.map_or(true, |target| depth < target);
            if descend {
                self.stack
                    .extend(node.children.iter().rev().map(|&(_, child)| (child, depth + 1)));
            }

            let wanted = self.depth.map_or(true, |target| depth == target);
            if wanted {
                if let Some(word) = node.word.as_ref() {
                    return Some(word);
                }
            }
        }
    }
}

impl std::iter::FusedIterator for Walk<'_> {}
