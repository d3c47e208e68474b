//! Spelling alternatives and autocompletion over lexicon walks
//!
//! Both operations filter a lexicon walk: same-length entries for
//! alternatives, the subtree under a prefix for completion. With the
//! `parallel` feature and more than one configured thread, the subtrees
//! below the walk's start node are distributed over a bounded rayon pool;
//! results keep depth-first order either way.

use crate::application::config::TraversalConfig;
use crate::domain::lexicon::{CancellationToken, Lexicon, NodeId};
use crate::domain::morphology::{Language, Word, WordVariant};
use crate::error::{Error, Result};
use log::{debug, warn};
#[cfg(feature = "parallel")]
use std::sync::Arc;

/// Worker pool for subtree walks, shared by clones; empty when sequential
#[derive(Debug, Clone, Default)]
pub(crate) struct Workers {
    #[cfg(feature = "parallel")]
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl Workers {
    /// Validate `config` and build its pool once
    pub(crate) fn new(config: &TraversalConfig) -> Result<Self> {
        config.validate()?;
        #[cfg(feature = "parallel")]
        {
            let threads = config.thread_count();
            if threads > 1 {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| {
                        Error::Configuration(format!("failed to build thread pool: {e}"))
                    })?;
                debug!("traversal pool with {threads} threads");
                return Ok(Self {
                    pool: Some(Arc::new(pool)),
                });
            }
        }
        Ok(Self::default())
    }

    #[cfg(all(test, feature = "parallel"))]
    pub(crate) fn shares_pool(&self, other: &Self) -> bool {
        match (&self.pool, &other.pool) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Fuzzy and prefix lookups over one lexicon
#[derive(Debug, Clone)]
pub struct Suggester<'a> {
    lexicon: &'a Lexicon,
    workers: Workers,
    cancel: CancellationToken,
}

impl<'a> Suggester<'a> {
    /// Suggester with the default traversal configuration
    pub fn new(lexicon: &'a Lexicon) -> Result<Self> {
        Self::with_config(lexicon, &TraversalConfig::default())
    }

    pub fn with_config(lexicon: &'a Lexicon, config: &TraversalConfig) -> Result<Self> {
        Ok(Self::from_parts(lexicon, Workers::new(config)?))
    }

    /// Reuse an already built worker pool
    pub(crate) fn from_parts(lexicon: &'a Lexicon, workers: Workers) -> Self {
        Self {
            lexicon,
            workers,
            cancel: CancellationToken::new(),
        }
    }

    /// Observe `token`; once cancelled, running and later calls fail with
    /// [`Error::Cancelled`]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Same-length entries with at most `max_substitutions` differing code
    /// points and a reading in `language`
    pub fn find_alternatives(
        &self,
        word: &str,
        language: Language,
        max_substitutions: usize,
    ) -> Result<Vec<&'a Word>> {
        let length = word.chars().count();
        if length == 0 {
            return Ok(Vec::new());
        }
        let lexicon = self.lexicon;
        let found = self.collect(NodeId::ROOT, Some(length), |candidate| {
            candidate.has_language(language)
                && count_substitutions(word, &lexicon.spelling(candidate)) <= max_substitutions
        })?;
        debug!(
            "{} alternatives for {word:?} within {max_substitutions} substitutions",
            found.len()
        );
        Ok(found)
    }

    /// Entries starting with `prefix`, optionally narrowed by a variant query
    pub fn autocomplete(
        &self,
        prefix: &str,
        filter: Option<&WordVariant>,
    ) -> Result<Vec<&'a Word>> {
        let Some(start) = self.lexicon.find_path(prefix) else {
            return Ok(Vec::new());
        };
        let found = self.collect(start, None, |candidate| {
            filter.map_or(true, |query| query.filter(candidate))
        })?;
        debug!("{} completions for {prefix:?}", found.len());
        Ok(found)
    }

    /// Words below `start` (optionally exactly `depth` below it) accepted
    /// by `accept`
    fn collect<F>(&self, start: NodeId, depth: Option<usize>, accept: F) -> Result<Vec<&'a Word>>
    where
        F: Fn(&Word) -> bool + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            if let Some(pool) = &self.workers.pool {
                if depth != Some(0) {
                    return self.collect_parallel(pool, start, depth, accept);
                }
            }
        }

        let mut walk = self
            .lexicon
            .walk_from(start, depth)
            .with_cancellation(self.cancel.clone());
        let found: Vec<&'a Word> = walk.by_ref().filter(|&w| accept(w)).collect();
        if walk.was_cancelled() {
            return Err(self.cancelled());
        }
        Ok(found)
    }

    /// One pool task per child subtree of `start`, joined in child order
    #[cfg(feature = "parallel")]
    fn collect_parallel<F>(
        &self,
        pool: &rayon::ThreadPool,
        start: NodeId,
        depth: Option<usize>,
        accept: F,
    ) -> Result<Vec<&'a Word>>
    where
        F: Fn(&Word) -> bool + Sync,
    {
        use rayon::prelude::*;

        let lexicon = self.lexicon;
        let node = lexicon.node(start);
        let children: Vec<NodeId> = node.children().map(|(_, child)| child).collect();
        let child_depth = depth.map(|d| d - 1);

        let subtrees: Vec<(Vec<&'a Word>, bool)> = pool.install(|| {
            children
                .par_iter()
                .map(|&child| {
                    let mut walk = lexicon
                        .walk_from(child, child_depth)
                        .with_cancellation(self.cancel.clone());
                    let found: Vec<&'a Word> = walk.by_ref().filter(|&w| accept(w)).collect();
                    (found, walk.was_cancelled())
                })
                .collect()
        });

        if self.cancel.is_cancelled() || subtrees.iter().any(|(_, cancelled)| *cancelled) {
            return Err(self.cancelled());
        }

        let mut found = Vec::new();
        if depth.is_none() {
            found.extend(node.word().filter(|&w| accept(w)));
        }
        for (words, _) in subtrees {
            found.extend(words);
        }
        Ok(found)
    }

    fn cancelled(&self) -> Error {
        warn!("lexicon traversal cancelled");
        Error::Cancelled
    }
}

impl Lexicon {
    /// Sequential [`Suggester::find_alternatives`]
    pub fn find_alternatives(
        &self,
        word: &str,
        language: Language,
        max_substitutions: usize,
    ) -> Vec<&Word> {
        sequential(self)
            .find_alternatives(word, language, max_substitutions)
            .unwrap_or_default()
    }

    /// Sequential [`Suggester::autocomplete`]
    pub fn autocomplete(&self, prefix: &str, filter: Option<&WordVariant>) -> Vec<&Word> {
        sequential(self)
            .autocomplete(prefix, filter)
            .unwrap_or_default()
    }
}

fn sequential(lexicon: &Lexicon) -> Suggester<'_> {
    Suggester::from_parts(lexicon, Workers::default())
}

/// Position-wise code point mismatches; extra code points count as mismatches
pub fn count_substitutions(a: &str, b: &str) -> usize {
    let mut left = a.chars();
    let mut right = b.chars();
    let mut count = 0;
    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) if x == y => {}
            (None, None) => return count,
            _ => count += 1,
        }
    }
}

/// Replace the code point at `index` with `replacement`
///
/// Returns `None` when `word` has no code point at `index`.
pub fn replace_at(word: &str, index: usize, replacement: char) -> Option<String> {
    let (offset, current) = word.char_indices().nth(index)?;
    let mut replaced = String::with_capacity(word.len() + replacement.len_utf8());
    replaced.push_str(&word[..offset]);
    replaced.push(replacement);
    replaced.push_str(&word[offset + current.len_utf8()..]);
    Some(replaced)
}
