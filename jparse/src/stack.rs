//! Per-parse stacks: the state/value stack driven by the automaton, and the
//! bounded stack of scope checkpoints used by error recovery.

use crate::{Span, StateID};
use std::collections::VecDeque;

/// The automaton stack.
///
/// States and semantic values live in two parallel vectors. The bottom state
/// has no value, so during a parse `states.len() == values.len() + 1` and the
/// stack is never empty.
#[derive(Debug)]
pub struct ParserStack<V> {
    states: Vec<StateID>,
    values: Vec<V>,
}

impl<V> ParserStack<V> {
    pub fn new(start: StateID) -> Self {
        Self {
            states: vec![start],
            values: Vec::new(),
        }
    }

    /// Number of states on the stack, including the bottom one.
    #[inline]
    pub fn depth(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn top_state(&self) -> StateID {
        self.states[self.states.len() - 1]
    }

    #[inline]
    pub fn states(&self) -> &[StateID] {
        &self.states
    }

    #[inline]
    pub fn values(&self) -> &[V] {
        &self.values
    }

    #[inline]
    pub fn push(&mut self, state: StateID, value: V) {
        self.states.push(state);
        self.values.push(value);
    }

    /// Pops the topmost `n` frames and returns their values, bottom-most
    /// first. Returns `None` (and leaves the stack untouched) if fewer than
    /// `n` frames sit above the bottom state.
    pub fn pop_values(&mut self, n: usize) -> Option<Vec<V>> {
        if n > self.values.len() {
            return None;
        }
        self.states.truncate(self.states.len() - n);
        Some(self.values.split_off(self.values.len() - n))
    }

    /// Unwinds the stack to `depth` states. The bottom state is never removed.
    pub fn truncate(&mut self, depth: usize) {
        let depth = depth.max(1);
        self.states.truncate(depth);
        self.values.truncate(depth - 1);
    }

    /// Removes the single value left after an accept, leaving only the bottom
    /// state behind.
    pub fn take_accepted(&mut self) -> Option<V> {
        if self.values.len() != 1 {
            return None;
        }
        self.states.truncate(1);
        self.values.pop()
    }
}

/// A saved stack position the recovery manager can unwind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeCheckpoint {
    /// Stack depth (number of states) at the time the checkpoint was taken.
    pub depth: usize,
    /// The state on top of the stack at that depth.
    pub state: StateID,
    /// Index of the lookahead token when the checkpoint was taken.
    pub token_index: usize,
    /// Span of that lookahead token.
    pub span: Option<Span>,
}

/// A bounded stack of [`ScopeCheckpoint`]s, ordered by increasing depth.
///
/// When full, pushing evicts the oldest (shallowest) checkpoint.
#[derive(Debug, Clone)]
pub struct ScopeStack {
    entries: VecDeque<ScopeCheckpoint>,
    capacity: usize,
}

impl ScopeStack {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Pushes a checkpoint, returning the evicted one if the stack was full.
    pub fn push(&mut self, checkpoint: ScopeCheckpoint) -> Option<ScopeCheckpoint> {
        debug_assert!(self.entries.back().is_none_or(|top| top.depth < checkpoint.depth));
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(checkpoint);
        evicted
    }

    /// Drops every checkpoint deeper than `depth`.
    pub fn prune_above(&mut self, depth: usize) {
        while self.entries.back().is_some_and(|top| top.depth > depth) {
            self.entries.pop_back();
        }
    }

    /// Checkpoints from the most recent to the oldest.
    pub fn iter_recent(&self) -> impl Iterator<Item = &ScopeCheckpoint> {
        self.entries.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkpoint(depth: usize) -> ScopeCheckpoint {
        ScopeCheckpoint {
            depth,
            state: StateID(depth as u16),
            token_index: depth,
            span: None,
        }
    }

    #[test]
    fn push_and_pop_keep_states_and_values_aligned() {
        let mut stack = ParserStack::new(StateID(1));
        stack.push(StateID(2), "a");
        stack.push(StateID(3), "b");
        stack.push(StateID(4), "c");
        assert_eq!(stack.depth(), 4);
        assert_eq!(stack.top_state(), StateID(4));

        let popped = stack.pop_values(2).unwrap();
        assert_eq!(popped, vec!["b", "c"]);
        assert_eq!(stack.states(), &[StateID(1), StateID(2)]);
        assert_eq!(stack.values(), &["a"]);
    }

    #[test]
    fn pop_never_reaches_the_bottom_state() {
        let mut stack = ParserStack::new(StateID(1));
        stack.push(StateID(2), 10);
        assert!(stack.pop_values(2).is_none());
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.pop_values(0).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn truncate_keeps_the_bottom_state() {
        let mut stack = ParserStack::new(StateID(1));
        for i in 2..6 {
            stack.push(StateID(i), i);
        }
        stack.truncate(3);
        assert_eq!(stack.states(), &[StateID(1), StateID(2), StateID(3)]);
        assert_eq!(stack.values(), &[2, 3]);
        stack.truncate(0);
        assert_eq!(stack.depth(), 1);
        assert!(stack.values().is_empty());
    }

    #[test]
    fn accept_leaves_depth_one() {
        let mut stack = ParserStack::new(StateID(1));
        assert!(stack.take_accepted().is_none());
        stack.push(StateID(4), "unit");
        assert_eq!(stack.take_accepted(), Some("unit"));
        assert_eq!(stack.depth(), 1);
        stack.push(StateID(2), "a");
        stack.push(StateID(3), "b");
        assert!(stack.take_accepted().is_none());
        assert_eq!(stack.depth(), 3);
    }

    #[test]
    fn full_scope_stack_evicts_oldest() {
        let mut scopes = ScopeStack::new(3);
        assert!(scopes.push(checkpoint(2)).is_none());
        assert!(scopes.push(checkpoint(3)).is_none());
        assert!(scopes.push(checkpoint(5)).is_none());
        assert_eq!(scopes.push(checkpoint(7)), Some(checkpoint(2)));
        assert_eq!(scopes.len(), 3);
        let depths: Vec<_> = scopes.iter_recent().map(|c| c.depth).collect();
        assert_eq!(depths, vec![7, 5, 3]);
    }

    #[test]
    fn prune_drops_only_deeper_checkpoints() {
        let mut scopes = ScopeStack::new(8);
        for depth in [2, 4, 6, 8] {
            scopes.push(checkpoint(depth));
        }
        scopes.prune_above(6);
        assert_eq!(scopes.iter_recent().next().map(|c| c.depth), Some(6));
        scopes.prune_above(1);
        assert!(scopes.is_empty());
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let mut scopes = ScopeStack::new(0);
        assert!(scopes.push(checkpoint(2)).is_none());
        assert_eq!(scopes.push(checkpoint(3)), Some(checkpoint(2)));
        assert_eq!(scopes.len(), 1);
    }
}
