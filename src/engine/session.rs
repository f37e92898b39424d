use thiserror::Error;

use crate::catalog::Brand;
use crate::engine::action::{SwipeAction, SwipeDirection};
use crate::engine::policy::{MatchPolicy, RandomWithRate, DEFAULT_MATCH_RATE};

/// Errors a session operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// `decide` was called after the last candidate was consumed.
    #[error("session exhausted: no candidate left to decide on")]
    Exhausted,
}

/// One traversal of a candidate list by one owner.
///
/// Plain data: candidates are fixed at creation (owner filtered out, order
/// preserved, never re-ordered or duplicated afterwards), `cursor` walks
/// them, and `history` records one [`SwipeAction`] per step. The invariant
/// `history.len() == cursor` holds between operations; decide and undo
/// move both together.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    owner_id: String,
    candidates: Vec<Brand>,
    cursor: usize,
    history: Vec<SwipeAction>,
    pending_match: Option<Brand>,
}

impl SessionState {
    fn new(candidates: Vec<Brand>, owner_id: String) -> Self {
        let candidates: Vec<Brand> = candidates
            .into_iter()
            .filter(|brand| brand.id != owner_id)
            .collect();
        Self {
            owner_id,
            candidates,
            cursor: 0,
            history: Vec::new(),
            pending_match: None,
        }
    }

    /// The candidate currently under decision, or `None` once exhausted.
    pub fn current(&self) -> Option<&Brand> {
        self.candidates.get(self.cursor)
    }

    /// True when no candidate remains to decide on. An empty candidate
    /// list is exhausted from the start.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.candidates.len()
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn candidates(&self) -> &[Brand] {
        &self.candidates
    }

    pub fn history(&self) -> &[SwipeAction] {
        &self.history
    }

    /// `(cursor, total)` for progress displays. `cursor == total` once
    /// exhausted.
    pub fn position(&self) -> (usize, usize) {
        (self.cursor, self.candidates.len())
    }

    /// The candidate behind the current one, for deck previews.
    pub fn peek_next(&self) -> Option<&Brand> {
        self.candidates.get(self.cursor + 1)
    }

    /// A match waiting to be shown, if one is pending.
    pub fn pending_match(&self) -> Option<&Brand> {
        self.pending_match.as_ref()
    }

    /// Statistics derived from history; nothing is stored.
    pub fn stats(&self) -> SessionStats {
        let liked = self
            .history
            .iter()
            .filter(|action| action.kind.is_positive())
            .count();
        SessionStats {
            viewed: self.history.len(),
            liked,
            passed: self.history.len() - liked,
        }
    }
}

/// Derived per-session counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    pub viewed: usize,
    pub liked: usize,
    pub passed: usize,
}

/// Result of one `decide` call.
///
/// `matched` carries the candidate when the policy declared a match, so
/// callers never have to poll the pending-match state to find out.
#[derive(Debug, Clone, PartialEq)]
pub struct DecideOutcome {
    pub action: SwipeAction,
    pub matched: Option<Brand>,
}

impl DecideOutcome {
    pub fn is_match(&self) -> bool {
        self.matched.is_some()
    }
}

/// The session aggregate plus its injected match policy.
///
/// All operations are synchronous functions of (state, input); any delay
/// before showing or hiding an outcome is the caller's timer, not engine
/// state.
pub struct SwipeSession {
    state: SessionState,
    policy: Box<dyn MatchPolicy>,
}

impl SwipeSession {
    /// Creates a session with the default probabilistic policy.
    pub fn new(candidates: Vec<Brand>, owner_id: impl Into<String>) -> Self {
        Self::with_policy(
            candidates,
            owner_id,
            Box::new(RandomWithRate::new(DEFAULT_MATCH_RATE)),
        )
    }

    /// Creates a session, filtering the owner out of the candidate list.
    pub fn with_policy(
        candidates: Vec<Brand>,
        owner_id: impl Into<String>,
        policy: Box<dyn MatchPolicy>,
    ) -> Self {
        let state = SessionState::new(candidates, owner_id.into());
        tracing::info!(
            owner = %state.owner_id,
            candidates = state.candidates.len(),
            "session initialized"
        );
        Self { state, policy }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current(&self) -> Option<&Brand> {
        self.state.current()
    }

    pub fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }

    pub fn stats(&self) -> SessionStats {
        self.state.stats()
    }

    pub fn can_undo(&self) -> bool {
        !self.state.history.is_empty()
    }

    /// Records a decision on the current candidate and advances the cursor.
    ///
    /// Fails when the session is exhausted; the cursor may step past the
    /// last candidate exactly once, into the terminal exhausted state.
    pub fn decide(&mut self, direction: SwipeDirection) -> Result<DecideOutcome, SessionError> {
        let Some(candidate) = self.state.current().cloned() else {
            return Err(SessionError::Exhausted);
        };

        let kind = direction.action();
        let matched =
            kind.is_positive() && self.policy.is_match(&self.state.owner_id, &candidate);

        let action = SwipeAction::record(&self.state.owner_id, &candidate.id, kind);
        self.state.history.push(action.clone());
        self.state.cursor += 1;
        if matched {
            self.state.pending_match = Some(candidate.clone());
        }

        tracing::debug!(
            candidate = %candidate.id,
            kind = ?kind,
            matched,
            cursor = self.state.cursor,
            "decision recorded"
        );

        Ok(DecideOutcome {
            action,
            matched: matched.then_some(candidate),
        })
    }

    /// Takes back the most recent decision, restoring the previous cursor.
    ///
    /// A no-op returning `false` when there is nothing to undo; that case
    /// is reachable through ordinary UI races, so not an error. Any
    /// pending match is cleared: a match must not outlive the action that
    /// produced it.
    pub fn undo(&mut self) -> bool {
        let Some(action) = self.state.history.pop() else {
            return false;
        };
        self.state.cursor -= 1;
        self.state.pending_match = None;
        tracing::debug!(candidate = %action.to_id, cursor = self.state.cursor, "decision undone");
        true
    }

    /// Starts the traversal over: cursor 0, empty history, no pending
    /// match. The candidate list itself is untouched.
    pub fn reset(&mut self) {
        self.state.cursor = 0;
        self.state.history.clear();
        self.state.pending_match = None;
        tracing::debug!(owner = %self.state.owner_id, "session reset");
    }

    /// Clears the pending match once the caller has shown (or discarded)
    /// it.
    pub fn dismiss_match(&mut self) {
        self.state.pending_match = None;
    }
}
