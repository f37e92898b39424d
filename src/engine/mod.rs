//! The swipe session engine.
//!
//! A session is a plain data aggregate ([`SessionState`]) manipulated by
//! the transition operations on [`SwipeSession`]. Transitions are
//! synchronous and deterministic except for the injected [`MatchPolicy`],
//! which answers the one open question per positive swipe: did this
//! produce a match? Rendering, timers, and navigation all live with the
//! caller.
//!
//! ```text
//! direction ──→ decide ──→ SessionState ──→ caller renders
//!                  │
//!            MatchPolicy (injected)
//! ```

mod action;
mod policy;
mod session;

pub use action::{ActionKind, SwipeAction, SwipeDirection};
pub use policy::{
    AlwaysMatch, MatchPolicy, NeverMatch, RandomWithRate, ScoredThreshold, DEFAULT_MATCH_RATE,
};
pub use session::{DecideOutcome, SessionError, SessionState, SessionStats, SwipeSession};
