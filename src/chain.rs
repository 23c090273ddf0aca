//! The switch/case/break/default builder.
//!
//! A chain starts with [`switch`], threads the subject through
//! [`Switch::case`], [`Switch::then`] and [`Switch::break_on_match`], and
//! optionally ends with [`Switch::default`]:
//!
//! ```rust
//! use casechain::switch;
//!
//! let mut log = Vec::new();
//! switch(5)
//!     .case(|v| *v > 6)
//!     .case(|v| *v > 3 && *v < 7)
//!     .then(|v| log.push(format!("mid {v}")))
//!     .break_on_match()
//!     .case(|v| *v > 1)
//!     .then(|_| log.push("never".to_string()))
//!     .default(|_| log.push("no case ran".to_string()));
//!
//! assert_eq!(log, ["mid 5"]);
//! ```
//!
//! Consecutive `case` calls form a group: predicates are tried in order only
//! until one of them matches, later predicates of the same group are not
//! invoked. A `then` closes the group, so the next `case` always evaluates.

use std::convert::Infallible;
use tracing::trace;

/// What kind of operation last executed on a chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// A `case` ran last.
    Pattern,
    /// A `then` ran last, or the chain was just created.
    Statement,
    /// A `break_on_match` took effect. Absorbing.
    Broken,
}

/// Chain state for one subject. Created by [`switch`] and consumed by the
/// chain expression that created it.
#[derive(Clone, Debug)]
pub struct Switch<T> {
    subject: T,
    matched: bool,
    phase: Phase,
    any_action_ran: bool,
}

/// Starts a chain on `subject`.
pub fn switch<T>(subject: T) -> Switch<T> {
    Switch::new(subject)
}

impl<T> Switch<T> {
    /// Same as [`switch`].
    pub fn new(subject: T) -> Self {
        Switch {
            subject,
            matched: false,
            phase: Phase::Statement,
            any_action_ran: false,
        }
    }

    /// Tests `predicate` against the subject.
    ///
    /// The predicate is skipped when an earlier case of the same group already
    /// matched, and after a break.
    pub fn case<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self.try_case(|subject| Ok::<_, Infallible>(predicate(subject))) {
            Ok(chain) => chain,
            Err(never) => match never {},
        }
    }

    /// Fallible [`case`](Self::case). A predicate error ends the chain and is
    /// returned unchanged.
    pub fn try_case<P, E>(mut self, predicate: P) -> Result<Self, E>
    where
        P: FnOnce(&T) -> Result<bool, E>,
    {
        match self.phase {
            Phase::Broken => return Ok(self),
            Phase::Pattern if self.matched => {
                trace!("case skipped, group already matched");
            }
            Phase::Pattern | Phase::Statement => {
                self.matched = predicate(&self.subject)?;
                trace!(matched = self.matched, "case evaluated");
            }
        }
        self.phase = Phase::Pattern;
        Ok(self)
    }

    /// Runs `action` on the subject if the preceding case group matched.
    ///
    /// Closes the current case group whether or not the action ran.
    pub fn then<A>(self, action: A) -> Self
    where
        A: FnOnce(&mut T),
    {
        match self.try_then(|subject| {
            action(subject);
            Ok::<_, Infallible>(())
        }) {
            Ok(chain) => chain,
            Err(never) => match never {},
        }
    }

    /// Fallible [`then`](Self::then). Effects of actions that already ran are
    /// kept when a later action fails.
    ///
    /// A failing action consumes the chain, so no later step runs, `default`
    /// included.
    pub fn try_then<A, E>(mut self, action: A) -> Result<Self, E>
    where
        A: FnOnce(&mut T) -> Result<(), E>,
    {
        if self.phase == Phase::Broken {
            return Ok(self);
        }
        if self.matched {
            trace!("action running");
            self.any_action_ran = true;
            action(&mut self.subject)?;
        }
        self.phase = Phase::Statement;
        Ok(self)
    }

    /// Stops all further processing of the chain, but only directly after a
    /// `then` whose case group matched. Anywhere else it has no effect.
    pub fn break_on_match(mut self) -> Self {
        if self.matched && self.phase == Phase::Statement {
            trace!("chain broken");
            self.phase = Phase::Broken;
        }
        self
    }

    /// Ends the chain, running `action` only if no action ran anywhere in it.
    pub fn default<A>(self, action: A)
    where
        A: FnOnce(&mut T),
    {
        let result = self.try_default(|subject| {
            action(subject);
            Ok::<_, Infallible>(())
        });
        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Fallible [`default`](Self::default).
    pub fn try_default<A, E>(mut self, action: A) -> Result<(), E>
    where
        A: FnOnce(&mut T) -> Result<(), E>,
    {
        if !self.any_action_ran {
            trace!("default running");
            action(&mut self.subject)?;
        }
        Ok(())
    }

    /// Ends the chain without a default and returns the subject.
    pub fn into_inner(self) -> T {
        self.subject
    }
}
