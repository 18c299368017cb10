//! # Tagged Lookup Results
//!
//! Lookups that can legitimately miss (`get_transaction`, `get_block`)
//! used to flatten every failure — including an unplugged network cable —
//! into "not found". [`Lookup`] keeps the three cases apart: the entity
//! exists, the node confirmed it does not, or the question could not be
//! answered. Callers who liked the old flat behavior get it back with
//! [`Lookup::into_result`].

use crate::error::SdkError;

/// Outcome of a lookup that may legitimately have no result.
#[derive(Debug)]
pub enum Lookup<T> {
    /// The node returned the entity.
    Found(T),
    /// The node confirmed the entity does not exist.
    Absent,
    /// The question went unanswered: transport failure, protocol error,
    /// or an undecodable response. Absence was *not* confirmed.
    Failed(SdkError),
}

impl<T> Lookup<T> {
    /// `true` only for [`Lookup::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// `true` only for a confirmed miss.
    pub fn is_absent(&self) -> bool {
        matches!(self, Lookup::Absent)
    }

    /// Extract the value, discarding the miss/failure distinction.
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(v) => Some(v),
            _ => None,
        }
    }

    /// Collapse to a flat `Result`: a confirmed miss becomes
    /// [`SdkError::NotFound`], a failure keeps its cause.
    pub fn into_result(self) -> Result<T, SdkError> {
        match self {
            Lookup::Found(v) => Ok(v),
            Lookup::Absent => Err(SdkError::NotFound),
            Lookup::Failed(e) => Err(e),
        }
    }

    /// Map the found value, preserving the other arms.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Lookup::Found(v) => Lookup::Found(f(v)),
            Lookup::Absent => Lookup::Absent,
            Lookup::Failed(e) => Lookup::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_roundtrips() {
        let l = Lookup::Found(7);
        assert!(l.is_found());
        assert_eq!(l.into_result().unwrap(), 7);
    }

    #[test]
    fn absent_becomes_not_found() {
        let l: Lookup<u64> = Lookup::Absent;
        assert!(l.is_absent());
        assert!(matches!(l.into_result(), Err(SdkError::NotFound)));
    }

    #[test]
    fn failure_keeps_its_cause() {
        let l: Lookup<u64> = Lookup::Failed(SdkError::Transport("timeout".into()));
        match l.into_result() {
            Err(SdkError::Transport(msg)) => assert_eq!(msg, "timeout"),
            other => panic!("expected transport failure, got {other:?}"),
        }
    }

    #[test]
    fn map_preserves_arms() {
        assert_eq!(Lookup::Found(2).map(|v| v * 2).found(), Some(4));
        assert!(Lookup::<u64>::Absent.map(|v| v).is_absent());
    }
}
