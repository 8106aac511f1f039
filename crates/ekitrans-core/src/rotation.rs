//! Round-robin credential rotation.
//!
//! The [`RotationCursor`] is the only mutable state shared between requests.
//! It lives as long as the service that owns it and is handed to every
//! translation by reference. Concurrent requests interleave on the cursor,
//! so assignment is round robin over the union of their attempts.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::credentials::{Credential, CredentialPool};
use crate::ports::TranslateError;

/// Shared pointer to the credential dispensed next.
#[derive(Debug, Default)]
pub struct RotationCursor {
    position: AtomicUsize,
}

impl RotationCursor {
    pub const fn new() -> Self {
        Self {
            position: AtomicUsize::new(0),
        }
    }

    /// Current raw position.
    pub fn position(&self) -> usize {
        self.position.load(Ordering::Acquire)
    }

    /// Claim the next index of a pool of `len` credentials.
    ///
    /// Returns the claimed index and leaves the cursor at
    /// `(index + 1) % len`. The stored position is reduced modulo `len`
    /// first, since the pool may have shrunk since the last call.
    pub fn advance(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let previous = match self
            .position
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                Some((current % len + 1) % len)
            }) {
            Ok(previous) | Err(previous) => previous,
        };
        Some(previous % len)
    }
}

/// Hands out credentials from a pool in turn, using a shared cursor.
#[derive(Debug, Clone, Copy)]
pub struct RotationSelector<'a> {
    pool: &'a CredentialPool,
    cursor: &'a RotationCursor,
}

impl<'a> RotationSelector<'a> {
    pub const fn new(pool: &'a CredentialPool, cursor: &'a RotationCursor) -> Self {
        Self { pool, cursor }
    }

    /// Dispense the next credential. Fails only when the pool is empty.
    pub fn next(&self) -> Result<&'a Credential, TranslateError> {
        let index = self
            .cursor
            .advance(self.pool.len())
            .ok_or(TranslateError::NoCredentials)?;
        self.pool.get(index).ok_or(TranslateError::NoCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::Credential;

    fn pool(tokens: &[&str]) -> CredentialPool {
        CredentialPool::new(tokens.iter().map(|t| Credential::new(*t)).collect())
    }

    #[test]
    fn cycles_in_load_order_then_repeats() {
        let pool = pool(&["a", "b", "c"]);
        let cursor = RotationCursor::new();
        let selector = RotationSelector::new(&pool, &cursor);

        let dispensed: Vec<&str> = (0..7)
            .map(|_| selector.next().unwrap().expose())
            .collect();
        assert_eq!(dispensed, vec!["a", "b", "c", "a", "b", "c", "a"]);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn one_full_cycle_returns_each_credential_once() {
        let pool = pool(&["a", "b", "c", "d"]);
        let cursor = RotationCursor::new();
        let selector = RotationSelector::new(&pool, &cursor);

        let mut seen: Vec<&str> = (0..pool.len())
            .map(|_| selector.next().unwrap().expose())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec!["a", "b", "c", "d"]);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn empty_pool_reports_no_credentials() {
        let pool = CredentialPool::default();
        let cursor = RotationCursor::new();
        let selector = RotationSelector::new(&pool, &cursor);

        assert!(matches!(selector.next(), Err(TranslateError::NoCredentials)));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn cursor_survives_a_shrinking_pool() {
        let cursor = RotationCursor::new();
        let large = pool(&["a", "b", "c", "d"]);
        let selector = RotationSelector::new(&large, &cursor);
        for _ in 0..3 {
            selector.next().unwrap();
        }
        assert_eq!(cursor.position(), 3);

        let small = pool(&["x", "y"]);
        let selector = RotationSelector::new(&small, &cursor);
        assert_eq!(selector.next().unwrap().expose(), "y");
        assert_eq!(selector.next().unwrap().expose(), "x");
    }

    #[test]
    fn cursor_is_shared_across_selectors() {
        let pool = pool(&["a", "b"]);
        let cursor = RotationCursor::new();

        let first = RotationSelector::new(&pool, &cursor).next().unwrap();
        let second = RotationSelector::new(&pool, &cursor).next().unwrap();
        assert_eq!(first.expose(), "a");
        assert_eq!(second.expose(), "b");
    }
}
