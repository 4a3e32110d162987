//! Ownership-based authorization policy.
//!
//! Every repository operation receives an [`Actor`] and applies the same
//! rule: a resource is accessible to its owner or to a superuser. Single-row
//! operations call [`Actor::can_access`]; list queries bind
//! [`Actor::ownership_filter`] so superusers see all rows and everyone else
//! sees only their own.

use uuid::Uuid;

/// The authenticated identity performing an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    /// The user's id, used for ownership comparison.
    pub id: Uuid,
    /// Superusers bypass ownership checks entirely.
    pub is_superuser: bool,
}

impl Actor {
    /// Whether this actor may read or mutate a resource owned by `owner_id`.
    pub fn can_access(&self, owner_id: Uuid) -> bool {
        self.is_superuser || self.id == owner_id
    }

    /// Owner filter for list queries.
    ///
    /// `None` means "no ownership restriction" (superuser); `Some(id)` is
    /// bound into queries as `($n::uuid IS NULL OR owner_id = $n)`.
    pub fn ownership_filter(&self) -> Option<Uuid> {
        if self.is_superuser {
            None
        } else {
            Some(self.id)
        }
    }
}
