//! Snapshot of the host state store.
//!
//! The controller never reads ambient global state; each update hands it an
//! immutable before/after snapshot pair instead.

use crate::model::route::RouteId;

/// What the host store reported at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostSnapshot {
    /// Tab the host currently wants shown.
    pub current_route: RouteId,
    /// Whether the host UI is marked inactive (e.g. backgrounded).
    pub inactive: bool,
    /// Whether an on-screen keyboard is up; forwarded to sub-views untouched.
    pub keyboard_active: bool,
}

impl HostSnapshot {
    /// Snapshot with the given route and both flags clear.
    pub fn with_route(current_route: RouteId) -> Self {
        Self {
            current_route,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_starts_on_balance_with_flags_clear() {
        let snapshot = HostSnapshot::default();
        assert_eq!(snapshot.current_route, RouteId::Balance);
        assert!(!snapshot.inactive);
        assert!(!snapshot.keyboard_active);
    }

    #[test]
    fn with_route_only_sets_the_route() {
        let snapshot = HostSnapshot::with_route(RouteId::History);
        assert_eq!(snapshot.current_route, RouteId::History);
        assert!(!snapshot.inactive);
        assert!(!snapshot.keyboard_active);
    }
}
