//! Route-level access guard.
//!
//! The guard is a pure function of the current session and a static
//! capability requirement, re-evaluated on every navigation into the gated
//! region. It decides before the wrapped view is built, so denied
//! navigation never flashes protected content.

use std::collections::HashMap;

use crate::session::model::{Role, Session};

/// Where a denied navigation is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// Authentication entry point
    Login,
    /// Unauthorized/fallback destination
    Unauthorized,
}

/// Result of gating one navigation.
#[derive(Debug, PartialEq, Eq)]
pub enum GuardOutcome<V> {
    /// Access granted; the wrapped view, unmodified.
    Granted(V),
    /// Access denied; the view was never instantiated.
    Redirect(RedirectTarget),
}

impl<V> GuardOutcome<V> {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted(_))
    }

    pub fn granted(self) -> Option<V> {
        match self {
            Self::Granted(view) => Some(view),
            Self::Redirect(_) => None,
        }
    }

    pub fn redirect(&self) -> Option<RedirectTarget> {
        match self {
            Self::Granted(_) => None,
            Self::Redirect(target) => Some(*target),
        }
    }
}

/// Static mapping from protected-view identifier to the roles permitted.
///
/// Built from configuration at startup; never mutated at runtime.
pub type CapabilityMap = HashMap<String, Vec<Role>>;

/// Gates a view behind the session and a role requirement.
///
/// The factory runs only when access is granted:
/// 1. unauthenticated sessions are redirected to the login entry point;
/// 2. a non-empty requirement the user's role is not part of redirects to
///    the fallback destination;
/// 3. otherwise the factory's view is returned unmodified.
///
/// An empty requirement admits any authenticated user.
pub fn guard<V, F>(session: &Session, required: &[Role], build: F) -> GuardOutcome<V>
where
    F: FnOnce() -> V,
{
    if !session.is_authenticated() {
        tracing::debug!("access denied: unauthenticated");
        return GuardOutcome::Redirect(RedirectTarget::Login);
    }

    if !required.is_empty() {
        let role = session.role();
        if !role.is_some_and(|r| required.contains(&r)) {
            tracing::debug!(?role, ?required, "access denied: missing capability");
            return GuardOutcome::Redirect(RedirectTarget::Unauthorized);
        }
    }

    GuardOutcome::Granted(build())
}

/// Gates a view by its identifier, resolving the requirement from the
/// capability map. A view id absent from the map carries an empty
/// requirement (any authenticated user).
pub fn guard_view<V, F>(
    session: &Session,
    view_id: &str,
    capabilities: &CapabilityMap,
    build: F,
) -> GuardOutcome<V>
where
    F: FnOnce() -> V,
{
    let required: &[Role] = capabilities.get(view_id).map_or(&[], Vec::as_slice);
    guard(session, required, build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::model::{AuthToken, UserProfile};

    fn user(role: Role) -> UserProfile {
        UserProfile {
            id: "usr-1".to_string(),
            email: "user@vitrine.example".to_string(),
            display_name: "User".to_string(),
            role,
        }
    }

    fn authenticated(role: Role) -> Session {
        let mut session = Session::new();
        session.authenticate(user(role), AuthToken::new("tok"));
        session
    }

    #[test]
    fn test_unauthenticated_redirects_to_login_even_without_requirement() {
        let session = Session::new();
        let outcome = guard(&session, &[], || "view");
        assert_eq!(outcome.redirect(), Some(RedirectTarget::Login));
    }

    #[test]
    fn test_denied_navigation_never_builds_the_view() {
        let session = Session::new();
        let mut built = false;
        let outcome = guard(&session, &[], || {
            built = true;
            "view"
        });
        assert!(!outcome.is_granted());
        assert!(!built);
    }

    #[test]
    fn test_wrong_role_redirects_to_fallback() {
        let session = authenticated(Role::Customer);
        let outcome = guard(&session, &[Role::Admin], || "admin");
        assert_eq!(outcome.redirect(), Some(RedirectTarget::Unauthorized));
    }

    #[test]
    fn test_matching_role_renders_the_view() {
        let session = authenticated(Role::Admin);
        let outcome = guard(&session, &[Role::Admin, Role::Staff], || "admin");
        assert_eq!(outcome.granted(), Some("admin"));
    }

    #[test]
    fn test_empty_requirement_admits_any_authenticated_user() {
        let session = authenticated(Role::Customer);
        assert!(guard(&session, &[], || ()).is_granted());
    }

    #[test]
    fn test_guard_view_resolves_requirement_from_map() {
        let mut capabilities = CapabilityMap::new();
        capabilities.insert("admin.dashboard".to_string(), vec![Role::Admin]);

        let staff = authenticated(Role::Staff);
        let outcome = guard_view(&staff, "admin.dashboard", &capabilities, || ());
        assert_eq!(outcome.redirect(), Some(RedirectTarget::Unauthorized));

        // Unknown view ids carry an empty requirement.
        let outcome = guard_view(&staff, "account.profile", &capabilities, || ());
        assert!(outcome.is_granted());
    }
}
