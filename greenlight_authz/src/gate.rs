//! The capability gate.
//!
//! Single-entity operations call the gate once per guarded action. The
//! answer is a plain boolean: callers map `false` to their unauthorized
//! error. At this layer "entity not found" and "not permitted" are
//! deliberately indistinguishable so existence never leaks.

use greenlight_core::Actor;
use uuid::Uuid;

use crate::capability::Action;
use crate::derive::derive_mask;

/// The per-request authorization context, populated by the session
/// middleware. Anonymous requests carry no actor and fail every check
/// without ever deriving a mask.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    actor: Option<Actor>,
}

impl RequestContext {
    /// A context with no authenticated actor.
    pub fn anonymous() -> Self {
        Self { actor: None }
    }

    /// A context carrying a resolved actor snapshot.
    pub fn authenticated(actor: Actor) -> Self {
        Self { actor: Some(actor) }
    }

    /// The resolved actor, if any.
    pub fn actor(&self) -> Option<&Actor> {
        self.actor.as_ref()
    }

    /// Can this actor perform `action` on `target` in `jurisdiction`?
    ///
    /// `Uuid::nil()` targets jurisdiction-only actions; an empty
    /// jurisdiction matches no country role. Fail-closed: an anonymous
    /// context is denied immediately.
    pub fn can(&self, action: Action, target: Uuid, jurisdiction: &str) -> bool {
        let Some(actor) = &self.actor else {
            tracing::debug!(entity = %target, "capability check denied: no authenticated actor");
            return false;
        };

        let granted = derive_mask(actor, target, jurisdiction);
        let allowed = action.allows(granted);
        if !allowed {
            tracing::debug!(
                actor = %actor.id,
                entity = %target,
                jurisdiction,
                required = %action.mask(),
                granted = %granted,
                "capability check denied"
            );
        }
        allowed
    }
}
