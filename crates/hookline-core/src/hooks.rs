//! # Lifecycle Hook Registry
//!
//! The host framework calls back into a plugin at three lifecycle points:
//! after install, after migrate, after uninstall. The registry publishes a
//! total mapping from each event to the fully qualified handler the host
//! should resolve and invoke. Nothing here ever calls a handler.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{HandlerPath, HooklineError};

// =============================================================================
// LIFECYCLE EVENTS
// =============================================================================

/// The lifecycle points a host invokes plugin handlers at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// Fired once after the plugin is installed into a site.
    AfterInstall,
    /// Fired after every host migration run.
    AfterMigrate,
    /// Fired once after the plugin is removed from a site.
    AfterUninstall,
}

impl LifecycleEvent {
    /// All events, in the fixed order the registry iterates them.
    pub const ALL: [Self; 3] = [Self::AfterInstall, Self::AfterMigrate, Self::AfterUninstall];

    /// The event name as the host spells it.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AfterInstall => "after_install",
            Self::AfterMigrate => "after_migrate",
            Self::AfterUninstall => "after_uninstall",
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// HOOK REGISTRY
// =============================================================================

/// Total mapping from lifecycle event to external handler.
///
/// One field per event keeps the mapping total by construction: a registry
/// cannot exist with a missing event, and `get` cannot fail. The same
/// handler may serve several events (migrate commonly reuses the install
/// routine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookRegistry {
    /// Handler for `after_install`.
    pub after_install: HandlerPath,
    /// Handler for `after_migrate`.
    pub after_migrate: HandlerPath,
    /// Handler for `after_uninstall`.
    pub after_uninstall: HandlerPath,
}

impl HookRegistry {
    /// Create a registry from the three handler paths.
    #[must_use]
    pub const fn new(
        after_install: HandlerPath,
        after_migrate: HandlerPath,
        after_uninstall: HandlerPath,
    ) -> Self {
        Self {
            after_install,
            after_migrate,
            after_uninstall,
        }
    }

    /// Look up the handler for an event. Total: every event has one.
    #[must_use]
    pub const fn get(&self, event: LifecycleEvent) -> &HandlerPath {
        match event {
            LifecycleEvent::AfterInstall => &self.after_install,
            LifecycleEvent::AfterMigrate => &self.after_migrate,
            LifecycleEvent::AfterUninstall => &self.after_uninstall,
        }
    }

    /// Iterate the mapping in fixed event order.
    pub fn iter(&self) -> impl Iterator<Item = (LifecycleEvent, &HandlerPath)> {
        LifecycleEvent::ALL.into_iter().map(|e| (e, self.get(e)))
    }

    /// Validate every handler path in the registry.
    pub fn validate(&self) -> Result<(), HooklineError> {
        for (_, handler) in self.iter() {
            handler.validate()?;
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
