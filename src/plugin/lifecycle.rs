//! Two-phase plugin initialization.
//!
//! [`init_plugins`] walks the plugin list twice:
//! - `init`: each plugin that provides it is called with the whole list, in
//!   list order, each call awaited before the next starts.
//! - `post_init`: once every `init` has resolved, each plugin that provides it
//!   is called in list order, again one at a time.
//!
//! The first hook error stops the run and is returned as-is. Nothing is retried,
//! timed out, or run concurrently.

use crate::plugin::interface::{InitHook, Plugin, PluginHook, PluginResult, PostInitHook, SharedPlugin};
use tracing::{debug, trace, warn};

/// One pass over the plugin list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Calls `init` with the full list
    Init,
    /// Calls `post_init`
    PostInit,
}

impl Phase {
    /// The hook this phase invokes.
    pub fn hook(&self) -> PluginHook {
        match self {
            Phase::Init => PluginHook::Init,
            Phase::PostInit => PluginHook::PostInit,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hook())
    }
}

/// Initialize all plugins: every `init`, then every `post_init`.
///
/// Resolves after the last `post_init` resolves. On the first hook error the
/// remaining hooks of that phase and the whole `post_init` phase are skipped,
/// and the error is returned unchanged.
pub async fn init_plugins(plugins: &[SharedPlugin]) -> PluginResult<()> {
    run_phase(Phase::Init, plugins).await?;
    run_phase(Phase::PostInit, plugins).await?;
    Ok(())
}

/// Run a single phase over `plugins`.
///
/// Returns the number of hooks invoked.
pub async fn run_phase(phase: Phase, plugins: &[SharedPlugin]) -> PluginResult<usize> {
    let mut invoked = 0;

    for (index, plugin) in plugins.iter().enumerate() {
        let call = match phase {
            Phase::Init => plugin.init_hook().map(|hook| hook.init(plugins)),
            Phase::PostInit => plugin.post_init_hook().map(|hook| hook.post_init()),
        };

        let Some(call) = call else {
            trace!(%phase, plugin = plugin.name(), index, "Plugin has no hook, skipping");
            continue;
        };

        debug!(%phase, plugin = plugin.name(), index, "Invoking plugin hook");

        if let Err(e) = call.await {
            warn!(
                %phase,
                plugin = plugin.name(),
                index,
                error = %e,
                "Plugin hook failed, aborting initialization"
            );
            return Err(e);
        }

        invoked += 1;
    }

    debug!(%phase, invoked, total = plugins.len(), "Phase complete");
    Ok(invoked)
}
