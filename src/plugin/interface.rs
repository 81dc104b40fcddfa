//! Plugin interface definition.
//!
//! A plugin is an opaque value exposing up to two optional lifecycle hooks,
//! `init` and `post_init`. Each hook is its own trait ([`InitHook`],
//! [`PostInitHook`]); a plugin provides a hook by returning it from
//! [`Plugin::init_hook`] / [`Plugin::post_init_hook`]. Returning `None` (the
//! default) means the plugin does not have that hook.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Shared handle to a plugin. Identity is pointer identity (`Arc::ptr_eq`).
pub type SharedPlugin = Arc<dyn Plugin>;

/// Result type for plugin hooks.
pub type PluginResult<T> = std::result::Result<T, PluginError>;

/// Error produced by a plugin hook.
///
/// The lifecycle hands this back to its caller exactly as the hook returned it.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("PluginError: {message}")]
pub struct PluginError {
    /// Error message
    pub message: String,
    /// Error code
    pub code: i32,
}

impl PluginError {
    /// Create a new error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: -1,
        }
    }

    /// Set the error code.
    pub fn with_code(mut self, code: i32) -> Self {
        self.code = code;
        self
    }
}

/// Lifecycle hooks a plugin may implement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PluginHook {
    /// Receives the full plugin list; runs in the first pass
    Init,
    /// Takes no arguments; runs once every plugin has finished `Init`
    PostInit,
}

impl std::fmt::Display for PluginHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginHook::Init => write!(f, "init"),
            PluginHook::PostInit => write!(f, "post_init"),
        }
    }
}

/// The `init` hook.
#[async_trait]
pub trait InitHook: Send + Sync {
    /// Initialize the plugin.
    ///
    /// `plugins` is the complete list of the run, this plugin included, in
    /// the caller's order.
    async fn init(&self, plugins: &[SharedPlugin]) -> PluginResult<()>;
}

/// The `post_init` hook.
#[async_trait]
pub trait PostInitHook: Send + Sync {
    /// Runs after every plugin in the list has been initialized.
    async fn post_init(&self) -> PluginResult<()>;
}

/// Plugin trait.
///
/// Both hooks are optional. A plugin with an `init` hook implements
/// [`InitHook`] and returns itself from `init_hook`:
///
/// ```rust
/// use async_trait::async_trait;
/// use plugin_init::plugin::{InitHook, Plugin, PluginResult, SharedPlugin};
///
/// struct Wiring;
///
/// #[async_trait]
/// impl InitHook for Wiring {
///     async fn init(&self, _plugins: &[SharedPlugin]) -> PluginResult<()> {
///         Ok(())
///     }
/// }
///
/// impl Plugin for Wiring {
///     fn init_hook(&self) -> Option<&dyn InitHook> {
///         Some(self)
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    /// Diagnostic label used in log events.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// The plugin's `init` hook, if it has one.
    fn init_hook(&self) -> Option<&dyn InitHook> {
        None
    }

    /// The plugin's `post_init` hook, if it has one.
    fn post_init_hook(&self) -> Option<&dyn PostInitHook> {
        None
    }
}

/// Capability queries derived from [`Plugin::init_hook`] and
/// [`Plugin::post_init_hook`]. Implemented for every plugin.
pub trait PluginExt {
    /// Hooks this plugin provides, in lifecycle order.
    fn hooks(&self) -> Vec<PluginHook>;

    /// Whether this plugin provides `hook`.
    fn supports(&self, hook: PluginHook) -> bool;
}

impl<P: Plugin + ?Sized> PluginExt for P {
    fn hooks(&self) -> Vec<PluginHook> {
        [PluginHook::Init, PluginHook::PostInit]
            .into_iter()
            .filter(|hook| self.supports(*hook))
            .collect()
    }

    fn supports(&self, hook: PluginHook) -> bool {
        match hook {
            PluginHook::Init => self.init_hook().is_some(),
            PluginHook::PostInit => self.post_init_hook().is_some(),
        }
    }
}

#[derive(Default)]
struct RecordingState {
    init_called: bool,
    post_init_called: bool,
    plugins_received: Option<Vec<SharedPlugin>>,
}

/// A plugin that implements both hooks and records how it was called.
///
/// `init` stores a copy of the list it receives.
#[derive(Default)]
pub struct RecordingPlugin {
    state: Mutex<RecordingState>,
}

impl RecordingPlugin {
    /// Create a new recording plugin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recording plugin behind a shared handle.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Whether `init` has run.
    pub fn init_called(&self) -> bool {
        self.lock().init_called
    }

    /// Whether `post_init` has run.
    pub fn post_init_called(&self) -> bool {
        self.lock().post_init_called
    }

    /// The list handed to `init`, if it ran.
    pub fn plugins_received(&self) -> Option<Vec<SharedPlugin>> {
        self.lock().plugins_received.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RecordingState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Plugin for RecordingPlugin {
    fn name(&self) -> &str {
        "recording"
    }

    fn init_hook(&self) -> Option<&dyn InitHook> {
        Some(self)
    }

    fn post_init_hook(&self) -> Option<&dyn PostInitHook> {
        Some(self)
    }
}

#[async_trait]
impl InitHook for RecordingPlugin {
    async fn init(&self, plugins: &[SharedPlugin]) -> PluginResult<()> {
        let mut state = self.lock();
        state.init_called = true;
        state.plugins_received = Some(plugins.to_vec());
        Ok(())
    }
}

#[async_trait]
impl PostInitHook for RecordingPlugin {
    async fn post_init(&self) -> PluginResult<()> {
        self.lock().post_init_called = true;
        Ok(())
    }
}
