//! Plugin Module
//!
//! Provides the plugin lifecycle:
//! - Plugin interface with optional `init` / `post_init` hooks
//! - Closure-based plugins
//! - Two-phase initialization

pub mod closure;
pub mod interface;
pub mod lifecycle;

pub use closure::FnPlugin;
pub use interface::{
    InitHook, Plugin, PluginError, PluginExt, PluginHook, PluginResult, PostInitHook,
    RecordingPlugin, SharedPlugin,
};
pub use lifecycle::{init_plugins, run_phase, Phase};
