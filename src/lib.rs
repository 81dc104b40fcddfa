//! # plugin-init - Two-phase plugin initialization
//!
//! Runs plugin lifecycle hooks in a fixed order:
//! - **init**: every plugin that has the hook, in list order, each receiving the full list
//! - **post_init**: every plugin that has the hook, in list order, after all `init` calls resolved
//!
//! Hooks run one at a time and the first failure is returned unchanged.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use futures::FutureExt;
//! use plugin_init::plugin::{init_plugins, FnPlugin, RecordingPlugin, SharedPlugin};
//!
//! #[tokio::main]
//! async fn main() {
//!     let recorder = RecordingPlugin::shared();
//!     let greeter = FnPlugin::new("greeter")
//!         .on_post_init(|| async { println!("all plugins initialized"); Ok(()) }.boxed())
//!         .shared();
//!
//!     let plugins = vec![recorder.clone() as SharedPlugin, greeter];
//!     init_plugins(&plugins).await.unwrap();
//!     assert!(recorder.post_init_called());
//! }
//! ```

pub mod core;
pub mod monitoring;
pub mod plugin;

pub use crate::core::error::{Error, Result};
pub use plugin::{
    init_plugins, InitHook, Plugin, PluginError, PluginHook, PluginResult, PostInitHook, SharedPlugin,
};
