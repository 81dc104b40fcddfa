//! Closure-based plugins.
//!
//! [`FnPlugin`] assembles a plugin from two optional async closures, for
//! callers that do not want to declare a type per plugin.

use crate::plugin::interface::{InitHook, Plugin, PostInitHook, PluginResult, SharedPlugin};
use async_trait::async_trait;
use futures::future::BoxFuture;
use std::sync::Arc;

type InitFn = Arc<dyn for<'a> Fn(&'a [SharedPlugin]) -> BoxFuture<'a, PluginResult<()>> + Send + Sync>;

type PostInitFn = Arc<dyn Fn() -> BoxFuture<'static, PluginResult<()>> + Send + Sync>;

/// A plugin whose hooks are closures.
///
/// Each hook is present only if its closure was supplied, so
/// `FnPlugin::new("noop")` is a plugin with no capabilities at all.
#[derive(Clone)]
pub struct FnPlugin {
    name: String,
    init: Option<InitFn>,
    post_init: Option<PostInitFn>,
}

impl FnPlugin {
    /// Create a plugin with no hooks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            init: None,
            post_init: None,
        }
    }

    /// Set the `init` hook.
    pub fn on_init<F>(mut self, handler: F) -> Self
    where
        F: for<'a> Fn(&'a [SharedPlugin]) -> BoxFuture<'a, PluginResult<()>> + Send + Sync + 'static,
    {
        self.init = Some(Arc::new(handler));
        self
    }

    /// Set the `post_init` hook.
    pub fn on_post_init<F>(mut self, handler: F) -> Self
    where
        F: Fn() -> BoxFuture<'static, PluginResult<()>> + Send + Sync + 'static,
    {
        self.post_init = Some(Arc::new(handler));
        self
    }

    /// Wrap into a shared plugin handle.
    pub fn shared(self) -> SharedPlugin {
        Arc::new(self)
    }
}

impl std::fmt::Debug for FnPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnPlugin")
            .field("name", &self.name)
            .field("init", &self.init.as_ref().map(|_| "<closure>"))
            .field("post_init", &self.post_init.as_ref().map(|_| "<closure>"))
            .finish()
    }
}

impl Plugin for FnPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn init_hook(&self) -> Option<&dyn InitHook> {
        self.init.as_ref().map(|_| self as &dyn InitHook)
    }

    fn post_init_hook(&self) -> Option<&dyn PostInitHook> {
        self.post_init.as_ref().map(|_| self as &dyn PostInitHook)
    }
}

#[async_trait]
impl InitHook for FnPlugin {
    async fn init(&self, plugins: &[SharedPlugin]) -> PluginResult<()> {
        match &self.init {
            Some(handler) => handler(plugins).await,
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PostInitHook for FnPlugin {
    async fn post_init(&self) -> PluginResult<()> {
        match &self.post_init {
            Some(handler) => handler().await,
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::interface::{PluginError, PluginExt, PluginHook};
    use futures::FutureExt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_hooks_follow_closures() {
        let bare = FnPlugin::new("bare");
        assert!(bare.hooks().is_empty());

        let init_only = FnPlugin::new("init").on_init(|_| async { Ok(()) }.boxed());
        assert_eq!(init_only.hooks(), vec![PluginHook::Init]);

        let post_only = FnPlugin::new("post").on_post_init(|| async { Ok(()) }.boxed());
        assert_eq!(post_only.hooks(), vec![PluginHook::PostInit]);

        let both = FnPlugin::new("both")
            .on_init(|_| async { Ok(()) }.boxed())
            .on_post_init(|| async { Ok(()) }.boxed());
        assert_eq!(both.hooks(), vec![PluginHook::Init, PluginHook::PostInit]);
    }

    #[test]
    fn test_name_and_debug() {
        let plugin = FnPlugin::new("wiring").on_init(|_| async { Ok(()) }.boxed());
        assert_eq!(plugin.name(), "wiring");

        let debug = format!("{:?}", plugin);
        assert!(debug.contains("wiring"));
        assert!(debug.contains("<closure>"));
    }

    #[tokio::test]
    async fn test_init_closure_sees_list() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        let plugin = FnPlugin::new("counter")
            .on_init(move |plugins| {
                let counter = counter.clone();
                async move {
                    counter.store(plugins.len(), Ordering::SeqCst);
                    Ok(())
                }
                .boxed()
            })
            .shared();

        let list = vec![plugin.clone(), FnPlugin::new("other").shared()];
        let hook = plugin.init_hook().unwrap();
        assert_ok!(hook.init(&list).await);
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_post_init_closure_error() {
        let plugin = FnPlugin::new("failing")
            .on_post_init(|| async { Err(PluginError::new("not ready")) }.boxed());

        let hook = plugin.post_init_hook().unwrap();
        let result = tokio_test::block_on(hook.post_init());
        assert_eq!(result.clone().unwrap_err().message, "not ready");
        assert_err!(result);
    }

    #[test]
    fn test_missing_hooks_are_absent() {
        let plugin = FnPlugin::new("bare");
        assert!(plugin.init_hook().is_none());
        assert!(plugin.post_init_hook().is_none());
        assert_ok!(tokio_test::block_on(InitHook::init(&plugin, &[])));
        assert_ok!(tokio_test::block_on(PostInitHook::post_init(&plugin)));
    }
}
