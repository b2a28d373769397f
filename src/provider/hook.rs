//! # 配置覆盖钩子
//!
//! 配置返回前按注册顺序同步调用的监听器。监听器只能原地修改
//! `event.config`，无法中止派发，最后一个修改者的结果生效。

use std::fmt;
use std::sync::Arc;

use crate::ldebug;
use crate::logging::{LogComponent, LogStage};

use super::definition::ProviderDefinition;
use super::resolver::ResolvedConfig;

/// 配置返回前触发的事件
#[derive(Debug)]
pub struct BeforeConfigEvent<'a> {
    pub provider: &'a ProviderDefinition,
    pub config: ResolvedConfig,
}

impl<'a> BeforeConfigEvent<'a> {
    #[must_use]
    pub const fn new(provider: &'a ProviderDefinition, config: ResolvedConfig) -> Self {
        Self { provider, config }
    }

    /// 派发结束后取回最终配置
    #[must_use]
    pub fn into_config(self) -> ResolvedConfig {
        self.config
    }
}

/// 配置监听器
pub trait ConfigListener: Send + Sync {
    fn before_config(&self, event: &mut BeforeConfigEvent<'_>);
}

impl<F> ConfigListener for F
where
    F: Fn(&mut BeforeConfigEvent<'_>) + Send + Sync,
{
    fn before_config(&self, event: &mut BeforeConfigEvent<'_>) {
        self(event);
    }
}

/// 有序监听器列表，在解析器构造时注入
#[derive(Clone, Default)]
pub struct ConfigHook {
    listeners: Vec<Arc<dyn ConfigListener>>,
}

impl ConfigHook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_listener(mut self, listener: impl ConfigListener + 'static) -> Self {
        self.listeners.push(Arc::new(listener));
        self
    }

    #[must_use]
    pub fn with_shared_listener(mut self, listener: Arc<dyn ConfigListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// 依次调用全部监听器
    pub fn dispatch(&self, event: &mut BeforeConfigEvent<'_>) {
        if self.listeners.is_empty() {
            return;
        }

        for listener in &self.listeners {
            listener.before_config(event);
        }

        ldebug!(
            "system",
            LogStage::Hook,
            LogComponent::ConfigHook,
            "before_config",
            "配置覆盖监听器执行完毕",
            provider = event.provider.name,
            listeners = self.listeners.len()
        );
    }
}

impl fmt::Debug for ConfigHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigHook")
            .field("listener_count", &self.listeners.len())
            .finish()
    }
}

impl<L: ConfigListener + 'static> FromIterator<L> for ConfigHook {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        Self {
            listeners: iter
                .into_iter()
                .map(|l| Arc::new(l) as Arc<dyn ConfigListener>)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn event_config() -> ResolvedConfig {
        ResolvedConfig::new("https://site/cb", "id", "secret")
    }

    #[test]
    fn empty_hook_leaves_config_untouched() {
        let provider = ProviderDefinition::new("Google", "google");
        let mut event = BeforeConfigEvent::new(&provider, event_config());
        ConfigHook::new().dispatch(&mut event);
        assert_eq!(event.into_config(), event_config());
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let first = Arc::clone(&calls);
        let second = Arc::clone(&calls);

        let hook = ConfigHook::new()
            .with_listener(move |event: &mut BeforeConfigEvent<'_>| {
                first.lock().unwrap().push("first");
                event.config.credentials.id = "from-first".to_string();
            })
            .with_listener(move |event: &mut BeforeConfigEvent<'_>| {
                second.lock().unwrap().push("second");
                event.config.credentials.id = "from-second".to_string();
            });

        let provider = ProviderDefinition::new("Google", "google");
        let mut event = BeforeConfigEvent::new(&provider, event_config());
        hook.dispatch(&mut event);

        assert_eq!(*calls.lock().unwrap(), vec!["first", "second"]);
        assert_eq!(event.config.credentials.id, "from-second");
    }

    #[test]
    fn listeners_see_provider() {
        let hook = ConfigHook::new().with_listener(|event: &mut BeforeConfigEvent<'_>| {
            if event.provider.name == "Tenant A" {
                event.config.extra.insert("tenant".into(), "a".into());
            }
        });

        let provider = ProviderDefinition::new("Tenant A", "google");
        let mut event = BeforeConfigEvent::new(&provider, event_config());
        hook.dispatch(&mut event);
        assert_eq!(event.config.extra["tenant"], "a");
        assert_eq!(format!("{hook:?}"), "ConfigHook { listener_count: 1 }");
    }

    #[test]
    fn shared_and_collected_listeners() {
        let shared: Arc<dyn ConfigListener> = Arc::new(|event: &mut BeforeConfigEvent<'_>| {
            event.config.include_email = false;
        });
        let hook = ConfigHook::new().with_shared_listener(Arc::clone(&shared));
        assert_eq!(hook.len(), 1);

        let listeners: [fn(&mut BeforeConfigEvent<'_>); 2] = [
            |event| event.config.callback_url.push_str("?a=1"),
            |event| event.config.callback_url.push_str("&b=2"),
        ];
        let collected: ConfigHook = listeners.into_iter().collect();

        let provider = ProviderDefinition::new("Google", "google");
        let mut event = BeforeConfigEvent::new(&provider, event_config());
        hook.dispatch(&mut event);
        collected.dispatch(&mut event);

        assert!(!event.config.include_email);
        assert_eq!(event.config.callback_url, "https://site/cb?a=1&b=2");
    }
}
