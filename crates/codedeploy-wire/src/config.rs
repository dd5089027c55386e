//! Request construction configuration
//!
//! # Features
//! - `serde` support for serialization/deserialization
//! - Default values for every parameter
//! - Static configuration via [`StaticConfigProvider`]
//! - Hot-reload configuration via [`HotReloadConfigProvider`]
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use codedeploy_wire::config::{WireConfig, WireConfigProvider, StaticConfigProvider, HotReloadConfigProvider};
//!
//! let config = WireConfig::default();
//! assert_eq!(config.target_prefix(), "CodeDeploy_20141006");
//!
//! let static_provider = StaticConfigProvider::new(Arc::new(config));
//! assert_eq!(static_provider.snapshot().max_depth, 32);
//!
//! let hot_reload_provider = HotReloadConfigProvider::default();
//! let mut new_config = WireConfig::default();
//! new_config.max_depth = 8;
//! hot_reload_provider.update(Arc::new(new_config));
//! assert_eq!(hot_reload_provider.snapshot().max_depth, 8);
//! ```

use crate::header::AMZ_JSON_1_1;
use crate::rules::CaseRuleTable;

use std::sync::Arc;

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};

/// Configuration provider.
///
/// `snapshot` returns an `Arc<WireConfig>` so that one request is built from
/// one consistent set of values.
pub trait WireConfigProvider: Send + Sync + 'static {
    fn snapshot(&self) -> Arc<WireConfig>;
}

/// Request construction configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct WireConfig {
    /// Service namespace of the routing header.
    ///
    /// Default: `CodeDeploy`
    pub namespace: String,

    /// API version of the routing header.
    ///
    /// Default: `20141006`
    pub api_version: String,

    /// Content type of every request.
    ///
    /// Default: `application/x-amz-json-1.1`
    pub content_type: String,

    /// Routing identifier handed to the transport layer.
    ///
    /// Default: `codedeploy`
    pub service: String,

    /// Maximum nesting depth of a parameter tree.
    ///
    /// Default: 32
    pub max_depth: usize,

    /// Casing overrides.
    ///
    /// Default: [`CaseRuleTable::codedeploy`]
    pub rules: CaseRuleTable,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            namespace: "CodeDeploy".to_owned(),
            api_version: "20141006".to_owned(),
            content_type: AMZ_JSON_1_1.to_owned(),
            service: "codedeploy".to_owned(),
            max_depth: 32,
            rules: CaseRuleTable::codedeploy(),
        }
    }
}

impl WireConfig {
    /// `{namespace}_{api_version}`, the prefix of every routing header value
    #[must_use]
    pub fn target_prefix(&self) -> String {
        format!("{}_{}", self.namespace, self.api_version)
    }
}

/// Static configuration provider.
#[derive(Debug)]
pub struct StaticConfigProvider {
    inner: Arc<WireConfig>,
}

impl StaticConfigProvider {
    #[must_use]
    pub fn new(config: Arc<WireConfig>) -> Self {
        Self { inner: config }
    }
}

impl Default for StaticConfigProvider {
    fn default() -> Self {
        Self::new(Arc::new(WireConfig::default()))
    }
}

impl WireConfigProvider for StaticConfigProvider {
    fn snapshot(&self) -> Arc<WireConfig> {
        Arc::clone(&self.inner)
    }
}

/// Hot-reload configuration provider.
///
/// Reads are lock-free; [`update`](Self::update) swaps the whole configuration atomically.
#[derive(Debug)]
pub struct HotReloadConfigProvider {
    inner: ArcSwap<WireConfig>,
}

impl HotReloadConfigProvider {
    #[must_use]
    pub fn new(config: Arc<WireConfig>) -> Self {
        Self {
            inner: ArcSwap::from(config),
        }
    }

    pub fn update(&self, config: Arc<WireConfig>) {
        self.inner.store(config);
    }
}

impl Default for HotReloadConfigProvider {
    fn default() -> Self {
        Self::new(Arc::new(WireConfig::default()))
    }
}

impl WireConfigProvider for HotReloadConfigProvider {
    fn snapshot(&self) -> Arc<WireConfig> {
        self.inner.load_full()
    }
}
