//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the explorer
//! web shell. The values mirror the operational parameters of the deployed
//! network; everything here is a compiled default unless the loader applies
//! an environment override.

use serde::{Deserialize, Serialize};
use url::Url;

/// Hardcoded fallback chain node used when no override is supplied.
pub const RESERVED_ENDPOINT: &str = "http://172.20.142.169:18888";

/// Root configuration for the explorer web shell.
///
/// Immutable after [`crate::config::load`] returns; shared via `Arc` to every
/// subsystem that needs it.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Production mode flag.
    pub production: bool,

    /// Fixed-point scale for token amounts (10^8 = 8 decimal places).
    pub amount_scale: u64,

    /// Native token symbol.
    pub coin_symbol: String,

    /// Cron aggregation settings (actions, transactions, accounts, analytics).
    pub cron: CronConfig,

    /// Run the private-network stats daemon for Actions and Accounts.
    pub private_network_stats: bool,

    /// Reserved chain nodes, in priority order. Must be non-empty.
    pub endpoints: Vec<Url>,

    /// Options handed to the chain RPC client.
    pub chain_client: ChainClientConfig,

    /// Source URL for the producer list.
    pub producer_list_url: Url,

    /// API version segment.
    pub api_version: String,

    /// Refresh intervals for the polling subsystems.
    pub intervals: IntervalConfig,

    /// Buffer and concurrency limits for the aggregation subsystems.
    pub limits: LimitConfig,

    /// Listener configuration.
    pub listener: ListenerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let endpoints: Vec<Url> = vec![reserved_endpoint()];
        Self {
            production: true,
            amount_scale: 100_000_000,
            coin_symbol: "AMAX".to_string(),
            cron: CronConfig::default(),
            private_network_stats: false,
            // The chain client always binds to the first reserved node.
            chain_client: ChainClientConfig::for_endpoint(endpoints[0].clone()),
            endpoints,
            producer_list_url: reserved_endpoint(),
            api_version: "v1".to_string(),
            intervals: IntervalConfig::default(),
            limits: LimitConfig::default(),
            listener: ListenerConfig::default(),
        }
    }
}

fn reserved_endpoint() -> Url {
    RESERVED_ENDPOINT
        .parse()
        .expect("reserved endpoint is a valid URL")
}

/// Cron aggregation settings.
///
/// The aggregation pipeline is a separate service; this section only carries
/// its switches through to it.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CronConfig {
    /// Enable the aggregation of main stats.
    pub enabled: bool,

    /// API endpoint of the aggregation service, from the environment.
    pub api_url: Option<Url>,
}

impl Default for CronConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: None,
        }
    }
}

/// Options handed to the chain RPC client.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChainClientConfig {
    /// Chain identifier the client must be talking to.
    pub chain_id: String,

    /// Signing key material. Empty in the read-only deployment.
    pub key_material: String,

    /// HTTP endpoint the client connects to. Always the first entry of
    /// [`AppConfig::endpoints`].
    pub http_endpoint: Url,

    /// Transaction expiry in seconds.
    pub expire_secs: u64,

    /// Broadcast signed transactions.
    pub broadcast: bool,

    /// Verbose client diagnostics.
    pub debug: bool,

    /// Sign transactions before broadcast.
    pub sign: bool,
}

impl ChainClientConfig {
    /// Client options bound to the given node.
    pub fn for_endpoint(http_endpoint: Url) -> Self {
        Self {
            chain_id: "208dacab3cd2e181c86841613cf05d9c60786c677e4ce86b266d0a58884968f7"
                .to_string(),
            key_material: String::new(),
            http_endpoint,
            expire_secs: 60,
            broadcast: true,
            debug: false,
            sign: true,
        }
    }
}

impl Default for ChainClientConfig {
    fn default() -> Self {
        Self::for_endpoint(reserved_endpoint())
    }
}

/// Refresh intervals for the polling subsystems, in milliseconds.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IntervalConfig {
    /// RAM market refresh.
    pub ram_update_ms: u64,

    /// History stats refresh.
    pub history_update_ms: u64,

    /// Mainpage block list refresh.
    pub block_update_ms: u64,

    /// TPS gauge refresh.
    pub tps_update_ms: u64,
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self {
            ram_update_ms: 5 * 60 * 1000,
            history_update_ms: 5 * 60 * 1000,
            block_update_ms: 900,
            tps_update_ms: 1000,
        }
    }
}

/// Buffer and concurrency limits for the aggregation subsystems.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitConfig {
    /// Maximum buffer size for aggregation child processes, in bytes.
    pub max_child_buffer_bytes: u64,

    /// Blocks shown on the mainpage.
    pub mainpage_block_count: u32,

    /// Maximum concurrent async jobs.
    pub max_async_concurrency: u32,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_child_buffer_bytes: 500_000,
            mainpage_block_count: 10,
            max_async_concurrency: 30,
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}
