// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

/// 解析器调用计数指标名称
pub const RESOLVER_CALLS_TOTAL: &str = "sharegraph_resolver_calls_total";

/// 初始化 Prometheus 指标导出
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.address.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}: {}", settings.address, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_counter!(
        RESOLVER_CALLS_TOTAL,
        "Number of resolver calls, labelled by resolver and outcome"
    );
    info!("Metrics exporter listening on {}", addr);
}

/// 记录一次解析器调用结果
pub fn record_resolver_call(resolver: &'static str, outcome: &'static str) {
    counter!(RESOLVER_CALLS_TOTAL, "resolver" => resolver, "outcome" => outcome).increment(1);
}
