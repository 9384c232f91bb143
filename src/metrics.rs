use std::sync::LazyLock;

use prometheus::{register_int_counter_vec_with_registry, IntCounterVec, Registry};

pub static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

pub static GATEWAY_REQUESTS_COUNTER: LazyLock<IntCounterVec> = LazyLock::new(|| {
    register_int_counter_vec_with_registry!(
        "opnsense_gateway_requests",
        "Requests handled by the gateway",
        &["operation", "outcome"],
        &REGISTRY
    )
    .unwrap()
});

pub static OUTGOING_REQUESTS_COUNTER: LazyLock<IntCounterVec> = LazyLock::new(|| {
    register_int_counter_vec_with_registry!(
        "opnsense_outgoing_requests",
        "Requests sent to the firewall",
        &["destination", "path"],
        &REGISTRY
    )
    .unwrap()
});

pub static UPSTREAM_FAILURES_COUNTER: LazyLock<IntCounterVec> = LazyLock::new(|| {
    register_int_counter_vec_with_registry!(
        "opnsense_upstream_failures",
        "Failed firewall requests by kind",
        &["path", "kind"],
        &REGISTRY
    )
    .unwrap()
});
