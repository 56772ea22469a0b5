use opentelemetry::{
    global,
    metrics::{Counter, Histogram, MeterProvider},
    KeyValue,
};
use prometheus::Registry;

pub struct Metrics {
    request_counter: Counter<u64>,
    search_duration: Histogram<u64>,
    pub registry: Registry,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();
        let exporter = opentelemetry_prometheus::exporter()
            .with_registry(registry.clone())
            .build()
            .unwrap();

        let provider = opentelemetry_sdk::metrics::SdkMeterProvider::builder()
            .with_reader(exporter)
            .build();

        let meter = provider.meter("auth_gateway");
        global::set_meter_provider(provider);

        let request_counter = meter
            .u64_counter("authenticate_requests_total")
            .with_description("Total number of authenticate requests")
            .build();

        // Collection searches are dominated by the round trip to the
        // external service, so the buckets start well above local-call time.
        let search_duration = meter
            .u64_histogram("face_search_duration_ms")
            .with_boundaries(vec![50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0])
            .with_description("Duration of collection searches in milliseconds")
            .build();

        Metrics {
            request_counter,
            search_duration,
            registry,
        }
    }

    pub fn record_request(&self, route: &str) {
        let attributes = vec![KeyValue::new("route", route.to_string())];
        self.request_counter.add(1, &attributes);
    }

    pub fn record_search_duration(&self, duration_ms: u64, route: &str) {
        let attributes = vec![KeyValue::new("route", route.to_string())];
        self.search_duration.record(duration_ms, &attributes);
    }
}
