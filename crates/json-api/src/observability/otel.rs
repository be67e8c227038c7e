//! OpenTelemetry tracer provider setup.

use std::time::Duration;

use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    Resource,
    trace::{RandomIdGenerator, Sampler, SdkTracerProvider},
};
use uuid::Uuid;

use crate::config::observability::ObservabilityConfig;

use super::ObservabilityError;

/// Namespace shared by every service of the shop.
const SERVICE_NAMESPACE: &str = "pactas-shop";

pub(super) fn build_tracer_provider(
    config: &ObservabilityConfig,
) -> Result<SdkTracerProvider, ObservabilityError> {
    let sample_ratio = sample_ratio(config.otel_trace_sample_ratio)?;

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(config.otel_exporter_otlp_endpoint.clone())
        .with_timeout(Duration::from_secs(
            config.otel_exporter_otlp_timeout_seconds,
        ))
        .build()?;

    Ok(SdkTracerProvider::builder()
        .with_sampler(Sampler::ParentBased(Box::new(Sampler::TraceIdRatioBased(
            sample_ratio,
        ))))
        .with_id_generator(RandomIdGenerator::default())
        .with_resource(service_resource(config))
        .with_batch_exporter(exporter)
        .build())
}

/// Resource describing this shop server instance.
fn service_resource(config: &ObservabilityConfig) -> Resource {
    Resource::builder_empty()
        .with_service_name(config.otel_service_name.clone())
        .with_attributes([
            KeyValue::new("service.version", config.otel_service_version.clone()),
            KeyValue::new("service.namespace", SERVICE_NAMESPACE),
            KeyValue::new("service.instance.id", Uuid::now_v7().to_string()),
            KeyValue::new(
                "deployment.environment.name",
                config.otel_deployment_environment.clone(),
            ),
        ])
        .build()
}

/// Ratio clamped to `[0.0, 1.0]`; NaN is rejected.
fn sample_ratio(ratio: f64) -> Result<f64, ObservabilityError> {
    if ratio.is_nan() {
        return Err(ObservabilityError::InvalidSampleRatio(ratio));
    }

    Ok(ratio.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use opentelemetry::{Key, Value};
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct Args {
        #[command(flatten)]
        observability: ObservabilityConfig,
    }

    #[test]
    fn sample_ratio_is_clamped_to_unit_range() -> TestResult {
        assert!((sample_ratio(1.5)? - 1.0).abs() < f64::EPSILON, "ratio above one clamps to one");
        assert!(sample_ratio(-0.5)?.abs() < f64::EPSILON, "negative ratio clamps to zero");
        assert!((sample_ratio(0.25)? - 0.25).abs() < f64::EPSILON, "ratio in range is kept");

        Ok(())
    }

    #[test]
    fn nan_sample_ratio_is_rejected() {
        let result = sample_ratio(f64::NAN);

        assert!(
            matches!(result, Err(ObservabilityError::InvalidSampleRatio(_))),
            "expected InvalidSampleRatio, got {result:?}"
        );
    }

    #[test]
    fn resource_names_the_shop_service() -> TestResult {
        let args = Args::try_parse_from([
            "pactas-shop-json",
            "--otel-service-name",
            "shop-checkout",
            "--otel-deployment-environment",
            "staging",
        ])?;

        let resource = service_resource(&args.observability);

        assert_eq!(
            resource.get(&Key::from_static_str("service.name")),
            Some(Value::from("shop-checkout")),
            "service name comes from config"
        );
        assert_eq!(
            resource.get(&Key::from_static_str("service.namespace")),
            Some(Value::from(SERVICE_NAMESPACE)),
            "namespace groups the shop services"
        );
        assert_eq!(
            resource.get(&Key::from_static_str("deployment.environment.name")),
            Some(Value::from("staging")),
            "environment comes from config"
        );
        assert!(
            resource
                .get(&Key::from_static_str("service.instance.id"))
                .is_some(),
            "each process gets an instance id"
        );

        Ok(())
    }
}
