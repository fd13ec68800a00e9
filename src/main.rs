//! SOS Network Registrar - Main Entry Point

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sos_network_registrar::application::use_cases::networks::EnsureNetworkRegisteredUseCase;
use sos_network_registrar::domain::models::{IdentifierDeriver, OfferingScope, SosEndpoints};
use sos_network_registrar::infrastructure::driven_adapters::config::AppConfig;
use sos_network_registrar::infrastructure::driven_adapters::{
    ReqwestSosTransport, TracingRegistrationObserver, XmlRequestBuilder,
};
use sos_network_registrar::infrastructure::driving_adapters::manifest::load_manifest;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sos_network_registrar=info".into());
    if config.logging.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
    tracing::info!(sos_url = %config.sos.url, "Configuration loaded successfully");

    let endpoints = SosEndpoints::from_sos_url(config.sos.url.clone())?;
    let deriver = IdentifierDeriver::new(config.identifiers.authority.clone())?;
    let networks = load_manifest(&config.registration.manifest_path)?;

    // Create adapters
    let transport = Arc::new(ReqwestSosTransport::new(config.sos.request_timeout())?);
    let request_builder = Arc::new(XmlRequestBuilder::new());
    let observer = Arc::new(TracingRegistrationObserver);

    // Create use case
    let use_case = EnsureNetworkRegisteredUseCase::new(
        transport,
        request_builder,
        observer,
        deriver,
        endpoints,
    );

    let scope = OfferingScope::from_all_procedures(config.registration.all_procedures);
    let mut failed = Vec::new();
    for network in &networks {
        let report = use_case.execute(network, &config.publisher, scope).await?;
        if !report.is_registered() {
            failed.push(report.identifiers.network_id.to_string());
        }
    }

    tracing::info!(
        total = networks.len(),
        failed = failed.len(),
        "Registration run complete"
    );

    if !failed.is_empty() {
        anyhow::bail!("networks not fully registered: {}", failed.join(", "));
    }

    Ok(())
}
