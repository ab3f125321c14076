use clap::Args;
use mdns_proto::Label;
use mdns_query::naming::labels_from_dotted;
use mdns_query::{DispatchPolicy, MonotonicClock, PlannerInput, QueryBuilder, Transport};
use mdns_transport::{BoundSocket, UdpTransport};
use std::sync::Arc;

/// Sends a one-shot mDNS discovery query for a service type
#[derive(Args, Debug)]
pub struct Command {
    /// Dot-separated service type, e.g. "_printer._tcp.local"
    #[arg(long)]
    service_type: String,
    /// Repeatable RFC 6763 subtype label, e.g. "_universal"
    #[arg(long = "subtype")]
    subtypes: Vec<String>,
}

impl Command {
    pub async fn run(&self, config: crate::config::QuerierConfig) {
        tracing::info!("preparing discovery query");

        let sockets = match build_sockets(&config).await {
            Ok(sockets) => sockets,
            Err(error) => {
                tracing::error!("unable to bind transport sockets: {error}");
                return;
            }
        };

        let transport: Arc<dyn Transport> = Arc::new(UdpTransport::new(sockets));
        let service_type_labels = labels_from_dotted(&self.service_type);
        let subtypes: Vec<Label> = self.subtypes.iter().map(|s| Label::from(s.as_str())).collect();

        let input = PlannerInput {
            services_to_resolve: &[],
            send_discovery_queries: true,
            subtypes: &subtypes,
            service_type_labels: &service_type_labels,
        };

        let clock = MonotonicClock::new();
        let builder = QueryBuilder::new(1, Arc::downgrade(&transport), DispatchPolicy::default(), &config.emulator_ports);
        let outcome = builder.call(&input, &clock).await;

        println!(
            "sent query, transaction_id={} subtypes={:?}",
            outcome.transaction_id, outcome.subtypes
        );
    }
}

async fn build_sockets(config: &crate::config::QuerierConfig) -> std::io::Result<Vec<BoundSocket>> {
    let mut sockets = Vec::new();
    for (index, interface) in [config.bind_v4, config.bind_v6].into_iter().enumerate() {
        let bound = BoundSocket::bind(mdns_query::SocketKey(index as u32), interface).await?;
        sockets.push(bound);
    }
    Ok(sockets)
}
