use async_trait::async_trait;
use mdns_proto::Label;
use mdns_query::cached_response::FakeCachedResponse;
use mdns_query::{
    CachedResponse, Clock, DispatchPolicy, PlannerInput, QueryBuilder, SocketKey, Transport, TransportError,
};
use similar_asserts::assert_eq;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingTransport {
    sent: Mutex<Vec<(SocketKey, u16, bool, Vec<u8>)>>,
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send_requesting_unicast_response(
        &self,
        socket: SocketKey,
        port: u16,
        packet: &[u8],
        _policy: DispatchPolicy,
    ) -> Result<(), TransportError> {
        self.sent.lock().unwrap().push((socket, port, true, packet.to_vec()));
        Ok(())
    }

    async fn send_requesting_multicast_response(
        &self,
        socket: SocketKey,
        port: u16,
        packet: &[u8],
        _policy: DispatchPolicy,
    ) -> Result<(), TransportError> {
        self.sent.lock().unwrap().push((socket, port, false, packet.to_vec()));
        Ok(())
    }

    fn sockets(&self) -> Vec<SocketKey> {
        vec![SocketKey(0)]
    }
}

struct FixedClock(u64);

impl Clock for FixedClock {
    fn elapsed_millis(&self) -> u64 {
        self.0
    }
}

fn labels(parts: &[&str]) -> Vec<Label> {
    parts.iter().map(|p| Label::from(*p)).collect()
}

#[tokio::test]
async fn pure_discovery_query_reaches_the_transport() {
    let transport: Arc<dyn Transport> = Arc::new(RecordingTransport::default());
    let service_type = labels(&["_printer", "_tcp", "local"]);
    let builder = QueryBuilder::new(11, Arc::downgrade(&transport), DispatchPolicy::default(), &[]);

    let input = PlannerInput {
        services_to_resolve: &[],
        send_discovery_queries: true,
        subtypes: &[],
        service_type_labels: &service_type,
    };
    let outcome = builder.call(&input, &FixedClock(0)).await;
    assert_eq!(outcome.transaction_id, 11);
    assert_eq!(transport.sockets(), vec![SocketKey(0)]);
}

#[tokio::test]
async fn only_txt_stale_emits_exactly_one_txt_question_end_to_end() {
    let transport = Arc::new(RecordingTransport::default());
    let weak: std::sync::Weak<dyn Transport> = Arc::downgrade(&transport);

    let name = labels(&["MyPrinter", "_printer", "_tcp", "local"]);
    let response = FakeCachedResponse {
        service_name: Some(name.clone()),
        has_txt: true,
        has_srv: true,
        txt_needs_renewal: true,
        srv_needs_renewal: false,
        srv_host: Some(labels(&["printer", "local"])),
        has_a: false,
        has_aaaa: false,
    };
    let refs: Vec<&dyn CachedResponse> = vec![&response];

    let builder = QueryBuilder::new(99, weak, DispatchPolicy::default(), &[]);
    let input = PlannerInput {
        services_to_resolve: &refs,
        send_discovery_queries: false,
        subtypes: &[],
        service_type_labels: &[],
    };
    let outcome = builder.call(&input, &FixedClock(0)).await;
    assert_eq!(outcome.transaction_id, 99);

    let sent = transport.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    let (_, _, unicast, packet) = &sent[0];
    assert!(!unicast);
    // header: id=99, qdcount=1
    assert_eq!(&packet[0..2], &[0x00, 0x63]);
    assert_eq!(&packet[4..6], &[0x00, 0x01]);
}

#[tokio::test]
async fn unicast_response_discovery_sets_qclass_bit_and_uses_unicast_path() {
    let transport = Arc::new(RecordingTransport::default());
    let weak: std::sync::Weak<dyn Transport> = Arc::downgrade(&transport);

    let service_type = labels(&["_printer", "_tcp"]);
    let mut builder = QueryBuilder::new(0x1234, weak, DispatchPolicy::default(), &[]);
    builder.expect_unicast_response = true;

    let input = PlannerInput {
        services_to_resolve: &[],
        send_discovery_queries: true,
        subtypes: &[],
        service_type_labels: &service_type,
    };
    let outcome = builder.call(&input, &FixedClock(0)).await;
    assert_eq!(outcome.transaction_id, 0x1234);

    let sent = transport.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    let (_, _, unicast, packet) = &sent[0];
    assert!(unicast);

    // header: id=0x1234, qdcount=1
    assert_eq!(&packet[0..2], &[0x12, 0x34]);
    assert_eq!(&packet[4..6], &[0x00, 0x01]);
    // single question "_printer._tcp", qclass = IN | unicast bit = 0x8001
    let class = u16::from_be_bytes([packet[packet.len() - 2], packet[packet.len() - 1]]);
    assert_eq!(class, 0x8001);
}

#[tokio::test]
async fn empty_plan_never_touches_the_transport() {
    let transport = Arc::new(RecordingTransport::default());
    let weak: std::sync::Weak<dyn Transport> = Arc::downgrade(&transport);

    let response = FakeCachedResponse {
        service_name: Some(labels(&["MyPrinter", "_printer", "_tcp", "local"])),
        has_txt: true,
        has_srv: true,
        txt_needs_renewal: false,
        srv_needs_renewal: false,
        srv_host: Some(labels(&["printer", "local"])),
        has_a: true,
        has_aaaa: true,
    };
    let refs: Vec<&dyn CachedResponse> = vec![&response];

    let builder = QueryBuilder::new(5, weak, DispatchPolicy::default(), &[]);
    let input = PlannerInput {
        services_to_resolve: &refs,
        send_discovery_queries: false,
        subtypes: &[],
        service_type_labels: &[],
    };
    let outcome = builder.call(&input, &FixedClock(0)).await;

    assert_eq!(outcome.transaction_id, mdns_query::INVALID_TRANSACTION_ID);
    assert!(transport.sent.lock().unwrap().is_empty());
}
