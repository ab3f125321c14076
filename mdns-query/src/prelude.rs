use async_trait::async_trait;

/// Opaque handle identifying one underlying network interface/socket
/// pair a [`Transport`] owns. The engine never interprets the value; it
/// only threads it back through `Transport` calls and log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SocketKey(pub u32);

/// Governs which address families a transport is asked to use on a
/// given network (§6). An IPv6-only network still accepts IPv4-only
/// peers on the LAN in some deployments, so this is a toggle rather
/// than a hard rule baked into the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchPolicy {
    pub only_use_ipv6_on_ipv6_only_networks: bool,
}

/// Everything the query engine needs from the network layer. A single
/// packet is hand-delivered once per destination the dispatcher
/// selects; `Transport` implementations own the actual sockets and any
/// per-network bookkeeping (§6, §7).
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `packet` to `socket` expecting a unicast reply (QU question,
    /// destination is the mDNS group's usual port but sender requests a
    /// direct reply). `policy` is forwarded verbatim from the Builder's
    /// caller and interpreted entirely by the transport (§4.5); the
    /// dispatcher never inspects it itself.
    async fn send_requesting_unicast_response(
        &self,
        socket: SocketKey,
        port: u16,
        packet: &[u8],
        policy: DispatchPolicy,
    ) -> Result<(), TransportError>;

    /// Send `packet` to the mDNS multicast group on `socket`/`port`.
    async fn send_requesting_multicast_response(
        &self,
        socket: SocketKey,
        port: u16,
        packet: &[u8],
        policy: DispatchPolicy,
    ) -> Result<(), TransportError>;

    /// Every socket this transport currently owns, grouped by family
    /// availability the dispatcher needs to decide fan-out (§6).
    fn sockets(&self) -> Vec<SocketKey>;
}

/// Transport-layer failure, reported but never fatal to a query: a send
/// failure on one interface must not stop the others (§7).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError(pub String);

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "transport error: {}", self.0)
    }
}

impl std::error::Error for TransportError {}
