use async_trait::async_trait;

use mdns_query::{DispatchPolicy, SocketKey, Transport, TransportError};

use crate::prelude::Family;
use crate::socket::BoundSocket;

/// Sends mDNS query packets over one socket per configured interface
/// (§6). Holds no receive path: decoding responses is outside this
/// engine's scope, left to whatever cache owns the `CachedResponse`
/// view the planner reads.
#[derive(Debug)]
pub struct UdpTransport {
    sockets: Vec<BoundSocket>,
}

impl UdpTransport {
    pub fn new(sockets: Vec<BoundSocket>) -> Self {
        Self { sockets }
    }

    fn find(&self, key: SocketKey) -> Option<&BoundSocket> {
        self.sockets.iter().find(|s| s.key == key)
    }

    /// Interprets `only_use_ipv6_on_ipv6_only_networks` (§4.5, §6): when
    /// set and this transport also owns a working IPv6 socket, the
    /// redundant IPv4 attempt on an IPv6-preferred network is skipped
    /// rather than sent. A transport with no IPv6 socket at all sends
    /// IPv4 regardless, since skipping it would leave nothing to send.
    fn should_skip(&self, bound: &BoundSocket, policy: DispatchPolicy) -> bool {
        policy.only_use_ipv6_on_ipv6_only_networks
            && bound.family == Family::V4
            && self.sockets.iter().any(|s| s.family == Family::V6)
    }

    async fn send(
        &self,
        socket: SocketKey,
        port: u16,
        packet: &[u8],
        policy: DispatchPolicy,
    ) -> Result<(), TransportError> {
        let bound = self
            .find(socket)
            .ok_or_else(|| TransportError(format!("unknown socket {socket:?}")))?;

        if self.should_skip(bound, policy) {
            tracing::debug!(?socket, "skipping ipv4 send on ipv6-preferred network");
            return Ok(());
        }

        let destination = bound.group_addr(port);
        tracing::debug!(?socket, %destination, "sending mdns query");
        bound
            .socket
            .send_to(packet, destination)
            .await
            .map(|_| ())
            .map_err(|error| TransportError(error.to_string()))
    }
}

#[async_trait]
impl Transport for UdpTransport {
    async fn send_requesting_unicast_response(
        &self,
        socket: SocketKey,
        port: u16,
        packet: &[u8],
        policy: DispatchPolicy,
    ) -> Result<(), TransportError> {
        // The QU bit requesting a unicast reply lives in the packet's
        // question class (set by the query builder); the query itself
        // still goes to the multicast group (RFC 6762 §5.4).
        self.send(socket, port, packet, policy).await
    }

    async fn send_requesting_multicast_response(
        &self,
        socket: SocketKey,
        port: u16,
        packet: &[u8],
        policy: DispatchPolicy,
    ) -> Result<(), TransportError> {
        self.send(socket, port, packet, policy).await
    }

    fn sockets(&self) -> Vec<SocketKey> {
        self.sockets.iter().map(|s| s.key).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[tokio::test]
    async fn sending_on_unknown_socket_reports_error() {
        let transport = UdpTransport::new(Vec::new());
        let result = transport
            .send_requesting_multicast_response(SocketKey(1), 5353, b"x", DispatchPolicy::default())
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn sockets_lists_every_bound_key() {
        let bound = BoundSocket::bind(SocketKey(1), Ipv4Addr::LOCALHOST.into())
            .await
            .unwrap();
        let transport = UdpTransport::new(vec![bound]);
        assert_eq!(transport.sockets(), vec![SocketKey(1)]);
    }

    #[tokio::test]
    async fn ipv6_only_policy_skips_ipv4_socket_when_ipv6_is_also_bound() {
        let v4 = BoundSocket::bind(SocketKey(1), Ipv4Addr::LOCALHOST.into())
            .await
            .unwrap();
        let v6 = BoundSocket::bind(SocketKey(2), Ipv6Addr::LOCALHOST.into())
            .await
            .unwrap();
        let transport = UdpTransport::new(vec![v4, v6]);
        let policy = DispatchPolicy {
            only_use_ipv6_on_ipv6_only_networks: true,
        };

        // Skipped: returns Ok without touching the socket.
        let result = transport
            .send_requesting_multicast_response(SocketKey(1), 5353, b"x", policy)
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn ipv4_only_socket_still_sends_under_the_policy() {
        let v4 = BoundSocket::bind(SocketKey(1), Ipv4Addr::LOCALHOST.into())
            .await
            .unwrap();
        let transport = UdpTransport::new(vec![v4]);
        let policy = DispatchPolicy {
            only_use_ipv6_on_ipv6_only_networks: true,
        };

        // No IPv6 socket to prefer, so the only socket still gets used.
        // send_to on loopback with no listener still succeeds for UDP.
        let result = transport
            .send_requesting_multicast_response(SocketKey(1), 5353, b"x", policy)
            .await;
        assert!(result.is_ok());
    }
}
