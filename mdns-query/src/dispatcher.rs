use crate::prelude::{DispatchPolicy, SocketKey, Transport};

/// Standard mDNS port (RFC 6762 §3). Real deployments rarely listen
/// anywhere else, but the engine also walks `emulator_ports` so a test
/// harness or an embedded responder bound to an alternate port is still
/// reachable (§9, Open Question: emulator ports).
pub const MDNS_PORT: u16 = 5353;

/// Fans a single encoded packet out to every socket/port combination a
/// query should reach. One send failure never stops the others; each
/// is logged and the loop continues (§7).
pub struct Dispatcher<'a> {
    pub transport: &'a dyn Transport,
    pub policy: DispatchPolicy,
    pub emulator_ports: &'a [u16],
}

impl<'a> Dispatcher<'a> {
    pub fn new(transport: &'a dyn Transport, policy: DispatchPolicy, emulator_ports: &'a [u16]) -> Self {
        Self {
            transport,
            policy,
            emulator_ports,
        }
    }

    /// Sends `packet` on the standard mDNS port and each configured
    /// emulator port, in that order; for each port, every socket the
    /// transport owns is attempted before moving to the next port
    /// (§4.5, §5), using the unicast or multicast reply path per
    /// `expect_unicast_response`.
    pub async fn dispatch(&self, packet: &[u8], expect_unicast_response: bool) {
        let sockets = self.transport.sockets();
        if sockets.is_empty() {
            tracing::warn!("no sockets available to dispatch query");
            return;
        }

        for &port in std::iter::once(&MDNS_PORT).chain(self.emulator_ports) {
            for &socket in &sockets {
                let result = if expect_unicast_response {
                    self.transport
                        .send_requesting_unicast_response(socket, port, packet, self.policy)
                        .await
                } else {
                    self.transport
                        .send_requesting_multicast_response(socket, port, packet, self.policy)
                        .await
                };

                if let Err(error) = result {
                    tracing::warn!(?socket, port, %error, "failed to send mdns query on socket");
                }
            }
        }
    }
}
