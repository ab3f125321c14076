use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tokio::net::UdpSocket;

use crate::prelude::{Family, MDNS_IPV4_GROUP, MDNS_IPV6_GROUP};
use mdns_query::SocketKey;

/// One bound interface socket this transport can send through.
#[derive(Debug)]
pub struct BoundSocket {
    pub key: SocketKey,
    pub family: Family,
    pub socket: Arc<UdpSocket>,
}

impl BoundSocket {
    /// Binds a socket on `interface` (its address determines the
    /// family) to the ephemeral port, ready for sending (§6).
    pub async fn bind(key: SocketKey, interface: IpAddr) -> std::io::Result<Self> {
        let family = match interface {
            IpAddr::V4(_) => Family::V4,
            IpAddr::V6(_) => Family::V6,
        };
        let bind_addr = SocketAddr::new(interface, 0);
        let socket = UdpSocket::bind(bind_addr).await?;
        Ok(Self {
            key,
            family,
            socket: Arc::new(socket),
        })
    }

    pub fn group_addr(&self, port: u16) -> SocketAddr {
        match self.family {
            Family::V4 => SocketAddr::new(IpAddr::V4(MDNS_IPV4_GROUP), port),
            Family::V6 => SocketAddr::new(IpAddr::V6(MDNS_IPV6_GROUP), port),
        }
    }
}
