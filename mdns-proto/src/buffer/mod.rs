pub mod writer;

/// Conventional ceiling for an mDNS datagram. Not mandated by RFC 6762
/// itself, but matches the jumbo-packet bound used by the mDNS
/// responders this engine talks to, so a writer that exceeds it fails
/// fast instead of producing something no real responder would
/// reassemble.
pub const MAX_PACKET_SIZE: usize = 9000;

pub use writer::{PacketWriter, WriterError};
