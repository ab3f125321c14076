use crate::buffer::{PacketWriter, WriterError};

/// Standard query: QR=0, OPCODE=0, no other bits set (RFC 6762 §18).
pub const FLAGS_QUERY: u16 = 0x0000;

/// The fixed 12-byte header of a DNS query message (RFC 1035 §4.1.1).
/// `ancount`/`nscount`/`arcount` are always zero for a query this
/// engine emits -- it never carries known-answer records in the
/// answer section, only questions.
#[derive(Debug, Clone, Copy)]
pub struct Header {
    pub id: u16,
    pub question_count: u16,
}

impl Header {
    pub fn write(&self, writer: &mut PacketWriter) -> Result<(), WriterError> {
        writer.write_u16(self.id)?;
        writer.write_u16(FLAGS_QUERY)?;
        writer.write_u16(self.question_count)?;
        writer.write_u16(0)?; // ancount
        writer.write_u16(0)?; // nscount
        writer.write_u16(0)?; // arcount
        Ok(())
    }
}
