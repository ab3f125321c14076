use crate::buffer::{PacketWriter, WriterError};
use crate::label::Label;

use super::RecordType;

/// One `(name, type)` entry of a query plan, written as
/// `<labels> <qtype u16> <qclass u16>` (RFC 1035 §4.1.2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: Vec<Label>,
    pub qtype: RecordType,
}

impl Question {
    pub fn new(name: Vec<Label>, qtype: RecordType) -> Self {
        Self { name, qtype }
    }

    pub fn write(&self, writer: &mut PacketWriter, qclass: u16) -> Result<(), WriterError> {
        writer.write_labels(&self.name)?;
        writer.write_u16(self.qtype)?;
        writer.write_u16(qclass)?;
        Ok(())
    }
}
