use std::collections::HashMap;
use std::fmt;

use crate::label::{to_dns_lowercase, Label};

use super::MAX_PACKET_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterError {
    EndOfBuffer,
    EmptyLabel,
    LabelTooLong(usize),
}

impl fmt::Display for WriterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfBuffer => write!(f, "packet exceeds {MAX_PACKET_SIZE} bytes"),
            Self::EmptyLabel => write!(f, "zero-length label in the middle of a name"),
            Self::LabelTooLong(len) => write!(f, "label of {len} bytes exceeds the 63-byte limit"),
        }
    }
}

impl std::error::Error for WriterError {}

impl From<WriterError> for std::io::Error {
    fn from(value: WriterError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidData, value.to_string())
    }
}

/// Append-only DNS message buffer with label-compression bookkeeping.
///
/// One writer backs exactly one packet: `get_packet` consumes it.
#[derive(Debug, Default)]
pub struct PacketWriter {
    buf: Vec<u8>,
    // Canonical (DNS-lowercased) label suffix -> the byte offset it was
    // first written at. Only suffixes written below the 14-bit pointer
    // range are worth recording.
    suffix_offsets: HashMap<Vec<String>, u16>,
}

impl PacketWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pos(&self) -> usize {
        self.buf.len()
    }

    fn push(&mut self, byte: u8) -> Result<(), WriterError> {
        if self.buf.len() >= MAX_PACKET_SIZE {
            return Err(WriterError::EndOfBuffer);
        }
        self.buf.push(byte);
        Ok(())
    }

    pub fn write_u16(&mut self, value: u16) -> Result<(), WriterError> {
        self.push((value >> 8) as u8)?;
        self.push((value & 0xFF) as u8)?;
        Ok(())
    }

    fn write_label_bytes(&mut self, label: &Label) -> Result<(), WriterError> {
        let bytes = label.as_bytes();
        if bytes.is_empty() {
            return Err(WriterError::EmptyLabel);
        }
        if bytes.len() > 0x3F {
            return Err(WriterError::LabelTooLong(bytes.len()));
        }
        self.push(bytes.len() as u8)?;
        for b in bytes {
            self.push(*b)?;
        }
        Ok(())
    }

    fn canonical_suffix(labels: &[Label]) -> Vec<String> {
        labels
            .iter()
            .map(|label| label.as_str().chars().map(to_dns_lowercase).collect())
            .collect()
    }

    /// Encode a label sequence, back-referencing any previously written
    /// suffix that compares equal under DNS-case-insensitive rules.
    ///
    /// A rejected empty-name question (e.g. from a malformed service
    /// type whose split produced no labels) surfaces as `EmptyLabel`
    /// here, which the Query Builder treats as an encoding overflow.
    pub fn write_labels(&mut self, labels: &[Label]) -> Result<(), WriterError> {
        if labels.is_empty() {
            return Err(WriterError::EmptyLabel);
        }
        self.write_suffix(labels)
    }

    fn write_suffix(&mut self, labels: &[Label]) -> Result<(), WriterError> {
        if labels.is_empty() {
            return self.push(0);
        }

        let key = Self::canonical_suffix(labels);
        if let Some(&offset) = self.suffix_offsets.get(&key) {
            return self.write_u16(0xC000 | offset);
        }

        let offset = self.pos();
        if offset < 0x4000 {
            self.suffix_offsets.insert(key, offset as u16);
        }

        self.write_label_bytes(&labels[0])?;
        self.write_suffix(&labels[1..])
    }

    /// Finalize the packet. The writer is consumed: it is single-use by
    /// construction, matching the Query Builder's one-shot lifecycle.
    pub fn get_packet(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn labels(parts: &[&str]) -> Vec<Label> {
        parts.iter().map(|p| Label::from(*p)).collect()
    }

    #[test]
    fn rejects_empty_name() {
        let mut writer = PacketWriter::new();
        assert_eq!(writer.write_labels(&[]), Err(WriterError::EmptyLabel));
    }

    #[test]
    fn writes_simple_name() {
        let mut writer = PacketWriter::new();
        writer.write_labels(&labels(&["www", "foo", "bar"])).unwrap();
        let packet = writer.get_packet();
        assert_eq!(
            packet,
            vec![3, b'w', b'w', b'w', 3, b'f', b'o', b'o', 3, b'b', b'a', b'r', 0]
        );
    }

    #[test]
    fn compresses_shared_suffix() {
        let mut writer = PacketWriter::new();
        writer.write_labels(&labels(&["www", "foo", "bar"])).unwrap();
        writer.write_labels(&labels(&["what", "foo", "bar"])).unwrap();
        let packet = writer.get_packet();
        // second name: len('what')=4, 'w','h','a','t', then pointer to offset 4 (start of "foo.bar")
        assert_eq!(packet[13], 4);
        assert_eq!(&packet[14..18], b"what");
        assert_eq!(packet[18], 0xC0);
        assert_eq!(packet[19], 0x04);
        assert_eq!(packet.len(), 20);
    }

    #[test]
    fn compression_is_dns_case_insensitive() {
        let mut writer = PacketWriter::new();
        writer.write_labels(&labels(&["Foo", "Bar"])).unwrap();
        writer.write_labels(&labels(&["foo", "bar"])).unwrap();
        let packet = writer.get_packet();
        // second write should be a bare 2-byte pointer back to offset 0
        assert_eq!(packet.len(), "Foo".len() + "Bar".len() + 4 + 2);
        assert_eq!(&packet[packet.len() - 2..], &[0xC0, 0x00]);
    }

    #[test]
    fn rejects_oversized_label() {
        let mut writer = PacketWriter::new();
        let long_label = Label::from("a".repeat(64).as_str());
        assert_eq!(
            writer.write_labels(&[long_label]),
            Err(WriterError::LabelTooLong(64))
        );
    }

    #[test]
    fn pointer_never_exceeds_14_bit_range() {
        let mut writer = PacketWriter::new();
        // first label written at offset 0, well under 0x4000
        writer.write_labels(&labels(&["local"])).unwrap();
        assert!(writer.suffix_offsets.values().all(|&off| (off as usize) < 0x4000));
    }

    #[test]
    fn fails_when_buffer_is_exhausted() {
        let mut writer = PacketWriter::new();
        writer.buf = vec![0u8; super::MAX_PACKET_SIZE];
        assert_eq!(writer.write_u16(1), Err(WriterError::EndOfBuffer));
    }
}
