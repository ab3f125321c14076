pub mod buffer;
pub mod label;
pub mod packet;

pub use buffer::{PacketWriter, WriterError};
pub use label::Label;
