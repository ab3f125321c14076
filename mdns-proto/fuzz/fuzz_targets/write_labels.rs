#![no_main]

use mdns_proto::buffer::PacketWriter;
use mdns_proto::label::Label;

libfuzzer_sys::fuzz_target!(|labels: Vec<Label>| {
    let mut writer = PacketWriter::new();
    // Any outcome other than a panic is acceptable: either the labels
    // encode cleanly or write_labels reports EmptyLabel/LabelTooLong/EndOfBuffer.
    let _ = writer.write_labels(&labels);
});
