use mdns_proto::label::Label;

/// Splits a dotted name (`"_printer._tcp.local"`) into its label
/// sequence. Empty components (leading/trailing/doubled dots) are
/// dropped rather than surfaced as an error: callers pass in constants
/// or config values, not untrusted wire data.
pub fn labels_from_dotted(value: &str) -> Vec<Label> {
    value
        .split('.')
        .filter(|part| !part.is_empty())
        .map(Label::from)
        .collect()
}
