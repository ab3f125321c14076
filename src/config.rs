use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::path::Path;

/// Top-level configuration, loaded once at startup (§A.3). Mirrors the
/// teacher's `Config::load`: a TOML file overlaid with environment
/// variables sharing its field names.
#[derive(Debug, serde::Deserialize)]
pub struct QuerierConfig {
    /// Additional ports, beyond the standard mDNS port, a query is also
    /// sent to (§6, "Additional emulator ports").
    #[serde(default)]
    pub emulator_ports: Vec<u16>,
    #[serde(default = "QuerierConfig::default_bind_v4")]
    pub bind_v4: IpAddr,
    #[serde(default = "QuerierConfig::default_bind_v6")]
    pub bind_v6: IpAddr,
    /// Percentage of a record's original TTL remaining below which it
    /// is considered due for renewal (§9, Open Question: renewal
    /// threshold). Consumed by the `CachedResponse` implementation a
    /// caller supplies, not by the planner itself.
    #[serde(default = "QuerierConfig::default_renewal_threshold_percent")]
    pub renewal_threshold_percent: u8,
}

impl Default for QuerierConfig {
    fn default() -> Self {
        Self {
            emulator_ports: Vec::new(),
            bind_v4: Self::default_bind_v4(),
            bind_v6: Self::default_bind_v6(),
            renewal_threshold_percent: Self::default_renewal_threshold_percent(),
        }
    }
}

impl QuerierConfig {
    fn default_bind_v4() -> IpAddr {
        IpAddr::V4(Ipv4Addr::UNSPECIFIED)
    }

    fn default_bind_v6() -> IpAddr {
        IpAddr::V6(Ipv6Addr::UNSPECIFIED)
    }

    fn default_renewal_threshold_percent() -> u8 {
        50
    }

    pub fn load(path: &Path) -> Self {
        let conf = ::config::Config::builder()
            .add_source(::config::File::from(path).required(false))
            .add_source(::config::Environment::default().separator("_"))
            .build()
            .expect("unable to build configuration");
        conf.try_deserialize()
            .expect("configuration format invalid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_no_emulator_ports_and_fifty_percent_threshold() {
        let config = QuerierConfig::default();
        assert!(config.emulator_ports.is_empty());
        assert_eq!(config.renewal_threshold_percent, 50);
    }
}
