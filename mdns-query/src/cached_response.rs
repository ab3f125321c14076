use mdns_proto::label::Label;

/// Read-only view of one previously-seen service response, as held by
/// the response cache this engine treats as an external collaborator
/// (§3). The planner never mutates this view and never decodes
/// responses itself.
pub trait CachedResponse {
    /// The service instance name (e.g. `MyPrinter._printer._tcp.local`),
    /// or `None` if this cache entry has not resolved a name yet.
    fn service_name(&self) -> Option<&[Label]>;

    fn has_txt(&self) -> bool;
    fn has_srv(&self) -> bool;
    fn has_a(&self) -> bool;
    fn has_aaaa(&self) -> bool;

    /// True when the cached TXT record's remaining TTL has fallen below
    /// the renewal threshold as of `now_millis` (monotonic, from the
    /// same [`crate::clock::Clock`] passed to the planner).
    fn txt_needs_renewal(&self, now_millis: u64) -> bool;

    /// Same as `txt_needs_renewal`, for the SRV record.
    fn srv_needs_renewal(&self, now_millis: u64) -> bool;

    /// The SRV target host, if an SRV record is cached.
    fn srv_host(&self) -> Option<&[Label]>;
}

/// Hand-rolled test double standing in for a real cache entry, used by
/// the planner's own unit tests and by downstream crates exercising
/// the planner against synthetic state.
#[derive(Debug, Clone, Default)]
pub struct FakeCachedResponse {
    pub service_name: Option<Vec<Label>>,
    pub has_txt: bool,
    pub has_srv: bool,
    pub has_a: bool,
    pub has_aaaa: bool,
    pub txt_needs_renewal: bool,
    pub srv_needs_renewal: bool,
    pub srv_host: Option<Vec<Label>>,
}

impl CachedResponse for FakeCachedResponse {
    fn service_name(&self) -> Option<&[Label]> {
        self.service_name.as_deref()
    }

    fn has_txt(&self) -> bool {
        self.has_txt
    }

    fn has_srv(&self) -> bool {
        self.has_srv
    }

    fn has_a(&self) -> bool {
        self.has_a
    }

    fn has_aaaa(&self) -> bool {
        self.has_aaaa
    }

    fn txt_needs_renewal(&self, _now_millis: u64) -> bool {
        self.txt_needs_renewal
    }

    fn srv_needs_renewal(&self, _now_millis: u64) -> bool {
        self.srv_needs_renewal
    }

    fn srv_host(&self) -> Option<&[Label]> {
        self.srv_host.as_deref()
    }
}
