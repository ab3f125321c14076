pub mod builder;
pub mod cached_response;
pub mod clock;
pub mod dispatcher;
pub mod naming;
pub mod planner;
pub mod prelude;
pub mod thread_affinity;

pub use builder::{QueryBuilder, QueryOutcome, INVALID_TRANSACTION_ID};
pub use cached_response::CachedResponse;
pub use clock::{Clock, MonotonicClock};
pub use dispatcher::{Dispatcher, MDNS_PORT};
pub use planner::{plan_questions, PlannerInput, Question};
pub use prelude::{DispatchPolicy, SocketKey, Transport, TransportError};
