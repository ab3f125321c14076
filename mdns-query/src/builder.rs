use std::sync::Weak;

use mdns_proto::packet::header::Header;
use mdns_proto::packet::question::Question as WireQuestion;
use mdns_proto::packet::qclass;
use mdns_proto::PacketWriter;

use crate::dispatcher::Dispatcher;
use crate::planner::{plan_questions, PlannerInput, Question};
use crate::prelude::{DispatchPolicy, Transport};
use crate::thread_affinity::OwnerThread;

/// Transaction id 0 is reserved: this engine never issues it to a real
/// query, so a caller can always tell a `QueryOutcome` apart from "no
/// query was sent" (§9, Open Question: sentinel collision).
pub const INVALID_TRANSACTION_ID: u16 = 0;

/// Result of one `QueryBuilder::call()` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    pub transaction_id: u16,
    pub subtypes: Vec<String>,
}

impl QueryOutcome {
    fn invalid() -> Self {
        Self {
            transaction_id: INVALID_TRANSACTION_ID,
            subtypes: Vec::new(),
        }
    }
}

/// One-shot orchestrator tying the planner, the wire encoder, and the
/// dispatcher together (§5). Built fresh for each query cycle; `call`
/// consumes it the same way `PacketWriter` consumes itself.
pub struct QueryBuilder<'a> {
    pub transaction_id: u16,
    pub transport: Weak<dyn Transport>,
    pub policy: DispatchPolicy,
    pub emulator_ports: &'a [u16],
    pub expect_unicast_response: bool,
    pub owner: OwnerThread,
}

impl<'a> QueryBuilder<'a> {
    pub fn new(transaction_id: u16, transport: Weak<dyn Transport>, policy: DispatchPolicy, emulator_ports: &'a [u16]) -> Self {
        Self {
            transaction_id,
            transport,
            policy,
            emulator_ports,
            expect_unicast_response: false,
            owner: OwnerThread::current(),
        }
    }

    /// Plans questions from `input`, encodes them, and dispatches the
    /// packet. Returns [`INVALID_TRANSACTION_ID`] and no subtypes if the
    /// transport has gone away, the plan is empty, or encoding the
    /// packet overflows (§7).
    pub async fn call(self, input: &PlannerInput<'_>, clock: &dyn crate::clock::Clock) -> QueryOutcome {
        self.owner.assert_on_owner_thread();

        let Some(transport) = self.transport.upgrade() else {
            tracing::warn!("transport no longer available, dropping query");
            return QueryOutcome::invalid();
        };

        let questions = plan_questions(input, clock);
        if questions.is_empty() {
            return QueryOutcome::invalid();
        }

        let subtypes: Vec<String> = input.subtypes.iter().map(|s| s.as_str().to_string()).collect();

        match encode_packet(self.transaction_id, &questions, self.expect_unicast_response) {
            Ok(packet) => {
                let dispatcher = Dispatcher::new(transport.as_ref(), self.policy, self.emulator_ports);
                dispatcher.dispatch(&packet, self.expect_unicast_response).await;
                QueryOutcome {
                    transaction_id: self.transaction_id,
                    subtypes,
                }
            }
            Err(error) => {
                tracing::warn!(
                    subtypes = %subtypes.join(","),
                    %error,
                    "failed to encode mdns query packet"
                );
                QueryOutcome::invalid()
            }
        }
    }
}

fn encode_packet(
    transaction_id: u16,
    questions: &[Question],
    expect_unicast_response: bool,
) -> Result<Vec<u8>, mdns_proto::WriterError> {
    let mut writer = PacketWriter::new();
    let header = Header {
        id: transaction_id,
        question_count: questions.len() as u16,
    };
    header.write(&mut writer)?;

    let class = qclass(expect_unicast_response);
    for question in questions {
        let wire = WireQuestion::new(question.name.clone(), question.qtype);
        wire.write(&mut writer, class)?;
    }

    Ok(writer.get_packet())
}
