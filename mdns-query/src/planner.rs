use mdns_proto::label::Label;
use mdns_proto::packet::{RecordType, TYPE_A, TYPE_AAAA, TYPE_ANY, TYPE_PTR, TYPE_SRV, TYPE_TXT};

use crate::cached_response::CachedResponse;
use crate::clock::Clock;

pub const SUB_LABEL: &str = "_sub";

/// One planned `(name, type)` question, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: Vec<Label>,
    pub qtype: RecordType,
}

/// Everything the planner needs: cached state to refresh, the
/// discovery flag, subtype labels (already underscore-prefixed by the
/// caller, e.g. `"_universal"`), and the service type's label sequence.
pub struct PlannerInput<'a> {
    pub services_to_resolve: &'a [&'a dyn CachedResponse],
    pub send_discovery_queries: bool,
    pub subtypes: &'a [Label],
    pub service_type_labels: &'a [Label],
}

/// Deterministic single pass over cached state producing the ordered
/// question list (§4.3). Never mutates `input`.
pub fn plan_questions(input: &PlannerInput<'_>, clock: &dyn Clock) -> Vec<Question> {
    let now = clock.elapsed_millis();
    let mut questions = Vec::new();

    for response in input.services_to_resolve {
        let Some(service_name) = response.service_name() else {
            continue;
        };

        let renew_txt = !response.has_txt() || response.txt_needs_renewal(now);
        let renew_srv = !response.has_srv() || response.srv_needs_renewal(now);

        if renew_srv && renew_txt {
            questions.push(Question {
                name: service_name.to_vec(),
                qtype: TYPE_ANY,
            });
        } else if renew_txt {
            questions.push(Question {
                name: service_name.to_vec(),
                qtype: TYPE_TXT,
            });
        } else if renew_srv {
            // Address questions wait for the next cycle: the host may
            // still be unknown until this SRV resolves.
            questions.push(Question {
                name: service_name.to_vec(),
                qtype: TYPE_SRV,
            });
        } else if response.has_srv() && !response.has_a() && !response.has_aaaa() {
            if let Some(host) = response.srv_host() {
                questions.push(Question {
                    name: host.to_vec(),
                    qtype: TYPE_A,
                });
                questions.push(Question {
                    name: host.to_vec(),
                    qtype: TYPE_AAAA,
                });
            }
        }
    }

    if input.send_discovery_queries {
        for subtype in input.subtypes {
            let mut name = Vec::with_capacity(input.service_type_labels.len() + 2);
            name.push(subtype.clone());
            name.push(Label::from(SUB_LABEL));
            name.extend(input.service_type_labels.iter().cloned());
            questions.push(Question {
                name,
                qtype: TYPE_PTR,
            });
        }
        questions.push(Question {
            name: input.service_type_labels.to_vec(),
            qtype: TYPE_PTR,
        });
    }

    questions
}
