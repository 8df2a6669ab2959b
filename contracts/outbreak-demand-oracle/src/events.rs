use soroban_sdk::{contracttype, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OutbreakAddedEvent {
    pub state: String,
    pub district: String,
    pub disease: String,
    pub cases: u32,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DiseaseMappedEvent {
    pub disease: String,
    pub medicine_count: u32,
    pub timestamp: u64,
}

pub fn emit_outbreak_added(
    env: &Env,
    state: String,
    district: String,
    disease: String,
    cases: u32,
) {
    let event = OutbreakAddedEvent {
        state,
        district,
        disease,
        cases,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(("outbreak_added",), event);
}

pub fn emit_disease_mapped(env: &Env, disease: String, medicine_count: u32) {
    let event = DiseaseMappedEvent {
        disease,
        medicine_count,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(("disease_mapped",), event);
}
