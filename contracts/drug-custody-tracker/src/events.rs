use crate::storage::{Role, ShipmentStatus, UnitStatus};
use soroban_sdk::{contracttype, Address, Env, String, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnitRegisteredEvent {
    pub barcode: String,
    pub manufacturer: Address,
    pub batch_number: String,
    pub expiry_date: u64,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnitStatusChangedEvent {
    pub barcode: String,
    pub actor: Address,
    pub old_status: UnitStatus,
    pub new_status: UnitStatus,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShipmentCreatedEvent {
    pub shipment_id: u64,
    pub sender: Address,
    pub recipient: Address,
    pub unit_barcodes: Vec<String>,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShipmentResolvedEvent {
    pub shipment_id: u64,
    pub actor: Address,
    pub old_status: ShipmentStatus,
    pub new_status: ShipmentStatus,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CounterfeitReportedEvent {
    pub report_id: u64,
    pub barcode: String,
    pub reporter: Address,
    pub known_unit: bool,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleAssignedEvent {
    pub entity: Address,
    pub role: Role,
    pub timestamp: u64,
}

pub fn emit_unit_registered(
    env: &Env,
    barcode: String,
    manufacturer: Address,
    batch_number: String,
    expiry_date: u64,
) {
    let event = UnitRegisteredEvent {
        barcode,
        manufacturer,
        batch_number,
        expiry_date,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(("unit_registered",), event);
}

pub fn emit_unit_status_changed(
    env: &Env,
    barcode: String,
    actor: Address,
    old_status: UnitStatus,
    new_status: UnitStatus,
) {
    let event = UnitStatusChangedEvent {
        barcode,
        actor,
        old_status,
        new_status,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(("unit_status_changed",), event);
}

pub fn emit_shipment_created(
    env: &Env,
    shipment_id: u64,
    sender: Address,
    recipient: Address,
    unit_barcodes: Vec<String>,
) {
    let event = ShipmentCreatedEvent {
        shipment_id,
        sender,
        recipient,
        unit_barcodes,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(("shipment_created",), event);
}

pub fn emit_shipment_resolved(
    env: &Env,
    shipment_id: u64,
    actor: Address,
    old_status: ShipmentStatus,
    new_status: ShipmentStatus,
) {
    let event = ShipmentResolvedEvent {
        shipment_id,
        actor,
        old_status,
        new_status,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(("shipment_resolved",), event);
}

pub fn emit_counterfeit_reported(
    env: &Env,
    report_id: u64,
    barcode: String,
    reporter: Address,
    known_unit: bool,
) {
    let event = CounterfeitReportedEvent {
        report_id,
        barcode,
        reporter,
        known_unit,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(("counterfeit_reported",), event);
}

pub fn emit_role_assigned(env: &Env, entity: Address, role: Role) {
    let event = RoleAssignedEvent {
        entity,
        role,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(("role_assigned",), event);
}
