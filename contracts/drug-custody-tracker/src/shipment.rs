use crate::error::ContractError;
use crate::events;
use crate::registry;
use crate::storage;
use crate::storage::{DrugUnit, Shipment, ShipmentLeg, ShipmentStatus, UnitStatus};
use crate::utils;
use soroban_sdk::{symbol_short, Address, Env, String, Vec};

/// Creates a shipment of units from the sender to a single recipient one hop
/// down the chain. All preconditions are checked before the first write, so a
/// failed creation leaves no unit transitioned.
pub fn create_shipment(
    env: &Env,
    sender: &Address,
    recipient: Address,
    unit_barcodes: Vec<String>,
    estimated_delivery: Option<u64>,
    notes: Option<String>,
) -> Result<u64, ContractError> {
    if unit_barcodes.is_empty() {
        return Err(ContractError::EmptyShipment);
    }

    let sender_role = storage::get_role(env, sender).ok_or(ContractError::RoleNotAssigned)?;
    let recipient_role =
        storage::get_role(env, &recipient).ok_or(ContractError::InvalidRecipient)?;

    if !utils::is_allowed_route(&sender_role, &recipient_role) {
        return Err(ContractError::InvalidRecipient);
    }

    // Validation pass: every unit must be in the sender's stock, listed once.
    let mut units: Vec<DrugUnit> = Vec::new(env);
    for (index, barcode) in unit_barcodes.iter().enumerate() {
        let mut seen = 0u32;
        while (seen as usize) < index {
            if unit_barcodes.get_unchecked(seen) == barcode {
                return Err(ContractError::DuplicateUnit);
            }
            seen += 1;
        }

        let unit = storage::get_unit(env, &barcode).ok_or(ContractError::UnitNotFound)?;
        if unit.status != UnitStatus::InStock || unit.holder != *sender {
            return Err(ContractError::UnitNotAvailable);
        }
        units.push_back(unit);
    }

    let timestamp = env.ledger().timestamp();
    let shipment_id = storage::next_shipment_id(env);

    let mut participants = Vec::new(env);
    participants.push_back(ShipmentLeg {
        participant: sender.clone(),
        role: sender_role.clone(),
        status: ShipmentStatus::Processing,
        expected_arrival: None,
        actual_arrival: None,
    });
    participants.push_back(ShipmentLeg {
        participant: recipient.clone(),
        role: recipient_role.clone(),
        status: ShipmentStatus::Processing,
        expected_arrival: estimated_delivery,
        actual_arrival: None,
    });

    let shipment = Shipment {
        shipment_id,
        unit_barcodes: unit_barcodes.clone(),
        sender: sender.clone(),
        sender_role,
        recipient: recipient.clone(),
        recipient_role,
        participants,
        status: ShipmentStatus::Processing,
        created_at: timestamp,
        estimated_delivery,
        actual_delivery: None,
        notes,
    };

    storage::set_shipment(env, &shipment);
    storage::add_party_shipment(env, sender, shipment_id);
    storage::add_party_shipment(env, &recipient, shipment_id);

    // Mutation pass: holder stays with the sender until acceptance.
    for mut unit in units.iter() {
        registry::apply_transition(
            env,
            sender,
            &mut unit,
            UnitStatus::Shipped,
            None,
            symbol_short!("shipped"),
        );
        storage::set_open_shipment_ref(env, &unit.barcode, shipment_id);
    }

    events::emit_shipment_created(
        env,
        shipment_id,
        sender.clone(),
        recipient,
        unit_barcodes,
    );

    Ok(shipment_id)
}

/// Sender confirms dispatch: Processing -> InTransit. Re-dispatching an
/// in-transit shipment is a retry-tolerant no-op.
pub fn dispatch_shipment(
    env: &Env,
    sender: &Address,
    shipment_id: u64,
) -> Result<Shipment, ContractError> {
    let mut shipment =
        storage::get_shipment(env, shipment_id).ok_or(ContractError::ShipmentNotFound)?;

    if shipment.sender != *sender {
        return Err(ContractError::Unauthorized);
    }

    match shipment.status {
        ShipmentStatus::Processing => {}
        ShipmentStatus::InTransit => return Ok(shipment),
        _ => return Err(ContractError::AlreadyResolved),
    }

    set_status(env, &mut shipment, ShipmentStatus::InTransit);
    storage::set_shipment(env, &shipment);

    events::emit_shipment_resolved(
        env,
        shipment_id,
        sender.clone(),
        ShipmentStatus::Processing,
        ShipmentStatus::InTransit,
    );

    Ok(shipment)
}

/// Recipient takes custody: every unit returns to stock under the recipient
/// and the shipment is delivered. Re-accepting a delivered shipment is a
/// no-op success so callers can retry safely.
pub fn accept_shipment(
    env: &Env,
    recipient: &Address,
    shipment_id: u64,
) -> Result<Shipment, ContractError> {
    let mut shipment =
        storage::get_shipment(env, shipment_id).ok_or(ContractError::ShipmentNotFound)?;

    if shipment.recipient != *recipient {
        return Err(ContractError::Unauthorized);
    }

    match shipment.status {
        ShipmentStatus::Processing | ShipmentStatus::InTransit => {}
        ShipmentStatus::Delivered => return Ok(shipment),
        ShipmentStatus::Rejected | ShipmentStatus::Cancelled => {
            return Err(ContractError::AlreadyResolved)
        }
    }

    let old_status = shipment.status.clone();
    let timestamp = env.ledger().timestamp();

    for barcode in shipment.unit_barcodes.iter() {
        registry::transition_unit(
            env,
            recipient,
            &barcode,
            UnitStatus::InStock,
            Some((recipient.clone(), shipment.recipient_role.clone())),
            symbol_short!("accepted"),
        )?;
        storage::clear_open_shipment_ref(env, &barcode);
    }

    set_status(env, &mut shipment, ShipmentStatus::Delivered);
    shipment.actual_delivery = Some(timestamp);
    stamp_recipient_arrival(env, &mut shipment, timestamp);
    storage::set_shipment(env, &shipment);

    events::emit_shipment_resolved(
        env,
        shipment_id,
        recipient.clone(),
        old_status,
        ShipmentStatus::Delivered,
    );

    Ok(shipment)
}

/// Recipient declines: every unit reverts to stock under the original sender,
/// never left stranded in shipped status.
pub fn reject_shipment(
    env: &Env,
    recipient: &Address,
    shipment_id: u64,
) -> Result<Shipment, ContractError> {
    let mut shipment =
        storage::get_shipment(env, shipment_id).ok_or(ContractError::ShipmentNotFound)?;

    if shipment.recipient != *recipient {
        return Err(ContractError::Unauthorized);
    }

    if utils::is_terminal_shipment(&shipment.status) {
        return Err(ContractError::AlreadyResolved);
    }

    let old_status = shipment.status.clone();
    revert_units_to_sender(env, recipient, &shipment)?;

    set_status(env, &mut shipment, ShipmentStatus::Rejected);
    storage::set_shipment(env, &shipment);

    events::emit_shipment_resolved(
        env,
        shipment_id,
        recipient.clone(),
        old_status,
        ShipmentStatus::Rejected,
    );

    Ok(shipment)
}

/// Sender withdraws an unresolved shipment and takes the units back.
pub fn cancel_shipment(
    env: &Env,
    sender: &Address,
    shipment_id: u64,
) -> Result<Shipment, ContractError> {
    let mut shipment =
        storage::get_shipment(env, shipment_id).ok_or(ContractError::ShipmentNotFound)?;

    if shipment.sender != *sender {
        return Err(ContractError::Unauthorized);
    }

    if utils::is_terminal_shipment(&shipment.status) {
        return Err(ContractError::AlreadyResolved);
    }

    let old_status = shipment.status.clone();
    revert_units_to_sender(env, sender, &shipment)?;

    set_status(env, &mut shipment, ShipmentStatus::Cancelled);
    storage::set_shipment(env, &shipment);

    events::emit_shipment_resolved(
        env,
        shipment_id,
        sender.clone(),
        old_status,
        ShipmentStatus::Cancelled,
    );

    Ok(shipment)
}

pub fn get_shipment(env: &Env, shipment_id: u64) -> Result<Shipment, ContractError> {
    storage::get_shipment(env, shipment_id).ok_or(ContractError::ShipmentNotFound)
}

/// Shipments where the party is sender or recipient.
pub fn list_shipments(env: &Env, party: &Address) -> Vec<Shipment> {
    let ids = storage::get_party_shipment_ids(env, party);
    let mut shipments = Vec::new(env);

    for id in ids.iter() {
        if let Some(shipment) = storage::get_shipment(env, id) {
            shipments.push_back(shipment);
        }
    }

    shipments
}

fn revert_units_to_sender(
    env: &Env,
    actor: &Address,
    shipment: &Shipment,
) -> Result<(), ContractError> {
    for barcode in shipment.unit_barcodes.iter() {
        registry::transition_unit(
            env,
            actor,
            &barcode,
            UnitStatus::InStock,
            Some((shipment.sender.clone(), shipment.sender_role.clone())),
            symbol_short!("returned"),
        )?;
        storage::clear_open_shipment_ref(env, &barcode);
    }
    Ok(())
}

// Mirror the overall status onto all legs.
fn set_status(env: &Env, shipment: &mut Shipment, status: ShipmentStatus) {
    let mut legs = Vec::new(env);
    for mut leg in shipment.participants.iter() {
        leg.status = status.clone();
        legs.push_back(leg);
    }
    shipment.participants = legs;
    shipment.status = status;
}

fn stamp_recipient_arrival(env: &Env, shipment: &mut Shipment, timestamp: u64) {
    let mut legs = Vec::new(env);
    for mut leg in shipment.participants.iter() {
        if leg.participant == shipment.recipient {
            leg.actual_arrival = Some(timestamp);
        }
        legs.push_back(leg);
    }
    shipment.participants = legs;
}
