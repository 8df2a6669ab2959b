use crate::error::ContractError;
use crate::events;
use crate::storage;
use crate::storage::{CustodyRecord, DrugUnit, Role, UnitAttributes, UnitStatus};
use crate::utils;
use soroban_sdk::{symbol_short, Address, Env, String, Symbol, Vec};

pub fn register_unit(
    env: &Env,
    manufacturer: &Address,
    barcode: String,
    attrs: UnitAttributes,
) -> Result<(), ContractError> {
    match storage::get_role(env, manufacturer) {
        Some(Role::Manufacturer) => {}
        Some(_) => return Err(ContractError::Unauthorized),
        None => return Err(ContractError::RoleNotAssigned),
    }

    if !utils::is_valid_barcode(&barcode) {
        return Err(ContractError::InvalidBarcode);
    }

    if !utils::is_nonempty(&attrs.name)
        || !utils::is_nonempty(&attrs.batch_number)
        || attrs.expiry_date == 0
    {
        return Err(ContractError::MissingField);
    }

    if !utils::is_valid_date(attrs.mfg_date, attrs.expiry_date) {
        return Err(ContractError::InvalidDate);
    }

    if storage::get_unit(env, &barcode).is_some() {
        return Err(ContractError::UnitAlreadyExists);
    }

    let timestamp = env.ledger().timestamp();

    let unit = DrugUnit {
        barcode: barcode.clone(),
        name: attrs.name,
        composition: attrs.composition,
        dosage: attrs.dosage,
        batch_number: attrs.batch_number.clone(),
        batch_barcode: attrs.batch_barcode,
        manufacturer: manufacturer.clone(),
        mfg_date: attrs.mfg_date,
        expiry_date: attrs.expiry_date,
        status: UnitStatus::InStock,
        holder: manufacturer.clone(),
        holder_role: Role::Manufacturer,
        registered_at: timestamp,
        last_updated: timestamp,
    };

    storage::set_unit(env, &unit);
    storage::add_holder_unit(env, manufacturer, &barcode);
    storage::add_custody_record(
        env,
        &barcode,
        &CustodyRecord {
            holder: manufacturer.clone(),
            holder_role: Role::Manufacturer,
            status: UnitStatus::InStock,
            timestamp,
            note: symbol_short!("register"),
        },
    );

    emit_registered(env, &unit);
    Ok(())
}

fn emit_registered(env: &Env, unit: &DrugUnit) {
    events::emit_unit_registered(
        env,
        unit.barcode.clone(),
        unit.manufacturer.clone(),
        unit.batch_number.clone(),
        unit.expiry_date,
    );
}

/// Holder-scoped inventory view. A shipped unit remains in the sender's view
/// until the recipient accepts it.
pub fn get_inventory(
    env: &Env,
    holder: &Address,
    status_filter: Option<UnitStatus>,
) -> Vec<DrugUnit> {
    let barcodes = storage::get_holder_unit_barcodes(env, holder);
    let mut units = Vec::new(env);

    for barcode in barcodes.iter() {
        if let Some(unit) = storage::get_unit(env, &barcode) {
            let matches = match &status_filter {
                Some(status) => unit.status == *status,
                None => true,
            };
            if matches {
                units.push_back(unit);
            }
        }
    }

    units
}

pub fn get_unit(env: &Env, barcode: String) -> Result<DrugUnit, ContractError> {
    storage::get_unit(env, &barcode).ok_or(ContractError::UnitNotFound)
}

/// Atomic status/holder update, checked against the transition table.
pub fn transition_unit(
    env: &Env,
    actor: &Address,
    barcode: &String,
    new_status: UnitStatus,
    new_holder: Option<(Address, Role)>,
    note: Symbol,
) -> Result<DrugUnit, ContractError> {
    let mut unit = storage::get_unit(env, barcode).ok_or(ContractError::UnitNotFound)?;

    if !utils::is_allowed_transition(&unit.status, &new_status) {
        return Err(ContractError::InvalidTransition);
    }

    apply_transition(env, actor, &mut unit, new_status, new_holder, note);
    Ok(unit)
}

pub(crate) fn apply_transition(
    env: &Env,
    actor: &Address,
    unit: &mut DrugUnit,
    new_status: UnitStatus,
    new_holder: Option<(Address, Role)>,
    note: Symbol,
) {
    let old_status = unit.status.clone();
    let timestamp = env.ledger().timestamp();

    if let Some((holder, role)) = new_holder {
        if holder != unit.holder {
            storage::remove_holder_unit(env, &unit.holder, &unit.barcode);
            storage::add_holder_unit(env, &holder, &unit.barcode);
        }
        unit.holder = holder;
        unit.holder_role = role;
    }

    unit.status = new_status.clone();
    unit.last_updated = timestamp;
    storage::set_unit(env, unit);

    storage::add_custody_record(
        env,
        &unit.barcode,
        &CustodyRecord {
            holder: unit.holder.clone(),
            holder_role: unit.holder_role.clone(),
            status: new_status.clone(),
            timestamp,
            note,
        },
    );

    events::emit_unit_status_changed(
        env,
        unit.barcode.clone(),
        actor.clone(),
        old_status,
        new_status,
    );
}

/// Final sale at a pharmacy or retail counter. Terminal.
pub fn mark_sold(env: &Env, seller: &Address, barcode: String) -> Result<(), ContractError> {
    let unit = storage::get_unit(env, &barcode).ok_or(ContractError::UnitNotFound)?;

    if unit.holder != *seller {
        return Err(ContractError::Unauthorized);
    }
    if !matches!(unit.holder_role, Role::Pharmacy | Role::Retailer) {
        return Err(ContractError::Unauthorized);
    }

    transition_unit(
        env,
        seller,
        &barcode,
        UnitStatus::Sold,
        None,
        symbol_short!("sold"),
    )?;
    Ok(())
}

pub fn mark_expired(env: &Env, holder: &Address, barcode: String) -> Result<(), ContractError> {
    let unit = storage::get_unit(env, &barcode).ok_or(ContractError::UnitNotFound)?;

    if unit.holder != *holder {
        return Err(ContractError::Unauthorized);
    }

    transition_unit(
        env,
        holder,
        &barcode,
        UnitStatus::Expired,
        None,
        symbol_short!("expired"),
    )?;
    Ok(())
}

/// Recall by the manufacturer of record (or the admin, for regulator action).
pub fn mark_recalled(env: &Env, caller: &Address, barcode: String) -> Result<(), ContractError> {
    let unit = storage::get_unit(env, &barcode).ok_or(ContractError::UnitNotFound)?;

    if unit.manufacturer != *caller && !storage::is_admin(env, caller) {
        return Err(ContractError::Unauthorized);
    }

    transition_unit(
        env,
        caller,
        &barcode,
        UnitStatus::Recalled,
        None,
        symbol_short!("recalled"),
    )?;
    Ok(())
}

/// Explicit write-off by the current holder, e.g. after a rejected shipment.
pub fn cancel_unit(env: &Env, holder: &Address, barcode: String) -> Result<(), ContractError> {
    let unit = storage::get_unit(env, &barcode).ok_or(ContractError::UnitNotFound)?;

    if unit.holder != *holder {
        return Err(ContractError::Unauthorized);
    }

    transition_unit(
        env,
        holder,
        &barcode,
        UnitStatus::Cancelled,
        None,
        symbol_short!("cancelled"),
    )?;
    Ok(())
}

/// Administrative reversal of a recall or expiry mark. Bypasses the normal
/// transition table; admin only.
pub fn reinstate_unit(env: &Env, admin: &Address, barcode: String) -> Result<(), ContractError> {
    if !storage::is_admin(env, admin) {
        return Err(ContractError::AdminOnly);
    }

    let mut unit = storage::get_unit(env, &barcode).ok_or(ContractError::UnitNotFound)?;

    if !matches!(unit.status, UnitStatus::Recalled | UnitStatus::Expired) {
        return Err(ContractError::InvalidTransition);
    }

    apply_transition(
        env,
        admin,
        &mut unit,
        UnitStatus::InStock,
        None,
        symbol_short!("reinstate"),
    );
    Ok(())
}
