use crate::error::ContractError;
use crate::events;
use crate::storage;
use crate::storage::{DiseaseMedicines, OutbreakReport};
use crate::utils;
use soroban_sdk::{Address, Env, String, Vec};

pub fn initialize(env: &Env, admin: &Address) -> Result<(), ContractError> {
    if storage::has_admin(env) {
        return Err(ContractError::AlreadyInitialized);
    }
    storage::set_admin(env, admin);
    Ok(())
}

pub fn add_disease_medicines(
    env: &Env,
    caller: &Address,
    disease: String,
    medicines: Vec<String>,
) -> Result<(), ContractError> {
    require_admin(env, caller)?;
    if !utils::is_nonempty(&disease) || medicines.is_empty() {
        return Err(ContractError::InvalidInput);
    }
    for medicine in medicines.iter() {
        if !utils::is_nonempty(&medicine) {
            return Err(ContractError::InvalidInput);
        }
    }

    let count = medicines.len();
    storage::add_disease_medicines(
        env,
        &DiseaseMedicines {
            disease: disease.clone(),
            medicines,
        },
    );
    events::emit_disease_mapped(env, disease, count);
    Ok(())
}

pub fn add_outbreak(
    env: &Env,
    caller: &Address,
    report: OutbreakReport,
) -> Result<(), ContractError> {
    require_admin(env, caller)?;
    if !utils::is_nonempty(&report.state)
        || !utils::is_nonempty(&report.district)
        || !utils::is_nonempty(&report.disease)
    {
        return Err(ContractError::InvalidInput);
    }
    if !utils::is_valid_latitude(report.latitude_e6)
        || !utils::is_valid_longitude(report.longitude_e6)
    {
        return Err(ContractError::InvalidCoordinates);
    }

    storage::add_outbreak(env, &report);
    events::emit_outbreak_added(
        env,
        report.state,
        report.district,
        report.disease,
        report.cases,
    );
    Ok(())
}

pub fn list_diseases(env: &Env) -> Vec<DiseaseMedicines> {
    storage::get_disease_map(env)
}

pub fn list_outbreaks(env: &Env) -> Vec<OutbreakReport> {
    storage::get_outbreaks(env)
}

fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
    if !storage::has_admin(env) {
        return Err(ContractError::NotInitialized);
    }
    if !storage::is_admin(env, caller) {
        return Err(ContractError::AdminOnly);
    }
    Ok(())
}
