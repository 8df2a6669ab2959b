use crate::error::ContractError;
use crate::events;
use crate::storage;
use crate::storage::{CounterfeitReport, CustodyRecord, DrugUnit};
use crate::utils;
use soroban_sdk::{contracttype, Address, Env, String, Vec};

/// Days-to-expiry window that raises the informational warning flag.
const EXPIRY_WARNING_DAYS: i64 = 30;

/// Outcome of a barcode lookup. An unknown barcode is a first-class negative
/// result feeding the counterfeit-report flow, not an error.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerificationReport {
    pub found: bool,
    pub unit: Option<DrugUnit>,
    pub history: Vec<CustodyRecord>,
    pub days_left: i64,
    pub expiry_warning: bool,
}

pub fn verify_unit(env: &Env, barcode: String) -> Result<VerificationReport, ContractError> {
    if !utils::is_valid_barcode(&barcode) {
        return Err(ContractError::InvalidBarcode);
    }

    let unit = match storage::get_unit(env, &barcode) {
        Some(unit) => unit,
        None => {
            return Ok(VerificationReport {
                found: false,
                unit: None,
                history: Vec::new(env),
                days_left: 0,
                expiry_warning: false,
            })
        }
    };

    let history = storage::get_custody_history(env, &barcode);
    let days_left = utils::days_until(env.ledger().timestamp(), unit.expiry_date);

    Ok(VerificationReport {
        found: true,
        unit: Some(unit),
        history,
        days_left,
        expiry_warning: days_left <= EXPIRY_WARNING_DAYS,
    })
}

pub fn get_custody_history(
    env: &Env,
    barcode: String,
) -> Result<Vec<CustodyRecord>, ContractError> {
    if storage::get_unit(env, &barcode).is_none() {
        return Err(ContractError::UnitNotFound);
    }
    Ok(storage::get_custody_history(env, &barcode))
}

pub fn report_counterfeit(
    env: &Env,
    reporter: &Address,
    barcode: String,
    description: String,
) -> Result<u64, ContractError> {
    if !utils::is_valid_barcode(&barcode) {
        return Err(ContractError::InvalidBarcode);
    }
    if !utils::is_nonempty(&description) {
        return Err(ContractError::MissingField);
    }

    // Unknown barcodes are the common case here
    let known_unit = storage::get_unit(env, &barcode).is_some();

    let report_id = storage::next_report_id(env);
    let report = CounterfeitReport {
        report_id,
        barcode: barcode.clone(),
        reporter: reporter.clone(),
        description,
        timestamp: env.ledger().timestamp(),
        known_unit,
    };

    storage::set_counterfeit_report(env, &report);
    events::emit_counterfeit_reported(env, report_id, barcode, reporter.clone(), known_unit);

    Ok(report_id)
}

pub fn list_counterfeit_reports(
    env: &Env,
    caller: &Address,
) -> Result<Vec<CounterfeitReport>, ContractError> {
    if !storage::is_admin(env, caller) {
        return Err(ContractError::AdminOnly);
    }

    let mut reports = Vec::new(env);
    let total = storage::report_count(env);
    let mut id = 1u64;
    while id <= total {
        if let Some(report) = storage::get_counterfeit_report(env, id) {
            reports.push_back(report);
        }
        id += 1;
    }

    Ok(reports)
}
