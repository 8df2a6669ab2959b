#![cfg(test)]

use crate::{DrugCustodyTracker, DrugCustodyTrackerClient, Role, UnitAttributes};
use soroban_sdk::{testutils::Address as _, Address, Env, String};

pub fn create_test_contract(env: &Env) -> DrugCustodyTrackerClient<'_> {
    DrugCustodyTrackerClient::new(env, &env.register(DrugCustodyTracker {}, ()))
}

pub struct Parties {
    pub admin: Address,
    pub manufacturer: Address,
    pub distributor: Address,
    pub wholesaler: Address,
    pub retailer: Address,
    pub pharmacy: Address,
}

/// Contract with the full role table assigned.
pub fn setup_chain(env: &Env) -> (DrugCustodyTrackerClient<'_>, Parties) {
    env.mock_all_auths();

    let contract = create_test_contract(env);
    let parties = Parties {
        admin: Address::generate(env),
        manufacturer: Address::generate(env),
        distributor: Address::generate(env),
        wholesaler: Address::generate(env),
        retailer: Address::generate(env),
        pharmacy: Address::generate(env),
    };

    contract.initialize(&parties.admin);
    contract.assign_role(&parties.admin, &parties.manufacturer, &Role::Manufacturer);
    contract.assign_role(&parties.admin, &parties.distributor, &Role::Distributor);
    contract.assign_role(&parties.admin, &parties.wholesaler, &Role::Wholesaler);
    contract.assign_role(&parties.admin, &parties.retailer, &Role::Retailer);
    contract.assign_role(&parties.admin, &parties.pharmacy, &Role::Pharmacy);

    (contract, parties)
}

pub const MFG_DATE: u64 = 1_750_000_000; // mid 2025
pub const EXPIRY_DATE: u64 = 1_813_000_000; // roughly two years later

pub fn sample_attrs(env: &Env) -> UnitAttributes {
    UnitAttributes {
        name: String::from_str(env, "Paracetamol 500mg"),
        composition: String::from_str(env, "Acetaminophen"),
        dosage: String::from_str(env, "500mg"),
        batch_number: String::from_str(env, "B20250701"),
        batch_barcode: String::from_str(env, "BAT-2025-07"),
        mfg_date: MFG_DATE,
        expiry_date: EXPIRY_DATE,
    }
}

pub fn register_unit(
    env: &Env,
    contract: &DrugCustodyTrackerClient,
    manufacturer: &Address,
    barcode: &str,
) -> String {
    let barcode = String::from_str(env, barcode);
    contract.register_unit(manufacturer, &barcode, &sample_attrs(env));
    barcode
}
