#![cfg(test)]

use crate::{OutbreakDemandOracle, OutbreakDemandOracleClient, OutbreakReport};
use soroban_sdk::{testutils::Address as _, vec, Address, Env, String};

pub fn create_test_contract(env: &Env) -> OutbreakDemandOracleClient<'_> {
    OutbreakDemandOracleClient::new(env, &env.register(OutbreakDemandOracle {}, ()))
}

// Micro-degree coordinates of the fixture districts.
pub const PUNE: (i64, i64) = (18_520_400, 73_856_700);
pub const NASHIK: (i64, i64) = (19_997_500, 73_789_800);
pub const NAGPUR: (i64, i64) = (21_145_800, 79_088_200);
pub const AHMEDABAD: (i64, i64) = (23_022_500, 72_571_400);
pub const SURAT: (i64, i64) = (21_170_200, 72_831_100);
pub const AMRITSAR: (i64, i64) = (31_633_900, 74_872_300);
pub const LUDHIANA: (i64, i64) = (30_901_000, 75_857_300);

pub fn report(
    env: &Env,
    state: &str,
    district: &str,
    disease: &str,
    cases: u32,
    deaths: u32,
    coords: (i64, i64),
) -> OutbreakReport {
    OutbreakReport {
        state: String::from_str(env, state),
        district: String::from_str(env, district),
        disease: String::from_str(env, disease),
        cases,
        deaths,
        week: 27,
        year: 2025,
        latitude_e6: coords.0,
        longitude_e6: coords.1,
    }
}

/// Contract seeded with the surveillance fixture: five disease->medicines
/// rows and seven outbreak reports across three states.
pub fn setup_seeded(env: &Env) -> (OutbreakDemandOracleClient<'_>, Address) {
    env.mock_all_auths();

    let contract = create_test_contract(env);
    let admin = Address::generate(env);
    contract.initialize(&admin);

    let map = [
        ("Dengue", ["Paracetamol", "ORS"]),
        ("Typhoid", ["Cefixime", "ORS"]),
        ("Malaria", ["Artemether", "Lumefantrine"]),
        ("Common Cold", ["Cetirizine", "Paracetamol"]),
        ("Flu", ["Azithromycin", "Paracetamol"]),
    ];
    for (disease, medicines) in map {
        contract.add_disease_medicines(
            &admin,
            &String::from_str(env, disease),
            &vec![
                env,
                String::from_str(env, medicines[0]),
                String::from_str(env, medicines[1]),
            ],
        );
    }

    let reports = [
        ("Maharashtra", "Pune", "Dengue", 34, 1, PUNE),
        ("Gujarat", "Ahmedabad", "Typhoid", 25, 0, AHMEDABAD),
        ("Maharashtra", "Nagpur", "Common Cold", 40, 0, NAGPUR),
        ("Punjab", "Amritsar", "Flu", 20, 0, AMRITSAR),
        ("Gujarat", "Surat", "Malaria", 15, 0, SURAT),
        ("Punjab", "Ludhiana", "Dengue", 18, 1, LUDHIANA),
        ("Maharashtra", "Nashik", "Typhoid", 22, 0, NASHIK),
    ];
    for (state, district, disease, cases, deaths, coords) in reports {
        contract.add_outbreak(
            &admin,
            &report(env, state, district, disease, cases, deaths, coords),
        );
    }

    (contract, admin)
}
