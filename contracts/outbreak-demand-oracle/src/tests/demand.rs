#![cfg(test)]

use crate::{ContractError, GeoPoint, Region, StockLevel};
use soroban_sdk::{testutils::Address as _, vec, Address, Env, String};

use super::utils::{create_test_contract, report, setup_seeded, PUNE};

fn state(env: &Env, name: &str) -> Region {
    Region::State(String::from_str(env, name))
}

fn near(lat_e6: i64, lon_e6: i64, radius_km: Option<u32>) -> Region {
    Region::Near(GeoPoint {
        latitude_e6: lat_e6,
        longitude_e6: lon_e6,
        radius_km,
    })
}

#[test]
fn test_state_recommendation_ordered_by_case_volume() {
    let env = Env::default();
    let (contract, _admin) = setup_seeded(&env);

    // Maharashtra: Common Cold 40, Dengue 34, Typhoid 22
    let medicines = contract.recommend_medications(&state(&env, "Maharashtra"));
    assert_eq!(
        medicines,
        vec![
            &env,
            String::from_str(&env, "Cetirizine"),
            String::from_str(&env, "Paracetamol"),
            String::from_str(&env, "ORS"),
            String::from_str(&env, "Cefixime"),
        ]
    );
}

#[test]
fn test_state_without_outbreaks_recommends_nothing() {
    let env = Env::default();
    let (contract, _admin) = setup_seeded(&env);

    let medicines = contract.recommend_medications(&state(&env, "Kerala"));
    assert_eq!(medicines.len(), 0);

    let result = contract.try_recommend_medications(&state(&env, ""));
    assert_eq!(result, Err(Ok(ContractError::InvalidInput)));
}

#[test]
fn test_nearby_outbreaks_within_radius() {
    let env = Env::default();
    let (contract, _admin) = setup_seeded(&env);

    // Nashik is about 164 km from Pune; Nagpur is far outside 200 km
    let within = contract.nearby_outbreaks(&PUNE.0, &PUNE.1, &Some(200));
    assert_eq!(within.len(), 2);
    assert_eq!(
        within.get_unchecked(0).district,
        String::from_str(&env, "Pune")
    );
    assert_eq!(
        within.get_unchecked(1).district,
        String::from_str(&env, "Nashik")
    );

    // Default radius of 20 km keeps only the local report
    let local = contract.nearby_outbreaks(&PUNE.0, &PUNE.1, &None);
    assert_eq!(local.len(), 1);
    assert_eq!(
        local.get_unchecked(0).disease,
        String::from_str(&env, "Dengue")
    );
}

#[test]
fn test_nearby_query_validation() {
    let env = Env::default();
    let (contract, _admin) = setup_seeded(&env);

    let result = contract.try_nearby_outbreaks(&95_000_000, &PUNE.1, &Some(200));
    assert_eq!(result, Err(Ok(ContractError::InvalidCoordinates)));

    let result = contract.try_nearby_outbreaks(&PUNE.0, &PUNE.1, &Some(0));
    assert_eq!(result, Err(Ok(ContractError::InvalidRadius)));
}

#[test]
fn test_coordinate_recommendation() {
    let env = Env::default();
    let (contract, _admin) = setup_seeded(&env);

    // Pune (Dengue 34) and Nashik (Typhoid 22) drive the demand here
    let medicines = contract.recommend_medications(&near(PUNE.0, PUNE.1, Some(200)));
    assert_eq!(
        medicines,
        vec![
            &env,
            String::from_str(&env, "Paracetamol"),
            String::from_str(&env, "ORS"),
            String::from_str(&env, "Cefixime"),
        ]
    );
}

#[test]
fn test_recommendation_caps_at_five_diseases() {
    let env = Env::default();
    env.mock_all_auths();

    let contract = create_test_contract(&env);
    let admin = Address::generate(&env);
    contract.initialize(&admin);

    // Six diseases with distinct medicines and strictly decreasing cases
    let seeds = [
        ("D1", "M1", 60u32),
        ("D2", "M2", 50),
        ("D3", "M3", 40),
        ("D4", "M4", 30),
        ("D5", "M5", 20),
        ("D6", "M6", 10),
    ];
    for (disease, medicine, cases) in seeds {
        contract.add_disease_medicines(
            &admin,
            &String::from_str(&env, disease),
            &vec![&env, String::from_str(&env, medicine)],
        );
        contract.add_outbreak(
            &admin,
            &report(&env, "Maharashtra", "Pune", disease, cases, 0, PUNE),
        );
    }

    let medicines = contract.recommend_medications(&state(&env, "Maharashtra"));
    assert_eq!(
        medicines,
        vec![
            &env,
            String::from_str(&env, "M1"),
            String::from_str(&env, "M2"),
            String::from_str(&env, "M3"),
            String::from_str(&env, "M4"),
            String::from_str(&env, "M5"),
        ]
    );
}

#[test]
fn test_inventory_assessment_against_recommendation() {
    let env = Env::default();
    let (contract, _admin) = setup_seeded(&env);

    // Names match case-insensitively; 20 units is the last insufficient level
    let stock = vec![
        &env,
        StockLevel {
            name: String::from_str(&env, "paracetamol"),
            quantity: 21,
        },
        StockLevel {
            name: String::from_str(&env, "ORS"),
            quantity: 20,
        },
    ];

    let assessments = contract.assess_inventory(&state(&env, "Maharashtra"), &stock);
    assert_eq!(assessments.len(), 4);

    let cetirizine = assessments.get_unchecked(0);
    assert_eq!(cetirizine.medicine, String::from_str(&env, "Cetirizine"));
    assert_eq!(cetirizine.stock, 0);
    assert!(!cetirizine.sufficient);

    let paracetamol = assessments.get_unchecked(1);
    assert_eq!(paracetamol.stock, 21);
    assert!(paracetamol.sufficient);

    let ors = assessments.get_unchecked(2);
    assert_eq!(ors.stock, 20);
    assert!(!ors.sufficient);

    let cefixime = assessments.get_unchecked(3);
    assert_eq!(cefixime.stock, 0);
    assert!(!cefixime.sufficient);
}
