use soroban_sdk::{contracttype, Address, Env, String, Vec};

/// One reported disease cluster in a region/week. Seeded by the admin,
/// read-only afterwards.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OutbreakReport {
    pub state: String,
    pub district: String,
    pub disease: String,
    pub cases: u32,
    pub deaths: u32,
    pub week: u32,
    pub year: u32,
    pub latitude_e6: i64,
    pub longitude_e6: i64,
}

/// Disease to recommended-medicines lookup row.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DiseaseMedicines {
    pub disease: String,
    pub medicines: Vec<String>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeoPoint {
    pub latitude_e6: i64,
    pub longitude_e6: i64,
    pub radius_km: Option<u32>,
}

/// The two query modes are alternatives, never combined.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Region {
    State(String),
    Near(GeoPoint),
}

/// One medicine line of a holder's inventory snapshot.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StockLevel {
    pub name: String,
    pub quantity: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MedicineAssessment {
    pub medicine: String,
    pub sufficient: bool,
    pub stock: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StorageKey {
    Admin,
    DiseaseMap, // Vec<DiseaseMedicines>
    Outbreaks,  // Vec<OutbreakReport>
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&StorageKey::Admin, admin);
}

pub fn is_admin(env: &Env, entity: &Address) -> bool {
    let admin: Option<Address> = env.storage().instance().get(&StorageKey::Admin);
    match admin {
        Some(admin) => admin == *entity,
        None => false,
    }
}

pub fn get_disease_map(env: &Env) -> Vec<DiseaseMedicines> {
    env.storage()
        .persistent()
        .get(&StorageKey::DiseaseMap)
        .unwrap_or(Vec::new(env))
}

pub fn add_disease_medicines(env: &Env, entry: &DiseaseMedicines) {
    let mut map = get_disease_map(env);
    map.push_back(entry.clone());
    env.storage().persistent().set(&StorageKey::DiseaseMap, &map);
}

pub fn get_outbreaks(env: &Env) -> Vec<OutbreakReport> {
    env.storage()
        .persistent()
        .get(&StorageKey::Outbreaks)
        .unwrap_or(Vec::new(env))
}

pub fn add_outbreak(env: &Env, report: &OutbreakReport) {
    let mut reports = get_outbreaks(env);
    reports.push_back(report.clone());
    env.storage().persistent().set(&StorageKey::Outbreaks, &reports);
}
