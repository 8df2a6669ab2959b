#![no_std]

mod demand;
mod error;
mod events;
mod geo;
mod outbreaks;
mod storage;
mod utils;

#[cfg(test)]
mod tests;

pub use crate::error::ContractError;
pub use crate::storage::{
    DiseaseMedicines, GeoPoint, MedicineAssessment, OutbreakReport, Region, StockLevel,
};

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

/// Read-mostly oracle over public-health outbreak surveillance data.
///
/// The admin seeds a disease-to-medicines map and a feed of outbreak
/// reports; anyone can then query the feed by state or by coordinates to
/// estimate which medicines a regional holder should be stocking.
#[contract]
pub struct OutbreakDemandOracle;

#[contractimpl]
impl OutbreakDemandOracle {
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        admin.require_auth();
        outbreaks::initialize(&env, &admin)
    }

    pub fn add_disease_medicines(
        env: Env,
        caller: Address,
        disease: String,
        medicines: Vec<String>,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        outbreaks::add_disease_medicines(&env, &caller, disease, medicines)
    }

    pub fn add_outbreak(
        env: Env,
        caller: Address,
        report: OutbreakReport,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        outbreaks::add_outbreak(&env, &caller, report)
    }

    pub fn list_diseases(env: Env) -> Vec<DiseaseMedicines> {
        outbreaks::list_diseases(&env)
    }

    pub fn list_outbreaks(env: Env) -> Vec<OutbreakReport> {
        outbreaks::list_outbreaks(&env)
    }

    /// Outbreak reports within `radius_km` (default 20) of a coordinate.
    pub fn nearby_outbreaks(
        env: Env,
        latitude_e6: i64,
        longitude_e6: i64,
        radius_km: Option<u32>,
    ) -> Result<Vec<OutbreakReport>, ContractError> {
        demand::nearby_outbreaks(&env, latitude_e6, longitude_e6, radius_km)
    }

    /// Medicines for the region's heaviest current outbreaks, ordered by
    /// case volume.
    pub fn recommend_medications(
        env: Env,
        region: Region,
    ) -> Result<Vec<String>, ContractError> {
        demand::recommend_medications(&env, &region)
    }

    /// Compares a holder's stock snapshot against the regional
    /// recommendation, one assessment per recommended medicine.
    pub fn assess_inventory(
        env: Env,
        region: Region,
        stock: Vec<StockLevel>,
    ) -> Result<Vec<MedicineAssessment>, ContractError> {
        demand::assess_inventory(&env, &region, &stock)
    }
}
