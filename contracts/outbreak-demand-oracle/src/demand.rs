use crate::error::ContractError;
use crate::geo;
use crate::storage;
use crate::storage::{GeoPoint, MedicineAssessment, OutbreakReport, Region, StockLevel};
use crate::utils;
use soroban_sdk::{Env, String, Vec};

/// Radius applied when a coordinate query names none.
pub const DEFAULT_RADIUS_KM: u32 = 20;
/// Demand is driven by the heaviest outbreaks only.
const TOP_DISEASES: u32 = 5;
/// Units on hand above which a medicine counts as sufficiently stocked.
const SUFFICIENT_STOCK: u32 = 20;

pub fn nearby_outbreaks(
    env: &Env,
    latitude_e6: i64,
    longitude_e6: i64,
    radius_km: Option<u32>,
) -> Result<Vec<OutbreakReport>, ContractError> {
    let point = GeoPoint {
        latitude_e6,
        longitude_e6,
        radius_km,
    };
    filter_by_point(env, &point)
}

/// Outbreaks in the queried region, by state equality or haversine radius.
fn filter_outbreaks(env: &Env, region: &Region) -> Result<Vec<OutbreakReport>, ContractError> {
    match region {
        Region::State(state) => {
            if !utils::is_nonempty(state) {
                return Err(ContractError::InvalidInput);
            }
            let mut matched = Vec::new(env);
            for report in storage::get_outbreaks(env).iter() {
                if report.state == *state {
                    matched.push_back(report);
                }
            }
            Ok(matched)
        }
        Region::Near(point) => filter_by_point(env, point),
    }
}

fn filter_by_point(env: &Env, point: &GeoPoint) -> Result<Vec<OutbreakReport>, ContractError> {
    if !utils::is_valid_latitude(point.latitude_e6) || !utils::is_valid_longitude(point.longitude_e6)
    {
        return Err(ContractError::InvalidCoordinates);
    }
    let radius_km = point.radius_km.unwrap_or(DEFAULT_RADIUS_KM);
    if radius_km == 0 {
        return Err(ContractError::InvalidRadius);
    }
    let radius_m = radius_km as u64 * 1000;

    let mut matched = Vec::new(env);
    for report in storage::get_outbreaks(env).iter() {
        let distance = geo::haversine_m(
            point.latitude_e6,
            point.longitude_e6,
            report.latitude_e6,
            report.longitude_e6,
        );
        if distance <= radius_m {
            matched.push_back(report);
        }
    }
    Ok(matched)
}

/// Diseases ranked by summed case counts, heaviest first, capped at
/// TOP_DISEASES. First-seen order breaks ties.
fn rank_diseases(env: &Env, outbreaks: &Vec<OutbreakReport>) -> Vec<String> {
    let mut diseases: Vec<String> = Vec::new(env);
    let mut totals: Vec<u64> = Vec::new(env);

    for report in outbreaks.iter() {
        let mut found = false;
        for i in 0..diseases.len() {
            if diseases.get_unchecked(i) == report.disease {
                totals.set(i, totals.get_unchecked(i) + report.cases as u64);
                found = true;
                break;
            }
        }
        if !found {
            diseases.push_back(report.disease.clone());
            totals.push_back(report.cases as u64);
        }
    }

    let count = diseases.len();
    let mut picked: Vec<bool> = Vec::new(env);
    for _ in 0..count {
        picked.push_back(false);
    }

    let mut ranked: Vec<String> = Vec::new(env);
    while ranked.len() < TOP_DISEASES && ranked.len() < count {
        let mut best: Option<u32> = None;
        let mut best_cases = 0u64;
        for i in 0..count {
            if picked.get_unchecked(i) {
                continue;
            }
            let cases = totals.get_unchecked(i);
            if best.is_none() || cases > best_cases {
                best = Some(i);
                best_cases = cases;
            }
        }
        match best {
            Some(i) => {
                picked.set(i, true);
                ranked.push_back(diseases.get_unchecked(i));
            }
            None => break,
        }
    }

    ranked
}

/// Medicines for the region's heaviest outbreaks, ordered by disease case
/// volume with duplicates collapsed.
pub fn recommend_medications(env: &Env, region: &Region) -> Result<Vec<String>, ContractError> {
    let outbreaks = filter_outbreaks(env, region)?;
    let ranked = rank_diseases(env, &outbreaks);
    let disease_map = storage::get_disease_map(env);

    let mut medicines: Vec<String> = Vec::new(env);
    for disease in ranked.iter() {
        for entry in disease_map.iter() {
            if entry.disease != disease {
                continue;
            }
            for medicine in entry.medicines.iter() {
                if !contains(&medicines, &medicine) {
                    medicines.push_back(medicine.clone());
                }
            }
        }
    }

    Ok(medicines)
}

/// Checks a holder's stock snapshot against the regional recommendation.
pub fn assess_inventory(
    env: &Env,
    region: &Region,
    stock: &Vec<StockLevel>,
) -> Result<Vec<MedicineAssessment>, ContractError> {
    let medications = recommend_medications(env, region)?;

    let mut assessments = Vec::new(env);
    for medicine in medications.iter() {
        let mut quantity = 0u32;
        for line in stock.iter() {
            if utils::eq_ignore_ascii_case(&line.name, &medicine) {
                quantity = line.quantity;
                break;
            }
        }
        assessments.push_back(MedicineAssessment {
            medicine,
            sufficient: quantity > SUFFICIENT_STOCK,
            stock: quantity,
        });
    }

    Ok(assessments)
}

fn contains(haystack: &Vec<String>, needle: &String) -> bool {
    for item in haystack.iter() {
        if item == *needle {
            return true;
        }
    }
    false
}
