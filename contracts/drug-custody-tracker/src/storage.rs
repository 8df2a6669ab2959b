use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Role {
    Manufacturer,
    Distributor,
    Wholesaler,
    Retailer,
    Pharmacy,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UnitStatus {
    InStock,
    Shipped,
    Sold,
    Expired,
    Recalled,
    Cancelled,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ShipmentStatus {
    Processing,
    InTransit,
    Delivered,
    Rejected,
    Cancelled,
}

/// One physically trackable drug instance, identified by its barcode.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DrugUnit {
    pub barcode: String,
    pub name: String,
    pub composition: String,
    pub dosage: String,
    pub batch_number: String,
    pub batch_barcode: String,
    pub manufacturer: Address,
    pub mfg_date: u64,
    pub expiry_date: u64,
    pub status: UnitStatus,
    pub holder: Address,
    pub holder_role: Role,
    pub registered_at: u64,
    pub last_updated: u64,
}

/// Registration attributes supplied by the manufacturer.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnitAttributes {
    pub name: String,
    pub composition: String,
    pub dosage: String,
    pub batch_number: String,
    pub batch_barcode: String,
    pub mfg_date: u64,
    pub expiry_date: u64,
}

/// One entry of a unit's custody timeline.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CustodyRecord {
    pub holder: Address,
    pub holder_role: Role,
    pub status: UnitStatus,
    pub timestamp: u64,
    pub note: Symbol,
}

/// One leg of a shipment's intended route.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShipmentLeg {
    pub participant: Address,
    pub role: Role,
    pub status: ShipmentStatus,
    pub expected_arrival: Option<u64>,
    pub actual_arrival: Option<u64>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Shipment {
    pub shipment_id: u64,
    pub unit_barcodes: Vec<String>,
    pub sender: Address,
    pub sender_role: Role,
    pub recipient: Address,
    pub recipient_role: Role,
    pub participants: Vec<ShipmentLeg>,
    pub status: ShipmentStatus,
    pub created_at: u64,
    pub estimated_delivery: Option<u64>,
    pub actual_delivery: Option<u64>,
    pub notes: Option<String>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CounterfeitReport {
    pub report_id: u64,
    pub barcode: String,
    pub reporter: Address,
    pub description: String,
    pub timestamp: u64,
    pub known_unit: bool,
}

// Storage key types
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StorageKey {
    Admin,
    Role(Address),              // entity -> Role
    Unit(String),               // barcode
    HolderUnits(Address),       // holder -> Vec<barcode>
    CustodyHistory(String),     // barcode -> Vec<CustodyRecord>
    OpenShipmentRef(String),    // barcode -> shipment_id while status is Shipped
    Shipment(u64),              // shipment_id
    PartyShipments(Address),    // sender or recipient -> Vec<shipment_id>
    CounterfeitReport(u64),     // report_id
}

// Counter keys
const SHIPMENT_COUNTER: Symbol = symbol_short!("SHP_CNT");
const REPORT_COUNTER: Symbol = symbol_short!("RPT_CNT");

pub fn next_shipment_id(env: &Env) -> u64 {
    let current = env
        .storage()
        .instance()
        .get(&SHIPMENT_COUNTER)
        .unwrap_or(0u64);
    let next = current + 1;
    env.storage().instance().set(&SHIPMENT_COUNTER, &next);
    next
}

pub fn next_report_id(env: &Env) -> u64 {
    let current = env
        .storage()
        .instance()
        .get(&REPORT_COUNTER)
        .unwrap_or(0u64);
    let next = current + 1;
    env.storage().instance().set(&REPORT_COUNTER, &next);
    next
}

pub fn report_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&REPORT_COUNTER)
        .unwrap_or(0u64)
}

// Admin storage functions
pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&StorageKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&StorageKey::Admin)
}

pub fn is_admin(env: &Env, entity: &Address) -> bool {
    match get_admin(env) {
        Some(admin) => admin == *entity,
        None => false,
    }
}

// Role storage functions
pub fn set_role(env: &Env, entity: &Address, role: &Role) {
    env.storage()
        .instance()
        .set(&StorageKey::Role(entity.clone()), role);
}

pub fn get_role(env: &Env, entity: &Address) -> Option<Role> {
    env.storage().instance().get(&StorageKey::Role(entity.clone()))
}

// Unit storage functions
pub fn get_unit(env: &Env, barcode: &String) -> Option<DrugUnit> {
    let key = StorageKey::Unit(barcode.clone());
    env.storage().persistent().get(&key)
}

pub fn set_unit(env: &Env, unit: &DrugUnit) {
    let key = StorageKey::Unit(unit.barcode.clone());
    env.storage().persistent().set(&key, unit);
}

// Holder inventory index
pub fn get_holder_unit_barcodes(env: &Env, holder: &Address) -> Vec<String> {
    let key = StorageKey::HolderUnits(holder.clone());
    env.storage().persistent().get(&key).unwrap_or(Vec::new(env))
}

pub fn add_holder_unit(env: &Env, holder: &Address, barcode: &String) {
    let key = StorageKey::HolderUnits(holder.clone());
    let mut barcodes = get_holder_unit_barcodes(env, holder);
    barcodes.push_back(barcode.clone());
    env.storage().persistent().set(&key, &barcodes);
}

pub fn remove_holder_unit(env: &Env, holder: &Address, barcode: &String) {
    let key = StorageKey::HolderUnits(holder.clone());
    let barcodes = get_holder_unit_barcodes(env, holder);
    let mut remaining = Vec::new(env);

    for code in barcodes.iter() {
        if code != *barcode {
            remaining.push_back(code);
        }
    }

    env.storage().persistent().set(&key, &remaining);
}

// Custody timeline
pub fn get_custody_history(env: &Env, barcode: &String) -> Vec<CustodyRecord> {
    let key = StorageKey::CustodyHistory(barcode.clone());
    env.storage().persistent().get(&key).unwrap_or(Vec::new(env))
}

pub fn add_custody_record(env: &Env, barcode: &String, record: &CustodyRecord) {
    let key = StorageKey::CustodyHistory(barcode.clone());
    let mut records = get_custody_history(env, barcode);
    records.push_back(record.clone());
    env.storage().persistent().set(&key, &records);
}

// Open shipment reference (one per shipped unit)
pub fn get_open_shipment_ref(env: &Env, barcode: &String) -> Option<u64> {
    let key = StorageKey::OpenShipmentRef(barcode.clone());
    env.storage().persistent().get(&key)
}

pub fn set_open_shipment_ref(env: &Env, barcode: &String, shipment_id: u64) {
    let key = StorageKey::OpenShipmentRef(barcode.clone());
    env.storage().persistent().set(&key, &shipment_id);
}

pub fn clear_open_shipment_ref(env: &Env, barcode: &String) {
    let key = StorageKey::OpenShipmentRef(barcode.clone());
    env.storage().persistent().remove(&key);
}

// Shipment storage functions
pub fn get_shipment(env: &Env, shipment_id: u64) -> Option<Shipment> {
    let key = StorageKey::Shipment(shipment_id);
    env.storage().persistent().get(&key)
}

pub fn set_shipment(env: &Env, shipment: &Shipment) {
    let key = StorageKey::Shipment(shipment.shipment_id);
    env.storage().persistent().set(&key, shipment);
}

// Party shipment index (sender and recipient views)
pub fn get_party_shipment_ids(env: &Env, party: &Address) -> Vec<u64> {
    let key = StorageKey::PartyShipments(party.clone());
    env.storage().persistent().get(&key).unwrap_or(Vec::new(env))
}

pub fn add_party_shipment(env: &Env, party: &Address, shipment_id: u64) {
    let key = StorageKey::PartyShipments(party.clone());
    let mut ids = get_party_shipment_ids(env, party);
    ids.push_back(shipment_id);
    env.storage().persistent().set(&key, &ids);
}

// Counterfeit report storage functions
pub fn get_counterfeit_report(env: &Env, report_id: u64) -> Option<CounterfeitReport> {
    let key = StorageKey::CounterfeitReport(report_id);
    env.storage().persistent().get(&key)
}

pub fn set_counterfeit_report(env: &Env, report: &CounterfeitReport) {
    let key = StorageKey::CounterfeitReport(report.report_id);
    env.storage().persistent().set(&key, report);
}
