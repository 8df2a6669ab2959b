#![no_std]

mod error;
mod events;
mod registry;
mod shipment;
mod storage;
mod utils;
mod verify;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use error::*;
pub use events::*;
pub use storage::{
    CounterfeitReport, CustodyRecord, DrugUnit, Role, Shipment, ShipmentLeg, ShipmentStatus,
    UnitAttributes, UnitStatus,
};
pub use verify::VerificationReport;

#[contract]
pub struct DrugCustodyTracker;

#[contractimpl]
impl DrugCustodyTracker {
    /// Initialize the contract with admin
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if storage::has_admin(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();
        storage::set_admin(&env, &admin);
        Ok(())
    }

    /// Assign a supply-chain role to an entity (admin only)
    pub fn assign_role(
        env: Env,
        admin: Address,
        entity: Address,
        role: Role,
    ) -> Result<(), ContractError> {
        admin.require_auth();
        if !storage::has_admin(&env) {
            return Err(ContractError::NotInitialized);
        }
        if !storage::is_admin(&env, &admin) {
            return Err(ContractError::AdminOnly);
        }
        storage::set_role(&env, &entity, &role);
        events::emit_role_assigned(&env, entity, role);
        Ok(())
    }

    pub fn get_role(env: Env, entity: Address) -> Option<Role> {
        storage::get_role(&env, &entity)
    }

    /// Register a new drug unit under the manufacturer's custody
    pub fn register_unit(
        env: Env,
        manufacturer: Address,
        barcode: String,
        attrs: UnitAttributes,
    ) -> Result<(), ContractError> {
        manufacturer.require_auth();
        registry::register_unit(&env, &manufacturer, barcode, attrs)
    }

    /// Units currently held by the holder, optionally filtered by status
    pub fn get_inventory(
        env: Env,
        holder: Address,
        status: Option<UnitStatus>,
    ) -> Vec<DrugUnit> {
        registry::get_inventory(&env, &holder, status)
    }

    pub fn get_unit(env: Env, barcode: String) -> Result<DrugUnit, ContractError> {
        registry::get_unit(&env, barcode)
    }

    /// Create a shipment; referenced units move to shipped status but remain
    /// in the sender's custody until acceptance
    pub fn create_shipment(
        env: Env,
        sender: Address,
        recipient: Address,
        unit_barcodes: Vec<String>,
        estimated_delivery: Option<u64>,
        notes: Option<String>,
    ) -> Result<u64, ContractError> {
        sender.require_auth();
        shipment::create_shipment(
            &env,
            &sender,
            recipient,
            unit_barcodes,
            estimated_delivery,
            notes,
        )
    }

    /// Sender confirms dispatch
    pub fn dispatch_shipment(
        env: Env,
        sender: Address,
        shipment_id: u64,
    ) -> Result<Shipment, ContractError> {
        sender.require_auth();
        shipment::dispatch_shipment(&env, &sender, shipment_id)
    }

    /// Recipient takes custody of all referenced units
    pub fn accept_shipment(
        env: Env,
        recipient: Address,
        shipment_id: u64,
    ) -> Result<Shipment, ContractError> {
        recipient.require_auth();
        shipment::accept_shipment(&env, &recipient, shipment_id)
    }

    /// Recipient declines; units revert to the original sender
    pub fn reject_shipment(
        env: Env,
        recipient: Address,
        shipment_id: u64,
    ) -> Result<Shipment, ContractError> {
        recipient.require_auth();
        shipment::reject_shipment(&env, &recipient, shipment_id)
    }

    /// Sender withdraws an unresolved shipment
    pub fn cancel_shipment(
        env: Env,
        sender: Address,
        shipment_id: u64,
    ) -> Result<Shipment, ContractError> {
        sender.require_auth();
        shipment::cancel_shipment(&env, &sender, shipment_id)
    }

    pub fn get_shipment(env: Env, shipment_id: u64) -> Result<Shipment, ContractError> {
        shipment::get_shipment(&env, shipment_id)
    }

    /// Shipments where the party is sender or recipient
    pub fn list_shipments(env: Env, party: Address) -> Vec<Shipment> {
        shipment::list_shipments(&env, &party)
    }

    /// Terminal sale at a pharmacy or retail counter
    pub fn mark_sold(env: Env, seller: Address, barcode: String) -> Result<(), ContractError> {
        seller.require_auth();
        registry::mark_sold(&env, &seller, barcode)
    }

    pub fn mark_expired(env: Env, holder: Address, barcode: String) -> Result<(), ContractError> {
        holder.require_auth();
        registry::mark_expired(&env, &holder, barcode)
    }

    /// Recall by the manufacturer of record or the admin
    pub fn mark_recalled(
        env: Env,
        caller: Address,
        barcode: String,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        registry::mark_recalled(&env, &caller, barcode)
    }

    /// Explicit write-off by the current holder
    pub fn cancel_unit(env: Env, holder: Address, barcode: String) -> Result<(), ContractError> {
        holder.require_auth();
        registry::cancel_unit(&env, &holder, barcode)
    }

    /// Administrative reversal of a recall or expiry mark
    pub fn reinstate_unit(
        env: Env,
        admin: Address,
        barcode: String,
    ) -> Result<(), ContractError> {
        admin.require_auth();
        registry::reinstate_unit(&env, &admin, barcode)
    }

    /// Authenticity lookup by barcode; unknown barcodes report found=false
    pub fn verify_unit(env: Env, barcode: String) -> Result<VerificationReport, ContractError> {
        verify::verify_unit(&env, barcode)
    }

    /// Ordered custody timeline for a known unit
    pub fn get_custody_history(
        env: Env,
        barcode: String,
    ) -> Result<Vec<CustodyRecord>, ContractError> {
        verify::get_custody_history(&env, barcode)
    }

    /// File a counterfeit suspicion; valid for unknown barcodes
    pub fn report_counterfeit(
        env: Env,
        reporter: Address,
        barcode: String,
        description: String,
    ) -> Result<u64, ContractError> {
        reporter.require_auth();
        verify::report_counterfeit(&env, &reporter, barcode, description)
    }

    pub fn list_counterfeit_reports(
        env: Env,
        caller: Address,
    ) -> Result<Vec<CounterfeitReport>, ContractError> {
        caller.require_auth();
        verify::list_counterfeit_reports(&env, &caller)
    }
}
