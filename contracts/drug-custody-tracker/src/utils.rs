use crate::storage::{Role, ShipmentStatus, UnitStatus};
use soroban_sdk::String;

const MAX_BARCODE_LEN: usize = 64;

// Barcodes are alphanumeric with dashes, 1..=64 bytes
pub fn is_valid_barcode(barcode: &String) -> bool {
    let len = barcode.len() as usize;
    if len == 0 || len > MAX_BARCODE_LEN {
        return false;
    }

    let mut buf = [0u8; MAX_BARCODE_LEN];
    barcode.copy_into_slice(&mut buf[..len]);

    for &byte in &buf[..len] {
        if !(byte.is_ascii_alphanumeric() || byte == b'-') {
            return false;
        }
    }

    true
}

// Manufacturing must precede expiry
pub fn is_valid_date(mfg_date: u64, expiry_date: u64) -> bool {
    mfg_date < expiry_date
}

pub fn is_nonempty(value: &String) -> bool {
    value.len() > 0
}

/// Closed table of allowed (sender, recipient) role pairs. Goods only move
/// down the chain; retailers and pharmacies do not ship onward.
pub fn is_allowed_route(sender: &Role, recipient: &Role) -> bool {
    match sender {
        Role::Manufacturer => matches!(
            recipient,
            Role::Distributor | Role::Wholesaler | Role::Retailer | Role::Pharmacy
        ),
        Role::Distributor => matches!(
            recipient,
            Role::Wholesaler | Role::Retailer | Role::Pharmacy
        ),
        Role::Wholesaler => matches!(recipient, Role::Retailer | Role::Pharmacy),
        Role::Retailer | Role::Pharmacy => false,
    }
}

/// Unit status transition table. Terminal states only leave via the explicit
/// administrative reversal path, which bypasses this check.
pub fn is_allowed_transition(from: &UnitStatus, to: &UnitStatus) -> bool {
    match (from, to) {
        (
            UnitStatus::InStock,
            UnitStatus::Shipped
            | UnitStatus::Sold
            | UnitStatus::Expired
            | UnitStatus::Recalled
            | UnitStatus::Cancelled,
        ) => true,
        // Acceptance or rejection returns a shipped unit to stock
        (UnitStatus::Shipped, UnitStatus::InStock) => true,
        _ => false,
    }
}

pub fn is_terminal_shipment(status: &ShipmentStatus) -> bool {
    matches!(
        status,
        ShipmentStatus::Delivered | ShipmentStatus::Rejected | ShipmentStatus::Cancelled
    )
}

const SECONDS_PER_DAY: u64 = 86400;

/// Whole days until expiry, rounded up; negative once expired.
pub fn days_until(now: u64, expiry: u64) -> i64 {
    if expiry >= now {
        ((expiry - now + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY) as i64
    } else {
        -(((now - expiry) / SECONDS_PER_DAY) as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{Env, String};

    #[test]
    fn test_barcode_validation() {
        let env = Env::default();
        assert!(is_valid_barcode(&String::from_str(&env, "DRG-2025-0001")));
        assert!(is_valid_barcode(&String::from_str(&env, "8901234567890")));
        assert!(!is_valid_barcode(&String::from_str(&env, "")));
        assert!(!is_valid_barcode(&String::from_str(&env, "DRG 001")));
        assert!(!is_valid_barcode(&String::from_str(&env, "DRG_001")));
        assert!(!is_valid_barcode(&String::from_str(&env, "DRG#001")));
    }

    #[test]
    fn test_route_table() {
        assert!(is_allowed_route(&Role::Manufacturer, &Role::Distributor));
        assert!(is_allowed_route(&Role::Manufacturer, &Role::Pharmacy));
        assert!(is_allowed_route(&Role::Distributor, &Role::Wholesaler));
        assert!(is_allowed_route(&Role::Wholesaler, &Role::Retailer));
        assert!(!is_allowed_route(&Role::Distributor, &Role::Manufacturer));
        assert!(!is_allowed_route(&Role::Wholesaler, &Role::Distributor));
        assert!(!is_allowed_route(&Role::Retailer, &Role::Pharmacy));
        assert!(!is_allowed_route(&Role::Pharmacy, &Role::Retailer));
    }

    #[test]
    fn test_transition_table() {
        assert!(is_allowed_transition(&UnitStatus::InStock, &UnitStatus::Shipped));
        assert!(is_allowed_transition(&UnitStatus::Shipped, &UnitStatus::InStock));
        assert!(is_allowed_transition(&UnitStatus::InStock, &UnitStatus::Sold));
        assert!(!is_allowed_transition(&UnitStatus::Shipped, &UnitStatus::Sold));
        assert!(!is_allowed_transition(&UnitStatus::Sold, &UnitStatus::InStock));
        assert!(!is_allowed_transition(&UnitStatus::Recalled, &UnitStatus::Shipped));
        assert!(!is_allowed_transition(&UnitStatus::Cancelled, &UnitStatus::InStock));
    }

    #[test]
    fn test_days_until() {
        assert_eq!(days_until(0, 86400), 1);
        assert_eq!(days_until(0, 86401), 2);
        assert_eq!(days_until(1000, 1000), 0);
        assert_eq!(days_until(86400 * 10, 86400 * 40), 30);
        assert_eq!(days_until(86400 * 2, 86400), -1);
    }
}
