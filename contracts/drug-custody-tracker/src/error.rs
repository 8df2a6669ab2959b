use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // Initialization errors
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Authorization errors
    Unauthorized = 3,
    AdminOnly = 4,
    RoleNotAssigned = 5,

    // Validation errors
    InvalidBarcode = 6,
    InvalidDate = 7,
    MissingField = 8,
    InvalidInput = 9,

    // Unit errors
    UnitNotFound = 10,
    UnitAlreadyExists = 11,
    UnitNotAvailable = 12,
    InvalidTransition = 13,
    DuplicateUnit = 14,

    // Shipment errors
    ShipmentNotFound = 15,
    InvalidRecipient = 16,
    AlreadyResolved = 17,
    EmptyShipment = 18,
}
