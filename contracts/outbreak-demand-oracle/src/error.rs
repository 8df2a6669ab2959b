use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // Initialization errors
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Authorization errors
    AdminOnly = 3,

    // Validation errors
    InvalidInput = 4,
    InvalidCoordinates = 5,
    InvalidRadius = 6,
}
