use anchor_lang::prelude::*;

/// Reward Pool Error Codes
///
/// Every error aborts the instruction; the runtime reverts all account
/// writes, so no operation is ever partially applied.
#[error_code]
pub enum ErrorCode {
    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Withdrawal exceeds deposited stake")]
    InsufficientBalance,

    #[msg("Cannot distribute rewards to an empty pool")]
    EmptyPool,

    #[msg("Caller is not a team member")]
    Unauthorized,

    #[msg("Value transfer failed")]
    TransferFailed,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("No rewards to claim")]
    NothingToClaim,

    #[msg("Too many team members")]
    TooManyTeamMembers,

    #[msg("Duplicate team member")]
    DuplicateTeamMember,

    #[msg("Depositor record does not belong to signer")]
    InvalidDepositor,
}
