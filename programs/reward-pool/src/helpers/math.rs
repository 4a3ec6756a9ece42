use anchor_lang::prelude::*;
use crate::constants::SCALE;
use crate::errors::ErrorCode;

/// Accumulator advance for a single reward injection
///
/// Formula: delta = amount * SCALE / total_stake
///
/// Truncates toward zero. The scaled remainder is never assigned to any
/// unit of stake, so the lamports it represents stay in the vault.
pub fn reward_per_share_delta(amount: u64, total_stake: u64) -> Result<u128> {
    require!(total_stake > 0, ErrorCode::EmptyPool);

    let scaled = (amount as u128)
        .checked_mul(SCALE)
        .ok_or(ErrorCode::MathOverflow)?;

    #[cfg(feature = "verbose")]
    msg!("reward_per_share_delta: amount={}, total_stake={}", amount, total_stake);

    Ok(scaled / total_stake as u128)
}

/// Reward accrued by `stake` since the `reward_debt` snapshot
///
/// Formula: stake * (acc_reward_per_share - reward_debt) / SCALE
///
/// Truncates toward zero, so a depositor never receives more than the
/// accumulator growth actually funded.
pub fn accrued_reward(stake: u64, acc_reward_per_share: u128, reward_debt: u128) -> Result<u64> {
    // A snapshot ahead of the accumulator means corrupted state
    let growth = acc_reward_per_share
        .checked_sub(reward_debt)
        .ok_or(ErrorCode::MathOverflow)?;

    let scaled = (stake as u128)
        .checked_mul(growth)
        .ok_or(ErrorCode::MathOverflow)?;

    u64::try_from(scaled / SCALE).map_err(|_| error!(ErrorCode::MathOverflow))
}

/// Split lamports into (whole SOL, fractional lamports) for log output
pub fn format_lamports(amount: u64) -> (u64, u64) {
    (amount / 1_000_000_000, amount % 1_000_000_000)
}
