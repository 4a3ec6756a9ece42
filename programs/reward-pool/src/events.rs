use anchor_lang::prelude::*;

// ══════════════════════════════════════════════════════════════════════════════
// INITIALIZATION EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when the pool, vault and team registry are created
#[event]
pub struct PoolInitialized {
    pub admin: Pubkey,
    pub vault: Pubkey,
    pub team_members: u8,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// STAKE EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted after a deposit is committed
#[event]
pub struct Deposited {
    pub owner: Pubkey,
    pub amount: u64,
    pub stake: u64,
    pub total_stake: u64,
    pub timestamp: i64,
}

/// Emitted after a withdrawal is paid out
#[event]
pub struct Withdrawn {
    pub owner: Pubkey,
    pub amount: u64,
    pub reward: u64,
    pub payout: u64,
    pub total_stake: u64,
    pub timestamp: i64,
}

// ══════════════════════════════════════════════════════════════════════════════
// REWARD EVENTS
// ══════════════════════════════════════════════════════════════════════════════

/// Emitted when a team member injects rewards
#[event]
pub struct RewardsDeposited {
    pub team_member: Pubkey,
    pub amount: u64,
    pub total_stake: u64,
    pub acc_reward_per_share: u128,
    pub reward_pool_balance: u64,
    pub timestamp: i64,
}

/// Emitted when owed rewards are paid out without unstaking
#[event]
pub struct RewardsClaimed {
    pub owner: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
