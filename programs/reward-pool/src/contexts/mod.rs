use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::state::*;

// ACCOUNTS - Instruction account validation structs

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(init, payer = admin, space = 8 + PoolState::LEN, seeds = [POOL_STATE_SEED], bump)]
    pub pool_state: Account<'info, PoolState>,
    #[account(
        init,
        payer = admin,
        space = 8 + TeamRegistry::LEN,
        seeds = [TEAM_REGISTRY_SEED, pool_state.key().as_ref()],
        bump
    )]
    pub team_registry: Account<'info, TeamRegistry>,
    /// Vault PDA - receives the rent-exempt reserve here
    #[account(mut, seeds = [VAULT_SEED, pool_state.key().as_ref()], bump)]
    pub vault: SystemAccount<'info>,
    #[account(mut)]
    pub admin: Signer<'info>,
    pub system_program: Program<'info, System>,
}

/// Deposit - Stake lamports; creates the depositor record on first use
#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut, seeds = [POOL_STATE_SEED], bump = pool_state.bump)]
    pub pool_state: Account<'info, PoolState>,
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + Depositor::LEN,
        seeds = [DEPOSITOR_SEED, pool_state.key().as_ref(), owner.key().as_ref()],
        bump
    )]
    pub depositor: Account<'info, Depositor>,
    #[account(mut, seeds = [VAULT_SEED, pool_state.key().as_ref()], bump = pool_state.vault_bump)]
    pub vault: SystemAccount<'info>,
    #[account(mut)]
    pub owner: Signer<'info>,
    pub system_program: Program<'info, System>,
}

/// Withdraw - Unstake lamports and receive all owed rewards
///
/// Also used by `claim`, which pays owed rewards without unstaking.
#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut, seeds = [POOL_STATE_SEED], bump = pool_state.bump)]
    pub pool_state: Account<'info, PoolState>,
    #[account(
        mut,
        seeds = [DEPOSITOR_SEED, pool_state.key().as_ref(), owner.key().as_ref()],
        bump = depositor.bump,
        has_one = owner @ ErrorCode::InvalidDepositor
    )]
    pub depositor: Account<'info, Depositor>,
    #[account(mut, seeds = [VAULT_SEED, pool_state.key().as_ref()], bump = pool_state.vault_bump)]
    pub vault: SystemAccount<'info>,
    #[account(mut)]
    pub owner: Signer<'info>,
    pub system_program: Program<'info, System>,
}

/// DepositRewards - Team member injects rewards for current stakers
///
/// Membership is checked in the handler so a non-member gets
/// ErrorCode::Unauthorized rather than a constraint error.
#[derive(Accounts)]
pub struct DepositRewards<'info> {
    #[account(mut, seeds = [POOL_STATE_SEED], bump = pool_state.bump)]
    pub pool_state: Account<'info, PoolState>,
    #[account(seeds = [TEAM_REGISTRY_SEED, pool_state.key().as_ref()], bump = team_registry.bump)]
    pub team_registry: Account<'info, TeamRegistry>,
    #[account(mut, seeds = [VAULT_SEED, pool_state.key().as_ref()], bump = pool_state.vault_bump)]
    pub vault: SystemAccount<'info>,
    #[account(mut)]
    pub team_member: Signer<'info>,
    pub system_program: Program<'info, System>,
}

// VIEWS - Read-only, results returned through return data

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct DepositorView<'info> {
    #[account(seeds = [POOL_STATE_SEED], bump = pool_state.bump)]
    pub pool_state: Account<'info, PoolState>,
    /// CHECK: Address pinned by seeds. May not exist yet; read as the
    /// zero record via Depositor::load_or_default.
    #[account(seeds = [DEPOSITOR_SEED, pool_state.key().as_ref(), owner.as_ref()], bump)]
    pub depositor: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct PoolView<'info> {
    #[account(seeds = [POOL_STATE_SEED], bump = pool_state.bump)]
    pub pool_state: Account<'info, PoolState>,
}

#[derive(Accounts)]
pub struct TeamView<'info> {
    #[account(seeds = [POOL_STATE_SEED], bump = pool_state.bump)]
    pub pool_state: Account<'info, PoolState>,
    #[account(seeds = [TEAM_REGISTRY_SEED, pool_state.key().as_ref()], bump = team_registry.bump)]
    pub team_registry: Account<'info, TeamRegistry>,
}
