// ══════════════════════════════════════════════════════════════════════════════
// PDA SEEDS
// ══════════════════════════════════════════════════════════════════════════════

/// Pool State PDA seed (one pool per program instance)
pub const POOL_STATE_SEED: &[u8] = b"pool_state";

/// Vault PDA seed - system-owned account holding stake and reward lamports
pub const VAULT_SEED: &[u8] = b"vault";

/// Team Registry PDA seed (privileged accounts allowed to inject rewards)
pub const TEAM_REGISTRY_SEED: &[u8] = b"team_registry";

/// Depositor PDA seed (per-owner stake record)
pub const DEPOSITOR_SEED: &[u8] = b"depositor";

// ══════════════════════════════════════════════════════════════════════════════
// ACCUMULATOR PRECISION
// ══════════════════════════════════════════════════════════════════════════════

/// Fixed-point scale of `acc_reward_per_share` (1e18)
///
/// Headroom: max u64 amount * SCALE ~= 1.8e37 < u128::MAX ~= 3.4e38,
/// so a single injection can never overflow the scaled numerator.
pub const SCALE: u128 = 1_000_000_000_000_000_000;

// ══════════════════════════════════════════════════════════════════════════════
// ACCESS CONTROL
// ══════════════════════════════════════════════════════════════════════════════

/// Maximum number of team members (initializer included)
pub const MAX_TEAM_MEMBERS: usize = 16;
