use anchor_lang::prelude::*;
use crate::constants::MAX_TEAM_MEMBERS;
use crate::errors::ErrorCode;
use crate::processor::Membership;

/// Accounts allowed to inject rewards
///
/// Fixed at initialization: the initializer plus any extra members passed
/// to `initialize`. No instruction mutates it afterwards.
///
/// PDA Seeds: ["team_registry", pool_state]
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct TeamRegistry {
    /// PDA bump seed
    pub bump: u8,

    /// Team member addresses, at most MAX_TEAM_MEMBERS
    pub members: Vec<Pubkey>,
}

impl TeamRegistry {
    /// Account size calculation:
    /// - bump: 1 byte
    /// - members: 4 byte length prefix + 32 * MAX_TEAM_MEMBERS
    /// Total: 517 bytes
    pub const LEN: usize = 1 + 4 + 32 * MAX_TEAM_MEMBERS;

    /// Build the member list: `admin` first, then the extras in order.
    pub fn with_members(admin: Pubkey, extra_members: &[Pubkey], bump: u8) -> Result<Self> {
        require!(
            extra_members.len() < MAX_TEAM_MEMBERS,
            ErrorCode::TooManyTeamMembers
        );

        let mut members = Vec::with_capacity(extra_members.len() + 1);
        members.push(admin);
        for member in extra_members {
            require!(!members.contains(member), ErrorCode::DuplicateTeamMember);
            members.push(*member);
        }

        Ok(Self { bump, members })
    }

    pub fn is_member(&self, account: &Pubkey) -> bool {
        self.members.contains(account)
    }
}

impl Membership for TeamRegistry {
    fn is_privileged(&self, account: &Pubkey) -> bool {
        self.is_member(account)
    }
}
