// ============================================================================
// FORMAL VERIFICATION & PROPERTY-BASED TESTS
// ============================================================================
//
// Run with: cargo test --lib formal_verification
//
// This module implements:
// 1. Core invariants (deterministic vectors)
// 2. Property-based tests over random operation sequences (proptest)
// 3. Arithmetic boundary checks
// ============================================================================

#[cfg(test)]
mod formal_tests {
    use crate::constants::*;
    use crate::helpers::ledger;
    use crate::helpers::math::*;
    use crate::state::{Depositor, PoolState};
    use crate::ErrorCode;
    use anchor_lang::prelude::Result;
    use proptest::prelude::*;

    const ACTORS: usize = 5;
    const MAX_AMOUNT: u64 = 1_000_000_000_000;

    /// Ledger driven directly, custody tracked as a plain counter
    struct SimulatedPool {
        pool: PoolState,
        depositors: Vec<Depositor>,
        custody: u128,
    }

    impl SimulatedPool {
        fn new() -> Self {
            Self {
                pool: PoolState::default(),
                depositors: vec![Depositor::default(); ACTORS],
                custody: 0,
            }
        }

        fn deposit(&mut self, who: usize, amount: u64) {
            ledger::deposit_stake(&mut self.pool, &mut self.depositors[who], amount).unwrap();
            self.custody += amount as u128;
        }

        fn withdraw(&mut self, who: usize, amount: u64) -> u64 {
            let payout =
                ledger::withdraw_stake(&mut self.pool, &mut self.depositors[who], amount).unwrap();
            self.custody -= payout as u128;
            payout
        }

        fn reward(&mut self, amount: u64) -> Result<()> {
            self.pool.inject_reward(amount)?;
            self.custody += amount as u128;
            Ok(())
        }

        fn pending(&self, who: usize) -> u64 {
            self.depositors[who]
                .pending_reward(self.pool.acc_reward_per_share())
                .unwrap()
        }

        fn stake_sum(&self) -> u64 {
            self.depositors.iter().map(|d| d.stake).sum()
        }

        fn liabilities(&self) -> u128 {
            (0..ACTORS).map(|who| self.pending(who) as u128).sum::<u128>()
                + self.pool.total_stake as u128
        }
    }

    fn anchor_code(err: anchor_lang::error::Error) -> u32 {
        match err {
            anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
            anchor_lang::error::Error::ProgramError(_) => u32::MAX,
        }
    }

    // ========================================================================
    // SECTION 1: CORE INVARIANTS
    // ========================================================================

    mod invariants {
        use super::*;

        /// INV-1: Proportional distribution
        /// For stakes snapshotted right before an injection of R, each
        /// staker gains floor(s_i * R / T) or one lamport less, and the
        /// total handed out never exceeds R. Checked on a fresh pool and
        /// on one whose accumulator already holds truncated value.
        #[test]
        fn inv1_proportional_distribution() {
            let test_cases: Vec<(Vec<u64>, u64)> = vec![
                (vec![100, 300], 200),
                (vec![1, 1, 1], 10),
                (vec![7, 11, 13, 17], 1_000_003),
                (vec![1_000_000_000, 1], 999_999_999),
                (vec![MAX_AMOUNT, MAX_AMOUNT / 3, 5], MAX_AMOUNT),
            ];
            let seeded = ACTORS - 1;

            for (stakes, reward) in test_cases {
                for seed_stake in [0u64, 3] {
                    let mut sim = SimulatedPool::new();
                    if seed_stake > 0 {
                        sim.deposit(seeded, seed_stake);
                        sim.reward(1).unwrap();
                    }
                    for (who, stake) in stakes.iter().enumerate() {
                        sim.deposit(who, *stake);
                    }
                    let total: u64 = stakes.iter().sum::<u64>() + seed_stake;
                    sim.reward(reward).unwrap();

                    let mut distributed = 0u128;
                    for (who, stake) in stakes.iter().enumerate() {
                        let exact = (*stake as u128 * reward as u128 / total as u128) as u64;
                        let got = sim.pending(who);
                        assert!(
                            got <= exact && got + 1 >= exact,
                            "INV-1 violated: got {} expected ~{} for stake {} of {}",
                            got, exact, stake, total
                        );
                        distributed += got as u128;
                    }
                    assert!(distributed <= reward as u128);
                }
            }
        }

        /// INV-1b: Cumulative distribution at constant stake
        /// Across any run of injections, each staker's accrual is
        /// floor(s_i * sum(R) / T) or one lamport less, and the total
        /// never exceeds sum(R). A single injection inside the run may
        /// release value truncated by earlier ones, so the bound is on
        /// the run, not on each step.
        #[test]
        fn inv1b_cumulative_distribution() {
            let test_cases: Vec<(Vec<u64>, Vec<u64>)> = vec![
                (vec![1, 1, 1], vec![1, 1, 1]),
                (vec![1, 1], vec![1, 1]),
                (vec![2, 1], vec![1, 1, 1, 1]),
                (vec![3, 5, 7], vec![2, 9, 1, 17, 4]),
                (vec![MAX_AMOUNT, 1], vec![MAX_AMOUNT, 3, MAX_AMOUNT]),
            ];

            for (stakes, rewards) in test_cases {
                let mut sim = SimulatedPool::new();
                for (who, stake) in stakes.iter().enumerate() {
                    sim.deposit(who, *stake);
                }
                for reward in &rewards {
                    sim.reward(*reward).unwrap();
                }

                let total: u128 = stakes.iter().map(|s| *s as u128).sum();
                let injected: u128 = rewards.iter().map(|r| *r as u128).sum();
                let mut distributed = 0u128;
                for (who, stake) in stakes.iter().enumerate() {
                    let exact = *stake as u128 * injected / total;
                    let got = sim.pending(who) as u128;
                    assert!(
                        got <= exact && got + 1 >= exact,
                        "INV-1b violated: got {} expected ~{} for stake {} of {}",
                        got, exact, stake, total
                    );
                    distributed += got;
                }
                assert!(distributed <= injected);
            }
        }

        /// INV-2: No retroactive rewards
        #[test]
        fn inv2_no_retroactive_rewards() {
            for late_stake in [1u64, 100, MAX_AMOUNT] {
                let mut sim = SimulatedPool::new();
                sim.deposit(0, 100);
                sim.reward(1_000).unwrap();
                sim.deposit(1, late_stake);

                assert_eq!(sim.pending(1), 0, "late stake {} earned past reward", late_stake);
                assert_eq!(sim.pending(0), 1_000);
            }
        }

        /// INV-3: Settlement is idempotent
        #[test]
        fn inv3_idempotent_settlement() {
            let mut depositor = Depositor { stake: 12_345, ..Default::default() };
            let acc = 3 * SCALE + 17;

            let first = depositor.settle(acc).unwrap();
            let second = depositor.settle(acc).unwrap();

            assert_eq!(first, 37_035);
            assert_eq!(second, 0);
            assert_eq!(depositor.owed, first);
        }

        /// INV-4: Conservation without rewards
        /// Everything deposited comes back out, lamport for lamport.
        #[test]
        fn inv4_conservation_without_rewards() {
            let mut sim = SimulatedPool::new();
            let deposits = [(0usize, 500u64), (1, 250), (0, 125), (2, 1), (3, 999)];
            let mut deposited = 0u64;
            for (who, amount) in deposits {
                sim.deposit(who, amount);
                deposited += amount;
                assert_eq!(sim.stake_sum(), sim.pool.total_stake);
            }

            let mut paid = 0u64;
            for who in 0..ACTORS {
                let stake = sim.depositors[who].stake;
                if stake > 0 {
                    paid += sim.withdraw(who, stake);
                }
                assert_eq!(sim.stake_sum(), sim.pool.total_stake);
            }

            assert_eq!(paid, deposited);
            assert_eq!(sim.pool.total_stake, 0);
            assert_eq!(sim.custody, 0);
        }

        /// INV-5: Empty pool never accepts rewards
        #[test]
        fn inv5_empty_pool_guard() {
            let mut sim = SimulatedPool::new();
            let err = sim.reward(1).unwrap_err();
            assert_eq!(anchor_code(err), u32::from(ErrorCode::EmptyPool));

            sim.deposit(0, 10);
            sim.withdraw(0, 10);
            let err = sim.reward(1).unwrap_err();
            assert_eq!(anchor_code(err), u32::from(ErrorCode::EmptyPool));
            assert_eq!(sim.pool.reward_pool_balance, 0);
        }
    }

    // ========================================================================
    // SECTION 2: ARITHMETIC BOUNDARIES
    // ========================================================================

    mod boundaries {
        use super::*;

        /// Full u64 reward over a single lamport of stake fits in u128
        #[test]
        fn bound1_max_delta_fits() {
            let delta = reward_per_share_delta(u64::MAX, 1).unwrap();
            assert_eq!(delta, u64::MAX as u128 * SCALE);
        }

        /// Delta never over-assigns and truncates by less than one unit of stake
        #[test]
        fn bound2_delta_truncation() {
            for total in [1u64, 2, 3, 7, 1_000_003, u64::MAX] {
                for amount in [1u64, 2, 999, u64::MAX] {
                    let delta = reward_per_share_delta(amount, total).unwrap();
                    let scaled = amount as u128 * SCALE;
                    let assigned = delta * total as u128;
                    assert!(assigned <= scaled);
                    assert!(scaled - assigned < total as u128);
                }
            }
        }

        /// Accrual that cannot fit in u64 is reported, not wrapped
        #[test]
        fn bound3_accrual_overflow_detected() {
            let result = accrued_reward(u64::MAX, u64::MAX as u128 * SCALE, 0);
            assert_eq!(anchor_code(result.unwrap_err()), u32::from(ErrorCode::MathOverflow));
        }

        #[test]
        fn bound4_zero_stake_accrues_nothing() {
            assert_eq!(accrued_reward(0, 123 * SCALE, 0).unwrap(), 0);
        }
    }

    // ========================================================================
    // SECTION 3: PROPERTY-BASED TESTS
    // ========================================================================

    #[derive(Debug, Clone)]
    enum Op {
        Deposit(usize, u64),
        Withdraw(usize, u64),
        Reward(u64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..ACTORS, 1..=MAX_AMOUNT).prop_map(|(who, amount)| Op::Deposit(who, amount)),
            (0..ACTORS, 1..=MAX_AMOUNT).prop_map(|(who, amount)| Op::Withdraw(who, amount)),
            (1..=MAX_AMOUNT).prop_map(Op::Reward),
        ]
    }

    proptest! {
        /// Vault always covers every stake and every pending reward,
        /// total stake always matches the records, and the accumulator
        /// never moves backwards.
        #[test]
        fn prop_solvency_and_conservation(ops in prop::collection::vec(op_strategy(), 1..64)) {
            let mut sim = SimulatedPool::new();

            for op in ops {
                let acc_before = sim.pool.acc_reward_per_share();
                match op {
                    Op::Deposit(who, amount) => sim.deposit(who, amount),
                    Op::Withdraw(who, amount) => {
                        let stake = sim.depositors[who].stake;
                        if stake > 0 {
                            sim.withdraw(who, amount.min(stake));
                        }
                    }
                    Op::Reward(amount) => {
                        if sim.pool.total_stake == 0 {
                            prop_assert!(sim.reward(amount).is_err());
                        } else {
                            sim.reward(amount).unwrap();
                        }
                    }
                }

                prop_assert!(sim.pool.acc_reward_per_share() >= acc_before);
                prop_assert_eq!(sim.stake_sum(), sim.pool.total_stake);
                prop_assert!(sim.custody >= sim.liabilities());
            }

            // Everyone leaves; nothing owed remains and only dust is left behind
            for who in 0..ACTORS {
                let stake = sim.depositors[who].stake;
                if stake > 0 {
                    sim.withdraw(who, stake);
                }
                prop_assert_eq!(sim.pending(who), 0);
            }
            prop_assert_eq!(sim.pool.total_stake, 0);
        }

        /// Pending reward only grows between settlements at constant stake
        #[test]
        fn prop_pending_monotonic(
            stake in 1..=MAX_AMOUNT,
            other in 0..=MAX_AMOUNT,
            rewards in prop::collection::vec(1..=MAX_AMOUNT, 1..16),
        ) {
            let mut sim = SimulatedPool::new();
            sim.deposit(0, stake);
            if other > 0 {
                sim.deposit(1, other);
            }

            let mut last = sim.pending(0);
            for reward in rewards {
                sim.reward(reward).unwrap();
                let now = sim.pending(0);
                prop_assert!(now >= last);
                last = now;
            }
        }
    }
}
