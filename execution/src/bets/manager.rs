use super::Bet;
use crapsim_types::{BetResult, BetType, Chips, DiceRoll, GamePhase, TableRules};
use thiserror::Error;
use tracing::trace;

/// Why a bet was refused. A refused bet leaves every piece of state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("{amount} is below the table minimum {minimum}")]
    BelowMinimum { amount: Chips, minimum: Chips },
    #[error("{amount} is above the table maximum {maximum}")]
    AboveMaximum { amount: Chips, maximum: Chips },
    #[error("{amount} exceeds the bankroll {bankroll}")]
    InsufficientBankroll { amount: Chips, bankroll: Chips },
    #[error("{bet} on {point} limited to {limit} more (requested {requested})")]
    OddsLimitExceeded {
        bet: BetType,
        point: u8,
        requested: Chips,
        limit: Chips,
    },
    #[error("{bet} on {point} needs a matching contract bet")]
    NoContractBet { bet: BetType, point: u8 },
}

/// A bet removed from the table together with its outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub bet: Bet,
    pub result: BetResult,
}

impl Settlement {
    /// Cash handed back to the player: stake plus winnings, the stake alone,
    /// or nothing.
    pub fn returned(&self) -> Chips {
        self.result.returned(self.bet.amount())
    }

    /// Equity change caused by this settlement.
    pub fn net(&self) -> Chips {
        self.result.net(self.bet.amount())
    }
}

/// Manages all active bets for a player.
#[derive(Clone, Debug)]
pub struct BetManager {
    rules: TableRules,
    active: Vec<Bet>,
    history: Vec<Settlement>,
}

impl BetManager {
    pub fn new(rules: TableRules) -> Self {
        Self {
            rules,
            active: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn rules(&self) -> &TableRules {
        &self.rules
    }

    /// Check `bet` against the table rules without placing it.
    pub fn validate(&self, bet: &Bet) -> Result<(), PlacementError> {
        let amount = bet.amount();
        if !self.rules.within_limits(amount) {
            return Err(if amount < self.rules.minimum_bet() {
                PlacementError::BelowMinimum {
                    amount,
                    minimum: self.rules.minimum_bet(),
                }
            } else {
                PlacementError::AboveMaximum {
                    amount,
                    maximum: self.rules.maximum_bet(),
                }
            });
        }

        let bet_type = bet.bet_type();
        let backs: fn(&BetType) -> bool = match bet_type {
            BetType::Odds => BetType::backs_odds,
            BetType::LayOdds => BetType::backs_lay_odds,
            _ => return Ok(()),
        };
        let Some(point) = bet.point() else {
            return Ok(());
        };

        let contract: Chips = self
            .active
            .iter()
            .filter(|b| backs(&b.bet_type()) && b.point() == Some(point))
            .map(Bet::amount)
            .sum();
        if contract.is_zero() {
            return Err(PlacementError::NoContractBet {
                bet: bet_type,
                point,
            });
        }
        let existing: Chips = self
            .active
            .iter()
            .filter(|b| b.bet_type() == bet_type && b.point() == Some(point))
            .map(Bet::amount)
            .sum();
        let limit = contract.times(self.rules.maximum_odds_multiplier() as i64) - existing;
        if amount > limit {
            return Err(PlacementError::OddsLimitExceeded {
                bet: bet_type,
                point,
                requested: amount,
                limit,
            });
        }
        Ok(())
    }

    /// Place a new bet after validating it.
    pub fn try_place(&mut self, bet: Bet) -> Result<(), PlacementError> {
        self.validate(&bet)?;
        trace!(bet = %bet, "bet placed");
        self.active.push(bet);
        Ok(())
    }

    /// Place a new bet. Returns true if successful.
    pub fn place_bet(&mut self, bet: Bet) -> bool {
        self.try_place(bet).is_ok()
    }

    /// Resolve every active bet against `roll`, thrown while the table was in
    /// `phase`.
    ///
    /// Settled bets are removed and returned in placement order; pending bets
    /// stay on the table in their original order.
    pub fn resolve_all(&mut self, roll: &DiceRoll, phase: GamePhase) -> Vec<Settlement> {
        let mut settled = Vec::new();
        let mut remaining = Vec::with_capacity(self.active.len());
        for mut bet in self.active.drain(..) {
            match bet.resolve(roll, phase) {
                Some(result) => settled.push(Settlement { bet, result }),
                None => remaining.push(bet),
            }
        }
        self.active = remaining;
        self.history.extend(settled.iter().cloned());
        settled
    }

    pub fn active_bets(&self) -> &[Bet] {
        &self.active
    }

    /// Active bets of `bet_type`, in placement order.
    pub fn active_of(&self, bet_type: BetType) -> impl Iterator<Item = &Bet> + '_ {
        self.active.iter().filter(move |bet| bet.bet_type() == bet_type)
    }

    pub fn has_active(&self, bet_type: BetType) -> bool {
        self.active_of(bet_type).next().is_some()
    }

    /// Chips currently at risk on the table.
    pub fn total_at_risk(&self) -> Chips {
        self.active.iter().map(Bet::amount).sum()
    }

    /// Every bet resolved so far, oldest first.
    pub fn history(&self) -> &[Settlement] {
        &self.history
    }

    /// Remove every active bet and forget the history.
    pub fn clear_bets(&mut self) {
        self.active.clear();
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crapsim_types::BetStatus;

    fn dollars(n: i64) -> Chips {
        Chips::from_dollars(n)
    }

    fn roll(d1: u8, d2: u8) -> DiceRoll {
        DiceRoll::new(d1, d2).unwrap()
    }

    fn manager() -> BetManager {
        BetManager::new(TableRules::with_limits(dollars(5), dollars(500)).unwrap())
    }

    #[test]
    fn test_table_limits() {
        let mut bets = manager();
        assert_eq!(
            bets.try_place(Bet::pass_line(dollars(4)).unwrap()),
            Err(PlacementError::BelowMinimum {
                amount: dollars(4),
                minimum: dollars(5)
            })
        );
        assert_eq!(
            bets.try_place(Bet::pass_line(dollars(501)).unwrap()),
            Err(PlacementError::AboveMaximum {
                amount: dollars(501),
                maximum: dollars(500)
            })
        );
        assert!(bets.active_bets().is_empty());

        assert!(bets.place_bet(Bet::pass_line(dollars(5)).unwrap()));
        assert!(bets.place_bet(Bet::field(dollars(500), bets.rules()).unwrap()));
        assert_eq!(bets.total_at_risk(), dollars(505));
    }

    #[test]
    fn test_odds_need_contract_bet() {
        let mut bets = manager();
        assert_eq!(
            bets.try_place(Bet::odds(dollars(10), 6).unwrap()),
            Err(PlacementError::NoContractBet {
                bet: BetType::Odds,
                point: 6
            })
        );

        // Pass bet travels to 6
        bets.place_bet(Bet::pass_line(dollars(10)).unwrap());
        bets.resolve_all(&roll(2, 4), GamePhase::ComeOut);

        // A pass bet does not back lay odds
        assert!(matches!(
            bets.try_place(Bet::lay_odds(dollars(10), 6).unwrap()),
            Err(PlacementError::NoContractBet { .. })
        ));
        // Wrong point
        assert!(bets.try_place(Bet::odds(dollars(10), 8).unwrap()).is_err());
        assert!(bets.try_place(Bet::odds(dollars(20), 6).unwrap()).is_ok());
    }

    #[test]
    fn test_odds_capped_by_multiplier() {
        let mut bets = manager();
        bets.place_bet(Bet::dont_pass(dollars(10)).unwrap());
        bets.resolve_all(&roll(4, 4), GamePhase::ComeOut);

        assert!(bets.place_bet(Bet::lay_odds(dollars(20), 8).unwrap()));
        assert_eq!(
            bets.try_place(Bet::lay_odds(dollars(15), 8).unwrap()),
            Err(PlacementError::OddsLimitExceeded {
                bet: BetType::LayOdds,
                point: 8,
                requested: dollars(15),
                limit: dollars(10),
            })
        );
        assert!(bets.place_bet(Bet::lay_odds(dollars(10), 8).unwrap()));
    }

    #[test]
    fn test_resolve_all_partitions_in_order() {
        let mut bets = manager();
        bets.place_bet(Bet::place(dollars(30), 6).unwrap());
        bets.place_bet(Bet::field(dollars(10), bets.rules()).unwrap());
        bets.place_bet(Bet::place(dollars(25), 5).unwrap());
        bets.place_bet(Bet::any_seven(dollars(5)).unwrap());

        let settled = bets.resolve_all(&roll(3, 3), GamePhase::Point(4));
        let names: Vec<_> = settled.iter().map(|s| s.bet.name()).collect();
        assert_eq!(names, vec!["Place 6", "Field", "Any Seven"]);
        assert_eq!(settled[0].result.payout, dollars(35));
        assert_eq!(settled[0].returned(), dollars(65));
        assert_eq!(settled[1].result.status, BetStatus::Lost);
        assert_eq!(settled[1].net(), dollars(-10));

        assert_eq!(bets.active_bets().len(), 1);
        assert!(bets.has_active(BetType::Place));
        assert_eq!(bets.total_at_risk(), dollars(25));
        assert_eq!(bets.history().len(), 3);

        // Nothing is settled twice
        let settled = bets.resolve_all(&roll(3, 4), GamePhase::Point(4));
        assert_eq!(settled.len(), 1);
        assert_eq!(bets.history().len(), 4);
        assert!(bets.active_bets().is_empty());
    }

    #[test]
    fn test_active_of_and_clear() {
        let mut bets = manager();
        bets.place_bet(Bet::place(dollars(12), 6).unwrap());
        bets.place_bet(Bet::hardway(dollars(5), 4).unwrap());
        bets.place_bet(Bet::place(dollars(12), 8).unwrap());
        let numbers: Vec<_> = bets
            .active_of(BetType::Place)
            .filter_map(Bet::number)
            .collect();
        assert_eq!(numbers, vec![6, 8]);

        bets.resolve_all(&roll(1, 1), GamePhase::ComeOut);
        bets.clear_bets();
        assert!(bets.active_bets().is_empty());
        assert!(bets.history().is_empty());
        assert_eq!(bets.total_at_risk(), Chips::ZERO);
    }
}
