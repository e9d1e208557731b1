//! Built-in strategies.

use super::{BetInterface, Strategy};
use crate::bets::{Bet, Settlement};
use crate::game::RollOutcome;
use crapsim_types::{BetStatus, BetType, Chips, DEFAULT_MINIMUM_BET};
use std::collections::BTreeMap;

const TABLE_MINIMUM: Chips = Chips::from_dollars(DEFAULT_MINIMUM_BET);

/// Never bets.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoBet;

impl Strategy for NoBet {
    type State = ();

    fn name(&self) -> String {
        "No Bet".to_string()
    }

    fn description(&self) -> String {
        "Watches the table without betting".to_string()
    }

    fn on_come_out_roll(&self, _state: &mut (), _bets: &mut BetInterface<'_>) {}

    fn on_point_roll(&self, _state: &mut (), _bets: &mut BetInterface<'_>, _point: u8) {}
}

/// Pass Line on every come-out with a multiple of odds once the point is on.
#[derive(Clone, Copy, Debug)]
pub struct PassLineOdds {
    pub pass_amount: Chips,
    pub odds_multiple: u32,
}

impl PassLineOdds {
    pub fn new(pass_amount: Chips, odds_multiple: u32) -> Self {
        Self {
            pass_amount,
            odds_multiple,
        }
    }
}

impl Default for PassLineOdds {
    fn default() -> Self {
        Self::new(TABLE_MINIMUM, 3)
    }
}

impl Strategy for PassLineOdds {
    type State = ();

    fn name(&self) -> String {
        format!("Pass + {}x Odds", self.odds_multiple)
    }

    fn description(&self) -> String {
        format!(
            "Pass Line {} with {}x odds (low house edge)",
            self.pass_amount, self.odds_multiple
        )
    }

    fn on_come_out_roll(&self, _state: &mut (), bets: &mut BetInterface<'_>) {
        if bets.has_active_bet(BetType::PassLine) || bets.bankroll() < self.pass_amount {
            return;
        }
        if let Ok(bet) = Bet::pass_line(self.pass_amount) {
            bets.place_bet(bet);
        }
    }

    fn on_point_roll(&self, _state: &mut (), bets: &mut BetInterface<'_>, point: u8) {
        if !bets.has_active_bet(BetType::PassLine) || bets.has_active_bet(BetType::Odds) {
            return;
        }
        let odds = self.pass_amount.times(self.odds_multiple as i64);
        if odds.is_zero() || bets.bankroll() < odds {
            return;
        }
        if let Ok(bet) = Bet::odds(odds, point) {
            bets.place_bet(bet);
        }
    }
}

/// Don't Pass on every come-out, laying a multiple of odds against the point.
#[derive(Clone, Copy, Debug)]
pub struct DontPassLay {
    pub dont_pass_amount: Chips,
    pub lay_multiple: u32,
}

impl DontPassLay {
    pub fn new(dont_pass_amount: Chips, lay_multiple: u32) -> Self {
        Self {
            dont_pass_amount,
            lay_multiple,
        }
    }
}

impl Default for DontPassLay {
    fn default() -> Self {
        Self::new(TABLE_MINIMUM, 2)
    }
}

impl Strategy for DontPassLay {
    type State = ();

    fn name(&self) -> String {
        format!("Don't Pass + {}x Lay", self.lay_multiple)
    }

    fn description(&self) -> String {
        format!(
            "Don't Pass {} with {}x lay odds (against the shooter)",
            self.dont_pass_amount, self.lay_multiple
        )
    }

    fn on_come_out_roll(&self, _state: &mut (), bets: &mut BetInterface<'_>) {
        if bets.has_active_bet(BetType::DontPass) || bets.bankroll() < self.dont_pass_amount {
            return;
        }
        if let Ok(bet) = Bet::dont_pass(self.dont_pass_amount) {
            bets.place_bet(bet);
        }
    }

    fn on_point_roll(&self, _state: &mut (), bets: &mut BetInterface<'_>, point: u8) {
        if !bets.has_active_bet(BetType::DontPass) || bets.has_active_bet(BetType::LayOdds) {
            return;
        }
        let lay = self.dont_pass_amount.times(self.lay_multiple as i64);
        if lay.is_zero() || bets.bankroll() < lay {
            return;
        }
        if let Ok(bet) = Bet::lay_odds(lay, point) {
            bets.place_bet(bet);
        }
    }
}

/// Place the 6 and 8 whenever a point is on.
#[derive(Clone, Copy, Debug)]
pub struct Place68 {
    pub place_amount: Chips,
}

impl Place68 {
    pub fn new(place_amount: Chips) -> Self {
        Self { place_amount }
    }
}

impl Default for Place68 {
    fn default() -> Self {
        Self::new(TABLE_MINIMUM.times(2))
    }
}

impl Strategy for Place68 {
    type State = ();

    fn name(&self) -> String {
        "Place 6 & 8".to_string()
    }

    fn description(&self) -> String {
        format!("Place {} on 6 and 8 only", self.place_amount)
    }

    fn on_come_out_roll(&self, _state: &mut (), _bets: &mut BetInterface<'_>) {}

    fn on_point_roll(&self, _state: &mut (), bets: &mut BetInterface<'_>, _point: u8) {
        for number in [6, 8] {
            if bets.has_bet_on(BetType::Place, number) || bets.bankroll() < self.place_amount {
                continue;
            }
            if let Ok(bet) = Bet::place(self.place_amount, number) {
                bets.place_bet(bet);
            }
        }
    }
}

/// Field plus Place 5, 6 and 8: every number but 7 pays.
#[derive(Clone, Copy, Debug)]
pub struct IronCross {
    pub unit: Chips,
}

impl IronCross {
    pub fn new(unit: Chips) -> Self {
        Self { unit }
    }
}

impl Default for IronCross {
    fn default() -> Self {
        Self::new(TABLE_MINIMUM)
    }
}

impl Strategy for IronCross {
    type State = ();

    fn name(&self) -> String {
        "Iron Cross".to_string()
    }

    fn description(&self) -> String {
        format!("Field + Place 5, 6, 8 ({} each), covers all but 7", self.unit)
    }

    fn on_come_out_roll(&self, _state: &mut (), _bets: &mut BetInterface<'_>) {}

    fn on_point_roll(&self, _state: &mut (), bets: &mut BetInterface<'_>, _point: u8) {
        // Field plus three place bets
        if bets.bankroll() < self.unit.times(4) {
            return;
        }
        if !bets.has_active_bet(BetType::Field) {
            if let Ok(bet) = Bet::field(self.unit, bets.rules()) {
                bets.place_bet(bet);
            }
        }
        for number in [5, 6, 8] {
            if bets.has_bet_on(BetType::Place, number) {
                continue;
            }
            if let Ok(bet) = Bet::place(self.unit, number) {
                bets.place_bet(bet);
            }
        }
    }
}

/// Start with large inside place bets, cut them back to base units after the
/// first hit, then press one unit per hit.
///
/// After the regression the first 5 to hit brings in the 4 and the first 9
/// brings in the 10, instead of pressing.
#[derive(Clone, Copy, Debug)]
pub struct RegressAndPress {
    pub initial_5_9: Chips,
    pub initial_6_8: Chips,
    pub base_5_9: Chips,
    pub base_6_8: Chips,
}

impl RegressAndPress {
    pub fn new(initial_5_9: Chips, initial_6_8: Chips, base_5_9: Chips, base_6_8: Chips) -> Self {
        Self {
            initial_5_9,
            initial_6_8,
            base_5_9,
            base_6_8,
        }
    }

    fn base_4_10(&self) -> Chips {
        self.base_5_9
    }

    fn unit_for(&self, number: u8) -> Chips {
        match number {
            6 | 8 => self.base_6_8,
            4 | 10 => self.base_4_10(),
            _ => self.base_5_9,
        }
    }

    fn place_initial_bets(&self, state: &mut RegressPressState, bets: &mut BetInterface<'_>) {
        let needed = self.initial_5_9.times(2) + self.initial_6_8.times(2);
        if bets.bankroll() < needed {
            return;
        }
        for (number, amount) in [
            (5, self.initial_5_9),
            (9, self.initial_5_9),
            (6, self.initial_6_8),
            (8, self.initial_6_8),
        ] {
            if bets.has_bet_on(BetType::Place, number) {
                continue;
            }
            if let Ok(bet) = Bet::place(amount, number) {
                if bets.place_bet(bet) {
                    state.amounts.insert(number, amount);
                }
            }
        }
    }

    fn ensure_bets_placed(&self, state: &RegressPressState, bets: &mut BetInterface<'_>) {
        for (&number, &amount) in &state.amounts {
            if !amount.is_positive()
                || bets.has_bet_on(BetType::Place, number)
                || bets.bankroll() < amount
            {
                continue;
            }
            if let Ok(bet) = Bet::place(amount, number) {
                bets.place_bet(bet);
            }
        }
    }

    fn handle_hit(&self, state: &mut RegressPressState, number: u8) {
        if !state.amount(number).is_positive() {
            return;
        }
        if !state.regressed {
            state.regressed = true;
            state.amounts.clear();
            state.amounts.insert(5, self.base_5_9);
            state.amounts.insert(6, self.base_6_8);
            state.amounts.insert(8, self.base_6_8);
            state.amounts.insert(9, self.base_5_9);
            return;
        }
        match number {
            5 if !state.four_placed => {
                state.four_placed = true;
                state.amounts.insert(4, self.base_4_10());
            }
            9 if !state.ten_placed => {
                state.ten_placed = true;
                state.amounts.insert(10, self.base_4_10());
            }
            _ => {
                *state.amounts.entry(number).or_default() += self.unit_for(number);
            }
        }
    }
}

impl Default for RegressAndPress {
    fn default() -> Self {
        Self::new(
            Chips::from_dollars(100),
            Chips::from_dollars(120),
            Chips::from_dollars(25),
            Chips::from_dollars(30),
        )
    }
}

/// Progression of [RegressAndPress] for the current shooter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegressPressState {
    pub regressed: bool,
    pub placed_this_point: bool,
    /// Target place amount per number; missing numbers are not bet.
    pub amounts: BTreeMap<u8, Chips>,
    pub four_placed: bool,
    pub ten_placed: bool,
}

impl RegressPressState {
    pub fn amount(&self, number: u8) -> Chips {
        self.amounts.get(&number).copied().unwrap_or_default()
    }
}

impl Strategy for RegressAndPress {
    type State = RegressPressState;

    fn name(&self) -> String {
        "Regress and Press".to_string()
    }

    fn description(&self) -> String {
        format!(
            "Place {} on 5/9 and {} on 6/8, regress to {}/{} after the first hit, \
             then press one unit per hit",
            self.initial_5_9, self.initial_6_8, self.base_5_9, self.base_6_8
        )
    }

    fn on_come_out_roll(&self, _state: &mut RegressPressState, _bets: &mut BetInterface<'_>) {}

    fn on_point_roll(
        &self,
        state: &mut RegressPressState,
        bets: &mut BetInterface<'_>,
        _point: u8,
    ) {
        if state.regressed {
            self.ensure_bets_placed(state, bets);
        } else if !state.placed_this_point {
            self.place_initial_bets(state, bets);
            state.placed_this_point = true;
        }
    }

    fn on_roll_complete(
        &self,
        state: &mut RegressPressState,
        _outcome: &RollOutcome,
        settled: &[Settlement],
    ) {
        for settlement in settled {
            if settlement.bet.bet_type() != BetType::Place
                || settlement.result.status != BetStatus::Won
            {
                continue;
            }
            if let Some(number) = settlement.bet.number() {
                self.handle_hit(state, number);
            }
        }
    }

    fn on_point_made(&self, state: &mut RegressPressState, _point: u8) {
        state.placed_this_point = false;
    }

    fn on_seven_out(&self, state: &mut RegressPressState, _point: u8) {
        *state = RegressPressState::default();
    }
}
