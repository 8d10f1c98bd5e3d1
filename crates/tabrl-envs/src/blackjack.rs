//! Blackjack environment
//!
//! Sutton & Barto rules (Example 5.1), matching Gym's `Blackjack-v0` with
//! `natural = false`: cards are drawn from an infinite deck with
//! replacement, the dealer hits until reaching 17, and winning pays +1
//! with no bonus for a natural.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use tabrl_core::{Discrete, Environment, Result, Step, TabrlError};

/// Stand on the current hand
pub const STAY: usize = 0;
/// Draw another card
pub const HIT: usize = 1;

/// Face cards count 10, the ace is 1 (and may be used as 11)
const DECK: [u8; 13] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10];

/// Observation: the player's current sum, the dealer's showing card
/// (1-10 where 1 is ace), and whether the player holds a usable ace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackjackObs {
    pub player_sum: usize,
    pub dealer_card: usize,
    pub usable_ace: bool,
}

/// The Blackjack table
pub struct Blackjack {
    rng: StdRng,
    player: Vec<u8>,
    dealer: Vec<u8>,
    in_episode: bool,
}

impl Blackjack {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            player: Vec::new(),
            dealer: Vec::new(),
            in_episode: false,
        }
    }

    /// Observation space sizes: player sum, dealer card, usable ace
    pub fn observation_space(&self) -> (Discrete, Discrete, Discrete) {
        (Discrete::new(32), Discrete::new(11), Discrete::new(2))
    }

    fn draw_card(&mut self) -> u8 {
        *DECK.choose(&mut self.rng).unwrap_or(&10)
    }

    fn observe(&self) -> BlackjackObs {
        BlackjackObs {
            player_sum: sum_hand(&self.player) as usize,
            dealer_card: self.dealer[0] as usize,
            usable_ace: usable_ace(&self.player),
        }
    }
}

impl Environment for Blackjack {
    type Obs = BlackjackObs;

    fn reset(&mut self) -> BlackjackObs {
        self.player = vec![self.draw_card(), self.draw_card()];
        self.dealer = vec![self.draw_card(), self.draw_card()];
        self.in_episode = true;
        self.observe()
    }

    fn step(&mut self, action: usize) -> Result<Step<BlackjackObs>> {
        if !self.in_episode {
            return Err(TabrlError::Env(
                "step called on a finished episode; call reset first".to_string(),
            ));
        }
        let space = self.action_space();
        if !space.contains(action) {
            return Err(TabrlError::InvalidAction {
                action,
                space: space.n,
            });
        }

        if action == HIT {
            let card = self.draw_card();
            self.player.push(card);
            if is_bust(&self.player) {
                self.in_episode = false;
                return Ok(Step {
                    observation: self.observe(),
                    reward: -1.0,
                    done: true,
                });
            }
            return Ok(Step {
                observation: self.observe(),
                reward: 0.0,
                done: false,
            });
        }

        // STAY: the dealer plays out, hitting until reaching 17
        while sum_hand(&self.dealer) < 17 {
            let card = self.draw_card();
            self.dealer.push(card);
        }
        let reward = f64::from(cmp(score(&self.player), score(&self.dealer)));
        self.in_episode = false;
        Ok(Step {
            observation: self.observe(),
            reward,
            done: true,
        })
    }

    fn seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    fn action_space(&self) -> Discrete {
        Discrete::new(2)
    }
}

/// An ace counts as 11 when that does not bust the hand
fn usable_ace(hand: &[u8]) -> bool {
    hand.contains(&1) && raw_sum(hand) + 10 <= 21
}

fn raw_sum(hand: &[u8]) -> u32 {
    hand.iter().map(|&c| u32::from(c)).sum()
}

/// Hand total, counting a usable ace as 11
fn sum_hand(hand: &[u8]) -> u32 {
    if usable_ace(hand) {
        raw_sum(hand) + 10
    } else {
        raw_sum(hand)
    }
}

fn is_bust(hand: &[u8]) -> bool {
    sum_hand(hand) > 21
}

/// Final hand value, 0 for a bust
fn score(hand: &[u8]) -> u32 {
    if is_bust(hand) {
        0
    } else {
        sum_hand(hand)
    }
}

fn cmp(a: u32, b: u32) -> i8 {
    i8::from(a > b) - i8::from(a < b)
}
