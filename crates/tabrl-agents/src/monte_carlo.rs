//! Every-visit Monte Carlo control for Blackjack
//!
//! The agent keeps a deterministic policy table, an action-value table,
//! and the full history of discounted returns observed per state-action
//! pair. Nothing is learned during an episode; the whole update happens
//! in `episode_end` (Sutton & Barto, chapter 5.3).

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use ndarray::{s, Array3, Array4, ArrayView1};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use tabrl_core::{Agent, Discrete, Result, TabrlError, Trajectory};
use tabrl_envs::blackjack::{BlackjackObs, HIT, STAY};

fn unseeded_rng() -> StdRng {
    StdRng::seed_from_u64(0)
}

/// Blackjack agent implementing every-visit Monte Carlo control
#[derive(Serialize, Deserialize)]
pub struct MonteCarloAgent {
    discount_factor: f64,
    seed: u64,
    #[serde(skip, default = "unseeded_rng")]
    rng: StdRng,
    /// Chosen action per (player score, dealer card, usable ace)
    policy: Array3<usize>,
    /// Estimated return per (player score, dealer card, usable ace, action)
    action_values: Array4<f64>,
    /// Observed discounted returns per state-action pair
    returns: Array4<Vec<f64>>,
}

impl MonteCarloAgent {
    /// Initialize the policy, action-value, and returns tables.
    ///
    /// To speed up training the policy starts from a domain-knowledge
    /// heuristic: STAY on a score of 20 or 21, HIT otherwise.
    pub fn new(
        action_space: Discrete,
        obs_space: (Discrete, Discrete, Discrete),
        discount_factor: f64,
        seed: u64,
    ) -> Self {
        let (scores, dealer_cards, aces) = (obs_space.0.n, obs_space.1.n, obs_space.2.n);

        let mut policy = Array3::from_elem((scores, dealer_cards, aces), HIT);
        for score in 20..scores.min(22) {
            policy.slice_mut(s![score, .., ..]).fill(STAY);
        }

        Self {
            discount_factor,
            seed,
            rng: StdRng::seed_from_u64(seed),
            policy,
            action_values: Array4::zeros((scores, dealer_cards, aces, action_space.n)),
            returns: Array4::from_elem((scores, dealer_cards, aces, action_space.n), Vec::new()),
        }
    }

    /// The action currently stored in the policy table for `obs`
    pub fn select_action(&self, obs: &BlackjackObs) -> Result<usize> {
        let (score, dealer_card, ace) = self.index(obs)?;
        Ok(self.policy[[score, dealer_card, ace]])
    }

    /// Current action-value estimate for a state-action pair
    pub fn action_value(&self, obs: &BlackjackObs, action: usize) -> Result<f64> {
        let (score, dealer_card, ace) = self.index(obs)?;
        self.check_action(action)?;
        Ok(self.action_values[[score, dealer_card, ace, action]])
    }

    /// Number of returns observed so far for a state-action pair
    pub fn visit_count(&self, obs: &BlackjackObs, action: usize) -> Result<usize> {
        let (score, dealer_card, ace) = self.index(obs)?;
        self.check_action(action)?;
        Ok(self.returns[[score, dealer_card, ace, action]].len())
    }

    pub fn policy(&self) -> &Array3<usize> {
        &self.policy
    }

    pub fn action_values(&self) -> &Array4<f64> {
        &self.action_values
    }

    pub fn discount_factor(&self) -> f64 {
        self.discount_factor
    }

    /// Serialize the agent to a JSON snapshot
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer(BufWriter::new(file), self)?;
        debug!(path = %path.display(), "saved agent snapshot");
        Ok(())
    }

    /// Restore an agent from a JSON snapshot.
    ///
    /// The RNG is reconstructed from the stored seed; it does not resume
    /// mid-stream.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mut agent: Self = serde_json::from_reader(BufReader::new(file))?;
        agent.rng = StdRng::seed_from_u64(agent.seed);
        debug!(path = %path.display(), "loaded agent snapshot");
        Ok(agent)
    }

    /// Index of the max value, with ties broken uniformly at random
    fn argmax(rng: &mut StdRng, values: ArrayView1<'_, f64>) -> usize {
        let mut ties: Vec<usize> = Vec::new();
        let mut max_val = f64::NEG_INFINITY;
        for (i, &value) in values.iter().enumerate() {
            if value > max_val {
                max_val = value;
                ties.clear();
            }
            if value == max_val {
                ties.push(i);
            }
        }
        ties.choose(rng).copied().unwrap_or(STAY)
    }

    fn index(&self, obs: &BlackjackObs) -> Result<(usize, usize, usize)> {
        let (scores, dealer_cards, _) = self.policy.dim();
        if obs.player_sum >= scores || obs.dealer_card >= dealer_cards {
            return Err(TabrlError::ObservationOutOfRange(format!(
                "player sum {} / dealer card {} outside table of {}x{}",
                obs.player_sum, obs.dealer_card, scores, dealer_cards
            )));
        }
        Ok((obs.player_sum, obs.dealer_card, usize::from(obs.usable_ace)))
    }

    fn check_action(&self, action: usize) -> Result<()> {
        let actions = self.action_values.dim().3;
        if action >= actions {
            return Err(TabrlError::InvalidAction {
                action,
                space: actions,
            });
        }
        Ok(())
    }
}

impl Agent for MonteCarloAgent {
    type Obs = BlackjackObs;

    fn name(&self) -> &str {
        "monte_carlo"
    }

    fn step(&mut self, _reward: f64, observation: &BlackjackObs) -> Result<usize> {
        // The reward is deliberately unused: Monte Carlo control only
        // updates action values at the end of an episode.
        self.select_action(observation)
    }

    fn episode_end(&mut self, trajectory: &Trajectory<BlackjackObs>) -> Result<()> {
        let mut return_val = 0.0;

        // Walk the episode backward, t = T-1, T-2, ..., 0
        for transition in trajectory.iter_rev() {
            let (score, dealer_card, ace) = self.index(&transition.observation)?;
            self.check_action(transition.action)?;

            return_val = self.discount_factor * return_val + transition.reward;

            let history = &mut self.returns[[score, dealer_card, ace, transition.action]];
            history.push(return_val);
            let mean = history.iter().sum::<f64>() / history.len() as f64;
            self.action_values[[score, dealer_card, ace, transition.action]] = mean;

            self.policy[[score, dealer_card, ace]] = Self::argmax(
                &mut self.rng,
                self.action_values.slice(s![score, dealer_card, ace, ..]),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabrl_core::Transition;

    fn blackjack_spaces() -> (Discrete, (Discrete, Discrete, Discrete)) {
        (
            Discrete::new(2),
            (Discrete::new(32), Discrete::new(11), Discrete::new(2)),
        )
    }

    fn obs(player_sum: usize, dealer_card: usize, usable_ace: bool) -> BlackjackObs {
        BlackjackObs {
            player_sum,
            dealer_card,
            usable_ace,
        }
    }

    #[test]
    fn test_initial_policy_heuristic() {
        let (actions, spaces) = blackjack_spaces();
        let agent = MonteCarloAgent::new(actions, spaces, 1.0, 2);

        assert_eq!(agent.select_action(&obs(20, 5, false)).unwrap(), STAY);
        assert_eq!(agent.select_action(&obs(21, 1, true)).unwrap(), STAY);
        assert_eq!(agent.select_action(&obs(19, 5, false)).unwrap(), HIT);
        assert_eq!(agent.select_action(&obs(12, 10, true)).unwrap(), HIT);
    }

    #[test]
    fn test_select_action_in_action_space() {
        let (actions, spaces) = blackjack_spaces();
        let agent = MonteCarloAgent::new(actions, spaces, 1.0, 2);

        for player_sum in 0..32 {
            for dealer_card in 0..11 {
                for usable_ace in [false, true] {
                    let action = agent
                        .select_action(&obs(player_sum, dealer_card, usable_ace))
                        .unwrap();
                    assert!(actions.contains(action));
                }
            }
        }
    }

    #[test]
    fn test_observation_out_of_range() {
        let (actions, spaces) = blackjack_spaces();
        let agent = MonteCarloAgent::new(actions, spaces, 1.0, 2);

        assert!(agent.select_action(&obs(32, 5, false)).is_err());
        assert!(agent.select_action(&obs(15, 11, false)).is_err());
    }

    #[test]
    fn test_episode_end_value_is_mean_of_returns() {
        let (actions, spaces) = blackjack_spaces();
        let mut agent = MonteCarloAgent::new(actions, spaces, 1.0, 2);
        let state = obs(13, 4, false);

        // Two one-step episodes for the same pair, rewards +1 and -1
        for reward in [1.0, -1.0] {
            let mut trajectory = Trajectory::new();
            trajectory.push(Transition::new(STAY, state, reward));
            agent.episode_end(&trajectory).unwrap();
        }

        assert_eq!(agent.visit_count(&state, STAY).unwrap(), 2);
        assert_eq!(agent.action_value(&state, STAY).unwrap(), 0.0);
    }

    #[test]
    fn test_discounted_return_propagates_backward() {
        let (actions, spaces) = blackjack_spaces();
        let mut agent = MonteCarloAgent::new(actions, spaces, 0.5, 2);

        let early = obs(13, 4, false);
        let late = obs(18, 4, false);
        let mut trajectory = Trajectory::new();
        trajectory.push(Transition::new(HIT, early, 0.0));
        trajectory.push(Transition::new(STAY, late, 1.0));
        agent.episode_end(&trajectory).unwrap();

        // G_late = 1.0; G_early = 0.5 * 1.0 + 0.0
        assert_eq!(agent.action_value(&late, STAY).unwrap(), 1.0);
        assert_eq!(agent.action_value(&early, HIT).unwrap(), 0.5);
    }

    #[test]
    fn test_policy_tracks_argmax() {
        let (actions, spaces) = blackjack_spaces();
        let mut agent = MonteCarloAgent::new(actions, spaces, 1.0, 2);
        let state = obs(16, 10, false);

        // Losing twice after HIT drives the estimate below STAY's zero
        for _ in 0..2 {
            let mut trajectory = Trajectory::new();
            trajectory.push(Transition::new(HIT, state, -1.0));
            agent.episode_end(&trajectory).unwrap();
        }

        assert_eq!(agent.action_value(&state, HIT).unwrap(), -1.0);
        assert_eq!(agent.select_action(&state).unwrap(), STAY);

        // A winning streak for HIT flips the policy back
        for _ in 0..5 {
            let mut trajectory = Trajectory::new();
            trajectory.push(Transition::new(HIT, state, 1.0));
            agent.episode_end(&trajectory).unwrap();
        }
        assert!(agent.action_value(&state, HIT).unwrap() > 0.0);
        assert_eq!(agent.select_action(&state).unwrap(), HIT);
    }

    #[test]
    fn test_argmax_tie_breaking_covers_all_ties() {
        let mut rng = StdRng::seed_from_u64(2);
        let values = ndarray::arr1(&[1.0, 1.0, 0.0]);

        let mut seen = [false; 3];
        for _ in 0..200 {
            let chosen = MonteCarloAgent::argmax(&mut rng, values.view());
            assert!(chosen < 2, "argmax must never pick a non-maximal index");
            seen[chosen] = true;
        }
        assert!(seen[0] && seen[1]);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agent.json");

        let (actions, spaces) = blackjack_spaces();
        let mut agent = MonteCarloAgent::new(actions, spaces, 1.0, 7);
        let state = obs(15, 7, true);
        let mut trajectory = Trajectory::new();
        trajectory.push(Transition::new(STAY, state, 1.0));
        agent.episode_end(&trajectory).unwrap();

        agent.save(&path).unwrap();
        let restored = MonteCarloAgent::load(&path).unwrap();

        assert_eq!(restored.discount_factor(), 1.0);
        assert_eq!(restored.policy(), agent.policy());
        assert_eq!(restored.action_value(&state, STAY).unwrap(), 1.0);
        assert_eq!(restored.visit_count(&state, STAY).unwrap(), 1);
    }
}
