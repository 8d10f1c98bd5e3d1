//! Episode runner and experiment loops
//!
//! The driver loop: reset the environment, feed observations to the agent
//! and actions back to the environment while collecting the trajectory,
//! then hand the finished trajectory to the agent for its end-of-episode
//! update.

use serde::Serialize;
use tracing::{debug, info};

use tabrl_core::{Agent, Environment, Result, Trajectory, Transition};

/// Run one episode without learning and return its trajectory.
///
/// Each recorded transition holds the observation and reward the
/// environment returned *for* the recorded action, including the terminal
/// transition.
pub fn run_episode<E, A>(env: &mut E, agent: &mut A) -> Result<Trajectory<E::Obs>>
where
    E: Environment,
    A: Agent<Obs = E::Obs>,
    E::Obs: Clone,
{
    let mut observation = env.reset();
    agent.episode_start(&observation);

    let mut trajectory = Trajectory::new();
    let mut reward = 0.0;
    loop {
        let action = agent.step(reward, &observation)?;
        let step = env.step(action)?;
        trajectory.push(Transition::new(action, step.observation.clone(), step.reward));
        if step.done {
            break;
        }
        observation = step.observation;
        reward = step.reward;
    }
    Ok(trajectory)
}

/// Summary of a training run
#[derive(Debug, Clone, Serialize)]
pub struct TrainReport {
    pub episodes: u64,
    pub total_reward: f64,
    pub mean_reward: f64,
}

/// Train an agent for `episodes` episodes, applying the agent's
/// end-of-episode update after every episode.
///
/// Progress is logged every `log_every` episodes with the mean reward
/// since the previous report.
pub fn train<E, A>(env: &mut E, agent: &mut A, episodes: u64, log_every: u64) -> Result<TrainReport>
where
    E: Environment,
    A: Agent<Obs = E::Obs>,
    E::Obs: Clone,
{
    info!(agent = agent.name(), episodes, "starting training");

    let mut total_reward = 0.0;
    let mut window_reward = 0.0;
    for episode in 1..=episodes {
        let trajectory = run_episode(env, agent)?;
        let episode_reward = trajectory.total_reward();
        total_reward += episode_reward;
        window_reward += episode_reward;

        agent.episode_end(&trajectory)?;

        if log_every > 0 && episode % log_every == 0 {
            info!(
                episode,
                mean_reward = window_reward / log_every as f64,
                "training progress"
            );
            window_reward = 0.0;
        }
    }
    agent.cleanup();

    let report = TrainReport {
        episodes,
        total_reward,
        mean_reward: if episodes > 0 {
            total_reward / episodes as f64
        } else {
            0.0
        },
    };
    debug!(?report, "training finished");
    Ok(report)
}

/// Summary of an evaluation run.
///
/// Episodes are tallied by the sign of their total reward.
#[derive(Debug, Clone, Serialize)]
pub struct EvalReport {
    pub episodes: u64,
    pub wins: u64,
    pub draws: u64,
    pub losses: u64,
    pub mean_reward: f64,
}

/// Roll out the agent's current policy for `episodes` episodes with no
/// learning.
pub fn evaluate<E, A>(env: &mut E, agent: &mut A, episodes: u64) -> Result<EvalReport>
where
    E: Environment,
    A: Agent<Obs = E::Obs>,
    E::Obs: Clone,
{
    info!(agent = agent.name(), episodes, "starting evaluation");

    let mut wins = 0;
    let mut draws = 0;
    let mut losses = 0;
    let mut total_reward = 0.0;
    for _ in 0..episodes {
        let trajectory = run_episode(env, agent)?;
        let episode_reward = trajectory.total_reward();
        total_reward += episode_reward;
        if episode_reward > 0.0 {
            wins += 1;
        } else if episode_reward < 0.0 {
            losses += 1;
        } else {
            draws += 1;
        }
    }

    Ok(EvalReport {
        episodes,
        wins,
        draws,
        losses,
        mean_reward: if episodes > 0 {
            total_reward / episodes as f64
        } else {
            0.0
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monte_carlo::MonteCarloAgent;
    use crate::mountain_car::MountainCarAgent;
    use tabrl_envs::{Blackjack, MountainCar};

    fn blackjack_agent(env: &Blackjack, seed: u64) -> MonteCarloAgent {
        MonteCarloAgent::new(env.action_space(), env.observation_space(), 1.0, seed)
    }

    #[test]
    fn test_run_episode_collects_trajectory() {
        let mut env = Blackjack::new(2);
        let mut agent = blackjack_agent(&env, 2);

        let trajectory = run_episode(&mut env, &mut agent).unwrap();
        assert!(!trajectory.is_empty());
        // The episode ends on the terminal transition
        let last = trajectory.iter().last().unwrap();
        assert!([-1.0, 0.0, 1.0].contains(&last.reward));
    }

    #[test]
    fn test_train_report_totals() {
        let mut env = Blackjack::new(2);
        let mut agent = blackjack_agent(&env, 2);

        let report = train(&mut env, &mut agent, 200, 0).unwrap();
        assert_eq!(report.episodes, 200);
        assert_eq!(report.mean_reward, report.total_reward / 200.0);
    }

    #[test]
    fn test_evaluate_tallies_every_episode() {
        let mut env = Blackjack::new(3);
        let mut agent = blackjack_agent(&env, 3);

        let report = evaluate(&mut env, &mut agent, 500).unwrap();
        assert_eq!(report.wins + report.draws + report.losses, report.episodes);
        assert!(report.mean_reward.abs() <= 1.0);
    }

    #[test]
    fn test_mountain_car_stub_runs() {
        let mut env = MountainCar::new(0);
        let mut agent = MountainCarAgent::new();

        let trajectory = run_episode(&mut env, &mut agent).unwrap();
        // Coasting never reaches the goal; the 200-step cap ends the episode
        assert_eq!(trajectory.len(), 200);
        assert_eq!(trajectory.total_reward(), -200.0);
    }
}
