//! Policy inspection commands

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;
use ndarray::Array3;

use tabrl_agents::MonteCarloAgent;
use tabrl_envs::HIT;

#[derive(Subcommand)]
pub enum PolicyCommands {
    /// Render the policy tables (text stand-in for the notebook heatmaps)
    Show {
        /// Path to a saved agent snapshot
        #[arg(short, long)]
        agent: PathBuf,
    },
}

pub fn run(cmd: PolicyCommands) -> Result<()> {
    match cmd {
        PolicyCommands::Show { agent } => show(&agent),
    }
}

fn show(path: &Path) -> Result<()> {
    let agent = MonteCarloAgent::load(path)
        .with_context(|| format!("loading agent snapshot from {}", path.display()))?;

    println!("Usable Ace");
    println!("{}", render_grid(agent.policy(), true));
    println!("No Usable Ace");
    println!("{}", render_grid(agent.policy(), false));
    Ok(())
}

/// One grid per ace flag: rows are player sums 11-21, columns the
/// dealer's showing card (A then 2-10). H = hit, S = stay.
fn render_grid(policy: &Array3<usize>, usable_ace: bool) -> String {
    let ace = usize::from(usable_ace);
    let mut grid = String::new();

    grid.push_str("     A  2  3  4  5  6  7  8  9 10\n");
    for player_sum in (11..=21).rev() {
        grid.push_str(&format!("{player_sum:>3} "));
        for dealer_card in 1..=10 {
            let action = policy[[player_sum, dealer_card, ace]];
            grid.push_str(if action == HIT { "  H" } else { "  S" });
        }
        grid.push('\n');
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabrl_envs::STAY;

    #[test]
    fn test_render_grid_marks_actions() {
        let mut policy = Array3::from_elem((32, 11, 2), HIT);
        policy.slice_mut(ndarray::s![20.., .., ..]).fill(STAY);

        let grid = render_grid(&policy, false);
        let lines: Vec<&str> = grid.lines().collect();

        // Header plus rows 21 down to 11
        assert_eq!(lines.len(), 12);
        assert!(lines[1].starts_with(" 21"));
        assert!(lines[1].contains('S'));
        assert!(!lines[1].contains('H'));
        assert!(lines[11].starts_with(" 11"));
        assert!(lines[11].contains('H'));
    }
}
