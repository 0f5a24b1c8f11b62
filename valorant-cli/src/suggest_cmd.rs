//! Suggest command - rank agents to complete a partial team

use anyhow::Result;
use clap::Args;

use valorant_core::{suggest, Catalog, Suggestion, DEFAULT_TEAM_SIZE};

#[derive(Args)]
pub struct SuggestArgs {
    /// Map being played
    #[arg(long)]
    pub map: String,

    /// Agents already picked (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub picks: Vec<String>,

    /// Full team size
    #[arg(long, default_value_t = DEFAULT_TEAM_SIZE)]
    pub team_size: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: SuggestArgs, catalog: &Catalog) -> Result<()> {
    let suggestions = suggest(catalog, &args.map, &args.picks, args.team_size);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    print!("{}", format_suggestions(&suggestions, args.picks.len(), args.team_size));
    Ok(())
}

fn format_suggestions(suggestions: &[Suggestion], picked: usize, team_size: usize) -> String {
    if suggestions.is_empty() {
        return if picked >= team_size {
            "Team is already full.\n".to_string()
        } else {
            "No candidates left to suggest.\n".to_string()
        };
    }

    suggestions
        .iter()
        .enumerate()
        .map(|(rank, s)| format!("{:>2}. {:<12} {:>5.1}\n", rank + 1, s.agent, s.score))
        .collect()
}
