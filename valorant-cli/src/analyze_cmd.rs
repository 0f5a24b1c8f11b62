//! Analyze command - counter picks and tips for a matchup

use anyhow::Result;
use clap::Args;

use valorant_core::{analyze, Catalog, MatchAnalysis};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Map being played
    #[arg(long)]
    pub map: String,

    /// Allied agents (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub team: Vec<String>,

    /// Enemy agents (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub enemy: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: AnalyzeArgs, catalog: &Catalog) -> Result<()> {
    let analysis = analyze(catalog, &args.map, &args.team, &args.enemy);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", format_analysis(&analysis));
    }
    Ok(())
}

fn format_analysis(analysis: &MatchAnalysis) -> String {
    let mut out = String::new();

    out.push_str("Counters:\n");
    if analysis.counters.is_empty() {
        out.push_str("  (none)\n");
    }
    for (ally, beaten) in analysis.counters.iter() {
        if beaten.is_empty() {
            out.push_str(&format!("  {:<12} no direct counter\n", ally));
        } else {
            out.push_str(&format!("  {:<12} beats {}\n", ally, beaten.join(", ")));
        }
    }

    out.push_str("Tips:\n");
    if analysis.tips.is_empty() {
        out.push_str("  (none)\n");
    }
    for tip in &analysis.tips {
        out.push_str(&format!("  - {}\n", tip));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use valorant_core::CounterMap;

    #[test]
    fn test_format_analysis() {
        let mut counters = CounterMap::new();
        counters.insert("Jett".to_string(), vec!["Cypher".to_string()]);
        counters.insert("Sage".to_string(), Vec::new());
        let analysis = MatchAnalysis {
            counters,
            tips: vec!["Play off trades".to_string()],
        };

        let text = format_analysis(&analysis);
        assert!(text.contains("Jett         beats Cypher"));
        assert!(text.contains("Sage         no direct counter"));
        assert!(text.contains("  - Play off trades"));
    }

    #[test]
    fn test_format_empty_analysis() {
        let text = format_analysis(&MatchAnalysis::default());
        assert_eq!(text, "Counters:\n  (none)\nTips:\n  (none)\n");
    }
}
