use crate::infra::read_offer_text;
use clap::Args;
use scamproof::error::AppError;
use scamproof::screening::{RiskBreakdown, RiskEngine, RiskVerdict, RuleBook};
use serde_json::json;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct AnalyzeArgs {
    /// Offer text to score. Reads stdin when neither --text nor --file is given.
    #[arg(long, conflicts_with = "file")]
    pub(crate) text: Option<String>,
    /// Path to a file containing the offer text.
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Print the verdict as JSON instead of a readable summary.
    #[arg(long)]
    pub(crate) json: bool,
    /// Include the per-rule breakdown behind the score.
    #[arg(long)]
    pub(crate) explain: bool,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        text,
        file,
        json,
        explain,
    } = args;

    let text = read_offer_text(text, file)?;
    let engine = RiskEngine::standard();
    let breakdown = engine.explain(&text);
    let verdict = breakdown.verdict();

    if json {
        let payload = if explain {
            json!({ "verdict": verdict, "breakdown": breakdown })
        } else {
            json!(verdict)
        };
        match serde_json::to_string_pretty(&payload) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => println!("Verdict payload unavailable: {err}"),
        }
    } else {
        print!("{}", render_verdict(&verdict, explain.then_some(&breakdown)));
    }

    Ok(())
}

pub(crate) fn run_rules() {
    print!("{}", render_rules(&RuleBook::standard()));
}

pub(crate) fn render_verdict(verdict: &RiskVerdict, breakdown: Option<&RiskBreakdown>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Risk score: {}/100", verdict.score);

    if verdict.flags.is_empty() {
        let _ = writeln!(out, "Warning signs: none");
    } else {
        let _ = writeln!(out, "Warning signs");
        for flag in &verdict.flags {
            let _ = writeln!(out, "- {flag}");
        }
    }

    if let Some(breakdown) = breakdown {
        let _ = writeln!(out, "\nRule breakdown ({} raw points)", breakdown.raw_points);
        for matched in &breakdown.matches {
            let _ = writeln!(
                out,
                "- {} +{} (matched {})",
                matched.key,
                matched.points,
                matched.matched_terms.join(" + ")
            );
        }
    }

    let _ = writeln!(out, "\nNext steps: {}", verdict.next_steps);
    out
}

pub(crate) fn render_rules(book: &RuleBook) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Screening rules");
    for rule in book.rules() {
        let clauses: Vec<String> = rule
            .clauses
            .iter()
            .map(|terms| format!("({})", terms.join(" | ")))
            .collect();
        let _ = writeln!(
            out,
            "- {} +{}: {} when {}",
            rule.key,
            rule.points,
            rule.flag,
            clauses.join(" and ")
        );
    }
    out
}
