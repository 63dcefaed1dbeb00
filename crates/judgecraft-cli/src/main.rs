use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use judgecraft_core::{EvaluationRequest, Judge};

#[derive(Debug, Parser)]
#[command(name = "judgecraft", about = "Judge code output quality: framework, chat API, or heuristics")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
	Judge(JudgeArgs),
}

#[derive(Debug, Clone, Parser)]
struct JudgeArgs {
	/// Content to evaluate
	#[arg(long, conflicts_with = "content_file")]
	content: Option<String>,

	/// Read the content to evaluate from a file
	#[arg(long)]
	content_file: Option<PathBuf>,

	/// Criteria selector (all five criteria are always scored today)
	#[arg(long, default_value = "all")]
	criteria: String,

	/// Free-text description of what is being evaluated
	#[arg(long, default_value = "")]
	context: String,

	/// Print a human-readable table instead of JSON
	#[arg(long, action = ArgAction::SetTrue)]
	table: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();
	match cli.command {
		Commands::Judge(args) => judge(args).await?,
	}
	Ok(())
}

async fn judge(args: JudgeArgs) -> Result<()> {
	let content = match (args.content, args.content_file) {
		(Some(content), _) => content,
		(None, Some(path)) => tokio::fs::read_to_string(&path).await?,
		(None, None) => anyhow::bail!("one of --content or --content-file is required"),
	};

	let request = EvaluationRequest::new(content)
		.with_criteria(args.criteria)
		.with_context(args.context);

	let judge = Judge::builder().build();
	let result = judge.evaluate(&request).await;

	if args.table {
		println!("{}", result.summary_table());
	} else {
		println!("{}", serde_json::to_string_pretty(&result)?);
	}

	Ok(())
}
