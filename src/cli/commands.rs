use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::client::DEFAULT_PAGE_SIZE;
use crate::output::write_jsonl;
use crate::parsers::{ParserTable, parse_records};
use crate::stream::IssueStream;

#[derive(Parser)]
#[command(name = "jira-export")]
#[command(version)]
#[command(about = "Convert JIRA issues to JSON lines", long_about = None)]
pub struct Cli {
    /// JQL query to search with; all issues are returned when omitted
    #[arg(long, default_value = "")]
    pub jql: String,

    /// Base URL of the JIRA server
    #[arg(short = 'u', long, env = "JIRA_BASE_URL")]
    pub base_url: String,

    /// API token used for bearer authentication
    #[arg(short = 't', long, env = "JIRA_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Output file, overwritten if it exists; pass `-` to write to stdout
    #[arg(short = 'o', long, default_value = "jira_issues.jsonl")]
    pub output: PathBuf,

    /// Rows requested per page (the server caps this at 1000)
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    export(&cli)
}

fn export(cli: &Cli) -> Result<()> {
    let stream = IssueStream::builder(&cli.base_url, &cli.jql)
        .token(&cli.token)
        .page_size(cli.page_size)
        .build()
        .context("failed to configure the issue stream")?;
    let records = parse_records(stream, ParserTable::default());

    if cli.output.as_os_str() == "-" {
        let stdout = io::stdout();
        let mut sink = stdout.lock();
        write_jsonl(records, &mut sink)?;
        sink.flush()?;
    } else {
        let file = File::create(&cli.output)
            .with_context(|| format!("failed to create output file: {}", cli.output.display()))?;
        let mut sink = BufWriter::new(file);
        write_jsonl(records, &mut sink)?;
        sink.flush()?;
    }

    Ok(())
}
