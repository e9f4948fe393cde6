use agecalc::config::{Config, OutputFormat};
use agecalc::{Form, Report, parse_birth_date};
use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Age in years, months and days, and days until the next birthday
#[derive(Parser, Debug)]
#[command(name = "agecalc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Date of birth (YYYY-MM-DD). Omit to start the interactive form.
    #[arg(long)]
    dob: Option<String>,

    /// Reference date instead of today (YYYY-MM-DD); also AGECALC_TODAY
    #[arg(long)]
    today: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.today.as_deref(), cli.json, cli.verbose)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "resolved config");

    match cli.dob {
        Some(dob) => one_shot(&dob, &config),
        None => interactive(&config).await,
    }
}

fn one_shot(dob: &str, config: &Config) -> Result<()> {
    let birth = parse_birth_date(Some(dob), config.today)?;
    let report = Report::new(birth, config.today);
    println!("{}", render(&report, config.format)?);
    Ok(())
}

fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.summary()),
        OutputFormat::Json => report.to_json().context("Failed to serialize report"),
    }
}

/// Each line is a "calculate" action; `reset` clears the form, `quit`/EOF ends.
/// With `--json` each calculation prints the report or `{"error": ...}`.
async fn interactive(config: &Config) -> Result<()> {
    let mut form = Form::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    info!(today = %config.today, "starting interactive form");

    loop {
        let prompt = format!(
            "Date of birth (YYYY-MM-DD, max {}; `reset`, `quit`): ",
            Form::max_date(config.today)
        );
        stdout.write_all(prompt.as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await.context("Failed to read stdin")? else {
            break;
        };

        let output = match line.trim() {
            "quit" | "exit" => break,
            "reset" => {
                form.reset();
                form.to_string()
            }
            input => match (form.calculate(Some(input), config.today), config.format) {
                (Ok(report), OutputFormat::Json) => render(&report, config.format)? + "\n",
                (Err(err), OutputFormat::Json) => {
                    serde_json::json!({ "error": err.to_string() }).to_string() + "\n"
                }
                _ => form.to_string(),
            },
        };

        stdout.write_all(output.as_bytes()).await?;
    }

    stdout.flush().await?;
    Ok(())
}
