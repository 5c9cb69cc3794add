use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use gini_compat::{
    Bridge, DEFAULT_SENTINEL, ExternalLibrary, LINKED_ROUTINE_SYMBOL, RoutineRegistry,
};
use gini_io::{
    DATE_RANGE, GiniRecord, LatestGini, find_latest_valid, history, parse_indicator_response,
    read_indicator_file, validate_country_code,
};
use gini_round::try_round_half_away_from_zero;

mod logging;

use logging::LogLevel;

#[derive(Debug, Parser)]
#[command(
    name = "gini-cli",
    version,
    about = "Round GINI values natively or through an external out-parameter routine"
)]
struct Cli {
    /// Diagnostic verbosity; diagnostics go to stdout, or stderr with `summary --json`
    #[arg(long, value_enum, env = "GINI_LOG", default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Round values with the native rounder
    Round {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f32>,
    },
    /// Round one value through the out-parameter bridge
    Bridge(BridgeArgs),
    /// Summarize an indicator response and optionally bridge its latest value
    Summary(SummaryArgs),
    /// Report the pointer width of this platform
    Arch,
}

#[derive(Debug, Args)]
struct BridgeArgs {
    #[arg(allow_negative_numbers = true)]
    value: f32,

    /// Shared library exporting the routine
    #[arg(long, env = "GINI_LIBRARY")]
    library: Option<PathBuf>,

    /// Routine symbol [default: asm_float_round with --library, the built-in routine otherwise]
    #[arg(long, env = "GINI_SYMBOL")]
    symbol: Option<String>,

    /// Fail when the routine leaves its slot unwritten instead of returning the sentinel
    #[arg(long)]
    checked: bool,

    #[arg(long, default_value_t = DEFAULT_SENTINEL, allow_negative_numbers = true)]
    sentinel: i32,
}

#[derive(Debug, Args)]
struct SummaryArgs {
    /// Three-letter ISO country code (e.g. ARG)
    country: String,

    /// Indicator response file; read from stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,

    /// Also list the observations, oldest first
    #[arg(short = 'H', long)]
    history: bool,

    /// Round the latest value through the bridge
    #[arg(short = 'C', long)]
    process: bool,

    /// Print the result as JSON; diagnostics move to stderr
    #[arg(long)]
    json: bool,
}

impl Command {
    /// Whether stdout carries a machine-readable report.
    fn writes_json(&self) -> bool {
        matches!(self, Command::Summary(args) if args.json)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let target = if cli.command.writes_json() {
        logging::Output::Stderr
    } else {
        logging::Output::Stdout
    };
    logging::init(cli.log_level, target);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Round { values } => run_round(&values),
        Command::Bridge(args) => run_bridge(&args),
        Command::Summary(args) => run_summary(&args),
        Command::Arch => {
            print_arch();
            Ok(())
        }
    }
}

fn run_round(values: &[f32]) -> Result<()> {
    let mut failures = 0usize;
    for &value in values {
        match try_round_half_away_from_zero(value) {
            Ok(score) => println!("{value} -> {score}"),
            Err(err) => {
                failures += 1;
                eprintln!("error: {err}");
            }
        }
    }
    if failures > 0 {
        bail!("{failures} of {} values could not be rounded", values.len());
    }
    Ok(())
}

fn run_bridge(args: &BridgeArgs) -> Result<()> {
    let library = match &args.library {
        // SAFETY: the library was named explicitly by the user.
        Some(path) => Some(unsafe { ExternalLibrary::open(path) }?),
        None => None,
    };

    let bridge = match &library {
        Some(library) => {
            let symbol = args.symbol.as_deref().unwrap_or(LINKED_ROUTINE_SYMBOL);
            // SAFETY: an exported rounding routine is expected to follow the
            // out-parameter contract.
            unsafe { library.bridge(symbol) }?
        }
        None => {
            let symbol = match &args.symbol {
                Some(symbol) => symbol.clone(),
                None => Bridge::default_routine().symbol().to_string(),
            };
            RoutineRegistry::with_defaults().bridge(&symbol)?
        }
    }
    .with_sentinel(args.sentinel);

    let score = if args.checked {
        bridge.round_checked(args.value)?
    } else {
        bridge.round(args.value)
    };

    println!("Routine: {}", bridge.symbol());
    println!("Input:   {:.2}", args.value);
    println!("Output:  {score}");
    Ok(())
}

fn run_summary(args: &SummaryArgs) -> Result<()> {
    let code = validate_country_code(&args.country)?;
    let records = load_records(args.input.as_deref())?;

    if records.is_empty() {
        println!("No GINI data points found for {code} in the period {DATE_RANGE}.");
        return Ok(());
    }

    let Some(latest) = find_latest_valid(&records) else {
        println!(
            "Data found for {code}, but no records had a valid GINI value in the period {DATE_RANGE}."
        );
        if args.history {
            print_history(&records);
        }
        return Ok(());
    };

    let score = if args.process {
        Some(Bridge::default_routine().round_checked(latest.value as f32)?)
    } else {
        None
    };

    if args.json {
        let rows: Option<Vec<_>> = args.history.then(|| {
            history(&records)
                .into_iter()
                .map(|row| serde_json::json!({ "date": row.date, "value": row.value }))
                .collect()
        });
        let report = serde_json::json!({
            "country_code": code,
            "latest": latest,
            "score": score,
            "history": rows,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary(&latest);
    if let Some(score) = score {
        println!();
        println!("--- Bridge Processing ---");
        println!("Input:   {:.2}", latest.value);
        println!("Output:  {score}");
    }
    if args.history {
        print_history(&records);
    }
    Ok(())
}

fn load_records(input: Option<&Path>) -> Result<Vec<GiniRecord>> {
    match input {
        Some(path) => {
            read_indicator_file(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("reading indicator response from stdin")?;
            Ok(parse_indicator_response(&raw)?)
        }
    }
}

fn print_summary(latest: &LatestGini) {
    println!("--- GINI Index Summary ---");
    println!("Country:      {}", latest.country_name);
    println!("Latest Year:  {}", latest.year);
    println!("Latest GINI:  {:.2}", latest.value);
}

fn print_history(records: &[GiniRecord]) {
    println!();
    println!("--- Historical Data (Oldest First) ---");
    let rows = history(records);
    if rows.is_empty() {
        println!("  (No historical records found)");
        return;
    }
    for row in rows {
        let date = row.date.as_deref().unwrap_or("N/A");
        match row.numeric_value() {
            Some(value) => println!("  Year: {date}, Index: {value:>6.2}"),
            None => match &row.value {
                Some(raw) => println!("  Year: {date}, Index: {raw} (invalid?)"),
                None => println!("  Year: {date}, Index: N/A (invalid?)"),
            },
        }
    }
}

fn print_arch() {
    println!("Architecture:  {}", std::env::consts::ARCH);
    println!(
        "Pointer width: {} bits ({} bytes)",
        usize::BITS,
        size_of::<usize>()
    );
}
