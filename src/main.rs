use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use credit_check::input::{validate_form, FormInput};
use credit_check::output::{self, ScoredScenario};
use credit_check::scoring::{self, CreditInputs, CreditResult};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;
const EXIT_OUTPUT: i32 = 5;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
    Tsv,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Share of rent paid on time: 0.95, 95% or 95 (blank = always on time)
    #[arg(long)]
    rent_ratio: Option<String>,

    /// Monthly income
    #[arg(long)]
    income: Option<String>,

    /// Monthly expenses
    #[arg(long)]
    expenses: Option<String>,

    /// Missed utility payments: 0, 1, 2, 3+
    #[arg(long)]
    missed: Option<String>,

    /// Education: high-school, college, bachelors, masters, phd
    #[arg(long)]
    education: Option<String>,

    /// Years of employment
    #[arg(long)]
    employment_years: Option<String>,

    /// Requested loan amount (defaults to 3x monthly income)
    #[arg(long)]
    loan: Option<String>,

    /// Score even if required fields are missing or invalid
    #[arg(long)]
    lenient: bool,
}

impl ScoreArgs {
    fn to_form(&self) -> FormInput {
        FormInput {
            rent_ratio: self.rent_ratio.clone(),
            monthly_income: self.income.clone(),
            monthly_expenses: self.expenses.clone(),
            missed_payments: self.missed.clone(),
            education: self.education.clone(),
            employment_years: self.employment_years.clone(),
            loan_amount: self.loan.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score the scenarios in the scenario file, best first (default if no subcommand)
    Scenarios,
    /// Score a single set of values given as flags
    Score(ScoreArgs),
    /// Write a starter scenario file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "credit-check")]
#[command(about = "What-if credit score explorer", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging and score breakdowns
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to scenario file (defaults to ~/.config/credit-check/scenarios.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "credit_check=debug"
    } else {
        "credit_check=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Score a form and log how the number came about.
fn score_form(name: &str, form: &FormInput) -> (CreditInputs, CreditResult) {
    let inputs = form.to_inputs();
    let result = scoring::compute(&inputs);
    let breakdown = scoring::breakdown(&inputs);

    tracing::debug!(
        scenario = name,
        weighted = breakdown.weighted_score,
        score = result.credit_score,
        approved = result.is_approved,
        zero_income = breakdown.zero_income,
        "scored"
    );

    (inputs, result)
}

fn print_report(inputs: &CreditInputs, result: &CreditResult, verbose: bool, use_colors: bool) {
    let decision = scoring::evaluate_approval(result.credit_score, inputs);
    let breakdown = verbose.then(|| scoring::breakdown(inputs));
    println!(
        "{}",
        output::format_report(
            result,
            &decision,
            breakdown.as_ref(),
            use_colors,
            output::gauge_width()
        )
    );
}

fn print_json(scenarios: &[ScoredScenario], named: bool) -> i32 {
    match output::format_json(scenarios, named) {
        Ok(json) => {
            println!("{}", json);
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Output error: {:#}", e);
            EXIT_OUTPUT
        }
    }
}

fn run_score(args: &ScoreArgs, cli: &Cli, use_colors: bool) -> i32 {
    let form = args.to_form();

    if let Err(errors) = validate_form(&form) {
        if args.lenient {
            for error in &errors {
                tracing::warn!("{}", error);
            }
        } else {
            eprintln!("Input errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            eprintln!("Pass --lenient to score with defaults for missing values.");
            return EXIT_INPUT;
        }
    }

    let (inputs, result) = score_form("cli", &form);

    match cli.format {
        Format::Text => print_report(&inputs, &result, cli.verbose, use_colors),
        Format::Json => {
            let scored = [ScoredScenario {
                name: "cli",
                result: &result,
            }];
            return print_json(&scored, false);
        }
        Format::Tsv => {
            let scored = [ScoredScenario {
                name: "cli",
                result: &result,
            }];
            println!("{}", output::format_tsv(&scored));
        }
    }

    EXIT_SUCCESS
}

fn run_scenarios(cli: &Cli, use_colors: bool) -> i32 {
    let start_time = Instant::now();
    let config_path =
        match credit_check::config::resolve_config_path(cli.config.as_ref().map(PathBuf::from)) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                return EXIT_CONFIG;
            }
        };
    let config = match credit_check::config::load_config(Some(config_path.clone())) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return EXIT_CONFIG;
        }
    };

    if config.scenarios.is_empty() {
        eprintln!("No scenarios configured in scenario file.");
        eprintln!("Add scenarios to {}:", config_path.display());
        eprintln!("  scenarios:");
        eprintln!("    - name: baseline");
        eprintln!("      form:");
        eprintln!("        monthly_income: \"85000\"");
        eprintln!("        education: \"bachelors\"");
        return EXIT_CONFIG;
    }

    // Report every invalid scenario, then score the rest with defaults
    for scenario in &config.scenarios {
        if let Err(errors) = validate_form(&scenario.form) {
            for error in errors {
                tracing::warn!(scenario = %scenario.name, "{}", error);
            }
        }
    }

    let mut scored: Vec<_> = config
        .scenarios
        .iter()
        .map(|scenario| {
            let (inputs, result) = score_form(&scenario.name, &scenario.form);
            (scenario, inputs, result)
        })
        .collect();

    output::rank_by_score(&mut scored, |(scenario, _, result)| {
        (result.credit_score, scenario.name.as_str())
    });

    let scored_refs: Vec<ScoredScenario> = scored
        .iter()
        .map(|(scenario, _, result)| ScoredScenario {
            name: &scenario.name,
            result,
        })
        .collect();

    match cli.format {
        Format::Json => return print_json(&scored_refs, true),
        Format::Tsv => println!("{}", output::format_tsv(&scored_refs)),
        Format::Text if cli.verbose => {
            // Verbose mode: full report per scenario
            for (scenario, inputs, result) in &scored {
                println!("== {}", scenario.name);
                print_report(inputs, result, true, use_colors);
                println!();
            }
        }
        Format::Text => {
            println!(
                "{}",
                output::format_scenario_table(&scored_refs, use_colors)
            );
        }
    }

    tracing::info!(
        scenarios = scored.len(),
        elapsed = ?start_time.elapsed(),
        "scored scenario file"
    );

    EXIT_SUCCESS
}

fn run_init(cli: &Cli, force: bool) -> i32 {
    let config_path = cli.config.as_ref().map(PathBuf::from);
    match credit_check::config::write_starter_config(config_path, force) {
        Ok(path) => {
            println!("Scenario file written to {}", path.display());
            println!("Run `credit-check` to score it.");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            EXIT_CONFIG
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let use_colors = !cli.no_color && output::should_use_colors();

    let code = match &cli.command {
        None | Some(Commands::Scenarios) => run_scenarios(&cli, use_colors),
        Some(Commands::Score(args)) => run_score(args, &cli, use_colors),
        Some(Commands::Init { force }) => run_init(&cli, *force),
    };

    std::process::exit(code);
}
