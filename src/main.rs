mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use pwd_forge::{
    estimator_for, generate, write_wordlist, EstimatorKind, GeneratorConfig, KeywordKind,
    KeywordSet, BLACKLIST_PATH_ENV, DEFAULT_MAX_LEET_VARIANTS, DEFAULT_OUTPUT_PATH,
};
use secrecy::SecretString;

#[derive(Parser)]
#[command(
    name = "pwd-forge",
    version,
    about = "Password strength analyzer and custom wordlist generator"
)]
struct Cli {
    /// Password to analyze
    #[arg(short, long)]
    password: Option<String>,

    /// Name (for wordlist)
    #[arg(long)]
    name: Option<String>,

    /// DOB or birth year
    #[arg(long)]
    dob: Option<String>,

    /// Pet name
    #[arg(long)]
    pet: Option<String>,

    /// Favorite word
    #[arg(long)]
    fav: Option<String>,

    /// Other numbers (lucky etc.)
    #[arg(long)]
    numbers: Option<String>,

    /// Phone last digits
    #[arg(long)]
    phone: Option<String>,

    /// Extra keyword, may be repeated
    #[arg(short = 'k', long = "keyword")]
    keywords: Vec<String>,

    /// Generate wordlist from provided inputs
    #[arg(short, long)]
    generate: bool,

    /// Output .txt filename
    #[arg(short, long, env = "PWD_FORGE_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Suffix appended to every variant, may be repeated (replaces the defaults)
    #[arg(long = "suffix")]
    suffixes: Vec<String>,

    /// Prefix prepended to every variant, may be repeated
    #[arg(long = "prefix")]
    prefixes: Vec<String>,

    /// Maximum leetspeak variants per case variant
    #[arg(long = "max-leet", default_value_t = DEFAULT_MAX_LEET_VARIANTS)]
    max_leet: usize,

    /// Max words to keep in the generated list
    #[arg(long)]
    max_words: Option<usize>,

    /// Show sample generated words
    #[arg(long)]
    show: bool,

    /// Strength estimator
    #[arg(short, long, value_enum, default_value = "zxcvbn")]
    estimator: EstimatorArg,

    /// Common password list for the heuristic estimator
    #[arg(long, env = BLACKLIST_PATH_ENV)]
    blacklist: Option<PathBuf>,

    /// Prompt for inputs on the terminal
    #[arg(short, long, visible_alias = "gui")]
    interactive: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
enum EstimatorArg {
    Zxcvbn,
    Heuristic,
}

impl From<EstimatorArg> for EstimatorKind {
    fn from(arg: EstimatorArg) -> Self {
        match arg {
            EstimatorArg::Zxcvbn => EstimatorKind::Zxcvbn,
            EstimatorArg::Heuristic => EstimatorKind::Heuristic,
        }
    }
}

/// What to do in this invocation, from flags or interactive prompts.
struct Request {
    password: Option<SecretString>,
    keywords: KeywordSet,
    generate: bool,
    output: PathBuf,
}

impl Request {
    fn from_cli(cli: &Cli) -> Self {
        let fields = [
            (KeywordKind::Name, &cli.name),
            (KeywordKind::Dob, &cli.dob),
            (KeywordKind::Pet, &cli.pet),
            (KeywordKind::Fav, &cli.fav),
            (KeywordKind::Numbers, &cli.numbers),
            (KeywordKind::Phone, &cli.phone),
        ];

        let mut keywords = KeywordSet::new();
        for (kind, value) in &fields {
            keywords.push_opt(*kind, value.as_deref());
        }
        for extra in &cli.keywords {
            keywords.push(KeywordKind::Extra, extra);
        }

        let any_keyword_flag =
            fields.iter().any(|(_, value)| value.is_some()) || !cli.keywords.is_empty();

        Self {
            password: cli.password.clone().map(|p| SecretString::new(p.into())),
            keywords,
            generate: cli.generate || any_keyword_flag,
            output: cli.output.clone(),
        }
    }

    fn from_prompts(cli: &Cli) -> Result<Self> {
        let input = ui::prompt_inputs(&cli.output)?;

        let mut keywords = KeywordSet::new();
        for (kind, value) in &input.fields {
            keywords.push(*kind, value);
        }

        Ok(Self {
            password: input.password,
            keywords,
            generate: input.generate,
            output: input.output,
        })
    }
}

#[cfg(feature = "cli-logging")]
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

#[cfg(not(feature = "cli-logging"))]
fn init_tracing(_verbose: u8) {}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            ui::display_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let request = if cli.interactive {
        Request::from_prompts(cli)?
    } else {
        Request::from_cli(cli)
    };

    if request.password.is_none() && !request.generate {
        Cli::command().print_help()?;
        eprintln!("\nNothing to do: pass --password and/or keyword flags with --generate.");
        return Ok(ExitCode::from(2));
    }

    if let Some(password) = &request.password {
        let estimator = estimator_for(
            cli.estimator.into(),
            &request.keywords.values(),
            cli.blacklist.as_deref(),
        )?;
        let report = estimator
            .estimate(password)
            .context("Password analysis failed")?;
        ui::display_analysis(estimator.name(), &report);
    }

    if request.generate {
        let config = GeneratorConfig {
            max_leet_variants: cli.max_leet,
            max_words: cli.max_words,
            ..GeneratorConfig::default()
        }
        .with_prefixes(cli.prefixes.iter().cloned());
        let config = if cli.suffixes.is_empty() {
            config
        } else {
            config.with_suffixes(cli.suffixes.iter().cloned())
        };

        let wordlist = generate(&request.keywords, &config);
        ui::display_generation(&request.keywords, &wordlist, cli.show);

        let written = write_wordlist(&wordlist, &request.output)?;
        ui::display_export(written, &request.output);
    }

    Ok(ExitCode::SUCCESS)
}
