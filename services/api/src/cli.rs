use crate::infra::{parse_animal, parse_solar};
use crate::server;
use astromatch::config::AppConfig;
use astromatch::error::AppError;
use astromatch::{
    AnimalSign, MatchContext, MatchEngine, Person, Polarity, ScoreOptions, SolarSign,
};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "AstroMatch",
    about = "Score and classify dual-zodiac pairings from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single pairing and print the result as JSON
    Score(ScoreArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Solar sign of the first person (e.g. aries)
    #[arg(long, value_parser = parse_solar)]
    pub(crate) solar_a: SolarSign,
    /// Animal sign of the first person (e.g. rat)
    #[arg(long, value_parser = parse_animal)]
    pub(crate) animal_a: AnimalSign,
    /// Solar sign of the second person
    #[arg(long, value_parser = parse_solar)]
    pub(crate) solar_b: SolarSign,
    /// Animal sign of the second person
    #[arg(long, value_parser = parse_animal)]
    pub(crate) animal_b: AnimalSign,
    /// Relationship frame (defaults to APP_DEFAULT_CONTEXT)
    #[arg(long, value_enum)]
    pub(crate) context: Option<ContextArg>,
    /// Optional polarity of the first person
    #[arg(long, value_enum)]
    pub(crate) polarity_a: Option<PolarityArg>,
    /// Optional polarity of the second person
    #[arg(long, value_enum)]
    pub(crate) polarity_b: Option<PolarityArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub(crate) enum ContextArg {
    RomanticOpposite,
    RomanticSame,
    Platonic,
}

impl From<ContextArg> for MatchContext {
    fn from(value: ContextArg) -> Self {
        match value {
            ContextArg::RomanticOpposite => MatchContext::RomanticOpposite,
            ContextArg::RomanticSame => MatchContext::RomanticSame,
            ContextArg::Platonic => MatchContext::Platonic,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub(crate) enum PolarityArg {
    Yang,
    Yin,
}

impl From<PolarityArg> for Polarity {
    fn from(value: PolarityArg) -> Self {
        match value {
            PolarityArg::Yang => Polarity::Yang,
            PolarityArg::Yin => Polarity::Yin,
        }
    }
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
    }
}

fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let context = args
        .context
        .map(MatchContext::from)
        .unwrap_or(config.matching.default_context);

    let mut a = Person::new(args.solar_a, args.animal_a);
    if let Some(polarity) = args.polarity_a {
        a = a.with_polarity(polarity.into());
    }
    let mut b = Person::new(args.solar_b, args.animal_b);
    if let Some(polarity) = args.polarity_b {
        b = b.with_polarity(polarity.into());
    }

    let engine = MatchEngine::with_defaults();
    let options = ScoreOptions {
        context,
        ..ScoreOptions::default()
    };
    let result = engine.score_with(&a, &b, &options)?;

    println!(
        "{} {} + {} {} ({:?}): {} ({} shown)",
        a.solar, a.animal, b.solar, b.animal, context, result.label.label(), result.display_score
    );
    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("result payload unavailable: {err}"),
    }

    Ok(())
}
