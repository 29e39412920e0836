use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::config::EngineConfig;
use crate::data::validate::ValidationSeverity;
use crate::data::{validate_species_dataset, Species, SpeciesRegistry};
use crate::engine::Engine;
use crate::error::{ConfigError, DataError, EngineError, InputError};
use crate::inference::{
    CandidateResult, EvolutionRankEntry, InvestmentTier, IvComponent, ObservedInput,
};
use crate::league::TopBuild;
use crate::stats::IvTriple;

#[derive(Debug, Parser)]
#[command(
    name = "ivrank",
    version,
    about = "Infer and rank creature IVs against CP-capped brackets"
)]
pub struct Cli {
    /// YAML config file (defaults to $IVRANK_CONFIG, then ./ivrank.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Explain observed values as ranked IV hypotheses
    Combos(CombosArgs),
    /// Rank one IV triple at every stage of the species' family
    Evolutions(EvolutionsArgs),
    /// List the best IV builds of a bracket
    Top(TopArgs),
    /// List known species
    Species,
    /// Validate a species data file
    Validate {
        /// Defaults to the configured data path
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
pub struct CombosArgs {
    /// Species id or name
    pub species: String,
    #[arg(long)]
    pub cp: Option<u32>,
    #[arg(long)]
    pub hp: Option<u32>,
    /// Stardust cost of the next power-up
    #[arg(long)]
    pub dust: Option<u32>,
    #[arg(long)]
    pub attack: Option<u8>,
    #[arg(long)]
    pub defense: Option<u8>,
    #[arg(long)]
    pub stamina: Option<u8>,
    /// Open IVs start at 12
    #[arg(long)]
    pub high_iv: bool,
    /// Open IVs start at 1
    #[arg(long)]
    pub reset: bool,
    /// Maximum candidates printed
    #[arg(long, default_value_t = 50)]
    pub limit: usize,
}

#[derive(Debug, Args)]
pub struct EvolutionsArgs {
    /// Species id or name
    pub species: String,
    pub attack: u8,
    pub defense: u8,
    pub stamina: u8,
}

#[derive(Debug, Args)]
pub struct TopArgs {
    /// Species id or name
    pub species: String,
    pub bracket: String,
    #[arg(long, default_value_t = 10)]
    pub count: usize,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("unknown species '{0}'")]
    UnknownSpecies(String),
    #[error("unknown bracket '{0}'")]
    UnknownBracket(String),
    #[error("no power-up tier costs {cost} stardust (known costs: {known})")]
    UnknownDust { cost: u32, known: String },
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("validation failed: {0} issue(s)")]
    Validation(usize),
}

pub fn run_with_args(args: &[String]) -> i32 {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return err.exit_code();
        }
    };
    match run(cli) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

pub fn run(cli: Cli) -> Result<(), CliError> {
    let config = EngineConfig::resolve(cli.config.as_deref())?;
    match cli.command {
        Command::Combos(args) => {
            let (registry, engine) = load_engine(&config)?;
            handle_combos(&engine, &registry, args)
        }
        Command::Evolutions(args) => {
            let (registry, engine) = load_engine(&config)?;
            handle_evolutions(&engine, &registry, args)
        }
        Command::Top(args) => {
            let (registry, engine) = load_engine(&config)?;
            handle_top(&engine, &registry, args)
        }
        Command::Species => {
            let registry = SpeciesRegistry::load(&config.data_path)?;
            print_json(registry.species())
        }
        Command::Validate { path } => handle_validate(path.unwrap_or(config.data_path)),
    }
}

fn load_engine(config: &EngineConfig) -> Result<(Arc<SpeciesRegistry>, Engine), CliError> {
    let registry = SpeciesRegistry::load(&config.data_path)?;
    info!(
        path = %config.data_path.display(),
        species = registry.species().len(),
        "species data loaded"
    );
    let engine = Engine::from_config(Arc::clone(&registry), config);
    Ok((registry, engine))
}

fn resolve_species(registry: &SpeciesRegistry, name_or_id: &str) -> Result<Species, CliError> {
    registry
        .resolve(name_or_id)
        .cloned()
        .ok_or_else(|| CliError::UnknownSpecies(name_or_id.to_string()))
}

fn iv_component(component: &'static str, value: Option<u8>) -> Result<IvComponent, InputError> {
    match value {
        Some(value) => IvComponent::known(component, value),
        None => Ok(IvComponent::Open),
    }
}

impl CombosArgs {
    pub fn observed_input(&self) -> Result<ObservedInput, InputError> {
        Ok(ObservedInput {
            cp: self.cp,
            hp: self.hp,
            investment: self.dust.map(InvestmentTier::from_cost).transpose()?,
            attack: iv_component("attack", self.attack)?,
            defense: iv_component("defense", self.defense)?,
            stamina: iv_component("stamina", self.stamina)?,
            high_iv_guarantee: self.high_iv,
            reset: self.reset,
        })
    }
}

#[derive(Debug, Serialize)]
struct CombosOutput<'a> {
    species: &'a Species,
    input: ObservedInput,
    total: usize,
    candidates: &'a [CandidateResult],
}

fn handle_combos(
    engine: &Engine,
    registry: &SpeciesRegistry,
    args: CombosArgs,
) -> Result<(), CliError> {
    let species = resolve_species(registry, &args.species)?;
    let input = args.observed_input().map_err(|err| match err {
        InputError::UnknownInvestmentTier(cost) => CliError::UnknownDust {
            cost,
            known: known_dust_costs(),
        },
        other => CliError::Input(other),
    })?;
    let candidates = engine.rank_all_combinations(species.id, &input)?;
    info!(species = %species.name, total = candidates.len(), "combinations ranked");
    let shown = &candidates[..candidates.len().min(args.limit)];
    print_json(&CombosOutput {
        species: &species,
        input,
        total: candidates.len(),
        candidates: shown,
    })
}

fn known_dust_costs() -> String {
    InvestmentTier::costs()
        .map(|cost| cost.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Serialize)]
struct EvolutionsOutput<'a> {
    species: &'a Species,
    ivs: IvTriple,
    family: Vec<EvolutionRankEntry>,
}

fn handle_evolutions(
    engine: &Engine,
    registry: &SpeciesRegistry,
    args: EvolutionsArgs,
) -> Result<(), CliError> {
    let species = resolve_species(registry, &args.species)?;
    let ivs = IvTriple::new(args.attack, args.defense, args.stamina)?;
    let family = engine.rank_evolution_family(ivs, species.id)?;
    print_json(&EvolutionsOutput {
        species: &species,
        ivs,
        family,
    })
}

#[derive(Debug, Serialize)]
struct TopOutput<'a> {
    species: &'a Species,
    bracket: &'a str,
    feasible: usize,
    builds: Vec<TopBuild>,
}

fn handle_top(engine: &Engine, registry: &SpeciesRegistry, args: TopArgs) -> Result<(), CliError> {
    let species = resolve_species(registry, &args.species)?;
    let tables = engine.tables(species.id)?;
    let table = tables
        .get(&args.bracket)
        .ok_or_else(|| CliError::UnknownBracket(args.bracket.clone()))?;
    print_json(&TopOutput {
        species: &species,
        bracket: &args.bracket,
        feasible: table.len(),
        builds: table.top(args.count),
    })
}

fn handle_validate(path: PathBuf) -> Result<(), CliError> {
    let report = validate_species_dataset(&path)?;
    for diag in &report.diagnostics {
        if diag.severity == ValidationSeverity::Info {
            println!("{diag}");
        } else {
            eprintln!("{diag}");
        }
    }
    if report.has_errors() {
        return Err(CliError::Validation(report.errors().count()));
    }
    println!("validation passed: {}", path.display());
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value)?;
    println!("{payload}");
    Ok(())
}
