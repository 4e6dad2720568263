use crate::physics::configuration::{self, SubshellToken};
use crate::physics::elements::{Element, ElementCategory};
use crate::simulation::atom::Atom;
use crate::simulation::layout::{LayoutConfig, OrbitLayoutGenerator};
use clap::{Parser, Subcommand};
use glam::Vec3;
use log::info;
use serde::Serialize;
use std::path::PathBuf;

pub type AppError = Box<dyn std::error::Error + Send + Sync>;
pub type AppResult<T> = Result<T, AppError>;

#[derive(Parser, Debug)]
#[command(name = "atom-orbits")]
#[command(about = "Electron configuration parser and orbit layout generator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the animated atom model for an element
    Show {
        /// Atomic number, symbol or name
        element: String,

        /// Use this configuration instead of the catalog one
        #[arg(long)]
        configuration: Option<String>,

        /// JSON file with layout constants
        #[arg(long)]
        layout: Option<PathBuf>,

        /// Seed for ring orientations (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Elapsed seconds at which electron positions are sampled
        #[arg(long, default_value_t = 0.0)]
        time: f32,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Expand a configuration into explicit subshells
    Expand {
        configuration: String,

        #[arg(long)]
        json: bool,
    },
    /// List catalog elements
    List {
        /// Only elements of this category, e.g. noble-gas
        #[arg(long, value_parser = parse_category)]
        category: Option<ElementCategory>,
    },
}

fn parse_category(label: &str) -> Result<ElementCategory, String> {
    ElementCategory::from_label(label).ok_or_else(|| {
        let known: Vec<&str> = ElementCategory::ALL.iter().map(|c| c.label()).collect();
        format!("unknown category `{label}` (expected one of: {})", known.join(", "))
    })
}

#[derive(Serialize)]
struct ShowReport<'a> {
    atom: &'a Atom,
    elapsed: f32,
    electron_positions: Vec<Vec3>,
}

pub fn start() -> AppResult<()> {
    env_logger::init();
    run(Cli::parse())
}

pub fn run(cli: Cli) -> AppResult<()> {
    match cli.command {
        Command::Show {
            element,
            configuration,
            layout,
            seed,
            time,
            json,
        } => show(&element, configuration, layout, seed, time, json),
        Command::Expand {
            configuration,
            json,
        } => expand(&configuration, json),
        Command::List { category } => {
            list(category);
            Ok(())
        }
    }
}

fn show(
    query: &str,
    configuration: Option<String>,
    layout: Option<PathBuf>,
    seed: Option<u64>,
    elapsed: f32,
    json: bool,
) -> AppResult<()> {
    let element =
        Element::lookup(query).ok_or_else(|| format!("unknown element `{query}`"))?;

    let config = match &layout {
        Some(path) => {
            let config = LayoutConfig::from_path(path)
                .map_err(|e| format!("failed to read layout {}: {e}", path.display()))?;
            info!("layout loaded from {}", path.display());
            config
        }
        None => LayoutConfig::default(),
    };

    let mut generator = match seed {
        Some(seed) => OrbitLayoutGenerator::with_seed(seed),
        None => OrbitLayoutGenerator::new(),
    };

    // An explicit configuration overrides the catalog one
    let atom = match configuration {
        Some(raw) => Atom::with_configuration(element, &raw, &mut generator, config),
        None => Atom::new(element, &mut generator, config),
    };

    if json {
        let report = ShowReport {
            atom: &atom,
            elapsed,
            electron_positions: atom.electron_positions(elapsed),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", render_atom(&atom, elapsed));
    Ok(())
}

fn render_atom(atom: &Atom, elapsed: f32) -> String {
    let mut out = String::new();
    if let Some(element) = atom.element() {
        out.push_str(&format!(
            "{} #{} [{}] {} u\n",
            element,
            element.atomic_number,
            element.category.display_name(),
            element.atomic_mass
        ));
    }
    out.push_str(&format!("configuration: {}\n", atom.configuration()));
    let nucleus = atom.nucleus();
    out.push_str(&format!(
        "nucleus: core {:.3}, shell {:.3}, glow {:.3}\n",
        nucleus.core_radius, nucleus.shell_radius, nucleus.glow_radius
    ));

    for subshell in atom.subshells() {
        out.push_str(&format!(
            "{} ({} rings)\n",
            subshell.token,
            subshell.orbits.len()
        ));
        for orbit in &subshell.orbits {
            out.push_str(&format!(
                "  ring {}: {} e-, r={:.2}, w={:+.3} rad/s, tilt=({:.3}, {:.3}, {:.3})\n",
                orbit.slot,
                orbit.electron_count,
                orbit.ring_radius,
                orbit.angular_speed,
                orbit.orientation.x,
                orbit.orientation.y,
                orbit.orientation.z
            ));
            for position in orbit.electron_positions(elapsed) {
                out.push_str(&format!(
                    "    ({:+.3}, {:+.3}, {:+.3})\n",
                    position.x, position.y, position.z
                ));
            }
        }
    }
    out.push_str(&format!(
        "{} rings, {} electrons at t={elapsed}s\n",
        atom.ring_count(),
        atom.electron_count()
    ));
    out
}

fn expand(raw: &str, json: bool) -> AppResult<()> {
    let tokens = configuration::expand(raw);
    if json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        println!("{}", render_tokens(&tokens));
    }
    Ok(())
}

fn render_tokens(tokens: &[SubshellToken]) -> String {
    tokens
        .iter()
        .map(SubshellToken::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn list(category: Option<ElementCategory>) {
    for element in Element::all()
        .iter()
        .filter(|element| category.is_none_or(|c| element.category == c))
    {
        let (column, row) = element.grid_position();
        println!(
            "{:>3} {:<3} {:<14} {:>8.3} {:<22} ({:>2},{:>2}) {}",
            element.atomic_number,
            element.symbol,
            element.name,
            element.atomic_mass,
            element.category.label(),
            column,
            row,
            element.electron_configuration
        );
    }
}
