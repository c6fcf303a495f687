use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use snake::lattice::{embed, simulate};
use snake::search::{SearchCfg, Solutions};
use snake::symmetry::Symmetry;
use snake::State;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

const PROGRESS_EVERY: usize = 10_000;

#[derive(Parser)]
#[command(name = "snake")]
#[command(about = "Validate and enumerate snake puzzle configurations")]
struct Cmd {
    /// Log search progress at DEBUG level
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

/// Symmetries under which two states count as the same shape.
#[derive(Args, Clone, Copy, Debug)]
struct SymmetryArgs {
    /// Identify a chain with its reversal
    #[arg(long)]
    reverse: bool,
    /// Identify a chain with its mirror image (rules 1 and 3 swapped)
    #[arg(long)]
    chiral: bool,
    /// Only closed loops; identify loops up to rotation
    #[arg(long)]
    cyclic: bool,
}

impl From<SymmetryArgs> for Symmetry {
    fn from(a: SymmetryArgs) -> Self {
        Symmetry {
            reverse: a.reverse,
            chiral: a.chiral,
            cyclic: a.cyclic,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Report whether a state is physically realizable
    Physical {
        state: String,
        /// Also require the chain to close into a loop
        #[arg(long)]
        cyclic: bool,
        /// Print the failure kind and rule index
        #[arg(long)]
        explain: bool,
    },
    /// Count canonical physical states of a snake with PRISMS prisms
    Solve {
        prisms: usize,
        /// Print every state instead of the count
        #[arg(long)]
        list: bool,
        /// Write the listing to a file (with a provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
        #[command(flatten)]
        symmetry: SymmetryArgs,
    },
    /// Print the cell and orientation of every prism as JSON
    Trace { state: String },
    /// Count solutions for a range of prism counts
    Census {
        #[arg(long, default_value_t = 2)]
        min: usize,
        #[arg(long, default_value_t = 12)]
        max: usize,
        #[arg(long, default_value_t = 1)]
        step: usize,
        #[command(flatten)]
        symmetry: SymmetryArgs,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    match cmd.action {
        Action::Physical {
            state,
            cyclic,
            explain,
        } => physical(&state, cyclic, explain),
        Action::Solve {
            prisms,
            list,
            out,
            symmetry,
        } => solve(prisms, list, out, symmetry.into()),
        Action::Trace { state } => trace(&state),
        Action::Census {
            min,
            max,
            step,
            symmetry,
        } => census(min, max, step, symmetry.into()),
    }
}

fn parse_state(raw: &str) -> Result<State> {
    raw.parse::<State>()
        .with_context(|| format!("parsing state {raw:?}"))
}

fn search_cfg(symmetry: Symmetry) -> SearchCfg {
    SearchCfg {
        physical: true,
        symmetry,
    }
}

/// Rules per snake: one hinge between each pair of neighbouring prisms.
fn rule_count(prisms: usize) -> Result<usize> {
    if prisms == 0 {
        bail!("a snake needs at least one prism");
    }
    Ok(prisms - 1)
}

fn physical(raw: &str, cyclic: bool, explain: bool) -> Result<()> {
    let state = parse_state(raw)?;
    let sim = simulate(&state, cyclic);
    tracing::info!(state = %state, cyclic, physical = sim.is_physical(), "physical");
    match (explain, sim.failure) {
        (true, Some(failure)) => println!("false {} ({failure})", sim.index),
        (true, None) => println!("true {}", sim.index),
        (false, _) => println!("{}", sim.is_physical()),
    }
    Ok(())
}

fn solve(prisms: usize, list: bool, out: Option<PathBuf>, symmetry: Symmetry) -> Result<()> {
    let len = rule_count(prisms)?;
    let cfg = search_cfg(symmetry);
    tracing::info!(prisms, ?symmetry, out = ?out, "solve");
    let mut sols = Solutions::new(len, cfg)
        .with_context(|| format!("setting up search for {prisms} prisms"))?;

    let count = match &out {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            let count = write_listing(&mut sols, BufWriter::new(file))?;
            let sidecar = provenance::write_sidecar(path, listing_params(prisms, cfg, count))?;
            tracing::info!(sidecar = %sidecar.display(), "provenance");
            count
        }
        None if list => write_listing(&mut sols, BufWriter::new(io::stdout().lock()))?,
        None => count_solutions(&mut sols),
    };

    let stats = sols.stats();
    tracing::info!(
        count,
        candidates = stats.candidates,
        simulations = stats.simulations,
        accepted = stats.accepted,
        "solve_done"
    );
    if !list || out.is_some() {
        println!("{count}");
    }
    Ok(())
}

fn count_solutions(sols: &mut Solutions) -> usize {
    let mut count = 0;
    for _ in sols.by_ref() {
        count += 1;
        if count % PROGRESS_EVERY == 0 {
            tracing::debug!(count, "progress");
        }
    }
    count
}

/// One state per line; returns the number written.
fn write_listing<W: Write>(sols: &mut Solutions, mut w: W) -> Result<usize> {
    let mut count = 0;
    for state in sols.by_ref() {
        writeln!(w, "{state}")?;
        count += 1;
        if count % PROGRESS_EVERY == 0 {
            tracing::debug!(count, "progress");
        }
    }
    w.flush()?;
    Ok(count)
}

fn listing_params(prisms: usize, cfg: SearchCfg, count: usize) -> serde_json::Value {
    serde_json::json!({
        "prisms": prisms,
        "physical": cfg.physical,
        "reverse": cfg.symmetry.reverse,
        "chiral": cfg.symmetry.chiral,
        "cyclic": cfg.symmetry.cyclic,
        "count": count
    })
}

#[derive(Serialize)]
struct PrismRow {
    index: usize,
    cell: [i32; 3],
    lead: &'static str,
    inner: &'static str,
}

fn trace_rows(state: &State) -> Vec<PrismRow> {
    embed(state)
        .into_iter()
        .enumerate()
        .map(|(index, p)| PrismRow {
            index,
            cell: [p.cell.x, p.cell.y, p.cell.z],
            lead: p.orientation.lead().label(),
            inner: p.orientation.inner().label(),
        })
        .collect()
}

fn trace(raw: &str) -> Result<()> {
    let state = parse_state(raw)?;
    tracing::info!(state = %state, "trace");
    println!("{}", serde_json::to_string_pretty(&trace_rows(&state))?);
    Ok(())
}

fn census(min: usize, max: usize, step: usize, symmetry: Symmetry) -> Result<()> {
    if step == 0 {
        bail!("--step must be positive");
    }
    if min > max {
        bail!("--min {min} exceeds --max {max}");
    }
    tracing::info!(min, max, step, ?symmetry, "census");
    for prisms in (min..=max).step_by(step) {
        let (count, simulations) = census_row(prisms, symmetry)?;
        println!("{prisms} {count} {simulations}");
    }
    Ok(())
}

fn census_row(prisms: usize, symmetry: Symmetry) -> Result<(usize, u64)> {
    let mut sols = Solutions::new(rule_count(prisms)?, search_cfg(symmetry))
        .with_context(|| format!("setting up search for {prisms} prisms"))?;
    let count = count_solutions(&mut sols);
    Ok((count, sols.stats().simulations))
}
