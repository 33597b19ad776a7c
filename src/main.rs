use anyhow::{Context, Result};
use clap::Parser;
use data_runtime::configs::{drink, telemetry};
use data_runtime::scenario;
use drink_core::DrinkRig;
use pintdrive::harness;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Replay a scripted drink scenario headlessly", long_about = None)]
struct Cli {
    /// Scenario TOML (relative to `data/` or an explicit path)
    #[arg(long, default_value = "scenarios/full_drink.toml")]
    scenario: PathBuf,
    /// Override the scenario frame step (seconds)
    #[arg(long)]
    dt: Option<f32>,
}

fn main() -> Result<()> {
    let tele = telemetry::load_default()?;
    // Config level by default; RUST_LOG wins when set.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(tele.filter()))
        .format_timestamp_secs()
        .try_init();
    let cli = Cli::parse();

    let cfg = drink::load_default()?;
    let mut rig = DrinkRig::from_cfg(&cfg).context("invalid drink config")?;
    let mut scn = scenario::load(&cli.scenario)
        .with_context(|| format!("load scenario {}", cli.scenario.display()))?;
    if let Some(dt) = cli.dt {
        scn.dt = dt;
        scn.validate()?;
    }
    log::info!(
        "replaying {} ({} steps, {:.2}s at dt={})",
        cli.scenario.display(),
        scn.steps.len(),
        scn.total_s(),
        scn.dt
    );

    let out = harness::replay(&mut rig, &scn, tele.trace_frames.unwrap_or(false));
    println!("[drink] frames: {}", out.frames);
    println!("[drink] cycles: {}", out.totals.cycles());
    println!("[drink] total consumed: {:.4}", out.totals.total());
    println!("[drink] final fill: {:.4}", out.final_fill);
    println!("[drink] final state: {:?}", out.final_state);
    Ok(())
}
