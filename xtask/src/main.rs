use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::process::{Command, Stdio};

#[derive(Parser)]
#[command(author, version, about = "Workspace automation tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// fmt + clippy -D warnings + tests (workspace) + schema check
    Ci,
    /// Validate every config and scenario under data/
    SchemaCheck,
}

fn run(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("spawn")?;
    if !status.success() {
        bail!("command failed: {:?}", cmd);
    }
    Ok(())
}

fn cargo(args: &[&str]) -> Result<()> {
    let mut c = Command::new("cargo");
    c.args(args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    run(&mut c)
}

fn ci() -> Result<()> {
    cargo(&["fmt", "--all"])?;
    cargo(&["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"])?;
    cargo(&["test", "--workspace"])?;
    schema_check()?;
    Ok(())
}

fn schema_check() -> Result<()> {
    let root = data_runtime::loader::data_root();

    // Drink config: serde shape plus parameter validation.
    let path = root.join("config/drink.toml");
    let txt = std::fs::read_to_string(&path)
        .with_context(|| format!("read {}", path.display()))?;
    let cfg = data_runtime::configs::drink::parse(&txt)
        .with_context(|| format!("validate {}", path.display()))?;
    drink_core::DrinkParams::from_cfg(&cfg)
        .with_context(|| format!("validate params: {}", path.display()))?;

    data_runtime::configs::telemetry::load_default().context("validate telemetry.toml")?;

    let scenarios = root.join("scenarios");
    let mut count = 0usize;
    if scenarios.is_dir() {
        for entry in std::fs::read_dir(&scenarios)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                continue;
            }
            data_runtime::scenario::load(&path)
                .with_context(|| format!("validate scenario: {}", path.display()))?;
            count += 1;
        }
    }
    println!("xtask: schema check ok (drink.toml, telemetry.toml, {count} scenarios)");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Ci => ci(),
        Cmd::SchemaCheck => schema_check(),
    }
}
