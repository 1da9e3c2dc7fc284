mod config;
mod script;

use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use pregion_boundary::{NoiseTerrain, RegionStore, sorted_columns};
use pregion_geom::LatticePoint;
use pregion_raster::rasterize_line;
use pregion_viz::LogRenderer;

#[derive(Parser, Debug)]
#[command(name = "pregion")]
#[command(about = "Polygon region editing, line rasterization and wall placement")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the lattice path between two points, start excluded.
    Line(LineArgs),
    /// Print the wall columns of a configured region.
    Wall(WallArgs),
    /// Replay a script of session edits against the configured regions.
    Replay(ReplayArgs),
}

#[derive(Args, Debug)]
struct LineArgs {
    #[arg(value_parser = parse_point, allow_hyphen_values = true)]
    from: LatticePoint,
    #[arg(value_parser = parse_point, allow_hyphen_values = true)]
    to: LatticePoint,
}

#[derive(Args, Debug)]
struct WallArgs {
    #[arg(long, default_value = "assets/pregion.toml")]
    config: PathBuf,
    #[arg(long)]
    region: String,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    #[arg(long, default_value = "assets/pregion.toml")]
    config: PathBuf,
    #[arg(long)]
    script: PathBuf,
}

fn parse_point(s: &str) -> Result<LatticePoint, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected x,y,z but got \"{}\"", s));
    };
    let num = |v: &str| v.parse::<i32>().map_err(|e| format!("{}: {}", v, e));
    Ok(LatticePoint::new(num(*x)?, num(*y)?, num(*z)?))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.cmd {
        Command::Line(args) => {
            for p in rasterize_line(args.from, args.to) {
                println!("{}", p);
            }
        }
        Command::Wall(args) => {
            let cfg = config::load_config(&args.config)?;
            let store = cfg.build_store()?;
            let polygon = store.polygon(&args.region)?;
            let terrain = NoiseTerrain::new(&cfg.terrain);
            let cols = polygon.wall_columns(&terrain, cfg.wall.trace);
            for p in sorted_columns(&cols) {
                println!("{}", p);
            }
            log::info!("{}: {} wall columns", polygon.name, cols.len());
        }
        Command::Replay(args) => {
            let cfg = config::load_config(&args.config)?;
            let script = script::load_script(&args.script)?;
            let mut store = cfg.build_store()?;
            let mut renderer = LogRenderer::default();
            let summary = script::replay(&cfg, &script, &mut store, &mut renderer);
            println!(
                "{} commands applied, {} frames drawn, committed: [{}], {} failed",
                summary.applied,
                renderer.frames_drawn,
                summary.committed.join(", "),
                summary.failed
            );
        }
    }
    Ok(())
}
