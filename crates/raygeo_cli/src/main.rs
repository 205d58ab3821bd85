use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use raygeo_core::{solve_batch, Ellipsoid, Outcome, RayQuery, E_E, R_E_KM};
use raygeo_math::IntVector3;

mod output;

/// Printed whenever the arguments cannot be turned into a ray.
const USAGE: &str = "Usage: ray_ellipsoid_intersection d_l_x d_l_y d_l_z c_l_x c_l_y c_l_z";

#[derive(Parser)]
#[command(name = "ray_ellipsoid_intersection", version)]
#[command(about = "Intersect a ray with the reference ellipsoid", long_about = None)]
struct Cli {
    /// Ray direction (d_l_x d_l_y d_l_z) then origin offset (c_l_x c_l_y c_l_z), in km
    #[arg(
        value_name = "COMPONENT",
        allow_negative_numbers = true,
        conflicts_with = "batch"
    )]
    components: Vec<i64>,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,

    /// Solve a JSON array of {"direction", "origin"} queries ("-" reads stdin)
    #[arg(long, value_name = "FILE")]
    batch: Option<PathBuf>,

    /// Equatorial radius of the ellipsoid (km)
    #[arg(long, default_value_t = R_E_KM)]
    radius_km: f64,

    /// Eccentricity of the ellipsoid
    #[arg(long, default_value_t = E_E)]
    eccentricity: f64,
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            log::warn!("Invalid arguments: {}", e.kind());
            println!("{}", USAGE);
            return Ok(ExitCode::FAILURE);
        }
    };

    let ellipsoid = Ellipsoid::new(cli.radius_km, cli.eccentricity)
        .context("Invalid ellipsoid parameters")?;

    if let Some(path) = &cli.batch {
        run_batch(&ellipsoid, path)?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some((direction, origin)) = split_components(&cli.components) else {
        log::warn!("Expected 6 components, got {}", cli.components.len());
        println!("{}", USAGE);
        return Ok(ExitCode::FAILURE);
    };
    log::info!(
        "Intersecting direction {} origin {} with {:?}",
        direction,
        origin,
        ellipsoid
    );

    let result = ellipsoid.intersect_integer(direction, origin);
    if cli.json {
        let failed = result.is_err();
        println!("{}", serde_json::to_string(&Outcome::from(result))?);
        return Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS });
    }

    print!("{}", output::format_plain(result?.as_ref()));
    Ok(ExitCode::SUCCESS)
}

/// Split `[d_x, d_y, d_z, c_x, c_y, c_z]` into direction and origin; any other count is a usage error.
fn split_components(components: &[i64]) -> Option<(IntVector3, IntVector3)> {
    let [dx, dy, dz, cx, cy, cz] = <[i64; 6]>::try_from(components).ok()?;
    Some((IntVector3::new(dx, dy, dz), IntVector3::new(cx, cy, cz)))
}

fn run_batch(ellipsoid: &Ellipsoid, path: &Path) -> Result<()> {
    let json = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read queries from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    let queries: Vec<RayQuery> =
        serde_json::from_str(&json).context("Batch input must be a JSON array of queries")?;
    log::info!("Loaded {} queries", queries.len());

    let outcomes = solve_batch(ellipsoid, &queries);
    println!("{}", serde_json::to_string_pretty(&outcomes)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_split_six_components() {
        let (direction, origin) = split_components(&[0, 0, -1, 0, 0, 10000]).unwrap();
        assert_eq!(direction, IntVector3::new(0, 0, -1));
        assert_eq!(origin, IntVector3::new(0, 0, 10000));
    }

    #[test]
    fn test_split_wrong_count() {
        assert!(split_components(&[1, 2, 3, 4, 5]).is_none());
        assert!(split_components(&[1, 2, 3, 4, 5, 6, 7]).is_none());
        assert!(split_components(&[]).is_none());
    }

    #[test]
    fn test_negative_components_parse() {
        let cli = Cli::try_parse_from(["prog", "-1", "0", "0", "200", "-5", "0"]).unwrap();
        assert_eq!(cli.components, vec![-1, 0, 0, 200, -5, 0]);
        assert_eq!(cli.radius_km, R_E_KM);
        assert_eq!(cli.eccentricity, E_E);
    }

    #[test]
    fn test_non_integer_component_rejected() {
        assert!(Cli::try_parse_from(["prog", "1", "0", "0", "x", "0", "0"]).is_err());
        assert!(Cli::try_parse_from(["prog", "1.5", "0", "0", "0", "0", "0"]).is_err());
    }

    #[test]
    fn test_batch_conflicts_with_components() {
        assert!(Cli::try_parse_from(["prog", "--batch", "q.json", "1", "0", "0", "0", "0", "0"]).is_err());
        assert!(Cli::try_parse_from(["prog", "--batch", "q.json"]).is_ok());
    }
}
