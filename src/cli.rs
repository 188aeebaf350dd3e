//! Command line interface for physim

use crate::config::SimulationConfig;
use crate::math::Scalar;
use clap::Parser;

/// Physim - point-mass simulator with pluggable force laws
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Bodies input file (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<String>,

    /// Output file for per-step state records (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Expected trace file to verify the run against (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub expected: Option<String>,

    /// Number of integration steps (overrides config file)
    #[arg(short, long, value_name = "COUNT")]
    pub steps: Option<usize>,

    /// Per-step duration (overrides config file)
    #[arg(short = 't', long, value_name = "VALUE")]
    pub delta_time: Option<Scalar>,

    /// Force law type tag (e.g., nlug, mtfp, ng)
    #[arg(short, long, value_name = "TAG")]
    pub force_law: Option<String>,

    /// Verification tolerance (overrides config file)
    #[arg(long, value_name = "VALUE")]
    pub epsilon: Option<Scalar>,

    /// Treat the verification tolerance as relative instead of absolute
    #[arg(long)]
    pub relative: bool,

    /// List available force laws with their schemas and exit
    #[arg(long)]
    pub list_force_laws: bool,

    /// List available body types with their schemas and exit
    #[arg(long)]
    pub list_body_types: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Merge command line overrides into a loaded configuration
    pub fn apply_to(&self, config: &mut SimulationConfig) {
        if let Some(steps) = self.steps {
            config.run.steps = steps;
        }
        if let Some(dt) = self.delta_time {
            config.run.dt = dt;
        }
        if let Some(tag) = &self.force_law {
            // Config-file parameters belong to the law configured there
            if *tag != config.force_law.tag {
                config.force_law.data = None;
            }
            config.force_law.tag = tag.clone();
        }
        if let Some(epsilon) = self.epsilon {
            config.comparison.epsilon = epsilon;
        }
        if self.relative {
            config.comparison.relative = true;
        }
    }
}
