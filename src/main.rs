use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use physim::cli::Args;
use physim::config::SimulationConfig;
use physim::control::comparator::EpsilonComparator;
use physim::control::controller::Controller;
use physim::factories::{standard_body_factory, standard_force_law_factory};
use physim::physics::simulator::PhysicsSimulator;
use std::fs::File;
use std::io::{self, BufWriter, Write};

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .init();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::load_or_default(path),
        None => SimulationConfig::default(),
    };
    args.apply_to(&mut config);

    let body_factory = standard_body_factory();
    let force_law_factory = standard_force_law_factory();

    if args.list_force_laws {
        println!("{}", serde_json::to_string_pretty(&force_law_factory.schema())?);
        return Ok(());
    }
    if args.list_body_types {
        println!("{}", serde_json::to_string_pretty(&body_factory.schema())?);
        return Ok(());
    }

    let input = args
        .input
        .as_deref()
        .context("an input file is required (see --help)")?;

    let law_record = config.force_law.to_record()?;
    let force_law = force_law_factory
        .create(&law_record)
        .context("invalid force law configuration")?;
    info!("using force law: {}", force_law.name());

    let simulator = PhysicsSimulator::new(force_law, config.run.dt)?;
    let mut controller = Controller::new(simulator, body_factory);

    let bodies: serde_json::Value = serde_json::from_reader(
        File::open(input).with_context(|| format!("cannot open input file {input}"))?,
    )
    .with_context(|| format!("cannot parse input file {input}"))?;
    controller.load_bodies(&bodies)?;

    let expected: Option<serde_json::Value> = match &args.expected {
        Some(path) => Some(
            serde_json::from_reader(
                File::open(path).with_context(|| format!("cannot open expected trace {path}"))?,
            )
            .with_context(|| format!("cannot parse expected trace {path}"))?,
        ),
        None => None,
    };

    let comparator = if config.comparison.relative {
        EpsilonComparator::relative(config.comparison.epsilon)
    } else {
        EpsilonComparator::absolute(config.comparison.epsilon)
    };

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create output file {path}"))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    controller.run(
        config.run.steps,
        &mut out,
        expected.as_ref(),
        Some(&comparator),
    )?;
    out.flush()?;

    info!("run complete after {} steps", config.run.steps);
    Ok(())
}
