use ipv4_subnet_engine::build_report;
use ipv4_subnet_engine::config::{Config, OutputFormat};
use ipv4_subnet_engine::output::{context_block, context_json, print_report};
use std::error::Error;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    log4rs::init_file(&config.log_config, Default::default())
        .map_err(|e| format!("Error initializing log4rs from {}: {e}", config.log_config))?;
    log::info!("#Start main() {}/{} parent={:?}", config.address, config.cidr, config.parent_cidr);

    let report = build_report(&config.address, config.cidr, config.parent_cidr, config.limit);

    match config.output {
        OutputFormat::Table => print_report(
            &report.details,
            &report.category,
            &report.issues,
            &report.subnets,
        ),
        OutputFormat::Json => println!("{}", context_json(&report.details, Some(&report.subnets))?),
        OutputFormat::Context => print!("{}", context_block(&report.details)),
    }

    Ok(())
}
