use lot_sizing::cli::{Args, Command, USAGE};
use lot_sizing::config::PlannerConfig;
use lot_sizing::io::reporting;
use lot_sizing::model::LotSizingInstance;
use lot_sizing::planning;
use lot_sizing::strategy::{FixedPeriodPolicy, LotForLotPolicy, LotSizingPolicy};
use lot_sizing::{logging, LotSizingResult};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};

fn main() -> ExitCode {
    logging::init();

    let args = match Args::parse_from(std::env::args()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match args.command {
        Command::Help => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Command::Version => {
            println!("lot-sizing {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Command::Plan {
            config_path,
            output_path,
            print_table,
        } => match run(config_path, output_path, print_table) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!(error = %e, "planning failed");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(
    config_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    print_table: bool,
) -> LotSizingResult<()> {
    // 1. SETUP CONFIGURATION
    let mut config = match &config_path {
        Some(path) => PlannerConfig::from_json_file(path)?,
        None => PlannerConfig::default(),
    };
    if output_path.is_some() {
        config.output_path = output_path;
    }
    config.print_table &= print_table;

    // 2. LOAD DEMAND AND COSTS
    let demand = config.demand.load()?;
    let (setup_cost, holding_cost) = config.costs.resolve()?;
    info!(periods = demand.len(), setup_cost, holding_cost, "planning inputs ready");
    let instance = LotSizingInstance::new(demand, setup_cost, holding_cost)?;

    // 3. SOLVE
    let solution = planning::solve_with(&instance, &config.build_options())?;

    // 4. REPORT
    if config.print_table {
        println!("{}", reporting::render_cost_table(&solution));
    }
    println!("Production Schedule:");
    print!("{}", reporting::render_schedule(&solution.schedule));
    println!("Total cost: {:.2}", solution.total_cost);

    // 5. COMPARE AGAINST SIMPLE RULES
    let baselines: Vec<Box<dyn LotSizingPolicy>> = vec![
        Box::new(LotForLotPolicy::new()),
        Box::new(FixedPeriodPolicy::new(2)?),
        Box::new(FixedPeriodPolicy::new(3)?),
    ];
    println!("\n=== Cost Comparison ===");
    for policy in &baselines {
        let schedule = policy.plan(&instance)?;
        match planning::schedule_cost(&instance, &schedule) {
            Ok(cost) => println!("{}: {:.2}", policy.name(), cost),
            Err(e) => warn!(policy = policy.name(), error = %e, "baseline not priced"),
        }
    }

    // 6. EXPORT RESULTS
    if let Some(path) = &config.output_path {
        reporting::write_schedule_csv(path, &solution.schedule)?;
        println!("Schedule written to {}", path.display());
    }

    Ok(())
}
