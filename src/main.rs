use bst_bench::config::BenchConfig;
use bst_bench::scenario;
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simple_logger::SimpleLogger;

fn main() -> bst_bench::Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let config = BenchConfig::default();
    let mut rng = StdRng::from_entropy();
    scenario::run_suite(&config, &mut rng)?;

    Ok(())
}
