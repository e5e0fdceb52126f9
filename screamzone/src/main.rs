use clap::Parser;
use screamzone::app::ScreamZoneCliArguments;

fn main() {
    env_logger::init();
    let args = ScreamZoneCliArguments::parse();
    match args.op.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("screamzone failed: {e}");
            std::process::exit(1);
        }
    }
}
