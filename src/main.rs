//=========================================================================
// Aetheric Platformer: Binary Entry Point
//
// Initializes logging (RUST_LOG, default `info`) and runs the engine with
// default settings. A platform failure is logged and exits with status 1.
//
//=========================================================================

use aetheric_platformer::EngineBuilder;
use log::error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = EngineBuilder::new().build().run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
