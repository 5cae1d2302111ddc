use clap::Parser;
use transitnet::app::TransitNetApp;

fn main() {
    env_logger::init();
    let args = TransitNetApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("transitnet failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
