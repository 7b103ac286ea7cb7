use bambam_gtfs_synth::app::SynthApp;
use clap::Parser;

fn main() {
    env_logger::init();
    let args = SynthApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("bambam-gtfs-synth failed: {e}");
        panic!("{e}")
    }
}
