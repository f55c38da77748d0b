use anyhow::Result;
use pagehist::{app, cli};

fn main() -> Result<()> {
    env_logger::init();

    let args = cli::parse_args();

    match app::handle_command(args.command) {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
