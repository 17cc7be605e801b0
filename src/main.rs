use anyhow::Result;
use clap::CommandFactory;

use cookbook_bump::cli::{self, Args};
use cookbook_bump::git::SystemGit;
use cookbook_bump::{logging, ui};

fn main() -> Result<()> {
    let args = Args::parse_normalized();
    logging::init_logging();

    let config = args.into_config();
    if let Err(e) = config.validate() {
        ui::display_error(&e.to_string());
        eprintln!("{}", Args::command().render_help());
        std::process::exit(1);
    }

    let git = SystemGit::new();
    let result = match cli::run_bump_workflow(&config, &git) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_summary(&result.version, &result.remotes);
    Ok(())
}
