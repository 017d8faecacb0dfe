//! `slipway doctor` command

use anyhow::Result;

use crate::cli::DoctorArgs;
use slipway::ops::{doctor, format_report, DoctorOptions, Tools};
use slipway::util::config::{load_config, Config};
use slipway::util::GlobalContext;

pub fn execute(args: DoctorArgs, verbose: bool) -> Result<()> {
    // Doctor works outside a checkout too; project config applies when found
    let ctx = GlobalContext::new()?;
    let config = match ctx.find_project() {
        Ok(project) => load_config(&ctx.config_path(), &ctx.project_config_path(&project)),
        Err(_) => Config::load_or_default(&ctx.config_path()),
    };
    let tools = Tools::from_config(&config);

    let options = DoctorOptions {
        verbose: args.verbose || verbose,
    };

    let report = doctor(&tools, options)?;

    // Print the formatted report
    let output = format_report(&report, args.verbose || verbose);
    print!("{}", output);

    // Exit with error code if required checks failed
    if !report.all_required_passed() {
        std::process::exit(1);
    }

    Ok(())
}
