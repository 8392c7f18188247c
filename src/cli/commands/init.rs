use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (left alone when it already exists)
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rTimetracker…");

    let path = Config::init_all(cli.api_url.clone())?;
    let cfg = Config::load_unchecked()?;

    println!("📄 Config file : {}", path.display());
    println!("🌐 API         : {}", cfg.api_base_url);
    println!("🔑 Storage     : {}", cfg.storage_file);

    success("rTimetracker initialization completed!");
    Ok(())
}
