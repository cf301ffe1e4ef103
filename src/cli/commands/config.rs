use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, init } = cmd {
        if *init {
            cfg.save()?;
            println!("Configuration written to {}", Config::config_file().display());
        }
        if *print_config {
            print!("{}", cfg.to_yaml()?);
        }
        if !*init && !*print_config {
            println!("Nothing to do. Try --print or --init.");
        }
    }
    Ok(())
}
