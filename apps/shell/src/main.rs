use anyhow::Context;
use clap::Parser;
use mshop::domain::config::{LogConfig, ShellConfig};
use mshop::kernel::config::load_config;
use mshop_logger::{Logger, parse_level};
use mshop_shell::{Cli, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg: ShellConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;

    let _log = init_logger(&cfg.log)?;

    run(&cli, &cfg, &mut std::io::stdout().lock())
}

fn init_logger(cfg: &LogConfig) -> anyhow::Result<Logger> {
    let mut builder = Logger::builder()
        .name(env!("CARGO_BIN_NAME"))
        .level(parse_level(&cfg.level)?)
        .console(cfg.console)
        .json(cfg.json)
        .max_files(cfg.max_files);

    if let Some(filter) = &cfg.filter {
        builder = builder.env_filter(filter);
    }
    if let Some(path) = &cfg.path {
        builder = builder.path(path);
    }

    Ok(builder.init()?)
}
