// modpush: Nested Repository Commit Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> resolve root --> Config --> Logging --> sweep | list
//! ```

use std::path::Path;
use std::process::ExitCode;

use modpush::cli::{self, Cli};
use modpush::cmd::list::run_list_command;
use modpush::cmd::sweep::run_sweep_command;
use modpush::config::loader::ConfigLoader;
use modpush::config::{CONFIG_FILE_NAME, Config, ENV_PREFIX};
use modpush::error::Result;
use modpush::git::discovery::resolve_root;
use modpush::logging::{LogConfig, init_logging};
use tracing::debug;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let root = resolve_root(cli.dir.as_deref())?;
    let loader = build_config_loader(cli, &root)?;
    let loaded = loader.format_loaded_files();
    let config = loader.build()?;

    let _log_guard = init_logging(&build_log_config(&config))?;
    log_startup(&root, &config, &loaded);

    if cli.list {
        run_list_command(&root, &config)
    } else {
        run_sweep_command(&root, &config)
    }
}

fn build_config_loader(cli: &Cli, root: &Path) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional(root.join(CONFIG_FILE_NAME));
    if let Some(ref path) = cli.global.config {
        loader = loader.add_toml_file(path);
    }
    loader
        .with_env_prefix(ENV_PREFIX)
        .set_all(cli.global.to_config_overrides())
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .build()
}

fn log_startup(root: &Path, config: &Config, loaded: &[String]) {
    debug!(root = %root.display(), version = env!("CARGO_PKG_VERSION"), "starting");
    for line in loaded {
        debug!("config file: {line}");
    }
    for line in config.format_options() {
        debug!("option: {line}");
    }
}
