//! Command execution handlers
//!
//! Each handler loads the graph store from the configured definition file,
//! runs the requested operation, and prints the payload. Resolution goes
//! through the wire pipeline so its status classification (client error vs
//! storage error) matches the service semantics.

use crate::application::cli::{CliConfig, Commands};
use crate::application::config::AppConfig;
use crate::primitives::ModuleRef;
use crate::store::{MemoryStore, Store, loader};
use crate::wire::{self, Encoding, Status};
use anyhow::{Context, Result, bail};
use std::io::Read;
use std::path::Path;

/// Execute the selected CLI command.
pub fn execute_command(config: CliConfig) -> Result<()> {
    let command = match config.command {
        Some(cmd) => cmd,
        None => {
            println!("confgraph - configuration dependency graph management");
            println!("Run 'confgraph --help' for usage information");
            return Ok(());
        }
    };

    match command {
        Commands::Resolve {
            modules,
            request,
            with_modules,
            format,
        } => handle_resolve(
            &config.app_config,
            &modules,
            request.as_deref(),
            with_modules,
            format,
        ),
        Commands::Items => handle_items(&open_store(&config.app_config)?),
        Commands::Modules => handle_modules(&open_store(&config.app_config)?),
        Commands::Associations => handle_associations(&open_store(&config.app_config)?),
        Commands::Dependencies => handle_dependencies(&open_store(&config.app_config)?),
    }
}

fn open_store(config: &AppConfig) -> Result<MemoryStore> {
    let path = config.graph_path()?;
    loader::load_store(path)
        .with_context(|| format!("could not load graph definition {}", path.display()))
}

fn read_request(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut body = Vec::new();
        std::io::stdin()
            .read_to_end(&mut body)
            .context("could not read request from stdin")?;
        return Ok(body);
    }
    std::fs::read(path).with_context(|| format!("could not read request file {}", path.display()))
}

fn print_payload(format: Encoding, payload: &str) {
    match format {
        Encoding::Json => println!("{payload}"),
        Encoding::Text => print!("{payload}"),
    }
}

fn handle_resolve(
    config: &AppConfig,
    modules: &[i64],
    request: Option<&Path>,
    with_modules: bool,
    format: Encoding,
) -> Result<()> {
    // Bare ids take the same validation path as a submitted request body.
    let body = match request {
        Some(path) => read_request(path)?,
        None => {
            let refs: Vec<ModuleRef> = modules.iter().copied().map(ModuleRef::new).collect();
            serde_json::to_vec(&refs).context("could not encode module references")?
        }
    };

    // Client-input errors surface before the graph definition is read.
    if let Err(err) = wire::parse_module_refs(&body) {
        print_payload(format, &wire::encode_failure(&err.to_string(), format));
        bail!("invalid resolution request");
    }

    let store = open_store(config)?;
    let (status, payload) = wire::respond(&store, &body, with_modules, format);
    print_payload(format, &payload);

    match status {
        Status::Ok => Ok(()),
        Status::ClientError => bail!("invalid resolution request"),
        Status::ServerError => bail!("resolution failed"),
    }
}

fn handle_items(store: &MemoryStore) -> Result<()> {
    for item in store.items().context("could not list items")? {
        println!("{item}");
    }
    Ok(())
}

fn handle_modules(store: &MemoryStore) -> Result<()> {
    for module in store.modules().context("could not list modules")? {
        println!("{module}");
    }
    Ok(())
}

fn handle_associations(store: &MemoryStore) -> Result<()> {
    for association in store.item_modules().context("could not list associations")? {
        println!("{association}");
    }
    Ok(())
}

fn handle_dependencies(store: &MemoryStore) -> Result<()> {
    for dependency in store
        .module_dependencies()
        .context("could not list dependencies")?
    {
        println!("{dependency}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
