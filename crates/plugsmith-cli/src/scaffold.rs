//! The scaffold command: wires parsed arguments to the core service.

use std::path::PathBuf;

use tracing::{debug, info};

use plugsmith_core::application::ScaffoldService;
use plugsmith_core::domain::{ComponentSelection, PluginName};
use plugsmith_adapters::LocalFilesystem;

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::error::CliResult;
use crate::output::{ConsoleReporter, OutputManager};

/// Run a scaffold from parsed CLI arguments.
///
/// Returns the path of the created plugin directory.
pub fn execute(cli: &Cli, config: &AppConfig, output: &OutputManager) -> CliResult<PathBuf> {
    let name = PluginName::parse(&cli.name).map_err(plugsmith_core::error::ScaffoldError::from)?;

    // Flag beats config; config beats "everything".
    let selection = match cli.components.as_deref().or(config.defaults.components.as_deref()) {
        Some(list) => ComponentSelection::parse(list),
        None => ComponentSelection::all(),
    };

    // Resolve the destination without requiring it to exist yet.
    let destination = std::path::absolute(&cli.path)?;
    debug!(destination = %destination.display(), "resolved destination");

    let _ = output.header(&format!("Scaffolding plugin: {name}"));
    let _ = output.print(&format!("Location: {}", destination.display()));
    let _ = output.print(&format!("Components: {}", selection.summary()));
    let _ = output.print("");

    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(ConsoleReporter::new(output.clone())),
    );
    let plugin_dir = service.scaffold(&name, &destination, &selection)?;

    info!(plugin = %name, dir = %plugin_dir.display(), "scaffold complete");

    let _ = output.print("");
    let _ = output.success(&format!(
        "Plugin '{name}' scaffolded at {}",
        plugin_dir.display()
    ));
    let _ = output.print("");
    let _ = output.print("Next steps:");
    let _ = output.print(&format!(
        "1. Review the generated plugin.json manifest in {}/.claude-plugin/",
        plugin_dir.display()
    ));
    let _ = output.print("2. Implement components - replace TODO items in generated files");
    let _ = output.print("   See references/component-patterns.md for format specs and examples");
    let _ = output.print("3. For skills, invoke /skill-creator for the full skill methodology");
    let _ = output.print("4. Delete any example files not needed for your plugin");
    let _ = output.print(&format!(
        "5. Test locally: claude --plugin-dir {}",
        plugin_dir.display()
    ));
    let _ = output.print("6. Debug loading: claude --debug");

    Ok(plugin_dir)
}
