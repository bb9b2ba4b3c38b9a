//! Handler for the view point search.

use tracing::debug;

use super::command::Cli;
use super::output;
use super::validate::InputValidator;
use crate::adapter::outbound::mesh_json::JsonMeshSource;
use crate::application::ViewPointService;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Validate the arguments, run the search and print the results.
///
/// # Errors
///
/// Returns an error if the arguments are invalid, the mesh cannot be
/// loaded, or the results cannot be rendered.
pub fn execute(cli: &Cli, config: &Config) -> Result<()> {
    let parameter = InputValidator::new().validate(&cli.mesh_file, &cli.number_of_view_points)?;
    let format = cli.format.unwrap_or(config.output.format);
    debug!(
        path = %parameter.file_path.display(),
        limit = parameter.number_of_view_points,
        ?format,
        "validated input"
    );

    let service = ViewPointService::new(JsonMeshSource::new(&parameter.file_path));
    let report = service.find(parameter.number_of_view_points)?;

    output::view_points(&report, format)
}
