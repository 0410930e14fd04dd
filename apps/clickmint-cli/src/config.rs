use std::path::Path;

use clickmint_ledger::Catalog;

use crate::error::CliResult;

/// Resolve the catalog: a YAML file when one is given, the builtin
/// catalog otherwise.
pub fn load_catalog(path: Option<&Path>) -> CliResult<Catalog> {
    match path {
        Some(path) => Ok(Catalog::from_yaml_file(path)?),
        None => Ok(Catalog::builtin()),
    }
}
