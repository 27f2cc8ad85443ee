use crate::ModdocError;
use crate::ModdocResult;
use crate::Module;
use crate::Settings;

use super::Printer;
use super::nothing_shown;
use super::project;
use super::trim_newline;

/// Fully structured YAML dump of the projected module.
pub struct Yaml;

impl Printer for Yaml {
	fn print(&self, module: &Module, settings: &Settings) -> ModdocResult<String> {
		if nothing_shown(settings) {
			return Ok(String::new());
		}

		let projection = project(module, settings)?;
		let out = serde_yaml_ng::to_string(&projection).map_err(|e| {
			ModdocError::Encoding {
				format: "yaml".to_string(),
				reason: e.to_string(),
			}
		})?;

		Ok(trim_newline(out))
	}
}
