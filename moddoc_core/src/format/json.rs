use crate::ModdocError;
use crate::ModdocResult;
use crate::Module;
use crate::Settings;

use super::Printer;
use super::nothing_shown;
use super::project;
use super::trim_newline;

/// Fully structured JSON dump of the projected module.
pub struct Json;

impl Printer for Json {
	fn print(&self, module: &Module, settings: &Settings) -> ModdocResult<String> {
		if nothing_shown(settings) {
			return Ok(String::new());
		}

		let projection = project(module, settings)?;
		let out = serde_json::to_string_pretty(&projection).map_err(|e| {
			ModdocError::Encoding {
				format: "json".to_string(),
				reason: e.to_string(),
			}
		})?;

		Ok(trim_newline(out))
	}
}
