use crate::ModdocError;
use crate::ModdocResult;
use crate::Module;
use crate::Settings;

use super::Printer;
use super::nothing_shown;
use super::project;
use super::trim_newline;

/// Fully structured TOML dump of the projected module.
///
/// TOML cannot represent `null`, so a module carrying an explicit `null`
/// default surfaces as an encoding error instead of silently dropping data.
pub struct Toml;

impl Printer for Toml {
	fn print(&self, module: &Module, settings: &Settings) -> ModdocResult<String> {
		if nothing_shown(settings) {
			return Ok(String::new());
		}

		let projection = project(module, settings)?;
		let out = ::toml::to_string(&projection).map_err(|e| {
			ModdocError::Encoding {
				format: "toml".to_string(),
				reason: e.to_string(),
			}
		})?;

		Ok(trim_newline(out))
	}
}
