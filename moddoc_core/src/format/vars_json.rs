use crate::ModdocError;
use crate::ModdocResult;
use crate::Module;
use crate::Settings;

use super::Printer;
use super::trim_newline;

/// Structured variable-file variant: a JSON object of input name to default
/// value, `null` for required inputs. Keys serialize name-sorted.
pub struct VarsJson;

impl Printer for VarsJson {
	fn print(&self, module: &Module, settings: &Settings) -> ModdocResult<String> {
		if !settings.show_inputs {
			return Ok(String::new());
		}

		let mut values = serde_json::Map::new();
		for input in &module.inputs {
			values.insert(
				input.name.clone(),
				input.default.clone().unwrap_or(serde_json::Value::Null),
			);
		}

		let out = serde_json::to_string_pretty(&serde_json::Value::Object(values)).map_err(|e| {
			ModdocError::Encoding {
				format: "vars json".to_string(),
				reason: e.to_string(),
			}
		})?;

		Ok(trim_newline(out))
	}
}
