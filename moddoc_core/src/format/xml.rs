use serde::Serialize;

use crate::ModdocError;
use crate::ModdocResult;
use crate::Module;
use crate::Settings;

use super::Printer;
use super::nothing_shown;
use super::project;
use super::trim_newline;

/// Fully structured XML dump of the projected module, rooted at `<module>`.
pub struct Xml;

impl Printer for Xml {
	fn print(&self, module: &Module, settings: &Settings) -> ModdocResult<String> {
		if nothing_shown(settings) {
			return Ok(String::new());
		}

		let projection = project(module, settings)?;
		let mut out = String::new();
		let mut serializer = quick_xml::se::Serializer::with_root(&mut out, Some("module"))
			.map_err(|e| encoding_error(e.to_string()))?;
		serializer.indent(' ', 2);
		projection
			.serialize(serializer)
			.map_err(|e| encoding_error(e.to_string()))?;

		Ok(trim_newline(out))
	}
}

fn encoding_error(reason: String) -> ModdocError {
	ModdocError::Encoding {
		format: "xml".to_string(),
		reason,
	}
}
