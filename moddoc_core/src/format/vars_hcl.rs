use crate::ModdocResult;
use crate::Module;
use crate::Settings;
use crate::sort::SortPolicy;
use crate::sort::order;

use super::Printer;

/// Serialized variable-file variant: one aligned HCL assignment per input.
/// Required inputs render an empty string so the file stays syntactically
/// valid while flagging the value as caller-supplied.
pub struct VarsHcl;

impl Printer for VarsHcl {
	fn print(&self, module: &Module, settings: &Settings) -> ModdocResult<String> {
		if !settings.show_inputs {
			return Ok(String::new());
		}

		let policy = SortPolicy::from_settings(settings);
		let inputs = order(&module.inputs, &policy);
		let width = inputs.iter().map(|input| input.name.len()).max().unwrap_or(0);

		let lines: Vec<String> = inputs
			.into_iter()
			.map(|input| {
				let value = match &input.default {
					Some(value) => hcl_value(value),
					None => "\"\"".to_string(),
				};
				format!("{:<width$} = {value}", input.name)
			})
			.collect();

		Ok(lines.join("\n"))
	}
}

/// Single-line HCL rendering of a resolved value. Scalars follow JSON
/// lexics; collections use HCL's bracket/brace grammar with `=` bindings.
fn hcl_value(value: &serde_json::Value) -> String {
	match value {
		serde_json::Value::Array(items) => {
			let rendered: Vec<String> = items.iter().map(hcl_value).collect();
			format!("[{}]", rendered.join(", "))
		}
		serde_json::Value::Object(entries) => {
			let rendered: Vec<String> = entries
				.iter()
				.map(|(key, value)| format!("{key} = {}", hcl_value(value)))
				.collect();
			format!("{{ {} }}", rendered.join(", "))
		}
		scalar => scalar.to_string(),
	}
}
