use owo_colors::OwoColorize;

use crate::MASKED_VALUE;
use crate::ModdocResult;
use crate::Module;
use crate::Settings;
use crate::header::module_header;
use crate::sections::visible;
use crate::sort::SortPolicy;
use crate::sort::order;

use super::Printer;

/// Human-oriented console variant: one colored dotted address per entity,
/// grouped by section. Ignores indentation and escaping.
pub struct Pretty;

impl Printer for Pretty {
	fn print(&self, module: &Module, settings: &Settings) -> ModdocResult<String> {
		let policy = SortPolicy::from_settings(settings);
		let header = if settings.show_header {
			module_header(module, settings)?
		} else {
			String::new()
		};

		if !visible(module, settings, &header) {
			return Ok(String::new());
		}

		let mut blocks = Vec::new();
		if settings.show_header && !header.is_empty() {
			blocks.push(header.trim_end().to_string());
		}
		if settings.show_requirements && module.has_requirements() {
			let lines: Vec<String> = order(&module.requirements, &policy)
				.into_iter()
				.map(|requirement| {
					entry(
						&format!("requirement.{}", requirement.name),
						requirement.version.as_deref(),
					)
				})
				.collect();
			blocks.push(lines.join("\n"));
		}
		if settings.show_providers && module.has_providers() {
			let lines: Vec<String> = order(&module.providers, &policy)
				.into_iter()
				.map(|provider| {
					entry(
						&format!("provider.{}", provider.full_name()),
						provider.version.as_deref(),
					)
				})
				.collect();
			blocks.push(lines.join("\n"));
		}
		if settings.show_resources && module.has_resources() {
			let lines: Vec<String> = order(&module.resources, &policy)
				.into_iter()
				.map(|resource| entry(&resource.address(), None))
				.collect();
			blocks.push(lines.join("\n"));
		}
		if settings.show_inputs && module.has_inputs() {
			let lines: Vec<String> = order(&module.inputs, &policy)
				.into_iter()
				.map(|input| {
					let detail = match &input.default {
						Some(value) => value.to_string(),
						None => "required".to_string(),
					};
					entry(&format!("input.{}", input.name), Some(&detail))
				})
				.collect();
			blocks.push(lines.join("\n"));
		}
		if settings.show_outputs && module.has_outputs() {
			let lines: Vec<String> = order(&module.outputs, &policy)
				.into_iter()
				.map(|output| {
					let name = format!("output.{}", output.name);
					if !settings.output_values {
						return entry(&name, None);
					}
					let value = if output.sensitive && !settings.show_sensitivity {
						MASKED_VALUE.to_string()
					} else {
						output
							.value
							.as_ref()
							.map_or_else(|| "n/a".to_string(), ToString::to_string)
					};
					entry(&name, Some(&value))
				})
				.collect();
			blocks.push(lines.join("\n"));
		}

		Ok(blocks.join("\n\n"))
	}
}

fn entry(name: &str, detail: Option<&str>) -> String {
	match detail {
		Some(detail) => format!("{} ({detail})", name.cyan()),
		None => format!("{}", name.cyan()),
	}
}
