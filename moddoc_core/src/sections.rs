use crate::MASKED_VALUE;
use crate::ModdocResult;
use crate::Module;
use crate::Settings;
use crate::header::module_header;
use crate::module::Input;
use crate::module::Output;
use crate::module::Provider;
use crate::module::Requirement;
use crate::module::Resource;
use crate::sort::SortPolicy;
use crate::sort::order;

/// Target-syntax grammar for the human-read backends.
///
/// Markdown and AsciiDoc share every rendering decision except the literal
/// syntax; this trait is that seam. Reserved-character sets differ between
/// prose and table cells, so escaping is split accordingly and each markup
/// enumerates its own sets.
pub(crate) trait Markup {
	fn heading(&self, level: usize, text: &str) -> String;
	/// Escape characters reserved in prose blocks.
	fn escape(&self, text: &str) -> String;
	/// Escape characters reserved inside table cells.
	fn escape_cell(&self, text: &str) -> String;
	fn code(&self, text: &str) -> String;
	fn table_header(&self, columns: &[&str]) -> String;
	fn table_row(&self, cells: &[String]) -> String;
	fn table_close(&self) -> Option<&'static str>;
	fn bullet(&self, text: &str) -> String;
}

/// Markdown grammar. Escaped set: `|`, `_`, `*`; newlines inside table
/// cells collapse to spaces so a multi-line description cannot break a row.
pub(crate) struct Markdown;

impl Markup for Markdown {
	fn heading(&self, level: usize, text: &str) -> String {
		format!("{} {text}", "#".repeat(level.min(6)))
	}

	fn escape(&self, text: &str) -> String {
		text.replace('_', "\\_").replace('*', "\\*")
	}

	fn escape_cell(&self, text: &str) -> String {
		self.escape(text)
			.replace('|', "\\|")
			.replace('\n', " ")
			.replace('\r', "")
	}

	fn code(&self, text: &str) -> String {
		format!("`{text}`")
	}

	fn table_header(&self, columns: &[&str]) -> String {
		let names = columns.join(" | ");
		let rule: Vec<String> = columns
			.iter()
			.map(|column| "-".repeat(column.len() + 2))
			.collect();
		format!("| {names} |\n|{}|", rule.join("|"))
	}

	fn table_row(&self, cells: &[String]) -> String {
		format!("| {} |", cells.join(" | "))
	}

	fn table_close(&self) -> Option<&'static str> {
		None
	}

	fn bullet(&self, text: &str) -> String {
		format!("- {text}")
	}
}

/// AsciiDoc grammar. Prose needs no escaping; `|` is reserved inside table
/// cells.
pub(crate) struct Asciidoc;

impl Markup for Asciidoc {
	fn heading(&self, level: usize, text: &str) -> String {
		format!("{} {text}", "=".repeat(level.min(6)))
	}

	fn escape(&self, text: &str) -> String {
		text.to_string()
	}

	fn escape_cell(&self, text: &str) -> String {
		text.replace('|', "\\|")
	}

	fn code(&self, text: &str) -> String {
		format!("`{text}`")
	}

	fn table_header(&self, columns: &[&str]) -> String {
		let cols = vec!["a"; columns.len()].join(",");
		let names: Vec<String> = columns.iter().map(|column| format!("|{column}")).collect();
		format!("[cols=\"{cols}\",options=\"header\"]\n|===\n{}", names.join(" "))
	}

	fn table_row(&self, cells: &[String]) -> String {
		let lines: Vec<String> = cells.iter().map(|cell| format!("|{cell}")).collect();
		lines.join("\n")
	}

	fn table_close(&self) -> Option<&'static str> {
		Some("|===")
	}

	fn bullet(&self, text: &str) -> String {
		format!("* {text}")
	}
}

/// Render the resolved value of an output, masking sensitive values unless
/// sensitivity display is enabled.
fn output_value_text(output: &Output, settings: &Settings) -> String {
	if output.sensitive && !settings.show_sensitivity {
		return MASKED_VALUE.to_string();
	}
	match &output.value {
		Some(value) => value.to_string(),
		None => "n/a".to_string(),
	}
}

fn version_text(version: Option<&str>) -> String {
	version.unwrap_or("n/a").to_string()
}

/// Table-style composition: one table per visible section.
pub(crate) struct TableSections<M: Markup> {
	markup: M,
}

impl<M: Markup> TableSections<M> {
	pub fn new(markup: M) -> Self {
		Self { markup }
	}

	pub fn render(&self, module: &Module, settings: &Settings) -> ModdocResult<String> {
		let policy = SortPolicy::from_settings(settings);
		let header = if settings.show_header {
			module_header(module, settings)?
		} else {
			String::new()
		};

		if !visible(module, settings, &header) {
			return Ok(String::new());
		}

		let mut fragments = Vec::new();
		if settings.show_header && !header.is_empty() {
			fragments.push(header.trim_end().to_string());
		}
		if settings.show_requirements {
			fragments.push(self.requirements(&module.requirements, settings, &policy));
		}
		if settings.show_providers {
			fragments.push(self.providers(&module.providers, settings, &policy));
		}
		if settings.show_resources {
			fragments.push(self.resources(&module.resources, settings, &policy));
		}
		if settings.show_inputs {
			fragments.push(self.inputs(&module.inputs, settings, &policy));
		}
		if settings.show_outputs {
			fragments.push(self.outputs(&module.outputs, settings, &policy));
		}

		Ok(fragments.join("\n\n"))
	}

	fn cell(&self, raw: &str, settings: &Settings) -> String {
		if settings.escape_characters {
			self.markup.escape_cell(raw)
		} else {
			raw.to_string()
		}
	}

	fn description_cell(&self, raw: &str, settings: &Settings) -> String {
		if raw.is_empty() {
			"n/a".to_string()
		} else {
			self.cell(raw, settings)
		}
	}

	/// Assemble one section: heading, then the table when the section has
	/// entries. A shown-but-empty section keeps its heading.
	fn section(&self, title: &str, settings: &Settings, columns: &[&str], rows: Vec<Vec<String>>) -> String {
		let mut out = self.markup.heading(settings.indent_level, title);
		if rows.is_empty() {
			return out;
		}

		out.push_str("\n\n");
		out.push_str(&self.markup.table_header(columns));
		for row in rows {
			out.push('\n');
			if self.markup.table_close().is_some() {
				// Block-grammar tables separate rows with a blank line.
				out.push('\n');
			}
			out.push_str(&self.markup.table_row(&row));
		}
		if let Some(close) = self.markup.table_close() {
			out.push_str("\n\n");
			out.push_str(close);
		}

		out
	}

	fn requirements(&self, items: &[Requirement], settings: &Settings, policy: &SortPolicy) -> String {
		let rows = order(items, policy)
			.into_iter()
			.map(|requirement| {
				vec![
					self.cell(&requirement.name, settings),
					version_text(requirement.version.as_deref()),
				]
			})
			.collect();
		self.section("Requirements", settings, &["Name", "Version"], rows)
	}

	fn providers(&self, items: &[Provider], settings: &Settings, policy: &SortPolicy) -> String {
		let rows = order(items, policy)
			.into_iter()
			.map(|provider| {
				vec![
					self.cell(&provider.full_name(), settings),
					version_text(provider.version.as_deref()),
				]
			})
			.collect();
		self.section("Providers", settings, &["Name", "Version"], rows)
	}

	fn resources(&self, items: &[Resource], settings: &Settings, policy: &SortPolicy) -> String {
		let rows = order(items, policy)
			.into_iter()
			.map(|resource| {
				vec![
					self.cell(&resource.name, settings),
					self.markup.code(&resource.type_of),
					resource.mode.prefix().to_string(),
				]
			})
			.collect();
		self.section("Resources", settings, &["Name", "Type", "Mode"], rows)
	}

	fn inputs(&self, items: &[Input], settings: &Settings, policy: &SortPolicy) -> String {
		let mut columns = vec!["Name", "Description", "Type", "Default"];
		if settings.show_required {
			columns.push("Required");
		}

		let rows = order(items, policy)
			.into_iter()
			.map(|input| {
				let default = match &input.default {
					Some(value) => self.markup.code(&value.to_string()),
					None => "n/a".to_string(),
				};
				let mut row = vec![
					self.cell(&input.name, settings),
					self.description_cell(&input.description, settings),
					self.markup.code(&input.type_of),
					default,
				];
				if settings.show_required {
					row.push(if input.is_required() { "yes" } else { "no" }.to_string());
				}
				row
			})
			.collect();
		self.section("Inputs", settings, &columns, rows)
	}

	fn outputs(&self, items: &[Output], settings: &Settings, policy: &SortPolicy) -> String {
		let mut columns = vec!["Name", "Description"];
		if settings.output_values {
			columns.push("Value");
		}

		let rows = order(items, policy)
			.into_iter()
			.map(|output| {
				let mut row = vec![
					self.cell(&output.name, settings),
					self.description_cell(&output.description, settings),
				];
				if settings.output_values {
					let value = output_value_text(output, settings);
					if value == MASKED_VALUE || value == "n/a" {
						row.push(self.cell(&value, settings));
					} else {
						row.push(self.markup.code(&value));
					}
				}
				row
			})
			.collect();
		self.section("Outputs", settings, &columns, rows)
	}
}

/// Document-style composition: heading plus definition blocks per visible
/// section, honoring `indent_level` as the heading-depth offset.
pub(crate) struct DocumentSections<M: Markup> {
	markup: M,
}

impl<M: Markup> DocumentSections<M> {
	pub fn new(markup: M) -> Self {
		Self { markup }
	}

	pub fn render(&self, module: &Module, settings: &Settings) -> ModdocResult<String> {
		let policy = SortPolicy::from_settings(settings);
		let header = if settings.show_header {
			module_header(module, settings)?
		} else {
			String::new()
		};

		if !visible(module, settings, &header) {
			return Ok(String::new());
		}

		let mut fragments = Vec::new();
		if settings.show_header && !header.is_empty() {
			fragments.push(header.trim_end().to_string());
		}
		if settings.show_requirements {
			fragments.push(self.listing(
				"Requirements",
				settings,
				order(&module.requirements, &policy)
					.into_iter()
					.map(|requirement| named_version(&requirement.name, requirement.version.as_deref()))
					.collect(),
			));
		}
		if settings.show_providers {
			fragments.push(self.listing(
				"Providers",
				settings,
				order(&module.providers, &policy)
					.into_iter()
					.map(|provider| named_version(&provider.full_name(), provider.version.as_deref()))
					.collect(),
			));
		}
		if settings.show_resources {
			fragments.push(self.listing(
				"Resources",
				settings,
				order(&module.resources, &policy)
					.into_iter()
					.map(|resource| resource.address())
					.collect(),
			));
		}
		if settings.show_inputs {
			fragments.push(self.inputs(&module.inputs, settings, &policy));
		}
		if settings.show_outputs {
			fragments.push(self.outputs(&module.outputs, settings, &policy));
		}

		Ok(fragments.join("\n\n"))
	}

	fn text(&self, raw: &str, settings: &Settings) -> String {
		if settings.escape_characters {
			self.markup.escape(raw)
		} else {
			raw.to_string()
		}
	}

	fn description_line(&self, raw: &str, settings: &Settings) -> String {
		if raw.is_empty() {
			"Description: n/a".to_string()
		} else {
			format!("Description: {}", self.text(raw, settings))
		}
	}

	/// Flat sections (requirements, providers, resources) render as a
	/// bullet list under the section heading.
	fn listing(&self, title: &str, settings: &Settings, entries: Vec<String>) -> String {
		let mut out = self.markup.heading(settings.indent_level, title);
		if entries.is_empty() {
			return out;
		}

		out.push_str("\n\n");
		let bullets: Vec<String> = entries
			.iter()
			.map(|entry| self.markup.bullet(&self.text(entry, settings)))
			.collect();
		out.push_str(&bullets.join("\n"));
		out
	}

	fn inputs(&self, items: &[Input], settings: &Settings, policy: &SortPolicy) -> String {
		let mut out = self.markup.heading(settings.indent_level, "Inputs");

		for input in order(items, policy) {
			let mut block = vec![
				self.markup
					.heading(settings.indent_level + 1, &self.text(&input.name, settings)),
				self.description_line(&input.description, settings),
				format!("Type: {}", self.markup.code(&input.type_of)),
			];
			match &input.default {
				Some(value) => block.push(format!("Default: {}", self.markup.code(&value.to_string()))),
				None => block.push("Default: n/a".to_string()),
			}
			if settings.show_required {
				block.push(format!(
					"Required: {}",
					if input.is_required() { "yes" } else { "no" }
				));
			}

			out.push_str("\n\n");
			out.push_str(&block.join("\n\n"));
		}

		out
	}

	fn outputs(&self, items: &[Output], settings: &Settings, policy: &SortPolicy) -> String {
		let mut out = self.markup.heading(settings.indent_level, "Outputs");

		for output in order(items, policy) {
			let mut block = vec![
				self.markup
					.heading(settings.indent_level + 1, &self.text(&output.name, settings)),
				self.description_line(&output.description, settings),
			];
			if settings.output_values {
				let value = output_value_text(output, settings);
				if value == MASKED_VALUE || value == "n/a" {
					block.push(format!("Value: {value}"));
				} else {
					block.push(format!("Value: {}", self.markup.code(&value)));
				}
			}

			out.push_str("\n\n");
			out.push_str(&block.join("\n\n"));
		}

		out
	}
}

fn named_version(name: &str, version: Option<&str>) -> String {
	match version {
		Some(version) => format!("{name} ({version})"),
		None => name.to_string(),
	}
}

/// Total-emptiness short-circuit: a render produces output only when the
/// resolved header or at least one shown section has content.
pub(crate) fn visible(module: &Module, settings: &Settings, header: &str) -> bool {
	(settings.show_header && !header.is_empty())
		|| (settings.show_inputs && module.has_inputs())
		|| (settings.show_outputs && module.has_outputs())
		|| (settings.show_providers && module.has_providers())
		|| (settings.show_requirements && module.has_requirements())
		|| (settings.show_resources && module.has_resources())
}
