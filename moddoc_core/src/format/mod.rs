//! Format backends and the registry that selects them.
//!
//! Every backend implements [`Printer`]; [`lookup`] maps a case-insensitive
//! format identifier (with aliases and a `table`/`document` sub-selector for
//! the markup families) to a boxed backend. The structured backends share
//! the [`Projection`] built here instead of composing section renderers.

use serde::Deserialize;
use serde::Serialize;

use crate::ModdocError;
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

mod asciidoc_document;
mod asciidoc_table;
mod json;
mod markdown_document;
mod markdown_table;
mod pretty;
mod toml;
mod vars_hcl;
mod vars_json;
mod xml;
mod yaml;

pub use asciidoc_document::AsciidocDocument;
pub use asciidoc_table::AsciidocTable;
pub use json::Json;
pub use markdown_document::MarkdownDocument;
pub use markdown_table::MarkdownTable;
pub use pretty::Pretty;
pub use self::toml::Toml;
pub use vars_hcl::VarsHcl;
pub use vars_json::VarsJson;
pub use xml::Xml;
pub use yaml::Yaml;

/// A format backend: one target syntax, one implementation.
pub trait Printer {
	fn print(&self, module: &Module, settings: &Settings) -> ModdocResult<String>;
}

/// Resolve a format identifier to its backend.
///
/// Identifiers are case-insensitive and whitespace-tolerant between the
/// family name and the `table`/`document` sub-selector. Unknown identifiers
/// are rejected; no fallback format is assumed.
pub fn lookup(format: &str) -> ModdocResult<Box<dyn Printer>> {
	let lowered = format.to_lowercase();
	let id = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
	tracing::debug!(format = %id, "resolving format backend");

	let printer: Box<dyn Printer> = match id.as_str() {
		"markdown" | "md" | "markdown table" | "markdown tbl" | "md table" | "md tbl" => {
			Box::new(MarkdownTable)
		}
		"markdown document" | "markdown doc" | "md document" | "md doc" => {
			Box::new(MarkdownDocument)
		}
		"asciidoc" | "adoc" | "asciidoc table" | "asciidoc tbl" | "adoc table" | "adoc tbl" => {
			Box::new(AsciidocTable)
		}
		"asciidoc document" | "asciidoc doc" | "adoc document" | "adoc doc" => {
			Box::new(AsciidocDocument)
		}
		"json" => Box::new(Json),
		"yaml" | "yml" => Box::new(Yaml),
		"toml" => Box::new(Toml),
		"xml" => Box::new(Xml),
		"pretty" => Box::new(Pretty),
		"vars" | "vars hcl" => Box::new(VarsHcl),
		"vars json" => Box::new(VarsJson),
		_ => return Err(ModdocError::UnknownFormat(format.to_string())),
	};

	Ok(printer)
}

/// Render `module` with the backend named by `format`.
pub fn render(format: &str, module: &Module, settings: &Settings) -> ModdocResult<String> {
	lookup(format)?.print(module, settings)
}

/// The filtered view serialized by the structured backends.
///
/// Sections excluded by settings become empty collections rather than
/// omitted keys, and a hidden header becomes the empty string, so decoders
/// always see the full shape. Field order is fixed by declaration.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct Projection {
	#[serde(default)]
	pub header: String,
	#[serde(default)]
	pub inputs: Vec<Input>,
	#[serde(default)]
	pub outputs: Vec<Output>,
	#[serde(default)]
	pub providers: Vec<Provider>,
	#[serde(default)]
	pub requirements: Vec<Requirement>,
	#[serde(default)]
	pub resources: Vec<Resource>,
}

/// Build the structured projection: shown sections are cloned in render
/// order, hidden sections stay empty. The header file is only resolved when
/// the header is shown.
pub(crate) fn project(module: &Module, settings: &Settings) -> ModdocResult<Projection> {
	let policy = SortPolicy::from_settings(settings);
	let mut projection = Projection::default();

	if settings.show_header {
		projection.header = module_header(module, settings)?;
	}
	if settings.show_inputs {
		projection.inputs = order(&module.inputs, &policy).into_iter().cloned().collect();
	}
	if settings.show_outputs {
		projection.outputs = order(&module.outputs, &policy).into_iter().cloned().collect();
	}
	if settings.show_providers {
		projection.providers = order(&module.providers, &policy).into_iter().cloned().collect();
	}
	if settings.show_requirements {
		projection.requirements = order(&module.requirements, &policy)
			.into_iter()
			.cloned()
			.collect();
	}
	if settings.show_resources {
		projection.resources = order(&module.resources, &policy).into_iter().cloned().collect();
	}

	Ok(projection)
}

/// True when no section is shown at all; every backend short-circuits to
/// the empty string in that case.
pub(crate) fn nothing_shown(settings: &Settings) -> bool {
	!settings.show_header
		&& !settings.show_inputs
		&& !settings.show_outputs
		&& !settings.show_providers
		&& !settings.show_requirements
		&& !settings.show_resources
}

/// Trim the single trailing line terminator most encoders append, for
/// consistency across backends.
pub(crate) fn trim_newline(mut text: String) -> String {
	if text.ends_with('\n') {
		text.pop();
		if text.ends_with('\r') {
			text.pop();
		}
	}
	text
}
