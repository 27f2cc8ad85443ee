use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

/// Placeholder rendered in place of a sensitive output value when
/// sensitivity display is disabled.
pub const MASKED_VALUE: &str = "<sensitive>";

/// The canonical in-memory description of a documented module.
///
/// A `Module` is produced once per invocation by the metadata extractor and
/// is read-only to the engine: visibility filtering happens at render time
/// through an explicit projection, never by mutating these fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Module {
	/// Free-text header, possibly empty.
	#[serde(default)]
	pub header: String,
	/// Declared input variables, in declaration order.
	#[serde(default)]
	pub inputs: Vec<Input>,
	/// Declared outputs, in declaration order.
	#[serde(default)]
	pub outputs: Vec<Output>,
	/// Providers referenced by the module.
	#[serde(default)]
	pub providers: Vec<Provider>,
	/// Core and provider version requirements.
	#[serde(default)]
	pub requirements: Vec<Requirement>,
	/// Managed resources and data sources.
	#[serde(default)]
	pub resources: Vec<Resource>,
}

impl Module {
	pub fn has_header(&self) -> bool {
		!self.header.is_empty()
	}

	pub fn has_inputs(&self) -> bool {
		!self.inputs.is_empty()
	}

	pub fn has_outputs(&self) -> bool {
		!self.outputs.is_empty()
	}

	pub fn has_providers(&self) -> bool {
		!self.providers.is_empty()
	}

	pub fn has_requirements(&self) -> bool {
		!self.requirements.is_empty()
	}

	pub fn has_resources(&self) -> bool {
		!self.resources.is_empty()
	}
}

/// A declared input variable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Input {
	pub name: String,
	/// Free-form type expression, e.g. `string` or `list(map(string))`.
	#[serde(rename = "type")]
	pub type_of: String,
	#[serde(default)]
	pub description: String,
	/// Declared default. Absence means the input is required.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub default: Option<serde_json::Value>,
	#[serde(skip)]
	pub position: Position,
}

impl Input {
	/// An input without a declared default must be supplied by the caller.
	pub fn is_required(&self) -> bool {
		self.default.is_none()
	}
}

/// A declared output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Output {
	pub name: String,
	#[serde(default)]
	pub description: String,
	/// The output's value expression as written in the module source.
	#[serde(rename = "expression", default)]
	pub value_expr: String,
	#[serde(default)]
	pub sensitive: bool,
	/// Resolved runtime value, populated only when value resolution is
	/// enabled upstream. Type-tagged through [`serde_json::Value`].
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub value: Option<serde_json::Value>,
}

/// A provider referenced by the module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Provider {
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub alias: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub version: Option<String>,
}

impl Provider {
	/// The display name, `name` or `name.alias` for aliased providers.
	pub fn full_name(&self) -> String {
		match &self.alias {
			Some(alias) => format!("{}.{alias}", self.name),
			None => self.name.clone(),
		}
	}
}

/// A core or provider version requirement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub version: Option<String>,
}

/// Whether a resource is managed by the module or only read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceMode {
	#[default]
	Managed,
	Data,
}

impl ResourceMode {
	/// The address prefix used for display and type grouping.
	pub fn prefix(self) -> &'static str {
		match self {
			ResourceMode::Managed => "resource",
			ResourceMode::Data => "data",
		}
	}
}

/// A managed resource or data source declared by the module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
	#[serde(rename = "type")]
	pub type_of: String,
	pub name: String,
	#[serde(default)]
	pub provider: String,
	#[serde(default)]
	pub mode: ResourceMode,
	#[serde(skip)]
	pub position: Position,
}

impl Resource {
	/// Dotted address used for display, e.g. `data.aws_ami.base`.
	pub fn address(&self) -> String {
		format!("{}.{}.{}", self.mode.prefix(), self.type_of, self.name)
	}

	/// Grouping key for type-sorted orderings: data sources before managed
	/// resources, then by type string.
	pub fn group_key(&self) -> String {
		format!("{}.{}", self.mode.prefix(), self.type_of)
	}
}

/// Source location of a declaration, for traceability only. Not rendered by
/// any backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Position {
	pub file: PathBuf,
	pub line: usize,
}
