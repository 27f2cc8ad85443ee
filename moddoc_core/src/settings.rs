use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

/// Smallest heading-depth offset accepted by the human-read backends.
pub const MIN_INDENT_LEVEL: usize = 1;
/// Largest heading-depth offset accepted by the human-read backends.
pub const MAX_INDENT_LEVEL: usize = 5;
/// Heading-depth offset used when none is configured.
pub const DEFAULT_INDENT_LEVEL: usize = 2;

/// Immutable per-render view policy.
///
/// A `Settings` value is constructed through [`SettingsBuilder`], which runs
/// the normalization pass (indent clamping, deprecated-flag merge) exactly
/// once. After `build()` the value is treated as read-only for the duration
/// of a render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
	pub show_header: bool,
	pub show_inputs: bool,
	pub show_outputs: bool,
	pub show_providers: bool,
	pub show_requirements: bool,
	pub show_resources: bool,
	/// Add a required/optional indicator column to inputs.
	pub show_required: bool,
	pub sort_by_name: bool,
	/// Partition required entries first. Only meaningful combined with
	/// `sort_by_name`; ignored otherwise.
	pub sort_by_required: bool,
	pub sort_by_type: bool,
	/// Heading-depth offset for the human-read backends, always within
	/// `MIN_INDENT_LEVEL..=MAX_INDENT_LEVEL` after construction.
	pub indent_level: usize,
	/// Escape characters reserved by the target syntax. Disabling this
	/// reproduces raw text byte-for-byte.
	pub escape_characters: bool,
	/// Add a resolved-value column/field to outputs.
	pub output_values: bool,
	/// When false, sensitive output values render as
	/// [`MASKED_VALUE`](crate::MASKED_VALUE).
	pub show_sensitivity: bool,
	/// Optional external header file. `None` (or an empty path) means the
	/// header text is taken from the module itself.
	pub header_from_file: Option<PathBuf>,
}

impl Default for Settings {
	fn default() -> Self {
		Settings::builder().build()
	}
}

impl Settings {
	pub fn builder() -> SettingsBuilder {
		SettingsBuilder::default()
	}
}

/// Builder for [`Settings`].
///
/// ```
/// use moddoc_core::Settings;
///
/// let settings = Settings::builder()
/// 	.sort_by_name(true)
/// 	.indent_level(9)
/// 	.build();
/// assert_eq!(settings.indent_level, 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
	show_header: Option<bool>,
	show_inputs: Option<bool>,
	show_outputs: Option<bool>,
	show_providers: Option<bool>,
	show_requirements: Option<bool>,
	show_resources: Option<bool>,
	show_required: bool,
	sort_by_name: bool,
	sort_by_required: bool,
	sort_by_type: bool,
	indent_level: Option<usize>,
	escape_characters: Option<bool>,
	output_values: bool,
	show_sensitivity: Option<bool>,
	header_from_file: Option<PathBuf>,
	no_escape: Option<bool>,
}

impl SettingsBuilder {
	pub fn show_header(mut self, value: bool) -> Self {
		self.show_header = Some(value);
		self
	}

	pub fn show_inputs(mut self, value: bool) -> Self {
		self.show_inputs = Some(value);
		self
	}

	pub fn show_outputs(mut self, value: bool) -> Self {
		self.show_outputs = Some(value);
		self
	}

	pub fn show_providers(mut self, value: bool) -> Self {
		self.show_providers = Some(value);
		self
	}

	pub fn show_requirements(mut self, value: bool) -> Self {
		self.show_requirements = Some(value);
		self
	}

	pub fn show_resources(mut self, value: bool) -> Self {
		self.show_resources = Some(value);
		self
	}

	/// Toggle every section at once.
	pub fn show_all(mut self, value: bool) -> Self {
		self.show_header = Some(value);
		self.show_inputs = Some(value);
		self.show_outputs = Some(value);
		self.show_providers = Some(value);
		self.show_requirements = Some(value);
		self.show_resources = Some(value);
		self
	}

	pub fn show_required(mut self, value: bool) -> Self {
		self.show_required = value;
		self
	}

	pub fn sort_by_name(mut self, value: bool) -> Self {
		self.sort_by_name = value;
		self
	}

	pub fn sort_by_required(mut self, value: bool) -> Self {
		self.sort_by_required = value;
		self
	}

	pub fn sort_by_type(mut self, value: bool) -> Self {
		self.sort_by_type = value;
		self
	}

	pub fn indent_level(mut self, value: usize) -> Self {
		self.indent_level = Some(value);
		self
	}

	pub fn escape_characters(mut self, value: bool) -> Self {
		self.escape_characters = Some(value);
		self
	}

	/// Deprecated inverse of [`escape_characters`](Self::escape_characters),
	/// kept for configurations written against older releases. Merged into
	/// the current flag during `build()`; when both are set explicitly the
	/// current flag wins.
	pub fn no_escape(mut self, value: bool) -> Self {
		self.no_escape = Some(value);
		self
	}

	pub fn output_values(mut self, value: bool) -> Self {
		self.output_values = value;
		self
	}

	pub fn show_sensitivity(mut self, value: bool) -> Self {
		self.show_sensitivity = Some(value);
		self
	}

	pub fn header_from_file(mut self, path: impl Into<PathBuf>) -> Self {
		self.header_from_file = Some(path.into());
		self
	}

	/// Normalize into a valid [`Settings`]. Never fails: out-of-range
	/// indents clamp to the nearest bound and the deprecated escape flag
	/// collapses into `escape_characters` before any renderer sees it.
	pub fn build(self) -> Settings {
		let indent_level = self
			.indent_level
			.unwrap_or(DEFAULT_INDENT_LEVEL)
			.clamp(MIN_INDENT_LEVEL, MAX_INDENT_LEVEL);

		let escape_characters = match (self.escape_characters, self.no_escape) {
			(Some(escape), Some(_)) => {
				tracing::warn!(
					"both `escape_characters` and deprecated `no_escape` are set; \
					 `escape_characters` takes precedence"
				);
				escape
			}
			(Some(escape), None) => escape,
			(None, Some(no_escape)) => {
				tracing::warn!("`no_escape` is deprecated, use `escape_characters` instead");
				!no_escape
			}
			(None, None) => true,
		};

		Settings {
			show_header: self.show_header.unwrap_or(true),
			show_inputs: self.show_inputs.unwrap_or(true),
			show_outputs: self.show_outputs.unwrap_or(true),
			show_providers: self.show_providers.unwrap_or(true),
			show_requirements: self.show_requirements.unwrap_or(true),
			show_resources: self.show_resources.unwrap_or(true),
			show_required: self.show_required,
			sort_by_name: self.sort_by_name,
			sort_by_required: self.sort_by_required,
			sort_by_type: self.sort_by_type,
			indent_level,
			escape_characters,
			output_values: self.output_values,
			show_sensitivity: self.show_sensitivity.unwrap_or(true),
			header_from_file: self.header_from_file,
		}
	}
}
