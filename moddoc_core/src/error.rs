use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum ModdocError {
	#[error(transparent)]
	#[diagnostic(code(moddoc::io_error))]
	Io(#[from] std::io::Error),

	#[error("unknown format: `{0}`")]
	#[diagnostic(
		code(moddoc::unknown_format),
		help(
			"known formats: markdown, markdown document, asciidoc, asciidoc document, json, \
			 yaml, toml, xml, pretty, vars hcl, vars json"
		)
	)]
	UnknownFormat(String),

	#[error("failed to read header file `{path}`: {reason}")]
	#[diagnostic(
		code(moddoc::header_file),
		help("check that the path exists and is readable, or unset `header_from_file`")
	)]
	HeaderFile { path: String, reason: String },

	#[error("failed to encode module as {format}: {reason}")]
	#[diagnostic(code(moddoc::encoding))]
	Encoding { format: String, reason: String },
}

pub type ModdocResult<T> = Result<T, ModdocError>;
