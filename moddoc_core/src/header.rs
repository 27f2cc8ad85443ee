use std::path::Path;

use crate::ModdocError;
use crate::ModdocResult;
use crate::Module;
use crate::Settings;

/// Resolve the header text for a render.
///
/// Callers must only invoke this when `settings.show_header` is true: the
/// loader is the engine's single point of file I/O, and keeping it lazy
/// means a missing header file is never surfaced for a render that would
/// not show the header anyway.
///
/// With no `header_from_file` (or an empty path) the module's own header is
/// used as-is. Otherwise the file is read and its content is interpreted by
/// extension: markup and plain-text files (`adoc`, `md`, `markdown`, `txt`)
/// are taken verbatim, while module source files (`hcl`, `tf`) have a
/// single leading comment block stripped first.
pub fn module_header(module: &Module, settings: &Settings) -> ModdocResult<String> {
	let Some(path) = settings.header_from_file.as_deref() else {
		return Ok(module.header.clone());
	};
	if path.as_os_str().is_empty() {
		return Ok(module.header.clone());
	}

	let content = std::fs::read_to_string(path).map_err(|e| {
		ModdocError::HeaderFile {
			path: path.display().to_string(),
			reason: e.to_string(),
		}
	})?;

	let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
	match ext {
		"hcl" | "tf" => Ok(strip_leading_comment(&content)),
		_ => Ok(content),
	}
}

/// Strip a single leading comment block from module source content.
///
/// Handles one `/* ... */` block or one run of consecutive `#`/`//` line
/// comments at the top of the file, plus the blank lines separating it from
/// the rest. Content without a leading comment is returned unchanged.
fn strip_leading_comment(content: &str) -> String {
	let trimmed = content.trim_start_matches(['\n', '\r']);

	if let Some(rest) = trimmed.strip_prefix("/*") {
		return match rest.split_once("*/") {
			Some((_, tail)) => tail.trim_start_matches(['\n', '\r']).to_string(),
			// Unterminated block comment: nothing usable follows.
			None => String::new(),
		};
	}

	if is_line_comment(trimmed.lines().next().unwrap_or("")) {
		let tail: Vec<&str> = trimmed
			.lines()
			.skip_while(|line| is_line_comment(line))
			.skip_while(|line| line.trim().is_empty())
			.collect();
		return tail.join("\n");
	}

	content.to_string()
}

fn is_line_comment(line: &str) -> bool {
	let line = line.trim_start();
	line.starts_with('#') || line.starts_with("//")
}

/// Check whether a header path uses an extension the loader strips comments
/// from. Exposed for callers that want to pre-validate configuration.
pub fn is_source_header(path: &Path) -> bool {
	matches!(
		path.extension().and_then(|e| e.to_str()),
		Some("hcl" | "tf")
	)
}
