use crate::ModdocResult;
use crate::Module;
use crate::Settings;
use crate::sections::DocumentSections;
use crate::sections::Markdown;

use super::Printer;

/// Markdown with a heading and definition blocks per visible section.
pub struct MarkdownDocument;

impl Printer for MarkdownDocument {
	fn print(&self, module: &Module, settings: &Settings) -> ModdocResult<String> {
		DocumentSections::new(Markdown).render(module, settings)
	}
}
