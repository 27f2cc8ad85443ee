use crate::ModdocResult;
use crate::Module;
use crate::Settings;
use crate::sections::Markdown;
use crate::sections::TableSections;

use super::Printer;

/// Markdown with one table per visible section.
pub struct MarkdownTable;

impl Printer for MarkdownTable {
	fn print(&self, module: &Module, settings: &Settings) -> ModdocResult<String> {
		TableSections::new(Markdown).render(module, settings)
	}
}
