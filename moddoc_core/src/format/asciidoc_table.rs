use crate::ModdocResult;
use crate::Module;
use crate::Settings;
use crate::sections::Asciidoc;
use crate::sections::TableSections;

use super::Printer;

/// AsciiDoc with one table per visible section.
pub struct AsciidocTable;

impl Printer for AsciidocTable {
	fn print(&self, module: &Module, settings: &Settings) -> ModdocResult<String> {
		TableSections::new(Asciidoc).render(module, settings)
	}
}
