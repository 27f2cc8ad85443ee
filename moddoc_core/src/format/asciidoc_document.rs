use crate::ModdocResult;
use crate::Module;
use crate::Settings;
use crate::sections::Asciidoc;
use crate::sections::DocumentSections;

use super::Printer;

/// AsciiDoc with a heading and definition blocks per visible section.
pub struct AsciidocDocument;

impl Printer for AsciidocDocument {
	fn print(&self, module: &Module, settings: &Settings) -> ModdocResult<String> {
		DocumentSections::new(Asciidoc).render(module, settings)
	}
}
