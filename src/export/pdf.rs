use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use log::debug;
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};

use crate::document::Document;
use crate::errors::ExportError;
use crate::export::layout::{self, TextStyle};
use crate::export::{PdfEngine, PdfOptions};

/// PDF engine backed by the printpdf crate.
///
/// Uses the built-in Helvetica family, so no font files need to ship with
/// the binary. Rendering is CPU-bound and synchronous; callers on a runtime
/// wrap it in a blocking task.
#[derive(Debug, Default)]
pub struct PrintPdfEngine;

impl PrintPdfEngine {
    pub fn new() -> Self {
        Self
    }
}

fn style_font<'a>(
    style: TextStyle,
    regular: &'a IndirectFontRef,
    bold: &'a IndirectFontRef,
    oblique: &'a IndirectFontRef,
) -> &'a IndirectFontRef {
    match style {
        TextStyle::Title | TextStyle::Heading => bold,
        TextStyle::Meta | TextStyle::Footer => oblique,
        TextStyle::Body => regular,
    }
}

impl PdfEngine for PrintPdfEngine {
    fn render(
        &self,
        document: &Document,
        options: &PdfOptions,
        target: &Path,
    ) -> Result<(), ExportError> {
        let pages = layout::paginate(document, options);
        let width = options.page.width_mm();
        let height = options.page.height_mm();

        let (doc, first_page, first_layer) =
            PdfDocument::new(document.title.as_str(), Mm(width), Mm(height), "Layer 1");

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExportError::Render(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ExportError::Render(e.to_string()))?;
        let oblique = doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .map_err(|e| ExportError::Render(e.to_string()))?;

        for (index, page) in pages.iter().enumerate() {
            let layer = if index == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page_index, layer_index) = doc.add_page(Mm(width), Mm(height), "Layer 1");
                doc.get_page(page_index).get_layer(layer_index)
            };

            for line in &page.lines {
                let font = style_font(line.style, &regular, &bold, &oblique);
                // Layout measures from the top edge, printpdf from the bottom.
                layer.use_text(
                    line.text.as_str(),
                    line.size,
                    Mm(line.x),
                    Mm(height - line.y),
                    font,
                );
            }
        }

        debug!("Rendering {} page(s) to {:?}", pages.len(), target);

        let file = File::create(target).map_err(|e| ExportError::Output(e.to_string()))?;
        doc.save(&mut BufWriter::new(file))
            .map_err(|e| ExportError::Render(e.to_string()))?;

        Ok(())
    }
}
