//! Renders a [`SalesReportDocument`] into PDF bytes and hands the result
//! to the browser.
//!
//! Pages are A4 landscape set in the built-in Helvetica fonts, so the
//! renderer ships no font assets. The title and the column header repeat
//! on every page; rows flow across pages at a fixed pitch.

use contracts::projections::p900_sales_report::document::{
    SalesReportDocument, BODY_FONT_SIZE, PAGE_MARGINS, REPORT_COLUMNS, REPORT_HEADER,
    TITLE_FONT_SIZE,
};
use gloo_timers::future::TimeoutFuture;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Blob, BlobPropertyBag, Url};

/// A4 landscape, in points.
const PAGE_WIDTH_PT: f32 = 841.89;
const PAGE_HEIGHT_PT: f32 = 595.28;

/// Vertical distance between consecutive table rows, in points.
const ROW_PITCH_PT: f32 = 18.0;

/// Title baseline, measured from the top edge, in points.
const TITLE_BASELINE_PT: f32 = 45.0;

/// Footer baseline, measured from the bottom edge, in points.
const FOOTER_BASELINE_PT: f32 = 21.0;

/// Horizontal padding inside each table cell, in points.
const CELL_PADDING_PT: f32 = 4.0;

/// Gap between a row baseline and the rule drawn under it, in points.
const RULE_DROP_PT: f32 = 5.0;

/// Approximate average glyph width of Helvetica as a fraction of the
/// font size. Good enough for right-aligning the footer and deciding
/// where to cut overlong cells.
const AVG_GLYPH_WIDTH: f32 = 0.5;

/// How long the object URL for an opened report stays valid. Revoking
/// right after `window.open` races the new tab's load of the blob.
const OBJECT_URL_TTL_MS: u32 = 60_000;

const PT_TO_MM: f32 = 0.352_778;

fn pt_to_mm(pt: f32) -> f32 {
    pt * PT_TO_MM
}

fn column_width() -> f32 {
    (PAGE_WIDTH_PT - PAGE_MARGINS[0] - PAGE_MARGINS[2]) / REPORT_COLUMNS as f32
}

fn header_baseline() -> f32 {
    PAGE_HEIGHT_PT - PAGE_MARGINS[1] - BODY_FONT_SIZE
}

/// Data rows that fit on one page below the repeated column header.
pub fn rows_per_page() -> usize {
    let content_top = PAGE_MARGINS[1] + ROW_PITCH_PT;
    let usable = PAGE_HEIGHT_PT - content_top - PAGE_MARGINS[3];
    (usable / ROW_PITCH_PT) as usize
}

/// Pages needed for `row_count` data rows. An empty document still
/// produces one page carrying the title and the column header.
pub fn page_count(row_count: usize) -> usize {
    if row_count == 0 {
        1
    } else {
        row_count.div_ceil(rows_per_page())
    }
}

/// Estimated rendered width of `text`, in points.
fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * AVG_GLYPH_WIDTH
}

/// Cut `text` so it fits within `max_width` points, appending an
/// ellipsis when anything was removed.
fn fit_cell(text: &str, max_width: f32, font_size: f32) -> String {
    if text_width(text, font_size) <= max_width {
        return text.to_string();
    }
    let budget = (max_width / (font_size * AVG_GLYPH_WIDTH)) as usize;
    let cut: String = text.chars().take(budget.saturating_sub(1)).collect();
    format!("{}…", cut)
}

/// Render the report into finished PDF bytes.
pub fn render(document: &SalesReportDocument) -> Result<Vec<u8>, String> {
    let page_width = Mm(pt_to_mm(PAGE_WIDTH_PT));
    let page_height = Mm(pt_to_mm(PAGE_HEIGHT_PT));

    let (doc, first_page, first_layer) =
        PdfDocument::new(document.title.clone(), page_width, page_height, "Page 1");

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| format!("Failed to load font: {}", e))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| format!("Failed to load font: {}", e))?;

    let capacity = rows_per_page();
    let total_pages = page_count(document.rows.len());

    for page_index in 0..total_pages {
        let layer = if page_index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) =
                doc.add_page(page_width, page_height, format!("Page {}", page_index + 1));
            doc.get_page(page).get_layer(layer)
        };

        draw_page_frame(&layer, document, &bold, page_index, total_pages);

        let start = page_index * capacity;
        let end = usize::min(start + capacity, document.rows.len());
        for (slot, row) in document.rows[start..end].iter().enumerate() {
            draw_row(&layer, row, &regular, slot);
        }
    }

    doc.save_to_bytes()
        .map_err(|e| format!("Failed to serialize PDF: {}", e))
}

/// Title, column header and footer, drawn on every page.
fn draw_page_frame(
    layer: &PdfLayerReference,
    document: &SalesReportDocument,
    bold: &IndirectFontRef,
    page_index: usize,
    total_pages: usize,
) {
    layer.use_text(
        document.title.clone(),
        TITLE_FONT_SIZE,
        Mm(pt_to_mm(PAGE_MARGINS[0])),
        Mm(pt_to_mm(PAGE_HEIGHT_PT - TITLE_BASELINE_PT)),
        bold,
    );

    let header_y = header_baseline();
    let width = column_width();
    for (index, caption) in REPORT_HEADER.iter().enumerate() {
        let x = PAGE_MARGINS[0] + index as f32 * width + CELL_PADDING_PT;
        layer.use_text(
            *caption,
            BODY_FONT_SIZE,
            Mm(pt_to_mm(x)),
            Mm(pt_to_mm(header_y)),
            bold,
        );
    }
    draw_rule(layer, header_y - RULE_DROP_PT);

    let footer = format!(
        "{}     -     Página {} de {}",
        document.footer_note,
        page_index + 1,
        total_pages
    );
    let footer_x =
        PAGE_WIDTH_PT - PAGE_MARGINS[2] - CELL_PADDING_PT - text_width(&footer, BODY_FONT_SIZE);
    layer.use_text(
        footer,
        BODY_FONT_SIZE,
        Mm(pt_to_mm(footer_x)),
        Mm(pt_to_mm(FOOTER_BASELINE_PT)),
        bold,
    );
}

fn draw_row(
    layer: &PdfLayerReference,
    row: &[String; REPORT_COLUMNS],
    font: &IndirectFontRef,
    slot: usize,
) {
    let y = header_baseline() - (slot as f32 + 1.0) * ROW_PITCH_PT;
    let width = column_width();
    let max_text_width = width - 2.0 * CELL_PADDING_PT;

    for (index, cell) in row.iter().enumerate() {
        let x = PAGE_MARGINS[0] + index as f32 * width + CELL_PADDING_PT;
        layer.use_text(
            fit_cell(cell, max_text_width, BODY_FONT_SIZE),
            BODY_FONT_SIZE,
            Mm(pt_to_mm(x)),
            Mm(pt_to_mm(y)),
            font,
        );
    }
    draw_rule(layer, y - RULE_DROP_PT);
}

/// Light horizontal rule across the table width.
fn draw_rule(layer: &PdfLayerReference, y: f32) {
    layer.set_outline_color(Color::Rgb(Rgb::new(0.8, 0.8, 0.8, None)));
    layer.set_outline_thickness(0.5);
    layer.add_line(Line {
        points: vec![
            (
                Point::new(Mm(pt_to_mm(PAGE_MARGINS[0])), Mm(pt_to_mm(y))),
                false,
            ),
            (
                Point::new(
                    Mm(pt_to_mm(PAGE_WIDTH_PT - PAGE_MARGINS[2])),
                    Mm(pt_to_mm(y)),
                ),
                false,
            ),
        ],
        is_closed: false,
    });
}

/// Open rendered PDF bytes in a new browser tab.
pub fn open_in_new_tab(bytes: &[u8]) -> Result<(), String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type("application/pdf");

    let blob = Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    // Release the URL later no matter how the open attempt below ends.
    let revoke_url = url.clone();
    spawn_local(async move {
        TimeoutFuture::new(OBJECT_URL_TTL_MS).await;
        let _ = Url::revoke_object_url(&revoke_url);
    });

    let window = web_sys::window().ok_or("No window object")?;
    let opened = window
        .open_with_url_and_target(&url, "_blank")
        .map_err(|e| format!("Failed to open tab: {:?}", e))?;

    if opened.is_none() {
        return Err("O navegador bloqueou a aba do relatório".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document(rows: usize) -> SalesReportDocument {
        SalesReportDocument {
            title: "Uni Pizza - Relatório de Vendas - (01/08/2026 - 31/08/2026)".to_string(),
            rows: (0..rows)
                .map(|i| {
                    [
                        format!("Garçom {}", i),
                        format!("Mesa {}", i),
                        "R$ 30,00".to_string(),
                        String::new(),
                        String::new(),
                        String::new(),
                        "25/08/2026".to_string(),
                        "R$ 30,00".to_string(),
                    ]
                })
                .collect(),
            grand_total: rows as f64 * 30.0,
            footer_note: format!("Valor Total: R$ {},00", rows * 30),
        }
    }

    #[test]
    fn test_rows_per_page_geometry() {
        // 595.28pt tall, 50pt top margin, one 18pt header row, 40pt bottom.
        assert_eq!(rows_per_page(), 27);
    }

    #[test]
    fn test_page_count() {
        let capacity = rows_per_page();
        assert_eq!(page_count(0), 1);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(capacity), 1);
        assert_eq!(page_count(capacity + 1), 2);
        assert_eq!(page_count(capacity * 3), 3);
    }

    #[test]
    fn test_fit_cell_keeps_short_text() {
        assert_eq!(fit_cell("R$ 30,00", 93.0, BODY_FONT_SIZE), "R$ 30,00");
    }

    #[test]
    fn test_fit_cell_truncates_with_ellipsis() {
        let fitted = fit_cell(
            "um nome de cliente absurdamente comprido",
            93.0,
            BODY_FONT_SIZE,
        );
        assert!(fitted.ends_with('…'));
        assert!(text_width(&fitted, BODY_FONT_SIZE) <= 93.0);
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = render(&sample_document(3)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_paginates_long_reports() {
        let single = render(&sample_document(1)).unwrap();
        let multi = render(&sample_document(rows_per_page() + 1)).unwrap();
        assert!(multi.len() > single.len());
    }
}
