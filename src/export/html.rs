//! Printable HTML generation
//!
//! Renders notes into a self-contained HTML document with print CSS sized
//! for A4. The browser's print dialog produces the paper/PDF output; this
//! module only builds strings.

use crate::dates;
use crate::models::PromissoryNote;

use super::layout;

/// Rendering options for the printable document
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Compact 120x90 notes, five per page, two of them rotated
    pub save_paper: bool,
    /// Notes per page, clamped to the layout capacity
    pub notes_per_page: usize,
    /// Embed a script that opens the print dialog on load
    pub auto_print: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            save_paper: false,
            notes_per_page: layout::max_notes_per_page(false),
            auto_print: false,
        }
    }
}

impl RenderOptions {
    /// Effective notes per page for this layout
    pub fn effective_notes_per_page(&self) -> usize {
        self.notes_per_page
            .clamp(1, layout::max_notes_per_page(self.save_paper))
    }
}

/// Font sizes in millimeters for a layout mode
struct FontSizes {
    title: &'static str,
    value: &'static str,
    body: &'static str,
}

fn font_sizes(save_paper: bool) -> FontSizes {
    if save_paper {
        FontSizes {
            title: "4.5mm",
            value: "3mm",
            body: "2.4mm",
        }
    } else {
        FontSizes {
            title: "6mm",
            value: "4mm",
            body: "3.2mm",
        }
    }
}

/// Escape text for embedding in HTML
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render a single note box
///
/// A rotated note spins 90° around its top-left corner and is shifted right
/// by its own height so it lands back inside its slot.
pub fn note_html(note: &PromissoryNote, rotated: bool, opts: &RenderOptions) -> String {
    let size = layout::note_size(opts.save_paper);
    let fonts = font_sizes(opts.save_paper);
    let padding = if opts.save_paper { "0 2mm" } else { "0 3mm" };
    let rotation = if rotated {
        format!(
            "transform: rotate(90deg); transform-origin: top left; margin-left: {}mm;",
            size.height_mm
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class="note-container" style="width: {width}mm; height: {height}mm; background-color: white; padding: {padding}; box-sizing: border-box; font-family: Arial, Helvetica, sans-serif; border: 1px solid #eee; position: relative; {rotation}">
  <div style="width: 100%; height: 100%; box-sizing: border-box; display: flex; flex-direction: column;">
    <div style="text-align: center; margin: 0;">
      <h1 style="font-size: {title_size}; font-weight: bold; margin: 0; text-transform: uppercase; line-height: 1.8; text-decoration: underline black;">NOTA PROMISSÓRIA</h1>
    </div>
    <div style="display: flex; justify-content: space-between; align-items: flex-start; margin: 0; padding: 0; line-height: 1.2;">
      <div style="transform: translateY(-1.5mm);">
        <span style="font-weight: bold; font-size: {body_size};">Nº:</span>
        <span style="margin-left: 1mm; font-size: {body_size};">{number}</span>
      </div>
      <div style="text-align: right;">
        <div style="margin: 0;">
          <span style="font-weight: bold; font-size: {body_size};">Vencimento:</span>
          <span style="margin-left: 1mm; font-size: {body_size};">{due_date}</span>
        </div>
        <div style="margin-top: 0.5mm;">
          <span style="font-weight: bold; font-size: {value_size}; display: inline-block;">Valor: {amount}</span>
        </div>
      </div>
    </div>
    <div style="margin-bottom: {body_gap};">
      <p style="text-align: justify; line-height: 1.5; margin: 0; font-size: {body_size};">{extended_date}, pagarei por esta nota promissória à {beneficiary}, CNPJ n° {cnpj}, ou à sua ordem, a quantia de <strong>{amount_words}</strong>, em moeda corrente nacional.</p>
      <p style="text-align: left; line-height: 1.5; font-size: {body_size}; margin: 2mm 0 0 0;">Pagável em {payment_location}.</p>
    </div>
    <div style="margin-bottom: 8mm; flex-shrink: 0;">
      <h2 style="font-weight: bold; font-size: {body_size}; text-transform: uppercase; line-height: 1.3; margin: 0;">EMITENTE</h2>
      <div style="line-height: 1.6; font-size: {body_size};">
        <span style="font-weight: bold;">Nome:</span>
        <span>{emitter_name}</span>
        <div><span style="font-weight: bold;">CPF:</span> <span>{emitter_cpf}</span></div>
        <div><span style="font-weight: bold; vertical-align: top;">Endereço:</span> <span>{emitter_address}</span></div>
      </div>
    </div>
    <div style="text-align: left; flex-shrink: 0; margin-bottom: {signature_gap}; font-size: {body_size};">
      <p style="margin: 0;">{city}, {issue_date}.</p>
    </div>
    <div style="flex-shrink: 0; position: absolute; bottom: 2mm; left: 0; right: 0;">
      <div style="width: 60%; height: 1px; background-color: #000; margin: 0 0 1mm 0;"></div>
      <p style="margin: 0 0 0 15mm; font-weight: bold; font-size: {body_size}; text-transform: uppercase; line-height: 1;">{emitter_name_upper}</p>
    </div>
  </div>
</div>"#,
        width = size.width_mm,
        height = size.height_mm,
        padding = padding,
        rotation = rotation,
        title_size = fonts.title,
        value_size = fonts.value,
        body_size = fonts.body,
        body_gap = if opts.save_paper { "3mm" } else { "5mm" },
        signature_gap = if opts.save_paper { "10mm" } else { "15mm" },
        number = escape_html(&note.number),
        due_date = dates::short_date(note.due_date),
        amount = note.amount,
        extended_date = dates::extended_date(note.due_date),
        beneficiary = escape_html(&note.beneficiary_name),
        cnpj = escape_html(&note.beneficiary_cnpj),
        amount_words = escape_html(&note.amount_in_words),
        payment_location = escape_html(&note.payment_location),
        emitter_name = escape_html(&note.emitter_name),
        emitter_cpf = escape_html(&note.emitter_cpf),
        emitter_address = escape_html(&note.emitter_address),
        city = escape_html(&note.city),
        issue_date = dates::long_date(note.issue_date),
        emitter_name_upper = escape_html(&note.emitter_name.to_uppercase()),
    )
}

/// Render one A4 page with its notes placed absolutely
pub fn page_html(notes: &[PromissoryNote], page_index: usize, opts: &RenderOptions) -> String {
    let size = layout::note_size(opts.save_paper);
    let positions = layout::page_positions(opts.save_paper, notes.len());

    let mut html = format!(
        r#"<div class="page-container" id="page-{}" style="width: {}mm; min-height: {}mm; background-color: white; box-sizing: border-box; font-family: Arial, Helvetica, sans-serif; padding: 0; page-break-after: always; position: relative;">"#,
        page_index,
        layout::PAGE_WIDTH_MM,
        layout::PAGE_HEIGHT_MM
    );

    for (note, pos) in notes.iter().zip(positions) {
        let (w, h) = if pos.rotated {
            (size.height_mm, size.width_mm)
        } else {
            (size.width_mm, size.height_mm)
        };
        html.push_str(&format!(
            r#"<div style="position: absolute; top: {}mm; left: {}mm; width: {}mm; height: {}mm;">{}</div>"#,
            pos.top_mm,
            pos.left_mm,
            w,
            h,
            note_html(note, pos.rotated, opts)
        ));
    }

    html.push_str("</div>");
    html
}

/// Render the complete printable document
///
/// Notes are paginated by the effective per-page capacity; each page breaks
/// before the next. With `auto_print` the document opens the print dialog
/// when loaded, mirroring a print-window flow.
pub fn document_html(notes: &[PromissoryNote], opts: &RenderOptions) -> String {
    let per_page = opts.effective_notes_per_page();
    let title = match notes {
        [single] => format!("Nota Promissória - {}", escape_html(&single.number)),
        _ => "Notas Promissórias".to_string(),
    };

    let mut body = String::new();
    for (page_index, page_notes) in notes.chunks(per_page).enumerate() {
        if page_index > 0 {
            body.push_str(r#"<div style="page-break-before: always;"></div>"#);
        }
        body.push_str(&page_html(page_notes, page_index, opts));
    }

    let print_script = if opts.auto_print {
        "\n<script>window.onload = function () { window.print(); };</script>"
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="UTF-8">
<title>{title}</title>
<style>
body {{ margin: 0; padding: 0; }}
@media print {{
  body {{ -webkit-print-color-adjust: exact !important; print-color-adjust: exact !important; }}
  @page {{ size: A4; margin: 5mm; }}
}}
</style>
</head>
<body>
{body}{print_script}
</body>
</html>
"#
    )
}
