//! Single-page PDF serialisation of the report text.

use chrono::{DateTime, Utc};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};
use tracing::{debug, instrument};

use geneinfo_common::{GeneInfoError, GeneRecord, Result};

use crate::text::report_text;
use crate::ReportOptions;

// A4 portrait, in points.
const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 50;

const TITLE_SIZE: i64 = 16;
const BODY_SIZE: i64 = 11;
const LEADING: i64 = 14;
const WRAP_COLUMNS: usize = 88;

const TITLE: &str = "GeneInfo Finder - Gene Report";

/// Export a record as PDF bytes, stamped with the current time.
pub fn export(record: &GeneRecord, options: ReportOptions) -> Result<Vec<u8>> {
    export_pdf(record, options, Utc::now())
}

#[instrument(skip(record, options), fields(uid = %record.uid))]
pub fn export_pdf(record: &GeneRecord, options: ReportOptions, generated_at: DateTime<Utc>) -> Result<Vec<u8>> {
    let body = report_text(record, options);
    let lines = layout_lines(&body);

    let mut ops = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F2".into(), TITLE_SIZE.into()]),
        Operation::new("Td", vec![MARGIN.into(), (PAGE_HEIGHT - MARGIN).into()]),
        Operation::new("Tj", vec![pdf_string(TITLE)]),
        Operation::new("Tf", vec!["F1".into(), 9i64.into()]),
        Operation::new("Td", vec![0i64.into(), (-LEADING - 4).into()]),
        Operation::new(
            "Tj",
            vec![pdf_string(&format!("Generated {}", generated_at.format("%Y-%m-%d %H:%M UTC")))],
        ),
        Operation::new("Tf", vec!["F1".into(), BODY_SIZE.into()]),
        Operation::new("TL", vec![LEADING.into()]),
        Operation::new("Td", vec![0i64.into(), (-2 * LEADING).into()]),
    ];
    for line in &lines {
        ops.push(Operation::new("Tj", vec![pdf_string(line)]));
        ops.push(Operation::new("T*", vec![]));
    }
    ops.push(Operation::new("ET", vec![]));

    let content = Content { operations: ops }
        .encode()
        .map_err(|e| GeneInfoError::Report(format!("encode page content: {}", e)))?;

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    });
    let content_id = doc.add_object(Stream::new(dictionary! {}, content));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1i64,
            "Resources" => resources_id,
            "MediaBox" => vec![0i64.into(), 0i64.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf)
        .map_err(|e| GeneInfoError::Report(format!("write PDF: {}", e)))?;

    debug!(bytes = buf.len(), lines = lines.len(), "Report PDF built");
    Ok(buf)
}

/// Lines of body text that fit on the page after the title block.
fn max_body_lines() -> usize {
    ((PAGE_HEIGHT - 2 * MARGIN - 3 * LEADING) / LEADING) as usize
}

/// Wrap the report text and cut it to one page. A cut ends with "...".
fn layout_lines(body: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for raw in body.lines() {
        if raw.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        lines.extend(textwrap::wrap(raw, WRAP_COLUMNS).into_iter().map(|l| l.into_owned()));
    }

    let max = max_body_lines();
    if lines.len() > max {
        lines.truncate(max);
        if let Some(last) = lines.last_mut() {
            last.push_str(" ...");
        }
    }
    lines
}

/// Helvetica with WinAnsi covers Latin-1; anything else is replaced.
fn pdf_string(text: &str) -> Object {
    let bytes = text
        .chars()
        .map(|c| if (c as u32) < 0x100 { c as u32 as u8 } else { b'?' })
        .collect();
    Object::String(bytes, StringFormat::Literal)
}
