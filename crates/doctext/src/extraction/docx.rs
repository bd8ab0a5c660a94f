//! DOCX (WordprocessingML) text extraction using zip + roxmltree.
//!
//! Only the main document part is read. Body-level paragraphs are collected in
//! document order, then every body-level table is walked row by row and cell by
//! cell. Table text is appended after all paragraphs rather than interleaved at
//! its position in the document; callers depend on that ordering.

use crate::error::{DoctextError, Result};
use crate::extraction::TextUnits;
use roxmltree::{Document, Node};
use std::io::{Cursor, Read};
use zip::ZipArchive;
use zip::result::ZipError;

const W_NAMESPACE: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Main document part every WordprocessingML package carries.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Upper bound on the decompressed size of the document part.
const MAX_DOCUMENT_PART_BYTES: u64 = 256 * 1024 * 1024;

/// Word tables have at most 63 grid columns.
const MAX_GRID_COLUMNS: usize = 63;

/// Text read from a DOCX body, kept in its two passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocxContent {
    /// Trimmed, non-empty body paragraphs in document order.
    pub paragraphs: Vec<String>,
    /// Trimmed, non-empty table cells: tables in order, rows top to bottom, cells left to right.
    pub cells: Vec<String>,
}

impl DocxContent {
    /// Paragraph units first, table-cell units after, joined by newlines.
    pub fn into_text(self) -> String {
        let mut units = TextUnits::new();
        units.extend(self.paragraphs);
        units.extend(self.cells);
        units.into_text()
    }
}

/// Extract text from DOCX bytes.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String> {
    Ok(extract_docx_content(bytes)?.into_text())
}

/// Extract paragraph and table-cell text from DOCX bytes.
///
/// # Errors
///
/// `MalformedDocument` if the bytes are not a ZIP archive, the archive has no
/// `word/document.xml` (some other ZIP-based format), or the part is not
/// well-formed WordprocessingML.
pub fn extract_docx_content(bytes: &[u8]) -> Result<DocxContent> {
    let xml = read_document_part(bytes)?;
    let document = Document::parse(&xml)?;

    let root = document.root_element();
    if !is_w(root, "document") {
        return Err(DoctextError::malformed(format!(
            "{} root element is <{}>, expected <w:document>",
            DOCUMENT_PART,
            root.tag_name().name()
        )));
    }

    let body = child_w(root, "body")
        .ok_or_else(|| DoctextError::malformed(format!("{} has no <w:body>", DOCUMENT_PART)))?;

    let mut paragraphs = TextUnits::new();
    let mut cells = TextUnits::new();

    for node in body.children().filter(|n| n.is_element()) {
        if is_w(node, "p") {
            paragraphs.push(&paragraph_text(node));
        } else if is_w(node, "tbl") {
            for row in table_grid(node) {
                cells.extend(row);
            }
        }
    }

    Ok(DocxContent {
        paragraphs: paragraphs.as_slice().to_vec(),
        cells: cells.as_slice().to_vec(),
    })
}

fn read_document_part(bytes: &[u8]) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let part = match archive.by_name(DOCUMENT_PART) {
        Ok(part) => part,
        Err(ZipError::FileNotFound) => {
            return Err(DoctextError::malformed(format!(
                "ZIP archive has no {} part; it is not a Word document",
                DOCUMENT_PART
            )));
        }
        Err(e) => return Err(e.into()),
    };

    let mut xml = String::new();
    part.take(MAX_DOCUMENT_PART_BYTES + 1)
        .read_to_string(&mut xml)
        .map_err(|e| DoctextError::malformed_with_source(format!("Failed to read {}", DOCUMENT_PART), e))?;

    if xml.len() as u64 > MAX_DOCUMENT_PART_BYTES {
        return Err(DoctextError::malformed(format!(
            "{} exceeds {} bytes when decompressed",
            DOCUMENT_PART, MAX_DOCUMENT_PART_BYTES
        )));
    }

    Ok(xml)
}

fn is_w(node: Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name && node.tag_name().namespace() == Some(W_NAMESPACE)
}

fn child_w<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| is_w(*child, name))
}

fn w_val<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.attribute((W_NAMESPACE, "val"))
}

/// Text of one paragraph: its runs, including runs wrapped in hyperlinks and tracked insertions.
fn paragraph_text(paragraph: Node<'_, '_>) -> String {
    let mut text = String::new();
    collect_runs(paragraph, &mut text);
    text
}

fn collect_runs(container: Node<'_, '_>, out: &mut String) {
    for child in container.children().filter(|n| n.is_element()) {
        if child.tag_name().namespace() != Some(W_NAMESPACE) {
            continue;
        }
        match child.tag_name().name() {
            "r" => collect_run_text(child, out),
            "hyperlink" | "ins" | "smartTag" | "fldSimple" | "customXml" => collect_runs(child, out),
            _ => {}
        }
    }
}

fn collect_run_text(run: Node<'_, '_>, out: &mut String) {
    for child in run.children().filter(|n| n.is_element()) {
        if child.tag_name().namespace() != Some(W_NAMESPACE) {
            continue;
        }
        match child.tag_name().name() {
            "t" => out.push_str(child.text().unwrap_or_default()),
            "tab" => out.push('\t'),
            "cr" => out.push('\n'),
            // Page and column breaks carry no text.
            "br" => match child.attribute((W_NAMESPACE, "type")) {
                None | Some("textWrapping") => out.push('\n'),
                Some(_) => {}
            },
            "noBreakHyphen" => out.push('-'),
            _ => {}
        }
    }
}

/// Cell text: the cell's own paragraphs joined by newlines.
fn cell_text(cell: Node<'_, '_>) -> String {
    cell.children()
        .filter(|n| is_w(*n, "p"))
        .map(paragraph_text)
        .collect::<Vec<_>>()
        .join("\n")
}

fn grid_span(cell: Node<'_, '_>) -> usize {
    child_w(cell, "tcPr")
        .and_then(|props| child_w(props, "gridSpan"))
        .and_then(w_val)
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|span| *span > 0)
        .map_or(1, |span| span.min(MAX_GRID_COLUMNS))
}

/// Grid columns a row skips before its first cell.
fn grid_before(row: Node<'_, '_>) -> usize {
    child_w(row, "trPr")
        .and_then(|props| child_w(props, "gridBefore"))
        .and_then(w_val)
        .and_then(|v| v.parse::<usize>().ok())
        .map_or(0, |skipped| skipped.min(MAX_GRID_COLUMNS))
}

/// True for a cell that continues a vertical merge from the row above.
fn continues_vertical_merge(cell: Node<'_, '_>) -> bool {
    child_w(cell, "tcPr")
        .and_then(|props| child_w(props, "vMerge"))
        .map(|merge| w_val(merge).is_none_or(|v| v == "continue"))
        .unwrap_or(false)
}

/// Table text laid out on its grid, one entry per grid column.
///
/// A cell spanning several columns appears once per column; a vertically
/// continued cell repeats the text of the cell above it. Columns skipped by
/// `w:gridBefore` hold empty entries.
fn table_grid(table: Node<'_, '_>) -> Vec<Vec<String>> {
    let mut grid: Vec<Vec<String>> = Vec::new();

    for row in table.children().filter(|n| is_w(*n, "tr")) {
        let mut row_texts = vec![String::new(); grid_before(row)];

        for cell in row.children().filter(|n| is_w(*n, "tc")) {
            let column = row_texts.len();
            let text = if continues_vertical_merge(cell) {
                grid.last()
                    .and_then(|above: &Vec<String>| above.get(column).cloned())
                    .unwrap_or_else(|| cell_text(cell))
            } else {
                cell_text(cell)
            };

            for _ in 0..grid_span(cell) {
                row_texts.push(text.clone());
            }
        }

        grid.push(row_texts);
    }

    grid
}
