//! Paragraph reassembly for one text block.

use super::classify::{classify, LineKind};
use super::continuation::is_continuation;
use crate::model::LogicalLine;

/// Reassemble the raw lines of one block into logical lines.
///
/// Lines are trimmed before classification. Prose lines accumulate into an
/// open paragraph that is flushed by a blank line, a marker, a list item, the
/// end of input, or eagerly when the next line does not continue it.
pub fn reassemble<I, S>(lines: I) -> Vec<LogicalLine>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines: Vec<S> = lines.into_iter().collect();
    let mut output = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.as_ref().trim();

        match classify(line) {
            LineKind::Blank => {
                flush(&mut paragraph, &mut output);
                output.push(LogicalLine::Blank);
            }
            LineKind::Marker => {
                flush(&mut paragraph, &mut output);
                output.push(LogicalLine::Marker(line.to_string()));
            }
            LineKind::ListItem => {
                flush(&mut paragraph, &mut output);
                output.push(LogicalLine::ListItem(line.to_string()));
            }
            LineKind::Prose => {
                paragraph.push(line);
                if let Some(next) = lines.get(i + 1) {
                    if !is_continuation(line, next.as_ref().trim()) {
                        flush(&mut paragraph, &mut output);
                    }
                }
            }
        }
    }

    flush(&mut paragraph, &mut output);
    output
}

fn flush(paragraph: &mut Vec<&str>, output: &mut Vec<LogicalLine>) {
    if !paragraph.is_empty() {
        output.push(LogicalLine::Paragraph(paragraph.join(" ")));
        paragraph.clear();
    }
}

/// Render logical lines one per line, dropping lines that render empty.
pub fn render_lines(lines: &[LogicalLine]) -> String {
    lines
        .iter()
        .map(LogicalLine::as_text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split extracted text on `'\n'`, reassemble it as one block, and render.
pub fn reflow_block(text: &str) -> String {
    render_lines(&reassemble(text.split('\n')))
}
