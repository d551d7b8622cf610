//! Tab-aligned help tables
//!
//! [`TabTable`] lays out tab-separated cells in elastic columns padded with
//! tab characters. A column block is a run of consecutive lines that all
//! have a tab-terminated cell in that column; every cell in a block is padded
//! to the block's width. The last cell of a line is never padded.

use std::io::{self, Write};

/// Minimum width of a column, padding included
const MIN_WIDTH: usize = 7;

/// Width of a tab stop
const TAB_WIDTH: usize = 8;

/// Space added to the widest cell of a column
const PADDING: usize = 7;

#[derive(Debug)]
struct Line {
    cells: Vec<String>,
    newline: bool,
}

/// Buffers table text until it is flushed
#[derive(Debug, Default)]
pub struct TabTable {
    lines: Vec<Line>,
    partial: String,
}

impl TabTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text; `\t` ends a cell and `\n` ends a line
    pub fn push(&mut self, text: &str) {
        self.partial.push_str(text);

        while let Some(end) = self.partial.find('\n') {
            let line: String = self.partial.drain(..=end).collect();
            self.lines.push(split_cells(&line[..end], true));
        }
    }

    /// Lay out everything buffered so far and write it
    pub fn flush<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if !self.partial.is_empty() {
            let rest = std::mem::take(&mut self.partial);
            self.lines.push(split_cells(&rest, false));
        }

        let mut rendered = String::new();
        self.format(&mut Vec::new(), 0, self.lines.len(), &mut rendered);
        self.lines.clear();

        out.write_all(rendered.as_bytes())
    }

    fn format(&self, widths: &mut Vec<usize>, mut line0: usize, line1: usize, out: &mut String) {
        let column = widths.len();
        let mut this = line0;

        while this < line1 {
            if !has_cell(&self.lines[this], column) {
                this += 1;
                continue;
            }

            // Lines before the block are laid out with the outer widths
            self.write_lines(widths, line0, this, out);
            line0 = this;

            let mut width = MIN_WIDTH;
            while this < line1 && has_cell(&self.lines[this], column) {
                width = width.max(cell_width(&self.lines[this].cells[column]) + PADDING);
                this += 1;
            }

            widths.push(width);
            self.format(widths, line0, this, out);
            widths.pop();
            line0 = this;
        }

        self.write_lines(widths, line0, line1, out);
    }

    fn write_lines(&self, widths: &[usize], line0: usize, line1: usize, out: &mut String) {
        for line in &self.lines[line0..line1] {
            for (j, cell) in line.cells.iter().enumerate() {
                out.push_str(cell);
                if let Some(&width) = widths.get(j) {
                    write_padding(cell_width(cell), width, out);
                }
            }
            if line.newline {
                out.push('\n');
            }
        }
    }
}

fn split_cells(line: &str, newline: bool) -> Line {
    Line {
        cells: line.split('\t').map(str::to_string).collect(),
        newline,
    }
}

/// Whether `line` has a tab-terminated cell in `column`
fn has_cell(line: &Line, column: usize) -> bool {
    column + 1 < line.cells.len()
}

fn cell_width(cell: &str) -> usize {
    cell.chars().count()
}

fn write_padding(text_width: usize, cell_width: usize, out: &mut String) {
    let cell_width = cell_width.div_ceil(TAB_WIDTH) * TAB_WIDTH;
    let tabs = (cell_width - text_width).div_ceil(TAB_WIDTH);
    out.extend(std::iter::repeat('\t').take(tabs));
}
