//! ASCII schematics.
//!
//! Every resistance is drawn as a rectangular block of characters. A node's block size is a pure
//! function of its children's block sizes, and a row is assembled by asking the children for the
//! matching rows, so no global layout pass is needed.
//!
//! ```text
//! ─┬─[330Ω]─────────┬─
//!  └─[220Ω]──[100Ω]─┘
//! ```

use std::iter;

use crate::resistance::{Layout, Resistance};

const WIRE: char = '─';
const BLANK: char = ' ';

/// Connector characters for one side of a parallel block.
#[derive(Debug)]
pub struct Edge {
    /// First row of the whole block, where the main wire branches.
    pub entry: char,
    /// First row of a branch that is not the last.
    pub tee: char,
    /// First row of the last branch.
    pub corner: char,
    /// Other rows of a branch that is not the last.
    pub bus: char,
}

/// Connector characters for both sides of a parallel block.
#[derive(Debug)]
pub struct BranchGlyphs {
    pub open: Edge,
    pub close: Edge,
}

pub static PARALLEL_GLYPHS: BranchGlyphs = BranchGlyphs {
    open: Edge {
        entry: '┬',
        tee: '├',
        corner: '└',
        bus: '│',
    },
    close: Edge {
        entry: '┬',
        tee: '┤',
        corner: '┘',
        bus: '│',
    },
};

impl Edge {
    fn glyph(&self, row: usize, branch_start: usize, last_branch: bool) -> char {
        if row == branch_start {
            if row == 0 {
                self.entry
            } else if last_branch {
                self.corner
            } else {
                self.tee
            }
        } else if last_branch {
            BLANK
        } else {
            self.bus
        }
    }
}

impl Resistance {
    /// Width of the schematic in characters.
    pub fn width(&self) -> usize {
        match self {
            Resistance::Leaf(_) => self.value_with_unit().chars().count() + 4,
            Resistance::Combined(c) => match c.kind().rules().layout {
                Layout::Chain => self.children().iter().map(|r| r.width()).sum(),
                Layout::Stack(_) => {
                    self.children().iter().map(|r| r.width()).max().unwrap_or(0) + 4
                }
            },
        }
    }

    /// Height of the schematic in rows.
    pub fn height(&self) -> usize {
        match self {
            Resistance::Leaf(_) => 1,
            Resistance::Combined(c) => match c.kind().rules().layout {
                Layout::Chain => self.children().iter().map(|r| r.height()).max().unwrap_or(0),
                Layout::Stack(_) => self.children().iter().map(|r| r.height()).sum(),
            },
        }
    }

    /// Row `row` of the schematic, exactly `width()` characters long.
    ///
    /// Rows past `height()` are blank.
    pub fn line(&self, row: usize) -> String {
        if row >= self.height() {
            return iter::repeat(BLANK).take(self.width()).collect();
        }
        match self {
            Resistance::Leaf(_) => format!("{}[{}]{}", WIRE, self.value_with_unit(), WIRE),
            Resistance::Combined(c) => match c.kind().rules().layout {
                Layout::Chain => self.children().iter().map(|r| r.line(row)).collect(),
                Layout::Stack(glyphs) => {
                    let children = self.children();
                    let mut start = 0;
                    let mut index = 0;
                    for (i, child) in children.iter().enumerate() {
                        index = i;
                        if row < start + child.height() {
                            break;
                        }
                        start += child.height();
                    }
                    let child = &children[index];
                    let last = index == children.len() - 1;
                    let outer = if row == 0 { WIRE } else { BLANK };

                    let mut line = String::new();
                    line.push(outer);
                    line.push(glyphs.open.glyph(row, start, last));
                    line.push_str(&child.line(row - start));
                    line.extend(iter::repeat(WIRE).take(self.width() - 4 - child.width()));
                    line.push(glyphs.close.glyph(row, start, last));
                    line.push(outer);
                    line
                }
            },
        }
    }

    /// The complete schematic, rows joined by newlines.
    ///
    /// # Examples
    /// ```
    ///     # use std::rc::Rc;
    ///     # use resistor_finder::Resistance;
    ///     let r = Resistance::parallel(&[
    ///         Rc::new(Resistance::leaf(100.0)),
    ///         Rc::new(Resistance::leaf(220.0)),
    ///     ]).unwrap();
    ///     assert_eq!(r.schematic(), "─┬─[220Ω]─┬─\n └─[100Ω]─┘ ");
    /// ```
    pub fn schematic(&self) -> String {
        (0..self.height())
            .map(|row| self.line(row))
            .collect::<Vec<String>>()
            .join("\n")
    }
}
