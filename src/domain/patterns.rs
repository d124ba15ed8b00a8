use std::fmt;
use std::str::FromStr;

use super::{LifeError, LifeResult};

/// A named rectangular block of cell states that can be stamped onto a grid.
/// Dead cells are part of the pattern and overwrite whatever is underneath.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: String,
    pub description: String,
    rows: Vec<Vec<bool>>,
}

impl Pattern {
    /// Build a pattern from a full boolean matrix. Every row must have the same,
    /// non-zero length.
    pub fn from_rows(
        name: impl Into<String>,
        description: impl Into<String>,
        rows: Vec<Vec<bool>>,
    ) -> LifeResult<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(LifeError::InvalidPattern {
                reason: "pattern has no cells".to_owned(),
            });
        }
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(LifeError::InvalidPattern {
                reason: format!("row {} has {} cells, expected {}", idx, row.len(), width),
            });
        }
        Ok(Self {
            name: name.into(),
            description: description.into(),
            rows,
        })
    }

    /// Build the smallest pattern holding the given live `(row, col)` cells
    pub fn from_cells(
        name: impl Into<String>,
        description: impl Into<String>,
        cells: &[(usize, usize)],
    ) -> Self {
        let width = cells.iter().map(|&(_, c)| c).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|&(r, _)| r).max().unwrap_or(0) + 1;
        let mut rows = vec![vec![false; width]; height];
        for &(r, c) in cells {
            rows[r][c] = true;
        }
        Self {
            name: name.into(),
            description: description.into(),
            rows,
        }
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.rows.iter().flatten().filter(|&&alive| alive).count()
    }
}

impl FromStr for Pattern {
    type Err = LifeError;

    /// Parse the plaintext `.cells` format: `!` comment lines, `!Name:` header,
    /// `O`/`*` for live cells and `.` for dead ones. Short rows are padded.
    fn from_str(contents: &str) -> Result<Self, Self::Err> {
        let mut name = None;
        let mut comments: Vec<&str> = vec![];
        let mut rows: Vec<Vec<bool>> = vec![];

        for (line_no, line) in contents.lines().enumerate() {
            let line = line.trim_end();
            if let Some(comment) = line.strip_prefix('!') {
                if let Some(n) = comment.strip_prefix("Name:") {
                    name = Some(n.trim().to_owned());
                } else if !comment.trim().is_empty() {
                    comments.push(comment.trim());
                }
                continue;
            }

            let row = line
                .chars()
                .enumerate()
                .map(|(col, ch)| match ch {
                    'O' | '*' => Ok(true),
                    '.' => Ok(false),
                    other => Err(LifeError::InvalidPattern {
                        reason: format!(
                            "unexpected character {:?} at line {}, column {}",
                            other,
                            line_no + 1,
                            col + 1
                        ),
                    }),
                })
                .collect::<LifeResult<Vec<bool>>>()?;
            rows.push(row);
        }

        while rows.last().is_some_and(Vec::is_empty) {
            rows.pop();
        }

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, false);
        }

        Pattern::from_rows(
            name.unwrap_or_else(|| "Unnamed".to_owned()),
            comments.join(" "),
            rows,
        )
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "!Name: {}", self.name)?;
        if !self.description.is_empty() {
            writeln!(f, "!{}", self.description)?;
        }
        for row in &self.rows {
            let line: String = row.iter().map(|&alive| if alive { 'O' } else { '.' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::from_cells(
            "Glider",
            "Moves diagonally (period 4)",
            &[
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::from_cells("Blinker", "Oscillator (period 2)", &[(0, 0), (0, 1), (0, 2)])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::from_cells(
            "Toad",
            "Oscillator (period 2)",
            &[
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::from_cells(
            "Beacon",
            "Oscillator (period 2)",
            &[
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::from_cells("Block", "Still life", &[(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// Pulsar - period 3 oscillator, symmetric about both diagonals
    pub fn pulsar() -> Pattern {
        const BARS: [usize; 4] = [0, 5, 7, 12];
        const SPANS: [usize; 6] = [2, 3, 4, 8, 9, 10];

        let cells: Vec<(usize, usize)> = BARS
            .into_iter()
            .flat_map(|bar| SPANS.into_iter().flat_map(move |span| [(bar, span), (span, bar)]))
            .collect();
        Pattern::from_cells("Pulsar", "Oscillator (period 3)", &cells)
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::from_cells(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            &[
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::from_cells(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            &[
                // Left square
                (4, 0), (5, 0),
                (4, 1), (5, 1),

                // Left circle
                (4, 10), (5, 10), (6, 10),
                (3, 11), (7, 11),
                (2, 12), (8, 12),
                (2, 13), (8, 13),
                (5, 14),
                (3, 15), (7, 15),
                (4, 16), (5, 16), (6, 16),
                (5, 17),

                // Middle pieces
                (2, 20), (3, 20), (4, 20),
                (2, 21), (3, 21), (4, 21),
                (1, 22), (5, 22),
                (0, 24), (1, 24), (5, 24), (6, 24),

                // Right square
                (2, 34), (3, 34),
                (2, 35), (3, 35),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::from_cells(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            &[
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::from_cells(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            &[
                (0, 1),
                (1, 3),
                (2, 0), (2, 1), (2, 4), (2, 5), (2, 6),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            block(),
            pulsar(),
            lwss(),
            glider_gun(),
            r_pentomino(),
            acorn(),
        ]
    }

    /// Look up a preset by name, ignoring case, spaces and punctuation
    pub fn find(name: &str) -> LifeResult<Pattern> {
        let wanted = normalize(name);
        all_patterns()
            .into_iter()
            .find(|p| normalize(&p.name) == wanted)
            .ok_or_else(|| LifeError::UnknownPattern { name: name.to_owned() })
    }

    fn normalize(name: &str) -> String {
        name.chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }
}
