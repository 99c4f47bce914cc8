//! Text rendering of a maze

use std::fmt;

use itertools::Itertools;

use crate::{Cell, Point};

/// Frozen copy of the maze cells
///
/// Displays as a text grid: `+---` / `+   ` top border segments, then one
/// line of cell segments with the left wall (`|`) and a marker: `S` start,
/// `G` goal, `*` on the solution path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    cells: Vec<Vec<Cell>>,
}

impl Snapshot {
    pub(crate) fn new(cells: Vec<Vec<Cell>>) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn columns(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn cell(&self, point: Point) -> Option<&Cell> {
        self.cells.get(point.row)?.get(point.column)
    }

    /// Cells row by row
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }
}

fn top_segment(cell: &Cell) -> &'static str {
    if cell.top_wall() {
        "+---"
    } else {
        "+   "
    }
}

fn body_segment(cell: &Cell) -> String {
    let wall = if cell.left_wall() { '|' } else { ' ' };
    let marker = if cell.is_start() {
        'S'
    } else if cell.is_goal() {
        'G'
    } else if cell.is_on_path() {
        '*'
    } else {
        ' '
    };
    format!("{wall} {marker} ")
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            writeln!(f, "{}+", row.iter().map(top_segment).join(""))?;
            writeln!(f, "{}|", row.iter().map(body_segment).join(""))?;
        }
        writeln!(f, "{}+", "+---".repeat(self.columns()))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use crate::{Maze, Point};

    #[test]
    fn render_fresh_grid() {
        let maze = Maze::new(2, 2, Some(0)).unwrap();
        let expected = "\
+---+---+
|   |   |
+---+---+
|   |   |
+---+---+
";
        assert_eq!(maze.snapshot().to_string(), expected);
    }

    #[test]
    fn render_solved_maze() {
        let mut maze = Maze::with_rng(3, 3, StepRng::new(0, 0)).unwrap();
        maze.carve();
        let carved = "\
+---+---+---+
|   |       |
+   +   +---+
|   |       |
+   +---+   +
|           |
+---+---+---+
";
        assert_eq!(maze.snapshot().to_string(), carved);

        maze.set_goal(Point::new(0, 0), Point::new(2, 2)).unwrap();
        maze.solve().unwrap();
        let solved = "\
+---+---+---+
| S |       |
+   +   +---+
| * |       |
+   +---+   +
| *   *   G |
+---+---+---+
";
        assert_eq!(maze.snapshot().to_string(), solved);
    }

    #[test]
    fn markers_without_left_wall() {
        let mut maze = Maze::with_rng(3, 3, StepRng::new(0, 0)).unwrap();
        maze.carve();
        maze.set_goal(Point::new(0, 2), Point::new(2, 1)).unwrap();
        maze.solve().unwrap();
        let rendered = maze.snapshot().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "|   | *   S |");
        assert_eq!(lines[5], "|     G   * |");
    }

    #[test]
    fn snapshot_accessors() {
        let maze = Maze::new(3, 5, Some(0)).unwrap();
        let snapshot = maze.snapshot();
        assert_eq!(snapshot.rows(), 3);
        assert_eq!(snapshot.columns(), 5);
        assert_eq!(snapshot.iter_rows().count(), 3);
        assert!(snapshot.cell(Point::new(2, 4)).is_some());
        assert!(snapshot.cell(Point::new(3, 0)).is_none());
    }
}
