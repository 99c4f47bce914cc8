//! Single grid square and its coordinate

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Location in the maze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: usize,
    pub column: usize,
}

impl Point {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.column)
    }
}

/// Point could not be read from its `row,column` form
#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected `row,column` with non-negative integers, got `{0}`")]
pub struct ParsePointError(String);

impl FromStr for Point {
    type Err = ParsePointError;

    /// Parse `row,column`, e.g. `3,4`
    ///
    /// # Examples
    /// ```
    /// use perfect_maze::Point;
    ///
    /// let p: Point = "3,4".parse().unwrap();
    /// assert_eq!(p, Point::new(3, 4));
    /// assert!("3".parse::<Point>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePointError(s.to_string());
        let (row, column) = s.split_once(',').ok_or_else(err)?;
        let row = row.trim().parse().map_err(|_| err())?;
        let column = column.trim().parse().map_err(|_| err())?;
        Ok(Point { row, column })
    }
}

/// One square of the grid
///
/// Only the north and west walls are stored here. The south wall is the
/// top wall of the cell below, the east wall is the left wall of the cell
/// to the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    point: Point,
    visited: bool,
    top_wall: bool,
    left_wall: bool,
    start: bool,
    goal: bool,
    on_path: bool,
}

impl Cell {
    /// Fully walled, unvisited cell without any role
    pub fn new(point: Point) -> Self {
        Self {
            point,
            visited: false,
            top_wall: true,
            left_wall: true,
            start: false,
            goal: false,
            on_path: false,
        }
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn row(&self) -> usize {
        self.point.row
    }

    pub fn column(&self) -> usize {
        self.point.column
    }

    pub fn visited(&self) -> bool {
        self.visited
    }

    pub fn top_wall(&self) -> bool {
        self.top_wall
    }

    pub fn left_wall(&self) -> bool {
        self.left_wall
    }

    pub fn is_start(&self) -> bool {
        self.start
    }

    pub fn is_goal(&self) -> bool {
        self.goal
    }

    pub fn is_on_path(&self) -> bool {
        self.on_path
    }

    pub fn mark_visited(&mut self) {
        self.visited = true;
    }

    pub fn mark_unvisited(&mut self) {
        self.visited = false;
    }

    pub fn remove_top_wall(&mut self) {
        self.top_wall = false;
    }

    pub fn remove_left_wall(&mut self) {
        self.left_wall = false;
    }

    pub fn mark_start(&mut self) {
        self.start = true;
    }

    pub fn mark_goal(&mut self) {
        self.goal = true;
    }

    pub fn mark_on_path(&mut self) {
        self.on_path = true;
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, ParsePointError, Point};

    #[test]
    fn new_cell_is_walled_and_blank() {
        let cell = Cell::new(Point::new(2, 5));
        assert_eq!(cell.row(), 2);
        assert_eq!(cell.column(), 5);
        assert!(cell.top_wall());
        assert!(cell.left_wall());
        assert!(!cell.visited());
        assert!(!cell.is_start());
        assert!(!cell.is_goal());
        assert!(!cell.is_on_path());
    }

    #[test]
    fn walls_stay_removed() {
        let mut cell = Cell::new(Point::new(0, 0));
        cell.remove_top_wall();
        cell.remove_top_wall();
        cell.remove_left_wall();
        assert!(!cell.top_wall());
        assert!(!cell.left_wall());
    }

    #[test]
    fn visited_toggles() {
        let mut cell = Cell::new(Point::new(0, 0));
        cell.mark_visited();
        assert!(cell.visited());
        cell.mark_unvisited();
        assert!(!cell.visited());
        cell.mark_visited();
        assert!(cell.visited());
    }

    #[test]
    fn parse_point() {
        assert_eq!("0,7".parse(), Ok(Point::new(0, 7)));
        assert_eq!(" 1 , 2 ".parse(), Ok(Point::new(1, 2)));
        assert_eq!(
            "-1,2".parse::<Point>(),
            Err(ParsePointError("-1,2".to_string()))
        );
        assert!("1;2".parse::<Point>().is_err());
        assert!("a,2".parse::<Point>().is_err());
        assert!("1,2,3".parse::<Point>().is_err());
    }

    #[test]
    fn display_round_trips_text_form() {
        assert_eq!(Point::new(4, 9).to_string(), "4,9");
    }
}
