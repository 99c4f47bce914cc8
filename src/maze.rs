//! Maze carving, endpoint assignment and solving

use std::collections::VecDeque;
use std::ops::Index;

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::{debug, trace};

use crate::render::Snapshot;
use crate::{Cell, Direction, MazeError, MazeResult, Point};

/// Perfect maze on a rectangular grid
///
/// Cells start fully walled. [Self::carve] opens walls until the open-wall
/// graph is a spanning tree, so any two cells are joined by exactly one
/// simple path. [Self::solve] then marks that path between the start and
/// goal cells.
///
/// The random source is owned by the maze, so a seeded generator gives a
/// reproducible layout.
pub struct Maze<R = StdRng> {
    rows: usize,
    columns: usize,
    /// Cells as `cells[row][column]`
    cells: Vec<Vec<Cell>>,
    start: Option<Point>,
    goal: Option<Point>,
    carved: bool,
    random: R,
}

impl Maze<StdRng> {
    /// Create a fully walled maze
    ///
    /// - `rows`, `columns`: Grid size, both must be greater than 1.
    /// - `seed`: Random seed. Without one the generator is seeded from
    ///   the operating system.
    ///
    /// # Examples
    /// ```
    /// use perfect_maze::{Maze, MazeError};
    ///
    /// assert!(Maze::new(3, 4, Some(7)).is_ok());
    /// assert_eq!(
    ///     Maze::new(1, 5, None).err(),
    ///     Some(MazeError::InvalidDimension { rows: 1, columns: 5 })
    /// );
    /// ```
    pub fn new(rows: usize, columns: usize, seed: Option<u64>) -> MazeResult<Self> {
        let random = match seed {
            Some(state) => StdRng::seed_from_u64(state),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rows, columns, random)
    }
}

impl<R: Rng> Maze<R> {
    /// Create a fully walled maze that draws randomness from `random`
    pub fn with_rng(rows: usize, columns: usize, random: R) -> MazeResult<Self> {
        if rows <= 1 || columns <= 1 {
            return Err(MazeError::InvalidDimension { rows, columns });
        }
        let cells = (0..rows)
            .map(|row| {
                (0..columns)
                    .map(|column| Cell::new(Point { row, column }))
                    .collect()
            })
            .collect();
        Ok(Maze {
            rows,
            columns,
            cells,
            start: None,
            goal: None,
            carved: false,
            random,
        })
    }

    /// Carve a perfect maze out of the grid
    ///
    /// Depth-first walk from the top-left cell with an explicit stack. At
    /// each step a random unvisited neighbour of the cell on top of the
    /// stack is visited and the wall between them removed; when there is
    /// none, the walk backtracks. Stops once every cell has been visited.
    ///
    /// Calling this on an already carved maze does nothing.
    pub fn carve(&mut self) {
        if self.carved {
            debug!("maze is already carved");
            return;
        }

        let origin = Point::new(0, 0);
        self.cell_mut(origin).mark_visited();
        let mut stack = vec![origin];
        let mut removed = 0;

        while let Some(&current) = stack.last() {
            match self.random_unvisited_neighbor(current) {
                Some((direction, next)) => {
                    self.cell_mut(next).mark_visited();
                    self.remove_wall(current, next, direction);
                    trace!(from = %current, to = %next, ?direction, "removed wall");
                    stack.push(next);
                    removed += 1;
                }
                None => {
                    stack.pop();
                }
            }
        }

        self.carved = true;
        debug!(
            rows = self.rows,
            columns = self.columns,
            removed,
            "carved maze"
        );
    }

    /// Pick a random unvisited neighbour of `current`
    ///
    /// Directions are shuffled on every call so that no direction is
    /// favoured.
    fn random_unvisited_neighbor(&mut self, current: Point) -> Option<(Direction, Point)> {
        let mut directions = Direction::ALL;
        directions.shuffle(&mut self.random);

        directions.into_iter().find_map(|direction| {
            self.neighbor(current, direction)
                .filter(|&next| !self[next].visited())
                .map(|next| (direction, next))
        })
    }

    /// Remove the wall shared by `current` and its neighbour `next`
    fn remove_wall(&mut self, current: Point, next: Point, direction: Direction) {
        match direction {
            Direction::North => self.cell_mut(current).remove_top_wall(),
            Direction::South => self.cell_mut(next).remove_top_wall(),
            Direction::West => self.cell_mut(current).remove_left_wall(),
            Direction::East => self.cell_mut(next).remove_left_wall(),
        }
    }

    /// Mark `start` and `goal`
    ///
    /// Returns error if either point is outside the grid, if they are the
    /// same cell, or if endpoints were already assigned. Nothing is marked
    /// on error.
    ///
    /// # Examples
    /// ```
    /// use perfect_maze::{Maze, MazeError, Point};
    ///
    /// let mut maze = Maze::new(3, 3, Some(1)).unwrap();
    /// assert!(matches!(
    ///     maze.set_goal(Point::new(5, 5), Point::new(0, 0)),
    ///     Err(MazeError::InvalidCoordinate { .. })
    /// ));
    /// assert_eq!(
    ///     maze.set_goal(Point::new(1, 1), Point::new(1, 1)),
    ///     Err(MazeError::DuplicateEndpoint(Point::new(1, 1)))
    /// );
    /// maze.set_goal(Point::new(0, 0), Point::new(2, 2)).unwrap();
    /// ```
    pub fn set_goal(&mut self, start: Point, goal: Point) -> MazeResult<()> {
        self.check_endpoints(start, goal)?;
        self.ensure_endpoints_unassigned()?;

        self.cell_mut(start).mark_start();
        self.cell_mut(goal).mark_goal();
        self.start = Some(start);
        self.goal = Some(goal);
        debug!(%start, %goal, "assigned endpoints");
        Ok(())
    }

    /// Mark a random start and a random, different goal
    ///
    /// Start and goal are drawn independently and uniformly over the grid.
    /// Only the goal is redrawn when it lands on the start. Returns the
    /// chosen `(start, goal)`.
    pub fn set_random_goal(&mut self) -> MazeResult<(Point, Point)> {
        self.ensure_endpoints_unassigned()?;

        let start = self.random_point();
        let mut goal = self.random_point();
        while goal == start {
            goal = self.random_point();
        }

        self.set_goal(start, goal)?;
        Ok((start, goal))
    }

    fn random_point(&mut self) -> Point {
        let row = self.random.gen_range(0..self.rows);
        let column = self.random.gen_range(0..self.columns);
        Point { row, column }
    }

    fn ensure_endpoints_unassigned(&self) -> MazeResult<()> {
        if self.start.is_some() || self.goal.is_some() {
            return Err(MazeError::PreconditionViolation(
                "start and goal are already assigned",
            ));
        }
        Ok(())
    }
}

impl<R> Maze<R> {
    /// Find the path from start to goal and mark the cells along it
    ///
    /// Breadth-first search over the open-wall graph; only neighbours with
    /// no wall in between are followed. Each reached cell remembers the
    /// cell it was reached from, and the path is read back from the goal.
    /// In a perfect maze this is the only simple path between the two.
    ///
    /// Every cell of the path except the start and goal is marked as on
    /// path. Returns the path, start and goal included.
    ///
    /// Returns error if the maze has not been carved or the endpoints have
    /// not been assigned.
    ///
    /// # Examples
    /// ```
    /// use perfect_maze::{Maze, Point};
    ///
    /// let mut maze = Maze::new(4, 6, Some(3)).unwrap();
    /// maze.carve();
    /// maze.set_goal(Point::new(0, 0), Point::new(3, 5)).unwrap();
    /// let path = maze.solve().unwrap();
    /// assert_eq!(path.first(), Some(&Point::new(0, 0)));
    /// assert_eq!(path.last(), Some(&Point::new(3, 5)));
    /// ```
    pub fn solve(&mut self) -> MazeResult<Vec<Point>> {
        let (Some(start), Some(goal)) = (self.start, self.goal) else {
            return Err(MazeError::PreconditionViolation(
                "start and goal must be assigned before solving",
            ));
        };
        if !self.carved {
            return Err(MazeError::PreconditionViolation(
                "maze must be carved before solving",
            ));
        }

        self.mark_all_unvisited();
        let mut parents: Vec<Vec<Option<Point>>> = vec![vec![None; self.columns]; self.rows];
        let mut queue = VecDeque::from([start]);
        self.cell_mut(start).mark_visited();

        let mut found = false;
        while let Some(current) = queue.pop_front() {
            if self[current].is_goal() {
                found = true;
                break;
            }
            for direction in Direction::ALL {
                let Some(next) = self.neighbor(current, direction) else {
                    continue;
                };
                if self.is_open(current, direction) && !self[next].visited() {
                    self.cell_mut(next).mark_visited();
                    parents[next.row][next.column] = Some(current);
                    queue.push_back(next);
                }
            }
        }
        if !found {
            return Err(MazeError::PreconditionViolation(
                "goal is not reachable from start",
            ));
        }

        let mut path = vec![goal];
        let mut at = goal;
        while let Some(parent) = parents[at.row][at.column] {
            path.push(parent);
            at = parent;
        }
        path.reverse();

        for &point in &path {
            let cell = self.cell_mut(point);
            if !(cell.is_start() || cell.is_goal()) {
                cell.mark_on_path();
            }
        }
        debug!(%start, %goal, steps = path.len() - 1, "solved maze");
        Ok(path)
    }

    fn mark_all_unvisited(&mut self) {
        self.cells
            .iter_mut()
            .flatten()
            .for_each(Cell::mark_unvisited);
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    pub fn is_carved(&self) -> bool {
        self.carved
    }

    /// Check that `start` and `goal` are distinct cells inside the grid
    ///
    /// Same checks as [Self::set_goal], without marking anything.
    pub fn check_endpoints(&self, start: Point, goal: Point) -> MazeResult<()> {
        for point in [start, goal] {
            if !self.contains(point) {
                return Err(MazeError::InvalidCoordinate {
                    point,
                    rows: self.rows,
                    columns: self.columns,
                });
            }
        }
        if start == goal {
            return Err(MazeError::DuplicateEndpoint(start));
        }
        Ok(())
    }

    /// Whether `point` lies inside the grid
    pub fn contains(&self, point: Point) -> bool {
        point.row < self.rows && point.column < self.columns
    }

    /// Cell at `point`, if inside the grid
    pub fn cell(&self, point: Point) -> Option<&Cell> {
        self.cells.get(point.row)?.get(point.column)
    }

    fn cell_mut(&mut self, point: Point) -> &mut Cell {
        &mut self.cells[point.row][point.column]
    }

    /// Neighbour one step from `point` in `direction`
    ///
    /// Returns `None` when `point` or the neighbour is outside the grid.
    pub fn neighbor(&self, point: Point, direction: Direction) -> Option<Point> {
        if !self.contains(point) {
            return None;
        }
        let row = point.row.checked_add_signed(direction.row())?;
        let column = point.column.checked_add_signed(direction.column())?;
        let next = Point { row, column };
        self.contains(next).then_some(next)
    }

    /// Whether there is no wall between `point` and its neighbour in
    /// `direction`
    ///
    /// The outer boundary is always closed.
    pub fn is_open(&self, point: Point, direction: Direction) -> bool {
        let Some(next) = self.neighbor(point, direction) else {
            return false;
        };
        match direction {
            Direction::North => !self[point].top_wall(),
            Direction::South => !self[next].top_wall(),
            Direction::West => !self[point].left_wall(),
            Direction::East => !self[next].left_wall(),
        }
    }

    /// Read-only copy of every cell, for rendering
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.cells.clone())
    }
}

impl<R> Index<Point> for Maze<R> {
    type Output = Cell;

    /// # Panics
    /// If `point` is outside the grid.
    fn index(&self, point: Point) -> &Self::Output {
        &self.cells[point.row][point.column]
    }
}
