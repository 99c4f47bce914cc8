//! Carve a perfect maze and find the way through it
//!
//! A perfect maze has exactly one simple path between any two cells. The
//! grid starts fully walled; [Maze::carve] removes walls with a randomized
//! depth-first walk, [Maze::set_goal] or [Maze::set_random_goal] choose the
//! endpoints and [Maze::solve] marks the path between them.
//!
//! # Examples
//! ## Seeded maze with fixed endpoints
//! ```
//! use perfect_maze::{Maze, Point};
//!
//! let mut maze = Maze::new(5, 8, Some(2024)).unwrap();
//! maze.carve();
//! maze.set_goal(Point::new(0, 0), Point::new(4, 7)).unwrap();
//! let path = maze.solve().unwrap();
//! assert_eq!(path[0], Point::new(0, 0));
//! assert_eq!(path[path.len() - 1], Point::new(4, 7));
//! print!("{}", maze.snapshot());
//! ```
//!
//! ## Random endpoints
//! ```
//! use perfect_maze::Maze;
//!
//! let mut maze = Maze::new(10, 10, None).unwrap();
//! maze.carve();
//! let (start, goal) = maze.set_random_goal().unwrap();
//! assert_ne!(start, goal);
//! maze.solve().unwrap();
//! ```

mod cell;
mod direction;
mod error;
mod maze;
pub mod render;

pub use cell::{Cell, ParsePointError, Point};
pub use direction::Direction;
pub use error::{MazeError, MazeResult};
pub use maze::Maze;
pub use render::Snapshot;
