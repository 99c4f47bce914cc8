//! Cardinal directions between neighbouring cells

/// One of the four compass directions, as a (row, column) offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions, in declaration order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Row offset of one step in this direction
    pub const fn row(self) -> isize {
        match self {
            Direction::North => -1,
            Direction::South => 1,
            Direction::East | Direction::West => 0,
        }
    }

    /// Column offset of one step in this direction
    pub const fn column(self) -> isize {
        match self {
            Direction::East => 1,
            Direction::West => -1,
            Direction::North | Direction::South => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn offsets_match_compass() {
        let offsets: Vec<(isize, isize)> = Direction::ALL
            .iter()
            .map(|d| (d.row(), d.column()))
            .collect();
        assert_eq!(offsets, vec![(-1, 0), (1, 0), (0, 1), (0, -1)]);
    }
}
