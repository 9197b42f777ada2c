use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;

/// Contents of a single cell. On the wire `X` and `O` are strings and `Empty` is `null`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl Serialize for Mark {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Mark::Empty => serializer.serialize_none(),
            Mark::X => serializer.serialize_str("X"),
            Mark::O => serializer.serialize_str("O"),
        }
    }
}

impl<'de> Deserialize<'de> for Mark {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: Option<String> = Option::deserialize(deserializer)?;
        match value.as_deref() {
            None => Ok(Mark::Empty),
            Some("X") => Ok(Mark::X),
            Some("O") => Ok(Mark::O),
            Some(other) => Err(de::Error::custom(format!(
                "invalid cell value {:?}, expected \"X\", \"O\" or null",
                other
            ))),
        }
    }
}

/// A cell coordinate. Both indices are always within the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    row: usize,
    col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// All cells in row-major order.
    pub fn all() -> impl Iterator<Item = Action> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Action { row, col }))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.row, self.col].serialize(serializer)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    XWins,
    OWins,
    Draw,
}
