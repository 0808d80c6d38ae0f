use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub id: u64,
    pub image_id: String,
    #[serde(default)]
    pub sub_id: Option<String>,
    pub value: i32,
}

impl Vote {
    pub fn new(id: u64, image_id: impl Into<String>, value: i32) -> Self {
        Self {
            id,
            image_id: image_id.into(),
            sub_id: None,
            value,
        }
    }

    pub fn direction(&self) -> Option<VoteDirection> {
        VoteDirection::from_value(self.value)
    }
}

/// Direction of a vote. On the wire up is `1` and down is `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    pub fn value(self) -> i32 {
        match self {
            Self::Up => 1,
            Self::Down => 0,
        }
    }

    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            1 => Some(Self::Up),
            0 => Some(Self::Down),
            _ => None,
        }
    }

    fn weight(self) -> i64 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

/// Net score of `image_id`: ups minus downs, unknown values ignored.
pub fn tally(votes: &[Vote], image_id: &str) -> i64 {
    votes
        .iter()
        .filter(|vote| vote.image_id == image_id)
        .filter_map(Vote::direction)
        .map(VoteDirection::weight)
        .sum()
}
