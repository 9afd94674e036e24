/// Landmarks per detected hand, fixed by the pose estimator's output scheme.
pub const JOINT_COUNT: usize = 21;

/// The 21 hand landmarks in MediaPipe index order.
///
/// The wrist doubles as the palm base for all distance heuristics. Each
/// finger contributes four joints running base to tip; the thumb names its
/// chain CMC/MCP/IP while the others go MCP/PIP/DIP.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Joint {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl Joint {
    /// Positional index into a skeleton's landmark array.
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl From<usize> for Joint {
    fn from(n: usize) -> Self {
        match n {
            0 => Self::Wrist,
            1 => Self::ThumbCmc,
            2 => Self::ThumbMcp,
            3 => Self::ThumbIp,
            4 => Self::ThumbTip,
            5 => Self::IndexMcp,
            6 => Self::IndexPip,
            7 => Self::IndexDip,
            8 => Self::IndexTip,
            9 => Self::MiddleMcp,
            10 => Self::MiddlePip,
            11 => Self::MiddleDip,
            12 => Self::MiddleTip,
            13 => Self::RingMcp,
            14 => Self::RingPip,
            15 => Self::RingDip,
            16 => Self::RingTip,
            17 => Self::PinkyMcp,
            18 => Self::PinkyPip,
            19 => Self::PinkyDip,
            20 => Self::PinkyTip,
            x => unreachable!("no landmark at index {}", x),
        }
    }
}

/// The four non-thumb digits, each with a tip/PIP/MCP chain used by the
/// extension heuristic. The thumb is handled separately since it moves
/// laterally rather than vertically.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// All four counted digits, index to pinky.
    pub const fn all() -> [Finger; 4] {
        [Self::Index, Self::Middle, Self::Ring, Self::Pinky]
    }
    pub const fn tip(&self) -> Joint {
        match self {
            Self::Index => Joint::IndexTip,
            Self::Middle => Joint::MiddleTip,
            Self::Ring => Joint::RingTip,
            Self::Pinky => Joint::PinkyTip,
        }
    }
    pub const fn pip(&self) -> Joint {
        match self {
            Self::Index => Joint::IndexPip,
            Self::Middle => Joint::MiddlePip,
            Self::Ring => Joint::RingPip,
            Self::Pinky => Joint::PinkyPip,
        }
    }
    pub const fn mcp(&self) -> Joint {
        match self {
            Self::Index => Joint::IndexMcp,
            Self::Middle => Joint::MiddleMcp,
            Self::Ring => Joint::RingMcp,
            Self::Pinky => Joint::PinkyMcp,
        }
    }
}

impl std::fmt::Display for Finger {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Index => write!(f, "index"),
            Self::Middle => write!(f, "middle"),
            Self::Ring => write!(f, "ring"),
            Self::Pinky => write!(f, "pinky"),
        }
    }
}
