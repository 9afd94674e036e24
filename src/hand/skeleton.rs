use super::joint::Joint;
use super::joint::JOINT_COUNT;
use super::point::Landmark;
use crate::Arbitrary;

/// One detected hand: exactly 21 landmarks in estimator index order.
///
/// The length invariant is enforced at construction. Anything other than 21
/// points is a precondition violation from the pose boundary and is rejected
/// there rather than classified into something silently wrong. Only the
/// first detected hand ever reaches this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Skeleton([Landmark; JOINT_COUNT]);

impl Skeleton {
    /// Landmark at an anatomical joint. Infallible by construction.
    pub fn at(&self, joint: Joint) -> Landmark {
        self.0[joint.index()]
    }
    /// The wrist, which doubles as the palm base in all distance checks.
    pub fn wrist(&self) -> Landmark {
        self.at(Joint::Wrist)
    }
}

impl From<[Landmark; JOINT_COUNT]> for Skeleton {
    fn from(landmarks: [Landmark; JOINT_COUNT]) -> Self {
        Self(landmarks)
    }
}

impl TryFrom<&[Landmark]> for Skeleton {
    type Error = String;
    fn try_from(landmarks: &[Landmark]) -> Result<Self, Self::Error> {
        <[Landmark; JOINT_COUNT]>::try_from(landmarks)
            .map(Self)
            .map_err(|_| format!("expected {} landmarks, got {}", JOINT_COUNT, landmarks.len()))
    }
}

impl TryFrom<Vec<Landmark>> for Skeleton {
    type Error = String;
    fn try_from(landmarks: Vec<Landmark>) -> Result<Self, Self::Error> {
        Self::try_from(landmarks.as_slice())
    }
}

impl Arbitrary for Skeleton {
    fn random() -> Self {
        Self(std::array::from_fn(|_| Landmark::random()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_landmark_sets() {
        let landmarks = vec![Landmark::default(); JOINT_COUNT - 1];
        assert!(Skeleton::try_from(landmarks).is_err());
    }

    #[test]
    fn rejects_long_landmark_sets() {
        let landmarks = vec![Landmark::default(); JOINT_COUNT + 1];
        assert!(Skeleton::try_from(landmarks).is_err());
    }

    #[test]
    fn rejects_empty_landmark_sets() {
        assert!(Skeleton::try_from(Vec::new()).is_err());
    }

    #[test]
    fn accepts_exactly_twenty_one() {
        let landmarks = vec![Landmark::default(); JOINT_COUNT];
        assert!(Skeleton::try_from(landmarks).is_ok());
    }

    #[test]
    fn joints_index_positionally() {
        let landmarks: Vec<Landmark> = (0..JOINT_COUNT)
            .map(|i| Landmark::from((i as f32 / 21.0, 0.5)))
            .collect();
        let skeleton = Skeleton::try_from(landmarks).expect("valid length");
        assert!(skeleton.at(Joint::ThumbTip).x() == 4.0 / 21.0);
        assert!(skeleton.at(Joint::PinkyTip).x() == 20.0 / 21.0);
    }
}
