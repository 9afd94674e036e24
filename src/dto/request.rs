use crate::hand::Landmark;
use crate::hand::Skeleton;
use crate::Coordinate;
use serde::Deserialize;
use serde::Serialize;

/// One frame's worth of pose-estimator output: either no hand, or a list
/// of `[x, y]` pairs in estimator index order. The length contract is
/// checked at conversion, not here, so a malformed frame deserializes fine
/// and then fails fast.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    #[serde(default)]
    landmarks: Option<Vec<[Coordinate; 2]>>,
}

impl Frame {
    /// No hand detected this frame.
    pub fn empty() -> Self {
        Self::default()
    }
    /// Convert into the typed skeleton. `Ok(None)` is the no-hand case;
    /// any landmark count other than 21 is a precondition violation.
    pub fn skeleton(&self) -> Result<Option<Skeleton>, String> {
        match &self.landmarks {
            None => Ok(None),
            Some(points) => points
                .iter()
                .copied()
                .map(Landmark::from)
                .collect::<Vec<Landmark>>()
                .try_into()
                .map(Some),
        }
    }
}

impl From<&Skeleton> for Frame {
    fn from(skeleton: &Skeleton) -> Self {
        Self {
            landmarks: Some(
                (0..crate::hand::JOINT_COUNT)
                    .map(|i| skeleton.at(crate::hand::Joint::from(i)))
                    .map(|p| [p.x(), p.y()])
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::synthetic;

    #[test]
    fn absent_hand_is_not_an_error() {
        assert!(Frame::empty().skeleton() == Ok(None));
    }

    #[test]
    fn wrong_length_fails_fast() {
        let frame: Frame =
            serde_json::from_str(r#"{"landmarks": [[0.1, 0.2], [0.3, 0.4]]}"#).unwrap();
        assert!(frame.skeleton().is_err());
    }

    #[test]
    fn skeletons_roundtrip_through_frames() {
        let skeleton = synthetic::victory();
        let frame = Frame::from(&skeleton);
        assert!(frame.skeleton() == Ok(Some(skeleton)));
    }

    #[test]
    fn null_landmarks_deserialize_as_no_hand() {
        let frame: Frame = serde_json::from_str("{}").unwrap();
        assert!(frame == Frame::empty());
    }
}
