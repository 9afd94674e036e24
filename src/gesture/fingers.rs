use crate::hand::Finger;
use crate::hand::Joint;
use crate::hand::Skeleton;
use crate::EXTENSION_MARGIN;
use crate::EXTENSION_RATIO;
use crate::THUMB_SPREAD;

/// Extension flags for the five digits of one hand, plus derived counts.
///
/// Derived deterministically from a [`Skeleton`]; never persisted. The
/// classifier counts the four non-thumb digits separately from the thumb
/// because thumb detection is the noisier signal.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct Fingers {
    thumb: bool,
    index: bool,
    middle: bool,
    ring: bool,
    pinky: bool,
}

impl Fingers {
    pub fn thumb(&self) -> bool {
        self.thumb
    }
    pub fn index(&self) -> bool {
        self.index
    }
    pub fn middle(&self) -> bool {
        self.middle
    }
    pub fn ring(&self) -> bool {
        self.ring
    }
    pub fn pinky(&self) -> bool {
        self.pinky
    }
    /// Extended non-thumb digits.
    pub fn extended(&self) -> usize {
        [self.index, self.middle, self.ring, self.pinky]
            .iter()
            .filter(|up| **up)
            .count()
    }
    /// All extended digits, thumb included.
    pub fn total(&self) -> usize {
        self.extended() + if self.thumb { 1 } else { 0 }
    }
}

impl From<&Skeleton> for Fingers {
    fn from(skeleton: &Skeleton) -> Self {
        Self {
            thumb: Self::thumb_extended(skeleton),
            index: Self::digit_extended(skeleton, Finger::Index),
            middle: Self::digit_extended(skeleton, Finger::Middle),
            ring: Self::digit_extended(skeleton, Finger::Ring),
            pinky: Self::digit_extended(skeleton, Finger::Pinky),
        }
    }
}

/// (thumb, index, middle, ring, pinky)
impl From<(bool, bool, bool, bool, bool)> for Fingers {
    fn from((thumb, index, middle, ring, pinky): (bool, bool, bool, bool, bool)) -> Self {
        Self {
            thumb,
            index,
            middle,
            ring,
            pinky,
        }
    }
}

impl Fingers {
    /// A digit is extended iff its tip clears the PIP joint vertically by
    /// [`EXTENSION_MARGIN`] AND sits at least [`EXTENSION_RATIO`] of the
    /// PIP's wrist distance away from the wrist. Assumes an upright hand;
    /// smaller y means higher in the image.
    fn digit_extended(skeleton: &Skeleton, finger: Finger) -> bool {
        let wrist = skeleton.wrist();
        let tip = skeleton.at(finger.tip());
        let pip = skeleton.at(finger.pip());
        let vertical = tip.y() < pip.y() - EXTENSION_MARGIN;
        let radial = tip.distance(&wrist) > pip.distance(&wrist) * EXTENSION_RATIO;
        vertical && radial
    }
    /// The thumb extends laterally, not vertically: its tip must be farther
    /// from the palm than the IP joint AND offset horizontally from the
    /// wrist by at least [`THUMB_SPREAD`].
    fn thumb_extended(skeleton: &Skeleton) -> bool {
        let wrist = skeleton.wrist();
        let tip = skeleton.at(Joint::ThumbTip);
        let ip = skeleton.at(Joint::ThumbIp);
        let radial = tip.distance(&wrist) > ip.distance(&wrist);
        let lateral = (tip.x() - wrist.x()).abs() > THUMB_SPREAD;
        radial && lateral
    }
}

impl std::fmt::Display for Fingers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (up, mark) in [
            (self.thumb, 'T'),
            (self.index, 'I'),
            (self.middle, 'M'),
            (self.ring, 'R'),
            (self.pinky, 'P'),
        ] {
            write!(f, "{}", if up { mark } else { '-' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::synthetic;

    #[test]
    fn counts_exclude_the_thumb() {
        let fingers = Fingers::from((true, true, true, false, false));
        assert!(fingers.extended() == 2);
        assert!(fingers.total() == 3);
    }

    #[test]
    fn open_hand_extends_all_five() {
        let fingers = Fingers::from(&synthetic::palm());
        assert!(fingers.extended() == 4);
        assert!(fingers.total() == 5);
    }

    #[test]
    fn fist_extends_none() {
        let fingers = Fingers::from(&synthetic::fist());
        assert!(fingers == Fingers::default());
    }

    #[test]
    fn tip_below_pip_fails_the_vertical_check() {
        // splay has the pinky curled back below its PIP while its neighbors extend
        let fingers = Fingers::from(&synthetic::splay());
        assert!(fingers.ring());
        assert!(!fingers.pinky());
    }

    #[test]
    fn tucked_thumb_fails_the_radial_check() {
        let fingers = Fingers::from(&synthetic::victory());
        assert!(!fingers.thumb());
    }

    #[test]
    fn renders_extension_marks() {
        let fingers = Fingers::from((false, true, true, false, false));
        assert!(format!("{}", fingers) == "-IM--");
    }
}
