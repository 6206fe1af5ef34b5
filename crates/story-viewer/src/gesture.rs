/// Input from the display surface over the story content area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Tap at horizontal position `x` in a content area `width` wide.
    Tap { x: f64, width: f64 },
    /// Finished drag with the given translation.
    Drag { dx: f64, dy: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Advance,
    Retreat,
}

impl Gesture {
    /// Left half of the area retreats, right half advances. Drags shorter than
    /// `drag_min_distance` are not recognized; a leftward drag advances.
    pub fn navigation(&self, drag_min_distance: f64) -> Option<Navigation> {
        match *self {
            Gesture::Tap { x, width } => {
                if x < width / 2.0 {
                    Some(Navigation::Retreat)
                } else {
                    Some(Navigation::Advance)
                }
            }
            Gesture::Drag { dx, dy } => {
                if dx.hypot(dy) < drag_min_distance {
                    return None;
                }

                if dx < 0.0 {
                    Some(Navigation::Advance)
                } else if dx > 0.0 {
                    Some(Navigation::Retreat)
                } else {
                    None
                }
            }
        }
    }
}
