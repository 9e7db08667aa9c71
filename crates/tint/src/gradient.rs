//! Linear color interpolation for gradient spans.

use crate::color::Color;

/// Produce `count` colors stepping from `first` toward `second`.
///
/// Each channel advances by a fixed increment of `|second - first| / (count - 1)`
/// using truncating division, so the last color can fall short of `second`
/// by less than one step. A `count` of one yields just `first`; zero yields
/// nothing.
///
/// # Examples
///
/// ```
/// use tint::{Color, gradient::interpolate};
///
/// let colors = interpolate(Color::new(255, 0, 0), Color::new(0, 255, 0), 2);
/// assert_eq!(colors, vec![Color::new(255, 0, 0), Color::new(0, 255, 0)]);
/// ```
pub fn interpolate(first: Color, second: Color, count: usize) -> Vec<Color> {
    match count {
        0 => return Vec::new(),
        1 => return vec![first],
        _ => {}
    }

    let steps = (count - 1) as i64;
    let red = Channel::new(first.r, second.r, steps);
    let green = Channel::new(first.g, second.g, steps);
    let blue = Channel::new(first.b, second.b, steps);

    (0..count as i64)
        .map(|i| Color::new(red.at(i), green.at(i), blue.at(i)))
        .collect()
}

/// Per-channel increment and direction.
struct Channel {
    origin: i64,
    increment: i64,
    direction: i64,
}

impl Channel {
    fn new(from: u8, to: u8, steps: i64) -> Self {
        let (from, to) = (i64::from(from), i64::from(to));
        Self {
            origin: from,
            increment: (from - to).abs() / steps,
            direction: if from < to { 1 } else { -1 },
        }
    }

    fn at(&self, step: i64) -> u8 {
        (self.origin + self.increment * step * self.direction).clamp(0, 255) as u8
    }
}

/// Spread `count` colors over several stops, splitting the count evenly
/// between consecutive pairs of stops.
///
/// Two stops behave exactly like [`interpolate`]. A single stop fills every
/// position with that color.
pub fn interpolate_stops(stops: &[Color], count: usize) -> Vec<Color> {
    match stops {
        [] => Vec::new(),
        [only] => vec![*only; count],
        [first, second] => interpolate(*first, *second, count),
        _ => {
            let segments = stops.len() - 1;
            let mut colors = Vec::with_capacity(count);
            for (index, pair) in stops.windows(2).enumerate() {
                let len = (index + 1) * count / segments - index * count / segments;
                colors.extend(interpolate(pair[0], pair[1], len));
            }
            colors
        }
    }
}
