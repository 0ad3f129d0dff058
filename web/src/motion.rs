//! Declarative animations compiled to CSS.
//!
//! A [`Motion`] is a set of per-property keyframe tracks. It renders to an
//! `@keyframes` rule, and a [`Transition`] decides how that rule is played
//! (duration, delay, easing, repeat). All presets used by the page are
//! collected into one stylesheet by [`stylesheet`].

use std::fmt::Write;

pub const CUBE_FLOAT_SECONDS: f64 = 18.0;
pub const LOGO_SPIN_SECONDS: f64 = 20.0;
pub const RISE_IN_SECONDS: f64 = 0.6;
pub const MARQUEE_SECONDS: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Px,
    Percent,
    Deg,
    None,
}

impl Unit {
    fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Percent => "%",
            Unit::Deg => "deg",
            Unit::None => "",
        }
    }
}

/// Animatable properties, in the order transforms are composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Property {
    X,
    Y,
    RotateX,
    RotateY,
    RotateZ,
    Opacity,
}

impl Property {
    fn default_unit(self) -> Unit {
        match self {
            Property::X | Property::Y => Unit::Px,
            Property::RotateX | Property::RotateY | Property::RotateZ => Unit::Deg,
            Property::Opacity => Unit::None,
        }
    }

    fn transform_function(self) -> Option<&'static str> {
        match self {
            Property::X => Some("translateX"),
            Property::Y => Some("translateY"),
            Property::RotateX => Some("rotateX"),
            Property::RotateY => Some("rotateY"),
            Property::RotateZ => Some("rotateZ"),
            Property::Opacity => None,
        }
    }
}

/// Keyframe values for a single property, spread evenly over the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    property: Property,
    unit: Unit,
    frames: Vec<f64>,
}

impl Track {
    /// A single target tweens from `initial`; several targets are used as-is.
    pub fn from_to(property: Property, initial: f64, target: &[f64]) -> Self {
        let frames = match target {
            [] => vec![initial],
            [only] => vec![initial, *only],
            many => many.to_vec(),
        };
        Self {
            property,
            unit: property.default_unit(),
            frames,
        }
    }

    /// Keeps the value constant for the whole timeline.
    pub fn hold(property: Property, value: f64) -> Self {
        Self::from_to(property, value, &[value])
    }

    pub fn in_percent(mut self) -> Self {
        self.unit = Unit::Percent;
        self
    }

    fn offsets(&self) -> Vec<f64> {
        let segments = self.frames.len().saturating_sub(1);
        if segments == 0 {
            return vec![0.0];
        }
        (0..=segments)
            .map(|i| i as f64 / segments as f64)
            .collect()
    }

    /// Linearly interpolated value at `offset` in `[0, 1]`.
    fn sample(&self, offset: f64) -> f64 {
        match self.frames.as_slice() {
            [] => 0.0,
            [only] => *only,
            frames => {
                let segments = frames.len() - 1;
                let position = offset.clamp(0.0, 1.0) * segments as f64;
                let index = (position.floor() as usize).min(segments - 1);
                let local = position - index as f64;
                frames[index] + (frames[index + 1] - frames[index]) * local
            }
        }
    }

    fn css_value(&self, offset: f64) -> String {
        format!("{}{}", format_number(self.sample(offset)), self.unit.suffix())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    EaseOut,
}

impl Ease {
    fn css(self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::EaseOut => "cubic-bezier(0, 0, 0.58, 1)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Infinite,
}

impl Repeat {
    fn css(self) -> &'static str {
        match self {
            Repeat::Once => "1",
            Repeat::Infinite => "infinite",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
    pub repeat: Repeat,
}

impl Transition {
    /// Linear and endless: the loop has no terminal state.
    pub fn looping(duration: f64) -> Self {
        Self {
            duration,
            delay: 0.0,
            ease: Ease::Linear,
            repeat: Repeat::Infinite,
        }
    }

    pub fn once(duration: f64, ease: Ease) -> Self {
        Self {
            duration,
            delay: 0.0,
            ease,
            repeat: Repeat::Once,
        }
    }

    pub fn delayed(self, delay: f64) -> Self {
        Self { delay, ..self }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Motion {
    name: &'static str,
    tracks: Vec<Track>,
}

impl Motion {
    pub fn new(name: &'static str, mut tracks: Vec<Track>) -> Self {
        tracks.sort_by_key(|track| track.property);
        Self { name, tracks }
    }

    /// Union of every track's keyframe offsets, ascending.
    fn offsets(&self) -> Vec<f64> {
        let mut offsets: Vec<f64> = self.tracks.iter().flat_map(Track::offsets).collect();
        offsets.sort_by(|a, b| a.total_cmp(b));
        offsets.dedup_by(|a, b| (*a - *b).abs() < 1e-9);
        offsets
    }

    pub fn keyframes_css(&self) -> String {
        let mut css = format!("@keyframes {} {{\n", self.name);
        for offset in self.offsets() {
            let transforms: Vec<String> = self
                .tracks
                .iter()
                .filter_map(|track| {
                    track
                        .property
                        .transform_function()
                        .map(|function| format!("{}({})", function, track.css_value(offset)))
                })
                .collect();

            let _ = write!(css, "  {}% {{", format_number(offset * 100.0));
            if !transforms.is_empty() {
                let _ = write!(css, " transform: {};", transforms.join(" "));
            }
            for track in self.tracks.iter().filter(|t| t.property == Property::Opacity) {
                let _ = write!(css, " opacity: {};", track.css_value(offset));
            }
            css.push_str(" }\n");
        }
        css.push('}');
        css
    }

    /// CSS `animation` shorthand. Fill mode `both` keeps the first keyframe
    /// in place while the delay runs.
    pub fn animation(&self, transition: &Transition) -> String {
        format!(
            "{} {}s {} {}s {} both",
            self.name,
            format_number(transition.duration),
            transition.ease.css(),
            format_number(transition.delay),
            transition.repeat.css(),
        )
    }
}

/// Hero cube: a full turn while bobbing up and fading in.
pub fn cube_float() -> Motion {
    Motion::new(
        "cube-float",
        vec![
            Track::hold(Property::RotateX, 25.0),
            Track::hold(Property::RotateY, -15.0),
            Track::from_to(Property::RotateZ, 0.0, &[360.0]),
            Track::from_to(Property::Y, 0.0, &[0.0, -20.0, 0.0]),
            Track::from_to(Property::Opacity, 0.0, &[1.0]),
        ],
    )
}

pub fn logo_spin() -> Motion {
    Motion::new(
        "logo-spin",
        vec![
            Track::hold(Property::RotateX, -15.0),
            Track::hold(Property::RotateY, 25.0),
            Track::from_to(Property::RotateZ, 0.0, &[360.0]),
        ],
    )
}

/// Hero copy entrance.
pub fn rise_in() -> Motion {
    Motion::new(
        "rise-in",
        vec![
            Track::from_to(Property::Opacity, 0.0, &[1.0]),
            Track::from_to(Property::Y, 20.0, &[0.0]),
        ],
    )
}

/// Scrolls half the strip; the strip holds two copies so the loop is seamless.
pub fn marquee_scroll() -> Motion {
    Motion::new(
        "marquee",
        vec![Track::from_to(Property::X, 0.0, &[-50.0]).in_percent()],
    )
}

/// Every keyframe rule the page uses.
pub fn stylesheet() -> String {
    [cube_float(), logo_spin(), rise_in(), marquee_scroll()]
        .iter()
        .map(Motion::keyframes_css)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Up to three decimals, trailing zeros dropped.
fn format_number(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    match formatted.trim_end_matches('0').trim_end_matches('.') {
        "-0" | "" => "0".to_string(),
        trimmed => trimmed.to_string(),
    }
}
