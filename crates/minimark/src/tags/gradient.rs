//! Color transitions across text: `<gradient>`, `<rainbow>` and `<transition>`.
//!
//! Gradients and rainbows recolor their content once the tag closes, one
//! grapheme at a time. Nodes inside the scope that set their own color keep
//! it, but still take up their share of the sequence.

use std::f64::consts::TAU;

use styled::{Color, Component, Content, NamedColor, Style};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::TagError;
use crate::parser::ArgumentQueue;
use crate::registry::{Modifier, Tag, TagContext, TagRegistryBuilder};

const DEFAULT_COLORS: [Color; 2] = [Color::Named(NamedColor::White), Color::Named(NamedColor::Black)];

/// A multi-stop linear gradient.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    colors: Vec<Color>,
    phase: f32,
}

impl Gradient {
    /// `colors` must hold at least two stops; `phase` is clamped to `[-1, 1]`.
    pub fn new(colors: Vec<Color>, phase: f32) -> Option<Self> {
        (colors.len() >= 2).then(|| Self {
            colors,
            phase: phase.clamp(-1.0, 1.0),
        })
    }

    /// Color of position `index` out of `size`.
    pub fn color_at(&self, index: usize, size: usize) -> Color {
        let t = if size <= 1 {
            0.0
        } else {
            index as f32 / (size - 1) as f32
        };
        let mut t = t + self.phase;
        // Shifted positions reflect back into range.
        if t > 1.0 {
            t = 2.0 - t;
        } else if t < 0.0 {
            t = -t;
        }
        sample(&self.colors, t)
    }
}

impl Modifier for Gradient {
    fn apply(&mut self, scope: Component) -> Component {
        let size = grapheme_count(&scope);
        let mut index = 0;
        recolor(scope, &mut index, &mut |i| self.color_at(i, size))
    }
}

/// A hue cycle over the whole scope.
#[derive(Clone, Debug, PartialEq)]
pub struct Rainbow {
    reversed: bool,
    phase: i32,
}

impl Rainbow {
    pub fn new(reversed: bool, phase: i32) -> Self {
        Self { reversed, phase }
    }

    pub fn color_at(&self, index: usize, size: usize) -> Color {
        let size = size.max(1);
        let index = if self.reversed {
            size - 1 - index.min(size - 1)
        } else {
            index
        };
        let frequency = TAU / size as f64;
        let position = frequency * index as f64 + f64::from(self.phase);
        let channel = |offset: f64| (((position + offset).sin() * 127.0) + 128.0).clamp(0.0, 255.0) as u8;
        Color::Rgb(channel(2.0), channel(0.0), channel(4.0))
    }
}

impl Modifier for Rainbow {
    fn apply(&mut self, scope: Component) -> Component {
        let size = grapheme_count(&scope);
        let mut index = 0;
        recolor(scope, &mut index, &mut |i| self.color_at(i, size))
    }
}

/// Interpolate along evenly spaced stops; `t` in `[0, 1]`.
fn sample(colors: &[Color], t: f32) -> Color {
    match colors {
        [] => Color::Named(NamedColor::White),
        [only] => *only,
        _ => {
            let scaled = t.clamp(0.0, 1.0) * (colors.len() - 1) as f32;
            let segment = (scaled.floor() as usize).min(colors.len() - 2);
            Color::lerp(scaled - segment as f32, colors[segment], colors[segment + 1])
        }
    }
}

fn grapheme_count(node: &Component) -> usize {
    let own = match node.content() {
        Content::Text(text) => text.graphemes(true).count(),
        _ => 0,
    };
    own + node.children().iter().map(grapheme_count).sum::<usize>()
}

fn recolor(node: Component, index: &mut usize, color_at: &mut dyn FnMut(usize) -> Color) -> Component {
    if node.style().color.is_some() {
        *index += grapheme_count(&node);
        return node;
    }

    let (content, style, children) = node.into_parts();
    let mut recolored = Vec::with_capacity(children.len());
    let content = match content {
        Content::Text(text) if !text.is_empty() => {
            for grapheme in text.graphemes(true) {
                recolored.push(Component::text(grapheme).with_style(Style::color(color_at(*index))));
                *index += 1;
            }
            Content::Text(String::new())
        }
        other => other,
    };
    for child in children {
        recolored.push(recolor(child, index, color_at));
    }
    Component::from_parts(content, style, recolored)
}

/// Colors and an optional trailing phase.
///
/// With no arguments the default white-to-black pair is used; otherwise at
/// least two colors are required.
fn colors_and_phase(args: &mut ArgumentQueue<'_>) -> Result<(Vec<Color>, f32), TagError> {
    if !args.has_next() {
        return Ok((DEFAULT_COLORS.to_vec(), 0.0));
    }

    let mut colors = Vec::new();
    let mut phase = 0.0;
    while let Some(arg) = args.pop() {
        if !args.has_next() {
            if let Some(value) = arg.as_float() {
                if !(-1.0..=1.0).contains(&value) {
                    return Err(args.error("phase must be within [-1, 1]"));
                }
                phase = value;
                break;
            }
        }
        colors.push(Color::parse(arg.value()).map_err(|err| args.error(err.to_string()))?);
    }

    if colors.len() < 2 {
        return Err(args.error("at least two colors are required"));
    }
    Ok((colors, phase))
}

fn gradient(_name: &str, args: &mut ArgumentQueue<'_>, _ctx: &TagContext<'_>) -> Result<Tag, TagError> {
    let (colors, phase) = colors_and_phase(args)?;
    match Gradient::new(colors, phase) {
        Some(gradient) => Ok(Tag::Modify(Box::new(gradient))),
        None => Err(args.error("at least two colors are required")),
    }
}

/// `<rainbow>`, `<rainbow:!>` (reversed), `<rainbow:3>`, `<rainbow:!3>`.
fn rainbow(_name: &str, args: &mut ArgumentQueue<'_>, _ctx: &TagContext<'_>) -> Result<Tag, TagError> {
    let (reversed, phase) = match args.pop() {
        None => (false, 0),
        Some(arg) => {
            let value = arg.value();
            let (reversed, phase) = match value.strip_prefix('!') {
                Some(rest) => (true, rest),
                None => (false, value),
            };
            let phase = if phase.is_empty() {
                0
            } else {
                phase
                    .parse()
                    .map_err(|_| args.error(format!("expected a phase, found '{phase}'")))?
            };
            (reversed, phase)
        }
    };
    args.finish()?;
    Ok(Tag::Modify(Box::new(Rainbow::new(reversed, phase))))
}

/// A single color picked from a gradient at `phase`; a negative phase walks
/// the stops in reverse.
fn transition(_name: &str, args: &mut ArgumentQueue<'_>, _ctx: &TagContext<'_>) -> Result<Tag, TagError> {
    let (mut colors, phase) = colors_and_phase(args)?;
    let t = if phase < 0.0 {
        colors.reverse();
        1.0 + phase
    } else {
        phase
    };
    Ok(Tag::Style(Style::color(sample(&colors, t))))
}

pub(super) fn register(builder: TagRegistryBuilder) -> TagRegistryBuilder {
    builder
        .register_fn(["gradient"], gradient)
        .register_fn(["rainbow"], rainbow)
        .register_fn(["transition"], transition)
}
