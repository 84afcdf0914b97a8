//! Text Gantt chart rendering.
//!
//! Turns a timeline into a two-line chart: a bar line with one `|`-delimited
//! bar per merged interval (idle gaps filled), and an axis line labelling
//! every bar boundary with its time value.
//!
//! ```text
//! |A|B|C| B |   A   |
//! 0 1 2 3   5       9
//! ```
//!
//! Rendering is display-only; it never alters scheduling results.

use crate::models::Timeline;

/// Chart layout options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartConfig {
    /// Columns per time unit (>= 1).
    pub scale: usize,
    /// Character used to fill idle gaps.
    pub idle_fill: char,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            scale: 4,
            idle_fill: '.',
        }
    }
}

impl ChartConfig {
    /// Sets the columns per time unit (clamped to at least 1).
    pub fn with_scale(mut self, scale: usize) -> Self {
        self.scale = scale.max(1);
        self
    }

    /// Sets the idle fill character.
    pub fn with_idle_fill(mut self, fill: char) -> Self {
        self.idle_fill = fill;
        self
    }
}

/// One bar of the chart. `label` is `None` for idle time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GanttBar {
    /// Process shown in the bar.
    pub label: Option<String>,
    /// Start time.
    pub start: i64,
    /// End time.
    pub end: i64,
}

/// A Gantt chart laid out from t=0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GanttChart {
    bars: Vec<GanttBar>,
}

impl GanttChart {
    /// Lays out a timeline: contiguous units of one process become a single
    /// bar and idle spans become unlabelled bars.
    pub fn from_timeline(timeline: &Timeline) -> Self {
        let mut bars = Vec::new();
        let mut cursor = 0;
        for interval in timeline.merged() {
            if interval.start > cursor {
                bars.push(GanttBar {
                    label: None,
                    start: cursor,
                    end: interval.start,
                });
            }
            cursor = interval.end;
            bars.push(GanttBar {
                label: Some(interval.id),
                start: interval.start,
                end: interval.end,
            });
        }
        Self { bars }
    }

    /// Bars in time order.
    pub fn bars(&self) -> &[GanttBar] {
        &self.bars
    }

    /// Renders the bar line and the axis line, separated by a newline.
    ///
    /// An empty chart renders as an empty string.
    pub fn render(&self, config: &ChartConfig) -> String {
        if self.bars.is_empty() {
            return String::new();
        }

        let scale = config.scale.max(1);
        let mut bar_line = String::from("|");
        let mut axis_line = String::new();
        push_axis_label(&mut axis_line, 0, scale);

        for bar in &self.bars {
            let width = columns(bar.end - bar.start, scale).saturating_sub(1);
            match &bar.label {
                Some(label) => bar_line.push_str(&center(label, width)),
                None => bar_line.extend(std::iter::repeat(config.idle_fill).take(width)),
            }
            bar_line.push('|');
            push_axis_label(&mut axis_line, bar.end, scale);
        }

        format!("{bar_line}\n{axis_line}")
    }
}

fn columns(time: i64, scale: usize) -> usize {
    usize::try_from(time).unwrap_or(0).saturating_mul(scale)
}

/// Writes `time` at its column unless it would collide with the previous label.
fn push_axis_label(axis: &mut String, time: i64, scale: usize) {
    let col = columns(time, scale);
    let len = axis.chars().count();
    if len > 0 && col <= len {
        return;
    }
    axis.extend(std::iter::repeat(' ').take(col - len));
    axis.push_str(&time.to_string());
}

fn center(label: &str, width: usize) -> String {
    let text: String = label.chars().take(width).collect();
    let len = text.chars().count();
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
