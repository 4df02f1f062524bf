// Cursor over a recorded frame sequence

use super::{FloydFrame, GraphFrame, SortFrame};
use crate::graph::GraphSnapshot;
use crate::sorting::SortAlgorithm;
use thiserror::Error;

/// Reasons a cursor move can be refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimelineError {
    #[error("no frames recorded")]
    Empty,
    #[error("already at the first frame")]
    AtStart,
    #[error("already at the last frame")]
    AtEnd,
}

/// Frames that carry a human-readable narration
pub trait Narrated {
    fn description(&self) -> &str;
}

impl Narrated for SortFrame {
    fn description(&self) -> &str {
        &self.description
    }
}

impl<V> Narrated for GraphFrame<V> {
    fn description(&self) -> &str {
        &self.description
    }
}

impl Narrated for FloydFrame {
    fn description(&self) -> &str {
        &self.description
    }
}

/// Object-safe view of a timeline, used by the player regardless of frame type
pub trait Seekable {
    fn position(&self) -> usize;
    fn len(&self) -> usize;
    fn step_forward(&mut self) -> Result<(), TimelineError>;
    fn step_backward(&mut self) -> Result<(), TimelineError>;
    fn seek(&mut self, index: usize) -> Result<usize, TimelineError>;
    fn narration(&self, index: usize) -> Option<&str>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_at_start(&self) -> bool {
        self.position() == 0
    }

    fn is_at_end(&self) -> bool {
        self.position() + 1 >= self.len()
    }

    fn rewind(&mut self) -> Result<usize, TimelineError> {
        self.seek(0)
    }

    fn jump_to_end(&mut self) -> Result<usize, TimelineError> {
        self.seek(usize::MAX)
    }
}

/// A recorded frame sequence plus the index of the frame on display
#[derive(Debug, Clone)]
pub struct Timeline<F> {
    frames: Vec<F>,
    position: usize,
}

impl<F> Timeline<F> {
    pub fn new(frames: Vec<F>) -> Self {
        Timeline {
            frames,
            position: 0,
        }
    }

    /// The frame under the cursor, `None` for an empty recording
    pub fn current(&self) -> Option<&F> {
        self.frames.get(self.position)
    }

    pub fn get(&self, index: usize) -> Option<&F> {
        self.frames.get(index)
    }

    pub fn frames(&self) -> &[F] {
        &self.frames
    }
}

impl<F: Narrated> Seekable for Timeline<F> {
    fn position(&self) -> usize {
        self.position
    }

    fn len(&self) -> usize {
        self.frames.len()
    }

    fn step_forward(&mut self) -> Result<(), TimelineError> {
        if self.frames.is_empty() {
            return Err(TimelineError::Empty);
        }
        if self.position + 1 >= self.frames.len() {
            return Err(TimelineError::AtEnd);
        }
        self.position += 1;
        Ok(())
    }

    fn step_backward(&mut self) -> Result<(), TimelineError> {
        if self.frames.is_empty() {
            return Err(TimelineError::Empty);
        }
        if self.position == 0 {
            return Err(TimelineError::AtStart);
        }
        self.position -= 1;
        Ok(())
    }

    /// Move to `index`, clamped to the last frame. Returns the new position.
    fn seek(&mut self, index: usize) -> Result<usize, TimelineError> {
        if self.frames.is_empty() {
            return Err(TimelineError::Empty);
        }
        self.position = index.min(self.frames.len() - 1);
        Ok(self.position)
    }

    fn narration(&self, index: usize) -> Option<&str> {
        self.frames.get(index).map(Narrated::description)
    }
}

/// A recorded run together with the static structure its frames refer to
#[derive(Debug, Clone)]
pub enum Trace {
    Sort {
        algorithm: SortAlgorithm,
        timeline: Timeline<SortFrame>,
    },
    Graph {
        title: String,
        graph: GraphSnapshot<String>,
        timeline: Timeline<GraphFrame<String>>,
    },
    Cycle {
        values: Vec<i64>,
        cycle_to_index: Option<usize>,
        timeline: Timeline<FloydFrame>,
    },
}

impl Trace {
    pub fn title(&self) -> String {
        match self {
            Trace::Sort { algorithm, .. } => algorithm.title().to_string(),
            Trace::Graph { title, .. } => title.clone(),
            Trace::Cycle { .. } => "Floyd Cycle Detection".to_string(),
        }
    }

    pub fn cursor(&self) -> &dyn Seekable {
        match self {
            Trace::Sort { timeline, .. } => timeline,
            Trace::Graph { timeline, .. } => timeline,
            Trace::Cycle { timeline, .. } => timeline,
        }
    }

    pub fn cursor_mut(&mut self) -> &mut dyn Seekable {
        match self {
            Trace::Sort { timeline, .. } => timeline,
            Trace::Graph { timeline, .. } => timeline,
            Trace::Cycle { timeline, .. } => timeline,
        }
    }

    /// Serialize the recorded frames as a JSON array
    pub fn frames_json(&self) -> crate::errors::Result<String> {
        let json = match self {
            Trace::Sort { timeline, .. } => serde_json::to_string_pretty(timeline.frames())?,
            Trace::Graph { timeline, .. } => serde_json::to_string_pretty(timeline.frames())?,
            Trace::Cycle { timeline, .. } => serde_json::to_string_pretty(timeline.frames())?,
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::bubble_sort_steps;

    #[test]
    fn test_step_and_bounds() {
        let mut timeline = Timeline::new(bubble_sort_steps(&[2, 1]));
        assert!(timeline.is_at_start());
        assert_eq!(timeline.step_backward(), Err(TimelineError::AtStart));
        while timeline.step_forward().is_ok() {}
        assert!(timeline.is_at_end());
        assert_eq!(timeline.step_forward(), Err(TimelineError::AtEnd));
        assert_eq!(timeline.current().unwrap().array, vec![1, 2]);
    }

    #[test]
    fn test_seek_is_clamped() {
        let mut timeline = Timeline::new(bubble_sort_steps(&[3, 1, 2]));
        let last = timeline.len() - 1;
        assert_eq!(timeline.seek(1000), Ok(last));
        assert_eq!(timeline.rewind(), Ok(0));
        assert_eq!(timeline.jump_to_end(), Ok(last));
    }

    #[test]
    fn test_frames_json_is_an_array_of_frames() {
        let trace = Trace::Sort {
            algorithm: SortAlgorithm::Bubble,
            timeline: Timeline::new(bubble_sort_steps(&[2, 1])),
        };
        let json = trace.frames_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let frames = parsed.as_array().unwrap();
        assert_eq!(frames.len(), trace.cursor().len());
        assert_eq!(frames[0]["type"], "init");
        assert_eq!(frames[frames.len() - 1]["array"], serde_json::json!([1, 2]));
    }

    #[test]
    fn test_empty_timeline_refuses_moves() {
        let mut timeline: Timeline<SortFrame> = Timeline::new(Vec::new());
        assert!(timeline.current().is_none());
        assert_eq!(timeline.step_forward(), Err(TimelineError::Empty));
        assert_eq!(timeline.seek(0), Err(TimelineError::Empty));
    }
}
