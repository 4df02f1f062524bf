//! Recorded frames
//!
//! Every recorder in this crate returns an eagerly built `Vec` of frames.
//! A frame is a self-contained snapshot, so a player can jump to any index
//! without replaying the ones before it:
//! - [`SortFrame`]: the whole array plus the indices being compared, moved or pivoted
//! - [`GraphFrame`]: the vertices to highlight; the graph itself is static during a run
//! - [`FloydFrame`]: slow/fast pointer positions over a simulated linked list
//!
//! [`timeline`] provides the cursor used to walk a recorded sequence.

pub mod timeline;

use serde::Serialize;
use std::fmt;

pub use timeline::{Timeline, TimelineError, Trace};

/// Classification of a sort frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortEvent {
    Init,
    Compare,
    Swap,
    Write,
    Select,
    Pivot,
    Inspect,
    Done,
}

impl SortEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            SortEvent::Init => "init",
            SortEvent::Compare => "compare",
            SortEvent::Swap => "swap",
            SortEvent::Write => "write",
            SortEvent::Select => "select",
            SortEvent::Pivot => "pivot",
            SortEvent::Inspect => "inspect",
            SortEvent::Done => "done",
        }
    }
}

impl fmt::Display for SortEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a sort at one point in its execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortFrame {
    /// The entire array, not a diff
    pub array: Vec<i64>,
    pub comparison: Vec<usize>,
    pub swap: Vec<usize>,
    pub pivot: Vec<usize>,
    #[serde(rename = "type")]
    pub kind: SortEvent,
    pub description: String,
}

/// Classification of a graph frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphEvent {
    Init,
    Visit,
    Dequeue,
    Enqueue,
    Inspect,
    Push,
    Backtrack,
    Relax,
    Pivot,
    Add,
    Skip,
    Cycle,
    Conflict,
    Component,
    Path,
    Done,
}

impl GraphEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            GraphEvent::Init => "init",
            GraphEvent::Visit => "visit",
            GraphEvent::Dequeue => "dequeue",
            GraphEvent::Enqueue => "enqueue",
            GraphEvent::Inspect => "inspect",
            GraphEvent::Push => "push",
            GraphEvent::Backtrack => "backtrack",
            GraphEvent::Relax => "relax",
            GraphEvent::Pivot => "pivot",
            GraphEvent::Add => "add",
            GraphEvent::Skip => "skip",
            GraphEvent::Cycle => "cycle",
            GraphEvent::Conflict => "conflict",
            GraphEvent::Component => "component",
            GraphEvent::Path => "path",
            GraphEvent::Done => "done",
        }
    }
}

impl fmt::Display for GraphEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of a graph algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphFrame<V> {
    pub highlighted_nodes: Vec<V>,
    #[serde(rename = "type")]
    pub kind: GraphEvent,
    pub description: String,
}

impl<V> GraphFrame<V> {
    pub fn new(highlighted_nodes: Vec<V>, kind: GraphEvent, description: impl Into<String>) -> Self {
        GraphFrame {
            highlighted_nodes,
            kind,
            description: description.into(),
        }
    }
}

/// Classification of a cycle-detection frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FloydEvent {
    Init,
    Move,
    Meet,
    Done,
}

impl fmt::Display for FloydEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FloydEvent::Init => "init",
            FloydEvent::Move => "move",
            FloydEvent::Meet => "meet",
            FloydEvent::Done => "done",
        })
    }
}

/// Pointer positions during Floyd's cycle detection.
///
/// `None` means the pointer ran off the end of the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FloydFrame {
    pub slow: Option<usize>,
    pub fast: Option<usize>,
    #[serde(rename = "type")]
    pub kind: FloydEvent,
    pub description: String,
}

/// Operation counts over a sort trace
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraceMetrics {
    pub comparisons: usize,
    pub swaps: usize,
    pub writes: usize,
}

impl TraceMetrics {
    pub fn from_frames(frames: &[SortFrame]) -> Self {
        frames.iter().fold(TraceMetrics::default(), |mut acc, frame| {
            match frame.kind {
                SortEvent::Compare => acc.comparisons += 1,
                SortEvent::Swap => acc.swaps += 1,
                SortEvent::Write => acc.writes += 1,
                _ => {}
            }
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(kind: SortEvent) -> SortFrame {
        SortFrame {
            array: vec![1, 2],
            comparison: Vec::new(),
            swap: Vec::new(),
            pivot: Vec::new(),
            kind,
            description: String::new(),
        }
    }

    #[test]
    fn test_metrics_count_by_kind() {
        let frames = vec![
            frame(SortEvent::Init),
            frame(SortEvent::Compare),
            frame(SortEvent::Compare),
            frame(SortEvent::Swap),
            frame(SortEvent::Write),
            frame(SortEvent::Select),
            frame(SortEvent::Done),
        ];
        let metrics = TraceMetrics::from_frames(&frames);
        assert_eq!(metrics.comparisons, 2);
        assert_eq!(metrics.swaps, 1);
        assert_eq!(metrics.writes, 1);
    }

    #[test]
    fn test_sort_frame_json_shape() {
        let json = serde_json::to_value(frame(SortEvent::Compare)).unwrap();
        assert_eq!(json["type"], "compare");
        assert_eq!(json["array"], serde_json::json!([1, 2]));
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_graph_frame_json_shape() {
        let frame = GraphFrame::new(vec!["A".to_string()], GraphEvent::Visit, "Visit A");
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["highlightedNodes"], serde_json::json!(["A"]));
        assert_eq!(json["type"], "visit");
    }
}
