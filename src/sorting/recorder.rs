// Frame accumulator shared by the sort recorders

use crate::frame::{SortEvent, SortFrame};

/// Working copy of the input plus the frames recorded so far.
///
/// Every method that mutates `values` records the resulting frame, so a
/// recorder cannot drift out of sync with its own trace.
pub(crate) struct Recorder {
    pub values: Vec<i64>,
    frames: Vec<SortFrame>,
}

impl Recorder {
    /// Copy `input` and record the `init` frame
    pub fn start(input: &[i64], description: impl Into<String>) -> Self {
        let mut recorder = Recorder {
            values: input.to_vec(),
            frames: Vec::new(),
        };
        recorder.frame(SortEvent::Init, &[], &[], &[], description);
        recorder
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn frame(
        &mut self,
        kind: SortEvent,
        comparison: &[usize],
        swap: &[usize],
        pivot: &[usize],
        description: impl Into<String>,
    ) {
        self.frames.push(SortFrame {
            array: self.values.clone(),
            comparison: comparison.to_vec(),
            swap: swap.to_vec(),
            pivot: pivot.to_vec(),
            kind,
            description: description.into(),
        });
    }

    pub fn compare(&mut self, i: usize, j: usize, description: impl Into<String>) {
        self.frame(SortEvent::Compare, &[i, j], &[], &[], description);
    }

    pub fn select(&mut self, index: usize, description: impl Into<String>) {
        self.frame(SortEvent::Select, &[index], &[], &[], description);
    }

    /// Exchange two positions and record a `swap` frame
    pub fn swap(&mut self, i: usize, j: usize, description: impl Into<String>) {
        self.values.swap(i, j);
        self.frame(SortEvent::Swap, &[], &[i, j], &[], description);
    }

    /// Store a staged value at `index` and record a `write` frame
    pub fn write(&mut self, index: usize, value: i64, description: impl Into<String>) {
        self.values[index] = value;
        self.frame(SortEvent::Write, &[], &[index], &[], description);
    }

    /// Copy `values[from]` into `values[to]` and record a `write` frame
    pub fn shift(&mut self, from: usize, to: usize, description: impl Into<String>) {
        self.values[to] = self.values[from];
        self.frame(SortEvent::Write, &[], &[from, to], &[], description);
    }

    /// Record the `done` frame and hand back the trace
    pub fn finish(mut self, description: impl Into<String>) -> Vec<SortFrame> {
        self.frame(SortEvent::Done, &[], &[], &[], description);
        tracing::debug!(frames = self.frames.len(), "sort trace recorded");
        self.frames
    }
}
