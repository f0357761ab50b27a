use gridoku_core::{CandidateGrid, DigitSet, Position};

/// One tentative choice made during search.
///
/// Holds everything needed to retry or undo the choice: the domains as they
/// stood at the propagation fixpoint before it, the cell branched on, and
/// the candidates already tried there.
#[derive(Debug, Clone)]
pub(crate) struct Frame {
    pub(crate) snapshot: CandidateGrid,
    pub(crate) cell: Position,
    pub(crate) tried: DigitSet,
}

impl Frame {
    pub(crate) fn new(snapshot: CandidateGrid, cell: Position) -> Self {
        Self {
            snapshot,
            cell,
            tried: DigitSet::EMPTY,
        }
    }

    /// The candidates at the branch cell not yet attempted.
    pub(crate) fn untried(&self) -> DigitSet {
        self.snapshot.candidates_at(self.cell).difference(self.tried)
    }
}

/// Stack of in-flight choices. The depth equals the number of tentative
/// assignments the current grid state rests on.
#[derive(Debug, Default)]
pub(crate) struct Trail {
    frames: Vec<Frame>,
}

impl Trail {
    pub(crate) fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub(crate) fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub(crate) fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    pub(crate) fn top_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use gridoku_core::Digit;

    use super::*;

    #[test]
    fn test_untried_shrinks_as_digits_are_tried() {
        let cell = Position::new(0, 0);
        let mut snapshot = CandidateGrid::new();
        snapshot.eliminate(cell, Digit::D1);

        let mut frame = Frame::new(snapshot, cell);
        assert_eq!(frame.untried().len(), 8);
        assert_eq!(frame.untried().smallest(), Some(Digit::D2));

        frame.tried.insert(Digit::D2);
        assert_eq!(frame.untried().len(), 7);
        assert_eq!(frame.untried().smallest(), Some(Digit::D3));
    }

    #[test]
    fn test_stack_order() {
        let mut trail = Trail::new();
        assert_eq!(trail.depth(), 0);
        assert!(trail.top_mut().is_none());

        trail.push(Frame::new(CandidateGrid::new(), Position::new(0, 0)));
        trail.push(Frame::new(CandidateGrid::new(), Position::new(1, 1)));
        assert_eq!(trail.depth(), 2);
        assert_eq!(trail.top_mut().unwrap().cell, Position::new(1, 1));

        let popped = trail.pop().unwrap();
        assert_eq!(popped.cell, Position::new(1, 1));
        assert_eq!(trail.depth(), 1);
    }
}
