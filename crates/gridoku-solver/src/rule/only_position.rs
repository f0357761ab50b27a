use gridoku_core::{Digit, House};
use log::trace;

use crate::{
    Contradiction, WorkGrid,
    rule::{BoxedRule, Rule},
};

const NAME: &str = "only position";

/// Places digits that have a single possible cell left in some house.
///
/// The counterpart of the naked single: the cell itself may still show
/// several candidates, but every other cell of one of its houses has lost
/// the digit, so the placement is forced. A house with no cell left for a
/// digit proves the grid infeasible.
#[derive(Debug, Clone, Copy, Default)]
pub struct OnlyPosition {}

impl OnlyPosition {
    /// Creates the rule.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Rule for OnlyPosition {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut WorkGrid) -> Result<bool, Contradiction> {
        let mut changed = false;
        for house in House::ALL {
            for digit in Digit::ALL {
                let mut spots = house
                    .positions()
                    .into_iter()
                    .filter(|&pos| grid.candidates_at(pos).contains(digit));
                match (spots.next(), spots.next()) {
                    (None, _) => return Err(Contradiction),
                    (Some(pos), None) => {
                        if grid.candidates_at(pos).len() > 1 {
                            trace!("{digit} fits only {pos} in {house}");
                            grid.assign(pos, digit);
                            changed = true;
                        }
                    }
                    _ => {}
                }
            }
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use gridoku_core::Position;

    use super::*;

    #[test]
    fn test_no_progress_on_fresh_grid() {
        let rule = OnlyPosition::new();
        let mut grid = WorkGrid::new();
        assert_eq!(rule.apply(&mut grid), Ok(false));
    }

    #[test]
    fn test_places_digit_with_one_cell_left_in_row() {
        let rule = OnlyPosition::new();
        let mut grid = WorkGrid::new();
        // Remove 4 from every cell of row 2 except (2, 6).
        for col in 0..9 {
            if col != 6 {
                grid.eliminate(Position::new(2, col), Digit::D4).unwrap();
            }
        }

        assert_eq!(rule.apply(&mut grid), Ok(true));
        assert_eq!(grid.decided_at(Position::new(2, 6)), Some(Digit::D4));
        assert!(grid.has_queued());
    }

    #[test]
    fn test_places_digit_with_one_cell_left_in_column() {
        let rule = OnlyPosition::new();
        let mut grid = WorkGrid::new();
        for row in 0..9 {
            if row != 3 {
                grid.eliminate(Position::new(row, 7), Digit::D8).unwrap();
            }
        }

        assert_eq!(rule.apply(&mut grid), Ok(true));
        assert_eq!(grid.decided_at(Position::new(3, 7)), Some(Digit::D8));
    }

    #[test]
    fn test_places_digit_with_one_cell_left_in_block() {
        let rule = OnlyPosition::new();
        let mut grid = WorkGrid::new();
        let block = House::Block { index: 4 };
        for pos in block.positions() {
            if pos != Position::new(4, 4) {
                grid.eliminate(pos, Digit::D1).unwrap();
            }
        }

        assert_eq!(rule.apply(&mut grid), Ok(true));
        assert_eq!(grid.decided_at(Position::new(4, 4)), Some(Digit::D1));
    }

    #[test]
    fn test_decided_cell_is_left_alone() {
        let rule = OnlyPosition::new();
        let mut grid = WorkGrid::new();
        grid.assign(Position::new(0, 0), Digit::D3);
        // The assigned cell is the only spot for 3 in its houses that is
        // already decided; the rule must not touch or requeue it.
        for col in 1..9 {
            grid.eliminate(Position::new(0, col), Digit::D3).unwrap();
        }
        grid.pop_queued();

        assert_eq!(rule.apply(&mut grid), Ok(false));
        assert!(!grid.has_queued());
    }

    #[test]
    fn test_digit_with_no_cell_left_contradicts() {
        let rule = OnlyPosition::new();
        let mut grid = WorkGrid::new();
        for col in 0..9 {
            grid.eliminate(Position::new(0, col), Digit::D5).unwrap();
        }

        assert_eq!(rule.apply(&mut grid), Err(Contradiction));
    }
}
