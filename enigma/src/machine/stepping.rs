use crate::{Rotor, RotorError};

/// Which slots advance on the next key press.
///
/// Every decision reads the settings as they were before the press, then all
/// flagged slots advance together. A slot is eligible to step only if it is
/// one of the rightmost `pawls` slots, is not slot 0, and its rotor moves.
///
/// The rightmost slot steps whenever it is eligible. A slot at its notch
/// pushes its left neighbour and is itself pushed along with it, which is
/// what makes the middle rotor step on two consecutive presses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StepPlan {
    steps: Vec<bool>,
}

impl StepPlan {
    pub(crate) fn compute(slots: &[Rotor], pawls: usize) -> Self {
        let count = slots.len();
        let mut steps = vec![false; count];
        let first_pawl = count.saturating_sub(pawls);
        let eligible = |slot: usize| slot >= 1 && slot >= first_pawl && slots[slot].rotates();

        if count > 0 && eligible(count - 1) {
            steps[count - 1] = true;
        }
        for slot in (2..count).rev() {
            if slots[slot].at_notch() && eligible(slot - 1) {
                steps[slot - 1] = true;
                steps[slot] = true;
            }
        }

        Self { steps }
    }

    pub(crate) fn apply(&self, slots: &mut [Rotor]) -> Result<(), RotorError> {
        for (rotor, _) in slots
            .iter_mut()
            .zip(&self.steps)
            .filter(|(_, steps)| **steps)
        {
            rotor.advance()?;
        }
        Ok(())
    }

    pub(crate) fn stepping_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.steps
            .iter()
            .enumerate()
            .filter(|(_, steps)| **steps)
            .map(|(slot, _)| slot)
    }
}
