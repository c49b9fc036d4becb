//! Ordered step lists shared by sequences and campaigns.

use std::collections::BTreeSet;

use super::domain::{SequenceStep, StepDraft, StepId};
use crate::store::next_id;

fn new_step(order: u32, draft: StepDraft) -> SequenceStep {
    SequenceStep {
        id: StepId(next_id("step")),
        order,
        delay_days: draft.delay_days,
        variant_label: draft.variant_label,
        action: draft.action,
    }
}

/// Build a fresh step list, numbering drafts in the given order.
pub fn from_drafts(drafts: Vec<StepDraft>) -> Vec<SequenceStep> {
    drafts
        .into_iter()
        .zip(1..)
        .map(|(draft, order)| new_step(order, draft))
        .collect()
}

/// Append a step at `order = len + 1`.
pub fn append(steps: &mut Vec<SequenceStep>, draft: StepDraft) -> SequenceStep {
    let step = new_step(next_order(steps), draft);
    steps.push(step.clone());
    step
}

/// Remove a step and close the gap it leaves in the numbering.
pub fn remove(steps: &mut Vec<SequenceStep>, step_id: &StepId) -> bool {
    let before = steps.len();
    steps.retain(|step| &step.id != step_id);
    if steps.len() == before {
        return false;
    }
    renumber(steps);
    true
}

/// Validate client-supplied orders, then sort and renumber to `1..=n`.
pub fn normalize(mut steps: Vec<SequenceStep>) -> Result<Vec<SequenceStep>, StepOrderError> {
    let mut seen = BTreeSet::new();
    for step in &steps {
        if !seen.insert(step.order) {
            return Err(StepOrderError::DuplicateOrder(step.order));
        }
    }

    steps.sort_by_key(|step| step.order);
    renumber(&mut steps);
    Ok(steps)
}

pub fn has_connection_request(steps: &[SequenceStep]) -> bool {
    steps.iter().any(|step| step.action.is_connection_request())
}

fn next_order(steps: &[SequenceStep]) -> u32 {
    u32::try_from(steps.len()).map_or(u32::MAX, |len| len.saturating_add(1))
}

fn renumber(steps: &mut [SequenceStep]) {
    for (step, order) in steps.iter_mut().zip(1..) {
        step.order = order;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepOrderError {
    #[error("step order {0} is used more than once")]
    DuplicateOrder(u32),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::outreach::domain::StepAction;

    fn draft(action: StepAction) -> StepDraft {
        StepDraft {
            delay_days: None,
            variant_label: None,
            action,
        }
    }

    fn sample() -> Vec<SequenceStep> {
        from_drafts(vec![
            draft(StepAction::LinkedinVisit),
            draft(StepAction::Wait),
            draft(StepAction::connect("hello")),
        ])
    }

    fn orders(steps: &[SequenceStep]) -> Vec<u32> {
        steps.iter().map(|step| step.order).collect()
    }

    #[test]
    fn appended_steps_follow_the_last_order() {
        let mut steps = sample();
        let step = append(&mut steps, draft(StepAction::LinkedinLike));
        assert_eq!(step.order, 4);
        assert_eq!(orders(&steps), vec![1, 2, 3, 4]);
    }

    #[test]
    fn removing_a_middle_step_renumbers() {
        let mut steps = sample();
        let middle = steps[1].id.clone();
        assert!(remove(&mut steps, &middle));
        assert_eq!(orders(&steps), vec![1, 2]);
        assert!(steps[1].action.is_connection_request());
        assert!(!remove(&mut steps, &middle));
    }

    #[test]
    fn normalize_sorts_gappy_orders_and_rejects_duplicates() {
        let mut steps = sample();
        steps[0].order = 9;
        steps[1].order = 2;
        steps[2].order = 5;
        let normalized = normalize(steps.clone()).expect("unique orders");
        assert_eq!(orders(&normalized), vec![1, 2, 3]);
        assert_eq!(normalized[2].action, StepAction::LinkedinVisit);

        steps[2].order = 2;
        assert_eq!(normalize(steps), Err(StepOrderError::DuplicateOrder(2)));
    }

    #[test]
    fn detects_connection_requests() {
        assert!(has_connection_request(&sample()));
        assert!(!has_connection_request(&from_drafts(vec![draft(
            StepAction::Wait
        )])));
    }
}
