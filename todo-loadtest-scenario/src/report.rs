//! Per-step outcomes of an iteration or a cleanup

use crate::step::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Passed,
    Failed,
    Skipped,
}

/// What happened to each step, in the order the steps were considered
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IterationReport {
    outcomes: Vec<(Step, StepStatus)>,
}

impl IterationReport {
    pub fn record(&mut self, step: Step, status: StepStatus) {
        self.outcomes.push((step, status));
    }

    pub fn skip_all(&mut self, steps: &[Step]) {
        for step in steps {
            self.record(*step, StepStatus::Skipped);
        }
    }

    pub fn outcomes(&self) -> &[(Step, StepStatus)] {
        &self.outcomes
    }

    /// Status of the last occurrence of `step`
    pub fn status_of(&self, step: Step) -> Option<StepStatus> {
        self.outcomes
            .iter()
            .rev()
            .find(|(recorded, _)| *recorded == step)
            .map(|(_, status)| *status)
    }

    pub fn count(&self, status: StepStatus) -> usize {
        self.outcomes.iter().filter(|(_, s)| *s == status).count()
    }

    /// Steps that actually sent a request
    pub fn executed(&self) -> usize {
        self.outcomes.len() - self.count(StepStatus::Skipped)
    }

    pub fn has_failures(&self) -> bool {
        self.count(StepStatus::Failed) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut report = IterationReport::default();
        report.record(Step::ListAll, StepStatus::Passed);
        report.record(Step::CreateList, StepStatus::Failed);
        report.skip_all(&[Step::GetList, Step::UpdateList]);

        assert_eq!(report.executed(), 2);
        assert_eq!(report.count(StepStatus::Skipped), 2);
        assert!(report.has_failures());
        assert_eq!(report.status_of(Step::UpdateList), Some(StepStatus::Skipped));
        assert_eq!(report.status_of(Step::DeleteList), None);
    }
}
