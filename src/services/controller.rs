//! Drives a session from an input source to a presentation sink
//!
//! The controller mirrors the input source into the session, keeps the live
//! total and custom-split feedback rendered, and on `calculate` renders
//! either the result plus a fresh tip sample or exactly one error message.

use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use super::session::BudgetSession;
use super::tips::TipSelector;
use crate::error::FinanzResult;
use crate::interface::{InputSource, PresentationSink};
use crate::models::{BudgetResult, Profile, Tip};

/// Mediates between an input source, a session and a presentation sink
pub struct BudgetController<R: Rng = StdRng> {
    session: BudgetSession,
    selector: TipSelector<R>,
    tip_count: usize,
    last_tips: Vec<Tip>,
}

impl BudgetController<StdRng> {
    /// Controller with the profile's default tip count and an OS-seeded sampler
    pub fn new(profile: Profile) -> Self {
        Self::with_selector(profile, TipSelector::new())
    }
}

impl<R: Rng> BudgetController<R> {
    pub fn with_selector(profile: Profile, selector: TipSelector<R>) -> Self {
        Self {
            session: BudgetSession::new(profile),
            selector,
            tip_count: profile.default_tip_count(),
            last_tips: Vec::new(),
        }
    }

    /// Override how many tips are shown after a computation
    pub fn with_tip_count(mut self, tip_count: usize) -> Self {
        self.tip_count = tip_count;
        self
    }

    pub fn session(&self) -> &BudgetSession {
        &self.session
    }

    pub fn tip_count(&self) -> usize {
        self.tip_count
    }

    /// Tips shown with the last successful computation
    pub fn last_tips(&self) -> &[Tip] {
        &self.last_tips
    }

    /// Copy the input source into the session and render live feedback
    pub fn refresh<I, S>(&mut self, input: &I, sink: &mut S) -> FinanzResult<()>
    where
        I: InputSource + ?Sized,
        S: PresentationSink + ?Sized,
    {
        for index in 0..self.session.contributors().len() {
            let fields = input.contributor_input(index);
            self.session.set_contributor_name(index, &fields.name)?;
            self.session
                .set_contributor_income(index, &fields.raw_income)?;
        }
        sink.render_total(self.session.total_income());

        match input.selected_method_id() {
            Some(id) => {
                let method = match self.session.select_method_id(&id) {
                    Ok(method) => method,
                    Err(err) => {
                        self.session.clear_method();
                        return Err(err);
                    }
                };
                if method.is_custom() {
                    let raw = input.custom_percentages();
                    let validation =
                        self.session
                            .set_custom_percentages(&raw.needs, &raw.wants, &raw.savings);
                    sink.render_validation_state(validation.valid, validation.total);
                }
            }
            None => self.session.clear_method(),
        }

        debug!(stage = ?self.session.stage(), "session refreshed");
        Ok(())
    }

    /// Refresh, compute and render the outcome
    pub fn calculate<I, S>(&mut self, input: &I, sink: &mut S) -> FinanzResult<BudgetResult>
    where
        I: InputSource + ?Sized,
        S: PresentationSink + ?Sized,
    {
        let outcome = self
            .refresh(input, sink)
            .and_then(|()| self.session.compute().copied());

        match outcome {
            Ok(result) => {
                sink.render_result(&result);
                self.last_tips = self
                    .selector
                    .sample_for(self.session.profile(), self.tip_count);
                sink.render_tips(&self.last_tips);
                Ok(result)
            }
            Err(err) => {
                sink.render_error(&err.to_string());
                Err(err)
            }
        }
    }

    /// Clear all inputs and the last result
    pub fn reset(&mut self) {
        self.session.reset();
        self.last_tips.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinanzError;
    use crate::interface::{ContributorInput, RawPercentages, RecordingSink};
    use crate::models::{DistributionMethod, Money};
    use crate::services::session::SessionStage;

    #[derive(Default)]
    struct FormInput {
        contributors: Vec<ContributorInput>,
        method: Option<String>,
        percentages: RawPercentages,
    }

    impl InputSource for FormInput {
        fn contributor_input(&self, index: usize) -> ContributorInput {
            self.contributors.get(index).cloned().unwrap_or_default()
        }

        fn selected_method_id(&self) -> Option<String> {
            self.method.clone()
        }

        fn custom_percentages(&self) -> RawPercentages {
            self.percentages.clone()
        }
    }

    fn couple_form() -> FormInput {
        FormInput {
            contributors: vec![
                ContributorInput::new("Ana", "1.500.000"),
                ContributorInput::new("Luis", "2.500.000"),
            ],
            method: Some("70-20-10".into()),
            ..Default::default()
        }
    }

    fn controller(profile: Profile) -> BudgetController {
        BudgetController::with_selector(profile, TipSelector::with_seed(11))
    }

    #[test]
    fn test_calculate_renders_result_and_tips() {
        let mut controller = controller(Profile::Couple);
        let mut sink = RecordingSink::new();

        let result = controller.calculate(&couple_form(), &mut sink).unwrap();

        assert_eq!(sink.totals, vec![Money::from_pesos(4_000_000)]);
        assert_eq!(sink.last_result(), Some(&result));
        assert_eq!(result.needs.amount, 2_800_000.0);
        assert_eq!(sink.tips.len(), 6);
        assert_eq!(controller.last_tips(), sink.tips.as_slice());
        assert!(sink.errors.is_empty());
        assert_eq!(controller.session().stage(), SessionStage::Computed);
    }

    #[test]
    fn test_individual_samples_four_tips() {
        let mut controller = controller(Profile::Individual);
        let mut sink = RecordingSink::new();
        let form = FormInput {
            contributors: vec![ContributorInput::new("", "2.000.000")],
            method: Some("50-30-20".into()),
            ..Default::default()
        };

        controller.calculate(&form, &mut sink).unwrap();
        assert_eq!(sink.tips.len(), 4);
        assert!(sink
            .tips
            .iter()
            .all(|t| Profile::Individual.catalog().contains(t)));
    }

    #[test]
    fn test_tip_count_override() {
        let mut controller = controller(Profile::Couple).with_tip_count(2);
        let mut sink = RecordingSink::new();
        controller.calculate(&couple_form(), &mut sink).unwrap();
        assert_eq!(sink.tips.len(), 2);
    }

    #[test]
    fn test_failure_renders_exactly_one_error() {
        let mut controller = controller(Profile::Couple);
        let mut sink = RecordingSink::new();
        let form = FormInput {
            contributors: vec![ContributorInput::new("Ana", ""), ContributorInput::new("", "")],
            ..Default::default()
        };

        let err = controller.calculate(&form, &mut sink).unwrap_err();
        assert_eq!(err, FinanzError::MissingName);
        assert_eq!(
            sink.errors,
            vec!["Por favor, ingresa los nombres de ambas personas".to_string()]
        );
        assert!(sink.results.is_empty());
        assert!(sink.tips.is_empty());
    }

    #[test]
    fn test_custom_split_feedback_and_gate() {
        let mut controller = controller(Profile::Individual);
        let mut sink = RecordingSink::new();
        let form = FormInput {
            contributors: vec![ContributorInput::new("", "1.000.000")],
            method: Some("custom".into()),
            percentages: RawPercentages::new("50", "30", "19"),
        };

        let err = controller.calculate(&form, &mut sink).unwrap_err();
        assert!(err.is_invalid_distribution());
        assert_eq!(sink.validations.len(), 1);
        assert!(!sink.validations[0].valid);
        assert_eq!(sink.validations[0].total, 99);
        assert_eq!(
            sink.last_error(),
            Some("Los porcentajes personalizados deben sumar 100%")
        );
        assert!(controller.session().last_result().is_none());
    }

    #[test]
    fn test_unknown_method_is_reported_once() {
        let mut controller = controller(Profile::Individual);
        let mut sink = RecordingSink::new();
        let mut form = FormInput {
            contributors: vec![ContributorInput::new("", "1.000.000")],
            method: Some("50-30-20".into()),
            ..Default::default()
        };
        controller.refresh(&form, &mut sink).unwrap();
        assert_eq!(
            controller.session().selected_method(),
            Some(DistributionMethod::FiftyThirtyTwenty)
        );

        form.method = Some("99-1-0".into());
        let err = controller.calculate(&form, &mut sink).unwrap_err();
        assert_eq!(err, FinanzError::UnknownMethod("99-1-0".into()));
        assert_eq!(sink.errors.len(), 1);
        assert_eq!(controller.session().selected_method(), None);
    }

    #[test]
    fn test_unchanged_refresh_keeps_computed_stage() {
        let mut controller = controller(Profile::Individual);
        let mut sink = RecordingSink::new();
        let form = FormInput {
            contributors: vec![ContributorInput::new("", "2.000.000")],
            method: Some("custom".into()),
            percentages: RawPercentages::new("60", "25", "15"),
        };

        controller.calculate(&form, &mut sink).unwrap();
        controller.refresh(&form, &mut sink).unwrap();

        assert_eq!(controller.session().stage(), SessionStage::Computed);
        assert_eq!(
            controller.session().custom_split(),
            crate::models::PercentageSplit::new(60, 25, 15)
        );
    }

    #[test]
    fn test_refresh_mirrors_missing_method() {
        let mut controller = controller(Profile::Couple);
        let mut sink = RecordingSink::new();
        controller.refresh(&couple_form(), &mut sink).unwrap();
        assert!(controller.session().selected_method().is_some());

        let mut form = couple_form();
        form.method = None;
        controller.refresh(&form, &mut sink).unwrap();
        assert!(controller.session().selected_method().is_none());
        assert_eq!(controller.session().stage(), SessionStage::Empty);
    }

    #[test]
    fn test_reset() {
        let mut controller = controller(Profile::Couple);
        let mut sink = RecordingSink::new();
        controller.calculate(&couple_form(), &mut sink).unwrap();

        controller.reset();
        assert!(controller.last_tips().is_empty());
        assert_eq!(controller.session(), &BudgetSession::couple());
    }
}
