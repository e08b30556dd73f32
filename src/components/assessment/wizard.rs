use crate::components::charts::AssessmentResults;

/// One 1-5 rating question.
#[derive(Clone, Copy, Debug)]
pub struct RatingItem {
	pub key: &'static str,
	pub label: &'static str,
}

/// One wizard step: a titled group of rating questions feeding one of the
/// results sub-maps.
#[derive(Clone, Copy, Debug)]
pub struct Section {
	pub id: &'static str,
	pub title: &'static str,
	pub items: &'static [RatingItem],
}

/// The fixed assessment sections, in wizard order.
pub const SECTIONS: [Section; 3] = [
	Section {
		id: "technical-skills-section",
		title: "Technical Skills",
		items: &[
			RatingItem { key: "programming", label: "Programming and coding skills" },
			RatingItem { key: "data_analysis", label: "Data analysis and interpretation" },
			RatingItem { key: "design", label: "Design and visual creativity" },
			RatingItem { key: "writing", label: "Writing and communication" },
			RatingItem { key: "project_management", label: "Project management" },
		],
	},
	Section {
		id: "soft-skills-section",
		title: "Soft Skills",
		items: &[
			RatingItem { key: "communication", label: "Verbal and written communication" },
			RatingItem { key: "teamwork", label: "Teamwork and collaboration" },
			RatingItem { key: "leadership", label: "Leadership and decision making" },
			RatingItem { key: "problem_solving", label: "Problem solving and critical thinking" },
			RatingItem { key: "adaptability", label: "Adaptability and learning" },
		],
	},
	Section {
		id: "interests-section",
		title: "Career Interests",
		items: &[
			RatingItem { key: "interest_technology", label: "Interest in technology and innovation" },
			RatingItem { key: "interest_business", label: "Interest in business and entrepreneurship" },
			RatingItem { key: "interest_arts", label: "Interest in arts and creativity" },
			RatingItem { key: "interest_sciences", label: "Interest in sciences and research" },
			RatingItem { key: "interest_helping", label: "Interest in helping others and society" },
		],
	},
];

/// Outcome of a form submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// The current section failed validation; nothing moved.
	Blocked,
	/// Not on the last section: the submit advanced one step instead.
	Advanced,
	/// Last section, all valid: the assessment is complete.
	Completed,
}

/// Linear step-sequencer over the assessment sections, with per-group
/// selection and validation state.
#[derive(Clone, Debug)]
pub struct WizardState {
	index: usize,
	selections: Vec<Vec<Option<u8>>>,
	invalid: Vec<Vec<bool>>,
}

impl Default for WizardState {
	fn default() -> Self {
		Self::new()
	}
}

impl WizardState {
	pub fn new() -> Self {
		Self {
			index: 0,
			selections: SECTIONS.iter().map(|s| vec![None; s.items.len()]).collect(),
			invalid: SECTIONS.iter().map(|s| vec![false; s.items.len()]).collect(),
		}
	}

	pub fn index(&self) -> usize {
		self.index
	}

	pub fn is_first(&self) -> bool {
		self.index == 0
	}

	pub fn is_last(&self) -> bool {
		self.index == SECTIONS.len() - 1
	}

	/// Progress percentage: 0 on the first section, 100 on the last.
	pub fn progress(&self) -> f64 {
		(self.index as f64) / ((SECTIONS.len() - 1) as f64) * 100.0
	}

	pub fn selection(&self, section: usize, group: usize) -> Option<u8> {
		self.selections.get(section)?.get(group).copied().flatten()
	}

	pub fn group_invalid(&self, section: usize, group: usize) -> bool {
		self.invalid
			.get(section)
			.and_then(|flags| flags.get(group))
			.copied()
			.unwrap_or(false)
	}

	/// Record a rating. Selecting clears the group's validation flag.
	pub fn select(&mut self, section: usize, group: usize, rating: u8) {
		if let Some(groups) = self.selections.get_mut(section) {
			if let Some(slot) = groups.get_mut(group) {
				*slot = Some(rating);
			}
		}
		if let Some(flags) = self.invalid.get_mut(section) {
			if let Some(flag) = flags.get_mut(group) {
				*flag = false;
			}
		}
	}

	/// Flag every unanswered group in the current section. Returns true iff
	/// the whole section is answered. Repeated calls are idempotent.
	pub fn validate_current(&mut self) -> bool {
		let mut valid = true;
		for group in 0..SECTIONS[self.index].items.len() {
			let answered = self.selections[self.index][group].is_some();
			self.invalid[self.index][group] = !answered;
			valid &= answered;
		}
		valid
	}

	/// Move forward one section, gated by validation. No-op on the last
	/// section. Returns true iff the index moved.
	pub fn advance(&mut self) -> bool {
		if self.is_last() {
			return false;
		}
		if !self.validate_current() {
			return false;
		}
		self.index += 1;
		true
	}

	/// Move back one section, no validation gate. No-op on the first.
	pub fn retreat(&mut self) -> bool {
		if self.is_first() {
			return false;
		}
		self.index -= 1;
		true
	}

	/// Intercept a form submit: block when invalid, advance when not on the
	/// last section, complete otherwise.
	pub fn handle_submit(&mut self) -> SubmitOutcome {
		if !self.validate_current() {
			return SubmitOutcome::Blocked;
		}
		if !self.is_last() {
			self.index += 1;
			return SubmitOutcome::Advanced;
		}
		SubmitOutcome::Completed
	}

	/// Collect the answered ratings into a results record.
	pub fn results(&self) -> AssessmentResults {
		let collect = |section: usize| {
			SECTIONS[section]
				.items
				.iter()
				.enumerate()
				.filter_map(|(group, item)| {
					self.selection(section, group)
						.map(|rating| (item.key.to_string(), rating as f64))
				})
				.collect()
		};
		AssessmentResults {
			technical_skills: collect(0),
			soft_skills: collect(1),
			interests: collect(2),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn answer_section(wizard: &mut WizardState, section: usize, rating: u8) {
		for group in 0..SECTIONS[section].items.len() {
			wizard.select(section, group, rating);
		}
	}

	#[test]
	fn advance_requires_complete_section() {
		let mut wizard = WizardState::new();
		assert!(!wizard.advance());
		assert_eq!(wizard.index(), 0);
		assert!(wizard.group_invalid(0, 0));

		answer_section(&mut wizard, 0, 3);
		assert!(wizard.advance());
		assert_eq!(wizard.index(), 1);
	}

	#[test]
	fn advance_is_noop_on_last_section() {
		let mut wizard = WizardState::new();
		for section in 0..SECTIONS.len() {
			answer_section(&mut wizard, section, 4);
			wizard.advance();
		}
		assert!(wizard.is_last());
		let index = wizard.index();
		assert!(!wizard.advance());
		assert_eq!(wizard.index(), index);
	}

	#[test]
	fn retreat_is_ungated_and_noop_on_first() {
		let mut wizard = WizardState::new();
		assert!(!wizard.retreat());

		answer_section(&mut wizard, 0, 2);
		wizard.advance();
		// No validation on the way back
		assert!(wizard.retreat());
		assert!(wizard.is_first());
	}

	#[test]
	fn progress_spans_zero_to_hundred() {
		let mut wizard = WizardState::new();
		assert_eq!(wizard.progress(), 0.0);
		answer_section(&mut wizard, 0, 3);
		wizard.advance();
		assert_eq!(wizard.progress(), 50.0);
		answer_section(&mut wizard, 1, 3);
		wizard.advance();
		assert_eq!(wizard.progress(), 100.0);
	}

	#[test]
	fn validation_flags_are_per_group_and_idempotent() {
		let mut wizard = WizardState::new();
		wizard.select(0, 0, 5);
		assert!(!wizard.validate_current());
		assert!(!wizard.validate_current());
		assert!(!wizard.group_invalid(0, 0));
		for group in 1..SECTIONS[0].items.len() {
			assert!(wizard.group_invalid(0, group));
		}

		// Selecting clears the flag without a revalidation pass
		wizard.select(0, 1, 2);
		assert!(!wizard.group_invalid(0, 1));
	}

	#[test]
	fn submit_blocks_advances_then_completes() {
		let mut wizard = WizardState::new();
		assert_eq!(wizard.handle_submit(), SubmitOutcome::Blocked);

		answer_section(&mut wizard, 0, 3);
		assert_eq!(wizard.handle_submit(), SubmitOutcome::Advanced);
		assert_eq!(wizard.index(), 1);

		answer_section(&mut wizard, 1, 3);
		assert_eq!(wizard.handle_submit(), SubmitOutcome::Advanced);
		answer_section(&mut wizard, 2, 3);
		assert_eq!(wizard.handle_submit(), SubmitOutcome::Completed);
		assert!(wizard.is_last());
	}

	#[test]
	fn results_collects_answers_by_section() {
		let mut wizard = WizardState::new();
		answer_section(&mut wizard, 0, 4);
		answer_section(&mut wizard, 1, 3);
		answer_section(&mut wizard, 2, 5);

		let results = wizard.results();
		assert_eq!(results.technical_skills.len(), 5);
		assert_eq!(results.technical_skills[0], ("programming".to_string(), 4.0));
		assert_eq!(results.soft_skills[3], ("problem_solving".to_string(), 3.0));
		assert_eq!(
			results.interests[0],
			("interest_technology".to_string(), 5.0)
		);
	}
}
