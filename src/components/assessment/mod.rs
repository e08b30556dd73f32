mod component;
mod wizard;

pub use component::AssessmentWizard;
