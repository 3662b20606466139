mod copy_button;
mod feature_step;

pub use copy_button::CopyButton;
pub use feature_step::FeatureStep;
