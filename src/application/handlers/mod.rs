mod compute_scores;
mod prepare_step;
mod submit_step;

pub use compute_scores::{ComputeScoresCommand, ComputeScoresError, ComputeScoresHandler};
pub use prepare_step::{PrepareStepCommand, PrepareStepError, PrepareStepHandler, PreparedStep};
pub use submit_step::{SubmitStepCommand, SubmitStepError, SubmitStepHandler, SubmitStepResult};
