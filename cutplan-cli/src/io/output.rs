use cutplan::config::PlanConfig;
use cutplan::io::ext_repr::{ExtJob, ExtPlan};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct PlanOutput {
    #[serde(flatten)]
    pub job: ExtJob,
    pub plan: ExtPlan,
    pub config: PlanConfig,
}
