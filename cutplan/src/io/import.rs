use crate::entities::{CutRequirement, Job, LinearStock, PanelRequirement, SheetStock};
use crate::io::ext_repr::{ExtCutRequirement, ExtJob, ExtPanelRequirement};

/// Converts an external job into the internal [`Job`] representation.
/// Dimensions are taken as is, range validation is up to the producer of the job.
pub fn import_job(ext_job: &ExtJob) -> Job {
    let linear = ext_job
        .linear
        .iter()
        .map(|ls| LinearStock {
            name: ls.name.clone(),
            stock_length: ls.stock_length,
            requirements: ls.cuts.iter().map(import_cut_requirement).collect(),
        })
        .collect();

    let sheets = ext_job
        .sheets
        .iter()
        .map(|ss| SheetStock {
            name: ss.name.clone(),
            width: ss.width,
            height: ss.height,
            requirements: ss.panels.iter().map(import_panel_requirement).collect(),
        })
        .collect();

    Job {
        linear,
        sheets,
        hardware: ext_job.hardware.clone(),
    }
}

pub fn import_cut_requirement(ext: &ExtCutRequirement) -> CutRequirement {
    CutRequirement::new(ext.length, ext.quantity, ext.id.clone())
}

pub fn import_panel_requirement(ext: &ExtPanelRequirement) -> PanelRequirement {
    PanelRequirement {
        width: ext.width,
        height: ext.height,
        quantity: ext.quantity,
        id: ext.id.clone(),
        label: ext.label.clone(),
    }
}
