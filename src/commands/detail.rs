use std::io::Write;

use anyhow::Result;

use super::CommandContext;
use crate::errors::Error;
use crate::evm::EvaluatedProject;
use crate::portfolio::ProjectDetail;
use crate::store::ProjectStore;

pub fn show_project(
    store: &dyn ProjectStore,
    ctx: &CommandContext,
    id_or_code: &str,
    sink: impl Write,
) -> Result<()> {
    let project = store
        .find(id_or_code)
        .ok_or_else(|| Error::NotFound(id_or_code.to_string()))?;
    let item = EvaluatedProject::new(project, &ctx.config.evm);
    let detail = ProjectDetail::from_evaluated(&item, &ctx.config.classification);
    ctx.writer(sink).write_project(&detail)
}
