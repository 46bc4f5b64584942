//! Two-phase traversal and dispatch.

use cg_ir::TypeDecl;

use crate::{validate_output, GenResult, OutputRegistry, ProcessorRegistry};

/// Counters for one run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Input declarations visited.
    pub visited: usize,
    /// (declaration, processor) pairs whose predicate matched.
    pub matched: usize,
    /// Declarations in the output registry.
    pub generated: usize,
}

/// Run every processor over `units`.
///
/// 1. For each declaration in input order, for each processor in
///    registration order: if the processor applies, run its action.
/// 2. After all declarations, run each processor's completion hook once.
/// 3. Validate the generated declarations.
///
/// The first failure aborts the run; no registry is returned in that case.
pub fn run(units: &[TypeDecl], processors: &mut ProcessorRegistry) -> GenResult<OutputRegistry> {
    run_with_stats(units, processors).map(|(output, _)| output)
}

/// [`run`], also returning the run counters.
#[tracing::instrument(level = "debug", skip_all, fields(
    units = units.len(),
    processors = processors.len(),
))]
pub fn run_with_stats(
    units: &[TypeDecl],
    processors: &mut ProcessorRegistry,
) -> GenResult<(OutputRegistry, RunStats)> {
    let mut output = OutputRegistry::new();
    let mut stats = RunStats::default();

    for decl in units {
        stats.visited += 1;
        for processor in processors.iter_mut() {
            let applicable = processor.is_applicable(decl).inspect_err(|err| {
                tracing::debug!(
                    processor = processor.name(),
                    class = %decl.name(),
                    %err,
                    "applicability check failed"
                );
            })?;
            if !applicable {
                continue;
            }
            stats.matched += 1;
            tracing::trace!(processor = processor.name(), class = %decl.name(), "matched");
            processor
                .process(decl, &mut output)
                .inspect_err(|err| {
                    tracing::debug!(
                        processor = processor.name(),
                        class = %decl.name(),
                        %err,
                        "processor failed"
                    );
                })?;
        }
    }
    tracing::debug!("traversal complete");

    for processor in processors.iter_mut() {
        processor.on_complete(&output)?;
    }
    tracing::debug!("completion hooks complete");

    validate_output(&output)?;

    stats.generated = output.len();
    tracing::debug!(
        visited = stats.visited,
        matched = stats.matched,
        generated = stats.generated,
        "run complete"
    );
    Ok((output, stats))
}

#[cfg(test)]
mod tests;
