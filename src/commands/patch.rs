//! Patch command implementation

use crate::cli::PatchArgs;
use crate::error::Result;
use crate::patcher::{self, ANCHOR, PatchOptions, PatchOutcome};
use crate::ui::Reporter;

/// Run patch command
pub fn run(args: PatchArgs, reporter: Reporter) -> Result<()> {
    let options = PatchOptions {
        strict: args.strict,
        check: args.check,
    };
    let report = patcher::patch_file(&args.artifact, options)?;
    let path = args.artifact.display();

    match report.outcome {
        PatchOutcome::Applied => reporter.success("Patched", path),
        PatchOutcome::AlreadyPatched { tagged: true } => {
            reporter.status("Up to date", path);
        }
        PatchOutcome::AlreadyPatched { tagged: false } => {
            reporter.status("Up to date", format!("{path} (declares window itself)"));
        }
        PatchOutcome::AnchorMissing => {
            reporter.warn(format!("'{ANCHOR}' not found in {path}; left unchanged"));
        }
    }

    reporter.detail("before:", &report.digest_before);
    if report.outcome.changed() {
        reporter.detail("after: ", &report.digest_after);
    }

    Ok(())
}
