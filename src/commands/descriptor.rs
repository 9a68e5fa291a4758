//! Descriptor command implementation

use crate::cli::DescriptorArgs;
use crate::common::fs::write_atomic;
use crate::config::ExtensionConfig;
use crate::descriptor::ExtensionDescriptor;
use crate::error::Result;
use crate::ui::Reporter;

/// Run descriptor command
pub fn run(args: DescriptorArgs, reporter: Reporter) -> Result<()> {
    let config = ExtensionConfig::load(&args.root, args.config.as_deref())?;
    let descriptor = ExtensionDescriptor::build(&args.root, &config, &args.include)?;
    let rendered = descriptor.render(args.format)?;

    match args.output {
        Some(output) => {
            write_atomic(&output, &rendered)?;
            reporter.success("Wrote", output.display());
            reporter.detail("module:", &descriptor.name);
            reporter.detail("sources:", descriptor.sources.len());
            reporter.detail("fingerprint:", &descriptor.fingerprint);
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
