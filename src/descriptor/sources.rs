//! Source discovery under the csrc directory

use std::path::Path;

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::config::ExtensionConfig;
use crate::error::{Result, config as config_error, descriptor as descriptor_error, fs as fs_error};
use crate::path_utils::to_forward_slashes;

/// Whether `relative` has a component starting with `.`
fn is_hidden(relative: &str) -> bool {
    relative.split('/').any(|component| component.starts_with('.'))
}

/// Whether `pattern` names dot-prefixed components explicitly
fn matches_hidden(pattern: &str) -> bool {
    pattern.split('/').any(|segment| segment.starts_with('.'))
}

/// Collect extension sources as project-relative, forward-slash paths
///
/// Glob matches come first in sorted order, followed by `extra_sources` in the
/// order they are declared. A file listed twice is emitted once. Symlinked files
/// count as files. Like shell globs, wildcards skip dot-prefixed names unless the
/// pattern itself spells out a leading `.` (e.g. `._*` resource forks).
pub fn collect(root: &Path, config: &ExtensionConfig) -> Result<Vec<String>> {
    let csrc = root.join(&config.csrc_dir);
    if !csrc.is_dir() {
        return Err(fs_error::dir_not_found(&csrc));
    }

    let globs = config
        .sources
        .iter()
        .map(|pattern| {
            Glob::new(pattern)
                .map(|glob| (glob, matches_hidden(pattern)))
                .map_err(|e| config_error::invalid_glob(pattern, e))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut matched = Vec::new();
    for entry in WalkDir::new(&csrc) {
        let entry = entry.map_err(|e| fs_error::read_failed(&csrc, e))?;
        // Follows symlinks; dangling links are skipped
        if !entry.path().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(&csrc) else {
            continue;
        };
        let relative = to_forward_slashes(relative);
        let candidate = CandidatePath::from(relative.as_str());
        let hidden = is_hidden(&relative);

        if globs
            .iter()
            .any(|(glob, dotted)| (!hidden || *dotted) && glob.matched(&candidate).is_some())
        {
            matched.push(to_forward_slashes(&config.csrc_dir.join(&relative)));
        }
    }
    matched.sort();

    for extra in &config.extra_sources {
        let path = csrc.join(extra);
        if !path.is_file() {
            return Err(descriptor_error::source_not_found(&path));
        }
        let relative = to_forward_slashes(&config.csrc_dir.join(extra));
        if !matched.contains(&relative) {
            matched.push(relative);
        }
    }

    if matched.is_empty() {
        return Err(descriptor_error::no_sources(&csrc));
    }

    Ok(matched)
}
