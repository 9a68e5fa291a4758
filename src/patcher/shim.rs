//! The `window` shim injected into emscripten output
//!
//! Emscripten pthread builds reference `window.encodeURIComponent` and
//! `window.location` while the module is evaluated in a worker, where `window`
//! is undefined (emscripten-core/emscripten#19996).

/// Insertion point; the shim goes immediately before its first occurrence.
pub const ANCHOR: &str = "var moduleRtn;";

/// Presence of this anywhere in the artifact means it is already patched.
pub const GUARD_MARKER: &str = "var window";

/// Version tag written as the first line of the shim.
pub const SHIM_TAG: &str = "/* mgs-build: window shim v1 */";

/// Block inserted before [`ANCHOR`]. Declares [`GUARD_MARKER`].
///
/// The leading [`SHIM_TAG`] line is the only difference from artifacts patched
/// by the older Python build step, so diffs against those outputs show one extra
/// line and nothing else. Both are recognised as patched via [`GUARD_MARKER`].
pub const SHIM: &str = "/* mgs-build: window shim v1 */\n\
                        var window = {\n    \
                        encodeURIComponent: encodeURIComponent,\n    \
                        location: location\n\
                        };\n";
