use std::path::{Path, PathBuf};

/// Locate the Bazel runfiles directory belonging to a test executable.
///
/// Bazel places a `<binary>.runfiles` directory next to binaries under
/// `bazel-bin`. The binary itself is usually a symlink, so the directory
/// is resolved from the symlink target while the binary name is taken
/// from the symlink itself. Returns `None` for anything that does not
/// look like a Bazel output, or when the directory does not exist.
pub(crate) fn runfiles_dir_for(executable: &Path) -> Option<PathBuf> {
    let absolute = std::path::absolute(executable).ok()?;

    if !absolute
        .components()
        .any(|component| component.as_os_str() == "bazel-bin")
    {
        return None;
    }

    let resolved = if absolute.is_symlink() {
        absolute.canonicalize().ok()?
    } else {
        absolute.clone()
    };

    let base_dir = resolved.parent()?;
    let binary_name = absolute.file_name()?;

    let mut dir_name = binary_name.to_os_string();
    dir_name.push(".runfiles");

    let runfiles_dir = base_dir.join(dir_name);
    runfiles_dir.is_dir().then_some(runfiles_dir)
}
