use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::transform::Transform;

/// `<stem>_<transform><suffix>` for `input`, e.g. `report.txt` + `upper` -> `report_upper.txt`.
///
/// The suffix is the last extension only, so `a.tar.gz` becomes `a.tar_upper.gz`.
pub fn output_file_name(input: &Path, transform: &Transform) -> OsString {
    let mut name = input.file_stem().map(OsString::from).unwrap_or_default();
    name.push("_");
    name.push(transform.name());
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    name
}

pub fn output_path(output_dir: &Path, input: &Path, transform: &Transform) -> PathBuf {
    output_dir.join(output_file_name(input, transform))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(input: &str, transform: &str) -> String {
        output_file_name(Path::new(input), &Transform::from_name(transform))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn keeps_stem_and_suffix() {
        assert_eq!(name("report.txt", "upper"), "report_upper.txt");
        assert_eq!(name("dir/notes.md", "lower"), "notes_lower.md");
    }

    #[test]
    fn only_last_extension_is_the_suffix() {
        assert_eq!(name("archive.tar.gz", "upper"), "archive.tar_upper.gz");
    }

    #[test]
    fn files_without_extension() {
        assert_eq!(name("Makefile", "lower"), "Makefile_lower");
        assert_eq!(name(".bashrc", "upper"), ".bashrc_upper");
    }

    #[test]
    fn passthrough_name_is_used_verbatim() {
        assert_eq!(name("a.txt", "noop"), "a_noop.txt");
    }

    #[test]
    fn joins_output_dir() {
        let path = output_path(Path::new("/out"), Path::new("in/a.txt"), &Transform::Upper);
        assert_eq!(path, PathBuf::from("/out/a_upper.txt"));
    }
}
