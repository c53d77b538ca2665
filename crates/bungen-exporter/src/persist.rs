use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ExportError;

/// Write one generated struct to `<output_dir>/<file_name>`.
///
/// Creates `output_dir` if absent, then writes a `package` declaration
/// followed by `body`. The file handle lives only for the duration of the
/// call. An existing file of the same name is truncated without warning; the
/// tool runs single-shot and sequentially, so the last writer wins.
pub fn persist(
    output_dir: &Path,
    file_name: &str,
    package: &str,
    body: &str,
) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(output_dir).map_err(|source| ExportError::CreateDir {
        dir: output_dir.to_path_buf(),
        source,
    })?;

    let path = output_dir.join(file_name);
    write_file(&path, package, body).map_err(|source| ExportError::WriteFile {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

fn write_file(path: &Path, package: &str, body: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "package {package}")?;
    writeln!(file)?;
    file.write_all(body.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn persist_creates_missing_output_dir() {
        let tmp = tempdir().unwrap();
        let out_dir = tmp.path().join("bunmodels");

        let path = persist(&out_dir, "users_struct.go", "bunmodels", "type users struct {\n}\n")
            .unwrap();

        assert!(out_dir.is_dir());
        assert_eq!(path, out_dir.join("users_struct.go"));
    }

    #[test]
    fn persisted_file_is_header_then_exact_body() {
        let tmp = tempdir().unwrap();
        let body = "type users struct {\n\tid int `bun:\"id\"`\n}\n";

        let path = persist(tmp.path(), "users_struct.go", "bunmodels", body).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content, format!("package bunmodels\n\n{body}"));
    }

    #[test]
    fn persist_overwrites_existing_file() {
        let tmp = tempdir().unwrap();

        persist(tmp.path(), "users_struct.go", "bunmodels", "old\n").unwrap();
        persist(tmp.path(), "users_struct.go", "bunmodels", "new\n").unwrap();

        let content = fs::read_to_string(tmp.path().join("users_struct.go")).unwrap();
        assert_eq!(content, "package bunmodels\n\nnew\n");
    }

    #[test]
    fn persist_fails_when_output_dir_is_a_file() {
        let tmp = tempdir().unwrap();
        let blocker = tmp.path().join("bunmodels");
        fs::write(&blocker, "not a directory").unwrap();

        let err = persist(&blocker, "users_struct.go", "bunmodels", "").unwrap_err();
        assert!(matches!(err, ExportError::CreateDir { .. }));
        assert!(err.to_string().contains("create output directory"));
    }
}
