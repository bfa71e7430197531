use std::path::{Component, Path, PathBuf};

/// Renders a path for diagnostics as an absolute, `.`/`..`-free path.
///
/// Paths that already exist are canonicalized. Paths that do not exist
/// (yet), such as an entry whose creation just failed, are made absolute
/// against the working directory and normalized lexically.
pub fn best_effort_path_display(path: &Path) -> String {
    if let Ok(canonical) = path.canonicalize() {
        return canonical.display().to_string();
    }

    std::path::absolute(path)
        .map(|absolute| lexically_normalize(&absolute))
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

fn lexically_normalize(path: &Path) -> PathBuf {
    path.components()
        .fold(PathBuf::new(), |mut normalized, component| {
            match component {
                Component::CurDir => {}
                // `pop` refuses to remove the root or prefix
                Component::ParentDir => {
                    normalized.pop();
                }
                other => normalized.push(other),
            }
            normalized
        })
}

pub trait BestEffortPathExt {
    fn best_effort_path_display(&self) -> String;
}

impl<P: AsRef<Path> + ?Sized> BestEffortPathExt for P {
    fn best_effort_path_display(&self) -> String {
        best_effort_path_display(self.as_ref())
    }
}
