//! File system utilities

use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Errors raised while computing an owner directory
#[derive(Debug, Error)]
pub enum PathError {
    #[error("{} is not in {} directory", path.display(), base.display())]
    OutsideBase { path: PathBuf, base: PathBuf },

    #[error("failed to resolve {}: {source}", path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Shortens long paths for display
pub fn shorten_path(path: &str, max_length: usize) -> String {
    if path.len() <= max_length {
        return path.to_string();
    }

    let components: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if components.len() <= 2 {
        // Too few components to shorten meaningfully
        return path.to_string();
    }

    // Keep last 2 components with ellipsis prefix
    let prefix = if path.starts_with("./") { "./" } else { "" };
    format!(
        "{}.../{}/{}",
        prefix,
        components[components.len() - 2],
        components[components.len() - 1]
    )
}

/// Resolves a path to absolute canonical form without requiring it to exist
///
/// Existing prefixes are canonicalized (symlinks followed); the remaining
/// components are applied lexically, with `..` popping the previous component.
pub fn resolve_lenient(path: &Path) -> io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                resolved.push(name);
                if let Ok(canonical) = resolved.canonicalize() {
                    resolved = canonical;
                }
            }
        }
    }

    Ok(resolved)
}

/// Computes `base_dir/owner_login` and checks that it stays inside `base_dir`
///
/// Both paths are resolved first; the resolved target must be a strict
/// descendant of the resolved base. Returns the unresolved joined path.
pub fn resolve_owner_dir(base_dir: &Path, owner_login: &str) -> Result<PathBuf, PathError> {
    let target = base_dir.join(owner_login);

    let resolved_base = resolve_lenient(base_dir).map_err(|source| PathError::Resolve {
        path: base_dir.to_path_buf(),
        source,
    })?;
    let resolved_target = resolve_lenient(&target).map_err(|source| PathError::Resolve {
        path: target.clone(),
        source,
    })?;

    if resolved_target != resolved_base && resolved_target.starts_with(&resolved_base) {
        Ok(target)
    } else {
        Err(PathError::OutsideBase {
            path: target,
            base: base_dir.to_path_buf(),
        })
    }
}
