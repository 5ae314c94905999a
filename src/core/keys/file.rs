//! Key file reading and writing.
//!
//! Key files hold the hex key on a single line. New key files are created
//! with mode 0600 on Unix, and looser permissions produce a warning on read.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::core::constants::KEY_FILE_MODE;
use crate::error::{KeyError, Result};

/// Read a key file, returning `None` if it does not exist.
pub(super) fn read_key_file(path: &Path) -> Result<Option<Zeroizing<String>>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => Zeroizing::new(contents),
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(KeyError::ReadFailed(e).into()),
    };

    #[cfg(unix)]
    warn_if_insecure(path);

    if contents.trim().is_empty() {
        debug!(path = %path.display(), "key file is empty");
        return Ok(None);
    }

    Ok(Some(contents))
}

/// Create a key file containing `printable` and a trailing newline.
///
/// The file is created exclusively, with mode 0600 on Unix from the start.
pub(super) fn write_key_file(path: &Path, printable: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(KeyError::WriteFailed)?;
    }

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(KEY_FILE_MODE);
    }

    let mut file = options.open(path).map_err(|e| {
        if e.kind() == ErrorKind::AlreadyExists {
            KeyError::AlreadyExists(path.to_path_buf())
        } else {
            KeyError::WriteFailed(e)
        }
    })?;

    let line = Zeroizing::new(format!("{}\n", printable));
    file.write_all(line.as_bytes())
        .and_then(|()| file.sync_all())
        .map_err(KeyError::WriteFailed)?;

    debug!(path = %path.display(), "key file written");
    Ok(())
}

#[cfg(unix)]
fn warn_if_insecure(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let Ok(metadata) = fs::metadata(path) else {
        return;
    };
    let mode = metadata.permissions().mode() & 0o777;
    if mode & !KEY_FILE_MODE != 0 {
        warn!(
            path = %path.display(),
            mode = %format!("{:o}", mode),
            "insecure key file permissions"
        );
    }
}
