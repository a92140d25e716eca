use crate::{AuthError, Result as AuthResult};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// The "remember me" value kept between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RememberedEmail {
    pub email: String,
    pub saved_at: DateTime<Utc>,
}

/// File-backed store for the remembered email.
#[derive(Debug, Clone)]
pub struct RememberedEmailStore {
    path: PathBuf,
}

impl RememberedEmailStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns:
    /// - `Ok(Some(..))` - loaded
    /// - `Ok(None)` - no file, or the file is corrupted (logged)
    pub fn load(&self) -> AuthResult<Option<RememberedEmail>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AuthError::storage(self.path.clone(), e)),
        };

        match serde_json::from_str::<RememberedEmail>(&contents) {
            Ok(remembered) => Ok(Some(remembered)),
            Err(e) => {
                warn!(
                    "Remembered email file corrupted at {}: {e}",
                    self.path.display()
                );
                Ok(None)
            }
        }
    }

    /// Saves using atomic write pattern (temp file, fsync, rename).
    pub fn save(&self, email: &str) -> AuthResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| AuthError::storage(parent.to_path_buf(), e))?;
        }

        let remembered = RememberedEmail {
            email: email.to_string(),
            saved_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&remembered)?;

        let mut temp_name = self.path.as_os_str().to_owned();
        temp_name.push(format!(".tmp.{}", std::process::id()));
        let temp_path = PathBuf::from(temp_name);

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| AuthError::storage(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| AuthError::storage(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| AuthError::storage(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            AuthError::storage(self.path.clone(), e)
        })?;

        info!("Remembered email saved to {}", self.path.display());
        Ok(())
    }

    /// Remove the remembered email. Returns false when there was none.
    pub fn clear(&self) -> AuthResult<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Remembered email cleared");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AuthError::storage(self.path.clone(), e)),
        }
    }
}
