use crate::domain::ports::AssetProbe;
use std::path::{Path, PathBuf};

/// 以檔案系統判斷 logo 是否存在。相對路徑以設定檔所在目錄為基準。
#[derive(Debug, Clone)]
pub struct FsAssetProbe {
    base_dir: PathBuf,
}

impl FsAssetProbe {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// 以設定檔路徑建立；設定檔沒有上層目錄時使用目前目錄
    pub fn for_config_file(config_path: impl AsRef<Path>) -> Self {
        let base_dir = config_path
            .as_ref()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self::new(base_dir)
    }
}

impl AssetProbe for FsAssetProbe {
    fn exists(&self, path: &str) -> bool {
        let full_path = self.resolve(path);
        match std::fs::metadata(&full_path) {
            Ok(meta) => meta.is_file(),
            Err(e) => {
                tracing::debug!("Asset {} not available: {}", full_path.display(), e);
                false
            }
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.base_dir.join(candidate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_existing_file_is_found_relative_to_base() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("assets")).unwrap();
        std::fs::write(dir.path().join("assets/au_logo.png"), b"png").unwrap();

        let probe = FsAssetProbe::new(dir.path());
        assert!(probe.exists("assets/au_logo.png"));
        assert!(!probe.exists("assets/missing.png"));
    }

    #[test]
    fn test_directory_is_not_an_asset() {
        let dir = TempDir::new().unwrap();
        let probe = FsAssetProbe::new(dir.path());
        assert!(!probe.exists("."));
    }

    #[test]
    fn test_for_config_file_uses_parent_dir() {
        let probe = FsAssetProbe::for_config_file("/etc/portal/portal.toml");
        assert_eq!(
            probe.resolve("assets/logo.png"),
            PathBuf::from("/etc/portal/assets/logo.png")
        );
        assert_eq!(probe.resolve("/abs/logo.png"), PathBuf::from("/abs/logo.png"));
    }
}
