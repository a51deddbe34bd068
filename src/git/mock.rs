use crate::error::Result;
use crate::git::RootLocator;
use std::path::{Path, PathBuf};

/// Locator that always returns the directory it was built with
#[derive(Debug, Clone)]
pub struct FixedRootLocator {
    root: PathBuf,
}

impl FixedRootLocator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        FixedRootLocator {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl RootLocator for FixedRootLocator {
    fn locate(&self) -> Result<PathBuf> {
        Ok(self.root.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_root() {
        let locator = FixedRootLocator::new("/src/eks-distro");
        assert_eq!(locator.locate().unwrap(), PathBuf::from("/src/eks-distro"));
    }
}
