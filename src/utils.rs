// SPDX-License-Identifier: MPL-2.0

//! Small shared helpers

use std::collections::HashMap;
use std::io;
use std::path::Path;
use tracing::debug;

/// Return a map whose keys carry a `<prefix>_` prefix
pub fn prefix_keys<V>(map: HashMap<String, V>, prefix: &str) -> HashMap<String, V> {
    map.into_iter()
        .map(|(key, value)| (format!("{}_{}", prefix, key), value))
        .collect()
}

/// Create a directory (and any parents), unless it exists already
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    debug!(path = ?path, "Creating directory");
    std::fs::create_dir_all(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_keys() {
        let mut map = HashMap::new();
        map.insert("loss".to_string(), 0.5);
        map.insert("accuracy".to_string(), 0.9);

        let prefixed = prefix_keys(map, "train");
        assert_eq!(prefixed.len(), 2);
        assert_eq!(prefixed.get("train_loss"), Some(&0.5));
        assert_eq!(prefixed.get("train_accuracy"), Some(&0.9));
    }

    #[test]
    fn test_ensure_dir() {
        let dir = std::env::temp_dir().join(format!("capturekit-test-{}", std::process::id()));
        let nested = dir.join("a").join("b");

        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Second call on an existing directory is a no-op
        ensure_dir(&nested).unwrap();

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
