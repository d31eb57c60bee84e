//! INI file configuration adapter.

use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut config = Ini::new();
        config.load(path).map_err(std::io::Error::other)?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new();
        config.read(content.to_string())?;
        Ok(Self { config })
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_section(&self, section: &str) -> Vec<(String, String)> {
        let map = self.config.get_map_ref();
        let mut entries: Vec<(String, String)> = map
            .get(&section.to_lowercase())
            .map(|keys| {
                keys.iter()
                    .filter_map(|(k, v)| v.as_ref().map(|v| (k.clone(), v.clone())))
                    .collect()
            })
            .unwrap_or_default();
        entries.sort();
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn from_string_parses_config() {
        let content = r#"
[loader]
default_date_convention = ModifiedFollowing
etd_type = Option
"#;
        let adapter = FileConfigAdapter::from_string(content).unwrap();
        assert_eq!(
            adapter.get_string("loader", "default_date_convention"),
            Some("ModifiedFollowing".to_string())
        );
        assert_eq!(
            adapter.get_string("loader", "etd_type"),
            Some("Option".to_string())
        );
    }

    #[test]
    fn get_string_returns_none_for_missing_key() {
        let adapter = FileConfigAdapter::from_string("[loader]\netd_type = Future\n").unwrap();
        assert_eq!(adapter.get_string("loader", "missing"), None);
        assert_eq!(adapter.get_string("missing_section", "key"), None);
    }

    #[test]
    fn get_section_lists_sorted_pairs() {
        let adapter =
            FileConfigAdapter::from_string("[calendars]\nUSD = USNY\nEUR = EUTA\n").unwrap();
        assert_eq!(
            adapter.get_section("calendars"),
            vec![
                ("eur".to_string(), "EUTA".to_string()),
                ("usd".to_string(), "USNY".to_string()),
            ]
        );
        assert!(adapter.get_section("missing").is_empty());
    }

    #[test]
    fn from_file_reads_config() {
        let file = create_temp_config("[calendars]\nCHF = CHZU\n");
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(
            adapter.get_string("calendars", "chf"),
            Some("CHZU".to_string())
        );
    }

    #[test]
    fn from_file_returns_error_for_missing_file() {
        let result = FileConfigAdapter::from_file("/nonexistent/path/loader.ini");
        assert!(result.is_err());
    }
}
