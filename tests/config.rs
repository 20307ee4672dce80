#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;
    use task_tracker::libs::config::{Config, FILE_ENV, TIME_FORMAT_ENV};
    use task_tracker::libs::formatter::DEFAULT_TIMESTAMP_FORMAT;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::resolve(None, lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.store_path, PathBuf::from("tasks.json"));
        assert_eq!(config.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
    }

    #[test]
    fn test_env_file_overrides_default() {
        let config = Config::resolve(None, lookup(&[(FILE_ENV, "/tmp/work.json")])).unwrap();
        assert_eq!(config.store_path, PathBuf::from("/tmp/work.json"));
    }

    #[test]
    fn test_empty_env_file_is_ignored() {
        let config = Config::resolve(None, lookup(&[(FILE_ENV, "")])).unwrap();
        assert_eq!(config.store_path, PathBuf::from("tasks.json"));
    }

    #[test]
    fn test_cli_file_overrides_env() {
        let config = Config::resolve(
            Some(PathBuf::from("cli.json")),
            lookup(&[(FILE_ENV, "env.json")]),
        )
        .unwrap();
        assert_eq!(config.store_path, PathBuf::from("cli.json"));
    }

    #[test]
    fn test_custom_timestamp_format() {
        let config = Config::resolve(None, lookup(&[(TIME_FORMAT_ENV, "%Y-%m-%d")])).unwrap();
        assert_eq!(config.timestamp_format, "%Y-%m-%d");

        let now = config.now();
        assert_eq!(now.len(), 10);
        assert_eq!(now.matches('-').count(), 2);
    }

    #[test]
    fn test_invalid_timestamp_format_is_rejected() {
        let err = Config::resolve(None, lookup(&[(TIME_FORMAT_ENV, "%Q")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid timestamp format: %Q");
    }
}
