#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tasklist::libs::config::Config;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
        config_path: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config_path = temp_dir.path().join("config.json");
            ConfigTestContext {
                _temp_dir: temp_dir,
                config_path,
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.tasks_file.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            tasks_file: Some(PathBuf::from("/tmp/my-tasks.json")),
        };
        config.save_to(&ctx.config_path).unwrap();

        let read_config = Config::read_from(&ctx.config_path).unwrap();
        assert_eq!(read_config, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_empty_object(ctx: &mut ConfigTestContext) {
        std::fs::write(&ctx.config_path, "{}").unwrap();
        let config = Config::read_from(&ctx.config_path).unwrap();
        assert!(config.tasks_file.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_invalid_config_fails(ctx: &mut ConfigTestContext) {
        std::fs::write(&ctx.config_path, "[1, 2").unwrap();
        assert!(Config::read_from(&ctx.config_path).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_config_falls_back_to_default(ctx: &mut ConfigTestContext) {
        std::fs::write(&ctx.config_path, "{ \"tasks_file\": 42 ").unwrap();
        assert_eq!(Config::read_from_or_default(&ctx.config_path), Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_or_default_keeps_valid_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            tasks_file: Some(PathBuf::from("elsewhere.json")),
        };
        config.save_to(&ctx.config_path).unwrap();
        assert_eq!(Config::read_from_or_default(&ctx.config_path), config);
    }
}
