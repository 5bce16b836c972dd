#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tasklist::libs::error::StoreError;
    use tasklist::libs::store::Store;
    use tasklist::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Each test gets its own directory and a store file inside it.
    struct StoreTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
        store: Store,
    }

    impl TestContext for StoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("tasks.json");
            let store = Store::at(&path);
            StoreTestContext {
                _temp_dir: temp_dir,
                path,
                store,
            }
        }
    }

    fn sample_tasks() -> Vec<Task> {
        let mut done = Task::new(2, "File taxes", Some("2025-04-15".to_string()), vec!["home".into(), "money".into()]);
        done.done = true;
        vec![
            Task::new(1, "Buy milk", None, vec![]),
            done,
            Task::new(3, "Call mom", None, vec!["family".into(), "family".into()]),
        ]
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_round_trip(ctx: &mut StoreTestContext) {
        let tasks = sample_tasks();
        ctx.store.save(&tasks).unwrap();
        assert_eq!(ctx.store.load(), tasks);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_round_trip_empty(ctx: &mut StoreTestContext) {
        ctx.store.save(&[]).unwrap();
        assert!(ctx.path.exists());
        assert!(ctx.store.load().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_missing_file_is_empty(ctx: &mut StoreTestContext) {
        assert!(!ctx.path.exists());
        assert!(ctx.store.load().is_empty());
        assert!(ctx.store.try_load().unwrap().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_corrupt_file_is_empty(ctx: &mut StoreTestContext) {
        fs::write(&ctx.path, "{ this is not json").unwrap();
        assert!(ctx.store.load().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_try_load_reports_corruption(ctx: &mut StoreTestContext) {
        fs::write(&ctx.path, "[{\"id\": \"one\"}]").unwrap();
        let err = ctx.store.try_load().unwrap_err();
        assert!(err.is_corrupt());
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_invalid_utf8_is_corrupt(ctx: &mut StoreTestContext) {
        fs::write(&ctx.path, b"[{\"id\": 1, \"title\": \"\xff\xfe keep me\"}]").unwrap();

        let err = ctx.store.try_load().unwrap_err();
        assert!(err.is_corrupt());
        assert!(ctx.store.load().is_empty());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_unreadable_path_is_not_corrupt(ctx: &mut StoreTestContext) {
        fs::create_dir(&ctx.path).unwrap();

        let err = ctx.store.try_load().unwrap_err();
        assert!(!err.is_corrupt());
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_missing_optional_fields_load_with_defaults(ctx: &mut StoreTestContext) {
        fs::write(&ctx.path, r#"[{"id": 1, "title": "Legacy"}]"#).unwrap();
        let tasks = ctx.store.load();
        assert_eq!(tasks, vec![Task::new(1, "Legacy", None, vec![])]);
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_saved_file_layout(ctx: &mut StoreTestContext) {
        ctx.store.save(&[Task::new(1, "Buy milk", None, vec![])]).unwrap();
        let content = fs::read_to_string(&ctx.path).unwrap();

        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "id": 1, "title": "Buy milk", "done": false, "due_date": null, "tags": [] }])
        );
        // Four-space indentation
        assert!(content.contains("\n    {\n        \"id\": 1,"));
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_replaces_whole_collection(ctx: &mut StoreTestContext) {
        ctx.store.save(&sample_tasks()).unwrap();
        let shorter = vec![Task::new(1, "Only one", None, vec![])];
        ctx.store.save(&shorter).unwrap();

        assert_eq!(ctx.store.load(), shorter);
        assert!(!ctx.path.with_file_name("tasks.json.tmp").exists());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_save_creates_parent_directories(ctx: &mut StoreTestContext) {
        let nested = ctx.path.with_file_name("nested").join("deeper").join("tasks.json");
        let store = Store::at(&nested);
        store.save(&sample_tasks()).unwrap();
        assert_eq!(store.load(), sample_tasks());
    }

    #[test_context(StoreTestContext)]
    #[test]
    fn test_backup_corrupt(ctx: &mut StoreTestContext) {
        fs::write(&ctx.path, "garbage").unwrap();
        let backup = ctx.store.backup_corrupt().unwrap();

        assert_eq!(backup, ctx.path.with_file_name("tasks.json.bak"));
        assert_eq!(fs::read_to_string(backup).unwrap(), "garbage");
    }
}
