use std::fs;

use exam_queue::storage::record::HEADER;
use exam_queue::{
    App, Config, ExamError, FileStudentStore, InMemoryStudentStore, StoreConfig, StoreKind,
    Student, StudentStore,
};
use tempfile::TempDir;

fn no_seed_config(kind: StoreKind, data_file: std::path::PathBuf) -> Config {
    Config {
        exam_name: "集成测试".to_string(),
        store: StoreConfig { kind, data_file },
        seed_when_empty: false,
        ..Config::default()
    }
}

#[test]
fn test_end_to_end_scenario() {
    let _ = tracing_subscriber::fmt::try_init();

    let mut store = InMemoryStudentStore::new();
    store.save(&Student::new(1, "A", 85.5)).unwrap();
    store.save(&Student::new(2, "B", 92.0)).unwrap();
    store.save(&Student::new(3, "C", 92.0)).unwrap();

    let config = no_seed_config(StoreKind::Memory, "unused.txt".into());
    let mut app = App::with_store(config, Box::new(store));
    let report = app.run().expect("考试应该成功");

    let ids: Vec<i64> = report.results.iter().map(|s| s.id).collect();
    let marks: Vec<u8> = report.results.iter().map(|s| s.mark()).collect();
    assert_eq!(ids, vec![2, 3, 1]);
    assert_eq!(marks, vec![10, 10, 9]);

    let stats = report.statistics.expect("应该有统计");
    assert_eq!(stats.count, 3);
    assert_eq!(stats.passed, 3);
    assert_eq!(stats.failed, 0);
    assert_eq!(format!("{:.2}", stats.mean_rating), "89.83");
    assert_eq!(format!("{:.2}", stats.mean_mark), "9.67");

    // 分数已写回存储
    assert_eq!(app.store().find_by_id(1).unwrap().mark(), 9);
}

#[test]
fn test_file_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("students.txt");

    let mut originals = vec![
        Student::new(1, "张伟", 85.5),
        Student::new(2, "李娜", 92.0),
        Student::new(3, "王芳", 78.3),
        Student::new(4, "刘洋", 61.04),
    ];
    originals[0].set_mark(9);
    originals[1].set_mark(10);

    let mut writer = FileStudentStore::new(&path);
    writer.save_all(&originals).unwrap();

    let mut reader = FileStudentStore::new(&path);
    let loaded = reader.get_all().unwrap();
    assert_eq!(loaded.len(), originals.len());

    for original in &originals {
        let back = reader.find_by_id(original.id).unwrap();
        assert_eq!(back.name, original.name);
        assert_eq!(back.mark(), original.mark());
        assert_eq!(format!("{:.1}", back.rating), format!("{:.1}", original.rating));
    }
}

#[test]
fn test_parse_resilience() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("students.txt");
    fs::write(
        &path,
        "# 学生名单\n1,张伟,85.5\n2,李娜,92.0,0\n3,,70\n4,刘洋,61.0,7\n",
    )
    .unwrap();

    let mut store = FileStudentStore::new(&path);
    let students = store.get_all().unwrap();

    let ids: Vec<i64> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 4]);
    assert_eq!(students[2].mark(), 7);
}

#[test]
fn test_file_backed_run_persists_marks() {
    let _ = tracing_subscriber::fmt::try_init();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data").join("students.txt");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "1,A,85.5\n2,B,92.0\n3,C,92.0\n4,D,49.9\n").unwrap();

    let mut config = no_seed_config(StoreKind::File, path.clone());
    config.report_path = Some(dir.path().join("report.json"));

    let mut app = App::initialize(config);
    let report = app.run().unwrap();

    let ids: Vec<i64> = report.results.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![2, 3, 1, 4]);

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![HEADER, "1,A,85.5,9", "2,B,92.0,10", "3,C,92.0,10", "4,D,49.9,5"]
    );

    let json = fs::read_to_string(dir.path().join("report.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["statistics"]["failed"], 1);
    assert_eq!(value["results"][0]["id"], 2);
}

#[test]
fn test_seeding_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("students.txt");

    let mut config = no_seed_config(StoreKind::File, path.clone());
    config.seed_when_empty = true;

    let mut app = App::initialize(config);
    let report = app.run().unwrap();
    assert_eq!(report.results.len(), 5);

    // 第二次运行从文件读取同样的学生
    let mut store = FileStudentStore::new(&path);
    assert_eq!(store.get_all().unwrap().len(), 5);
}

#[test]
fn test_empty_input_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("students.txt");
    fs::write(&path, "# 空文件\n").unwrap();

    let mut app = App::initialize(no_seed_config(StoreKind::File, path));
    let err = app.run().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ExamError>(),
        Some(ExamError::EmptyInput { .. })
    ));
}
