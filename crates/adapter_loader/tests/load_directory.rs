//! Integration tests for loading a data directory tree.

use std::fs;
use std::path::Path;

use adapter_loader::{load_directory, LoaderConfig, LoaderError};
use tempfile::tempdir;

const HEADER: &str = "Date,Open,High,Low,Close,Volume,OpenInt\n";

fn write_price_file(dir: &Path, name: &str, rows: &[(&str, f64)]) {
    let mut content = String::from(HEADER);
    for (date, open) in rows {
        content.push_str(&format!("{},{},0,0,0,0,0\n", date, open));
    }
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_loads_all_groups() {
    let root = tempdir().unwrap();
    let stocks = root.path().join("Stocks");
    let etfs = root.path().join("ETFs");
    fs::create_dir(&stocks).unwrap();
    fs::create_dir(&etfs).unwrap();

    write_price_file(&stocks, "aapl.us.txt", &[("2017-11-09", 175.11), ("2017-11-10", 175.11)]);
    write_price_file(&stocks, "ibm.us.txt", &[("2017-11-09", 149.93)]);
    write_price_file(&etfs, "spy.us.txt", &[("2017-11-10", 257.73)]);

    let store = load_directory(root.path(), &LoaderConfig::default()).unwrap();

    assert_eq!(store.len(), 3);
    assert_eq!(
        store.keys().collect::<Vec<_>>(),
        vec!["aapl.us.txt", "ibm.us.txt", "spy.us.txt"]
    );
    assert_eq!(store.get("aapl.us.txt").unwrap().len(), 2);
}

#[test]
fn test_caps_files_per_group_in_name_order() {
    let root = tempdir().unwrap();
    let group = root.path().join("Stocks");
    fs::create_dir(&group).unwrap();

    for name in ["d.us.txt", "b.us.txt", "a.us.txt", "c.us.txt"] {
        write_price_file(&group, name, &[("2012-01-03", 1.0)]);
    }

    let config = LoaderConfig::default().with_max_nodes_per_group(2);
    let store = load_directory(root.path(), &config).unwrap();

    assert_eq!(store.keys().collect::<Vec<_>>(), vec!["a.us.txt", "b.us.txt"]);
}

#[test]
fn test_skips_empty_files_and_root_files() {
    let root = tempdir().unwrap();
    let group = root.path().join("ETFs");
    fs::create_dir(&group).unwrap();

    write_price_file(&group, "full.us.txt", &[("2015-06-01", 10.0)]);
    fs::write(group.join("empty.us.txt"), HEADER).unwrap();
    fs::write(group.join("zero.us.txt"), "").unwrap();
    write_price_file(root.path(), "stray.us.txt", &[("2015-06-01", 10.0)]);

    let store = load_directory(root.path(), &LoaderConfig::default()).unwrap();

    assert_eq!(store.keys().collect::<Vec<_>>(), vec!["full.us.txt"]);
}

#[test]
fn test_duplicate_names_across_groups_fail() {
    let root = tempdir().unwrap();
    for group in ["ETFs", "Stocks"] {
        let dir = root.path().join(group);
        fs::create_dir(&dir).unwrap();
        write_price_file(&dir, "same.us.txt", &[("2015-06-01", 10.0)]);
    }

    let err = load_directory(root.path(), &LoaderConfig::default()).unwrap_err();
    assert!(matches!(err, LoaderError::InvalidSeries { .. }));
    assert!(err.path().ends_with("Stocks/same.us.txt"));
}

#[test]
fn test_malformed_file_aborts_load() {
    let root = tempdir().unwrap();
    let group = root.path().join("Stocks");
    fs::create_dir(&group).unwrap();

    write_price_file(&group, "good.us.txt", &[("2015-06-01", 10.0)]);
    fs::write(group.join("bad.us.txt"), format!("{}2015-06-01,oops\n", HEADER)).unwrap();

    let err = load_directory(root.path(), &LoaderConfig::default()).unwrap_err();
    assert!(matches!(err, LoaderError::InvalidValue { line: 2, .. }));
    assert!(err.path().ends_with("bad.us.txt"));
}

#[test]
fn test_file_as_root_is_rejected() {
    let root = tempdir().unwrap();
    let file = root.path().join("prices.csv");
    fs::write(&file, HEADER).unwrap();

    let err = load_directory(&file, &LoaderConfig::default()).unwrap_err();
    assert!(matches!(err, LoaderError::NotADirectory(_)));
}
