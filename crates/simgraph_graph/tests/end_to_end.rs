//! End-to-end graph assembly over small hand-built markets.

use chrono::Datelike;
use simgraph_core::types::{Date, SeriesStore, TimeSeries};
use simgraph_graph::{
    align, compare, overlap, EdgePolicy, GraphAssembler, SimilarityScorer, MAX_NUMBER_OF_BINS,
};

fn business_days(start: Date, count: usize) -> Vec<Date> {
    let mut dates = Vec::with_capacity(count);
    let mut current = start.into_inner();
    while dates.len() < count {
        if current.weekday().number_from_monday() <= 5 {
            dates.push(Date::from(current));
        }
        current = current.succ_opt().unwrap();
    }
    dates
}

fn ticks(count: usize, seed: usize) -> Vec<f64> {
    (0..count)
        .map(|k| 20.0 + ((k * 31 + seed * 17) % 9) as f64 * 0.05)
        .collect()
}

#[test]
fn test_three_instrument_market() {
    let dates = business_days(Date::from_ymd(2016, 1, 4).unwrap(), 60);
    let prices = ticks(60, 1);
    let later = business_days(Date::from_ymd(2018, 6, 1).unwrap(), 40);

    let store = SeriesStore::from_columns(vec![
        ("AAA", dates.clone(), prices.clone()),
        ("BBB", dates.clone(), prices.clone()),
        ("CCC", later, ticks(40, 2)),
    ])
    .unwrap();

    let graph = GraphAssembler::default().build(store);

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.weight("AAA", "BBB"), Some(1.0));
    assert_eq!(graph.weight("AAA", "CCC"), Some(0.0));
    assert_eq!(graph.weight("BBB", "CCC"), Some(0.0));

    let strong: Vec<_> = graph.edges().filter(|e| e.weight > 0.5).collect();
    assert_eq!(strong.len(), 1);
    assert_eq!((strong[0].source, strong[0].target), ("AAA", "BBB"));
}

#[test]
fn test_constant_prices_share_dates() {
    let dates = vec![
        Date::from_ymd(2020, 3, 2).unwrap(),
        Date::from_ymd(2020, 3, 3).unwrap(),
        Date::from_ymd(2020, 3, 4).unwrap(),
    ];
    let store = SeriesStore::from_columns(vec![
        ("A", dates.clone(), vec![10.0, 10.0, 10.0]),
        ("B", dates, vec![5.0, 5.0, 5.0]),
    ])
    .unwrap();

    let graph = GraphAssembler::default().build(store);
    assert_eq!(graph.weight("A", "B"), Some(1.0));
}

#[test]
fn test_node_payload_is_original_series() {
    let dates = business_days(Date::from_ymd(2012, 5, 1).unwrap(), 5);
    let values = vec![1.5, 1.6, 1.55, 1.6, 1.7];
    let original = TimeSeries::new("ge.us.txt", dates, values).unwrap();

    let mut store = SeriesStore::new();
    store.insert(original.clone()).unwrap();
    let graph = GraphAssembler::default().build(store);

    assert_eq!(graph.series("ge.us.txt"), Some(&original));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_partial_calendar_overlap() {
    // B trades every other business day, starting later
    let dates_a = business_days(Date::from_ymd(2019, 1, 1).unwrap(), 80);
    let dates_b: Vec<Date> = dates_a[20..].iter().step_by(2).copied().collect();
    let values_a: Vec<f64> = (0..80).map(|k| (k % 4) as f64).collect();
    let values_b: Vec<f64> = (20..80).step_by(2).map(|k| (k % 4) as f64 + 100.0).collect();

    let a = TimeSeries::new("A", dates_a, values_a).unwrap();
    let b = TimeSeries::new("B", dates_b, values_b).unwrap();

    let range = overlap(&a, &b).unwrap();
    let pairs = align(&a, &b, &range);
    assert_eq!(pairs.len(), 30);

    let report = compare(&a, &b, &SimilarityScorer::default());
    assert_eq!(report.aligned, 30);
    // Values are a relabeling of each other on shared dates
    assert_eq!(report.weight, 1.0);
}

#[test]
fn test_long_history_uses_recent_window() {
    let n = MAX_NUMBER_OF_BINS + 250;
    let dates = business_days(Date::from_ymd(2005, 2, 25).unwrap(), n);
    // Agreement in the distant past, independence in the recent window
    let a: Vec<f64> = (0..n).map(|k| (k % 2) as f64).collect();
    let b: Vec<f64> = (0..n)
        .map(|k| if k < 250 { (k % 2) as f64 } else { ((k / 2) % 2) as f64 })
        .collect();

    let store = SeriesStore::from_columns(vec![("A", dates.clone(), a), ("B", dates, b)]).unwrap();
    let graph = GraphAssembler::default()
        .with_edge_policy(EdgePolicy::OmitZero)
        .build(store);

    assert!(graph.weight("A", "B").is_none());
}

#[test]
fn test_every_weight_in_unit_interval() {
    let base = Date::from_ymd(2014, 9, 1).unwrap();
    let columns: Vec<(String, Vec<Date>, Vec<f64>)> = (0..8)
        .map(|i| {
            let dates = business_days(base, 50 + i * 5);
            let values = ticks(dates.len(), i);
            (format!("s{:02}", i), dates, values)
        })
        .collect();

    let graph = GraphAssembler::default().build(SeriesStore::from_columns(columns).unwrap());

    assert_eq!(graph.edge_count(), 8 * 7 / 2);
    for edge in graph.edges() {
        assert!(edge.source < edge.target);
        assert!((0.0..=1.0).contains(&edge.weight));
    }
}
