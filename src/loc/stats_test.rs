use super::*;

fn delta(total: usize, code: usize, comment: usize, blank: usize) -> FileStats {
    FileStats {
        files: 1,
        total,
        code,
        blank,
        comment,
    }
}

#[test]
fn record_creates_entry_on_first_file() {
    let mut agg = Aggregator::new();
    assert!(agg.is_empty());
    agg.record("C", delta(10, 5, 3, 2));
    assert_eq!(agg.len(), 1);
    assert_eq!(agg.languages().get("C"), Some(&delta(10, 5, 3, 2)));
}

#[test]
fn record_adds_field_wise() {
    let mut agg = Aggregator::new();
    agg.record("Go", delta(4, 4, 0, 0));
    agg.record("Go", delta(6, 2, 1, 3));
    let go = agg.languages().get("Go").unwrap();
    assert_eq!(go.files, 2);
    assert_eq!(go.total, 10);
    assert_eq!(go.code, 6);
    assert_eq!(go.comment, 1);
    assert_eq!(go.blank, 3);
}

#[test]
fn rollup_sums_all_languages() {
    let mut agg = Aggregator::new();
    agg.record("C", delta(10, 5, 3, 2));
    agg.record("Go", delta(4, 4, 0, 0));
    let total = agg.rollup();
    assert_eq!(total, FileStats {
        files: 2,
        total: 14,
        code: 9,
        blank: 2,
        comment: 3,
    });
}

#[test]
fn rollup_of_empty_is_zero() {
    assert_eq!(Aggregator::new().rollup(), FileStats::default());
}

#[test]
fn merge_combines_overlapping_and_new_languages() {
    let mut a = Aggregator::new();
    a.record("C", delta(10, 5, 3, 2));
    let mut b = Aggregator::new();
    b.record("C", delta(1, 1, 0, 0));
    b.record("Lua", delta(2, 0, 2, 0));

    a.merge(b);
    assert_eq!(a.len(), 2);
    assert_eq!(a.languages().get("C").unwrap().files, 2);
    assert_eq!(a.languages().get("C").unwrap().code, 6);
    assert_eq!(a.languages().get("Lua").unwrap().comment, 2);
}

#[test]
fn serializes_with_pascal_case_keys() {
    let json = serde_json::to_value(delta(3, 1, 1, 1)).unwrap();
    assert_eq!(json["FileCount"], 1);
    assert_eq!(json["TotalLines"], 3);
    assert_eq!(json["CodeLines"], 1);
    assert_eq!(json["BlankLines"], 1);
    assert_eq!(json["CommentLines"], 1);
}
