//! Performance benchmarks for the Attendance Engine.
//!
//! This benchmark suite verifies that aggregation stays fast enough to
//! recompute on every dashboard read:
//! - Single employee classification: < 1μs mean
//! - Cluster summary over 100 employees: < 100μs mean
//! - Cluster summary over 1000 employees: < 1ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use attendance_engine::accounting::{classify_attendance, summarize_clusters};
use attendance_engine::models::{
    AttendanceRecord, Cluster, Employee, EmployeeWithAttendance, Kid, KidNames, OtherPerson,
};
use chrono::Utc;

/// Creates a roster entry; every third employee is pending, the rest have
/// a mix of flags and others.
fn create_entry(index: usize) -> EmployeeWithAttendance {
    let cluster = Cluster::ALL[index % 3];
    let employee = Employee {
        emp_id: format!("EMP{index:04}"),
        name: format!("Employee {index}"),
        cluster,
        eligibility: if index % 4 == 0 {
            "Not Eligible".to_string()
        } else {
            "Eligible".to_string()
        },
        expected_count: (index % 5) as u32,
        kids: vec![
            Kid {
                name: "Anu".to_string(),
                age_bracket: "5-10".to_string(),
            },
            Kid {
                name: "Vikram".to_string(),
                age_bracket: "0-5".to_string(),
            },
        ],
    };

    let attendance_record = (index % 3 != 0).then(|| AttendanceRecord {
        employee: true,
        spouse: index % 2 == 0,
        kid1: true,
        kid2: index % 5 == 0,
        kid3: false,
        kid_names: KidNames {
            kid1: Some("Anu".to_string()),
            kid2: Some("Vikram".to_string()),
            kid3: None,
        },
        others: if index % 7 == 0 {
            vec![OtherPerson {
                name: "Lakshmi".to_string(),
                relation: "Mother".to_string(),
            }]
        } else {
            vec![]
        },
        marked_by: "vja1".to_string(),
        marked_at: Utc::now(),
    });

    EmployeeWithAttendance {
        employee,
        attendance_record,
    }
}

fn create_roster(size: usize) -> Vec<EmployeeWithAttendance> {
    (0..size).map(create_entry).collect()
}

fn bench_classify_single(c: &mut Criterion) {
    let entry = create_entry(1);

    c.bench_function("classify_single_employee", |b| {
        b.iter(|| {
            classify_attendance(
                black_box(&entry.employee),
                black_box(entry.attendance_record.as_ref()),
            )
        })
    });
}

fn bench_summarize_clusters(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize_clusters");

    for size in [100, 1000] {
        let roster = create_roster(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &roster, |b, roster| {
            b.iter(|| summarize_clusters(black_box(roster)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify_single, bench_summarize_clusters);
criterion_main!(benches);
