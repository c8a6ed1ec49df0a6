use criterion::{black_box, criterion_group, criterion_main, Criterion};
use timetable_engine::TimetableBuilder;

/// Builds a moderately loaded instance: 5 days x 6 slots, 20 professors
/// each competent in one of 4 course codes, 4 courses, 40 groups each
/// taking all 4 courses.
fn build_instance() -> TimetableBuilder {
    let mut b = TimetableBuilder::new();

    let mut slot_id = 1u32;
    let mut all_slot_ids = Vec::new();
    for day in 1..=5u8 {
        for hour in 8..14u8 {
            b.add_time_slot(slot_id, day, hour, 0, hour + 1, 0).unwrap();
            all_slot_ids.push(slot_id);
            slot_id += 1;
        }
    }

    let codes = ["MATH", "PHYS", "CHEM", "BIO"];
    for p in 1..=20u32 {
        let code = codes[(p as usize - 1) % codes.len()].to_string();
        b.add_professor(p, format!("Professor {p}"), &all_slot_ids, &[code])
            .unwrap();
    }

    for (i, code) in codes.iter().enumerate() {
        b.add_course((i + 1) as u32, *code, *code, 30, 1, true).unwrap();
    }

    let course_ids: Vec<u32> = (1..=codes.len() as u32).collect();
    for g in 1..=40u32 {
        b.add_group(g, 1, &course_ids).unwrap();
    }

    b
}

fn greedy_solve(c: &mut Criterion) {
    c.bench_function("greedy_solve_moderate_instance", |b| {
        b.iter(|| {
            let mut builder = build_instance();
            let report = builder.solve(5.0).unwrap();
            black_box(report);
        });
    });
}

criterion_group!(benches, greedy_solve);
criterion_main!(benches);
