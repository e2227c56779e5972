// benches/decode.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use qldt_grades::rpc::decode::{decode_course_grades, extract_payload};

/// Reply with `n` members plus the usual type-table noise.
fn sample_reply(n: usize) -> String {
    let mut table = vec![
        s("java.util.ArrayList/4159755760"),
        s("com.soict.edu.core.shared.model.CourseMember/2617386617"),
    ];
    for i in 0..n {
        let obj = format!(
            r#"{{"staffId":{i},"staffName":"Giảng viên {i}","grade":{},"type":{}}}"#,
            (i % 10) as f64 + 0.5,
            1 + i % 2
        );
        table.push(serde_json::to_string(&obj).unwrap());
        table.push(s("java.lang.Integer/3438268394"));
    }
    let ints: Vec<String> = (0..n * 4).map(|i| (i % 97).to_string()).collect();
    format!("//OK[{},[{}],0,7]", ints.join(","), table.join(","))
}

fn s(t: &str) -> String {
    serde_json::to_string(t).unwrap()
}

fn bench_decode(c: &mut Criterion) {
    let small = sample_reply(12);
    let large = sample_reply(400);

    c.bench_function("extract_payload_400", |b| {
        b.iter(|| extract_payload(black_box(&large)).map(str::len))
    });

    c.bench_function("decode_12", |b| {
        b.iter(|| {
            let rows = decode_course_grades(black_box(&small)).unwrap();
            black_box(rows.len())
        })
    });

    c.bench_function("decode_400", |b| {
        b.iter(|| {
            let rows = decode_course_grades(black_box(&large)).unwrap();
            black_box(rows.len())
        })
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
