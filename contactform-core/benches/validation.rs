use contactform_core::{
    render::apply, rules::is_valid_email, validate, validate_submission, ContactSubmission, Field,
    FormDocument,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    let cases = [
        ("valid", ContactSubmission::new("Jo", "jo@example.com", "hi")),
        ("blank", ContactSubmission::default()),
        ("bad_email", ContactSubmission::new("Jo", "not-an-email", "hi")),
    ];

    for (label, submission) in &cases {
        group.bench_with_input(BenchmarkId::new("submission", label), submission, |b, s| {
            b.iter(|| validate_submission(black_box(s)))
        });

        let fields = submission.fields();
        group.bench_with_input(BenchmarkId::new("fields", label), &fields, |b, f: &Vec<Field>| {
            b.iter(|| validate(black_box(f)))
        });
    }

    group.finish();
}

fn bench_email(c: &mut Criterion) {
    let mut group = c.benchmark_group("email_shape");
    let sizes = [16usize, 256, 4096];

    for &sz in &sizes {
        let email = format!("{}@{}.com", "a".repeat(sz / 2), "b".repeat(sz / 2));
        group.throughput(Throughput::Bytes(email.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sz), &email, |b, e| {
            b.iter(|| is_valid_email(black_box(e)))
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let submission = ContactSubmission::new("", "bad", "");
    let report = validate_submission(&submission);

    c.bench_function("apply_and_markup", |b| {
        b.iter(|| {
            let mut doc = FormDocument::with_values(&submission);
            apply(black_box(&report), &mut doc);
            doc.to_markup()
        })
    });
}

criterion_group!(benches, bench_validate, bench_email, bench_render);
criterion_main!(benches);
