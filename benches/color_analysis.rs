use criterion::{black_box, criterion_group, criterion_main, Criterion};
use palette::Hsl;
use colorguide::{AnalyzerConfig, ColorClassifier, ColorConverter, FrameAnalyzer, FrameSample, Plane, YuvSample};

fn benchmark_conversion_chain(c: &mut Criterion) {
    let converter = ColorConverter::new();

    c.bench_function("yuv_to_hsl", |b| {
        b.iter(|| {
            let rgb = converter.yuv_to_rgb(black_box(YuvSample { y: 76, u: -44, v: 127 }));
            let hsv = converter.rgb_to_hsv(rgb);
            converter.hsv_to_hsl(hsv)
        })
    });
}

fn benchmark_classification(c: &mut Criterion) {
    let classifier = ColorClassifier::new();

    c.bench_function("classify_hue_sweep", |b| {
        b.iter(|| {
            for hue in 0..360 {
                black_box(classifier.classify(Hsl::new(hue as f32, 0.8, 0.5)));
            }
        })
    });
}

fn benchmark_full_pipeline(c: &mut Criterion) {
    let y = vec![76u8; 64];
    let u = vec![84u8; 16];
    let v = vec![255u8; 16];
    let analyzer = FrameAnalyzer::with_config(AnalyzerConfig::unthrottled()).unwrap();

    c.bench_function("classify_frame", |b| {
        b.iter(|| {
            let frame = FrameSample::new(
                8,
                8,
                Plane::new(black_box(&y), 1, 8),
                Plane::new(&u, 1, 4),
                Plane::new(&v, 1, 4),
            )
            .unwrap();
            analyzer.classify(&frame).unwrap()
        })
    });
}

criterion_group!(
    benches,
    benchmark_conversion_chain,
    benchmark_classification,
    benchmark_full_pipeline
);
criterion_main!(benches);
