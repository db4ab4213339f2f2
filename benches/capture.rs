use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use camera_pipeline_rs::image_pipeline::{
    correct_stripes, CalibrationConfig, CalibrationMaps, CameraPipeline, CpuDebayer,
    PipelineConfig, Scene, SensorConfig, SimulatedSensor,
};

fn checker_scene(width: usize, height: usize) -> Scene {
    Scene::from_fn(width, height, |x, y| {
        let v = if (x / 16 + y / 16) % 2 == 0 { 200.0 } else { 40.0 };
        [v, v * 0.8, v * 0.6]
    })
    .expect("valid scene")
}

fn quiet_sensor(width: usize, height: usize) -> SimulatedSensor {
    let config = SensorConfig::builder()
        .noise_level(0)
        .optimal_focus(Some(60_000))
        .build();
    SimulatedSensor::new(checker_scene(width, height), config).expect("valid sensor")
}

fn mock_mosaic(width: usize, height: usize) -> Vec<u8> {
    (0..width * height)
        .map(|i| (40 + (i % width + i / width) % 160) as u8)
        .collect()
}

fn benchmark_capture_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("capture_by_size");
    group.sample_size(10);

    for (width, height, label) in [(64, 64, "64x64"), (256, 256, "256x256"), (512, 512, "512x512")] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &(width, height), |b, &(w, h)| {
            b.iter(|| {
                let mut sensor = quiet_sensor(w, h);
                let mut pipeline = CameraPipeline::with_initial_focus(&mut sensor, 650);
                black_box(pipeline.capture().expect("capture"));
            });
        });
    }

    group.finish();
}

fn benchmark_autofocus_impact(c: &mut Criterion) {
    let mut group = c.benchmark_group("autofocus_impact");
    group.sample_size(10);

    for (autofocus, label) in [(true, "with_autofocus"), (false, "without_autofocus")] {
        group.bench_function(label, |b| {
            b.iter(|| {
                let mut sensor = quiet_sensor(256, 256);
                let config = PipelineConfig::builder().autofocus(autofocus).build();
                let mut pipeline = CameraPipeline::new(&mut sensor, config);
                black_box(pipeline.capture().expect("capture"));
            });
        });
    }

    group.finish();
}

fn benchmark_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    let (width, height) = (512, 512);
    let mosaic = mock_mosaic(width, height);
    let maps = CalibrationMaps::build(&mosaic, width, height, &CalibrationConfig::default())
        .expect("maps");

    group.bench_function("correct_stripes", |b| {
        b.iter(|| {
            let mut buffer = mosaic.clone();
            correct_stripes(black_box(&mut buffer), width, height).expect("stripes");
        });
    });

    group.bench_function("demosaic", |b| {
        let debayer = CpuDebayer::new();
        b.iter(|| {
            black_box(
                debayer
                    .process(black_box(&mosaic), width, height, &maps)
                    .expect("demosaic"),
            );
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_capture_sizes,
    benchmark_autofocus_impact,
    benchmark_stages
);
criterion_main!(benches);
