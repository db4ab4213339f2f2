use crate::image_pipeline::autofocus::laplacian_sharpness;
use crate::image_pipeline::bayer::color_at;
use crate::image_pipeline::common::error::PipelineError;
use crate::image_pipeline::scene::Scene;
use crate::image_pipeline::sensor::{CameraSensor, CropWindow, SensorConfig, SimulatedSensor};

fn clean_config(optimal_focus: i32) -> SensorConfig {
    SensorConfig::builder()
        .noise_level(0)
        .bad_sensor(false)
        .optimal_focus(Some(optimal_focus))
        .lens_falloff(0.0)
        .build()
}

fn gradient_scene(width: usize, height: usize) -> Scene {
    Scene::from_fn(width, height, |x, y| {
        [(x * 3) as f32, (y * 5) as f32, ((x + y) * 2) as f32]
    })
    .unwrap()
}

fn checker_scene(width: usize, height: usize) -> Scene {
    Scene::from_fn(width, height, |x, y| {
        let v = if (x / 2 + y / 2) % 2 == 0 { 200.0 } else { 40.0 };
        [v, v, v]
    })
    .unwrap()
}

fn full_frame(sensor: &mut SimulatedSensor) -> Vec<u8> {
    let (w, h) = (sensor.image_width(), sensor.image_height());
    let mut frame = vec![0u8; w * h];
    sensor
        .read_sensor_data(&mut frame, CropWindow::full_frame(w, h))
        .unwrap();
    frame
}

#[test]
fn test_in_focus_clean_exposure_samples_bayer_channel() {
    let scene = gradient_scene(16, 12);
    let mut sensor = SimulatedSensor::new(scene.clone(), clean_config(1_000)).unwrap();
    sensor.set_focus(1_000);

    let frame = full_frame(&mut sensor);

    for y in 0..12 {
        for x in 0..16 {
            let channel = color_at(x as isize, y as isize).channel();
            assert_eq!(frame[y * 16 + x], scene.channel(x, y, channel) as u8);
        }
    }
}

#[test]
fn test_same_seed_same_exposures() {
    let config = SensorConfig::builder().noise_level(3).seed(7).build();
    let mut a = SimulatedSensor::new(checker_scene(24, 24), config.clone()).unwrap();
    let mut b = SimulatedSensor::new(checker_scene(24, 24), config).unwrap();

    assert_eq!(a.optimal_focus(), b.optimal_focus());
    assert_eq!(full_frame(&mut a), full_frame(&mut b));
}

#[test]
fn test_drawn_optimal_focus_in_range() {
    let config = SensorConfig::builder().seed(1234).build();
    let sensor = SimulatedSensor::new(checker_scene(8, 8), config).unwrap();
    assert!((20_000..=400_000).contains(&sensor.optimal_focus()));
}

#[test]
fn test_defocus_reduces_sharpness() {
    let mut sensor = SimulatedSensor::new(checker_scene(64, 64), clean_config(100_000)).unwrap();
    let crop = CropWindow::new(16, 16, 32, 32);
    let mut patch = vec![0u8; crop.len()];

    sensor.set_focus(100_000);
    sensor.read_sensor_data(&mut patch, crop).unwrap();
    let sharp = laplacian_sharpness(&patch, crop);

    sensor.set_focus(160_000);
    sensor.read_sensor_data(&mut patch, crop).unwrap();
    let blurred = laplacian_sharpness(&patch, crop);

    assert!(sharp > blurred, "sharp {} blurred {}", sharp, blurred);
    assert_eq!(sensor.exposure_count(), 2);
}

#[test]
fn test_lens_falloff_darkens_corners() {
    let scene = Scene::uniform(8, 8, [200.0, 200.0, 200.0]).unwrap();
    let config = SensorConfig::builder()
        .noise_level(0)
        .optimal_focus(Some(5_000))
        .build();
    let mut sensor = SimulatedSensor::new(scene, config).unwrap();
    sensor.set_focus(5_000);

    let frame = full_frame(&mut sensor);

    assert_eq!(frame[4 * 8 + 4], 200);
    // 200 / 1.35 = 148.1
    assert_eq!(frame[0], 148);
}

#[test]
fn test_bad_sensor_has_stuck_sites() {
    let scene = Scene::uniform(64, 64, [128.0, 128.0, 128.0]).unwrap();
    let config = SensorConfig::builder().bad_sensor(true).seed(99).build();
    let mut sensor = SimulatedSensor::new(scene, config).unwrap();

    let frame = full_frame(&mut sensor);

    assert!(frame.iter().any(|&v| v == 0 || v == 255));
}

#[test]
fn test_rejects_invalid_reads() {
    let mut sensor = SimulatedSensor::new(checker_scene(8, 8), clean_config(1_000)).unwrap();

    let mut small = vec![0u8; 3];
    assert!(matches!(
        sensor.read_sensor_data(&mut small, CropWindow::new(0, 0, 2, 2)),
        Err(PipelineError::BufferSizeMismatch { expected: 4, actual: 3 })
    ));

    let mut buffer = vec![0u8; 16];
    assert!(matches!(
        sensor.read_sensor_data(&mut buffer, CropWindow::new(6, 6, 4, 4)),
        Err(PipelineError::CropOutOfBounds { .. })
    ));
    assert_eq!(sensor.exposure_count(), 0);
}

#[test]
fn test_defocus_radius_at_extreme_focus_error() {
    let config = SensorConfig::builder()
        .optimal_focus(Some(i32::MIN + 1))
        .build();
    let mut sensor = SimulatedSensor::new(checker_scene(8, 8), config).unwrap();

    sensor.set_focus(i32::MAX);
    assert_eq!(sensor.defocus_radius(), sensor.config().max_blur_radius);
    sensor.set_focus(i32::MIN + 1);
    assert_eq!(sensor.defocus_radius(), 0.0);
}

#[test]
fn test_builder_clamps_noise_level() {
    let config = SensorConfig::builder().noise_level(9).build();
    assert_eq!(config.noise_level, 4);
    assert_eq!(SensorConfig::default().stuck_pixel_rate(), 0.0002);
}
