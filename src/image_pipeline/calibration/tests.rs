use crate::image_pipeline::calibration::{
    CalibrationConfig, CalibrationMaps, CalibrationState, vignette_gain,
};
use crate::image_pipeline::common::error::PipelineError;
use crate::image_pipeline::testing::ScriptedSensor;

#[test]
fn test_uniform_frame_has_no_defects() {
    let mut sensor = ScriptedSensor::uniform(4, 4, 128);
    let mut state = CalibrationState::default();

    let maps = state
        .calibrate(&mut sensor, 4, 4, &CalibrationConfig::default())
        .unwrap();

    assert_eq!(maps.defects.len(), 16);
    assert_eq!(maps.vignette.len(), 16);
    assert_eq!(maps.defects.defect_count(), 0);
}

#[test]
fn test_vignette_symmetric_and_peaks_at_corner() {
    let mut sensor = ScriptedSensor::uniform(4, 4, 128);
    let mut state = CalibrationState::default();
    let maps = state
        .calibrate(&mut sensor, 4, 4, &CalibrationConfig::default())
        .unwrap();

    // Centre is (2, 2); mirrors stay inside the frame for offsets of at most 1
    for dy in -1isize..=1 {
        for dx in -1isize..=1 {
            let a = maps.vignette.gain((2 + dx) as usize, (2 + dy) as usize);
            let b = maps.vignette.gain((2 - dx) as usize, (2 - dy) as usize);
            let c = maps.vignette.gain((2 - dx) as usize, (2 + dy) as usize);
            assert_eq!(a, b);
            assert_eq!(a, c);
        }
    }

    assert_eq!(maps.vignette.gain(2, 2), 1.0);
    assert!((maps.vignette.gain(0, 0) - 1.35).abs() < 1e-6);
    for y in 0..4 {
        for x in 0..4 {
            assert!(maps.vignette.gain(x, y) <= maps.vignette.gain(0, 0));
        }
    }
}

#[test]
fn test_vignette_grows_with_distance() {
    let (w, h) = (64, 48);
    let mut previous = vignette_gain(32, 24, w, h, 0.35);
    assert_eq!(previous, 1.0);
    for step in 1..=24 {
        let gain = vignette_gain(32 - step, 24 - step, w, h, 0.35);
        assert!(gain > previous);
        previous = gain;
    }
    assert!((vignette_gain(0, 0, w, h, 0.35) - 1.35).abs() < 1e-6);
}

#[test]
fn test_defect_thresholds_are_exclusive() {
    let frame = vec![9, 10, 11, 128, 244, 245, 246, 255, 0];
    let maps = CalibrationMaps::build(&frame, 3, 3, &CalibrationConfig::default()).unwrap();

    let flags: Vec<bool> = (0..9).map(|i| maps.defects.is_defective(i % 3, i / 3)).collect();
    assert_eq!(
        flags,
        vec![true, false, false, false, false, false, true, true, true]
    );
}

#[test]
fn test_calibration_is_idempotent() {
    let mut sensor = ScriptedSensor::from_fn(8, 8, |_, x, y| ((x * 37 + y * 91) % 256) as u8);
    let mut state = CalibrationState::default();
    let config = CalibrationConfig::default();

    let first = state.calibrate(&mut sensor, 8, 8, &config).unwrap().clone();
    assert_eq!(sensor.reads.len(), 1);

    let second = state.calibrate(&mut sensor, 8, 8, &config).unwrap().clone();
    assert_eq!(sensor.reads.len(), 1);
    assert_eq!(first, second);
    assert!(state.is_calibrated());
}

#[test]
fn test_later_calibration_keeps_first_maps() {
    let mut sensor = ScriptedSensor::uniform(8, 8, 100);
    let mut state = CalibrationState::default();
    let config = CalibrationConfig::default();

    state.calibrate(&mut sensor, 8, 8, &config).unwrap();
    let maps = state.calibrate(&mut sensor, 4, 4, &config).unwrap();

    assert_eq!(maps.dimensions(), (8, 8));
    assert_eq!(sensor.reads.len(), 1);
}

#[test]
fn test_calibration_reads_full_frame_at_origin() {
    let mut sensor = ScriptedSensor::uniform(6, 4, 100);
    let mut state = CalibrationState::default();
    state
        .calibrate(&mut sensor, 6, 4, &CalibrationConfig::default())
        .unwrap();

    let crop = sensor.reads[0];
    assert_eq!((crop.x, crop.y, crop.width, crop.height), (0, 0, 6, 4));
}

#[test]
fn test_zero_sized_frame_rejected() {
    let result = CalibrationMaps::build(&[], 0, 4, &CalibrationConfig::default());
    assert!(matches!(result, Err(PipelineError::InvalidDimensions(0, 4))));
}

#[test]
fn test_failed_calibration_stays_uncalibrated() {
    let mut sensor = ScriptedSensor::uniform(4, 4, 128);
    let mut state = CalibrationState::default();

    // Asking for a frame larger than the sensor makes the read fail
    let result = state.calibrate(&mut sensor, 8, 8, &CalibrationConfig::default());

    assert!(matches!(result, Err(PipelineError::CropOutOfBounds { .. })));
    assert!(!state.is_calibrated());
}
