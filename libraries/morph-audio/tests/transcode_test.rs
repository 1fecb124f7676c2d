//! Transcode pipeline tests
//!
//! End-to-end conversions through real files, plus the failure-path
//! guarantees: the failing stage is reported, later stages never run, and
//! no partial output file is ever left behind.

use morph_audio::{decode_file, transcode, Stage};
use morph_core::{ConversionRequest, MorphError};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write a WAV fixture with hound and return its path
fn wav_fixture(dir: &TempDir, name: &str, channels: u16, sample_rate: u32) -> PathBuf {
    let path = dir.path().join(name);
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for frame in 0..sample_rate as i32 {
        for channel in 0..i32::from(channels) {
            writer
                .write_sample(((frame * 7 + channel * 1000) % 20_000 - 10_000) as i16)
                .unwrap();
        }
    }
    writer.finalize().unwrap();
    path
}

#[test]
fn wav_to_flac_with_resample_and_mono() {
    let dir = TempDir::new().unwrap();
    let input = wav_fixture(&dir, "in.wav", 2, 44_100);
    let output = dir.path().join("out.flac");

    let request = ConversionRequest::new(Some(22_050), Some("hermite"), None)
        .unwrap()
        .with_mono();
    transcode(&input, &output, &request).unwrap();

    let decoded = decode_file(&output).unwrap();
    assert_eq!(decoded.channel_count(), 1);
    assert_eq!(decoded.sample_rate(), 22_050);
    // floor(44100 * 22050 / 44100) = 22050 samples
    assert_eq!(decoded.sample_count(), 22_050);
}

#[test]
fn wav_to_aiff_identity_conversion() {
    let dir = TempDir::new().unwrap();
    let input = wav_fixture(&dir, "in.wav", 2, 44_100);
    let output = dir.path().join("out.aiff");

    transcode(&input, &output, &ConversionRequest::default()).unwrap();

    let original = decode_file(&input).unwrap();
    let converted = decode_file(&output).unwrap();
    assert_eq!(converted.channel_count(), original.channel_count());
    assert_eq!(converted.sample_rate(), original.sample_rate());
    assert_eq!(converted.bit_depth(), original.bit_depth());
    assert_eq!(converted.channels(), original.channels());
}

#[test]
fn mono_selection_keeps_the_first_channel() {
    let dir = TempDir::new().unwrap();
    let input = wav_fixture(&dir, "in.wav", 2, 8000);
    let output = dir.path().join("out.wav");

    let request = ConversionRequest::default().with_mono();
    transcode(&input, &output, &request).unwrap();

    let original = decode_file(&input).unwrap();
    let converted = decode_file(&output).unwrap();
    assert_eq!(converted.channel_count(), 1);
    assert_eq!(converted.channel(0), original.channel(0));
}

#[test]
fn channel_selection_can_swap_stereo() {
    let dir = TempDir::new().unwrap();
    let input = wav_fixture(&dir, "in.wav", 2, 8000);
    let output = dir.path().join("swapped.wav");

    let request = ConversionRequest::new(None, None, Some(vec![1, 0])).unwrap();
    transcode(&input, &output, &request).unwrap();

    let original = decode_file(&input).unwrap();
    let converted = decode_file(&output).unwrap();
    assert_eq!(converted.channel(0), original.channel(1));
    assert_eq!(converted.channel(1), original.channel(0));
}

#[test]
fn unknown_target_extension_fails_before_reading_input() {
    let dir = TempDir::new().unwrap();
    // the input does not even exist; target validation must come first
    let input = dir.path().join("missing.wav");
    let output = dir.path().join("out.xyz");

    let error = transcode(&input, &output, &ConversionRequest::default()).unwrap_err();
    assert_eq!(error.stage, Stage::Encode);
    assert!(matches!(error.source, MorphError::UnsupportedFormat(_)));
    assert!(!output.exists());
}

#[test]
fn ogg_target_fails_with_no_encoder() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.wav");
    let output = dir.path().join("out.ogg");

    let error = transcode(&input, &output, &ConversionRequest::default()).unwrap_err();
    assert_eq!(error.stage, Stage::Encode);
    assert!(matches!(error.source, MorphError::NoEncoder(_)));
    assert!(!output.exists());
}

#[test]
fn missing_input_fails_in_the_decode_stage() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.wav");

    let error = transcode(
        Path::new("/nonexistent/in.wav"),
        &output,
        &ConversionRequest::default(),
    )
    .unwrap_err();
    assert_eq!(error.stage, Stage::Decode);
    assert!(matches!(error.source, MorphError::FileNotFound(_)));
    assert!(!output.exists());
}

#[test]
fn unrepresentable_channel_layout_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let input = wav_fixture(&dir, "in.wav", 3, 8000);
    let output = dir.path().join("out.mp3");

    let error = transcode(&input, &output, &ConversionRequest::default()).unwrap_err();
    assert_eq!(error.stage, Stage::Encode);
    assert!(matches!(
        error.source,
        MorphError::UnsupportedChannelLayout { format: "mp3", requested: 3, .. }
    ));
    assert!(!output.exists());
}

#[test]
fn out_of_range_selection_fails_in_the_select_stage() {
    let dir = TempDir::new().unwrap();
    let input = wav_fixture(&dir, "in.wav", 2, 8000);
    let output = dir.path().join("out.wav");

    let request = ConversionRequest::new(None, None, Some(vec![2])).unwrap();
    let error = transcode(&input, &output, &request).unwrap_err();
    assert_eq!(error.stage, Stage::Select);
    assert!(matches!(
        error.source,
        MorphError::ChannelIndexOutOfRange { index: 2, channel_count: 2 }
    ));
    assert!(!output.exists());
}
