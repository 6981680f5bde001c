//! Pupil detection and tracking over synthetic frames, printing one CSV
//! row per frame. Mirrors the classic track-pupil driver, with the mock
//! engine standing in for a real one.
//!
//! Usage: track_pupil <mode> [frame-count]
//!        mode: detect or track

use std::env;
use std::process::ExitCode;

use eyerec_bridge::{DetectionSession, MockEngine, PupilRecord, TrackingSession};
use ndarray::Array2;

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  track_pupil <mode> [frame-count]");
    eprintln!("  mode: detect or track");
}

fn print_record(record: &PupilRecord) {
    println!(
        "{}, {}, {}, {}, {}, {}, {},",
        record.center_x,
        record.center_y,
        record.width,
        record.height,
        record.angle,
        record.confidence,
        record.valid,
    );
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mode = match args.get(1) {
        Some(mode) => mode.as_str(),
        None => {
            print_usage();
            return ExitCode::FAILURE;
        }
    };
    let frames: usize = args
        .get(2)
        .and_then(|count| count.parse().ok())
        .unwrap_or(30);

    let use_tracking = match mode {
        "detect" => false,
        "track" => true,
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Expected one of [ detect, track ]");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    println!("center_x, center_y, width, height, angle, confidence, valid,");

    // Stand-in for a capture source: a fixed-size grayscale frame.
    let buffer = Array2::<u8>::zeros((480, 640));

    if use_tracking {
        let mut session = TrackingSession::new(MockEngine::new());
        eprintln!("Using: {}", session.describe());
        for _ in 0..frames {
            match session.track(buffer.view().into_dyn(), None) {
                Ok(record) => print_record(&record),
                Err(err) => {
                    eprintln!("tracking failed: {err}");
                    return ExitCode::FAILURE;
                }
            }
        }
    } else {
        let mut session = DetectionSession::new(MockEngine::new());
        eprintln!("Using: {}", session.describe());
        for _ in 0..frames {
            match session.detect(buffer.view().into_dyn()) {
                Ok(record) => print_record(&record),
                Err(err) => {
                    eprintln!("detection failed: {err}");
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    ExitCode::SUCCESS
}
