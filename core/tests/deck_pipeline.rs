//! End-to-end deck assembly over a background image already on disk: specs
//! in, a valid .pptx package out, with per-slide outcomes reported.

#![allow(clippy::unwrap_used)]

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use deckgen_common::{SlideSpec, TextColor};
use deckgen_core::deck::{DeckBuilder, SlideOutcome};

fn write_png(path: &Path, width: u32, height: u32) {
    image::DynamicImage::new_rgb8(width, height).save(path).unwrap();
}

fn read_entry(archive_path: &Path, name: &str) -> String {
    let file = File::open(archive_path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut out = String::new();
    entry.read_to_string(&mut out).unwrap();
    out
}

#[test]
fn full_deck_renders_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let background = dir.path().join("generated_image.png");
    write_png(&background, 1792, 1024);
    let chart = dir.path().join("chart.png");
    write_png(&chart, 800, 500);

    let specs = vec![
        SlideSpec::Title {
            text: "AI in Industrial Analytics\nQuarterly Review".to_string(),
            text_color: TextColor::White,
        },
        SlideSpec::Chart { chart_path: chart },
        SlideSpec::Insights {
            title: "Key Insights".to_string(),
            points: vec![
                "**Cost**: down 12% year over year".to_string(),
                "adoption is accelerating".to_string(),
            ],
            text_color: TextColor::White,
        },
        // Broken slide in the middle of the deck: reported, not fatal.
        SlideSpec::Chart {
            chart_path: PathBuf::from("missing/never-there.png"),
        },
    ];

    let mut builder = DeckBuilder::new(&background, dir.path()).unwrap();
    for spec in &specs {
        builder.push_slide(spec);
    }
    let pptx = dir.path().join("presentation.pptx");
    builder.save(&pptx).unwrap();

    let report = builder.report();
    assert_eq!(report.outcomes.len(), 4);
    assert_eq!(report.rendered(), 3);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.summary(), "3/4 slides rendered");
    match &report.outcomes[3] {
        SlideOutcome::Failed { index, kind, .. } => {
            assert_eq!(*index, 3);
            assert_eq!(*kind, "chart");
        }
        other => panic!("expected failed outcome, got {other:?}"),
    }

    // All four slides are in the package, including the partial one.
    let file = File::open(&pptx).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    let names: Vec<String> = archive.file_names().map(str::to_string).collect();
    for n in 1..=4 {
        assert!(names.contains(&format!("ppt/slides/slide{n}.xml")), "slide{n} missing");
    }
    assert!(names.iter().any(|n| n.starts_with("ppt/media/image")));

    // Title slide XML carries the two centered paragraphs at 54pt/28pt.
    let title_xml = read_entry(&pptx, "ppt/slides/slide1.xml");
    assert!(title_xml.contains("sz=\"5400\""));
    assert!(title_xml.contains("sz=\"2800\""));
    assert!(title_xml.contains("AI in Industrial Analytics"));
    assert!(title_xml.contains("Quarterly Review"));

    // Insights slide XML carries the split bullet runs.
    let insights_xml = read_entry(&pptx, "ppt/slides/slide3.xml");
    assert!(insights_xml.contains("• Cost: "));
    assert!(insights_xml.contains("• adoption is accelerating"));

    // White title text means a 70% dark overlay was cached on disk.
    assert!(dir.path().join("overlay_960x540_a70_dark.png").exists());
    assert!(dir.path().join("overlay_960x540_a80_light.png").exists());
    assert!(dir.path().join("overlay_960x540_a60_dark.png").exists());
}
