//! Slide layout engine: positions background images, translucent overlays,
//! and text onto the page canvas for each slide spec.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::{error, info};

use deckgen_common::{SlideSpec, TextColor};

use crate::compose::{crop_to_ratio, fit_within};
use crate::error::{DeckError, Result};
use crate::overlay::{ensure_cached_overlay, Tone};
use crate::pptx::{inches, Align, Anchor, Canvas, Frame, MediaId, Paragraph, Presentation, Rgb, Run};

const TITLE_SIZE_PT: u32 = 54;
const SUBTITLE_SIZE_PT: u32 = 28;
const INSIGHTS_TITLE_SIZE_PT: u32 = 40;
const INSIGHTS_POINT_SIZE_PT: u32 = 20;

const TITLE_OVERLAY_OPACITY: f64 = 0.7;
const CHART_OVERLAY_OPACITY: f64 = 0.8;
const INSIGHTS_OVERLAY_OPACITY: f64 = 0.6;
const CHART_FILL_FRACTION: f64 = 0.95;

// Text frame geometry, in inches on the widescreen canvas.
const TITLE_BOX_WIDTH_IN: f64 = 12.0;
const TITLE_BOX_TOP_IN: f64 = 2.0;
const TITLE_BOX_HEIGHT_IN: f64 = 5.0;
const INSIGHTS_TITLE_MARGIN_IN: f64 = 0.5;
const INSIGHTS_TITLE_HEIGHT_IN: f64 = 1.0;
const INSIGHTS_POINTS_MARGIN_IN: f64 = 1.0;
const INSIGHTS_POINTS_TOP_IN: f64 = 1.5;
const INSIGHTS_POINTS_HEIGHT_IN: f64 = 5.0;

#[derive(Debug, Clone)]
pub enum SlideOutcome {
    Rendered {
        index: usize,
        kind: &'static str,
    },
    Failed {
        index: usize,
        kind: &'static str,
        message: String,
    },
}

/// Per-slide results aggregated over the whole deck. Failed slides stay in
/// the deck partially rendered; the report says which ones.
#[derive(Debug, Clone, Default)]
pub struct DeckReport {
    pub outcomes: Vec<SlideOutcome>,
}

impl DeckReport {
    pub fn rendered(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, SlideOutcome::Rendered { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.rendered()
    }

    pub fn summary(&self) -> String {
        format!("{}/{} slides rendered", self.rendered(), self.outcomes.len())
    }
}

/// Builds one presentation from an ordered list of slide specs. The overlay
/// cache directory and the background media are the only state shared across
/// slides.
pub struct DeckBuilder {
    canvas: Canvas,
    presentation: Presentation,
    overlay_dir: PathBuf,
    background_raw: MediaId,
    background_cropped: MediaId,
    report: DeckReport,
}

impl DeckBuilder {
    pub fn new(background_path: &Path, overlay_dir: &Path) -> Result<Self> {
        let canvas = Canvas::WIDESCREEN;
        let background = image::open(background_path)?;
        let mut presentation = Presentation::new(canvas);
        let background_raw = presentation.add_media_file(background_path)?;

        let cropped = crop_to_ratio(&background, canvas.ratio());
        let background_cropped = if cropped.width() == background.width()
            && cropped.height() == background.height()
        {
            background_raw
        } else {
            presentation.add_media(encode_png(&cropped)?, "png")
        };

        Ok(Self {
            canvas,
            presentation,
            overlay_dir: overlay_dir.to_path_buf(),
            background_raw,
            background_cropped,
            report: DeckReport::default(),
        })
    }

    /// Renders one slide. Errors are recorded in the report and logged; the
    /// partially rendered slide stays in the deck and later slides still
    /// render.
    pub fn push_slide(&mut self, spec: &SlideSpec) {
        let index = self.presentation.slides().len();
        let kind = spec.kind();
        let result = match spec {
            SlideSpec::Title { text, text_color } => self.render_title(text, *text_color),
            SlideSpec::Chart { chart_path } => self.render_chart(chart_path),
            SlideSpec::Insights {
                title,
                points,
                text_color,
            } => self.render_insights(title, points, *text_color),
        };
        match result {
            Ok(()) => {
                info!(slide = index, kind, "slide rendered");
                self.report.outcomes.push(SlideOutcome::Rendered { index, kind });
            }
            Err(err) => {
                error!(slide = index, kind, error = %err, "slide left partially rendered");
                self.report.outcomes.push(SlideOutcome::Failed {
                    index,
                    kind,
                    message: err.to_string(),
                });
            }
        }
    }

    pub fn report(&self) -> &DeckReport {
        &self.report
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.presentation.save(path)
    }

    fn render_title(&mut self, text: &str, text_color: TextColor) -> Result<()> {
        let full = self.canvas.full_bleed();
        let idx = self.presentation.add_slide();
        self.presentation
            .slide_mut(idx)
            .add_picture(self.background_cropped, full);

        // Dark overlay under light text, light overlay under dark text.
        let overlay = self.overlay_media(TITLE_OVERLAY_OPACITY, overlay_tone(text_color))?;
        self.presentation.slide_mut(idx).add_picture(overlay, full);

        let box_width = inches(TITLE_BOX_WIDTH_IN);
        let frame = Frame {
            x: (self.canvas.width - box_width) / 2,
            y: inches(TITLE_BOX_TOP_IN),
            width: box_width,
            height: inches(TITLE_BOX_HEIGHT_IN),
        };
        let color = run_color(text_color);
        let mut paragraphs = Vec::new();
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            paragraphs.push(Paragraph {
                align: Align::Center,
                space_after_pt: 20,
                runs: vec![Run {
                    text: first.to_string(),
                    size_pt: TITLE_SIZE_PT,
                    bold: true,
                    color,
                }],
            });
        }
        for line in lines {
            if line.is_empty() {
                continue;
            }
            paragraphs.push(Paragraph {
                align: Align::Center,
                space_after_pt: 10,
                runs: vec![Run {
                    text: line.to_string(),
                    size_pt: SUBTITLE_SIZE_PT,
                    bold: false,
                    color,
                }],
            });
        }
        self.presentation
            .slide_mut(idx)
            .add_textbox(frame, Anchor::Middle, paragraphs);
        Ok(())
    }

    fn render_chart(&mut self, chart_path: &Path) -> Result<()> {
        let full = self.canvas.full_bleed();
        let idx = self.presentation.add_slide();
        self.presentation
            .slide_mut(idx)
            .add_picture(self.background_raw, full);

        let overlay = self.overlay_media(CHART_OVERLAY_OPACITY, Tone::Light)?;
        self.presentation.slide_mut(idx).add_picture(overlay, full);

        let chart = image::open(chart_path).map_err(|err| DeckError::Render {
            kind: "chart",
            message: format!("cannot open chart {}: {err}", chart_path.display()),
        })?;
        let (width, height, x, y) = fit_within(
            chart.width(),
            chart.height(),
            self.canvas.width,
            self.canvas.height,
            CHART_FILL_FRACTION,
        );
        let media = self.presentation.add_media_file(chart_path)?;
        self.presentation
            .slide_mut(idx)
            .add_picture(media, Frame { x, y, width, height });
        Ok(())
    }

    fn render_insights(
        &mut self,
        title: &str,
        points: &[String],
        text_color: TextColor,
    ) -> Result<()> {
        let full = self.canvas.full_bleed();
        let idx = self.presentation.add_slide();
        self.presentation
            .slide_mut(idx)
            .add_picture(self.background_raw, full);

        let overlay = self.overlay_media(INSIGHTS_OVERLAY_OPACITY, overlay_tone(text_color))?;
        self.presentation.slide_mut(idx).add_picture(overlay, full);

        let color = run_color(text_color);
        let title_frame = Frame {
            x: inches(INSIGHTS_TITLE_MARGIN_IN),
            y: inches(INSIGHTS_TITLE_MARGIN_IN),
            width: self.canvas.width - inches(2.0 * INSIGHTS_TITLE_MARGIN_IN),
            height: inches(INSIGHTS_TITLE_HEIGHT_IN),
        };
        self.presentation.slide_mut(idx).add_textbox(
            title_frame,
            Anchor::Top,
            vec![Paragraph {
                align: Align::Center,
                space_after_pt: 0,
                runs: vec![Run {
                    text: title.to_string(),
                    size_pt: INSIGHTS_TITLE_SIZE_PT,
                    bold: true,
                    color,
                }],
            }],
        );

        let points_frame = Frame {
            x: inches(INSIGHTS_POINTS_MARGIN_IN),
            y: inches(INSIGHTS_POINTS_TOP_IN),
            width: self.canvas.width - inches(2.0 * INSIGHTS_POINTS_MARGIN_IN),
            height: inches(INSIGHTS_POINTS_HEIGHT_IN),
        };
        let paragraphs = points
            .iter()
            .map(|point| Paragraph {
                align: Align::Left,
                space_after_pt: 14,
                runs: insight_runs(point, INSIGHTS_POINT_SIZE_PT, color),
            })
            .collect();
        self.presentation
            .slide_mut(idx)
            .add_textbox(points_frame, Anchor::Top, paragraphs);
        Ok(())
    }

    fn overlay_media(&mut self, opacity: f64, tone: Tone) -> Result<MediaId> {
        let (width, height) = self.canvas.points();
        let path = ensure_cached_overlay(&self.overlay_dir, width, height, opacity, tone)?;
        self.presentation.add_media_file(&path)
    }
}

/// Splits a `**Lead**: rest` point into a bold lead run (bullet glyph and
/// colon included) followed by a regular trailing run. Anything else becomes
/// a single bulleted regular run.
pub fn insight_runs(point: &str, size_pt: u32, color: Rgb) -> Vec<Run> {
    if point.contains("**") {
        let mut parts = point.splitn(2, "**: ");
        let lead = parts.next().unwrap_or_default().replace("**", "");
        let rest = parts.next().unwrap_or_default();
        vec![
            Run {
                text: format!("• {lead}: "),
                size_pt,
                bold: true,
                color,
            },
            Run {
                text: rest.to_string(),
                size_pt,
                bold: false,
                color,
            },
        ]
    } else {
        vec![Run {
            text: format!("• {point}"),
            size_pt,
            bold: false,
            color,
        }]
    }
}

fn overlay_tone(text_color: TextColor) -> Tone {
    match text_color {
        TextColor::White => Tone::Dark,
        TextColor::Black => Tone::Light,
    }
}

fn run_color(text_color: TextColor) -> Rgb {
    match text_color {
        TextColor::White => Rgb::WHITE,
        TextColor::Black => Rgb::BLACK,
    }
}

fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    image.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)?;
    Ok(buf)
}
