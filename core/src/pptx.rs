//! Minimal PresentationML writer: just enough of the OOXML package to place
//! full-bleed pictures and formatted text boxes on blank slides.
//!
//! The document model (`Presentation` / `Slide` / `Shape`) is kept separate
//! from serialization so the layout engine and its tests can inspect slides
//! before anything touches disk.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use quick_xml::escape::escape;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;

/// English Metric Units per inch.
pub const EMU_PER_INCH: i64 = 914_400;
/// EMU per point (1/72 inch).
pub const EMU_PER_POINT: i64 = 12_700;

pub fn inches(value: f64) -> i64 {
    (value * EMU_PER_INCH as f64).round() as i64
}

/// Fixed page area slide elements are placed on, in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: i64,
    pub height: i64,
}

impl Canvas {
    /// 16:9, 13.33in x 7.5in.
    pub const WIDESCREEN: Canvas = Canvas {
        width: 12_192_000,
        height: 6_858_000,
    };

    pub fn ratio(self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Canvas size in points; overlay bitmaps are rasterized at one pixel
    /// per point.
    pub fn points(self) -> (u32, u32) {
        (
            (self.width / EMU_PER_POINT) as u32,
            (self.height / EMU_PER_POINT) as u32,
        )
    }

    pub fn full_bleed(self) -> Frame {
        Frame {
            x: 0,
            y: 0,
            width: self.width,
            height: self.height,
        }
    }
}

/// Placement rectangle in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    fn hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

impl Align {
    fn attr(self) -> &'static str {
        match self {
            Align::Left => "l",
            Align::Center => "ctr",
        }
    }
}

/// Vertical anchor of a text frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Top,
    Middle,
}

impl Anchor {
    fn attr(self) -> &'static str {
        match self {
            Anchor::Top => "t",
            Anchor::Middle => "ctr",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub size_pt: u32,
    pub bold: bool,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub align: Align,
    pub space_after_pt: u32,
    pub runs: Vec<Run>,
}

/// Handle to a deduplicated media part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaId(usize);

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Picture {
        media: MediaId,
        frame: Frame,
    },
    TextBox {
        frame: Frame,
        anchor: Anchor,
        paragraphs: Vec<Paragraph>,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slide {
    pub shapes: Vec<Shape>,
}

impl Slide {
    pub fn add_picture(&mut self, media: MediaId, frame: Frame) {
        self.shapes.push(Shape::Picture { media, frame });
    }

    pub fn add_textbox(&mut self, frame: Frame, anchor: Anchor, paragraphs: Vec<Paragraph>) {
        self.shapes.push(Shape::TextBox {
            frame,
            anchor,
            paragraphs,
        });
    }
}

#[derive(Debug, Clone)]
struct Media {
    bytes: Vec<u8>,
    extension: &'static str,
}

/// In-memory presentation, persisted once via [`Presentation::save`] and
/// then discarded.
#[derive(Debug, Clone)]
pub struct Presentation {
    pub canvas: Canvas,
    slides: Vec<Slide>,
    media: Vec<Media>,
}

impl Presentation {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            slides: Vec::new(),
            media: Vec::new(),
        }
    }

    /// Registers image bytes as a media part, deduplicating identical
    /// content.
    pub fn add_media(&mut self, bytes: Vec<u8>, extension: &'static str) -> MediaId {
        if let Some(idx) = self
            .media
            .iter()
            .position(|m| m.extension == extension && m.bytes == bytes)
        {
            return MediaId(idx);
        }
        self.media.push(Media { bytes, extension });
        MediaId(self.media.len() - 1)
    }

    pub fn add_media_file(&mut self, path: &Path) -> Result<MediaId> {
        let bytes = std::fs::read(path)?;
        Ok(self.add_media(bytes, media_extension(path)))
    }

    /// Appends a blank slide and returns its index.
    pub fn add_slide(&mut self) -> usize {
        self.slides.push(Slide::default());
        self.slides.len() - 1
    }

    pub fn slide_mut(&mut self, index: usize) -> &mut Slide {
        &mut self.slides[index]
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Writes the presentation as a `.pptx` package.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        let mut archive = ZipWriter::new(file);
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let mut put = |name: &str, content: &[u8]| -> Result<()> {
            archive.start_file(name, options)?;
            archive.write_all(content)?;
            Ok(())
        };

        put("[Content_Types].xml", self.content_types_xml().as_bytes())?;
        put("_rels/.rels", ROOT_RELS.as_bytes())?;
        put("ppt/presentation.xml", self.presentation_xml().as_bytes())?;
        put(
            "ppt/_rels/presentation.xml.rels",
            self.presentation_rels_xml().as_bytes(),
        )?;
        put("ppt/slideMasters/slideMaster1.xml", SLIDE_MASTER.as_bytes())?;
        put(
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            MASTER_RELS.as_bytes(),
        )?;
        put("ppt/slideLayouts/slideLayout1.xml", SLIDE_LAYOUT.as_bytes())?;
        put(
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
            LAYOUT_RELS.as_bytes(),
        )?;
        put("ppt/theme/theme1.xml", THEME.as_bytes())?;

        for (idx, slide) in self.slides.iter().enumerate() {
            let n = idx + 1;
            let rels = slide_media_rels(slide);
            put(
                &format!("ppt/slides/slide{n}.xml"),
                slide_xml(slide, &rels).as_bytes(),
            )?;
            put(
                &format!("ppt/slides/_rels/slide{n}.xml.rels"),
                slide_rels_xml(&rels, &self.media).as_bytes(),
            )?;
        }

        for (idx, media) in self.media.iter().enumerate() {
            let n = idx + 1;
            put(
                &format!("ppt/media/image{}.{}", n, media.extension),
                &media.bytes,
            )?;
        }

        archive.finish()?;
        Ok(())
    }

    fn content_types_xml(&self) -> String {
        let mut overrides = String::new();
        for idx in 0..self.slides.len() {
            let n = idx + 1;
            overrides.push_str(&format!(
                "<Override PartName=\"/ppt/slides/slide{n}.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slide+xml\"/>"
            ));
        }
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
<Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
<Default Extension=\"xml\" ContentType=\"application/xml\"/>\
<Default Extension=\"png\" ContentType=\"image/png\"/>\
<Default Extension=\"jpeg\" ContentType=\"image/jpeg\"/>\
<Override PartName=\"/ppt/presentation.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml\"/>\
<Override PartName=\"/ppt/slideMasters/slideMaster1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml\"/>\
<Override PartName=\"/ppt/slideLayouts/slideLayout1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml\"/>\
<Override PartName=\"/ppt/theme/theme1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.theme+xml\"/>\
{overrides}\
</Types>"
        )
    }

    fn presentation_xml(&self) -> String {
        let mut slide_ids = String::new();
        for idx in 0..self.slides.len() {
            let id = 256 + idx;
            let rid = idx + 2; // rId1 is the slide master
            slide_ids.push_str(&format!("<p:sldId id=\"{id}\" r:id=\"rId{rid}\"/>"));
        }
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<p:presentation {NS_ALL}>\
<p:sldMasterIdLst><p:sldMasterId id=\"2147483648\" r:id=\"rId1\"/></p:sldMasterIdLst>\
<p:sldIdLst>{slide_ids}</p:sldIdLst>\
<p:sldSz cx=\"{}\" cy=\"{}\"/>\
<p:notesSz cx=\"6858000\" cy=\"9144000\"/>\
</p:presentation>",
            self.canvas.width, self.canvas.height
        )
    }

    fn presentation_rels_xml(&self) -> String {
        let mut rels = String::from(
            "<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster\" Target=\"slideMasters/slideMaster1.xml\"/>",
        );
        for idx in 0..self.slides.len() {
            let n = idx + 1;
            let rid = idx + 2;
            rels.push_str(&format!(
                "<Relationship Id=\"rId{rid}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide\" Target=\"slides/slide{n}.xml\"/>"
            ));
        }
        wrap_relationships(&rels)
    }
}

fn media_extension(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "jpeg",
        _ => "png",
    }
}

/// Relationship ids for the media a slide references, in order of first use.
/// `rId1` is reserved for the slide layout.
fn slide_media_rels(slide: &Slide) -> Vec<(MediaId, String)> {
    let mut rels: Vec<(MediaId, String)> = Vec::new();
    for shape in &slide.shapes {
        if let Shape::Picture { media, .. } = shape {
            if !rels.iter().any(|(id, _)| id == media) {
                let rid = format!("rId{}", rels.len() + 2);
                rels.push((*media, rid));
            }
        }
    }
    rels
}

fn slide_rels_xml(rels: &[(MediaId, String)], media_parts: &[Media]) -> String {
    let mut body = String::from(
        "<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout\" Target=\"../slideLayouts/slideLayout1.xml\"/>",
    );
    for (media, rid) in rels {
        let extension = media_parts
            .get(media.0)
            .map(|m| m.extension)
            .unwrap_or("png");
        body.push_str(&format!(
            "<Relationship Id=\"{rid}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/image\" Target=\"../media/image{}.{extension}\"/>",
            media.0 + 1
        ));
    }
    wrap_relationships(&body)
}

fn slide_xml(slide: &Slide, rels: &[(MediaId, String)]) -> String {
    let rid_for = |media: &MediaId| -> &str {
        rels.iter()
            .find(|(id, _)| id == media)
            .map(|(_, rid)| rid.as_str())
            .unwrap_or("rId2")
    };

    let mut shapes = String::new();
    for (idx, shape) in slide.shapes.iter().enumerate() {
        // id 1 is the group shape; content ids start at 2.
        let shape_id = idx + 2;
        match shape {
            Shape::Picture { media, frame } => {
                shapes.push_str(&picture_xml(shape_id, rid_for(media), *frame));
            }
            Shape::TextBox {
                frame,
                anchor,
                paragraphs,
            } => {
                shapes.push_str(&textbox_xml(shape_id, *frame, *anchor, paragraphs));
            }
        }
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<p:sld {NS_ALL}>\
<p:cSld><p:spTree>\
<p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>\
<p:grpSpPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"0\" cy=\"0\"/><a:chOff x=\"0\" y=\"0\"/><a:chExt cx=\"0\" cy=\"0\"/></a:xfrm></p:grpSpPr>\
{shapes}\
</p:spTree></p:cSld>\
<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>\
</p:sld>"
    )
}

fn xfrm_xml(frame: Frame) -> String {
    format!(
        "<a:xfrm><a:off x=\"{}\" y=\"{}\"/><a:ext cx=\"{}\" cy=\"{}\"/></a:xfrm>",
        frame.x, frame.y, frame.width, frame.height
    )
}

fn picture_xml(shape_id: usize, rid: &str, frame: Frame) -> String {
    format!(
        "<p:pic>\
<p:nvPicPr><p:cNvPr id=\"{shape_id}\" name=\"Picture {shape_id}\"/><p:cNvPicPr/><p:nvPr/></p:nvPicPr>\
<p:blipFill><a:blip r:embed=\"{rid}\"/><a:stretch><a:fillRect/></a:stretch></p:blipFill>\
<p:spPr>{}<a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom></p:spPr>\
</p:pic>",
        xfrm_xml(frame)
    )
}

fn textbox_xml(shape_id: usize, frame: Frame, anchor: Anchor, paragraphs: &[Paragraph]) -> String {
    let mut body = String::new();
    for paragraph in paragraphs {
        body.push_str(&paragraph_xml(paragraph));
    }
    format!(
        "<p:sp>\
<p:nvSpPr><p:cNvPr id=\"{shape_id}\" name=\"TextBox {shape_id}\"/><p:cNvSpPr txBox=\"1\"/><p:nvPr/></p:nvSpPr>\
<p:spPr>{}<a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom><a:noFill/></p:spPr>\
<p:txBody><a:bodyPr wrap=\"square\" anchor=\"{}\"/><a:lstStyle/>{body}</p:txBody>\
</p:sp>",
        xfrm_xml(frame),
        anchor.attr()
    )
}

fn paragraph_xml(paragraph: &Paragraph) -> String {
    let mut props = format!("<a:pPr algn=\"{}\"", paragraph.align.attr());
    if paragraph.space_after_pt > 0 {
        props.push_str(&format!(
            "><a:spcAft><a:spcPts val=\"{}\"/></a:spcAft></a:pPr>",
            paragraph.space_after_pt * 100
        ));
    } else {
        props.push_str("/>");
    }

    let mut runs = String::new();
    for run in &paragraph.runs {
        let bold = if run.bold { " b=\"1\"" } else { "" };
        runs.push_str(&format!(
            "<a:r><a:rPr lang=\"en-US\" sz=\"{}\"{bold} dirty=\"0\"><a:solidFill><a:srgbClr val=\"{}\"/></a:solidFill></a:rPr><a:t>{}</a:t></a:r>",
            run.size_pt * 100,
            run.color.hex(),
            escape(run.text.as_str())
        ));
    }
    format!("<a:p>{props}{runs}</a:p>")
}

fn wrap_relationships(body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">{body}</Relationships>"
    )
}

const NS_ALL: &str = "xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\" xmlns:p=\"http://schemas.openxmlformats.org/presentationml/2006/main\"";

const ROOT_RELS: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"ppt/presentation.xml\"/>\
</Relationships>";

const SLIDE_MASTER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<p:sldMaster xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\" xmlns:p=\"http://schemas.openxmlformats.org/presentationml/2006/main\">\
<p:cSld>\
<p:bg><p:bgRef idx=\"1001\"><a:schemeClr val=\"bg1\"/></p:bgRef></p:bg>\
<p:spTree>\
<p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>\
<p:grpSpPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"0\" cy=\"0\"/><a:chOff x=\"0\" y=\"0\"/><a:chExt cx=\"0\" cy=\"0\"/></a:xfrm></p:grpSpPr>\
</p:spTree>\
</p:cSld>\
<p:clrMap bg1=\"lt1\" tx1=\"dk1\" bg2=\"lt2\" tx2=\"dk2\" accent1=\"accent1\" accent2=\"accent2\" accent3=\"accent3\" accent4=\"accent4\" accent5=\"accent5\" accent6=\"accent6\" hlink=\"hlink\" folHlink=\"folHlink\"/>\
<p:sldLayoutIdLst><p:sldLayoutId id=\"2147483649\" r:id=\"rId1\"/></p:sldLayoutIdLst>\
</p:sldMaster>";

const MASTER_RELS: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout\" Target=\"../slideLayouts/slideLayout1.xml\"/>\
<Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme\" Target=\"../theme/theme1.xml\"/>\
</Relationships>";

const SLIDE_LAYOUT: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<p:sldLayout xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\" xmlns:p=\"http://schemas.openxmlformats.org/presentationml/2006/main\" type=\"blank\" preserve=\"1\">\
<p:cSld name=\"Blank\">\
<p:spTree>\
<p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>\
<p:grpSpPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"0\" cy=\"0\"/><a:chOff x=\"0\" y=\"0\"/><a:chExt cx=\"0\" cy=\"0\"/></a:xfrm></p:grpSpPr>\
</p:spTree>\
</p:cSld>\
<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>\
</p:sldLayout>";

const LAYOUT_RELS: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster\" Target=\"../slideMasters/slideMaster1.xml\"/>\
</Relationships>";

const THEME: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<a:theme xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" name=\"Office Theme\">\
<a:themeElements>\
<a:clrScheme name=\"Office\">\
<a:dk1><a:sysClr val=\"windowText\" lastClr=\"000000\"/></a:dk1>\
<a:lt1><a:sysClr val=\"window\" lastClr=\"FFFFFF\"/></a:lt1>\
<a:dk2><a:srgbClr val=\"44546A\"/></a:dk2>\
<a:lt2><a:srgbClr val=\"E7E6E6\"/></a:lt2>\
<a:accent1><a:srgbClr val=\"4472C4\"/></a:accent1>\
<a:accent2><a:srgbClr val=\"ED7D31\"/></a:accent2>\
<a:accent3><a:srgbClr val=\"A5A5A5\"/></a:accent3>\
<a:accent4><a:srgbClr val=\"FFC000\"/></a:accent4>\
<a:accent5><a:srgbClr val=\"5B9BD5\"/></a:accent5>\
<a:accent6><a:srgbClr val=\"70AD47\"/></a:accent6>\
<a:hlink><a:srgbClr val=\"0563C1\"/></a:hlink>\
<a:folHlink><a:srgbClr val=\"954F72\"/></a:folHlink>\
</a:clrScheme>\
<a:fontScheme name=\"Office\">\
<a:majorFont><a:latin typeface=\"Calibri Light\"/><a:ea typeface=\"\"/><a:cs typeface=\"\"/></a:majorFont>\
<a:minorFont><a:latin typeface=\"Calibri\"/><a:ea typeface=\"\"/><a:cs typeface=\"\"/></a:minorFont>\
</a:fontScheme>\
<a:fmtScheme name=\"Office\">\
<a:fillStyleLst>\
<a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>\
<a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>\
<a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>\
</a:fillStyleLst>\
<a:lnStyleLst>\
<a:ln w=\"6350\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln>\
<a:ln w=\"12700\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln>\
<a:ln w=\"19050\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln>\
</a:lnStyleLst>\
<a:effectStyleLst>\
<a:effectStyle><a:effectLst/></a:effectStyle>\
<a:effectStyle><a:effectLst/></a:effectStyle>\
<a:effectStyle><a:effectLst/></a:effectStyle>\
</a:effectStyleLst>\
<a:bgFillStyleLst>\
<a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>\
<a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>\
<a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>\
</a:bgFillStyleLst>\
</a:fmtScheme>\
</a:themeElements>\
</a:theme>";
