//! Benchmarks for unslide conversion performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks convert synthetic decks of increasing slide counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io::Cursor;

const NS: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;

const REL: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

fn tree(root: &str, shapes: &str, tail: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<{root} {ns}><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>{shapes}</p:spTree></p:cSld>{tail}</{root}>"#,
        root = root,
        ns = NS,
        shapes = shapes,
        tail = tail
    )
}

/// Shapes of one slide: a title placeholder, a themed ellipse, an arrow and
/// a bulleted text box.
fn slide_shapes(index: usize) -> String {
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Title"/><p:cNvSpPr/><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr><p:spPr/>
<p:txBody><a:bodyPr/><a:p><a:r><a:rPr lang="en-US" b="1"/><a:t>Slide {index}</a:t></a:r></a:p></p:txBody></p:sp>
<p:sp><p:nvSpPr><p:cNvPr id="3" name="Ellipse"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr><a:xfrm><a:off x="952500" y="1905000"/><a:ext cx="1905000" cy="1905000"/></a:xfrm><a:prstGeom prst="ellipse"><a:avLst/></a:prstGeom>
<a:gradFill><a:gsLst><a:gs pos="0"><a:schemeClr val="accent1"><a:lumMod val="75000"/></a:schemeClr></a:gs><a:gs pos="100000"><a:schemeClr val="accent1"><a:tint val="40000"/></a:schemeClr></a:gs></a:gsLst><a:lin ang="5400000"/></a:gradFill>
<a:ln w="12700"><a:solidFill><a:srgbClr val="1F3864"/></a:solidFill><a:prstDash val="dash"/></a:ln></p:spPr></p:sp>
<p:cxnSp><p:nvCxnSpPr><p:cNvPr id="4" name="Arrow"/><p:cNvCxnSpPr/><p:nvPr/></p:nvCxnSpPr><p:spPr><a:xfrm><a:off x="3810000" y="2857500"/><a:ext cx="1905000" cy="0"/></a:xfrm><a:prstGeom prst="straightConnector1"/>
<a:ln w="19050"><a:solidFill><a:srgbClr val="C00000"/></a:solidFill><a:tailEnd type="triangle"/></a:ln></p:spPr></p:cxnSp>
<p:sp><p:nvSpPr><p:cNvPr id="5" name="Text"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr><a:xfrm><a:off x="5715000" y="1905000"/><a:ext cx="2857500" cy="1905000"/></a:xfrm><a:prstGeom prst="rect"/></p:spPr>
<p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:pPr><a:buChar char="•"/></a:pPr><a:r><a:rPr sz="1800"/><a:t>First point</a:t></a:r></a:p><a:p><a:pPr lvl="1"><a:buChar char="–"/></a:pPr><a:r><a:rPr sz="1600" i="1"/><a:t>Second point</a:t></a:r></a:p></p:txBody></p:sp>"#,
        index = index
    )
}

const TIMING: &str = r#"<p:timing><p:tnLst><p:par><p:cTn id="1" dur="indefinite" nodeType="tmRoot"><p:childTnLst>
<p:seq concurrent="1" nextAc="seek"><p:cTn id="2" dur="indefinite" nodeType="mainSeq"><p:childTnLst>
<p:par><p:cTn id="3" fill="hold"><p:stCondLst><p:cond delay="indefinite"/></p:stCondLst><p:childTnLst>
<p:animEffect transition="in" filter="fade"><p:cBhvr><p:cTn id="4" dur="500"/><p:tgtEl><p:spTgt spid="3"/></p:tgtEl></p:cBhvr></p:animEffect>
<p:animScale><p:cBhvr><p:cTn id="5" dur="250" autoRev="1"/><p:tgtEl><p:spTgt spid="5"/></p:tgtEl></p:cBhvr><p:by x="120000" y="120000"/></p:animScale>
</p:childTnLst></p:cTn></p:par>
</p:childTnLst></p:cTn></p:seq>
</p:childTnLst></p:cTn></p:par></p:tnLst></p:timing>"#;

fn rels(entries: &[(&str, &str, String)]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for (id, kind, target) in entries {
        xml.push_str(&format!(
            r#"<Relationship Id="{}" Type="{}/{}" Target="{}"/>"#,
            id, REL, kind, target
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

/// Creates a synthetic PPTX deck with the given number of slides.
fn create_test_pptx(slide_count: usize) -> Vec<u8> {
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    let mut put = |name: &str, content: &str| {
        zip.start_file(name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    };

    put(
        "[Content_Types].xml",
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
</Types>"#,
    );
    put(
        "_rels/.rels",
        &rels(&[("rId1", "officeDocument", "ppt/presentation.xml".into())]),
    );
    put(
        "ppt/theme/theme1.xml",
        r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office"><a:themeElements>
<a:clrScheme name="Office"><a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1><a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1><a:accent1><a:srgbClr val="4472C4"/></a:accent1></a:clrScheme>
<a:fontScheme name="Office"><a:majorFont><a:latin typeface="Calibri Light"/></a:majorFont><a:minorFont><a:latin typeface="Calibri"/></a:minorFont></a:fontScheme>
<a:fmtScheme name="Office"><a:fillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:fillStyleLst><a:lnStyleLst><a:ln w="6350"/></a:lnStyleLst><a:bgFillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:bgFillStyleLst></a:fmtScheme>
</a:themeElements></a:theme>"#,
    );

    let mut ids = String::new();
    let mut pres_rels = vec![
        ("rId1", "slideMaster", "slideMasters/slideMaster1.xml".to_string()),
        ("rId2", "theme", "theme/theme1.xml".to_string()),
    ];
    let slide_ids: Vec<String> = (1..=slide_count).map(|n| format!("rId{}", 100 + n)).collect();
    for (i, id) in slide_ids.iter().enumerate() {
        let n = i + 1;
        ids.push_str(&format!(r#"<p:sldId id="{}" r:id="{}"/>"#, 255 + n, id));
        pres_rels.push((id.as_str(), "slide", format!("slides/slide{}.xml", n)));
        put(&format!("ppt/slides/slide{}.xml", n), &tree("p:sld", &slide_shapes(n), TIMING));
        put(
            &format!("ppt/slides/_rels/slide{}.xml.rels", n),
            &rels(&[("rId1", "slideLayout", "../slideLayouts/slideLayout1.xml".into())]),
        );
    }

    put(
        "ppt/presentation.xml",
        &format!(
            r#"<p:presentation {}><p:sldIdLst>{}</p:sldIdLst><p:sldSz cx="12192000" cy="6858000"/></p:presentation>"#,
            NS, ids
        ),
    );
    put("ppt/_rels/presentation.xml.rels", &rels(&pres_rels));

    let title = r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Title Placeholder"/><p:cNvSpPr/><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr><p:spPr><a:xfrm><a:off x="838200" y="365125"/><a:ext cx="10515600" cy="1325563"/></a:xfrm><a:prstGeom prst="rect"/></p:spPr></p:sp>"#;
    put("ppt/slideMasters/slideMaster1.xml", &tree("p:sldMaster", title, ""));
    put(
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        &rels(&[
            ("rId1", "slideLayout", "../slideLayouts/slideLayout1.xml".into()),
            ("rId2", "theme", "../theme/theme1.xml".into()),
        ]),
    );
    put("ppt/slideLayouts/slideLayout1.xml", &tree("p:sldLayout", title, ""));
    put(
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        &rels(&[("rId1", "slideMaster", "../slideMasters/slideMaster1.xml".into())]),
    );

    zip.finish().unwrap();
    buffer
}

/// Benchmark full deck conversion at various sizes.
fn bench_deck_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("deck_conversion");

    for slide_count in [1, 10, 50, 100].iter() {
        let data = create_test_pptx(*slide_count);
        let size = data.len() as u64;

        group.throughput(Throughput::Bytes(size));
        group.bench_with_input(BenchmarkId::new("slides", slide_count), &data, |b, data| {
            b.iter(|| {
                let _ = unslide::convert_bytes(black_box(data));
            });
        });
    }

    group.finish();
}

/// Benchmark rendering a converted deck to a standalone page.
fn bench_page_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_rendering");

    for slide_count in [10, 100].iter() {
        let data = create_test_pptx(*slide_count);
        let presentation = unslide::convert_bytes(&data).unwrap();

        group.bench_with_input(
            BenchmarkId::new("slides", slide_count),
            &presentation,
            |b, presentation| {
                b.iter(|| unslide::render::to_html_page(black_box(presentation)));
            },
        );
    }

    group.finish();
}

/// Benchmark JSON export.
fn bench_json_export(c: &mut Criterion) {
    let data = create_test_pptx(50);
    let presentation = unslide::convert_bytes(&data).unwrap();

    c.bench_function("json_export_50_slides", |b| {
        b.iter(|| unslide::render::to_json_default(black_box(&presentation)));
    });
}

criterion_group!(
    benches,
    bench_deck_conversion,
    bench_page_rendering,
    bench_json_export
);
criterion_main!(benches);
