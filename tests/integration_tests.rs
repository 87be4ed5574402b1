//! Integration tests for the extract / optimize / emit pipeline

use pretty_assertions::assert_eq;

use svg_to_component::raster::{export_file_stem, render_png};
use svg_to_component::{
    emit, extract, generate, generate_with_config, optimize, png_data_url, prepare_source,
    ExtractError, Framework, GenerateConfig, GenerationOptions, Language, Settings,
    UnsupportedFramework,
};

const CHECK_CIRCLE: &str = include_str!("fixtures/check-circle.svg");
const LOGO: &str = include_str!("fixtures/logo.svg");
const BANNER: &str = include_str!("fixtures/banner.svg");
const NOT_SVG: &str = include_str!("fixtures/not-svg.html");

const FIXTURES: [&str; 3] = [CHECK_CIRCLE, LOGO, BANNER];

/// Text between the end of the first `<svg ...>` tag and the last `</svg>`
fn expected_inner(svg: &str) -> &str {
    let open = svg.find("<svg").expect("fixture has a root");
    let start = open + svg[open..].find('>').expect("root tag is closed") + 1;
    let end = svg.rfind("</svg>").expect("root is closed");
    &svg[start..end]
}

#[test]
fn test_inner_markup_is_byte_exact() {
    for fixture in FIXTURES {
        let doc = extract(fixture).unwrap();
        assert_eq!(doc.inner_markup, expected_inner(fixture));
    }
}

#[test]
fn test_inner_markup_is_byte_exact_after_optimize() {
    for fixture in FIXTURES {
        let optimized = optimize(fixture);
        let doc = extract(&optimized).unwrap();
        assert_eq!(doc.inner_markup, expected_inner(&optimized));
    }
}

#[test]
fn test_missing_root_pair_is_malformed() {
    for input in [NOT_SVG, "", "   ", "<svg width=\"24\"><rect/>", "<rect/></svg>"] {
        let err = extract(input).unwrap_err();
        assert!(matches!(err, ExtractError::MalformedInput { .. }), "{input:?}");
    }
}

#[test]
fn test_default_filling() {
    let doc = extract("<svg><rect/></svg>").unwrap();
    assert_eq!(doc.width, "24");
    assert_eq!(doc.height, "24");
    assert_eq!(doc.view_box, "0 0 24 24");
}

#[test]
fn test_root_attributes_of_fixtures() {
    let doc = extract(BANNER).unwrap();
    assert_eq!(doc.width, "100%");
    assert_eq!(doc.height, "24");
    assert_eq!(doc.view_box, "0 0 120 40");
    assert_eq!(doc.root_class.as_deref(), Some("banner"));
}

#[test]
fn test_optimize_third_pass_equals_second() {
    for fixture in FIXTURES.into_iter().chain([NOT_SVG]) {
        let second = optimize(&optimize(fixture));
        let third = optimize(&second);
        assert_eq!(third, second);
    }
}

#[test]
fn test_optimize_fixture() {
    assert_eq!(
        optimize(CHECK_CIRCLE),
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<svg width="24" height="24" viewBox="0 0 24 24">"#,
            r##"<circle cx="12" cy="12" r="10" stroke="#1f2937" stroke-width="2"/>"##,
            r##"<path d="M8 12l3 3 5-6" stroke="#1f2937" stroke-width="2"/>"##,
            r##"<circle cx="12" cy="12" r="1" fill="#1f2937"/>"##,
            "</svg>"
        )
    );
}

#[test]
fn test_emit_is_deterministic() {
    let doc = extract(BANNER).unwrap();
    for framework in Framework::ALL {
        for (typescript, props) in [(true, true), (true, false), (false, true), (false, false)] {
            let opts = GenerationOptions::new()
                .with_name("Banner")
                .with_framework(framework)
                .with_typescript(typescript)
                .with_props(props);
            assert_eq!(emit(&doc, &opts), emit(&doc, &opts));
        }
    }
}

#[test]
fn test_scenario_react_full_featured() {
    let options = GenerationOptions::new()
        .with_name("Logo")
        .with_framework(Framework::React)
        .with_typescript(true)
        .with_props(true);
    let component = generate(LOGO, &options).unwrap();

    assert!(component.code.contains("interface LogoProps {"));
    assert!(component.code.contains(r#"viewBox="0 0 32 32""#));
    assert!(component.code.contains(r#"<path fill={fill} d="M0 0h32v32H0z"/>"#));
    assert!(!component.code.contains(r##"fill="#000""##));
    assert_eq!(component.filename, "Logo.tsx");
    assert_eq!(component.language, Language::Tsx);
}

#[test]
fn test_scenario_without_props() {
    let options = GenerationOptions::new().with_name("Logo").with_props(false);
    let component = generate(LOGO, &options).unwrap();

    assert!(!component.code.contains("LogoProps"));
    assert!(!component.code.contains("interface"));
    assert!(component.code.contains(r##"<path fill="#000" d="M0 0h32v32H0z"/>"##));
}

#[test]
fn test_scenario_unsupported_framework() {
    assert_eq!(
        "angular".parse::<Framework>(),
        Err(UnsupportedFramework("angular".to_string()))
    );
    assert!(Settings::from_str("[component]\nframework = \"angular\"").is_err());
}

#[test]
fn test_blind_substitution_reaches_nested_groups() {
    let options = GenerationOptions::new().with_name("Banner");
    let code = generate(BANNER, &options).unwrap().code;

    assert!(code.contains("<g fill={fill} stroke={stroke}>"));
    assert!(code.contains(r#"<text x="60" y="24" fill={fill} text-anchor="middle">Hello</text>"#));
    assert!(code.contains(r#"width = size || "100%","#));
}

#[test]
fn test_optimizer_removal_precedes_binding() {
    let options = GenerationOptions::new().with_framework(Framework::Svelte);

    let optimized = generate(BANNER, &options).unwrap().code;
    assert!(!optimized.contains("stroke-width={strokeWidth}"));

    let config = GenerateConfig::new().with_options(options).with_optimize(false);
    let verbatim = generate_with_config(BANNER, config).unwrap().code;
    assert!(verbatim.contains("stroke-width={strokeWidth}"));
}

#[test]
fn test_generate_reports_malformed_input() {
    let err = generate(NOT_SVG, &GenerationOptions::new()).unwrap_err();
    let report = err.format(&optimize(NOT_SVG), "not-svg.html");
    assert!(report.contains("no <svg> root element found"));
}

#[test]
fn test_png_export_of_prepared_source() {
    let source = prepare_source(CHECK_CIRCLE, true);
    let png = render_png(&source, 512, 512).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    let url = png_data_url(&source).unwrap();
    assert!(url.starts_with("data:image/png;base64,"));
}

#[test]
fn test_png_export_rejects_broken_markup() {
    assert!(render_png("<svg><g></svg>", 512, 512).is_err());
}

#[test]
fn test_export_names_follow_component_name() {
    assert_eq!(export_file_stem("CheckCircle"), "checkcircle");
}
