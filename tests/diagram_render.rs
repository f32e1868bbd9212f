use deckgen::{ArchitectureSpec, export::render_png};

#[test]
fn default_diagram_renders_svg_and_png_at_canvas_size() {
    let spec = ArchitectureSpec::default();
    let markup = spec.to_svg().to_string();
    assert!(markup.contains(r#"viewBox="0 0 1920 1080""#));

    let dir = tempfile::tempdir().unwrap();
    let svg_out = dir.path().join("system_architecture.svg");
    let png_out = dir.path().join("system_architecture.png");

    std::fs::write(&svg_out, &markup).unwrap();
    render_png(&png_out, &markup).unwrap();

    assert!(svg_out.exists());
    let (w, h) = image::image_dimensions(&png_out).unwrap();
    assert_eq!((w, h), (1920, 1080));
}

#[test]
fn custom_spec_round_trips_through_json_and_renders() {
    let raw = r#"{
        "zones": [{
            "label": "EDGE",
            "origin": {"x": 100.0, "y": 100.0},
            "size": {"width": 600.0, "height": 700.0},
            "nodes": [
                {"label": "Gateway", "kind": "service", "origin": {"x": 80.0, "y": 120.0}}
            ]
        }],
        "links": [{
            "from": {"x": 700.0, "y": 450.0},
            "to": {"x": 900.0, "y": 450.0}
        }]
    }"#;
    let spec: ArchitectureSpec = serde_json::from_str(raw).unwrap();
    let markup = spec.to_svg().to_string();
    assert!(markup.contains("EDGE"));
    assert!(markup.contains("Gateway"));
    assert_eq!(markup.matches("<line ").count(), 1);

    let dir = tempfile::tempdir().unwrap();
    let png_out = dir.path().join("edge.png");
    render_png(&png_out, &markup).unwrap();
    assert!(png_out.exists());
}

#[test]
fn invalid_svg_markup_is_a_render_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = render_png(&dir.path().join("bad.png"), "<svg").unwrap_err();
    assert!(err.to_string().contains("render error"));
}
