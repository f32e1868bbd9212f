use std::path::PathBuf;

use deckgen::{
    ContentFile, ContentDocument,
    model::{Placeholders, SlideSpec},
};

fn deckgen_exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_deckgen")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "deckgen.exe"
            } else {
                "deckgen"
            });
            p
        })
}

#[test]
fn cli_html_writes_slideshow() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let content_path = dir.join("content.json");
    let out_path = dir.join("out.html");
    let _ = std::fs::remove_file(&out_path);

    let doc = ContentDocument {
        title: "Smoke".to_string(),
        subtitle: "cli".to_string(),
        author: "tests".to_string(),
        slides: vec![SlideSpec {
            slide_number: 1,
            layout_id: 1,
            placeholders: Placeholders {
                title: Some("Smoke".to_string()),
                subtitle: Some("cli".to_string()),
                ..Placeholders::default()
            },
            custom_elements: vec![],
        }],
    };
    let f = std::fs::File::create(&content_path).unwrap();
    serde_json::to_writer_pretty(f, &ContentFile { presentation: doc }).unwrap();

    let content_arg = content_path.to_string_lossy().to_string();
    let out_arg = out_path.to_string_lossy().to_string();

    let status = std::process::Command::new(deckgen_exe())
        .args(["html", "--content", content_arg.as_str(), "--out"])
        .arg(out_arg.as_str())
        .status()
        .unwrap();

    assert!(status.success());
    assert!(out_path.exists());
    let html = std::fs::read_to_string(&out_path).unwrap();
    assert!(html.contains("Smoke"));
}

#[test]
fn cli_deck_writes_pptx() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let content_path = dir.join("deck_content.json");
    let out_path = dir.join("out.pptx");
    let _ = std::fs::remove_file(&out_path);

    let doc = ContentDocument {
        title: "Smoke".to_string(),
        subtitle: String::new(),
        author: "tests".to_string(),
        slides: vec![SlideSpec {
            slide_number: 1,
            layout_id: 1,
            placeholders: Placeholders {
                title: Some("Smoke".to_string()),
                ..Placeholders::default()
            },
            custom_elements: vec![],
        }],
    };
    let f = std::fs::File::create(&content_path).unwrap();
    serde_json::to_writer_pretty(f, &ContentFile { presentation: doc }).unwrap();

    let content_arg = content_path.to_string_lossy().to_string();
    let out_arg = out_path.to_string_lossy().to_string();

    let status = std::process::Command::new(deckgen_exe())
        .args(["deck", "--content", content_arg.as_str(), "--out"])
        .arg(out_arg.as_str())
        .status()
        .unwrap();

    assert!(status.success());
    assert!(out_path.exists());
}

#[test]
fn cli_missing_content_fails() {
    let status = std::process::Command::new(deckgen_exe())
        .args(["html", "--content", "no_such_file.json", "--out"])
        .arg("target/cli_smoke/never.html")
        .status()
        .unwrap();
    assert!(!status.success());
}
